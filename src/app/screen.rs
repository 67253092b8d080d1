// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration and navigation targets.

use crate::ui::image_viewer::ViewerHandoff;
use crate::ui::navbar::Section;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Gallery,
    Viewer,
}

impl Screen {
    /// Navbar section highlighted while this screen is shown.
    #[must_use]
    pub fn section(self) -> Section {
        match self {
            Screen::Home => Section::Home,
            Screen::Gallery | Screen::Viewer => Section::Gallery,
        }
    }
}

/// Where a navigation request leads.
///
/// The viewer route carries the selected result; `None` means the viewer
/// was reached without a selection and falls back to the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Gallery,
    Viewer(Option<ViewerHandoff>),
}

impl From<Section> for Route {
    fn from(section: Section) -> Self {
        match section {
            Section::Home => Route::Home,
            Section::Gallery => Route::Gallery,
        }
    }
}
