// SPDX-License-Identifier: MPL-2.0
//! Payload passed from the gallery to the viewer on selection.

use crate::archive::ImageResult;

/// Everything the viewer needs to show one image, copied from the
/// selected search result. The viewer never looks the result up again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerHandoff {
    pub image_url: String,
    pub title: String,
    pub description: String,
    pub id: String,
}

impl From<&ImageResult> for ViewerHandoff {
    fn from(result: &ImageResult) -> Self {
        Self {
            image_url: result.thumbnail_url.clone(),
            title: result.title.clone(),
            description: result.description.clone(),
            id: result.id.clone(),
        }
    }
}

impl ViewerHandoff {
    #[must_use]
    pub fn has_image(&self) -> bool {
        !self.image_url.trim().is_empty()
    }

    #[must_use]
    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn andromeda() -> ImageResult {
        ImageResult::new(
            "PIA12345",
            "Andromeda Galaxy",
            "Our nearest large neighbor.",
            "2009-09-24T18:00:22Z",
            "https://images-assets.nasa.gov/image/PIA12345/PIA12345~thumb.jpg",
        )
    }

    #[test]
    fn copies_fields_from_result() {
        let handoff = ViewerHandoff::from(&andromeda());
        assert_eq!(handoff.id, "PIA12345");
        assert_eq!(handoff.title, "Andromeda Galaxy");
        assert_eq!(handoff.description, "Our nearest large neighbor.");
        assert_eq!(
            handoff.image_url,
            "https://images-assets.nasa.gov/image/PIA12345/PIA12345~thumb.jpg"
        );
    }

    #[test]
    fn building_twice_gives_equal_payloads() {
        let result = andromeda();
        assert_eq!(ViewerHandoff::from(&result), ViewerHandoff::from(&result));
    }

    #[test]
    fn empty_thumbnail_passes_through() {
        let result = ImageResult::new("X1", "No preview", "", "", "");
        let handoff = ViewerHandoff::from(&result);
        assert_eq!(handoff.image_url, "");
        assert!(!handoff.has_image());
        assert!(!handoff.has_description());
    }

    #[test]
    fn only_an_empty_description_is_hidden() {
        let result = ImageResult::new("X2", "Blank", "  ", "", "");
        assert!(ViewerHandoff::from(&result).has_description());
    }
}
