// SPDX-License-Identifier: MPL-2.0
//! Gallery component: search box, result grid and selection.

use super::card;
use super::state::{Completion, Phase, RequestId, SearchRequest, SearchState};
use crate::archive::{ImageData, ImageResult};
use crate::error::{AssetError, SearchError};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{layout, palette, sizing, spacing, typography};
use crate::ui::image_viewer::ViewerHandoff;
use crate::ui::styles;
use crate::ui::widgets::{animated_spinner, AnimatedSpinner};
use iced::widget::{button, container, responsive, scrollable, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length};
use std::collections::HashMap;

/// Id of the search input, focused when the gallery opens.
pub const SEARCH_INPUT_ID: &str = "gallery-search-input";

/// Content shown under the search bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    Blank,
    Spinner,
    NoResults,
    Grid,
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    SubmitSearch,
    SearchCompleted {
        request: RequestId,
        result: Result<Vec<ImageResult>, SearchError>,
    },
    ThumbnailLoaded {
        id: String,
        result: Result<ImageData, AssetError>,
    },
    /// A card was activated; carries the result id.
    ImageSelected(String),
}

/// Side effects the application should perform after handling a gallery message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Search(SearchRequest),
    /// `(id, url)` pairs to download.
    FetchThumbnails(Vec<(String, String)>),
    OpenViewer(ViewerHandoff),
    ShowErrorNotification {
        key: &'static str,
    },
}

/// Download state of one card's thumbnail.
#[derive(Debug, Clone)]
pub enum Thumbnail {
    Loading,
    Ready(iced::widget::image::Handle),
    /// Shown as the placeholder.
    Failed,
}

#[derive(Debug, Default)]
pub struct State {
    search: SearchState,
    thumbnails: HashMap<String, Thumbnail>,
    spinner_rotation: f32,
}

impl State {
    #[must_use]
    pub fn new(initial_query: impl Into<String>) -> Self {
        Self {
            search: SearchState::new(initial_query),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn search(&self) -> &SearchState {
        &self.search
    }

    #[must_use]
    pub fn thumbnail(&self, id: &str) -> Option<&Thumbnail> {
        self.thumbnails.get(id)
    }

    /// Issues the initial search the first time the gallery is shown.
    ///
    /// Later calls do nothing, so returning to the gallery keeps its results.
    pub fn mount(&mut self) -> Effect {
        if self.search.phase() != Phase::Idle || self.search.latest_request().is_some() {
            return Effect::None;
        }
        self.submit()
    }

    /// Advances the loading spinner. Returns whether anything animated.
    pub fn tick(&mut self) -> bool {
        if self.search.is_loading() {
            self.spinner_rotation = animated_spinner::advance(self.spinner_rotation);
            true
        } else {
            false
        }
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::QueryChanged(query) => {
                self.search.set_query(query);
                Effect::None
            }
            Message::SubmitSearch => self.submit(),
            Message::SearchCompleted { request, result } => self.on_search_completed(request, result),
            Message::ThumbnailLoaded { id, result } => {
                self.on_thumbnail_loaded(id, result);
                Effect::None
            }
            Message::ImageSelected(id) => match self.search.find(&id) {
                Some(result) => Effect::OpenViewer(ViewerHandoff::from(result)),
                None => {
                    tracing::debug!(id, "selected image is no longer in the result set");
                    Effect::None
                }
            },
        }
    }

    fn submit(&mut self) -> Effect {
        match self.search.begin_search() {
            Some(request) => Effect::Search(request),
            None => Effect::None,
        }
    }

    fn on_search_completed(
        &mut self,
        request: RequestId,
        result: Result<Vec<ImageResult>, SearchError>,
    ) -> Effect {
        match self.search.complete(request, result) {
            Completion::Stale => {
                tracing::debug!(request = request.value(), "discarding stale search response");
                Effect::None
            }
            Completion::Empty => {
                self.thumbnails.clear();
                Effect::None
            }
            Completion::Loaded => {
                self.thumbnails.clear();
                let downloads: Vec<(String, String)> = self
                    .search
                    .results()
                    .iter()
                    .filter(|result| result.has_thumbnail())
                    .map(|result| (result.id.clone(), result.thumbnail_url.clone()))
                    .collect();
                for (id, _) in &downloads {
                    self.thumbnails.insert(id.clone(), Thumbnail::Loading);
                }
                if downloads.is_empty() {
                    Effect::None
                } else {
                    Effect::FetchThumbnails(downloads)
                }
            }
            Completion::Failed(err) => Effect::ShowErrorNotification {
                key: err.i18n_key(),
            },
        }
    }

    fn on_thumbnail_loaded(&mut self, id: String, result: Result<ImageData, AssetError>) {
        let Some(slot) = self.thumbnails.get_mut(&id) else {
            tracing::debug!(id, "ignoring thumbnail for a result no longer shown");
            return;
        };
        *slot = match result {
            Ok(data) => Thumbnail::Ready(data.handle),
            Err(err) => {
                tracing::debug!(id, error = %err, "thumbnail unavailable, keeping placeholder");
                Thumbnail::Failed
            }
        };
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let title = Text::new(i18n.tr("gallery-title")).size(typography::TITLE_LG);
        let subtitle = Text::new(i18n.tr("gallery-subtitle"))
            .size(typography::BODY)
            .color(palette::GRAY_200);

        let input = text_input(&i18n.tr("gallery-search-placeholder"), self.search.query())
            .id(SEARCH_INPUT_ID)
            .on_input(Message::QueryChanged)
            .on_submit(Message::SubmitSearch)
            .padding(spacing::XS)
            .size(typography::BODY)
            .width(Length::Fill);

        let submit = button(
            Text::new(i18n.tr("gallery-search-button"))
                .size(typography::BODY)
                .align_y(alignment::Vertical::Center),
        )
        .on_press(Message::SubmitSearch)
        .padding([spacing::XS, spacing::LG])
        .height(Length::Fixed(sizing::INPUT_HEIGHT))
        .style(styles::button::primary);

        let search_row = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(input)
            .push(submit);
        let search_row = Container::new(search_row)
            .width(Length::Fill)
            .max_width(sizing::SEARCH_MAX_WIDTH);

        let header = Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(title)
            .push(subtitle)
            .push(search_row);

        Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .push(header)
            .push(self.body(i18n))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// What the area below the search bar currently shows.
    #[must_use]
    pub fn body_kind(&self) -> Body {
        if self.search.is_loading() {
            return Body::Spinner;
        }

        match self.search.phase() {
            Phase::Idle => Body::Blank,
            Phase::Empty => Body::NoResults,
            Phase::Failed if self.search.results().is_empty() => Body::NoResults,
            Phase::Loaded | Phase::Failed | Phase::Loading => Body::Grid,
        }
    }

    fn body<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        match self.body_kind() {
            Body::Blank => centered(Text::new("").into()),
            Body::Spinner => centered(
                AnimatedSpinner::new(palette::ACCENT_400, self.spinner_rotation).into_element(),
            ),
            Body::NoResults => no_results(i18n),
            Body::Grid => self.grid(i18n),
        }
    }

    fn grid<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let results = self.search.results();
        responsive(move |size| {
            let columns = columns_for_width(size.width);
            let mut rows = Column::new().spacing(spacing::MD).width(Length::Fill);

            for chunk in results.chunks(columns) {
                let mut row = Row::new().spacing(spacing::MD).width(Length::Fill);
                for result in chunk {
                    row = row.push(
                        Container::new(card::view(result, self.thumbnail(&result.id), i18n))
                            .width(Length::FillPortion(1)),
                    );
                }
                // Pad the last row so cards keep the same width.
                for _ in chunk.len()..columns {
                    row = row.push(Container::new(Text::new("")).width(Length::FillPortion(1)));
                }
                rows = rows.push(row);
            }

            scrollable(container(rows).padding([0.0, spacing::XS]))
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        })
        .into()
    }
}

/// Number of grid columns for the available width.
#[must_use]
pub fn columns_for_width(width: f32) -> usize {
    if width < layout::SM {
        1
    } else if width < layout::MD {
        2
    } else if width < layout::LG {
        3
    } else {
        layout::MAX_COLUMNS
    }
}

fn no_results<'a>(i18n: &I18n) -> Element<'a, Message> {
    centered(
        Text::new(i18n.tr("gallery-no-results"))
            .size(typography::TITLE_SM)
            .color(palette::GRAY_200)
            .into(),
    )
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureCause;

    fn hit(id: &str, thumb: &str) -> ImageResult {
        ImageResult::new(id, format!("title {id}"), "desc", "2020-01-01T00:00:00Z", thumb)
    }

    fn loaded_state(results: Vec<ImageResult>) -> State {
        let mut state = State::new("moon");
        let Effect::Search(request) = state.mount() else {
            panic!("mount should search");
        };
        state.handle_message(Message::SearchCompleted {
            request: request.id,
            result: Ok(results),
        });
        state
    }

    #[test]
    fn mount_searches_once() {
        let mut state = State::new("nebula");
        match state.mount() {
            Effect::Search(request) => assert_eq!(request.query, "nebula"),
            other => panic!("unexpected effect {other:?}"),
        }
        assert_eq!(state.mount(), Effect::None);
    }

    #[test]
    fn blank_submit_issues_nothing() {
        let mut state = State::new("moon");
        state.handle_message(Message::QueryChanged("   ".into()));
        assert_eq!(state.handle_message(Message::SubmitSearch), Effect::None);
        assert_eq!(state.search().phase(), Phase::Idle);
    }

    #[test]
    fn loaded_results_request_thumbnails_with_urls_only() {
        let mut state = State::new("moon");
        let Effect::Search(request) = state.mount() else {
            panic!("mount should search");
        };
        let effect = state.handle_message(Message::SearchCompleted {
            request: request.id,
            result: Ok(vec![hit("a", "https://x/a.jpg"), hit("b", ""), hit("c", "https://x/c.jpg")]),
        });

        assert_eq!(
            effect,
            Effect::FetchThumbnails(vec![
                ("a".into(), "https://x/a.jpg".into()),
                ("c".into(), "https://x/c.jpg".into()),
            ])
        );
        assert!(matches!(state.thumbnail("a"), Some(Thumbnail::Loading)));
        assert!(state.thumbnail("b").is_none());
    }

    #[test]
    fn failure_raises_one_notification_and_keeps_results() {
        let mut state = loaded_state(vec![hit("a", "")]);
        let Effect::Search(request) = state.handle_message(Message::SubmitSearch) else {
            panic!("submit should search");
        };
        let effect = state.handle_message(Message::SearchCompleted {
            request: request.id,
            result: Err(SearchError::RequestFailed(FailureCause::Network("down".into()))),
        });

        assert_eq!(
            effect,
            Effect::ShowErrorNotification {
                key: "notification-search-failed"
            }
        );
        assert_eq!(state.search().results().len(), 1);
        assert!(!state.search().is_loading());
        assert_eq!(state.body_kind(), Body::Grid);
    }

    #[test]
    fn stale_failure_raises_nothing() {
        let mut state = State::new("moon");
        let Effect::Search(first) = state.mount() else {
            panic!("mount should search");
        };
        let Effect::Search(second) = state.handle_message(Message::SubmitSearch) else {
            panic!("submit should search");
        };

        let stale = state.handle_message(Message::SearchCompleted {
            request: first.id,
            result: Err(SearchError::RequestFailed(FailureCause::Status(502))),
        });
        assert_eq!(stale, Effect::None);
        assert!(state.search().is_loading());

        state.handle_message(Message::SearchCompleted {
            request: second.id,
            result: Ok(vec![hit("fresh", "")]),
        });
        assert_eq!(state.search().phase(), Phase::Loaded);
    }

    #[test]
    fn selecting_builds_handoff() {
        let mut state = loaded_state(vec![hit("PIA12345", "https://x/p.jpg")]);
        let effect = state.handle_message(Message::ImageSelected("PIA12345".into()));
        match effect {
            Effect::OpenViewer(handoff) => {
                assert_eq!(handoff.id, "PIA12345");
                assert_eq!(handoff.title, "title PIA12345");
                assert_eq!(handoff.image_url, "https://x/p.jpg");
            }
            other => panic!("unexpected effect {other:?}"),
        }
    }

    #[test]
    fn selecting_unknown_id_does_nothing() {
        let mut state = loaded_state(vec![hit("a", "")]);
        assert_eq!(state.handle_message(Message::ImageSelected("zzz".into())), Effect::None);
    }

    #[test]
    fn thumbnail_for_unknown_result_is_ignored() {
        let mut state = loaded_state(vec![hit("a", "https://x/a.jpg")]);
        state.handle_message(Message::ThumbnailLoaded {
            id: "gone".into(),
            result: Ok(ImageData::from_rgba(1, 1, vec![0, 0, 0, 255])),
        });
        assert!(state.thumbnail("gone").is_none());
    }

    #[test]
    fn thumbnail_results_update_cards() {
        let mut state = loaded_state(vec![hit("a", "https://x/a.jpg"), hit("b", "https://x/b.jpg")]);
        state.handle_message(Message::ThumbnailLoaded {
            id: "a".into(),
            result: Ok(ImageData::from_rgba(1, 1, vec![0, 0, 0, 255])),
        });
        state.handle_message(Message::ThumbnailLoaded {
            id: "b".into(),
            result: Err(AssetError::Decode("bad".into())),
        });
        assert!(matches!(state.thumbnail("a"), Some(Thumbnail::Ready(_))));
        assert!(matches!(state.thumbnail("b"), Some(Thumbnail::Failed)));
    }

    #[test]
    fn new_results_drop_old_thumbnails() {
        let mut state = loaded_state(vec![hit("a", "https://x/a.jpg")]);
        let Effect::Search(request) = state.handle_message(Message::SubmitSearch) else {
            panic!("submit should search");
        };
        state.handle_message(Message::SearchCompleted {
            request: request.id,
            result: Ok(Vec::new()),
        });
        assert!(state.thumbnail("a").is_none());
        assert_eq!(state.search().phase(), Phase::Empty);
    }

    #[test]
    fn spinner_only_animates_while_loading() {
        let mut state = State::new("moon");
        assert!(!state.tick());
        state.mount();
        assert!(state.tick());
    }

    #[test]
    fn column_breakpoints() {
        assert_eq!(columns_for_width(320.0), 1);
        assert_eq!(columns_for_width(640.0), 2);
        assert_eq!(columns_for_width(1023.0), 2);
        assert_eq!(columns_for_width(1024.0), 3);
        assert_eq!(columns_for_width(1280.0), 4);
        assert_eq!(columns_for_width(4000.0), 4);
    }
}
