// SPDX-FileCopyrightText: 2026 Eventman Developers
//
// SPDX-License-Identifier: Apache-2.0

use eventman_client::{Event, EventApi, EventId};

use crate::prompt::Ui;

/// Loading state of the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    Loading,
    Ready,
}

/// The event-list view: the fetched sequence plus the per-item
/// delete-in-flight marker.
#[derive(Debug)]
pub struct ListView {
    state: ListState,
    events: Vec<Event>,
    deleting: Option<EventId>,
}

impl ListView {
    pub fn new() -> Self {
        Self {
            state: ListState::Loading,
            events: Vec::new(),
            deleting: None,
        }
    }

    pub fn state(&self) -> ListState {
        self.state
    }

    /// The held sequence, in backend order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The item whose delete call is in flight, if any.
    pub fn deleting(&self) -> Option<&EventId> {
        self.deleting.as_ref()
    }

    /// Fetches the full list. On failure the view becomes ready with an
    /// empty list after a failure notice.
    pub async fn load(&mut self, api: &EventApi, ui: &mut impl Ui) {
        tracing::debug!("loading events...");
        match api.list().await {
            Ok(events) => self.events = events,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load events");
                ui.notify_error(&format!("Failed to load events: {e}"));
                self.events.clear();
            }
        }
        self.state = ListState::Ready;
    }

    /// Deletes one event after confirmation, then re-fetches the whole
    /// list; no optimistic local removal. On failure the stale list
    /// stays and the busy marker clears.
    pub async fn delete(&mut self, api: &EventApi, ui: &mut impl Ui, id: &EventId) {
        if !ui.confirm("Are you sure you want to delete this event?") {
            tracing::info!(%id, "deletion not confirmed");
            return;
        }

        self.deleting = Some(id.clone());
        match api.delete(id).await {
            Ok(()) => self.load(api, ui).await,
            Err(e) => {
                tracing::warn!(%id, error = %e, "failed to delete event");
                ui.notify_error(&format!("Failed to delete event: {e}"));
            }
        }
        self.deleting = None;
    }
}

impl Default for ListView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::test_support::{RecordingUi, api_for, event_json};

    #[tokio::test]
    async fn test_load_preserves_backend_order() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/event_list_create"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                event_json("b2", "Retrospective"),
                event_json("a1", "Launch"),
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let api = api_for(&mock_server);
        let mut ui = RecordingUi::default();
        let mut view = ListView::new();
        assert_eq!(view.state(), ListState::Loading);

        view.load(&api, &mut ui).await;

        assert_eq!(view.state(), ListState::Ready);
        assert_eq!(view.events().len(), 2);
        assert_eq!(view.events()[0].id, "b2".into());
        assert_eq!(view.events()[1].id, "a1".into());
        assert!(ui.errors.is_empty());
    }

    #[tokio::test]
    async fn test_load_failure_leaves_empty_list_with_notice() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/event_list_create"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let api = api_for(&mock_server);
        let mut ui = RecordingUi::default();
        let mut view = ListView::new();

        view.load(&api, &mut ui).await;

        assert_eq!(view.state(), ListState::Ready);
        assert!(view.events().is_empty());
        assert_eq!(ui.errors.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_refetches_the_full_list() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/event_detail/a1/"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        // exactly one re-fetch after the successful delete
        Mock::given(method("GET"))
            .and(path("/event_list_create"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([event_json("b2", "Retrospective")])),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let api = api_for(&mock_server);
        let mut ui = RecordingUi::confirming(true);
        let mut view = ListView::new();

        view.delete(&api, &mut ui, &"a1".into()).await;

        assert_eq!(view.events().len(), 1);
        assert_eq!(view.events()[0].id, "b2".into());
        assert!(view.deleting().is_none());
        assert_eq!(ui.confirms.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_stale_list_and_clears_marker() {
        let mock_server = MockServer::start().await;

        // the single GET serves the initial load; zero re-fetches follow
        Mock::given(method("GET"))
            .and(path("/event_list_create"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                event_json("a1", "Launch"),
                event_json("b2", "Retrospective"),
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/event_detail/a1/"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;

        let api = api_for(&mock_server);
        let mut ui = RecordingUi::confirming(true);
        let mut view = ListView::new();
        view.load(&api, &mut ui).await;

        view.delete(&api, &mut ui, &"a1".into()).await;

        // the stale list is still displayed
        assert_eq!(view.events().len(), 2);
        assert!(view.deleting().is_none());
        assert_eq!(ui.errors.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_declined_is_a_no_op() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/event_detail/a1/"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&mock_server)
            .await;

        let api = api_for(&mock_server);
        let mut ui = RecordingUi::confirming(false);
        let mut view = ListView::new();

        view.delete(&api, &mut ui, &"a1".into()).await;

        assert!(view.deleting().is_none());
        assert!(ui.errors.is_empty());
    }
}
