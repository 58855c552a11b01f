//! Event types for the agenda calendar.
//!
//! These are plain value objects: the form layer builds them from user
//! input, the persistence layer moves them as JSON, and the core logic
//! (recurrence expansion, overlap detection) consumes them without mutating
//! anything. `date` and the time fields stay in their textual canonical
//! forms (`YYYY-MM-DD`, `HH:MM`) because that text is the contract with the
//! web client; parsing happens at the point of use.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How often an event repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// Recurrence rule attached to every event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repeat {
    #[serde(rename = "type")]
    pub repeat_type: RepeatType,
    /// Step count between occurrences. The expander treats 0 as 1.
    pub interval: u32,
    /// Last day an occurrence may fall on (`YYYY-MM-DD`). Without it,
    /// expansion stops at the fixed horizon instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl Repeat {
    /// The rule for a one-off event.
    pub fn none() -> Self {
        Repeat {
            repeat_type: RepeatType::None,
            interval: 0,
            end_date: None,
        }
    }
}

/// A calendar event.
///
/// Covers both the persisted event and the in-progress editor form: a form
/// has no `id` yet, a saved event always does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Present once the event has been persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    /// Calendar date in `YYYY-MM-DD` form.
    pub date: String,
    /// Local time of day in 24-hour `HH:MM` form.
    pub start_time: String,
    pub end_time: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub repeat: Repeat,
    /// Minutes before `start_time` to surface a notification.
    pub notification_time: i64,
}

impl Event {
    /// Copy of this event on a different date.
    ///
    /// All other fields (id included) carry over unchanged; recurrence
    /// occurrences are built this way.
    pub fn on_date(&self, date: String) -> Event {
        Event {
            date,
            ..self.clone()
        }
    }

    /// Assign a fresh id, turning an editor form into a persisted event.
    pub fn into_saved(mut self) -> Event {
        self.id = Some(Uuid::new_v4().to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_form() -> Event {
        Event {
            id: None,
            title: "Team sync".to_string(),
            date: "2025-07-01".to_string(),
            start_time: "10:00".to_string(),
            end_time: "10:30".to_string(),
            description: "Weekly catch-up".to_string(),
            location: "Room 2".to_string(),
            category: "Work".to_string(),
            repeat: Repeat::none(),
            notification_time: 10,
        }
    }

    #[test]
    fn test_deserialize_client_json() {
        let json = r#"{
            "id": "1",
            "title": "Team sync",
            "date": "2025-07-01",
            "startTime": "10:00",
            "endTime": "10:30",
            "description": "",
            "location": "",
            "category": "Work",
            "repeat": { "type": "weekly", "interval": 2, "endDate": "2025-09-30" },
            "notificationTime": 15
        }"#;

        let event: Event = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(event.id.as_deref(), Some("1"));
        assert_eq!(event.start_time, "10:00");
        assert_eq!(event.repeat.repeat_type, RepeatType::Weekly);
        assert_eq!(event.repeat.interval, 2);
        assert_eq!(event.repeat.end_date.as_deref(), Some("2025-09-30"));
        assert_eq!(event.notification_time, 15);
    }

    #[test]
    fn test_form_serializes_without_id_key() {
        let json = serde_json::to_string(&make_form()).expect("Should serialize");
        assert!(
            !json.contains("\"id\""),
            "Form without id must not emit an id key: {}",
            json
        );
        assert!(json.contains("\"startTime\":\"10:00\""));
        assert!(json.contains("\"type\":\"none\""));
    }

    #[test]
    fn test_serde_roundtrip() {
        let event = make_form().into_saved();
        let json = serde_json::to_string(&event).expect("Should serialize");
        let back: Event = serde_json::from_str(&json).expect("Should deserialize");
        assert_eq!(back, event);
    }

    #[test]
    fn test_repeat_without_end_date_deserializes() {
        let repeat: Repeat =
            serde_json::from_str(r#"{ "type": "daily", "interval": 1 }"#).expect("Should parse");
        assert_eq!(repeat.repeat_type, RepeatType::Daily);
        assert_eq!(repeat.end_date, None);
    }

    #[test]
    fn test_on_date_replaces_only_the_date() {
        let event = make_form().into_saved();
        let moved = event.on_date("2025-07-08".to_string());
        assert_eq!(moved.date, "2025-07-08");
        assert_eq!(moved.id, event.id);
        assert_eq!(moved.title, event.title);
        assert_eq!(moved.start_time, event.start_time);
        assert_eq!(moved.repeat, event.repeat);
    }

    #[test]
    fn test_into_saved_assigns_an_id() {
        let saved = make_form().into_saved();
        assert!(saved.id.is_some(), "Saving must assign an id");
    }
}
