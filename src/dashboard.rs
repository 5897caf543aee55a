//! Dashboard: profile stats, the notification inbox and saved events.

use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::events::Event;
use crate::leaderboard::Profile;

pub const DEFAULT_NOTIFICATIONS_LIMIT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ProfileStats {
    pub events_attended: u32,
    pub certificates_earned: u32,
    pub events_won: u32,
    pub points: u32,
}

impl From<&Profile> for ProfileStats {
    fn from(profile: &Profile) -> Self {
        Self {
            events_attended: profile.events_attended,
            certificates_earned: profile.certificates_earned,
            events_won: profile.events_won,
            points: profile.participation_points,
        }
    }
}

/// Parse an RFC 3339 `created_at` value.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw.trim()).ok()
}

/// Newest instant first; unparseable timestamps sort last.
fn by_newest(a: &str, b: &str) -> Ordering {
    match (parse_timestamp(a), parse_timestamp(b)) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    /// RFC 3339 timestamp.
    #[serde(default)]
    pub created_at: String,
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.is_read).count()
}

/// Newest first, at most `limit`.
pub fn recent(notifications: &[Notification], limit: usize) -> Vec<&Notification> {
    let mut list: Vec<&Notification> = notifications.iter().collect();
    list.sort_by(|a, b| by_newest(&a.created_at, &b.created_at));
    list.truncate(limit);
    list
}

/// Mark one notification read. Returns false if the id is unknown.
pub fn mark_read(notifications: &mut [Notification], id: &str) -> bool {
    match notifications.iter_mut().find(|n| n.id == id) {
        Some(n) => {
            n.is_read = true;
            true
        }
        None => false,
    }
}

/// A saved event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub event_id: String,
    /// RFC 3339 timestamp.
    #[serde(default)]
    pub created_at: String,
}

/// The user's bookmarks, one per event, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bookmarks {
    entries: Vec<Bookmark>,
}

impl Bookmarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from fetched rows. Repeated event ids keep the first row.
    pub fn from_rows(rows: impl IntoIterator<Item = Bookmark>) -> Self {
        let mut bookmarks = Self::new();
        for row in rows {
            if !bookmarks.is_bookmarked(&row.event_id) {
                bookmarks.entries.push(row);
            }
        }
        bookmarks
    }

    pub fn is_bookmarked(&self, event_id: &str) -> bool {
        self.entries.iter().any(|b| b.event_id == event_id)
    }

    /// Add the bookmark if absent, remove it if present.
    /// Returns whether the event is bookmarked afterwards.
    pub fn toggle(&mut self, event_id: &str) -> bool {
        if let Some(pos) = self.entries.iter().position(|b| b.event_id == event_id) {
            self.entries.remove(pos);
            false
        } else {
            self.entries.push(Bookmark {
                event_id: event_id.to_string(),
                created_at: Utc::now().to_rfc3339(),
            });
            true
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bookmarks newest first. Equal timestamps put the later addition first.
    pub fn newest_first(&self) -> Vec<&Bookmark> {
        let mut list: Vec<&Bookmark> = self.entries.iter().rev().collect();
        list.sort_by(|a, b| by_newest(&a.created_at, &b.created_at));
        list
    }

    /// Saved events, newest bookmark first. Bookmarks whose event is not
    /// in `events` are skipped.
    pub fn saved_events<'e>(&self, events: &'e [Event]) -> Vec<&'e Event> {
        self.newest_first()
            .into_iter()
            .filter_map(|b| events.iter().find(|e| e.id == b.event_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventRow;

    fn note(id: &str, at: &str, read: bool) -> Notification {
        Notification {
            id: id.into(),
            title: format!("note {id}"),
            message: String::new(),
            is_read: read,
            created_at: at.into(),
        }
    }

    fn bookmark(event_id: &str, at: &str) -> Bookmark {
        Bookmark {
            event_id: event_id.into(),
            created_at: at.into(),
        }
    }

    fn event(id: &str) -> Event {
        EventRow {
            id: Some(id.into()),
            ..EventRow::titled(format!("event {id}"))
        }
        .normalize()
    }

    #[test]
    fn stats_from_profile() {
        let profile = Profile {
            participation_points: 85,
            events_attended: 6,
            events_won: 1,
            certificates_earned: 2,
            ..Profile::default()
        };
        let stats = ProfileStats::from(&profile);
        assert_eq!(stats.points, 85);
        assert_eq!(stats.events_attended, 6);
    }

    #[test]
    fn unread_and_mark_read() {
        let mut notes = vec![
            note("a", "2026-10-01T00:00:00Z", false),
            note("b", "2026-10-02T00:00:00Z", true),
            note("c", "2026-10-03T00:00:00Z", false),
        ];
        assert_eq!(unread_count(&notes), 2);
        assert!(mark_read(&mut notes, "a"));
        assert!(!mark_read(&mut notes, "zzz"));
        assert_eq!(unread_count(&notes), 1);
    }

    #[test]
    fn recent_is_newest_first() {
        let notes = vec![
            note("a", "2026-10-01T00:00:00Z", false),
            note("c", "2026-10-03T00:00:00Z", false),
            note("b", "2026-10-02T00:00:00Z", false),
        ];
        let ids: Vec<&str> = recent(&notes, 2).iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b"]);
    }

    #[test]
    fn recent_compares_instants_not_strings() {
        let notes = vec![
            // 09:00 UTC
            note("offset", "2026-10-01T14:30:00+05:30", false),
            // 10:00 UTC, but sorts lower as a string
            note("utc", "2026-10-01T10:00:00Z", false),
            // 09:30 UTC with fractional seconds
            note("fraction", "2026-10-01T09:30:00.250Z", false),
            note("garbage", "yesterday", false),
            note("blank", "", false),
        ];
        let ids: Vec<&str> = recent(&notes, 10).iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["utc", "fraction", "offset", "garbage", "blank"]);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut bookmarks = Bookmarks::new();
        assert!(!bookmarks.is_bookmarked("e1"));
        assert!(bookmarks.toggle("e1"));
        assert!(bookmarks.is_bookmarked("e1"));
        assert!(!bookmarks.toggle("e1"));
        assert!(!bookmarks.is_bookmarked("e1"));
        assert!(bookmarks.is_empty());
    }

    #[test]
    fn from_rows_drops_duplicate_events() {
        let bookmarks = Bookmarks::from_rows(vec![
            bookmark("e1", "2026-10-01T00:00:00Z"),
            bookmark("e1", "2026-10-05T00:00:00Z"),
            bookmark("e2", "2026-10-02T00:00:00Z"),
        ]);
        assert_eq!(bookmarks.len(), 2);
    }

    #[test]
    fn saved_events_newest_first() {
        let events = vec![event("e1"), event("e2"), event("e3")];
        let bookmarks = Bookmarks::from_rows(vec![
            bookmark("e1", "2026-10-01T00:00:00Z"),
            bookmark("e3", "2026-10-03T00:00:00Z"),
            bookmark("gone", "2026-10-09T00:00:00Z"),
            bookmark("e2", "2026-10-02T00:00:00Z"),
        ]);
        let ids: Vec<&str> = bookmarks
            .saved_events(&events)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["e3", "e2", "e1"]);
    }

    #[test]
    fn toggled_bookmark_is_newest() {
        let events = vec![event("old"), event("new")];
        let mut bookmarks = Bookmarks::from_rows(vec![bookmark("old", "2020-01-01T00:00:00Z")]);
        bookmarks.toggle("new");
        let ids: Vec<&str> = bookmarks
            .saved_events(&events)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["new", "old"]);
    }
}
