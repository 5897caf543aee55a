//! Event rows as fetched, and the canonical record they normalize into.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Attendance mode of an event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mode {
    Online,
    Offline,
    Hybrid,
    /// Any raw value that is not one of the lowercase tokens, kept verbatim.
    /// An absent mode is `Other("")`.
    Other(String),
}

impl Mode {
    /// Parse a raw backend token. Only exact lowercase tokens are recognized.
    pub fn from_token(token: &str) -> Self {
        match token {
            "online" => Self::Online,
            "offline" => Self::Offline,
            "hybrid" => Self::Hybrid,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Hybrid => "hybrid",
            Self::Other(raw) => raw,
        }
    }

    /// Whether this is one of the three known modes.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for Mode {
    fn from(raw: String) -> Self {
        Self::from_token(&raw)
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw `events` row. Only `title` is guaranteed by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventRow {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub college: Option<String>,
    #[serde(default)]
    pub source_name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_verified: Option<bool>,
    #[serde(default)]
    pub is_completed: Option<bool>,
    #[serde(default)]
    pub view_count: Option<u64>,
    #[serde(default)]
    pub current_attendees: Option<u32>,
    #[serde(default)]
    pub max_attendees: Option<u32>,
}

/// A fully-populated event. Built once from a row; every filter and view
/// works on this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub category: String,
    pub mode: Mode,
    /// `None` when the row carried no price.
    pub price: Option<f64>,
    pub location: String,
    pub college: String,
    pub source_name: String,
    pub date: Option<NaiveDate>,
    pub time: String,
    pub image_url: String,
    pub is_verified: bool,
    pub is_completed: bool,
    pub view_count: u64,
    pub current_attendees: u32,
    pub max_attendees: Option<u32>,
}

impl Event {
    /// Free means no price at all, or a price of exactly zero.
    pub fn is_free(&self) -> bool {
        match self.price {
            None => true,
            Some(p) => p == 0.0,
        }
    }

    /// Paid means a price strictly above zero.
    pub fn is_paid(&self) -> bool {
        self.price.is_some_and(|p| p > 0.0)
    }
}

/// Parse `YYYY-MM-DD`, an RFC 3339 timestamp, or a naive `YYYY-MM-DDTHH:MM:SS`.
pub fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|ts| ts.date())
}

impl EventRow {
    /// Minimal row with just a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Fill every optional field with its canonical default.
    pub fn normalize(self) -> Event {
        let date = self.date.as_deref().and_then(|raw| {
            let parsed = parse_event_date(raw);
            if parsed.is_none() && !raw.trim().is_empty() {
                warn!(title = %self.title, date = raw, "unparseable event date");
            }
            parsed
        });

        Event {
            id: self.id.unwrap_or_default(),
            title: self.title,
            category: self.category.unwrap_or_default(),
            mode: Mode::from_token(self.mode.as_deref().unwrap_or_default()),
            price: self.price,
            location: self.location.unwrap_or_default(),
            college: self.college.unwrap_or_default(),
            source_name: self.source_name.unwrap_or_default(),
            date,
            time: self.time.unwrap_or_default(),
            image_url: self.image_url.unwrap_or_default(),
            is_verified: self.is_verified.unwrap_or(false),
            is_completed: self.is_completed.unwrap_or(false),
            view_count: self.view_count.unwrap_or(0),
            current_attendees: self.current_attendees.unwrap_or(0),
            max_attendees: self.max_attendees,
        }
    }
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        row.normalize()
    }
}

/// Normalize a batch of rows, preserving order.
pub fn normalize_all(rows: impl IntoIterator<Item = EventRow>) -> Vec<Event> {
    rows.into_iter().map(EventRow::normalize).collect()
}
