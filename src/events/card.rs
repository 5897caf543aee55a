//! Display view of an event: every field resolved to what a card shows.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use super::record::{Event, Mode};

const TBA: &str = "TBA";
const UNKNOWN_ORGANIZER: &str = "Unknown";
const DEFAULT_MAX_ATTENDEES: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PriceTag {
    Free,
    Amount(f64),
}

impl fmt::Display for PriceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free => f.write_str("Free"),
            Self::Amount(amount) => write!(f, "{amount}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventCard {
    pub id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub mode: Mode,
    pub category: String,
    pub organizer: String,
    pub is_verified: bool,
    pub price: PriceTag,
    pub attendees: u32,
    pub max_attendees: u32,
}

/// "Oct 19, 2026", or "TBA" for an unknown date.
pub fn date_label(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%b %-d, %Y").to_string(),
        None => TBA.to_string(),
    }
}

fn or_default(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

impl From<&Event> for EventCard {
    fn from(event: &Event) -> Self {
        let organizer = [event.college.as_str(), event.source_name.as_str()]
            .into_iter()
            .find(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_ORGANIZER);
        // Unrecognized modes are shown as offline.
        let mode = if event.mode.is_known() {
            event.mode.clone()
        } else {
            Mode::Offline
        };
        let price = if event.is_free() {
            PriceTag::Free
        } else {
            PriceTag::Amount(event.price.unwrap_or(0.0))
        };

        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            date: date_label(event.date),
            time: or_default(&event.time, TBA),
            location: or_default(&event.location, TBA),
            mode,
            category: event.category.clone(),
            organizer: organizer.to_string(),
            is_verified: event.is_verified,
            price,
            attendees: event.current_attendees,
            max_attendees: event.max_attendees.unwrap_or(DEFAULT_MAX_ATTENDEES),
        }
    }
}

impl fmt::Display for EventCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} {} | {} ({}) | {} | {} | {}/{}",
            self.title,
            self.date,
            self.time,
            self.location,
            self.mode,
            self.organizer,
            self.price,
            self.attendees,
            self.max_attendees
        )?;
        if self.is_verified {
            f.write_str(" ✓")?;
        }
        Ok(())
    }
}
