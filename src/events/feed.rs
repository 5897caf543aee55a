//! Ranked event feeds: upcoming, featured, trending and recommended.
//!
//! All sorts are stable, so events that tie keep their fetched order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::record::Event;
use crate::error::BrainyError;

pub const DEFAULT_FEATURED_LIMIT: usize = 4;
pub const DEFAULT_TRENDING_LIMIT: usize = 6;
pub const DEFAULT_RECOMMENDED_LIMIT: usize = 4;

/// Sort choices on the explore page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Earliest date first; undated events last.
    #[default]
    Soonest,
    /// Highest view count first.
    MostPopular,
}

impl FromStr for SortOrder {
    type Err = BrainyError;

    /// The page's option values, matched exactly like every other label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(Self::Soonest),
            "popularity" => Ok(Self::MostPopular),
            other => Err(BrainyError::invalid_criterion("sort", other)),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Soonest => "Date (Soonest)",
            Self::MostPopular => "Most Popular",
        })
    }
}

fn by_date(a: &Event, b: &Event) -> Ordering {
    match (a.date, b.date) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn by_views_desc(a: &Event, b: &Event) -> Ordering {
    b.view_count.cmp(&a.view_count)
}

/// Sort events in place.
pub fn sort(events: &mut [Event], order: SortOrder) {
    match order {
        SortOrder::Soonest => events.sort_by(by_date),
        SortOrder::MostPopular => events.sort_by(by_views_desc),
    }
}

/// Events that are not completed, soonest first.
pub fn upcoming(events: &[Event]) -> Vec<Event> {
    let mut open: Vec<Event> = events.iter().filter(|e| !e.is_completed).cloned().collect();
    sort(&mut open, SortOrder::Soonest);
    open
}

/// The first few upcoming events.
pub fn featured(events: &[Event], limit: usize) -> Vec<Event> {
    let mut list = upcoming(events);
    list.truncate(limit);
    list
}

/// Most-viewed events, completed or not.
pub fn trending(events: &[Event], limit: usize) -> Vec<Event> {
    let mut list = events.to_vec();
    sort(&mut list, SortOrder::MostPopular);
    list.truncate(limit);
    list
}

/// Most-viewed upcoming events in the user's interest categories.
///
/// An empty interest list recommends across every category.
pub fn recommended(events: &[Event], interests: &[String], limit: usize) -> Vec<Event> {
    let mut list: Vec<Event> = events
        .iter()
        .filter(|e| !e.is_completed)
        .filter(|e| interests.is_empty() || interests.iter().any(|i| *i == e.category))
        .cloned()
        .collect();
    sort(&mut list, SortOrder::MostPopular);
    list.truncate(limit);
    list
}
