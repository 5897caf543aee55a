//! Event filter engine: conjunction of per-dimension predicates.
//!
//! A single pass over the already-fetched events. Output keeps input order.

use tracing::debug;

use super::criteria::{CategoryFilter, FilterCriteria, ModeFilter, PriceFilter};
use super::record::Event;

/// A pure test over one event.
pub trait EventPredicate {
    fn matches(&self, event: &Event) -> bool;
}

/// Free-text query over title, college and location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextQuery {
    lowered: String,
}

impl TextQuery {
    pub fn new(query: &str) -> Self {
        Self {
            lowered: query.to_lowercase(),
        }
    }
}

impl EventPredicate for TextQuery {
    fn matches(&self, event: &Event) -> bool {
        if self.lowered.is_empty() {
            return true;
        }
        [&event.title, &event.college, &event.location]
            .iter()
            .any(|field| field.to_lowercase().contains(&self.lowered))
    }
}

impl EventPredicate for CategoryFilter {
    fn matches(&self, event: &Event) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => event.category == *category,
        }
    }
}

impl EventPredicate for ModeFilter {
    fn matches(&self, event: &Event) -> bool {
        match self {
            Self::All => true,
            Self::Only(mode) => event.mode == *mode,
        }
    }
}

impl EventPredicate for PriceFilter {
    fn matches(&self, event: &Event) -> bool {
        match self {
            Self::All => true,
            Self::Free => event.is_free(),
            Self::Paid => event.is_paid(),
        }
    }
}

/// Criteria compiled once per filter call.
struct Compiled<'a> {
    text: TextQuery,
    criteria: &'a FilterCriteria,
}

impl<'a> Compiled<'a> {
    fn new(criteria: &'a FilterCriteria) -> Self {
        Self {
            text: TextQuery::new(&criteria.query),
            criteria,
        }
    }

    fn predicates(&self) -> [&dyn EventPredicate; 4] {
        [
            &self.text,
            &self.criteria.category,
            &self.criteria.mode,
            &self.criteria.price,
        ]
    }
}

impl EventPredicate for Compiled<'_> {
    fn matches(&self, event: &Event) -> bool {
        self.predicates().iter().all(|p| p.matches(event))
    }
}

impl EventPredicate for FilterCriteria {
    fn matches(&self, event: &Event) -> bool {
        Compiled::new(self).matches(event)
    }
}

/// Borrowing filter: the events that pass every criterion, in input order.
pub fn filter_refs<'e>(events: &'e [Event], criteria: &FilterCriteria) -> Vec<&'e Event> {
    let compiled = Compiled::new(criteria);
    let kept: Vec<&Event> = events.iter().filter(|e| compiled.matches(e)).collect();
    debug!(total = events.len(), kept = kept.len(), "filtered events");
    kept
}

/// Owning filter: clones the passing events, in input order.
pub fn filter(events: &[Event], criteria: &FilterCriteria) -> Vec<Event> {
    filter_refs(events, criteria).into_iter().cloned().collect()
}
