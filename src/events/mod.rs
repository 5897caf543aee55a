//! Event browsing: normalization, filtering, feeds and card views.
//!
//! Rows arrive already fetched. They are normalized once into `Event`,
//! then filtered and ranked in memory.

pub mod card;
pub mod criteria;
pub mod feed;
pub mod filter;
pub mod record;

pub use card::{EventCard, PriceTag};
pub use criteria::{CategoryFilter, FilterCriteria, ModeFilter, PriceFilter};
pub use feed::{featured, recommended, sort, trending, upcoming, SortOrder};
pub use filter::{filter, filter_refs, EventPredicate};
pub use record::{normalize_all, Event, EventRow, Mode};
