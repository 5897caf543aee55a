//! Leaderboard: participation-point rankings with an optional college filter.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_LEADERBOARD_LIMIT: usize = 50;

/// A user profile row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub college: Option<String>,
    #[serde(default)]
    pub participation_points: u32,
    #[serde(default)]
    pub events_attended: u32,
    #[serde(default)]
    pub events_won: u32,
    #[serde(default)]
    pub certificates_earned: u32,
    #[serde(default)]
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CollegeFilter {
    #[default]
    All,
    Only(String),
}

impl CollegeFilter {
    /// `None` or "all" mean no filtering.
    pub fn from_option(college: Option<&str>) -> Self {
        match college {
            None | Some("all") => Self::All,
            Some(name) => Self::Only(name.to_string()),
        }
    }

    fn admits(&self, profile: &Profile) -> bool {
        match self {
            Self::All => true,
            Self::Only(name) => profile.college.as_deref() == Some(name.as_str()),
        }
    }
}

/// Podium marker for a ranking position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBadge {
    Trophy,
    Medal,
    Award,
    Position(usize),
}

impl RankBadge {
    pub fn for_position(position: usize) -> Self {
        match position {
            1 => Self::Trophy,
            2 => Self::Medal,
            3 => Self::Award,
            n => Self::Position(n),
        }
    }
}

impl fmt::Display for RankBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trophy => f.write_str("🏆"),
            Self::Medal => f.write_str("🥈"),
            Self::Award => f.write_str("🥉"),
            Self::Position(n) => write!(f, "#{n}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry<'p> {
    /// 1-based.
    pub position: usize,
    pub badge: RankBadge,
    pub profile: &'p Profile,
}

/// Rank profiles by points, highest first. Ties keep input order.
pub fn rank<'p>(
    profiles: &'p [Profile],
    college: &CollegeFilter,
    limit: usize,
) -> Vec<RankedEntry<'p>> {
    let mut admitted: Vec<&Profile> = profiles.iter().filter(|p| college.admits(p)).collect();
    admitted.sort_by(|a, b| b.participation_points.cmp(&a.participation_points));
    admitted
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, profile)| RankedEntry {
            position: i + 1,
            badge: RankBadge::for_position(i + 1),
            profile,
        })
        .collect()
}

/// Distinct non-empty colleges, first-seen order.
pub fn colleges(profiles: &[Profile]) -> Vec<String> {
    let mut seen = HashSet::new();
    profiles
        .iter()
        .filter_map(|p| p.college.as_deref())
        .filter(|c| !c.is_empty())
        .filter(|c| seen.insert(*c))
        .map(String::from)
        .collect()
}

/// Avatar letter: uppercase first character of the name, or "?".
pub fn initial(display_name: Option<&str>) -> String {
    display_name
        .and_then(|name| name.chars().next())
        .map_or_else(|| "?".to_string(), |c| c.to_uppercase().collect())
}
