//! Team finder: search open teams, validate new team drafts and record join
//! requests.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{BrainyError, Result};

pub const DEFAULT_MAX_MEMBERS: u32 = 5;

/// A team row as fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub skills_needed: Vec<String>,
    #[serde(default = "default_max_members")]
    pub max_members: u32,
    #[serde(default)]
    pub member_count: u32,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_max_members() -> u32 {
    DEFAULT_MAX_MEMBERS
}

fn default_active() -> bool {
    true
}

impl Team {
    /// Case-insensitive match on title, description or any needed skill.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.title.to_lowercase().contains(&q)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&q))
            || self
                .skills_needed
                .iter()
                .any(|s| s.to_lowercase().contains(&q))
    }

    pub fn has_open_slot(&self) -> bool {
        self.member_count < self.max_members
    }
}

/// Teams matching the query, in input order. An empty query keeps all.
pub fn search<'t>(teams: &'t [Team], query: &str) -> Vec<&'t Team> {
    teams.iter().filter(|t| t.matches(query)).collect()
}

/// Active teams only, preserving order.
pub fn active(teams: &[Team]) -> Vec<&Team> {
    teams.iter().filter(|t| t.is_active).collect()
}

/// The create-team form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamDraft {
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    pub max_members: u32,
}

impl Default for TeamDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            skills: Vec::new(),
            max_members: DEFAULT_MAX_MEMBERS,
        }
    }
}

impl TeamDraft {
    /// Split a comma-separated skill list, dropping blanks.
    pub fn parse_skills(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            warn!("team draft rejected: missing title");
            return Err(BrainyError::validation("Title is required"));
        }
        if self.max_members == 0 {
            warn!(title = %self.title, "team draft rejected: zero capacity");
            return Err(BrainyError::validation("Max members must be at least 1"));
        }
        Ok(())
    }

    /// Validate and turn the draft into a new, empty, active team.
    pub fn into_team(self, id: impl Into<String>) -> Result<Team> {
        self.validate()?;
        Ok(Team {
            id: id.into(),
            title: self.title,
            description: Some(self.description).filter(|d| !d.is_empty()),
            skills_needed: self.skills,
            max_members: self.max_members,
            member_count: 0,
            is_active: true,
            created_at: None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

/// A `team_members` row: one user's request to join one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinRequest {
    pub team_id: String,
    pub user_id: String,
    #[serde(default)]
    pub status: JoinStatus,
}

/// Record a pending join request. A user may hold one request per team.
pub fn request_join<'r>(
    requests: &'r mut Vec<JoinRequest>,
    team_id: &str,
    user_id: &str,
) -> Result<&'r JoinRequest> {
    if user_id.is_empty() {
        return Err(BrainyError::validation("Please log in first"));
    }
    if requests
        .iter()
        .any(|r| r.team_id == team_id && r.user_id == user_id)
    {
        warn!(team_id, user_id, "duplicate join request");
        return Err(BrainyError::validation("You already requested to join"));
    }
    requests.push(JoinRequest {
        team_id: team_id.to_string(),
        user_id: user_id.to_string(),
        status: JoinStatus::Pending,
    });
    Ok(&requests[requests.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(title: &str, description: Option<&str>, skills: &[&str]) -> Team {
        Team {
            id: String::new(),
            title: title.into(),
            description: description.map(String::from),
            skills_needed: skills.iter().map(|s| s.to_string()).collect(),
            max_members: 4,
            member_count: 1,
            is_active: true,
            created_at: None,
        }
    }

    #[test]
    fn search_covers_title_description_skills() {
        let teams = vec![
            team("Byte Busters", None, &["Python"]),
            team("Pixel Pals", Some("Design-first hackers"), &["Figma"]),
            team("Data Dogs", Some("ML team"), &["analytics"]),
        ];
        let titles = |q: &str| -> Vec<String> {
            search(&teams, q).iter().map(|t| t.title.clone()).collect()
        };
        assert_eq!(titles("python"), vec!["Byte Busters"]);
        assert_eq!(titles("DESIGN"), vec!["Pixel Pals"]);
        assert_eq!(titles("dogs"), vec!["Data Dogs"]);
        assert_eq!(titles("").len(), 3);
    }

    #[test]
    fn parse_skills_trims_and_drops_blanks() {
        assert_eq!(
            TeamDraft::parse_skills(" react, rust,, ,go "),
            vec!["react", "rust", "go"]
        );
        assert!(TeamDraft::parse_skills("").is_empty());
    }

    #[test]
    fn draft_without_title_rejected() {
        let draft = TeamDraft {
            title: "   ".into(),
            ..TeamDraft::default()
        };
        assert!(matches!(draft.validate(), Err(BrainyError::Validation(_))));
    }

    #[test]
    fn draft_becomes_team() {
        let draft = TeamDraft {
            title: "Night Owls".into(),
            skills: TeamDraft::parse_skills("rust, wasm"),
            ..TeamDraft::default()
        };
        let team = draft.into_team("t1").unwrap();
        assert_eq!(team.max_members, DEFAULT_MAX_MEMBERS);
        assert_eq!(team.description, None);
        assert!(team.has_open_slot());
    }

    #[test]
    fn full_team_has_no_slot() {
        let mut t = team("Full", None, &[]);
        t.member_count = 4;
        assert!(!t.has_open_slot());
    }

    #[test]
    fn join_request_is_pending() {
        let mut requests = Vec::new();
        let request = request_join(&mut requests, "t1", "u1").unwrap();
        assert_eq!(request.status, JoinStatus::Pending);
        assert_eq!(requests.len(), 1);
    }

    #[test]
    fn duplicate_join_request_rejected() {
        let mut requests = Vec::new();
        request_join(&mut requests, "t1", "u1").unwrap();
        let err = request_join(&mut requests, "t1", "u1").unwrap_err();
        assert_eq!(err.to_string(), "Validation error: You already requested to join");
        assert_eq!(requests.len(), 1);

        // Same user, other team; other user, same team.
        request_join(&mut requests, "t2", "u1").unwrap();
        request_join(&mut requests, "t1", "u2").unwrap();
        assert_eq!(requests.len(), 3);
    }

    #[test]
    fn duplicate_check_covers_fetched_rows() {
        let mut requests: Vec<JoinRequest> =
            serde_json::from_str(r#"[{"team_id":"t1","user_id":"u1","status":"accepted"}]"#)
                .unwrap();
        assert!(request_join(&mut requests, "t1", "u1").is_err());
    }

    #[test]
    fn anonymous_join_rejected() {
        let mut requests = Vec::new();
        assert!(matches!(
            request_join(&mut requests, "t1", ""),
            Err(BrainyError::Validation(_))
        ));
        assert!(requests.is_empty());
    }

    #[test]
    fn row_defaults() {
        let t: Team = serde_json::from_str(r#"{"title":"Solo"}"#).unwrap();
        assert_eq!(t.max_members, DEFAULT_MAX_MEMBERS);
        assert!(t.is_active);
        assert!(t.skills_needed.is_empty());
    }
}
