//! Rule table: ordered trigger sets mapped to canned replies.
//!
//! The first rule whose triggers appear anywhere in the lowercased input
//! wins. Declaration order is priority order.

use tracing::debug;

/// What the user is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Register,
    Team,
    Leaderboard,
    Host,
    Bookmark,
    Greeting,
    /// No trigger matched.
    Fallback,
}

/// A trigger set paired with its reply.
#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub intent: Intent,
    /// Lowercase substrings; any one fires the rule.
    pub triggers: &'static [&'static str],
    pub response: &'static str,
}

impl IntentRule {
    /// Whether any trigger occurs in the already-lowercased input.
    pub fn fires(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|t| lowered.contains(t))
    }
}

const REGISTER_REPLY: &str = "To register for an event:\n1. Browse events on the **Explore Events** page\n2. Click on any event to see details\n3. Click **Register Now**\n4. You'll need to log in first if you haven't already!";

const TEAM_REPLY: &str = "To find or create a team:\n1. Go to the **Team Finder** page\n2. Browse existing teams or click **Create Team**\n3. Add skills needed and max members\n4. Others can request to join your team!";

const LEADERBOARD_REPLY: &str = "The **Leaderboard** ranks users by participation points. You earn points by:\n- Attending events (+10 pts)\n- Winning competitions (+50 pts)\n- Getting certificates (+25 pts)\n\nFilter by college or time period!";

const HOST_REPLY: &str = "To host an event:\n1. Go to the **Host Event** page\n2. Fill in event details (title, date, category, etc.)\n3. Upload a banner image\n4. Set pricing and capacity\n5. Submit for review!";

const BOOKMARK_REPLY: &str = "You can **bookmark** events by clicking the ❤️ heart icon on any event card. View all saved events in your **Dashboard** under the Saved Events tab.";

const GREETING_REPLY: &str = "Hello! 👋 I'm BrainyBot, your event assistant! I can help you with:\n- Finding & registering for events\n- Creating teams\n- Understanding the leaderboard\n- Hosting events\n\nWhat would you like to know?";

/// Capability menu returned when nothing matches.
pub const FALLBACK_REPLY: &str = "I can help you with:\n- **Registering** for events\n- **Creating teams** for hackathons\n- Understanding the **leaderboard**\n- **Hosting** your own events\n- **Bookmarking** events\n\nTry asking about any of these topics! 😊";

/// All rules in priority order. The fallback is not part of the table.
pub const RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::Register,
        triggers: &["register", "sign up"],
        response: REGISTER_REPLY,
    },
    IntentRule {
        intent: Intent::Team,
        triggers: &["team", "teammate"],
        response: TEAM_REPLY,
    },
    IntentRule {
        intent: Intent::Leaderboard,
        triggers: &["leaderboard", "points", "ranking"],
        response: LEADERBOARD_REPLY,
    },
    IntentRule {
        intent: Intent::Host,
        triggers: &["host", "create event", "organize"],
        response: HOST_REPLY,
    },
    IntentRule {
        intent: Intent::Bookmark,
        triggers: &["bookmark", "save", "favorite"],
        response: BOOKMARK_REPLY,
    },
    IntentRule {
        intent: Intent::Greeting,
        triggers: &["hello", "hi", "hey"],
        response: GREETING_REPLY,
    },
];

fn first_match(input: &str) -> Option<&'static IntentRule> {
    let lowered = input.to_lowercase();
    RULES.iter().find(|rule| rule.fires(&lowered))
}

/// Classify free text into an intent.
pub fn classify(input: &str) -> Intent {
    first_match(input).map_or(Intent::Fallback, |rule| rule.intent)
}

/// Pick the canned reply for free text. Every input gets one.
pub fn respond(input: &str) -> &'static str {
    match first_match(input) {
        Some(rule) => {
            debug!(intent = ?rule.intent, "chat rule fired");
            rule.response
        }
        None => {
            debug!("no chat rule fired, using fallback");
            FALLBACK_REPLY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_triggers_any_case() {
        assert_eq!(classify("How do I REGISTER?"), Intent::Register);
        assert_eq!(classify("can I Sign Up here"), Intent::Register);
        assert_eq!(respond("register"), REGISTER_REPLY);
    }

    #[test]
    fn register_outranks_greeting() {
        assert_eq!(classify("hi, how do I register?"), Intent::Register);
        assert_eq!(respond("hi, how do I register?"), REGISTER_REPLY);
    }

    #[test]
    fn register_outranks_every_later_rule() {
        let input = "hey, save my team points after I register to host";
        assert_eq!(classify(input), Intent::Register);
    }

    #[test]
    fn team_outranks_leaderboard() {
        assert_eq!(classify("team ranking"), Intent::Team);
    }

    #[test]
    fn each_rule_reachable() {
        assert_eq!(classify("find a teammate"), Intent::Team);
        assert_eq!(classify("how are points awarded"), Intent::Leaderboard);
        assert_eq!(classify("I want to organize a meetup"), Intent::Host);
        assert_eq!(classify("add to favorite"), Intent::Bookmark);
        assert_eq!(classify("hello there"), Intent::Greeting);
    }

    #[test]
    fn unmatched_input_falls_back() {
        assert_eq!(classify("what is the weather"), Intent::Fallback);
        assert_eq!(respond("what is the weather"), FALLBACK_REPLY);
    }

    #[test]
    fn empty_input_falls_back() {
        assert_eq!(respond(""), FALLBACK_REPLY);
    }

    #[test]
    fn triggers_match_inside_words() {
        // "this" contains "hi"
        assert_eq!(classify("this"), Intent::Greeting);
        // "saved" contains "save"
        assert_eq!(classify("where are my saved events"), Intent::Bookmark);
    }

    #[test]
    fn rule_table_order_is_fixed() {
        let order: Vec<Intent> = RULES.iter().map(|r| r.intent).collect();
        assert_eq!(
            order,
            vec![
                Intent::Register,
                Intent::Team,
                Intent::Leaderboard,
                Intent::Host,
                Intent::Bookmark,
                Intent::Greeting,
            ]
        );
    }

    #[test]
    fn triggers_are_lowercase() {
        for rule in RULES {
            for trigger in rule.triggers {
                assert_eq!(*trigger, trigger.to_lowercase());
            }
        }
    }
}
