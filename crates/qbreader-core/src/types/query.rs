use super::{Bonus, Tossup};
use serde::{Deserialize, Serialize};

/// Which kind of question a search should return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Tossup,
    Bonus,
    All,
}

impl Default for QuestionType {
    fn default() -> Self {
        Self::All
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tossup => write!(f, "tossup"),
            Self::Bonus => write!(f, "bonus"),
            Self::All => write!(f, "all"),
        }
    }
}

/// Which part of a question a search string is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    Question,
    Answer,
    All,
}

impl Default for SearchType {
    fn default() -> Self {
        Self::All
    }
}

impl std::fmt::Display for SearchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Question => write!(f, "question"),
            Self::Answer => write!(f, "answer"),
            Self::All => write!(f, "all"),
        }
    }
}

/// Results of a database search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResults {
    /// Matching tossups on the requested page
    pub tossups: Vec<Tossup>,

    /// Total number of matching tossups
    pub tossup_count: u64,

    /// Matching bonuses on the requested page
    pub bonuses: Vec<Bonus>,

    /// Total number of matching bonuses
    pub bonus_count: u64,
}

impl QueryResults {
    /// Returns true if neither tossups nor bonuses matched on this page
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tossups.is_empty() && self.bonuses.is_empty()
    }

    /// Number of questions on this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.tossups.len() + self.bonuses.len()
    }
}

/// A multiplayer room listed by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Room name, as used in the room URL
    pub room_name: String,

    /// Players who have joined the room
    #[serde(default)]
    pub player_count: Option<u32>,

    /// Players currently connected
    #[serde(default)]
    pub online_count: Option<u32>,

    /// Whether the room persists when empty
    #[serde(default)]
    pub is_permanent: Option<bool>,
}
