use crate::error::{QbError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Subject categories used by the QB Reader database.
///
/// The same vocabulary is used for both `category` and `subcategory` fields;
/// the last four members are umbrella tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Category {
    AmericanLiterature,
    BritishLiterature,
    ClassicalLiterature,
    EuropeanLiterature,
    WorldLiterature,
    OtherLiterature,
    AmericanHistory,
    AncientHistory,
    EuropeanHistory,
    WorldHistory,
    OtherHistory,
    Biology,
    Chemistry,
    Physics,
    Math,
    OtherScience,
    VisualFineArts,
    AuditoryFineArts,
    OtherFineArts,
    Religion,
    Mythology,
    Philosophy,
    SocialScience,
    CurrentEvents,
    Geography,
    OtherAcademic,
    Trash,
    Literature,
    History,
    Science,
    FineArts,
}

impl Category {
    /// Every category, in the order the service lists them
    pub const ALL: [Self; 31] = [
        Self::AmericanLiterature,
        Self::BritishLiterature,
        Self::ClassicalLiterature,
        Self::EuropeanLiterature,
        Self::WorldLiterature,
        Self::OtherLiterature,
        Self::AmericanHistory,
        Self::AncientHistory,
        Self::EuropeanHistory,
        Self::WorldHistory,
        Self::OtherHistory,
        Self::Biology,
        Self::Chemistry,
        Self::Physics,
        Self::Math,
        Self::OtherScience,
        Self::VisualFineArts,
        Self::AuditoryFineArts,
        Self::OtherFineArts,
        Self::Religion,
        Self::Mythology,
        Self::Philosophy,
        Self::SocialScience,
        Self::CurrentEvents,
        Self::Geography,
        Self::OtherAcademic,
        Self::Trash,
        Self::Literature,
        Self::History,
        Self::Science,
        Self::FineArts,
    ];

    /// Human-readable label, exactly as the API spells it
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AmericanLiterature => "American Literature",
            Self::BritishLiterature => "British Literature",
            Self::ClassicalLiterature => "Classical Literature",
            Self::EuropeanLiterature => "European Literature",
            Self::WorldLiterature => "World Literature",
            Self::OtherLiterature => "Other Literature",
            Self::AmericanHistory => "American History",
            Self::AncientHistory => "Ancient History",
            Self::EuropeanHistory => "European History",
            Self::WorldHistory => "World History",
            Self::OtherHistory => "Other History",
            Self::Biology => "Biology",
            Self::Chemistry => "Chemistry",
            Self::Physics => "Physics",
            Self::Math => "Math",
            Self::OtherScience => "Other Science",
            Self::VisualFineArts => "Visual Fine Arts",
            Self::AuditoryFineArts => "Auditory Fine Arts",
            Self::OtherFineArts => "Other Fine Arts",
            Self::Religion => "Religion",
            Self::Mythology => "Mythology",
            Self::Philosophy => "Philosophy",
            Self::SocialScience => "Social Science",
            Self::CurrentEvents => "Current Events",
            Self::Geography => "Geography",
            Self::OtherAcademic => "Other Academic",
            Self::Trash => "Trash",
            Self::Literature => "Literature",
            Self::History => "History",
            Self::Science => "Science",
            Self::FineArts => "Fine Arts",
        }
    }

    /// Returns true for the aggregated umbrella tags (Literature, History, ...)
    #[must_use]
    pub const fn is_umbrella(self) -> bool {
        matches!(
            self,
            Self::Literature | Self::History | Self::Science | Self::FineArts
        )
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = QbError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| QbError::invalid("category", s))
    }
}

impl TryFrom<&str> for Category {
    type Error = QbError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<&String> for Category {
    type Error = QbError;

    fn try_from(s: &String) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<String> for Category {
    type Error = QbError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Category> for &'static str {
    fn from(category: Category) -> Self {
        category.as_str()
    }
}
