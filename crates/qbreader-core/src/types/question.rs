use super::{Category, Difficulty};
use crate::error::{QbError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Marks the point in a tossup past which a correct buzz earns power
pub const POWER_MARKER: &str = "(*)";

/// A single tossup question
///
/// Built through [`Tossup::new`] or decoded from JSON; either way the category,
/// subcategory and difficulty have been validated, and [`Tossup::powerable`]
/// reflects the question text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TossupRecord", into = "TossupRecord")]
pub struct Tossup {
    id: Option<String>,
    question: String,
    answer: String,
    formatted_answer: String,
    category: Category,
    subcategory: Category,
    packet_number: u32,
    question_number: u32,
    difficulty: Difficulty,
    set_name: String,
    powerable: bool,
}

impl Tossup {
    /// Create a tossup, validating the category, subcategory and difficulty
    ///
    /// Each of those may be given raw (`"Biology"`, `3`) or already validated
    /// (`Category::Biology`, `Difficulty::HsRegular`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use qbreader_core::{Category, Tossup};
    ///
    /// let tossup = Tossup::new(
    ///     "This organelle (*) is the powerhouse of the cell.",
    ///     "mitochondria",
    ///     "<b>mitochondria</b>",
    ///     "Science",
    ///     Category::Biology,
    ///     1,
    ///     4,
    ///     3,
    ///     "2023 Example Set",
    /// )?;
    /// assert!(tossup.powerable());
    /// # Ok::<(), qbreader_core::QbError>(())
    /// ```
    pub fn new<C, S, D>(
        question: impl Into<String>,
        answer: impl Into<String>,
        formatted_answer: impl Into<String>,
        category: C,
        subcategory: S,
        packet_number: u32,
        question_number: u32,
        difficulty: D,
        set_name: impl Into<String>,
    ) -> Result<Self>
    where
        C: TryInto<Category>,
        QbError: From<C::Error>,
        S: TryInto<Category>,
        QbError: From<S::Error>,
        D: TryInto<Difficulty>,
        QbError: From<D::Error>,
    {
        let category = category.try_into()?;
        let subcategory = subcategory.try_into()?;
        let difficulty = difficulty.try_into()?;
        let question = question.into();
        let powerable = question.contains(POWER_MARKER);

        Ok(Self {
            id: None,
            question,
            answer: answer.into(),
            formatted_answer: formatted_answer.into(),
            category,
            subcategory,
            packet_number,
            question_number,
            difficulty,
            set_name: set_name.into(),
            powerable,
        })
    }

    /// Attach the database identifier (needed to report the question)
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Database identifier, if the API supplied one
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Question text
    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Plain answer line
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Answer line with markup (bold/underline) preserved
    #[must_use]
    pub fn formatted_answer(&self) -> &str {
        &self.formatted_answer
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub const fn subcategory(&self) -> Category {
        self.subcategory
    }

    #[must_use]
    pub const fn packet_number(&self) -> u32 {
        self.packet_number
    }

    #[must_use]
    pub const fn question_number(&self) -> u32 {
        self.question_number
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn set_name(&self) -> &str {
        &self.set_name
    }

    /// Returns true if the question text contains the power marker
    #[must_use]
    pub const fn powerable(&self) -> bool {
        self.powerable
    }
}

impl std::fmt::Display for Tossup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.question)
    }
}

/// One part of a bonus question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusPart {
    /// Part text
    pub question: String,
    /// Plain answer line
    pub answer: String,
    /// Answer line with markup preserved
    pub formatted_answer: String,
}

impl BonusPart {
    /// Create a bonus part
    #[must_use]
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        formatted_answer: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            formatted_answer: formatted_answer.into(),
        }
    }
}

impl std::fmt::Display for BonusPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.question)
    }
}

/// A bonus question: a leadin followed by its parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BonusRecord", into = "BonusRecord")]
pub struct Bonus {
    id: Option<String>,
    leadin: String,
    parts: Vec<BonusPart>,
    category: Category,
    subcategory: Category,
    packet_number: u32,
    question_number: u32,
    difficulty: Difficulty,
    set_name: String,
}

impl Bonus {
    /// Create a bonus from parallel lists of part texts, answers and formatted answers
    ///
    /// The lists are paired up by position. If their lengths differ, the extra
    /// entries of the longer lists are dropped.
    pub fn new<P, A, F, C, S, D>(
        leadin: impl Into<String>,
        parts: P,
        answers: A,
        formatted_answers: F,
        category: C,
        subcategory: S,
        packet_number: u32,
        question_number: u32,
        difficulty: D,
        set_name: impl Into<String>,
    ) -> Result<Self>
    where
        P: IntoIterator,
        P::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
        C: TryInto<Category>,
        QbError: From<C::Error>,
        S: TryInto<Category>,
        QbError: From<S::Error>,
        D: TryInto<Difficulty>,
        QbError: From<D::Error>,
    {
        let category = category.try_into()?;
        let subcategory = subcategory.try_into()?;
        let difficulty = difficulty.try_into()?;

        let parts: Vec<String> = parts.into_iter().map(Into::into).collect();
        let answers: Vec<String> = answers.into_iter().map(Into::into).collect();
        let formatted_answers: Vec<String> =
            formatted_answers.into_iter().map(Into::into).collect();

        if parts.len() != answers.len() || parts.len() != formatted_answers.len() {
            debug!(
                parts = parts.len(),
                answers = answers.len(),
                formatted_answers = formatted_answers.len(),
                "bonus inputs differ in length, truncating to the shortest"
            );
        }

        let parts = parts
            .into_iter()
            .zip(answers)
            .zip(formatted_answers)
            .map(|((question, answer), formatted_answer)| {
                BonusPart::new(question, answer, formatted_answer)
            })
            .collect();

        Ok(Self {
            id: None,
            leadin: leadin.into(),
            parts,
            category,
            subcategory,
            packet_number,
            question_number,
            difficulty,
            set_name: set_name.into(),
        })
    }

    /// Attach the database identifier (needed to report the question)
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub fn leadin(&self) -> &str {
        &self.leadin
    }

    #[must_use]
    pub fn parts(&self) -> &[BonusPart] {
        &self.parts
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub const fn subcategory(&self) -> Category {
        self.subcategory
    }

    #[must_use]
    pub const fn packet_number(&self) -> u32 {
        self.packet_number
    }

    #[must_use]
    pub const fn question_number(&self) -> u32 {
        self.question_number
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn set_name(&self) -> &str {
        &self.set_name
    }

    /// The leadin followed by the text of each part
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        std::iter::once(self.leadin.as_str())
            .chain(self.parts.iter().map(|part| part.question.as_str()))
            .collect()
    }
}

impl std::fmt::Display for Bonus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

/// Tossup as it appears on the wire, before validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TossupRecord {
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub question: String,
    pub answer: String,
    #[serde(alias = "formattedAnswer")]
    pub formatted_answer: String,
    pub category: String,
    pub subcategory: String,
    #[serde(alias = "packetNumber")]
    pub packet_number: u32,
    #[serde(alias = "questionNumber", alias = "number")]
    pub question_number: u32,
    pub difficulty: i64,
    #[serde(alias = "setName")]
    pub set_name: String,
}

impl TryFrom<TossupRecord> for Tossup {
    type Error = QbError;

    fn try_from(record: TossupRecord) -> Result<Self> {
        let tossup = Self::new(
            record.question,
            record.answer,
            record.formatted_answer,
            record.category,
            record.subcategory,
            record.packet_number,
            record.question_number,
            record.difficulty,
            record.set_name,
        )?;

        Ok(Self {
            id: record.id,
            ..tossup
        })
    }
}

impl From<Tossup> for TossupRecord {
    fn from(tossup: Tossup) -> Self {
        Self {
            id: tossup.id,
            question: tossup.question,
            answer: tossup.answer,
            formatted_answer: tossup.formatted_answer,
            category: tossup.category.as_str().to_string(),
            subcategory: tossup.subcategory.as_str().to_string(),
            packet_number: tossup.packet_number,
            question_number: tossup.question_number,
            difficulty: i64::from(tossup.difficulty.code()),
            set_name: tossup.set_name,
        }
    }
}

/// Bonus as it appears on the wire, before validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusRecord {
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub leadin: String,
    pub parts: Vec<String>,
    pub answers: Vec<String>,
    #[serde(alias = "formattedAnswers")]
    pub formatted_answers: Vec<String>,
    pub category: String,
    pub subcategory: String,
    #[serde(alias = "packetNumber")]
    pub packet_number: u32,
    #[serde(alias = "questionNumber", alias = "number")]
    pub question_number: u32,
    pub difficulty: i64,
    #[serde(alias = "setName")]
    pub set_name: String,
}

impl TryFrom<BonusRecord> for Bonus {
    type Error = QbError;

    fn try_from(record: BonusRecord) -> Result<Self> {
        let bonus = Self::new(
            record.leadin,
            record.parts,
            record.answers,
            record.formatted_answers,
            record.category,
            record.subcategory,
            record.packet_number,
            record.question_number,
            record.difficulty,
            record.set_name,
        )?;

        Ok(Self {
            id: record.id,
            ..bonus
        })
    }
}

impl From<Bonus> for BonusRecord {
    fn from(bonus: Bonus) -> Self {
        let mut parts = Vec::with_capacity(bonus.parts.len());
        let mut answers = Vec::with_capacity(bonus.parts.len());
        let mut formatted_answers = Vec::with_capacity(bonus.parts.len());
        for part in bonus.parts {
            parts.push(part.question);
            answers.push(part.answer);
            formatted_answers.push(part.formatted_answer);
        }

        Self {
            id: bonus.id,
            leadin: bonus.leadin,
            parts,
            answers,
            formatted_answers,
            category: bonus.category.as_str().to_string(),
            subcategory: bonus.subcategory.as_str().to_string(),
            packet_number: bonus.packet_number,
            question_number: bonus.question_number,
            difficulty: i64::from(bonus.difficulty.code()),
            set_name: bonus.set_name,
        }
    }
}
