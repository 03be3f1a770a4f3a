use crate::error::{QbError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Difficulty tiers used by the QB Reader database, from unrated (0) to open (10)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
#[repr(u8)]
pub enum Difficulty {
    Unrated = 0,
    Ms = 1,
    HsEasy = 2,
    HsRegular = 3,
    HsHard = 4,
    HsNats = 5,
    CollegeEasy = 6,
    CollegeRegular = 7,
    CollegeHard = 8,
    CollegeNats = 9,
    Open = 10,
}

impl Difficulty {
    /// Every difficulty, ordered by code
    pub const ALL: [Self; 11] = [
        Self::Unrated,
        Self::Ms,
        Self::HsEasy,
        Self::HsRegular,
        Self::HsHard,
        Self::HsNats,
        Self::CollegeEasy,
        Self::CollegeRegular,
        Self::CollegeHard,
        Self::CollegeNats,
        Self::Open,
    ];

    /// Integer code used on the wire
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Symbolic short name, e.g. `HS_REGULAR`
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unrated => "UNRATED",
            Self::Ms => "MS",
            Self::HsEasy => "HS_EASY",
            Self::HsRegular => "HS_REGULAR",
            Self::HsHard => "HS_HARD",
            Self::HsNats => "HS_NATS",
            Self::CollegeEasy => "COLLEGE_EASY",
            Self::CollegeRegular => "COLLEGE_REGULAR",
            Self::CollegeHard => "COLLEGE_HARD",
            Self::CollegeNats => "COLLEGE_NATS",
            Self::Open => "OPEN",
        }
    }

    fn from_code(code: i64) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| i64::from(difficulty.code()) == code)
            .ok_or_else(|| QbError::invalid("difficulty", code))
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Unrated
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = QbError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name() == s)
            .ok_or_else(|| QbError::invalid("difficulty", s))
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.code()
    }
}

macro_rules! difficulty_from_int {
    ($($int:ty),* $(,)?) => {
        $(
            impl TryFrom<$int> for Difficulty {
                type Error = QbError;

                fn try_from(code: $int) -> Result<Self> {
                    i64::try_from(code)
                        .map_err(|_| QbError::invalid("difficulty", code))
                        .and_then(Self::from_code)
                }
            }
        )*
    };
}

difficulty_from_int!(u8, u16, u32, u64, usize, i32, i64);
