use strum::EnumCount;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

use crate::{variables::ALPHABET_LEN, EquationError, Result};

/// How hard the generated systems are. Parses from the lowercase name or from
/// its 1-based number as a string, both case-sensitive.
#[derive(EnumCountMacro, EnumIter, EnumString, Display, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum DifficultyLevel {
    /// Values from 1 to 9, variables start at x.
    #[strum(to_string = "babe", serialize = "1")]
    Babe,
    /// Values from 1 to 20, variables start at x.
    #[strum(to_string = "kido", serialize = "2")]
    Kido,
    /// Values from -20 to 20, variables start at a or x.
    #[strum(to_string = "novice", serialize = "3")]
    Novice,
    /// Values from -100 to 100, variables start at a or x.
    #[strum(to_string = "pupil", serialize = "4")]
    Pupil,
    /// Values from -200 to 200, variables start anywhere in the alphabet.
    #[strum(to_string = "smart", serialize = "5")]
    Smart,
    /// Meant for fractional answers. Until that exists it generates exactly
    /// like `Smart`.
    #[strum(to_string = "smartass", serialize = "6")]
    Smartass,
}

static_assertions::const_assert_eq!(DifficultyLevel::COUNT, 6);

const RANGES: [(i64, i64); DifficultyLevel::COUNT] = [(1, 9), (1, 20), (-20, 20), (-100, 100), (-200, 200), (-200, 200)];

/// Offset of 'x' in the alphabet.
const X_OFFSET: usize = 23;

/// Where the variable names of a system start in the alphabet.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NamingPolicy {
    Fixed(usize),
    OneOf(&'static [usize]),
    Any,
}

impl NamingPolicy {
    pub fn pick_offset(self, rng: &mut fastrand::Rng) -> usize {
        match self {
            Self::Fixed(offset) => offset,
            Self::OneOf(offsets) => rng.choice(offsets.iter().copied()).unwrap_or(0),
            Self::Any => rng.usize(..ALPHABET_LEN),
        }
    }

    /// Whether `offset` is one this policy can produce.
    pub fn admits(self, offset: usize) -> bool {
        match self {
            Self::Fixed(fixed) => fixed == offset,
            Self::OneOf(offsets) => offsets.contains(&offset),
            Self::Any => offset < ALPHABET_LEN,
        }
    }
}

impl DifficultyLevel {
    /// Parses a level name ("babe" .. "smartass") or number ("1" .. "6").
    pub fn parse(text: &str) -> Result<Self> {
        text.parse::<Self>().map_err(|_| EquationError::InvalidLevel(text.to_string()))
    }

    /// Level from its 1-based number.
    pub fn from_number(number: i64) -> Result<Self> {
        use strum::IntoEnumIterator;
        usize::try_from(number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| Self::iter().nth(index))
            .ok_or_else(|| EquationError::InvalidLevel(number.to_string()))
    }

    /// Zero-based position in the level table.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inclusive range every value and coefficient is drawn from.
    pub const fn range(self) -> (i64, i64) {
        RANGES[self.index()]
    }

    pub const fn naming(self) -> NamingPolicy {
        match self {
            Self::Babe | Self::Kido => NamingPolicy::Fixed(X_OFFSET),
            Self::Novice | Self::Pupil => NamingPolicy::OneOf(&[0, X_OFFSET]),
            Self::Smart | Self::Smartass => NamingPolicy::Any,
        }
    }

    /// Levels whose answers should eventually be fractions.
    pub const fn is_fractional(self) -> bool {
        matches!(self, Self::Smartass)
    }
}

impl TryFrom<i64> for DifficultyLevel {
    type Error = EquationError;

    fn try_from(number: i64) -> Result<Self> {
        Self::from_number(number)
    }
}
