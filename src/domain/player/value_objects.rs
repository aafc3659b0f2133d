use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::DomainError;

/// Playing position of a footballer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Forward,
    Midfielder,
    Defender,
    Goalkeeper,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Forward => write!(f, "Forward"),
            Position::Midfielder => write!(f, "Midfielder"),
            Position::Defender => write!(f, "Defender"),
            Position::Goalkeeper => write!(f, "Goalkeeper"),
        }
    }
}

impl FromStr for Position {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forward" => Ok(Position::Forward),
            "midfielder" => Ok(Position::Midfielder),
            "defender" => Ok(Position::Defender),
            "goalkeeper" => Ok(Position::Goalkeeper),
            other => Err(DomainError::InvalidArgument(format!(
                "Unknown position: {}",
                other
            ))),
        }
    }
}

/// Skill value object
///
/// # Invariants
/// - Always within `[Skill::MIN, Skill::MAX]`
/// - Out-of-range input is clamped, never rejected
///
/// # Example
/// ```
/// use league_roster::domain::player::value_objects::Skill;
///
/// assert_eq!(Skill::new(14).value(), 10);
/// assert_eq!(Skill::new(-3).value(), 1);
/// assert_eq!(Skill::new(7).value(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Skill(u8);

impl Skill {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Creates a skill, clamping the raw value into range
    pub fn new(raw: i32) -> Self {
        let clamped = raw.clamp(i32::from(Self::MIN), i32::from(Self::MAX));
        // clamped fits in u8 after the bound check above
        Skill(clamped as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three rated skills of a player
///
/// The overall rating is always derived from these values, so it cannot
/// drift from its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillSet {
    pub pace: Skill,
    pub shooting: Skill,
    pub passing: Skill,
}

impl SkillSet {
    pub fn new(pace: i32, shooting: i32, passing: i32) -> Self {
        Self {
            pace: Skill::new(pace),
            shooting: Skill::new(shooting),
            passing: Skill::new(passing),
        }
    }

    /// Mean of the three skills, rounded half-up
    ///
    /// A sum of three integers divided by 3 never lands on x.5, so
    /// `(sum + 1) / 3` is exact round-to-nearest here.
    pub fn overall(&self) -> u8 {
        let sum = u32::from(self.pace.value())
            + u32::from(self.shooting.value())
            + u32::from(self.passing.value());
        ((sum + 1) / 3) as u8
    }
}

/// Disciplinary card shown to a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Yellow,
    Red,
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardKind::Yellow => write!(f, "yellow"),
            CardKind::Red => write!(f, "red"),
        }
    }
}

impl FromStr for CardKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yellow" => Ok(CardKind::Yellow),
            "red" => Ok(CardKind::Red),
            other => Err(DomainError::InvalidArgument(format!(
                "Unknown card kind: {}",
                other
            ))),
        }
    }
}
