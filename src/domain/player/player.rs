use serde::Serialize;

use super::value_objects::{CardKind, Position, SkillSet};

/// Player entity
///
/// A player lives inside exactly one team roster and is identified there
/// by name. It carries no reference back to its team.
///
/// # Invariants
/// - Every skill is within `[1, 10]`
/// - The overall rating is always derived from the current skills
/// - The yellow tally never reaches 2; the second yellow becomes a red
///
/// # Example
/// ```
/// use league_roster::domain::player::{Player, Position};
///
/// let player = Player::new("Bukayo Saka", Position::Forward, 9, 8, 8)
///     .with_age(23)
///     .with_nationality("England")
///     .with_jersey_number(7);
///
/// assert_eq!(player.overall_rating(), 8);
/// assert_eq!(player.jersey_number(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    position: Position,
    age: u32,
    nationality: String,
    jersey_number: u32,
    skills: SkillSet,
    is_injured: bool,
    yellow_cards: u32,
    red_cards: u32,
}

impl Player {
    pub const DEFAULT_AGE: u32 = 25;
    pub const DEFAULT_NATIONALITY: &'static str = "Unknown";
    pub const DEFAULT_JERSEY_NUMBER: u32 = 0;

    /// Creates a new player with default age, nationality and jersey number
    ///
    /// Skill values outside `[1, 10]` are clamped rather than rejected.
    pub fn new(
        name: impl Into<String>,
        position: Position,
        pace: i32,
        shooting: i32,
        passing: i32,
    ) -> Self {
        Self {
            name: name.into(),
            position,
            age: Self::DEFAULT_AGE,
            nationality: Self::DEFAULT_NATIONALITY.to_string(),
            jersey_number: Self::DEFAULT_JERSEY_NUMBER,
            skills: SkillSet::new(pace, shooting, passing),
            is_injured: false,
            yellow_cards: 0,
            red_cards: 0,
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn with_nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = nationality.into();
        self
    }

    pub fn with_jersey_number(mut self, jersey_number: u32) -> Self {
        self.jersey_number = jersey_number;
        self
    }

    /// Overwrites all three skills at once, clamping each
    pub fn update_stats(&mut self, pace: i32, shooting: i32, passing: i32) {
        self.skills = SkillSet::new(pace, shooting, passing);
    }

    /// Replaces the non-skill attributes edited from the roster form
    pub fn update_profile(
        &mut self,
        position: Position,
        age: u32,
        nationality: impl Into<String>,
        jersey_number: u32,
    ) {
        self.position = position;
        self.age = age;
        self.nationality = nationality.into();
        self.jersey_number = jersey_number;
    }

    pub fn set_injury_status(&mut self, is_injured: bool) {
        self.is_injured = is_injured;
    }

    /// Records a card
    ///
    /// # Business Rules
    /// - A second yellow in the current tally converts into one red and
    ///   resets the yellow tally to zero
    /// - A straight red increments the red tally only
    pub fn add_card(&mut self, kind: CardKind) {
        match kind {
            CardKind::Yellow => {
                self.yellow_cards += 1;
                if self.yellow_cards >= 2 {
                    self.red_cards += 1;
                    self.yellow_cards = 0;
                }
            }
            CardKind::Red => self.red_cards += 1,
        }
    }

    // ===== Getters =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn nationality(&self) -> &str {
        &self.nationality
    }

    pub fn jersey_number(&self) -> u32 {
        self.jersey_number
    }

    pub fn skills(&self) -> SkillSet {
        self.skills
    }

    /// Rounded mean of pace, shooting and passing
    pub fn overall_rating(&self) -> u8 {
        self.skills.overall()
    }

    pub fn is_injured(&self) -> bool {
        self.is_injured
    }

    pub fn yellow_cards(&self) -> u32 {
        self.yellow_cards
    }

    pub fn red_cards(&self) -> u32 {
        self.red_cards
    }

    /// Read-only projection for the presentation layer
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot::from(self)
    }
}

/// Serializable view of a player
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub position: Position,
    pub age: u32,
    pub nationality: String,
    pub jersey_number: u32,
    pub stats: PlayerStatsSnapshot,
    pub status: PlayerStatusSnapshot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayerStatsSnapshot {
    pub pace: u8,
    pub shooting: u8,
    pub passing: u8,
    pub overall: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayerStatusSnapshot {
    pub is_injured: bool,
    pub yellow_cards: u32,
    pub red_cards: u32,
}

impl From<&Player> for PlayerSnapshot {
    fn from(player: &Player) -> Self {
        let skills = player.skills();
        Self {
            name: player.name().to_string(),
            position: player.position(),
            age: player.age(),
            nationality: player.nationality().to_string(),
            jersey_number: player.jersey_number(),
            stats: PlayerStatsSnapshot {
                pace: skills.pace.value(),
                shooting: skills.shooting.value(),
                passing: skills.passing.value(),
                overall: player.overall_rating(),
            },
            status: PlayerStatusSnapshot {
                is_injured: player.is_injured(),
                yellow_cards: player.yellow_cards(),
                red_cards: player.red_cards(),
            },
        }
    }
}
