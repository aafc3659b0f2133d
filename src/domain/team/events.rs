/// Domain events that occur within the Team aggregate
///
/// Returned from roster mutations so the caller can log them and decide
/// which parts of its view to redraw.
///
/// # Example
/// ```
/// use league_roster::domain::team::events::TeamEvent;
///
/// let event = TeamEvent::PlayerAdded {
///     team: "Arsenal".to_string(),
///     player: "Bukayo Saka".to_string(),
/// };
/// assert_eq!(event.team(), "Arsenal");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamEvent {
    /// Fired when a player joins the roster
    PlayerAdded {
        /// Team the player joined
        team: String,
        /// Name of the new player
        player: String,
    },
    /// Fired when a player is removed from the roster
    PlayerRemoved {
        /// Team the player left
        team: String,
        /// Name of the removed player
        player: String,
    },
}

impl TeamEvent {
    /// Returns the team name for this event
    pub fn team(&self) -> &str {
        match self {
            TeamEvent::PlayerAdded { team, .. } => team,
            TeamEvent::PlayerRemoved { team, .. } => team,
        }
    }

    /// Returns the player name for this event
    pub fn player(&self) -> &str {
        match self {
            TeamEvent::PlayerAdded { player, .. } => player,
            TeamEvent::PlayerRemoved { player, .. } => player,
        }
    }
}
