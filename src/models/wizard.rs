//! Wizard state: phase machine, team names, and player categories.

use crate::models::roster::Roster;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of teams collected before the wizard moves on to players.
pub const TEAM_COUNT: usize = 6;
/// Number of fixed player categories.
pub const CATEGORY_COUNT: usize = 6;
/// Number of players collected per category.
pub const PLAYERS_PER_CATEGORY: usize = 6;
/// Maximum length (after trimming) of a team or player name.
pub const MAX_ENTRY_LEN: usize = 30;

/// Category labels, in entry order. Fixed at construction.
pub const CATEGORY_LABELS: [&str; CATEGORY_COUNT] = [
    "Batsman",
    "Bowler",
    "All-Rounder",
    "Wicketkeeper",
    "Fielder",
    "Coach",
];

/// Errors that can occur during wizard operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum WizardError {
    /// Input is empty after trimming.
    EmptyInput,
    /// Input exceeds the maximum length after trimming.
    TooLong { max: usize },
    /// Input contains characters outside letters, digits, and spaces.
    InvalidCharacters,
    /// The relevant collection (teams, or the category) already holds 6 entries.
    CapacityExceeded,
    /// A team or player with this exact name already exists in the collection.
    DuplicateEntry,
    /// Category index is outside 0..6.
    CategoryOutOfRange(usize),
    /// Category index does not match the wizard's active category.
    StaleCategory { expected: usize, given: usize },
    /// Wizard is not in a phase that allows this action.
    InvalidState,
    /// Roster generation requires 6 teams and every category full.
    NotReady,
}

impl std::fmt::Display for WizardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WizardError::EmptyInput => write!(f, "Input cannot be empty"),
            WizardError::TooLong { max } => write!(f, "Input is too long (max {} characters)", max),
            WizardError::InvalidCharacters => write!(f, "Input contains invalid characters"),
            WizardError::CapacityExceeded => write!(f, "All slots are already filled"),
            WizardError::DuplicateEntry => write!(f, "This name already exists"),
            WizardError::CategoryOutOfRange(i) => write!(f, "No category at index {}", i),
            WizardError::StaleCategory { expected, given } => {
                write!(f, "Category {} is not active (current category is {})", given, expected)
            }
            WizardError::InvalidState => write!(f, "Invalid state for this action"),
            WizardError::NotReady => {
                write!(f, "All teams and players must be added before generating teams")
            }
        }
    }
}

/// Unique identifier for a wizard session.
pub type WizardId = Uuid;

/// Current phase of the wizard. Progression is monotonic; it never regresses.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardPhase {
    /// Collecting team names (0..6 so far).
    #[default]
    CollectingTeams,
    /// Collecting players for the active category.
    CollectingPlayers,
    /// All data present; roster can be generated.
    Ready,
}

/// One of the six fixed player roles. The label never changes after construction.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub label: String,
    /// Unique player names, in entry order (0..6).
    pub players: Vec<String>,
}

impl Category {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            players: Vec::new(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= PLAYERS_PER_CATEGORY
    }
}

/// Full wizard state for one session: phase, collected names, and the roster once generated.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Wizard {
    pub id: WizardId,
    pub phase: WizardPhase,
    /// Unique team names, in entry order (0..6).
    pub team_names: Vec<String>,
    /// Exactly six categories, order fixed at construction.
    pub categories: Vec<Category>,
    /// Index of the category currently being filled. Monotonically non-decreasing.
    pub active_category_index: usize,
    /// None until `generate_roster` succeeds.
    pub roster: Option<Roster>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    /// Create a new wizard in CollectingTeams with the six fixed categories, all empty.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            phase: WizardPhase::CollectingTeams,
            team_names: Vec::new(),
            categories: CATEGORY_LABELS.iter().copied().map(Category::new).collect(),
            active_category_index: 0,
            roster: None,
        }
    }

    /// The category currently being filled.
    pub fn active_category(&self) -> &Category {
        &self.categories[self.active_category_index]
    }

    /// True when 6 teams are present and every category holds 6 players.
    pub fn is_ready(&self) -> bool {
        self.team_names.len() == TEAM_COUNT && self.categories.iter().all(Category::is_full)
    }

    /// Add a team name (valid in CollectingTeams). Names must be unique (exact match after trim).
    ///
    /// On the 6th accepted name the phase moves to CollectingPlayers. Any error leaves the
    /// wizard unchanged.
    pub fn add_team_name(&mut self, name: impl Into<String>) -> Result<(), WizardError> {
        if self.team_names.len() >= TEAM_COUNT {
            return Err(WizardError::CapacityExceeded);
        }
        if self.phase != WizardPhase::CollectingTeams {
            return Err(WizardError::InvalidState);
        }
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(WizardError::EmptyInput);
        }
        if self.team_names.iter().any(|t| t == name_trimmed) {
            return Err(WizardError::DuplicateEntry);
        }
        self.team_names.push(name_trimmed.to_string());
        if self.team_names.len() == TEAM_COUNT {
            self.phase = WizardPhase::CollectingPlayers;
        }
        Ok(())
    }

    /// Add a player to the category at `category_index` (valid in CollectingPlayers).
    ///
    /// The index must name the active category; a stale index is rejected rather than
    /// silently writing into a non-active category. When the category reaches 6 players
    /// the active index advances, or the phase moves to Ready if it was the last category.
    /// Any error leaves the wizard unchanged.
    pub fn add_player_to_category(
        &mut self,
        category_index: usize,
        player: impl Into<String>,
    ) -> Result<(), WizardError> {
        if self.phase != WizardPhase::CollectingPlayers {
            return Err(WizardError::InvalidState);
        }
        if category_index >= self.categories.len() {
            return Err(WizardError::CategoryOutOfRange(category_index));
        }
        if self.categories[category_index].is_full() {
            return Err(WizardError::CapacityExceeded);
        }
        if category_index != self.active_category_index {
            return Err(WizardError::StaleCategory {
                expected: self.active_category_index,
                given: category_index,
            });
        }
        let player = player.into();
        let player_trimmed = player.trim();
        if player_trimmed.is_empty() {
            return Err(WizardError::EmptyInput);
        }
        let category = &mut self.categories[category_index];
        if category.players.iter().any(|p| p == player_trimmed) {
            return Err(WizardError::DuplicateEntry);
        }
        category.players.push(player_trimmed.to_string());
        if category.is_full() {
            if category_index < self.categories.len() - 1 {
                self.active_category_index += 1;
            } else {
                self.phase = WizardPhase::Ready;
            }
        }
        Ok(())
    }
}
