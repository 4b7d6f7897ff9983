//! KPL team generator web app: library with wizard state and assignment logic.

pub mod logic;
pub mod models;

pub use logic::{assign_teams, generate_roster, validate_entry};
pub use models::{
    Category, Roster, Team, Wizard, WizardError, WizardId, WizardPhase, CATEGORY_COUNT,
    CATEGORY_LABELS, MAX_ENTRY_LEN, PLAYERS_PER_CATEGORY, TEAM_COUNT,
};
