//! Data structures for the team generator: wizard state, categories, roster.

mod roster;
mod wizard;

pub use roster::{Roster, Team};
pub use wizard::{
    Category, Wizard, WizardError, WizardId, WizardPhase, CATEGORY_COUNT, CATEGORY_LABELS,
    MAX_ENTRY_LEN, PLAYERS_PER_CATEGORY, TEAM_COUNT,
};
