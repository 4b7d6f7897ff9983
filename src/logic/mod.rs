//! Wizard business logic: input validation and roster assignment.

mod assign;
mod validate;

pub use assign::{assign_teams, generate_roster};
pub use validate::validate_entry;
