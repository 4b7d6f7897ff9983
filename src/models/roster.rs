//! Roster output: one Team per original team name, one member per category.

use serde::{Deserialize, Serialize};

/// The final assignment: exactly 6 teams, in original team-name order.
pub type Roster = Vec<Team>;

/// A team with its assigned members, one drawn from each category, in category order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub members: Vec<String>,
}
