//! Assignment engine: per-category uniform shuffle, zipped into teams.

use crate::models::{Category, Roster, Team, Wizard, WizardError, WizardPhase};
use rand::seq::SliceRandom;
use rand::Rng;

/// Assign one player per category to each team.
///
/// Each category's players are shuffled independently with a uniform
/// Fisher-Yates shuffle (not a random-comparator sort, which is biased),
/// then team `i` receives slot `i` of every shuffled category. Expects
/// 6 team names and 6 full categories; `members` are in category order.
pub fn assign_teams<R: Rng + ?Sized>(
    rng: &mut R,
    team_names: &[String],
    categories: &[Category],
) -> Roster {
    let shuffled: Vec<Vec<String>> = categories
        .iter()
        .map(|cat| {
            let mut players = cat.players.clone();
            players.shuffle(rng);
            players
        })
        .collect();

    team_names
        .iter()
        .enumerate()
        .map(|(i, name)| Team {
            name: name.clone(),
            members: shuffled.iter().map(|players| players[i].clone()).collect(),
        })
        .collect()
}

/// Generate the roster for a Ready wizard and store it on the wizard.
///
/// Requires 6 teams and every category full; otherwise returns `NotReady`
/// and leaves the wizard unchanged.
pub fn generate_roster(wizard: &mut Wizard) -> Result<(), WizardError> {
    if wizard.phase != WizardPhase::Ready || !wizard.is_ready() {
        return Err(WizardError::NotReady);
    }
    let mut rng = rand::thread_rng();
    wizard.roster = Some(assign_teams(&mut rng, &wizard.team_names, &wizard.categories));
    Ok(())
}
