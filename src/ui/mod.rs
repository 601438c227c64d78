//! Console front-end: registration prompts, the map table and the menu loop
//!
//! The game rules never see raw input. Everything typed by the player is
//! parsed and bounds-checked here before it reaches the session.

pub mod console;
pub mod render;

pub use console::Console;

use rand::Rng;
use std::io::{BufRead, Write};

use crate::core::config::GameConfig;
use crate::core::error::{ConquestError, Result};
use crate::core::types::Player;
use crate::game::GameSession;
use crate::mission::MissionId;
use crate::territory::{TerritoryDraft, TerritoryMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Attack,
    Quit,
}

impl MenuChoice {
    /// `1` attacks, `0` quits, anything else is not an option
    pub fn parse(line: &str) -> Option<Self> {
        match console::parse_int(line)? {
            1 => Some(MenuChoice::Attack),
            0 => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// How the menu loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    Won,
    Quit,
}

/// Ask for the map, register every territory and the player's color, then
/// open a session
///
/// `mission` forces a mission instead of drawing one from `rng`.
pub fn setup_session<R, W, G>(
    console: &mut Console<R, W>,
    config: &GameConfig,
    mission: Option<MissionId>,
    mut rng: G,
) -> Result<GameSession<G>>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    console.say(&render::banner("CONQUEST - TERRITORY REGISTRATION"))?;

    let count = console
        .prompt_int("How many territories does the map have? ")?
        .flatten()
        .ok_or(ConquestError::InvalidTerritoryCount(0))?;
    let size = TerritoryMap::check_size(count, config)?;

    let mut drafts = Vec::with_capacity(size);
    for position in 0..size {
        console.say(&format!("--- Registering territory {} ---\n", position + 1))?;
        let name = console
            .prompt_line(&format!("Territory name (max {} chars): ", config.name_capacity))?
            .unwrap_or_default();
        let color = console
            .prompt_line(&format!(
                "Army color, e.g. Azul, Verde (max {} chars): ",
                config.color_capacity
            ))?
            .unwrap_or_default();
        let troops = console.prompt_int("Number of troops (>= 1): ")?.flatten();
        console.say("\n")?;

        drafts.push(TerritoryDraft::new(name, color, troops));
    }

    let map = TerritoryMap::register(&drafts, config)?;
    console.say("\nInitial registration complete!\n\n")?;
    console.say(&render::render_map(&map))?;

    let color = console
        .prompt_line("Your army color (e.g. Azul, Red): ")?
        .unwrap_or_default();
    let player = Player::new(&color, config.color_capacity);

    let mission = mission.unwrap_or_else(|| MissionId::random(&mut rng));
    console.say(&render::render_mission(mission))?;

    Ok(GameSession::new(map, player, mission, rng))
}

/// Run the menu loop until the mission is fulfilled or the player quits
///
/// End of input counts as quitting.
pub fn play<R, W, G>(console: &mut Console<R, W>, session: &mut GameSession<G>) -> Result<Ending>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    loop {
        let Some(line) = console.prompt_line(&render::render_menu())? else {
            return Ok(Ending::Quit);
        };

        match MenuChoice::parse(&line) {
            Some(MenuChoice::Attack) => {
                attack_phase(console, session)?;
                if session.check_mission() {
                    console.say(&render::render_victory(session.mission()))?;
                    return Ok(Ending::Won);
                }
            }
            Some(MenuChoice::Quit) => {
                console.say("Leaving the game...\n")?;
                return Ok(Ending::Quit);
            }
            None => console.say("Invalid option. Try again.\n")?,
        }
    }
}

/// Ask for an attacker and a defender and resolve the attack
///
/// The caller checks the mission afterwards, whether or not an attack ran.
fn attack_phase<R, W, G>(console: &mut Console<R, W>, session: &mut GameSession<G>) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    if session.map().len() < 2 {
        console.say("The map is too small for attacks.\n")?;
        return Ok(());
    }

    console.say(&render::render_map(session.map()))?;
    console.say("Pick territories by their number.\n")?;

    let Some(Some(attacker)) = console.prompt_int("ATTACKING territory number: ")? else {
        console.say("Not a number.\n")?;
        return Ok(());
    };
    let Some(Some(defender)) = console.prompt_int("DEFENDING territory number: ")? else {
        console.say("Not a number.\n")?;
        return Ok(());
    };

    let selection = session
        .map()
        .index_from_display(attacker)
        .and_then(|a| session.map().index_from_display(defender).map(|d| (a, d)));
    let (attacker, defender) = match selection {
        Ok(pair) => pair,
        Err(err) => {
            console.say(&format!("Invalid selection: {}.\n", err))?;
            return Ok(());
        }
    };

    let turn = match session.attack(attacker, defender) {
        Ok(turn) => turn,
        Err(ConquestError::InvalidSelection(err)) => {
            console.say(&format!("Invalid selection: {}.\n", err))?;
            return Ok(());
        }
        Err(other) => return Err(other),
    };

    console.say("\nAttack result:\n")?;
    console.say(&render::render_attack(session.map(), attacker, defender, &turn.report))?;
    if !turn.report.is_rejected() {
        console.say(&render::render_map(session.map()))?;
        console.say(&render::render_standings(&session.standings()))?;
        console.say(&render::render_progress(session.mission(), &session.progress()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Attack));
        assert_eq!(MenuChoice::parse(" 0 "), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::parse("2"), None);
        assert_eq!(MenuChoice::parse("attack"), None);
    }
}
