//! Text rendering for the console front-end
//!
//! Every function returns a `String`; nothing here writes to a terminal.

use crate::combat::{AttackOutcome, AttackReport};
use crate::mission::{MissionId, MissionProgress};
use crate::territory::{Standings, TerritoryMap};

const RULE: &str = "====================================================";

pub fn banner(title: &str) -> String {
    format!("{RULE}\n\t{title}\n{RULE}\n")
}

/// The world map as a numbered list (1-based, as the player picks them)
pub fn render_map(map: &TerritoryMap) -> String {
    let mut out = banner("WORLD MAP - CURRENT STATE");
    for (i, territory) in map.iter().enumerate() {
        let owner = if territory.is_owned() {
            format!("{} army", territory.owner_color)
        } else {
            "(unowned)".to_string()
        };
        out.push_str(&format!(
            "TERRITORY {}:\n\t- Name: {}\n\t- Held by: {}\n\t- Troops: {}\n\n",
            i + 1,
            territory.name,
            owner,
            territory.troop_count
        ));
    }
    out
}

pub fn render_standings(standings: &Standings) -> String {
    let mut out = String::from("Standings:\n");
    for faction in &standings.factions {
        out.push_str(&format!(
            "\t{:<10} {:>3} territories {:>5} troops\n",
            faction.color, faction.territories, faction.troops
        ));
    }
    if standings.unowned > 0 {
        out.push_str(&format!("\t{:<10} {:>3} territories\n", "(unowned)", standings.unowned));
    }
    out
}

pub fn render_mission(mission: MissionId) -> String {
    format!("{RULE}\nYOUR MISSION: {}\n{RULE}\n", mission.description())
}

pub fn render_progress(mission: MissionId, progress: &MissionProgress) -> String {
    format!("Mission progress: {}\n", progress.summary(mission))
}

pub fn render_menu() -> String {
    format!("{RULE}\n1 - Attack\n0 - Quit\nChoose an option: ")
}

/// Describe an attack between `attacker` and `defender` (0-based)
pub fn render_attack(map: &TerritoryMap, attacker: usize, defender: usize, report: &AttackReport) -> String {
    let name = |idx: usize| {
        map.get(idx)
            .map(|t| t.name.to_string())
            .unwrap_or_else(|| format!("#{}", idx + 1))
    };

    let mut out = String::new();
    if let Some(rolls) = report.rolls {
        out.push_str(&format!("Dice: attacker={}, defender={}\n", rolls.attacker, rolls.defender));
    }

    let line = match report.outcome {
        AttackOutcome::Conquered { transferred } => format!(
            "Attacker won! {} conquered {} and moved {} troops in.\n",
            name(attacker),
            name(defender),
            transferred
        ),
        AttackOutcome::Repelled => format!(
            "{} held against {}. The attacker loses 1 troop.\n",
            name(defender),
            name(attacker)
        ),
        AttackOutcome::Rejected(reason) => format!("Attack cancelled: {}.\n", reason),
    };
    out.push_str(&line);
    out
}

pub fn render_victory(mission: MissionId) -> String {
    format!("\nCongratulations! You completed your mission:\n- {}\n", mission.description())
}
