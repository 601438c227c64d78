//! Per-faction tally of territories and troops

use ahash::AHashMap;
use serde::Serialize;

use super::Territory;
use crate::core::types::Troops;

/// How much of the map one army color holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactionStanding {
    pub color: String,
    pub territories: usize,
    pub troops: Troops,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Standings {
    /// Owned factions, strongest first
    pub factions: Vec<FactionStanding>,
    /// Territories with no owner color
    pub unowned: usize,
}

/// Tally every owner color on the map
///
/// Ordered by troops, then territory count, then color name so the
/// result is stable for display.
pub fn standings(territories: &[Territory]) -> Standings {
    let mut tally: AHashMap<&str, (usize, Troops)> = AHashMap::new();
    let mut unowned = 0;

    for territory in territories {
        if !territory.is_owned() {
            unowned += 1;
            continue;
        }
        let entry = tally.entry(territory.owner_color.as_str()).or_insert((0, 0));
        entry.0 += 1;
        entry.1 = entry.1.saturating_add(territory.troop_count);
    }

    let mut factions: Vec<FactionStanding> = tally
        .into_iter()
        .map(|(color, (territories, troops))| FactionStanding {
            color: color.to_string(),
            territories,
            troops,
        })
        .collect();

    factions.sort_by(|a, b| {
        b.troops
            .cmp(&a.troops)
            .then(b.territories.cmp(&a.territories))
            .then(a.color.cmp(&b.color))
    });

    Standings { factions, unowned }
}
