//! Secret missions and their victory checks
//!
//! A mission is picked once per session and never changes. The rules only
//! ever look at the `MissionId`; text is derived from it for display.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::ConquestError;
use crate::core::types::Troops;
use crate::territory::Territory;

/// Color whose elimination is the goal of `MissionId::EliminateRed`
pub const RIVAL_COLOR: &str = "Red";

/// Territories needed for `MissionId::ConquerThree`
pub const CONQUER_THREE_TARGET: usize = 3;

/// Troops needed for `MissionId::TwentyTroops`
pub const TROOP_TARGET: Troops = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionId {
    ConquerOne,
    ConquerThree,
    ConquerAll,
    EliminateRed,
    TwentyTroops,
}

impl MissionId {
    pub const ALL: [MissionId; 5] = [
        MissionId::ConquerOne,
        MissionId::ConquerThree,
        MissionId::ConquerAll,
        MissionId::EliminateRed,
        MissionId::TwentyTroops,
    ];

    /// Pick a mission uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Text shown to the player
    pub fn description(&self) -> &'static str {
        match self {
            MissionId::ConquerOne => "Conquer 1 territory",
            MissionId::ConquerThree => "Conquer 3 territories",
            MissionId::ConquerAll => "Control every territory",
            MissionId::EliminateRed => "Eliminate the Red army",
            MissionId::TwentyTroops => "Hold at least 20 troops",
        }
    }

    /// Stable identifier used on the command line
    pub fn key(&self) -> &'static str {
        match self {
            MissionId::ConquerOne => "conquer-one",
            MissionId::ConquerThree => "conquer-three",
            MissionId::ConquerAll => "conquer-all",
            MissionId::EliminateRed => "eliminate-red",
            MissionId::TwentyTroops => "twenty-troops",
        }
    }
}

impl fmt::Display for MissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl FromStr for MissionId {
    type Err = ConquestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|mission| mission.key() == wanted)
            .ok_or_else(|| ConquestError::UnknownMission(s.to_string()))
    }
}

/// Tallies every mission check is computed from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MissionProgress {
    /// Territories owned by the player
    pub owned: usize,
    /// Troops across the player's territories
    pub owned_troops: Troops,
    /// Size of the whole map
    pub total: usize,
    /// Whether any territory still flies the rival color
    pub rival_present: bool,
}

impl MissionProgress {
    /// Count what the player holds. An empty player color holds nothing.
    pub fn measure(player_color: &str, territories: &[Territory]) -> Self {
        let mut progress = MissionProgress {
            total: territories.len(),
            ..Default::default()
        };

        for territory in territories {
            if territory.owned_by(player_color) {
                progress.owned += 1;
                progress.owned_troops = progress.owned_troops.saturating_add(territory.troop_count);
            }
            if territory.owned_by(RIVAL_COLOR) {
                progress.rival_present = true;
            }
        }

        progress
    }

    /// Whether these tallies satisfy `mission`. An empty map satisfies nothing.
    pub fn satisfies(&self, mission: MissionId) -> bool {
        if self.total == 0 {
            return false;
        }
        match mission {
            MissionId::ConquerOne => self.owned >= 1,
            MissionId::ConquerThree => self.owned >= CONQUER_THREE_TARGET,
            MissionId::ConquerAll => self.owned == self.total,
            MissionId::EliminateRed => !self.rival_present,
            MissionId::TwentyTroops => self.owned_troops >= TROOP_TARGET,
        }
    }

    /// Short progress line for `mission`, e.g. `2/3 territories`
    pub fn summary(&self, mission: MissionId) -> String {
        match mission {
            MissionId::ConquerOne => format!("{}/1 territories", self.owned.min(1)),
            MissionId::ConquerThree => {
                format!("{}/{} territories", self.owned, CONQUER_THREE_TARGET)
            }
            MissionId::ConquerAll => format!("{}/{} territories", self.owned, self.total),
            MissionId::EliminateRed => {
                if self.rival_present {
                    format!("{} army still on the map", RIVAL_COLOR)
                } else {
                    format!("{} army eliminated", RIVAL_COLOR)
                }
            }
            MissionId::TwentyTroops => format!("{}/{} troops", self.owned_troops, TROOP_TARGET),
        }
    }
}

/// Whether `player_color` has fulfilled `mission` on this map
pub fn is_mission_complete(mission: MissionId, player_color: &str, territories: &[Territory]) -> bool {
    MissionProgress::measure(player_color, territories).satisfies(mission)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn map(entries: &[(&str, Troops)]) -> Vec<Territory> {
        entries
            .iter()
            .enumerate()
            .map(|(i, (color, troops))| Territory::new(&format!("T{}", i + 1), color, *troops))
            .collect()
    }

    #[test]
    fn test_conquer_one() {
        assert!(!is_mission_complete(MissionId::ConquerOne, "Azul", &map(&[("Red", 3), ("", 1)])));
        assert!(is_mission_complete(MissionId::ConquerOne, "Azul", &map(&[("Azul", 1), ("", 1)])));
    }

    #[test]
    fn test_conquer_three() {
        let two = map(&[("Azul", 2), ("Azul", 2), ("Red", 2)]);
        let three = map(&[("Azul", 2), ("Azul", 2), ("Azul", 2), ("Red", 2)]);
        assert!(!is_mission_complete(MissionId::ConquerThree, "Azul", &two));
        assert!(is_mission_complete(MissionId::ConquerThree, "Azul", &three));
    }

    #[test]
    fn test_conquer_all() {
        let partial = map(&[("Azul", 2), ("Azul", 2), ("", 2)]);
        let full = map(&[("Azul", 2), ("Azul", 2), ("Azul", 2)]);
        assert!(!is_mission_complete(MissionId::ConquerAll, "Azul", &partial));
        assert!(is_mission_complete(MissionId::ConquerAll, "Azul", &full));
    }

    #[test]
    fn test_conquer_all_single_territory() {
        assert!(is_mission_complete(MissionId::ConquerAll, "Azul", &map(&[("Azul", 1)])));
    }

    #[test]
    fn test_eliminate_red() {
        let with_red = map(&[("Azul", 2), ("Red", 2)]);
        let without_red = map(&[("Azul", 2), ("Verde", 2)]);
        assert!(!is_mission_complete(MissionId::EliminateRed, "Azul", &with_red));
        assert!(is_mission_complete(MissionId::EliminateRed, "Azul", &without_red));
    }

    #[test]
    fn test_eliminate_red_is_case_sensitive() {
        assert!(is_mission_complete(MissionId::EliminateRed, "Azul", &map(&[("red", 2)])));
    }

    #[test]
    fn test_twenty_troops_boundary() {
        let nineteen = map(&[("Azul", 10), ("Azul", 9), ("", 5)]);
        let twenty = map(&[("Azul", 10), ("Azul", 10), ("", 5)]);
        assert!(!is_mission_complete(MissionId::TwentyTroops, "Azul", &nineteen));
        assert!(is_mission_complete(MissionId::TwentyTroops, "Azul", &twenty));
    }

    #[test]
    fn test_empty_player_color_owns_nothing() {
        let territories = map(&[("", 30), ("", 1)]);
        assert!(!is_mission_complete(MissionId::ConquerOne, "", &territories));
        assert!(!is_mission_complete(MissionId::ConquerAll, "", &territories));
        assert!(!is_mission_complete(MissionId::TwentyTroops, "", &territories));
    }

    #[test]
    fn test_empty_map_never_complete() {
        for mission in MissionId::ALL {
            assert!(!is_mission_complete(mission, "Azul", &[]));
        }
    }

    #[test]
    fn test_progress_summary() {
        let progress = MissionProgress::measure("Azul", &map(&[("Azul", 7), ("Azul", 4), ("Red", 1)]));
        assert_eq!(progress.summary(MissionId::ConquerThree), "2/3 territories");
        assert_eq!(progress.summary(MissionId::TwentyTroops), "11/20 troops");
        assert_eq!(progress.summary(MissionId::ConquerAll), "2/3 territories");
        assert_eq!(progress.summary(MissionId::EliminateRed), "Red army still on the map");
    }

    #[test]
    fn test_parse_mission_keys() {
        for mission in MissionId::ALL {
            assert_eq!(mission.key().parse::<MissionId>().unwrap(), mission);
        }
        assert_eq!("  Twenty-Troops ".parse::<MissionId>().unwrap(), MissionId::TwentyTroops);
        assert!("conquer-the-moon".parse::<MissionId>().is_err());
    }

    #[test]
    fn test_random_mission_covers_all() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(MissionId::random(&mut rng));
        }
        assert_eq!(seen.len(), MissionId::ALL.len());
    }
}
