//! Combat dice

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::constants::DIE_FACES;

/// One die per side, each in `1..=DIE_FACES`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRolls {
    pub attacker: u8,
    pub defender: u8,
}

impl DiceRolls {
    pub fn new(attacker: u8, defender: u8) -> Self {
        Self { attacker, defender }
    }

    /// Ties go to the defender
    pub fn attacker_wins(&self) -> bool {
        self.attacker > self.defender
    }
}

/// Roll a single die
pub fn roll_die<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(1..=DIE_FACES)
}

/// Roll the attacker's die, then the defender's
pub fn roll_dice<R: Rng + ?Sized>(rng: &mut R) -> DiceRolls {
    let attacker = roll_die(rng);
    let defender = roll_die(rng);
    DiceRolls { attacker, defender }
}
