//! Combat rule constants

use crate::core::types::Troops;

/// Faces on each combat die
pub const DIE_FACES: u8 = 6;

/// Fewest troops a territory needs before it may attack
pub const MIN_ATTACKING_TROOPS: Troops = 2;

/// Troops an attacker loses when repelled
pub const REPELLED_LOSS: Troops = 1;

/// Troops that must stay behind on the attacking territory after a conquest
pub const GARRISON_LEFT_BEHIND: Troops = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attacker_can_always_leave_a_garrison() {
        // An attacker at the minimum must be able to move one troop and keep one
        assert!(MIN_ATTACKING_TROOPS > GARRISON_LEFT_BEHIND);
    }
}
