//! Attack resolution
//!
//! One attack is one pair of dice. The attacker needs a strictly higher
//! roll to take the territory; anything else costs it a single troop.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::constants::{GARRISON_LEFT_BEHIND, MIN_ATTACKING_TROOPS, REPELLED_LOSS};
use super::dice::{roll_dice, DiceRolls};
use crate::core::types::Troops;
use crate::territory::Territory;

/// Why an attack was refused before any dice were rolled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// Attacker holds fewer than the minimum troops
    InsufficientTroops,
    /// Both territories belong to the same color
    SameFaction,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::InsufficientTroops => write!(
                f,
                "the attacker needs at least {} troops to attack",
                MIN_ATTACKING_TROOPS
            ),
            RejectReason::SameFaction => write!(f, "territories of the same color cannot fight"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackOutcome {
    /// Defender taken; `transferred` troops now garrison it
    Conquered { transferred: Troops },
    /// Defender held; attacker lost a troop
    Repelled,
    /// Attack refused, nothing changed
    Rejected(RejectReason),
}

/// Results of an attack resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackReport {
    /// `None` when the attack was rejected before rolling
    pub rolls: Option<DiceRolls>,
    pub outcome: AttackOutcome,
}

impl AttackReport {
    fn rejected(reason: RejectReason) -> Self {
        Self {
            rolls: None,
            outcome: AttackOutcome::Rejected(reason),
        }
    }

    pub fn is_conquest(&self) -> bool {
        matches!(self.outcome, AttackOutcome::Conquered { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self.outcome, AttackOutcome::Rejected(_))
    }
}

/// Check whether `attacker` may attack `defender` at all
pub fn check_attack(attacker: &Territory, defender: &Territory) -> Option<RejectReason> {
    if attacker.troop_count < MIN_ATTACKING_TROOPS {
        return Some(RejectReason::InsufficientTroops);
    }
    if attacker.same_faction(defender) {
        return Some(RejectReason::SameFaction);
    }
    None
}

/// Troops that move into a conquered territory
///
/// Half the attacker's force (at least one), never so many that the
/// attacker is left without a garrison.
pub fn conquest_transfer(attacker_troops: Troops) -> Troops {
    let half = (attacker_troops / 2).max(1);
    half.min(attacker_troops.saturating_sub(GARRISON_LEFT_BEHIND))
}

/// Resolve one attack using already-rolled dice
///
/// Rejected attacks leave both territories untouched.
pub fn resolve_with_rolls(
    attacker: &mut Territory,
    defender: &mut Territory,
    rolls: DiceRolls,
) -> AttackReport {
    if let Some(reason) = check_attack(attacker, defender) {
        return AttackReport::rejected(reason);
    }

    let outcome = if rolls.attacker_wins() {
        let transferred = conquest_transfer(attacker.troop_count);
        defender.owner_color = attacker.owner_color.clone();
        defender.troop_count = transferred;
        attacker.troop_count -= transferred;
        AttackOutcome::Conquered { transferred }
    } else {
        attacker.troop_count = attacker.troop_count.saturating_sub(REPELLED_LOSS);
        AttackOutcome::Repelled
    };

    tracing::debug!(
        attacker = %attacker.name,
        defender = %defender.name,
        attacker_roll = rolls.attacker,
        defender_roll = rolls.defender,
        ?outcome,
        "Attack resolved"
    );

    AttackReport {
        rolls: Some(rolls),
        outcome,
    }
}

/// Resolve one attack, rolling the dice from `rng`
///
/// Dice are only drawn when the attack is allowed.
pub fn resolve_attack<R: Rng + ?Sized>(
    attacker: &mut Territory,
    defender: &mut Territory,
    rng: &mut R,
) -> AttackReport {
    if let Some(reason) = check_attack(attacker, defender) {
        tracing::debug!(attacker = %attacker.name, defender = %defender.name, %reason, "Attack rejected");
        return AttackReport::rejected(reason);
    }
    let rolls = roll_dice(rng);
    resolve_with_rolls(attacker, defender, rolls)
}
