pub mod constants;
pub mod dice;
pub mod resolution;

pub use dice::{roll_dice, roll_die, DiceRolls};
pub use resolution::{
    check_attack, conquest_transfer, resolve_attack, resolve_with_rolls, AttackOutcome,
    AttackReport, RejectReason,
};
