//! Battle history for a session

use serde::Serialize;

use crate::combat::{AttackOutcome, DiceRolls};

/// One resolved (or refused) attack
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BattleRecord {
    /// 1-based attack number within the session
    pub number: u32,
    pub attacker: usize,
    pub defender: usize,
    pub rolls: Option<DiceRolls>,
    pub outcome: AttackOutcome,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct BattleLog {
    pub records: Vec<BattleRecord>,
    next_number: u32,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        attacker: usize,
        defender: usize,
        rolls: Option<DiceRolls>,
        outcome: AttackOutcome,
    ) -> u32 {
        self.next_number += 1;
        let number = self.next_number;

        self.records.push(BattleRecord {
            number,
            attacker,
            defender,
            rolls,
            outcome,
        });

        number
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&BattleRecord> {
        self.records.last()
    }

    /// Attacks that changed a territory's owner
    pub fn conquests(&self) -> impl Iterator<Item = &BattleRecord> {
        self.records
            .iter()
            .filter(|r| matches!(r.outcome, AttackOutcome::Conquered { .. }))
    }

    /// Every attack that involved territory `index`, on either side
    pub fn involving(&self, index: usize) -> impl Iterator<Item = &BattleRecord> {
        self.records
            .iter()
            .filter(move |r| r.attacker == index || r.defender == index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::RejectReason;

    #[test]
    fn test_records_are_numbered_in_order() {
        let mut log = BattleLog::new();
        let first = log.record(0, 1, Some(DiceRolls::new(5, 2)), AttackOutcome::Conquered { transferred: 2 });
        let second = log.record(1, 2, None, AttackOutcome::Rejected(RejectReason::SameFaction));

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(log.len(), 2);
        assert_eq!(log.last().map(|r| r.number), Some(2));
    }

    #[test]
    fn test_filters() {
        let mut log = BattleLog::new();
        log.record(0, 1, Some(DiceRolls::new(5, 2)), AttackOutcome::Conquered { transferred: 2 });
        log.record(2, 1, Some(DiceRolls::new(1, 2)), AttackOutcome::Repelled);
        log.record(2, 3, Some(DiceRolls::new(6, 2)), AttackOutcome::Conquered { transferred: 1 });

        assert_eq!(log.conquests().count(), 2);
        assert_eq!(log.involving(1).count(), 2);
        assert_eq!(log.involving(3).count(), 1);
        assert_eq!(log.involving(4).count(), 0);
    }
}
