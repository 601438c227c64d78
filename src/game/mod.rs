//! Game session
//!
//! Owns the map, the player, the secret mission and the dice RNG for the
//! whole game. Each attack is resolved in place and the mission is
//! re-checked right after it.

pub mod log;

pub use log::{BattleLog, BattleRecord};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::combat::{resolve_attack, AttackReport};
use crate::core::error::{ConquestError, Result};
use crate::core::types::Player;
use crate::mission::{is_mission_complete, MissionId, MissionProgress};
use crate::territory::{standings, Standings, TerritoryMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// Mission fulfilled; no more attacks are accepted
    Won,
}

/// What one call to `GameSession::attack` produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub report: AttackReport,
    pub mission_complete: bool,
}

#[derive(Debug)]
pub struct GameSession<R = ChaCha8Rng> {
    map: TerritoryMap,
    player: Player,
    mission: MissionId,
    rng: R,
    log: BattleLog,
    status: GameStatus,
}

impl GameSession<ChaCha8Rng> {
    /// Start a session with a mission drawn from a seeded RNG
    pub fn seeded(map: TerritoryMap, player: Player, seed: u64) -> Self {
        Self::start(map, player, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameSession<R> {
    /// Start a session with a known mission
    pub fn new(map: TerritoryMap, player: Player, mission: MissionId, rng: R) -> Self {
        tracing::info!(
            territories = map.len(),
            player = %player.color,
            mission = mission.key(),
            "Session started"
        );

        // Not checked at setup; the first attack attempt checks it
        Self {
            map,
            player,
            mission,
            rng,
            log: BattleLog::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Start a session, drawing the mission from `rng`
    pub fn start(map: TerritoryMap, player: Player, mut rng: R) -> Self {
        let mission = MissionId::random(&mut rng);
        Self::new(map, player, mission, rng)
    }

    pub fn map(&self) -> &TerritoryMap {
        &self.map
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn mission(&self) -> MissionId {
        self.mission
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }

    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    pub fn progress(&self) -> MissionProgress {
        MissionProgress::measure(self.player.color.as_str(), self.map.as_slice())
    }

    pub fn standings(&self) -> Standings {
        standings(self.map.as_slice())
    }

    /// Evaluate the mission against the current map, marking the session won
    ///
    /// Runs after every attack attempt, including ones refused before any
    /// dice were rolled (bad selection, single-territory map).
    pub fn check_mission(&mut self) -> bool {
        if self.is_won() {
            return true;
        }
        if is_mission_complete(self.mission, self.player.color.as_str(), self.map.as_slice()) {
            self.status = GameStatus::Won;
            tracing::info!(attacks = self.log.len(), mission = self.mission.key(), "Mission complete");
        }
        self.is_won()
    }

    /// Resolve one attack between two 0-based territory indices
    ///
    /// Bad selections are errors and leave no trace in the log. Refused
    /// attacks (too few troops, same color) are logged outcomes.
    pub fn attack(&mut self, attacker: usize, defender: usize) -> Result<TurnReport> {
        if self.is_won() {
            return Err(ConquestError::GameOver);
        }

        let (attacking, defending) = self.map.pair_mut(attacker, defender)?;
        let report = resolve_attack(attacking, defending, &mut self.rng);

        self.log.record(attacker, defender, report.rolls, report.outcome);
        let mission_complete = self.check_mission();

        Ok(TurnReport {
            report,
            mission_complete,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{AttackOutcome, RejectReason};
    use crate::core::error::SelectionError;
    use crate::territory::Territory;

    fn session(mission: MissionId, territories: Vec<Territory>) -> GameSession {
        let map = TerritoryMap::from_territories(territories).expect("non-empty map");
        GameSession::new(
            map,
            Player::new("Azul", 9),
            mission,
            ChaCha8Rng::seed_from_u64(11),
        )
    }

    #[test]
    fn test_check_mission_without_attack() {
        let mut game = session(MissionId::ConquerAll, vec![Territory::new("Ilha", "Azul", 5)]);
        assert_eq!(game.status(), GameStatus::InProgress);

        assert!(game.check_mission());
        assert!(game.is_won());
        assert!(matches!(game.attack(0, 0), Err(ConquestError::GameOver)));
    }

    #[test]
    fn test_check_mission_leaves_unfinished_game_running() {
        let mut game = session(
            MissionId::ConquerAll,
            vec![Territory::new("A", "Azul", 5), Territory::new("B", "Red", 2)],
        );
        assert!(!game.check_mission());
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_invalid_selection_is_not_logged() {
        let mut game = session(
            MissionId::ConquerAll,
            vec![Territory::new("A", "Azul", 5), Territory::new("B", "Red", 2)],
        );

        let err = game.attack(0, 0).unwrap_err();
        assert!(matches!(
            err,
            ConquestError::InvalidSelection(SelectionError::SelfAttack(0))
        ));
        assert!(game.attack(0, 9).is_err());
        assert!(game.log().is_empty());
    }

    #[test]
    fn test_rejected_attack_is_logged() {
        let mut game = session(
            MissionId::ConquerAll,
            vec![Territory::new("A", "Azul", 1), Territory::new("B", "Red", 2)],
        );

        let turn = game.attack(0, 1).expect("valid selection");
        assert_eq!(
            turn.report.outcome,
            AttackOutcome::Rejected(RejectReason::InsufficientTroops)
        );
        assert!(!turn.mission_complete);
        assert_eq!(game.log().len(), 1);
    }

    #[test]
    fn test_session_ends_on_mission() {
        // Attack until the single enemy territory falls
        let mut game = session(
            MissionId::ConquerAll,
            vec![Territory::new("A", "Azul", 40), Territory::new("B", "Red", 1)],
        );

        let mut attacks = 0;
        while !game.is_won() && attacks < 30 {
            game.attack(0, 1).expect("valid selection");
            attacks += 1;
        }

        assert!(game.is_won());
        assert_eq!(game.status(), GameStatus::Won);
        assert!(matches!(game.attack(0, 1), Err(ConquestError::GameOver)));
        assert_eq!(game.log().conquests().count(), 1);
    }

    #[test]
    fn test_seeded_sessions_match() {
        let territories = vec![Territory::new("A", "Azul", 9), Territory::new("B", "Red", 3)];
        let map = TerritoryMap::from_territories(territories).unwrap();

        let mut a = GameSession::seeded(map.clone(), Player::new("Azul", 9), 5);
        let mut b = GameSession::seeded(map, Player::new("Azul", 9), 5);
        assert_eq!(a.mission(), b.mission());

        for _ in 0..3 {
            let left = a.attack(0, 1);
            let right = b.attack(0, 1);
            match (left, right) {
                (Ok(l), Ok(r)) => assert_eq!(l, r),
                (Err(ConquestError::GameOver), Err(ConquestError::GameOver)) => {}
                other => panic!("sessions diverged: {:?}", other),
            }
        }
    }
}
