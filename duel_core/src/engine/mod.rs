//! Battle engine - holds the combatant pair, executes actions, keeps history
//!
//! The engine has two states, ongoing and concluded. The state is never
//! stored: it is derived from combatant health whenever it is asked for, so
//! the battle concludes the instant a hit takes someone to zero.

use crate::action::{Action, DamageEvent};
use crate::combatant::{Combatant, Side};
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error executing an action
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleError {
    #[error("Battle already concluded after {actions} actions")]
    Concluded { actions: usize },
}

/// Whether the battle can still take actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleStatus {
    Ongoing,
    Concluded,
}

/// How a battle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum BattleOutcome {
    /// Exactly one combatant is still standing
    Victory { winner: Side },
    /// Both combatants are down
    DoubleKnockout,
    /// The turn limit ran out with both combatants alive
    Undecided,
}

impl BattleOutcome {
    pub fn winner(&self) -> Option<Side> {
        match self {
            BattleOutcome::Victory { winner } => Some(*winner),
            BattleOutcome::DoubleKnockout | BattleOutcome::Undecided => None,
        }
    }
}

/// Invoker for [`Action`]s against a fixed pair of combatants
///
/// Owns the random source every action evaluation draws from.
#[derive(Debug)]
pub struct BattleEngine<R> {
    combatants: [Combatant; 2],
    history: Vec<DamageEvent>,
    rng: R,
}

impl<R: RandomSource> BattleEngine<R> {
    pub fn new(first: Combatant, second: Combatant, rng: R) -> Self {
        BattleEngine {
            combatants: [first, second],
            history: Vec::new(),
            rng,
        }
    }

    /// Execute an action and record it
    ///
    /// Once the battle has concluded every further action is rejected
    /// without touching the combatants or the history.
    pub fn execute(&mut self, action: Action) -> Result<DamageEvent, BattleError> {
        if !self.is_ongoing() {
            tracing::warn!(
                actor = ?action.actor(),
                kind = ?action.kind(),
                "Rejected action on concluded battle"
            );
            return Err(BattleError::Concluded {
                actions: self.history.len(),
            });
        }

        let event = action.execute(&mut self.combatants, &mut self.rng);
        tracing::debug!(
            actor = %event.actor_name,
            target = %event.target_name,
            skill = %event.description,
            damage = event.damage,
            critical = event.is_critical,
            target_health = event.target_health,
            "Action executed"
        );

        self.history.push(event.clone());
        Ok(event)
    }

    /// Random source for callers that choose actions
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

impl<R> BattleEngine<R> {
    pub fn status(&self) -> BattleStatus {
        if self.combatants.iter().all(Combatant::is_alive) {
            BattleStatus::Ongoing
        } else {
            BattleStatus::Concluded
        }
    }

    pub fn is_ongoing(&self) -> bool {
        self.status() == BattleStatus::Ongoing
    }

    /// How the battle ended, `None` while it is still ongoing
    ///
    /// Never returns [`BattleOutcome::Undecided`]; only the turn limit can
    /// decide that.
    pub fn outcome(&self) -> Option<BattleOutcome> {
        match (self.combatants[0].is_alive(), self.combatants[1].is_alive()) {
            (true, true) => None,
            (true, false) => Some(BattleOutcome::Victory {
                winner: Side::First,
            }),
            (false, true) => Some(BattleOutcome::Victory {
                winner: Side::Second,
            }),
            (false, false) => Some(BattleOutcome::DoubleKnockout),
        }
    }

    /// The surviving combatant, `None` on a double knockout
    ///
    /// Panics if the battle is still ongoing.
    pub fn winner(&self) -> Option<&Combatant> {
        let outcome = self
            .outcome()
            .unwrap_or_else(|| panic!("winner() called while the battle is ongoing"));
        outcome.winner().map(|side| self.combatant(side))
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    pub fn combatants(&self) -> &[Combatant; 2] {
        &self.combatants
    }

    /// Number of actions executed so far
    pub fn history_count(&self) -> usize {
        self.history.len()
    }

    /// Executed actions, oldest first
    pub fn history(&self) -> &[DamageEvent] {
        &self.history
    }
}
