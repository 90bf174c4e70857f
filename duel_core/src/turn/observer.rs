//! Battle progress callbacks

use super::BattleReport;
use crate::action::DamageEvent;

/// Receives battle progress as it happens
///
/// All methods default to doing nothing; `()` is the observer that ignores
/// everything.
pub trait BattleObserver {
    /// A new full turn begins (1-based)
    fn on_turn_start(&mut self, _turn: u32) {}

    /// An action was executed
    fn on_action(&mut self, _event: &DamageEvent) {}

    /// The turn limit ran out with both combatants standing
    fn on_max_turns_reached(&mut self, _max_turns: u32) {}

    /// The battle is over
    fn on_battle_end(&mut self, _report: &BattleReport) {}
}

impl BattleObserver for () {}
