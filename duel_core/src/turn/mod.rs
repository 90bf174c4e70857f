//! Turn progression - action selection policy and the bounded battle loop
//!
//! A full turn is the first side acting, then the second side acting if the
//! battle is still ongoing. Each half-turn picks a plain attack or a skill
//! use with equal odds. The loop stops when someone falls or when the turn
//! limit runs out.

mod observer;

pub use observer::BattleObserver;

use crate::action::Action;
use crate::combatant::Side;
use crate::config::BattleConstants;
use crate::engine::{BattleEngine, BattleOutcome};
use crate::random::RandomSource;
use crate::skill::SkillBuilder;
use serde::{Deserialize, Serialize};

/// Picks attack or skill for each half-turn
#[derive(Debug, Clone, Copy)]
pub struct ActionSelector<'a> {
    skills: SkillBuilder<'a>,
}

impl<'a> ActionSelector<'a> {
    pub fn new(skills: SkillBuilder<'a>) -> Self {
        ActionSelector { skills }
    }

    /// Build the action `actor` takes this half-turn
    ///
    /// One `next_choice(2)` draw: 0 attacks, 1 uses the actor's skill chain.
    pub fn select<R: RandomSource>(&self, engine: &mut BattleEngine<R>, actor: Side) -> Action {
        let target = actor.opponent();
        let choice = engine.rng_mut().next_choice(2);
        match choice {
            0 => Action::attack(actor, target),
            _ => Action::skill(actor, target, self.skills.build(engine.combatant(actor))),
        }
    }
}

/// Summary of a finished battle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    pub outcome: BattleOutcome,
    /// Name of the surviving combatant, if there is exactly one
    pub winner: Option<String>,
    /// Full turns started
    pub turns: u32,
    /// Actions executed
    pub actions: usize,
}

/// Drives a battle engine turn by turn
#[derive(Debug, Clone, Copy)]
pub struct TurnController<'a> {
    max_turns: u32,
    selector: ActionSelector<'a>,
}

impl<'a> TurnController<'a> {
    pub fn new(constants: &'a BattleConstants) -> Self {
        TurnController {
            max_turns: constants.battle.max_turns,
            selector: ActionSelector::new(SkillBuilder::new(&constants.skills)),
        }
    }

    pub fn max_turns(&self) -> u32 {
        self.max_turns
    }

    /// Run the battle to completion, reporting progress to `observer`
    pub fn run<R: RandomSource>(
        &self,
        engine: &mut BattleEngine<R>,
        observer: &mut dyn BattleObserver,
    ) -> BattleReport {
        let mut turn = 0;
        while engine.is_ongoing() && turn < self.max_turns {
            turn += 1;
            observer.on_turn_start(turn);
            self.play_turn(engine, observer);
        }

        let outcome = match engine.outcome() {
            Some(outcome) => outcome,
            None => {
                observer.on_max_turns_reached(self.max_turns);
                BattleOutcome::Undecided
            }
        };

        let report = BattleReport {
            outcome,
            winner: outcome
                .winner()
                .map(|side| engine.combatant(side).name().to_string()),
            turns: turn,
            actions: engine.history_count(),
        };
        tracing::info!(
            outcome = ?report.outcome,
            winner = ?report.winner,
            turns = report.turns,
            actions = report.actions,
            "Battle finished"
        );

        observer.on_battle_end(&report);
        report
    }

    /// Play one full turn: first side, then second side while still ongoing
    pub fn play_turn<R: RandomSource>(
        &self,
        engine: &mut BattleEngine<R>,
        observer: &mut dyn BattleObserver,
    ) {
        for actor in [Side::First, Side::Second] {
            if !engine.is_ongoing() {
                break;
            }
            let action = self.selector.select(engine, actor);
            match engine.execute(action) {
                Ok(event) => observer.on_action(&event),
                Err(e) => {
                    tracing::warn!(error = %e, "Turn stopped early");
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionKind, DamageEvent};
    use crate::combatant::{create_combatant, Archetype, Combatant};
    use crate::random::{ScriptedRandom, SeededRandom};
    use proptest::prelude::*;

    const ATTACK: usize = 0;
    const SKILL: usize = 1;

    fn duel<R: RandomSource>(rng: R) -> BattleEngine<R> {
        BattleEngine::new(
            create_combatant("Aragorn", Archetype::Warrior).unwrap(),
            create_combatant("Gandalf", Archetype::Mage).unwrap(),
            rng,
        )
    }

    #[derive(Default)]
    struct Recorder {
        turns: Vec<u32>,
        events: Vec<DamageEvent>,
        max_turns_hit: Option<u32>,
        report: Option<BattleReport>,
    }

    impl BattleObserver for Recorder {
        fn on_turn_start(&mut self, turn: u32) {
            self.turns.push(turn);
        }

        fn on_action(&mut self, event: &DamageEvent) {
            self.events.push(event.clone());
        }

        fn on_max_turns_reached(&mut self, max_turns: u32) {
            self.max_turns_hit = Some(max_turns);
        }

        fn on_battle_end(&mut self, report: &BattleReport) {
            self.report = Some(report.clone());
        }
    }

    #[test]
    fn test_basic_attacks_only_warrior_wins() {
        let constants = BattleConstants::default();
        let controller = TurnController::new(&constants);
        let mut engine = duel(ScriptedRandom::new().with_choices([ATTACK]));
        let mut recorder = Recorder::default();

        let report = controller.run(&mut engine, &mut recorder);

        // Mage falls to the 5th warrior hit and never swings a 5th time
        assert_eq!(report.turns, 5);
        assert_eq!(report.actions, 9);
        assert_eq!(
            report.outcome,
            BattleOutcome::Victory {
                winner: Side::First
            }
        );
        assert_eq!(report.winner.as_deref(), Some("Aragorn"));
        assert_eq!(engine.combatant(Side::First).health(), 150 - 4 * 30);
        assert_eq!(engine.combatant(Side::Second).health(), 0);
        assert_eq!(engine.winner().map(Combatant::name), Some("Aragorn"));

        assert_eq!(recorder.turns, vec![1, 2, 3, 4, 5]);
        assert_eq!(recorder.events.len(), 9);
        assert!(recorder.events.iter().all(|e| e.kind == ActionKind::Attack));
        assert!(recorder.events[8].is_lethal);
        assert_eq!(recorder.max_turns_hit, None);
        assert_eq!(recorder.report, Some(report));
    }

    #[test]
    fn test_turn_limit_is_undecided() {
        let constants = BattleConstants::parse("[battle]\nmax_turns = 2\n").unwrap();
        let controller = TurnController::new(&constants);
        let mut engine = duel(ScriptedRandom::new().with_choices([ATTACK]));
        let mut recorder = Recorder::default();

        let report = controller.run(&mut engine, &mut recorder);

        assert_eq!(report.outcome, BattleOutcome::Undecided);
        assert_ne!(report.outcome, BattleOutcome::DoubleKnockout);
        assert_eq!(report.winner, None);
        assert_eq!(report.turns, 2);
        assert_eq!(report.actions, 4);
        assert!(engine.is_ongoing());
        assert_eq!(recorder.max_turns_hit, Some(2));
    }

    #[test]
    fn test_skills_only_with_crits() {
        let constants = BattleConstants::default();
        let controller = TurnController::new(&constants);
        let mut engine = duel(
            ScriptedRandom::new()
                .with_choices([SKILL])
                .with_uniforms([0.0]),
        );

        let report = controller.run(&mut engine, &mut ());

        // Warrior crits for (20 + 10) * 2 = 60, mage for (45 + 10) * 2 = 110.
        // Turn 1: mage 40, warrior 40. Turn 2: mage dies first.
        assert_eq!(report.turns, 2);
        assert_eq!(report.actions, 3);
        assert_eq!(report.winner.as_deref(), Some("Aragorn"));
        assert!(engine.history().iter().all(|e| e.is_critical));
        assert_eq!(
            engine.history()[1].description,
            "Fireball + Damage Boost + Critical Chance"
        );
    }

    #[test]
    fn test_selector_draws_once_per_half_turn() {
        let constants = BattleConstants::default();
        let selector = ActionSelector::new(SkillBuilder::new(&constants.skills));
        let mut engine = duel(ScriptedRandom::new().with_choices([SKILL, ATTACK]));

        let first = selector.select(&mut engine, Side::First);
        assert_eq!(first.kind(), ActionKind::Skill);
        assert_eq!(first.target(), Side::Second);

        let second = selector.select(&mut engine, Side::Second);
        assert_eq!(second.kind(), ActionKind::Attack);
        assert_eq!(second.target(), Side::First);
        assert_eq!(engine.rng_mut().choices_drawn(), 2);
    }

    #[test]
    fn test_same_seed_same_battle() {
        let constants = BattleConstants::default();
        let controller = TurnController::new(&constants);

        let mut a = duel(SeededRandom::new(2024));
        let mut b = duel(SeededRandom::new(2024));
        let report_a = controller.run(&mut a, &mut ());
        let report_b = controller.run(&mut b, &mut ());

        assert_eq!(report_a, report_b);
        assert_eq!(a.history(), b.history());
        assert_eq!(a.combatants(), b.combatants());
    }

    proptest! {
        #[test]
        fn battle_respects_turn_limit(seed in any::<u64>(), max_turns in 1u32..30) {
            let mut constants = BattleConstants::default();
            constants.battle.max_turns = max_turns;
            let controller = TurnController::new(&constants);
            let mut engine = duel(SeededRandom::new(seed));

            let report = controller.run(&mut engine, &mut ());

            prop_assert!(report.turns <= max_turns);
            prop_assert!(engine.history_count() <= 2 * max_turns as usize);
            prop_assert_eq!(report.actions, engine.history_count());
            match report.outcome {
                BattleOutcome::Undecided => {
                    prop_assert!(engine.is_ongoing());
                    prop_assert_eq!(report.turns, max_turns);
                }
                BattleOutcome::Victory { winner } => {
                    prop_assert!(!engine.is_ongoing());
                    prop_assert!(engine.combatant(winner).is_alive());
                    prop_assert!(!engine.combatant(winner.opponent()).is_alive());
                }
                BattleOutcome::DoubleKnockout => {
                    prop_assert!(false, "single hits cannot knock out both sides");
                }
            }
        }
    }
}
