//! Console rendering of battle progress

use duel_core::prelude::*;

const HORIZONTAL_LINE: &str = "========================================";
const BOX_TOP: &str = "╔════════════════════════════════════════════╗";
const BOX_BOTTOM: &str = "╚════════════════════════════════════════════╝";

/// Prints the battle as it unfolds
#[derive(Debug, Default)]
pub struct ConsoleDisplay;

impl ConsoleDisplay {
    pub fn game_header(&self) {
        println!("{BOX_TOP}");
        println!("║        TURN-BASED DUEL SIMULATOR           ║");
        println!("{BOX_BOTTOM}\n");
    }

    pub fn phase_header(&self, phase: &str) {
        println!("\n>>> {phase} <<<\n");
    }

    pub fn combatant_created(&self, combatant: &Combatant) {
        println!("[CREATED] {combatant}");
    }

    pub fn seed(&self, seed: u64) {
        println!("Random seed: {seed}");
    }

    pub fn battle_status(&self, combatants: &[Combatant; 2]) {
        println!("\n{HORIZONTAL_LINE}");
        println!("           BATTLE STATUS");
        println!("{HORIZONTAL_LINE}");
        for combatant in combatants {
            println!("{combatant}");
        }
        println!("{HORIZONTAL_LINE}");
    }
}

impl BattleObserver for ConsoleDisplay {
    fn on_turn_start(&mut self, turn: u32) {
        println!("\n{BOX_TOP}");
        println!("║              TURN {turn:<2}                       ║");
        println!("{BOX_BOTTOM}");
    }

    fn on_action(&mut self, event: &DamageEvent) {
        let verb = match event.kind {
            ActionKind::Attack => "attacks",
            ActionKind::Skill => "uses a skill on",
        };
        println!("\n{} {} {}", event.actor_name, verb, event.target_name);
        println!("  → {}", event.description);
        if event.is_critical {
            println!("  → CRITICAL HIT!");
        }
        println!("  → Deals {} damage", event.damage);
        println!(
            "  → {} HP: {}/{}",
            event.target_name, event.target_health, event.target_max_health
        );
        if event.is_lethal {
            println!("  → {} is defeated!", event.target_name);
        }
    }

    fn on_max_turns_reached(&mut self, max_turns: u32) {
        println!("\n[SYSTEM] Battle reached the maximum of {max_turns} turns!");
    }

    fn on_battle_end(&mut self, report: &BattleReport) {
        println!("\n\n{BOX_TOP}");
        println!("║              BATTLE ENDED!                 ║");
        println!("{BOX_BOTTOM}");

        match (&report.outcome, &report.winner) {
            (BattleOutcome::Victory { .. }, Some(name)) => println!("\nWINNER: {name}"),
            (BattleOutcome::Undecided, _) => println!("\nUNDECIDED: nobody fell in time"),
            _ => println!("\nDRAW!"),
        }
        println!("Turns played: {}", report.turns);
        println!("Total commands executed: {}", report.actions);
    }
}
