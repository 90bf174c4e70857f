//! Console duel between a Warrior and a Mage
//!
//! Builds both combatants, runs the battle to completion and prints every
//! action. Pass `--seed` to replay a battle exactly.

mod display;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use duel_core::prelude::*;
use serde::Serialize;

use crate::display::ConsoleDisplay;

#[derive(Parser, Debug)]
#[command(name = "duel")]
#[command(about = "Simulate a turn-based duel between a Warrior and a Mage")]
#[command(version)]
struct Args {
    /// Seed for the battle's random source (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Path to a battle constants TOML file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Name of the Warrior
    #[arg(long, default_value = "Aragorn")]
    warrior: String,

    /// Name of the Mage
    #[arg(long, default_value = "Gandalf")]
    mage: String,

    /// Print the report and full history as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    seed: u64,
    combatants: &'a [Combatant; 2],
    report: &'a BattleReport,
    history: &'a [DamageEvent],
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let constants = match &args.config {
        Some(path) => BattleConstants::load_from_path(path)
            .with_context(|| format!("loading battle constants from {}", path.display()))?,
        None => BattleConstants::default(),
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::debug!(seed, config = ?args.config, "Starting duel");

    let warrior = Combatant::from_archetype(&args.warrior, Archetype::Warrior, &constants.archetypes)
        .context("creating the Warrior")?;
    let mage = Combatant::from_archetype(&args.mage, Archetype::Mage, &constants.archetypes)
        .context("creating the Mage")?;

    let controller = TurnController::new(&constants);

    if args.json {
        let mut engine = BattleEngine::new(warrior, mage, SeededRandom::new(seed));
        let report = controller.run(&mut engine, &mut ());
        let output = JsonOutput {
            seed,
            combatants: engine.combatants(),
            report: &report,
            history: engine.history(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let mut display = ConsoleDisplay;
    display.game_header();

    display.phase_header("PHASE 1: COMBATANT CREATION");
    display.combatant_created(&warrior);
    display.combatant_created(&mage);

    display.phase_header("PHASE 2: BATTLE INITIALIZATION");
    display.seed(seed);
    let mut engine = BattleEngine::new(warrior, mage, SeededRandom::new(seed));
    display.battle_status(engine.combatants());

    display.phase_header("PHASE 3: BATTLE START");
    controller.run(&mut engine, &mut display);

    display.battle_status(engine.combatants());
    Ok(())
}
