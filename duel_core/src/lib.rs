//! duel_core - Turn-based battle engine for two combatants
//!
//! This library provides:
//! - Combatant: health and attack stats, built per archetype
//! - Effect: composable damage computations (base skill + modifiers)
//! - Action: single-use attack or skill commands
//! - BattleEngine: executes actions, keeps history, decides the outcome
//! - TurnController: random attack/skill selection and the bounded turn loop
//!
//! All randomness comes from an injected [`RandomSource`], so a battle is
//! reproducible from its seed.
//!
//! # Quick Start
//!
//! ```rust
//! use duel_core::prelude::*;
//!
//! let constants = BattleConstants::default();
//! let aragorn = Combatant::from_archetype("Aragorn", Archetype::Warrior, &constants.archetypes)?;
//! let gandalf = Combatant::from_archetype("Gandalf", Archetype::Mage, &constants.archetypes)?;
//!
//! let mut engine = BattleEngine::new(aragorn, gandalf, SeededRandom::new(7));
//! let report = TurnController::new(&constants).run(&mut engine, &mut ());
//!
//! assert!(report.turns <= constants.battle.max_turns);
//! assert_eq!(report.actions, engine.history_count());
//! # Ok::<(), CombatantError>(())
//! ```

pub mod action;
pub mod combatant;
pub mod config;
pub mod engine;
pub mod prelude;
pub mod random;
pub mod skill;
pub mod turn;

// Core API - what most users need
pub use action::{Action, ActionKind, DamageEvent};
pub use combatant::{create_combatant, Archetype, Combatant, CombatantError, Side};
pub use engine::{BattleEngine, BattleError, BattleOutcome, BattleStatus};
pub use turn::{ActionSelector, BattleObserver, BattleReport, TurnController};

// Configuration
pub use config::{BattleConstants, ConfigError};

// Randomness
pub use random::{RandomSource, ScriptedRandom, SeededRandom};

// Advanced: building custom skill chains
pub use skill::{DamageRoll, Effect, SkillBuilder};
