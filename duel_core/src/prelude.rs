//! Prelude module for convenient imports
//!
//! ```rust
//! use duel_core::prelude::*;
//! ```

// Combatants
pub use crate::combatant::{create_combatant, Archetype, Combatant, CombatantError, Side};

// Actions and skills
pub use crate::action::{Action, ActionKind, DamageEvent};
pub use crate::skill::{DamageRoll, Effect, SkillBuilder};

// Battle flow
pub use crate::engine::{BattleEngine, BattleError, BattleOutcome, BattleStatus};
pub use crate::turn::{BattleObserver, BattleReport, TurnController};

// Config
pub use crate::config::{BattleConstants, ConfigError};

// Randomness
pub use crate::random::{RandomSource, ScriptedRandom, SeededRandom};
