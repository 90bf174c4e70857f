//! Actions - one committed unit of combat intent
//!
//! An [`Action`] binds an actor, a target and a damage strategy. It is built
//! right before execution and consumed by it, so no action can run twice.
//! Combatants are addressed by [`Side`]; the engine lends mutable access to
//! the pair for the single execution.

use crate::combatant::{Combatant, Side};
use crate::random::RandomSource;
use crate::skill::{BasicAttack, Effect};
use serde::{Deserialize, Serialize};

/// What kind of action was taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Attack,
    Skill,
}

/// Outcome of one executed action, everything a renderer needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageEvent {
    pub kind: ActionKind,
    pub actor: Side,
    pub target: Side,
    pub actor_name: String,
    pub target_name: String,
    /// Composed description of the effect chain used
    pub description: String,
    pub damage: u32,
    pub is_critical: bool,
    pub target_health: u32,
    pub target_max_health: u32,
    /// The hit took the target from alive to zero health
    pub is_lethal: bool,
}

enum Strategy {
    Attack,
    Skill(Box<dyn Effect>),
}

/// A single-use command against the opposing combatant
pub struct Action {
    actor: Side,
    target: Side,
    strategy: Strategy,
}

impl Action {
    /// Plain attack dealing the actor's attack power
    ///
    /// Panics if `actor == target`.
    pub fn attack(actor: Side, target: Side) -> Self {
        Self::with_strategy(actor, target, Strategy::Attack)
    }

    /// Skill use evaluating a pre-built effect chain
    ///
    /// Panics if `actor == target`.
    pub fn skill(actor: Side, target: Side, effect: Box<dyn Effect>) -> Self {
        Self::with_strategy(actor, target, Strategy::Skill(effect))
    }

    fn with_strategy(actor: Side, target: Side, strategy: Strategy) -> Self {
        assert_ne!(actor, target, "a combatant cannot target itself");
        Action {
            actor,
            target,
            strategy,
        }
    }

    pub fn actor(&self) -> Side {
        self.actor
    }

    pub fn target(&self) -> Side {
        self.target
    }

    pub fn kind(&self) -> ActionKind {
        match self.strategy {
            Strategy::Attack => ActionKind::Attack,
            Strategy::Skill(_) => ActionKind::Skill,
        }
    }

    /// Compute damage and apply it to the target
    ///
    /// Performs exactly one `apply_damage` on the target and mutates nothing
    /// else.
    pub(crate) fn execute(
        self,
        combatants: &mut [Combatant; 2],
        rng: &mut dyn RandomSource,
    ) -> DamageEvent {
        let kind = self.kind();
        let actor = &combatants[self.actor.index()];
        let actor_name = actor.name().to_string();

        let (roll, description) = match &self.strategy {
            Strategy::Attack => {
                let effect = BasicAttack::new(actor.attack_power());
                (effect.compute_damage(rng), effect.describe())
            }
            Strategy::Skill(effect) => (effect.compute_damage(rng), effect.describe()),
        };

        let target = &mut combatants[self.target.index()];
        let was_alive = target.is_alive();
        target.apply_damage(roll.amount);

        DamageEvent {
            kind,
            actor: self.actor,
            target: self.target,
            actor_name,
            target_name: target.name().to_string(),
            description,
            damage: roll.amount,
            is_critical: roll.is_critical,
            target_health: target.health(),
            target_max_health: target.max_health(),
            is_lethal: was_alive && !target.is_alive(),
        }
    }
}

impl std::fmt::Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("Action");
        debug
            .field("actor", &self.actor)
            .field("target", &self.target)
            .field("kind", &self.kind());
        if let Strategy::Skill(effect) = &self.strategy {
            debug.field("effect", &effect.describe());
        }
        debug.finish()
    }
}
