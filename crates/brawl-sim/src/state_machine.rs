//! Battle phase machine.
//!
//! Transitions are validated before they are applied and carry no side
//! effects of their own; the loop service performs the actual setup and
//! teardown around an accepted transition.

use brawl_core::enums::BattlePhase;

/// Minimal guarded state machine. Rejected transitions leave the current
/// state untouched; self-transitions are always rejected.
#[derive(Debug)]
pub struct StateMachine<S> {
    current: S,
    allowed: fn(from: S, to: S) -> bool,
}

impl<S: Copy + PartialEq> StateMachine<S> {
    pub fn new(initial: S, allowed: fn(from: S, to: S) -> bool) -> Self {
        Self {
            current: initial,
            allowed,
        }
    }

    pub fn current(&self) -> S {
        self.current
    }

    /// Returns whether the transition was accepted and applied.
    pub fn try_transition(&mut self, to: S) -> bool {
        if to == self.current || !(self.allowed)(self.current, to) {
            return false;
        }
        self.current = to;
        true
    }
}

fn battle_transition_allowed(from: BattlePhase, to: BattlePhase) -> bool {
    matches!(
        (from, to),
        (BattlePhase::Preparation, BattlePhase::Running)
            | (BattlePhase::Running, BattlePhase::Finished)
            | (BattlePhase::Finished, BattlePhase::Preparation)
    )
}

/// The battle lifecycle: Preparation, Running, Finished, back to
/// Preparation. No shortcuts, no restarts from Running.
#[derive(Debug)]
pub struct BattleStateMachine {
    inner: StateMachine<BattlePhase>,
}

impl BattleStateMachine {
    pub fn new() -> Self {
        Self {
            inner: StateMachine::new(BattlePhase::Preparation, battle_transition_allowed),
        }
    }

    pub fn current(&self) -> BattlePhase {
        self.inner.current()
    }

    pub fn start(&mut self) -> bool {
        self.inner.try_transition(BattlePhase::Running)
    }

    pub fn finish(&mut self) -> bool {
        self.inner.try_transition(BattlePhase::Finished)
    }

    pub fn reset(&mut self) -> bool {
        self.inner.try_transition(BattlePhase::Preparation)
    }
}

impl Default for BattleStateMachine {
    fn default() -> Self {
        Self::new()
    }
}
