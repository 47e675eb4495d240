//! Combat resolution systems. Each is a set of pure functions over the
//! state fragments in `brawl-core`; orchestration lives in `step`.

pub mod attack;
pub mod cooldown;
pub mod health;
pub mod knockback;
pub mod wrath;
