//! Core types and definitions for the BRAWL auto-battle simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! state fragments, battle snapshots, events, configs, and constants.
//! It has no dependency on any runtime framework.

pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod stats;
pub mod types;
