#![forbid(unsafe_code)]

//! Core domain model and decision logic for the Overload progression system.
//!
//! This crate provides:
//! - Domain types (performance records, ratings, equipment settings, results)
//! - Immutable rule tables
//! - The progression engine and its building blocks (increments, caps,
//!   rounding, volume evaluation, rep cycling, bodyweight handling)
//! - Exercise transition advisories
//! - Configuration, logging and CSV batch evaluation

pub mod types;
pub mod error;
pub mod rules;
pub mod config;
pub mod logging;
pub mod increment;
pub mod cap;
pub mod rounding;
pub mod volume;
pub mod cycling;
pub mod bodyweight;
pub mod transition;
pub mod engine;
pub mod batch;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::{Config, ProgressionConfig};
pub use rules::{CYCLING_TARGET_REPS, DEFAULT_EQUIPMENT_SETTINGS, MAX_REPS, MIN_REPS};
pub use transition::{ExerciseTransition, TransitionAdvisor, TransitionTable};
pub use engine::{calculate_progression, round_to_closest_increment, ProgressionEngine};
