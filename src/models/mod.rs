//! Data models for the activity guide
//!
//! This module contains the core data structures:
//! - Phase, category and dataset types for loading activities.json
//! - Enums for selection state and key handling

pub mod dataset;
pub mod enums;

// Re-exports for convenient access
pub use dataset::{ActivityData, Category, DataSource, Phase};
pub use enums::{Action, Selection};
