//! UI module for activity-guide
//!
//! This module contains the rendering functions for the browser: the
//! phase navigation tiles, phase sections and category cards.

mod helpers;
mod navigation;
mod render;
mod sections;

pub use navigation::build_tiles;
pub use render::{draw, GUIDE_TITLE};
