//! # trailcursor - smoothed trailing cursor for the terminal
//!
//! A chain of points follows the mouse pointer, each one easing toward the
//! point in front of it, and fades out along its length.
//!
//! ## Example Usage
//!
//! ```rust
//! use trailcursor::model::trail::{Point, Trail};
//!
//! let mut trail = Trail::new(vec![0.08]).expect("valid coefficients");
//! trail.set_target(Point::new(100.0, 100.0));
//! trail.tick();
//!
//! assert!((trail.nodes()[0].position().x - 8.0).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`model`] - Trail filter, animator and other plain state
//! - [`infrastructure`] - Terminal, configuration, capability detection and frame scheduling
//! - [`presentation`] - Widgets
//! - [`integration`] - The runner tying everything together
//! - [`utils`] - Logging, panic handling and paths

pub mod action;
pub mod infrastructure;
pub mod integration;
pub mod model;
pub mod presentation;
pub mod utils;

pub use model::animator::Animator;
pub use model::trail::{Point, Trail, TrailError};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;
