//! Host integration
//!
//! Ties the terminal, the animator and the widgets together.

pub mod app_runner;
pub mod renderer;
