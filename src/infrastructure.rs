//! Infrastructure layer
//!
//! This module handles the host side of the animation:
//! - Terminal I/O
//! - CLI argument processing
//! - Configuration loading
//! - Hover capability detection
//! - Frame scheduling

pub mod capability;
pub mod cli;
pub mod config;
pub mod frame_scheduler;
pub mod tui;
