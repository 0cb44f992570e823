//! Presentation layer
//!
//! Stateless ratatui widgets that draw the stage, the trail and the status
//! bar from model values.

pub mod widgets;
