//! Animation state
//!
//! The trail filter and the animator that owns it, plus the hover overlay,
//! stage layout and frame-rate meter. Only the animator touches async: it
//! receives frames from a scheduler and cancels the loop on stop.

pub mod animator;
pub mod frame_rate;
pub mod hover;
pub mod stage;
pub mod trail;
