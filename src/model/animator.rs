//! Trailing-cursor animator
//!
//! Wraps a [`Trail`] with the pointer bookkeeping of a host: visibility,
//! hover overlay and the frame loop that drives it. An animator is either
//! active or inactive for its whole life; the only transition happens in
//! [`Animator::setup`].

use std::future;
use std::time::Instant;

use ratatui::layout::Rect;
use strum::Display;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::infrastructure::capability::HoverCapability;
use crate::infrastructure::frame_scheduler::FrameScheduler;
use crate::model::hover::HoverState;
use crate::model::trail::{Point, Trail};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InactiveReason {
    #[strum(to_string = "no hover support")]
    HoverUnsupported,
    #[strum(to_string = "no surface")]
    MissingSurface,
}

#[derive(Debug)]
pub enum Animator {
    Inactive(InactiveReason),
    Active(ActiveAnimator),
}

impl Animator {
    /// Activates the trail when the surface is usable and the host reports
    /// hover support. Otherwise nothing is scheduled and the animator stays
    /// inactive.
    pub fn setup(
        trail: Trail,
        capability: &dyn HoverCapability,
        surface: Rect,
        scheduler: &mut dyn FrameScheduler,
    ) -> Self {
        if surface.is_empty() {
            tracing::info!(?surface, "cursor trail disabled: nothing to draw on");
            return Self::Inactive(InactiveReason::MissingSurface);
        }
        if !capability.supports_hover() {
            tracing::info!("cursor trail disabled: no hover-capable pointer");
            return Self::Inactive(InactiveReason::HoverUnsupported);
        }

        let token = CancellationToken::new();
        let frames = scheduler.start(token.clone());
        tracing::info!(nodes = trail.len(), "cursor trail active");
        Self::Active(ActiveAnimator {
            trail,
            visible: false,
            hover: HoverState::Idle,
            token,
            frames,
        })
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    pub fn active(&self) -> Option<&ActiveAnimator> {
        match self {
            Self::Active(active) => Some(active),
            Self::Inactive(_) => None,
        }
    }

    fn active_mut(&mut self) -> Option<&mut ActiveAnimator> {
        match self {
            Self::Active(active) => Some(active),
            Self::Inactive(_) => None,
        }
    }

    pub fn pointer_moved(&mut self, position: Point) {
        if let Some(active) = self.active_mut() {
            active.pointer_moved(position);
        }
    }

    pub fn pointer_entered(&mut self) {
        if let Some(active) = self.active_mut() {
            active.visible = true;
        }
    }

    pub fn pointer_left(&mut self) {
        if let Some(active) = self.active_mut() {
            active.visible = false;
        }
    }

    pub fn set_hover(&mut self, hover: HoverState) {
        if let Some(active) = self.active_mut() {
            active.hover = hover;
        }
    }

    pub fn tick(&mut self) {
        if let Some(active) = self.active_mut() {
            active.tick();
        }
    }

    pub fn stop(&mut self) {
        if let Some(active) = self.active_mut() {
            active.stop();
        }
    }

    /// Waits for the next frame of a running animator.
    ///
    /// Never resolves when the animator is inactive or stopped, so it can sit
    /// in a `select!` next to other event sources.
    pub async fn next_frame(&mut self) -> Instant {
        match self.active_mut() {
            Some(active) if !active.is_stopped() => match active.frames.recv().await {
                Some(at) => return at,
                None => {
                    tracing::warn!("frame source closed, stopping cursor trail");
                    active.stop();
                }
            },
            _ => {}
        }
        future::pending().await
    }

    /// Short state label for status displays.
    pub fn state_label(&self) -> String {
        match self {
            Self::Active(active) if active.is_stopped() => "STOPPED".to_owned(),
            Self::Active(_) => "ACTIVE".to_owned(),
            Self::Inactive(reason) => format!("INACTIVE ({reason})"),
        }
    }
}

#[derive(Debug)]
pub struct ActiveAnimator {
    trail: Trail,
    visible: bool,
    hover: HoverState,
    token: CancellationToken,
    frames: mpsc::Receiver<Instant>,
}

impl ActiveAnimator {
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn pointer(&self) -> Point {
        self.trail.target()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn hover(&self) -> HoverState {
        self.hover
    }

    pub fn is_stopped(&self) -> bool {
        self.token.is_cancelled()
    }

    fn pointer_moved(&mut self, position: Point) {
        self.trail.set_target(position);
        self.visible = true;
    }

    fn tick(&mut self) {
        if !self.is_stopped() {
            self.trail.tick();
        }
    }

    /// Cancels the frame loop. Later ticks leave the trail untouched.
    pub fn stop(&mut self) {
        if !self.token.is_cancelled() {
            tracing::debug!("stopping cursor trail");
            self.token.cancel();
        }
    }
}
