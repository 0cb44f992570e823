use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Source of display frames for the trail animation.
///
/// `start` hands back a receiver that yields one instant per frame until the
/// token is cancelled. Frames are not queued: a frame that arrives while the
/// previous one is still pending is dropped.
pub trait FrameScheduler {
    fn start(&mut self, token: CancellationToken) -> mpsc::Receiver<Instant>;
}

/// Frames paced by a tokio interval on a background task.
#[derive(Debug, Clone)]
pub struct IntervalScheduler {
    frame_rate: f64,
}

const MIN_FRAME_RATE: f64 = 1.0;
const MAX_FRAME_RATE: f64 = 240.0;

impl IntervalScheduler {
    pub fn new(frame_rate: f64) -> Self {
        let frame_rate = if frame_rate.is_finite() {
            frame_rate.clamp(MIN_FRAME_RATE, MAX_FRAME_RATE)
        } else {
            MAX_FRAME_RATE
        };
        Self { frame_rate }
    }

    pub fn frame_rate(&self) -> f64 {
        self.frame_rate
    }
}

impl FrameScheduler for IntervalScheduler {
    fn start(&mut self, token: CancellationToken) -> mpsc::Receiver<Instant> {
        let (tx, rx) = mpsc::channel(1);
        let period = Duration::from_secs_f64(1.0 / self.frame_rate);
        tracing::debug!(frame_rate = self.frame_rate, "starting frame loop");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    instant = interval.tick() => {
                        let sent = tx.try_send(instant.into_std());
                        if let Err(mpsc::error::TrySendError::Closed(_)) = sent {
                            break;
                        }
                    }
                }
            }
            tracing::debug!("frame loop stopped");
        });

        rx
    }
}

/// Scheduler driven by hand, for tests and headless hosts.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    starts: usize,
    sender: Option<mpsc::Sender<Instant>>,
    token: Option<CancellationToken>,
}

const MANUAL_CAPACITY: usize = 64;

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times a frame loop was requested.
    pub fn start_count(&self) -> usize {
        self.starts
    }

    /// Delivers a frame. Returns false when no loop is running.
    pub fn emit(&self, at: Instant) -> bool {
        match (&self.sender, &self.token) {
            (Some(sender), Some(token)) if !token.is_cancelled() => sender.try_send(at).is_ok(),
            _ => false,
        }
    }
}

impl FrameScheduler for ManualScheduler {
    fn start(&mut self, token: CancellationToken) -> mpsc::Receiver<Instant> {
        let (tx, rx) = mpsc::channel(MANUAL_CAPACITY);
        self.starts += 1;
        self.sender = Some(tx);
        self.token = Some(token);
        rx
    }
}
