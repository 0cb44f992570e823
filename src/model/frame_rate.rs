use std::time::Instant;

pub enum Message {
    FrameDrawn { now: Option<Instant> },
}

/// Frames-per-second meter, recomputed once per elapsed second.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRate {
    fps: Option<f64>,
    frames: u32,
    window_start: Instant,
}

impl FrameRate {
    pub fn new() -> Self {
        Self {
            fps: None,
            frames: 0,
            window_start: Instant::now(),
        }
    }

    pub fn fps(&self) -> Option<f64> {
        self.fps
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::FrameDrawn { now } => {
                self.frames += 1;
                let now = now.unwrap_or_else(Instant::now);
                let elapsed = now.saturating_duration_since(self.window_start).as_secs_f64();

                if elapsed >= 1.0 {
                    self.fps = Some(f64::from(self.frames) / elapsed);
                    self.window_start = now;
                    self.frames = 0;
                }
            }
        }
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        Self::new()
    }
}
