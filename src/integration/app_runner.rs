use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tokio::sync::Mutex;

use crate::{
    action::Action,
    infrastructure::{
        capability::HoverCapability, config::Config, frame_scheduler::FrameScheduler, tui,
    },
    integration::renderer::{self, View},
    model::{
        animator::Animator,
        frame_rate::{FrameRate, Message},
        hover::HoverState,
        stage::Stage,
        trail::Point,
    },
    Result,
};

enum Step {
    Event(Option<tui::Event>),
    Frame(Instant),
}

/// Drives the terminal: feeds pointer events to the animator, applies frames
/// and redraws when something changed.
pub struct AppRunner {
    config: Config,
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    animator: Animator,
    stage: Stage,
    hovered: Option<usize>,
    frame_rate: FrameRate,
    needs_render: bool,
    should_quit: bool,
}

impl AppRunner {
    /// Lays out the stage on the current terminal size and sets up the
    /// animator on it.
    pub async fn new(
        config: Config,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
        capability: &dyn HoverCapability,
        scheduler: &mut dyn FrameScheduler,
    ) -> Result<Self> {
        let trail = config.trail.build()?;
        let screen = tui.lock().await.size()?;
        let (stage_area, _) = Stage::split_screen(screen);
        let stage = Stage::new(stage_area, &config.targets);
        let animator = Animator::setup(trail, capability, stage.area(), scheduler);

        Ok(Self {
            config,
            tui,
            animator,
            stage,
            hovered: None,
            frame_rate: FrameRate::new(),
            needs_render: true,
            should_quit: false,
        })
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn frame_rate(&self) -> &FrameRate {
        &self.frame_rate
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Runs until a quit action or until the event source closes. The frame
    /// loop is stopped on the way out.
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        let result = self.run_loop().await;
        self.animator.stop();
        self.tui.lock().await.exit()?;
        result
    }

    async fn run_loop(&mut self) -> Result<()> {
        self.render().await?;

        while !self.should_quit {
            let step = {
                let tui = Arc::clone(&self.tui);
                tokio::select! {
                    event = async move {
                        let mut guard = tui.lock().await;
                        let event = guard.next().await;
                        event
                    } => Step::Event(event),
                    at = self.animator.next_frame() => Step::Frame(at),
                }
            };

            match step {
                Step::Event(Some(event)) => self.handle_event(event).await?,
                Step::Event(None) => {
                    tracing::info!("event source closed");
                    self.should_quit = true;
                }
                Step::Frame(at) => self.on_frame(at),
            }

            if self.needs_render && !self.should_quit {
                self.render().await?;
            }
        }

        Ok(())
    }

    pub async fn handle_event(&mut self, event: tui::Event) -> Result<()> {
        match event {
            tui::Event::Key(key) => {
                if let Some(action) = self.config.keybindings.action_for(&key) {
                    self.dispatch(action);
                }
            }
            tui::Event::Mouse(mouse) => self.on_mouse(mouse),
            tui::Event::FocusLost => {
                self.animator.pointer_left();
                self.set_hovered(None);
                self.needs_render = true;
            }
            tui::Event::FocusGained => {
                self.animator.pointer_entered();
                self.needs_render = true;
            }
            tui::Event::Resize(w, h) => {
                let screen = Rect::new(0, 0, w, h);
                self.tui.lock().await.resize(screen)?;
                let (stage_area, _) = Stage::split_screen(screen);
                self.stage = Stage::new(stage_area, &self.config.targets);
                self.set_hovered(None);
                self.needs_render = true;
            }
            tui::Event::Tick => {
                // Keeps the status line fresh while no frames arrive
                self.needs_render = true;
            }
            tui::Event::Init | tui::Event::Error => {}
        }
        Ok(())
    }

    /// Applies one display frame to the trail.
    pub fn on_frame(&mut self, at: Instant) {
        self.animator.tick();
        self.frame_rate.update(Message::FrameDrawn { now: Some(at) });
        self.needs_render = true;
    }

    fn on_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Moved | MouseEventKind::Drag(_)) {
            return;
        }

        if self.stage.contains(mouse.column, mouse.row) {
            let position = Point::from((mouse.column, mouse.row));
            self.animator.pointer_moved(position);
            self.set_hovered(self.stage.target_at(mouse.column, mouse.row));
        } else {
            self.animator.pointer_left();
            self.set_hovered(None);
        }
        self.needs_render = true;
    }

    fn set_hovered(&mut self, hovered: Option<usize>) {
        if self.hovered != hovered {
            tracing::trace!(?hovered, "hover target changed");
            self.hovered = hovered;
            let hover = HoverState::from_hovering(hovered.is_some());
            self.animator.set_hover(hover);
        }
    }

    fn dispatch(&mut self, action: Action) {
        tracing::debug!(%action, "dispatching action");
        match action {
            Action::Quit => self.should_quit = true,
            Action::StopTrail => {
                self.animator.stop();
                self.needs_render = true;
            }
        }
    }

    pub async fn render(&mut self) -> Result<()> {
        {
            let view = View {
                stage: &self.stage,
                hovered: self.hovered,
                animator: &self.animator,
                frame_rate: &self.frame_rate,
                color: self.config.trail.color,
            };
            let mut guard = self.tui.lock().await;
            guard.draw(&mut |f| renderer::render(f, &view))?;
        }
        self.needs_render = false;
        Ok(())
    }
}
