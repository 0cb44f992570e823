use ratatui::style::Color;

use crate::{
    infrastructure::tui::Frame,
    model::{animator::Animator, frame_rate::FrameRate, stage::Stage},
    presentation::widgets::{StageWidget, StatusBarWidget, TrailWidget},
};

/// Everything a frame is drawn from.
#[derive(Debug, Clone)]
pub struct View<'a> {
    pub stage: &'a Stage,
    pub hovered: Option<usize>,
    pub animator: &'a Animator,
    pub frame_rate: &'a FrameRate,
    pub color: Color,
}

impl View<'_> {
    fn hovered_label(&self) -> Option<&str> {
        self.hovered
            .and_then(|index| self.stage.targets().get(index))
            .map(|target| target.label.as_str())
    }
}

pub fn render(frame: &mut Frame<'_>, view: &View<'_>) {
    let (_, status_area) = Stage::split_screen(frame.area());
    let stage_area = view.stage.area().intersection(frame.area());

    frame.render_widget(
        StageWidget::new(view.stage, view.hovered, view.color),
        stage_area,
    );
    // Trail drawn over the targets
    if let Some(active) = view.animator.active() {
        frame.render_widget(TrailWidget::new(active, view.color), stage_area);
    }
    frame.render_widget(
        StatusBarWidget::new(view.animator, view.hovered_label(), view.frame_rate),
        status_area,
    );
}
