use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget};

use crate::model::animator::Animator;
use crate::model::frame_rate::FrameRate;

#[derive(Debug, Clone)]
pub struct StatusBarWidget<'a> {
    animator: &'a Animator,
    hovered: Option<&'a str>,
    frame_rate: &'a FrameRate,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(
        animator: &'a Animator,
        hovered: Option<&'a str>,
        frame_rate: &'a FrameRate,
    ) -> Self {
        Self {
            animator,
            hovered,
            frame_rate,
        }
    }

    fn left(&self) -> Line<'a> {
        let mut spans = vec![Span::from(self.animator.state_label()).bold()];

        if let Some(active) = self.animator.active() {
            let pointer = active.pointer();
            spans.push(Span::raw(format!(" │ pointer {:.0},{:.0}", pointer.x, pointer.y)));
            spans.push(Span::raw(if active.is_visible() {
                " │ visible"
            } else {
                " │ hidden"
            }));
        }
        if let Some(label) = self.hovered {
            spans.push(Span::raw(format!(" │ hover: {label}")));
        }

        Line::from(spans)
    }

    fn right(&self) -> Line<'a> {
        let fps_text = match self.frame_rate.fps() {
            Some(fps) => format!("{fps:.2} frames per sec │ "),
            None => "".to_owned(),
        };
        Line::from(vec![fps_text.dim(), "s: stop trail  q: quit".dim()]).right_aligned()
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let right = self.right();
        let [left_area, right_area] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(right.width() as u16),
        ])
        .areas(area);
        Paragraph::new(self.left()).render(left_area, buf);
        Paragraph::new(right).render(right_area, buf);
    }
}
