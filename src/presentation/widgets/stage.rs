use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::model::stage::Stage;

/// Interactive targets of the stage. The hovered one is highlighted.
#[derive(Debug, Clone)]
pub struct StageWidget<'a> {
    stage: &'a Stage,
    hovered: Option<usize>,
    accent: Color,
}

impl<'a> StageWidget<'a> {
    pub fn new(stage: &'a Stage, hovered: Option<usize>, accent: Color) -> Self {
        Self {
            stage,
            hovered,
            accent,
        }
    }
}

impl Widget for StageWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (index, target) in self.stage.targets().iter().enumerate() {
            let target_area = target.area.intersection(area);
            if target_area.is_empty() {
                continue;
            }

            let (border_type, style) = if self.hovered == Some(index) {
                (BorderType::Thick, Style::default().fg(self.accent).bold())
            } else {
                (BorderType::Rounded, Style::default().dim())
            };
            let block = Block::bordered()
                .border_type(border_type)
                .border_style(style);
            Paragraph::new(target.label.as_str())
                .style(style)
                .alignment(Alignment::Center)
                .block(block)
                .render(target_area, buf);
        }
    }
}
