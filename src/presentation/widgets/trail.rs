use ratatui::prelude::*;

use crate::model::animator::ActiveAnimator;
use crate::model::trail::Point;

const DOT: &str = "•";
const DOT_HOVER: &str = "●";
const RING: &str = "○";
const RING_HOVER: &str = "◎";
/// Trail glyphs from most to least opaque.
const FADE: [&str; 3] = ["●", "•", "·"];

/// Draws the pointer dot and the trail nodes of a visible animator.
#[derive(Debug, Clone)]
pub struct TrailWidget<'a> {
    animator: &'a ActiveAnimator,
    color: Color,
}

impl<'a> TrailWidget<'a> {
    pub fn new(animator: &'a ActiveAnimator, color: Color) -> Self {
        Self { animator, color }
    }
}

impl Widget for TrailWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.animator.is_visible() {
            return;
        }

        let trail = self.animator.trail();
        let hover = self.animator.hover();

        // Tail first so nodes closer to the head stay on top.
        for (index, node) in trail.nodes().iter().enumerate().rev() {
            let opacity = trail.opacity(index);
            let symbol = if index == 0 {
                if hover.ring_scale() > 1.0 {
                    RING_HOVER
                } else {
                    RING
                }
            } else {
                fade_symbol(opacity)
            };
            put(buf, area, node.position(), symbol, fade(self.color, opacity));
        }

        let dot = if hover.dot_scale() > 1.0 { DOT_HOVER } else { DOT };
        put(buf, area, self.animator.pointer(), dot, self.color);
    }
}

fn put(buf: &mut Buffer, area: Rect, position: Point, symbol: &str, color: Color) {
    let Some(cell) = cell_position(position) else {
        return;
    };
    if !area.contains(cell) {
        return;
    }
    if let Some(cell) = buf.cell_mut(cell) {
        cell.set_symbol(symbol).set_fg(color);
    }
}

fn cell_position(position: Point) -> Option<Position> {
    let (x, y) = (position.x.round(), position.y.round());
    let range = 0.0..=f64::from(u16::MAX);
    (range.contains(&x) && range.contains(&y)).then(|| Position::new(x as u16, y as u16))
}

fn fade_symbol(opacity: f64) -> &'static str {
    if opacity >= 0.7 {
        FADE[0]
    } else if opacity >= 0.4 {
        FADE[1]
    } else {
        FADE[2]
    }
}

/// Scales an RGB colour toward black. Other colours cannot be blended and are
/// returned unchanged.
fn fade(color: Color, opacity: f64) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let scale = |c: u8| (f64::from(c) * opacity.clamp(0.0, 1.0)).round() as u8;
            Color::Rgb(scale(r), scale(g), scale(b))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::infrastructure::capability::FixedCapability;
    use crate::infrastructure::frame_scheduler::ManualScheduler;
    use crate::model::animator::Animator;
    use crate::model::hover::HoverState;
    use crate::model::trail::Trail;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 20,
        height: 10,
    };
    const RED: Color = Color::Rgb(200, 100, 0);

    fn animator(scheduler: &mut ManualScheduler) -> Animator {
        let trail = Trail::tapered(3, 0.5, 0.2).expect("valid trail");
        Animator::setup(trail, &FixedCapability(true), AREA, scheduler)
    }

    fn render(animator: &Animator) -> Buffer {
        let mut buf = Buffer::empty(AREA);
        let active = animator.active().expect("animator should be active");
        TrailWidget::new(active, RED).render(AREA, &mut buf);
        buf
    }

    #[test]
    fn test_hidden_trail_draws_nothing() {
        let mut scheduler = ManualScheduler::new();
        let animator = animator(&mut scheduler);

        assert_eq!(render(&animator), Buffer::empty(AREA));
    }

    #[test]
    fn test_settled_trail_draws_dot_on_top() {
        let mut scheduler = ManualScheduler::new();
        let mut animator = animator(&mut scheduler);
        animator.pointer_moved(Point::new(5.0, 5.0));
        for _ in 0..200 {
            animator.tick();
        }

        let buf = render(&animator);
        let cell = buf.cell((5, 5)).expect("cell in area");
        assert_eq!(cell.symbol(), DOT);
        assert_eq!(cell.fg, RED);
    }

    #[test]
    fn test_trail_behind_pointer() {
        let mut scheduler = ManualScheduler::new();
        let mut animator = animator(&mut scheduler);
        animator.pointer_moved(Point::new(10.0, 0.0));
        animator.tick();

        let buf = render(&animator);
        // head at x = 5, second node at x = 1.75, last node at x ≈ 0.35
        assert_eq!(buf.cell((10, 0)).map(|c| c.symbol()), Some(DOT));
        assert_eq!(buf.cell((5, 0)).map(|c| c.symbol()), Some(RING));
        assert_eq!(buf.cell((2, 0)).map(|c| c.symbol()), Some(FADE[1]));
        assert_eq!(buf.cell((0, 0)).map(|c| c.symbol()), Some(FADE[2]));
        assert_eq!(buf.cell((0, 0)).map(|c| c.fg), Some(fade(RED, 1.0 / 3.0)));
    }

    #[test]
    fn test_hover_switches_glyphs() {
        let mut scheduler = ManualScheduler::new();
        let mut animator = animator(&mut scheduler);
        animator.pointer_moved(Point::new(10.0, 0.0));
        animator.tick();
        animator.set_hover(HoverState::Hovering);

        let buf = render(&animator);
        assert_eq!(buf.cell((10, 0)).map(|c| c.symbol()), Some(DOT_HOVER));
        assert_eq!(buf.cell((5, 0)).map(|c| c.symbol()), Some(RING_HOVER));
    }

    #[test]
    fn test_fade() {
        assert_eq!(fade(Color::Rgb(200, 100, 0), 0.5), Color::Rgb(100, 50, 0));
        assert_eq!(fade(Color::Cyan, 0.1), Color::Cyan);
    }

    #[test]
    fn test_cell_position_rejects_negative() {
        assert_eq!(cell_position(Point::new(-3.0, 2.0)), None);
        assert_eq!(cell_position(Point::new(2.4, 2.6)), Some(Position::new(2, 3)));
    }
}
