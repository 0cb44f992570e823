use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};

/// Interactive element that switches the cursor into its hover overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub label: String,
    pub area: Rect,
}

/// Drawing area of the trail, with its interactive targets laid out in a
/// centered row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stage {
    area: Rect,
    targets: Vec<Target>,
}

const TARGET_HEIGHT: u16 = 3;
const TARGET_PADDING: u16 = 4;
const TARGET_SPACING: u16 = 2;

impl Stage {
    pub fn new(area: Rect, labels: &[String]) -> Self {
        let [row] = Layout::vertical([Constraint::Length(TARGET_HEIGHT)])
            .flex(Flex::Center)
            .areas(area);
        let widths = labels
            .iter()
            .map(|label| Constraint::Length(label.chars().count() as u16 + TARGET_PADDING));
        let cells = Layout::horizontal(widths)
            .flex(Flex::Center)
            .spacing(TARGET_SPACING)
            .split(row);

        let targets = labels
            .iter()
            .zip(cells.iter())
            .map(|(label, area)| Target {
                label: label.clone(),
                area: *area,
            })
            .collect();

        Self { area, targets }
    }

    /// Screen split into the stage and a one-line status bar below it.
    pub fn split_screen(screen: Rect) -> (Rect, Rect) {
        let [stage, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(screen);
        (stage, status)
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }

    /// Index of the target under the given cell.
    pub fn target_at(&self, column: u16, row: u16) -> Option<usize> {
        self.targets
            .iter()
            .position(|target| target.area.contains(Position::new(column, row)))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn labels() -> Vec<String> {
        vec!["Projects".to_owned(), "Skills".to_owned()]
    }

    #[test]
    fn test_targets_are_centered() {
        let stage = Stage::new(Rect::new(0, 0, 40, 11), &labels());

        let targets = stage.targets();
        assert_eq!(targets.len(), 2);
        let (first, second) = (targets[0].area, targets[1].area);
        assert_eq!((first.y, first.width, first.height), (4, 12, 3));
        assert_eq!((second.y, second.width, second.height), (4, 10, 3));
        assert_eq!(second.x - first.right(), 2);
        assert_eq!(first.x, 40 - second.right());
    }

    #[test]
    fn test_target_at() {
        let stage = Stage::new(Rect::new(0, 0, 40, 11), &labels());
        let first = stage.targets()[0].area;
        let second = stage.targets()[1].area;

        assert_eq!(stage.target_at(first.x, first.y), Some(0));
        assert_eq!(stage.target_at(first.right() - 1, first.bottom() - 1), Some(0));
        assert_eq!(stage.target_at(first.right(), first.y + 1), None);
        assert_eq!(stage.target_at(second.x + 1, second.y + 1), Some(1));
        assert_eq!(stage.target_at(0, 0), None);
    }

    #[test]
    fn test_split_screen() {
        let (stage, status) = Stage::split_screen(Rect::new(0, 0, 80, 24));

        assert_eq!(stage, Rect::new(0, 0, 80, 23));
        assert_eq!(status, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_contains() {
        let stage = Stage::new(Rect::new(0, 0, 80, 23), &[]);

        assert!(stage.contains(0, 0));
        assert!(stage.contains(79, 22));
        assert!(!stage.contains(10, 23));
        assert!(stage.targets().is_empty());
    }
}
