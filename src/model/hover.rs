/// Scale overlay applied while the pointer rests on an interactive target.
///
/// Independent of the trail positions: switching state only changes how the
/// dot and the ring are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering,
}

const DOT_HOVER_SCALE: f64 = 2.0;
const RING_HOVER_SCALE: f64 = 1.5;

impl HoverState {
    pub fn from_hovering(hovering: bool) -> Self {
        if hovering {
            Self::Hovering
        } else {
            Self::Idle
        }
    }

    pub fn is_hovering(self) -> bool {
        self == Self::Hovering
    }

    pub fn dot_scale(self) -> f64 {
        match self {
            Self::Idle => 1.0,
            Self::Hovering => DOT_HOVER_SCALE,
        }
    }

    pub fn ring_scale(self) -> f64 {
        match self {
            Self::Idle => 1.0,
            Self::Hovering => RING_HOVER_SCALE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scales() {
        assert_eq!(HoverState::Idle.dot_scale(), 1.0);
        assert_eq!(HoverState::Idle.ring_scale(), 1.0);
        assert_eq!(HoverState::Hovering.dot_scale(), 2.0);
        assert_eq!(HoverState::Hovering.ring_scale(), 1.5);
    }

    #[test]
    fn test_from_hovering() {
        assert_eq!(HoverState::from_hovering(true), HoverState::Hovering);
        assert_eq!(HoverState::from_hovering(false), HoverState::Idle);
        assert!(!HoverState::default().is_hovering());
    }
}
