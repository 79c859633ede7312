use crate::core::geo::Point;
use serde::{Deserialize, Serialize};

/// Normalized input events consumed by the engine.
///
/// How these are produced (DOM listeners, winit, egui, a test harness) is
/// the host's business; the engine only sees pointer positions in viewport
/// pixels and wheel deltas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Pointer pressed at a viewport position
    PointerDown { position: Point },
    /// Pointer moved; only meaningful to the map while dragging
    PointerMove { position: Point },
    /// Pointer released
    PointerUp,
    /// Wheel rotation; only the sign of `delta_y` matters
    Wheel { delta_y: f64 },
}

impl InputEvent {
    /// Gets the position associated with this event, if any
    pub fn position(&self) -> Option<Point> {
        match self {
            InputEvent::PointerDown { position } | InputEvent::PointerMove { position } => {
                Some(*position)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_position() {
        let down = InputEvent::PointerDown {
            position: Point::new(100.0, 200.0),
        };
        assert_eq!(down.position(), Some(Point::new(100.0, 200.0)));
        assert_eq!(InputEvent::PointerUp.position(), None);
        assert_eq!(InputEvent::Wheel { delta_y: 1.0 }.position(), None);
    }
}
