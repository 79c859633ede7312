use crate::core::geo::Point;
use crate::core::viewport::Viewport;
use crate::input::events::InputEvent;

/// Drag state of the interaction translator
#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    /// Anchor is the last pointer position seen; each move applies the
    /// delta from the anchor and re-anchors, so deltas are incremental
    /// rather than cumulative from the drag start.
    Dragging { anchor: Point },
}

/// Translates pointer and wheel events into viewport transitions.
///
/// The handler holds only its drag state; everything else is read from and
/// written to the viewport passed in, so it is testable without a live UI.
#[derive(Debug, Clone)]
pub struct InputHandler {
    state: DragState,
    tile_size: u32,
    invert_wheel: bool,
}

impl InputHandler {
    pub fn new(tile_size: u32, invert_wheel: bool) -> Self {
        Self {
            state: DragState::Idle,
            tile_size,
            invert_wheel,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Applies one event to the viewport. Returns true when the view
    /// changed and the caller should re-render.
    pub fn handle(&mut self, viewport: &mut Viewport, event: &InputEvent) -> bool {
        match *event {
            InputEvent::PointerDown { position } => {
                self.state = DragState::Dragging { anchor: position };
                false
            }
            InputEvent::PointerMove { position } => match self.state {
                DragState::Dragging { anchor } => {
                    let delta = position.subtract(&anchor);
                    self.state = DragState::Dragging { anchor: position };
                    viewport.pan(delta, self.tile_size);
                    true
                }
                DragState::Idle => false,
            },
            InputEvent::PointerUp => {
                self.state = DragState::Idle;
                false
            }
            InputEvent::Wheel { delta_y } => {
                if delta_y == 0.0 {
                    return false;
                }
                let mut step = if delta_y > 0.0 { 1 } else { -1 };
                if self.invert_wheel {
                    step = -step;
                }
                viewport.step_zoom(step)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LonLat;

    fn setup() -> (InputHandler, Viewport) {
        (
            InputHandler::new(256, false),
            Viewport::new(LonLat::new(0.0, 0.0), 2, Point::new(512.0, 512.0)),
        )
    }

    #[test]
    fn test_move_without_drag_is_ignored() {
        let (mut handler, mut viewport) = setup();
        let before = viewport.clone();
        let redraw = handler.handle(
            &mut viewport,
            &InputEvent::PointerMove {
                position: Point::new(100.0, 100.0),
            },
        );
        assert!(!redraw);
        assert_eq!(viewport, before);
    }

    #[test]
    fn test_drag_cycle() {
        let (mut handler, mut viewport) = setup();

        handler.handle(
            &mut viewport,
            &InputEvent::PointerDown {
                position: Point::new(256.0, 256.0),
            },
        );
        assert!(handler.is_dragging());

        let redraw = handler.handle(
            &mut viewport,
            &InputEvent::PointerMove {
                position: Point::new(512.0, 256.0),
            },
        );
        assert!(redraw);
        assert!((viewport.center.lon - -90.0).abs() < 1e-9);

        handler.handle(&mut viewport, &InputEvent::PointerUp);
        assert!(!handler.is_dragging());

        // After release, moves no longer pan
        let before = viewport.clone();
        handler.handle(
            &mut viewport,
            &InputEvent::PointerMove {
                position: Point::new(0.0, 0.0),
            },
        );
        assert_eq!(viewport, before);
    }

    #[test]
    fn test_drag_deltas_are_incremental() {
        let (mut handler, mut viewport) = setup();
        handler.handle(
            &mut viewport,
            &InputEvent::PointerDown {
                position: Point::new(0.0, 0.0),
            },
        );
        handler.handle(
            &mut viewport,
            &InputEvent::PointerMove {
                position: Point::new(128.0, 0.0),
            },
        );
        handler.handle(
            &mut viewport,
            &InputEvent::PointerMove {
                position: Point::new(256.0, 0.0),
            },
        );
        // Two incremental 128px moves total one tile unit, not three
        assert!((viewport.center.lon - -90.0).abs() < 1e-9);
    }

    #[test]
    fn test_wheel_steps_and_clamps() {
        let (mut handler, mut viewport) = setup();

        assert!(handler.handle(&mut viewport, &InputEvent::Wheel { delta_y: 3.0 }));
        assert_eq!(viewport.zoom, 3);
        assert!(handler.handle(&mut viewport, &InputEvent::Wheel { delta_y: -1.0 }));
        assert_eq!(viewport.zoom, 2);

        viewport.set_zoom(18);
        for _ in 0..4 {
            handler.handle(&mut viewport, &InputEvent::Wheel { delta_y: 1.0 });
        }
        assert_eq!(viewport.zoom, 18);

        viewport.set_zoom(0);
        for _ in 0..4 {
            handler.handle(&mut viewport, &InputEvent::Wheel { delta_y: -1.0 });
        }
        assert_eq!(viewport.zoom, 0);

        assert!(!handler.handle(&mut viewport, &InputEvent::Wheel { delta_y: 0.0 }));
    }

    #[test]
    fn test_wheel_while_dragging() {
        let (mut handler, mut viewport) = setup();
        handler.handle(
            &mut viewport,
            &InputEvent::PointerDown {
                position: Point::new(10.0, 10.0),
            },
        );
        assert!(handler.handle(&mut viewport, &InputEvent::Wheel { delta_y: 1.0 }));
        assert_eq!(viewport.zoom, 3);
        assert!(handler.is_dragging());
    }

    #[test]
    fn test_inverted_wheel() {
        let mut handler = InputHandler::new(256, true);
        let mut viewport = Viewport::new(LonLat::new(0.0, 0.0), 5, Point::new(512.0, 512.0));
        handler.handle(&mut viewport, &InputEvent::Wheel { delta_y: 1.0 });
        assert_eq!(viewport.zoom, 4);
    }

    #[test]
    fn test_zoom_keeps_center() {
        let (mut handler, mut viewport) = setup();
        let center = viewport.center;
        handler.handle(&mut viewport, &InputEvent::Wheel { delta_y: 1.0 });
        assert_eq!(viewport.center, center);
    }
}
