use causeway_common::{InputSample, Viewport};
use serde::{Deserialize, Serialize};

/// A pointer event from the host surface (touch or mouse).
///
/// The simulation consumes samples, never raw events. Events mutate a
/// `PointerState` between steps; the step reads one sample at its top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Contact started.
    Pressed,
    /// Contact ended.
    Released,
    /// Contact moved to a horizontal position normalized to [0, 1].
    Moved { x_norm: f32 },
}

impl PointerEvent {
    /// Build a move event from a pixel column on the given surface.
    pub fn moved_at(px: f32, viewport: &Viewport) -> Self {
        PointerEvent::Moved {
            x_norm: px / viewport.width as f32,
        }
    }
}

/// A pointer event scheduled for a specific simulation tick.
///
/// Scripts are a list of these, applied in order before the step they name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptedEvent {
    pub tick: u64,
    pub event: PointerEvent,
}

/// Accumulated pointer state between simulation steps.
///
/// Moves are ignored unless a contact is active; releasing keeps the last
/// accepted steering target, so the car holds its line when the press ends.
#[derive(Debug, Clone)]
pub struct PointerState {
    pressing: bool,
    target_x: f32,
    steer_range: f32,
}

impl PointerState {
    /// `steer_range` is the world-space width the normalized [0, 1] pointer
    /// coordinate maps onto, centered on the road.
    pub fn new(steer_range: f32) -> Self {
        assert!(steer_range > 0.0, "steer_range must be positive");
        Self {
            pressing: false,
            target_x: 0.0,
            steer_range,
        }
    }

    pub fn process_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Pressed => {
                self.pressing = true;
            }
            PointerEvent::Released => {
                self.pressing = false;
            }
            PointerEvent::Moved { x_norm } => {
                if self.pressing {
                    self.target_x = (x_norm - 0.5) * self.steer_range;
                    tracing::trace!(x_norm, target_x = self.target_x, "steer target updated");
                }
            }
        }
    }

    /// Snapshot for the next simulation step.
    pub fn sample(&self) -> InputSample {
        InputSample {
            pressing: self.pressing,
            target_x: self.target_x,
        }
    }

    pub fn pressing(&self) -> bool {
        self.pressing
    }

    pub fn target_x(&self) -> f32 {
        self.target_x
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new(4.0)
    }
}
