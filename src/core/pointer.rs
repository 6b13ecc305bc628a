//! Plattformneutrale Pointer-Events (Finger oder Maus).

use super::point_registry::Point;

/// Art eines Pointer-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    /// Erster Finger berührt die Fläche
    Down,
    /// Mindestens ein Finger bewegt sich
    Move,
    /// Weiterer Finger kommt hinzu
    PointerDown,
    /// Ein Finger von mehreren hebt ab
    PointerUp,
    /// Letzter Finger hebt ab
    Up,
    /// Geste wurde vom System abgebrochen
    Cancel,
}

/// Ein einzelnes Pointer-Event in Canvas-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub position: Point,
    /// 0 für den ersten Finger, 1+ für weitere
    pub pointer_id: i32,
    /// Index des auslösenden Fingers in der aktiven Liste
    pub action_index: usize,
}

impl PointerEvent {
    /// Event des primären Pointers (Kennung 0, Index 0).
    pub fn primary(action: PointerAction, position: Point) -> Self {
        Self {
            action,
            position,
            pointer_id: 0,
            action_index: 0,
        }
    }
}
