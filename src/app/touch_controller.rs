//! Touch-Controller: Pointer-Events → Punkt-Register + Ausblend-Animation.
//!
//! - `Down` registriert immer einen neuen Punkt (auch über den vierten hinaus)
//! - `Move` verschiebt einen Punkt, sobald die Bewegung die Touch-Slop überschreitet
//! - `PointerDown`, `PointerUp`, `Up`, `Cancel` lösen bewusst keine Änderung aus

use super::state::SurfaceState;
use crate::core::{PointerAction, PointerEvent};
use crate::shared::Redraw;

/// Ergebnis der Event-Verarbeitung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Event wurde verarbeitet, Fläche muss neu gezeichnet werden
    Consumed(Redraw),
    /// Event bleibt der umgebenden UI überlassen
    NotConsumed,
}

impl EventOutcome {
    /// True wenn das Event verarbeitet wurde.
    pub fn is_consumed(&self) -> bool {
        matches!(self, Self::Consumed(_))
    }
}

/// Zustandsautomat über den Pointer-Aktionen.
#[derive(Debug, Default)]
pub struct TouchController;

impl TouchController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet ein einzelnes Pointer-Event zur Zeit `now` (Sekunden).
    pub fn handle_event(
        &mut self,
        state: &mut SurfaceState,
        event: PointerEvent,
        now: f64,
    ) -> EventOutcome {
        match event.action {
            PointerAction::Down => {
                let slot = state.place_point(event.position, now);
                log::debug!(
                    "Punkt {} in Slot {} registriert",
                    event.position,
                    slot
                );
                EventOutcome::Consumed(Redraw::Full)
            }
            PointerAction::Move => Self::handle_move(state, event),
            // Mehrfinger- und Abschluss-Gesten ändern den Zustand derzeit nicht
            PointerAction::PointerDown
            | PointerAction::PointerUp
            | PointerAction::Up
            | PointerAction::Cancel => EventOutcome::NotConsumed,
        }
    }

    fn handle_move(state: &mut SurfaceState, event: PointerEvent) -> EventOutcome {
        let Some(prev) = state.registry.current_point() else {
            return EventOutcome::NotConsumed;
        };

        let delta = (event.position - prev).abs();
        let slop = state.metrics.touch_slop;
        if delta.x <= slop && delta.y <= slop {
            return EventOutcome::NotConsumed;
        }

        log::debug!(
            "pointerId, pointerIndex: {}, {}",
            event.pointer_id,
            event.action_index
        );
        state.registry.update_slot(event.pointer_id, event.position);
        EventOutcome::Consumed(Redraw::Full)
    }
}
