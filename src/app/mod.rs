//! Application-Layer: Flächen-Zustand und Touch-Controller.

/// Zustand der Zeichenfläche (Punkte, Marker, Animation)
pub mod state;
pub mod touch_controller;

pub use state::SurfaceState;
pub use touch_controller::{EventOutcome, TouchController};
