//! Animierte Marker-Radien und gemeinsame Marker-Deckkraft.

use super::point_registry::MAX_POINTS;

/// Radius und Deckkraft der Punkt-Marker.
///
/// Die Radien enthalten bereits `basis_radius * faktor` und werden
/// vom Renderer unverändert gezeichnet.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerState {
    radii: [f32; MAX_POINTS],
    /// Deckkraft aller Marker (0–255)
    pub fill_alpha: u8,
}

impl MarkerState {
    /// Alle Radien 0, volle Deckkraft.
    pub fn new() -> Self {
        Self {
            radii: [0.0; MAX_POINTS],
            fill_alpha: u8::MAX,
        }
    }

    /// Aktueller Radius eines Slots (0 für ungültige Slots).
    pub fn radius(&self, slot: usize) -> f32 {
        self.radii.get(slot).copied().unwrap_or(0.0)
    }

    /// Alle Radien.
    pub fn radii(&self) -> &[f32; MAX_POINTS] {
        &self.radii
    }

    /// Setzt den Radius eines Slots. Ungültige Slots werden ignoriert.
    pub fn set_radius(&mut self, slot: usize, radius: f32) {
        if let Some(r) = self.radii.get_mut(slot) {
            *r = radius;
        }
    }

    /// Setzt alle vier Radien auf 0.
    pub fn reset_radii(&mut self) {
        self.radii = [0.0; MAX_POINTS];
    }

    /// True wenn kein Marker sichtbar ist.
    pub fn is_collapsed(&self) -> bool {
        self.radii.iter().all(|r| *r == 0.0)
    }
}

impl Default for MarkerState {
    fn default() -> Self {
        Self::new()
    }
}
