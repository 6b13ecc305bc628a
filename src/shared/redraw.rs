//! Neuzeichnen-Anforderungen der Zeichenfläche.

use glam::IVec2;

/// Achsenparalleles Rechteck in Canvas-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirtyRect {
    pub min: IVec2,
    pub max: IVec2,
}

impl DirtyRect {
    /// Quadrat mit halber Kantenlänge `half_extent` um `center`.
    pub fn around(center: IVec2, half_extent: i32) -> Self {
        let half = IVec2::splat(half_extent);
        Self {
            min: center - half,
            max: center + half,
        }
    }
}

/// Welcher Teil der Fläche neu gezeichnet werden muss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    /// Gesamte Fläche
    Full,
    /// Nur der Bereich um einen Marker
    Region(DirtyRect),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirty_rect_is_centered() {
        let rect = DirtyRect::around(IVec2::new(50, 40), 20);
        assert_eq!(rect.min, IVec2::new(30, 20));
        assert_eq!(rect.max, IVec2::new(70, 60));
    }
}
