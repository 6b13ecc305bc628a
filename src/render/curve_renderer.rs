//! Kurven-Renderer: wählt aus den belegten Slots die Bézier-Kurve höchsten Grades.
//!
//! **Linie:** Slot 0 → Slot 1
//! **Quadratisch:** Slot 0 → Slot 2, Steuerpunkt Slot 1
//! **Kubisch:** Slot 0 → Slot 3, Steuerpunkte Slot 1 und 2

use crate::core::{MarkerState, Point, PointRegistry};
use glam::Vec2;

/// Grad der gezeichneten Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveKind {
    /// Weniger als zwei Punkte
    None,
    Line,
    Quadratic,
    Cubic,
}

/// Kurve mit ihren Stützpunkten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveShape {
    None,
    Line {
        start: Point,
        end: Point,
    },
    Quadratic {
        start: Point,
        control: Point,
        end: Point,
    },
    Cubic {
        start: Point,
        control1: Point,
        control2: Point,
        end: Point,
    },
}

impl CurveShape {
    /// Wählt die Kurve höchsten Grades, die die belegten Slots erlauben.
    ///
    /// Geprüft wird in fester Reihenfolge Kubisch → Quadratisch → Linie.
    pub fn select(registry: &PointRegistry) -> Self {
        match *registry.slots() {
            [Some(start), Some(control1), Some(control2), Some(end)] => Self::Cubic {
                start,
                control1,
                control2,
                end,
            },
            [Some(start), Some(control), Some(end), _] => Self::Quadratic {
                start,
                control,
                end,
            },
            [Some(start), Some(end), ..] => Self::Line { start, end },
            _ => Self::None,
        }
    }

    /// Grad der Kurve.
    pub fn kind(&self) -> CurveKind {
        match self {
            Self::None => CurveKind::None,
            Self::Line { .. } => CurveKind::Line,
            Self::Quadratic { .. } => CurveKind::Quadratic,
            Self::Cubic { .. } => CurveKind::Cubic,
        }
    }
}

/// Einzelner Pfad-Befehl.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOp {
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadTo { control: Vec2, end: Vec2 },
    CubicTo { control1: Vec2, control2: Vec2, end: Vec2 },
}

/// Wiederverwendbarer Pfad aus `PathOp`s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurvePath {
    ops: Vec<PathOp>,
}

impl CurvePath {
    /// Erstellt einen leeren Pfad.
    pub fn new() -> Self {
        Self::default()
    }

    /// Leert den Pfad, behält aber den Speicher.
    pub fn rewind(&mut self) {
        self.ops.clear();
    }

    pub fn move_to(&mut self, p: Vec2) {
        self.ops.push(PathOp::MoveTo(p));
    }

    pub fn line_to(&mut self, p: Vec2) {
        self.ops.push(PathOp::LineTo(p));
    }

    pub fn quad_to(&mut self, control: Vec2, end: Vec2) {
        self.ops.push(PathOp::QuadTo { control, end });
    }

    pub fn cubic_to(&mut self, control1: Vec2, control2: Vec2, end: Vec2) {
        self.ops.push(PathOp::CubicTo {
            control1,
            control2,
            end,
        });
    }

    /// Alle Befehle in Reihenfolge.
    pub fn ops(&self) -> &[PathOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

/// Zeichenfläche, auf die der Renderer zeichnet.
pub trait CurveCanvas {
    /// Gefüllter Kreis mit Marker-Farbe und Deckkraft `alpha`.
    fn fill_circle(&mut self, center: Vec2, radius: f32, alpha: u8);
    /// Kontur eines Pfads mit Kurven-Stil.
    fn stroke_path(&mut self, path: &CurvePath);
}

/// Zeichnet Marker und Kurve aus dem aktuellen Zustand.
#[derive(Debug, Default)]
pub struct CurveRenderer {
    path: CurvePath,
}

impl CurveRenderer {
    /// Erstellt einen Renderer mit leerem Pfad.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeichnet einen Frame: erst alle Marker, dann die Kurve.
    pub fn draw(
        &mut self,
        registry: &PointRegistry,
        markers: &MarkerState,
        canvas: &mut impl CurveCanvas,
    ) -> CurveKind {
        for (slot, point) in registry.iter() {
            canvas.fill_circle(point.as_vec2(), markers.radius(slot), markers.fill_alpha);
        }

        let shape = CurveShape::select(registry);
        if self.build_path(&shape) {
            canvas.stroke_path(&self.path);
        }
        shape.kind()
    }

    /// Baut den Pfad für eine Kurve neu auf. `false` wenn nichts zu zeichnen ist.
    fn build_path(&mut self, shape: &CurveShape) -> bool {
        match *shape {
            CurveShape::None => return false,
            CurveShape::Line { start, end } => {
                self.path.rewind();
                self.path.move_to(start.as_vec2());
                self.path.line_to(end.as_vec2());
            }
            CurveShape::Quadratic {
                start,
                control,
                end,
            } => {
                self.path.rewind();
                self.path.move_to(start.as_vec2());
                self.path.quad_to(control.as_vec2(), end.as_vec2());
            }
            CurveShape::Cubic {
                start,
                control1,
                control2,
                end,
            } => {
                self.path.rewind();
                self.path.move_to(start.as_vec2());
                self.path
                    .cubic_to(control1.as_vec2(), control2.as_vec2(), end.as_vec2());
            }
        }
        true
    }
}

#[cfg(test)]
mod tests;
