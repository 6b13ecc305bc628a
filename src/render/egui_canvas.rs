//! `CurveCanvas`-Implementierung auf Basis von `egui::Painter`.

use eframe::egui;
use egui::epaint::{CubicBezierShape, QuadraticBezierShape};
use glam::Vec2;

use super::curve_renderer::{CurveCanvas, CurvePath, PathOp};
use crate::shared::SurfaceOptions;

/// Zeichnet Marker und Pfade in einen egui-Painter.
///
/// Canvas-Koordinaten werden relativ zu `origin` (linke obere Ecke der
/// Zeichenfläche) in Screen-Koordinaten umgerechnet.
pub struct EguiCanvas<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
    marker_color: [u8; 4],
    curve_stroke: egui::Stroke,
}

impl<'a> EguiCanvas<'a> {
    /// Erstellt einen Canvas mit Farben und Linienstärke aus den Optionen.
    pub fn new(painter: &'a egui::Painter, origin: egui::Pos2, options: &SurfaceOptions) -> Self {
        Self {
            painter,
            origin,
            marker_color: options.marker_color,
            curve_stroke: egui::Stroke::new(options.curve_stroke_width, rgba(options.curve_color)),
        }
    }

    fn to_screen(&self, p: Vec2) -> egui::Pos2 {
        egui::pos2(self.origin.x + p.x, self.origin.y + p.y)
    }
}

/// Wandelt ein RGBA-Array in eine egui-Farbe.
pub fn rgba(c: [u8; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3])
}

impl CurveCanvas for EguiCanvas<'_> {
    fn fill_circle(&mut self, center: Vec2, radius: f32, alpha: u8) {
        if radius <= 0.0 {
            return;
        }
        let [r, g, b, a] = self.marker_color;
        let alpha = (u16::from(a) * u16::from(alpha) / 255) as u8;
        self.painter.circle_filled(
            self.to_screen(center),
            radius,
            egui::Color32::from_rgba_unmultiplied(r, g, b, alpha),
        );
    }

    fn stroke_path(&mut self, path: &CurvePath) {
        let mut cursor = egui::Pos2::ZERO;
        for op in path.ops() {
            match *op {
                PathOp::MoveTo(p) => cursor = self.to_screen(p),
                PathOp::LineTo(p) => {
                    let end = self.to_screen(p);
                    self.painter.line_segment([cursor, end], self.curve_stroke);
                    cursor = end;
                }
                PathOp::QuadTo { control, end } => {
                    let end = self.to_screen(end);
                    self.painter.add(QuadraticBezierShape::from_points_stroke(
                        [cursor, self.to_screen(control), end],
                        false,
                        egui::Color32::TRANSPARENT,
                        self.curve_stroke,
                    ));
                    cursor = end;
                }
                PathOp::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    let end = self.to_screen(end);
                    self.painter.add(CubicBezierShape::from_points_stroke(
                        [cursor, self.to_screen(control1), self.to_screen(control2), end],
                        false,
                        egui::Color32::TRANSPARENT,
                        self.curve_stroke,
                    ));
                    cursor = end;
                }
            }
        }
    }
}
