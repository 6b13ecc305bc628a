//! Zeichnen der Fläche: Kurvenauswahl, Pfadaufbau und egui-Anbindung.

mod curve_renderer;
mod egui_canvas;

pub use curve_renderer::{CurveCanvas, CurveKind, CurvePath, CurveRenderer, CurveShape, PathOp};
pub use egui_canvas::{rgba, EguiCanvas};
