//! Curve Paths Library.
//! Zeichenfläche für Bézier-Pfade aus bis zu vier Touch-Punkten,
//! als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{EventOutcome, SurfaceState, TouchController};
pub use core::{
    CurrentSlot, FadeAnimation, MarkerState, Point, PointRegistry, PointerAction, PointerEvent,
    MAX_POINTS, PRIMARY_POINTER_ID,
};
pub use render::{CurveCanvas, CurveKind, CurvePath, CurveRenderer, CurveShape, PathOp};
pub use shared::{DirtyRect, Redraw, SurfaceMetrics, SurfaceOptions};
