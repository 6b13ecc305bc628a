//! Core-Domänentypen: Punkt-Register, Pointer-Events, Marker und Ausblend-Animation.

pub mod fade;
pub mod markers;
pub mod point_registry;
pub mod pointer;

pub use fade::{DecelerateEasing, FadeAnimation, FadeFrame, FadeListener};
pub use markers::MarkerState;
pub use point_registry::{CurrentSlot, Point, PointRegistry, MAX_POINTS, PRIMARY_POINTER_ID};
pub use pointer::{PointerAction, PointerEvent};
