//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app`, `render` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod metrics;
pub mod options;
mod redraw;

pub use metrics::SurfaceMetrics;
pub use options::SurfaceOptions;
pub use redraw::{DirtyRect, Redraw};
