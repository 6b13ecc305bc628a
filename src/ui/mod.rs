//! UI-Komponenten: Canvas-Input und Status-Bar.

pub mod input;
pub mod status;

pub use input::InputState;
pub use status::render_status_bar;
