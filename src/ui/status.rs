//! Status-Bar am unteren Bildschirmrand.

use crate::app::SurfaceState;
use crate::core::MAX_POINTS;
use crate::render::{CurveKind, CurveShape};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &SurfaceState) {
    let curve = CurveShape::select(&state.registry).kind();
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Punkte: {}/{}",
                state.registry.filled_len(),
                MAX_POINTS
            ));

            ui.separator();

            ui.label(format!("Kurve: {}", curve_label(curve)));

            if let Some(slot) = state.registry.current_index() {
                ui.separator();
                ui.label(format!("Aktueller Slot: {}", slot));
            }

            if state.is_animating() {
                ui.separator();
                ui.label("Animation läuft");
            }
        });
    });
}

fn curve_label(curve: CurveKind) -> &'static str {
    match curve {
        CurveKind::None => "keine",
        CurveKind::Line => "Linie",
        CurveKind::Quadratic => "Quadratisch (Grad 2)",
        CurveKind::Cubic => "Kubisch (Grad 3)",
    }
}
