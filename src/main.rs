//! Curve Paths.
//!
//! Touch-Zeichenfläche: bis zu vier Punkte setzen, die Fläche zeichnet
//! live die passende Bézier-Kurve (Linie → quadratisch → kubisch).

use curve_paths::render::{rgba, CurveRenderer, EguiCanvas};
use curve_paths::{ui, EventOutcome, SurfaceMetrics, SurfaceOptions, SurfaceState, TouchController};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Curve Paths v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([720.0, 1024.0])
                .with_title("Curve Paths"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Curve Paths",
            options,
            Box::new(|_cc| Ok(Box::new(CurvePathsApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct CurvePathsApp {
    options: SurfaceOptions,
    state: SurfaceState,
    controller: TouchController,
    renderer: CurveRenderer,
    input: ui::InputState,
}

impl CurvePathsApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let options = SurfaceOptions::load_or_create(&SurfaceOptions::config_path());

        // egui arbeitet bereits in logischen Punkten, dp == Punkt
        let metrics = SurfaceMetrics::resolve(&options, 1.0);
        log::info!(
            "Marker-Radius {:.1}, Touch-Slop {}",
            metrics.marker_radius,
            metrics.touch_slop
        );

        Self {
            state: SurfaceState::new(&options, metrics),
            options,
            controller: TouchController::new(),
            renderer: CurveRenderer::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for CurvePathsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        ui::render_status_bar(ctx, &self.state);

        let mut needs_repaint = false;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, _response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                for event in self.input.collect_canvas_events(ui, rect) {
                    let outcome = self.controller.handle_event(&mut self.state, event, now);
                    if let EventOutcome::Consumed(_) = outcome {
                        needs_repaint = true;
                    }
                }

                if self.state.advance_animation(now).is_some() {
                    needs_repaint = true;
                }

                let painter = ui.painter_at(rect);
                painter.rect_filled(rect, 0.0, rgba(self.options.background_color));

                let mut canvas = EguiCanvas::new(&painter, rect.min, &self.options);
                self.renderer
                    .draw(&self.state.registry, &self.state.markers, &mut canvas);
            });

        // egui zeichnet immer den ganzen Frame, Teilbereiche reichen nicht aus
        if needs_repaint || self.state.is_animating() {
            ctx.request_repaint();
        }
    }
}
