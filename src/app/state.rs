//! Zustand der Zeichenfläche: Punkte, Marker und Animation als ein Aggregat.
//!
//! Renderer und Controller lesen bzw. schreiben Punkte und Marker immer
//! gemeinsam über dieses Struct, damit jeder Frame einen konsistenten
//! Stand sieht.

use crate::core::{
    DecelerateEasing, FadeAnimation, FadeFrame, FadeListener, MarkerState, Point, PointRegistry,
};
use crate::shared::{DirtyRect, Redraw, SurfaceMetrics, SurfaceOptions};

/// Gesamter veränderlicher Zustand der Zeichenfläche.
pub struct SurfaceState {
    pub registry: PointRegistry,
    pub markers: MarkerState,
    pub fade: FadeAnimation,
    pub metrics: SurfaceMetrics,
}

impl SurfaceState {
    /// Erstellt einen leeren Zustand aus Optionen und aufgelösten Geräte-Größen.
    pub fn new(options: &SurfaceOptions, metrics: SurfaceMetrics) -> Self {
        Self {
            registry: PointRegistry::new(),
            markers: MarkerState::new(),
            fade: FadeAnimation::new(
                options.fade_duration_secs(),
                DecelerateEasing::new(options.fade_decelerate_factor),
                options.fade_radius_multiplier_max,
            ),
            metrics,
        }
    }

    /// Registriert einen neuen Punkt und startet dessen Ausblend-Animation.
    ///
    /// Eine laufende Animation wird vor der Registrierung abgebrochen.
    pub fn place_point(&mut self, point: Point, now: f64) -> usize {
        let mut target = FadeTarget::new(&self.registry, &mut self.markers, self.metrics);
        self.fade.cancel(&mut target);

        let slot = self.registry.register_next(point);

        let mut target = FadeTarget::new(&self.registry, &mut self.markers, self.metrics);
        self.fade.start(now, &mut target);
        slot
    }

    /// Schreitet die Animation fort. Liefert den neu zu zeichnenden Bereich.
    pub fn advance_animation(&mut self, now: f64) -> Option<Redraw> {
        if !self.fade.is_active() {
            return None;
        }
        let mut target = FadeTarget::new(&self.registry, &mut self.markers, self.metrics);
        let still_running = self.fade.advance(now, &mut target);
        let dirty = target.dirty;

        if still_running {
            dirty.or(Some(Redraw::Full))
        } else {
            // Ende setzt alle Radien zurück, betrifft also alle Marker
            Some(Redraw::Full)
        }
    }

    /// True solange die Ausblend-Animation läuft.
    pub fn is_animating(&self) -> bool {
        self.fade.is_active()
    }
}

/// Schreibt Animations-Ticks auf die Marker des aktuellen Slots.
struct FadeTarget<'a> {
    registry: &'a PointRegistry,
    markers: &'a mut MarkerState,
    metrics: SurfaceMetrics,
    dirty: Option<Redraw>,
}

impl<'a> FadeTarget<'a> {
    fn new(
        registry: &'a PointRegistry,
        markers: &'a mut MarkerState,
        metrics: SurfaceMetrics,
    ) -> Self {
        Self {
            registry,
            markers,
            metrics,
            dirty: None,
        }
    }
}

impl FadeListener for FadeTarget<'_> {
    fn on_fade_tick(&mut self, frame: FadeFrame) {
        self.markers.fill_alpha = frame.alpha;

        let Some(slot) = self.registry.current_index() else {
            return;
        };
        self.markers
            .set_radius(slot, self.metrics.marker_radius * frame.radius_multiplier);

        self.dirty = self.registry.current_point().map(|point| {
            Redraw::Region(DirtyRect::around(point, self.metrics.redraw_half_extent()))
        });
    }

    fn on_fade_end(&mut self) {
        self.markers.reset_radii();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn state() -> SurfaceState {
        let options = SurfaceOptions::default();
        let metrics = SurfaceMetrics::resolve(&options, 1.0);
        SurfaceState::new(&options, metrics)
    }

    #[test]
    fn test_place_point_starts_animation() {
        let mut state = state();
        let slot = state.place_point(Point::new(10, 10), 0.0);
        assert_eq!(slot, 0);
        assert!(state.is_animating());
        assert!(state.markers.is_collapsed());
    }

    #[test]
    fn test_tick_grows_current_marker_and_fades() {
        let mut state = state();
        state.place_point(Point::new(10, 10), 0.0);

        let redraw = state.advance_animation(0.25);

        assert_eq!(
            redraw,
            Some(Redraw::Region(DirtyRect::around(Point::new(10, 10), 20)))
        );
        // 0.25 / 0.5 → t = 0.5 → eased 0.9375
        assert_relative_eq!(state.markers.radius(0), 10.0 * 2.0 * 0.9375);
        assert_eq!(state.markers.fill_alpha, 15);
    }

    #[test]
    fn test_completion_resets_all_radii() {
        let mut state = state();
        state.place_point(Point::new(10, 10), 0.0);
        state.advance_animation(0.1);

        assert_eq!(state.advance_animation(0.6), Some(Redraw::Full));
        assert!(!state.is_animating());
        assert!(state.markers.is_collapsed());
        assert_eq!(state.markers.fill_alpha, 0);
        assert_eq!(state.advance_animation(0.7), None);
    }

    #[test]
    fn test_next_cycle_restores_full_alpha() {
        let mut state = state();
        state.place_point(Point::new(10, 10), 0.0);
        state.advance_animation(1.0);
        assert_eq!(state.markers.fill_alpha, 0);

        state.place_point(Point::new(20, 10), 2.0);

        assert_eq!(state.markers.fill_alpha, 255);
        assert!(state.markers.is_collapsed());
    }

    #[test]
    fn test_new_point_clears_markers_of_previous_cycle() {
        let mut state = state();
        state.place_point(Point::new(10, 10), 0.0);
        state.advance_animation(0.2);
        assert!(state.markers.radius(0) > 0.0);

        state.place_point(Point::new(20, 10), 0.3);

        assert!(state.markers.is_collapsed());
        state.advance_animation(0.4);
        assert_eq!(state.markers.radius(0), 0.0);
        assert!(state.markers.radius(1) > 0.0);
    }
}
