//! Umrechnung logischer Größen (dp) in Geräte-Einheiten.

use super::options::SurfaceOptions;

/// Einmalig aufgelöste Geräte-Größen der Zeichenfläche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceMetrics {
    /// Basis-Radius der Marker in Geräte-Einheiten
    pub marker_radius: f32,
    /// Bewegungs-Schwelle in ganzen Geräte-Einheiten
    pub touch_slop: i32,
}

impl SurfaceMetrics {
    /// Rechnet die dp-Werte der Optionen mit dem Dichte-Faktor `scale` um.
    pub fn resolve(options: &SurfaceOptions, scale: f32) -> Self {
        Self {
            marker_radius: options.marker_radius_dp * scale,
            touch_slop: (options.touch_slop_dp * scale + 0.5) as i32,
        }
    }

    /// Halbe Kantenlänge des Neuzeichnen-Bereichs um einen Marker.
    pub fn redraw_half_extent(&self) -> i32 {
        self.marker_radius as i32 * 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_resolve_scales_with_density() {
        let metrics = SurfaceMetrics::resolve(&SurfaceOptions::default(), 2.0);
        assert_relative_eq!(metrics.marker_radius, 20.0);
        assert_eq!(metrics.touch_slop, 16);
        assert_eq!(metrics.redraw_half_extent(), 40);
    }

    #[test]
    fn test_touch_slop_is_rounded() {
        let mut options = SurfaceOptions::default();
        options.touch_slop_dp = 8.0;
        let metrics = SurfaceMetrics::resolve(&options, 1.5);
        assert_eq!(metrics.touch_slop, 12);

        let metrics = SurfaceMetrics::resolve(&options, 1.3);
        assert_eq!(metrics.touch_slop, 10);
    }
}
