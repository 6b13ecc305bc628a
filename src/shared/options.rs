//! Zentrale Konfiguration der Zeichenfläche.
//!
//! `SurfaceOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Marker ──────────────────────────────────────────────────────────

/// Basis-Radius der Punkt-Marker in logischen Einheiten (dp).
pub const MARKER_RADIUS_DP: f32 = 10.0;
/// Füllfarbe der Marker (RGBA: Grau).
pub const MARKER_COLOR: [u8; 4] = [136, 136, 136, 255];

// ── Kurve ───────────────────────────────────────────────────────────

/// Farbe der Kurve (RGBA: halbtransparentes Grau).
pub const CURVE_COLOR: [u8; 4] = [128, 128, 128, 128];
/// Linienstärke der Kurve in logischen Einheiten.
pub const CURVE_STROKE_WIDTH: f32 = 1.0;

// ── Eingabe ─────────────────────────────────────────────────────────

/// Mindestbewegung (dp), ab der ein Move-Event als echte Bewegung gilt.
pub const TOUCH_SLOP_DP: f32 = 8.0;

// ── Animation ───────────────────────────────────────────────────────

/// Dauer der Ausblend-Animation in Millisekunden.
pub const FADE_DURATION_MS: u32 = 500;
/// Abbrems-Faktor der Interpolation.
pub const FADE_DECELERATE_FACTOR: f32 = 2.0;
/// Radius-Faktor am Ende der Animation.
pub const FADE_RADIUS_MULTIPLIER_MAX: f32 = 2.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen der Zeichenfläche.
/// Wird als `curve_paths.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceOptions {
    /// Basis-Radius der Marker (dp)
    pub marker_radius_dp: f32,
    /// Füllfarbe der Marker (RGBA)
    pub marker_color: [u8; 4],
    /// Farbe der Kurve (RGBA)
    pub curve_color: [u8; 4],
    /// Linienstärke der Kurve
    pub curve_stroke_width: f32,
    /// Hintergrundfarbe der Fläche (RGBA)
    pub background_color: [u8; 4],
    /// Bewegungs-Schwelle für Move-Events (dp)
    pub touch_slop_dp: f32,
    /// Dauer der Ausblend-Animation (ms)
    pub fade_duration_ms: u32,
    /// Abbrems-Faktor der Ausblend-Interpolation
    pub fade_decelerate_factor: f32,
    /// Radius-Faktor am Ende der Animation
    pub fade_radius_multiplier_max: f32,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            marker_radius_dp: MARKER_RADIUS_DP,
            marker_color: MARKER_COLOR,
            curve_color: CURVE_COLOR,
            curve_stroke_width: CURVE_STROKE_WIDTH,
            background_color: [255, 255, 255, 255],
            touch_slop_dp: TOUCH_SLOP_DP,
            fade_duration_ms: FADE_DURATION_MS,
            fade_decelerate_factor: FADE_DECELERATE_FACTOR,
            fade_radius_multiplier_max: FADE_RADIUS_MULTIPLIER_MAX,
        }
    }
}

impl SurfaceOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Lädt Optionen; fehlt die Datei, werden die Standardwerte dort angelegt.
    pub fn load_or_create(path: &std::path::Path) -> Self {
        if path.exists() {
            return Self::load_from_file(path);
        }
        let options = Self::default();
        if let Err(e) = options.save_to_file(path) {
            log::warn!("Standard-Optionen konnten nicht gespeichert werden: {:#}", e);
        }
        options
    }

    /// Parst Optionen aus TOML-Text. Fehlende Felder fallen auf Standardwerte zurück.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let options = toml::from_str(content)?;
        Ok(options)
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("curve_paths"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("curve_paths.toml")
    }

    /// Animationsdauer in Sekunden.
    pub fn fade_duration_secs(&self) -> f64 {
        f64::from(self.fade_duration_ms) / 1000.0
    }
}
