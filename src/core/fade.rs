//! Zeitgesteuerte Ausblend-Animation für den zuletzt platzierten Punkt.
//!
//! Die Animation kennt nur ihren Fortschritt (0 → 1). Was daraus wird,
//! entscheidet der `FadeListener`: Deckkraft 255 → 0 und Radius-Faktor
//! 0 → `max_multiplier`. Zeit kommt als monotone Sekunden-Angabe von außen
//! (egui: `InputState::time`).

/// Abbremsende Interpolation: schneller Start, weiches Auslaufen.
///
/// `f(t) = 1 - (1 - t)^(2 * factor)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecelerateEasing {
    factor: f32,
}

impl DecelerateEasing {
    /// Erstellt eine Interpolation mit dem gegebenen Abbrems-Faktor.
    pub fn new(factor: f32) -> Self {
        Self { factor }
    }

    /// Bildet linearen Fortschritt auf interpolierten Fortschritt ab.
    pub fn apply(&self, t: f32) -> f32 {
        let rest = 1.0 - t.clamp(0.0, 1.0);
        if self.factor == 1.0 {
            1.0 - rest * rest
        } else {
            1.0 - rest.powf(2.0 * self.factor)
        }
    }
}

impl Default for DecelerateEasing {
    fn default() -> Self {
        Self::new(2.0)
    }
}

/// Interpolierte Werte eines Animations-Ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeFrame {
    /// Deckkraft der Marker (255 → 0)
    pub alpha: u8,
    /// Faktor auf den Basis-Radius (0 → max)
    pub radius_multiplier: f32,
}

/// Empfänger der Animations-Callbacks.
pub trait FadeListener {
    /// Wird bei jedem Tick mit den interpolierten Werten aufgerufen.
    fn on_fade_tick(&mut self, frame: FadeFrame);
    /// Wird bei Abbruch und bei regulärem Ende aufgerufen.
    fn on_fade_end(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum FadePhase {
    Idle,
    Running { started_at: f64 },
}

/// Treiber der Ausblend-Animation. Es läuft höchstens ein Zyklus gleichzeitig.
#[derive(Debug, Clone)]
pub struct FadeAnimation {
    duration_secs: f64,
    easing: DecelerateEasing,
    max_multiplier: f32,
    phase: FadePhase,
}

impl FadeAnimation {
    /// Erstellt eine ruhende Animation.
    pub fn new(duration_secs: f64, easing: DecelerateEasing, max_multiplier: f32) -> Self {
        Self {
            duration_secs: duration_secs.max(0.0),
            easing,
            max_multiplier,
            phase: FadePhase::Idle,
        }
    }

    /// True solange ein Zyklus läuft.
    pub fn is_active(&self) -> bool {
        matches!(self.phase, FadePhase::Running { .. })
    }

    /// Startet einen neuen Zyklus und liefert sofort die Startwerte.
    ///
    /// Ein laufender Zyklus wird vorher abgebrochen (inkl. `on_fade_end`).
    pub fn start(&mut self, now: f64, listener: &mut impl FadeListener) {
        self.cancel(listener);
        log::debug!("Ausblend-Animation gestartet ({:.0} ms)", self.duration_secs * 1000.0);
        self.phase = FadePhase::Running { started_at: now };
        listener.on_fade_tick(self.frame_at(0.0));
    }

    /// Bricht einen laufenden Zyklus ab. Gibt `true` zurück, wenn einer lief.
    pub fn cancel(&mut self, listener: &mut impl FadeListener) -> bool {
        if !self.is_active() {
            return false;
        }
        self.phase = FadePhase::Idle;
        log::debug!("Ausblend-Animation abgebrochen");
        listener.on_fade_end();
        true
    }

    /// Schreitet zur Zeit `now` fort und liefert dem Listener einen Tick.
    ///
    /// Ist die Dauer erreicht, folgt auf den letzten Tick `on_fade_end`.
    /// Gibt zurück, ob die Animation danach noch läuft.
    pub fn advance(&mut self, now: f64, listener: &mut impl FadeListener) -> bool {
        let FadePhase::Running { started_at } = self.phase else {
            return false;
        };

        let elapsed = (now - started_at).max(0.0);
        let linear = if self.duration_secs > 0.0 {
            (elapsed / self.duration_secs).min(1.0) as f32
        } else {
            1.0
        };

        listener.on_fade_tick(self.frame_at(linear));

        if linear >= 1.0 {
            self.phase = FadePhase::Idle;
            log::debug!("Ausblend-Animation beendet");
            listener.on_fade_end();
            return false;
        }
        true
    }

    /// Interpolierte Werte bei linearem Fortschritt `t`.
    pub fn frame_at(&self, t: f32) -> FadeFrame {
        let eased = self.easing.apply(t);
        FadeFrame {
            alpha: (255.0 * (1.0 - eased)) as u8,
            radius_multiplier: self.max_multiplier * eased,
        }
    }
}
