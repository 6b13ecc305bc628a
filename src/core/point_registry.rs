//! Punkt-Register: vier feste Slots mit umlaufendem Cursor.
//!
//! Slot 0 ist immer der Startpunkt, der höchste belegte Slot der Endpunkt,
//! dazwischen liegen die Steuerpunkte der Bézier-Kurve.

use glam::IVec2;

/// Ein platzierter Touch-Punkt in ganzzahligen Canvas-Koordinaten.
pub type Point = IVec2;

/// Anzahl der Slots (Start, Steuerpunkt 1, Steuerpunkt 2, Ende).
pub const MAX_POINTS: usize = 4;

/// Pointer-Kennung des ersten Fingers bzw. der Maus.
pub const PRIMARY_POINTER_ID: i32 = 0;

/// Position des Cursors im Register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurrentSlot {
    /// Es wurde noch kein Punkt registriert
    #[default]
    Unset,
    /// Index des zuletzt registrierten Slots
    Slot(usize),
}

/// Ringpuffer mit vier optionalen Punkten und einem "aktuellen" Slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointRegistry {
    slots: [Option<Point>; MAX_POINTS],
    current: CurrentSlot,
}

impl PointRegistry {
    /// Erstellt ein leeres Register ohne aktuellen Slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen neuen Punkt im nächsten Slot.
    ///
    /// Springt der Cursor auf Slot 0 zurück, beginnt eine neue Sitzung:
    /// alle Slots werden vorher geleert. Gibt den belegten Slot zurück.
    pub fn register_next(&mut self, point: Point) -> usize {
        let next = match self.current {
            CurrentSlot::Unset => 0,
            CurrentSlot::Slot(index) => (index + 1) % MAX_POINTS,
        };

        if next == 0 {
            let dropped = self.iter().count();
            if dropped > 0 {
                log::debug!("Neue Sitzung: {} Punkte verworfen", dropped);
            }
            self.slots = [None; MAX_POINTS];
        }

        self.slots[next] = Some(point);
        self.current = CurrentSlot::Slot(next);
        next
    }

    /// Überschreibt den Punkt eines Slots.
    ///
    /// Der primäre Pointer verschiebt den aktuellen Slot, die Pointer 1–3
    /// schreiben fest in "ihren" Slot, auch wenn dieser noch leer ist.
    /// Andere Kennungen werden ignoriert. Gibt den geänderten Slot zurück.
    pub fn update_slot(&mut self, pointer_id: i32, point: Point) -> Option<usize> {
        let target = if pointer_id == PRIMARY_POINTER_ID {
            self.current_index()?
        } else {
            usize::try_from(pointer_id)
                .ok()
                .filter(|&index| index < MAX_POINTS)?
        };

        *self.slots.get_mut(target)? = Some(point);
        Some(target)
    }

    /// Punkt in einem Slot (`None` für leere oder ungültige Slots).
    pub fn get(&self, slot: usize) -> Option<Point> {
        self.slots.get(slot).copied().flatten()
    }

    /// Alle Slots in fester Reihenfolge.
    pub fn slots(&self) -> &[Option<Point>; MAX_POINTS] {
        &self.slots
    }

    /// Zustand des Cursors.
    pub fn current(&self) -> CurrentSlot {
        self.current
    }

    /// Index des aktuellen Slots, falls bereits ein Punkt registriert wurde.
    pub fn current_index(&self) -> Option<usize> {
        match self.current {
            CurrentSlot::Unset => None,
            CurrentSlot::Slot(index) => Some(index),
        }
    }

    /// Punkt im aktuellen Slot.
    pub fn current_point(&self) -> Option<Point> {
        self.current_index().and_then(|index| self.get(index))
    }

    /// Anzahl der lückenlos belegten Slots ab Slot 0.
    pub fn filled_len(&self) -> usize {
        self.slots.iter().take_while(|slot| slot.is_some()).count()
    }

    /// Iteriert über alle belegten Slots als `(index, punkt)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Point)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.map(|point| (index, point)))
    }
}
