//! Canvas-Input: egui-Touch- und Maus-Events → `PointerEvent`.
//!
//! Finger erhalten dichte Pointer-Kennungen (kleinste freie ab 0), wie es
//! mobile Plattformen tun. Die Maus verhält sich wie ein einzelner Finger
//! mit Kennung 0 und wird ignoriert, solange Finger aktiv sind.

use eframe::egui;

use crate::core::{Point, PointerAction, PointerEvent, PRIMARY_POINTER_ID};

/// Verwaltet aktive Finger und den Zustand der Maustaste.
#[derive(Debug, Default)]
pub struct InputState {
    /// Aktive Finger in Reihenfolge des Aufsetzens
    touches: Vec<(egui::TouchId, i32)>,
    mouse_down: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt die Pointer-Events dieses Frames für die Zeichenfläche `rect`.
    pub fn collect_canvas_events(&mut self, ui: &egui::Ui, rect: egui::Rect) -> Vec<PointerEvent> {
        let raw_events = ui.input(|i| i.events.clone());
        let mut events = Vec::new();

        for event in raw_events {
            match event {
                egui::Event::Touch { id, phase, pos, .. } => {
                    events.extend(self.on_touch(id, phase, pos, rect));
                }
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    events.extend(self.on_mouse_button(pressed, pos, rect));
                }
                egui::Event::PointerMoved(pos) => {
                    events.extend(self.on_mouse_moved(pos, rect));
                }
                _ => {}
            }
        }

        events
    }

    /// Übersetzt eine Touch-Phase eines Fingers.
    pub(crate) fn on_touch(
        &mut self,
        id: egui::TouchId,
        phase: egui::TouchPhase,
        pos: egui::Pos2,
        rect: egui::Rect,
    ) -> Option<PointerEvent> {
        let position = canvas_point(pos, rect);
        match phase {
            egui::TouchPhase::Start => {
                if !rect.contains(pos) || self.index_of(id).is_some() {
                    return None;
                }
                let action = if self.touches.is_empty() {
                    PointerAction::Down
                } else {
                    PointerAction::PointerDown
                };
                let pointer_id = self.free_pointer_id();
                self.touches.push((id, pointer_id));
                Some(PointerEvent {
                    action,
                    position,
                    pointer_id,
                    action_index: self.touches.len() - 1,
                })
            }
            egui::TouchPhase::Move => {
                let index = self.index_of(id)?;
                Some(PointerEvent {
                    action: PointerAction::Move,
                    position,
                    pointer_id: self.touches[index].1,
                    action_index: index,
                })
            }
            egui::TouchPhase::End => {
                let index = self.index_of(id)?;
                let (_, pointer_id) = self.touches.remove(index);
                let action = if self.touches.is_empty() {
                    PointerAction::Up
                } else {
                    PointerAction::PointerUp
                };
                Some(PointerEvent {
                    action,
                    position,
                    pointer_id,
                    action_index: index,
                })
            }
            egui::TouchPhase::Cancel => {
                let index = self.index_of(id)?;
                let (_, pointer_id) = self.touches.remove(index);
                Some(PointerEvent {
                    action: PointerAction::Cancel,
                    position,
                    pointer_id,
                    action_index: index,
                })
            }
        }
    }

    /// Primäre Maustaste gedrückt/losgelassen.
    pub(crate) fn on_mouse_button(
        &mut self,
        pressed: bool,
        pos: egui::Pos2,
        rect: egui::Rect,
    ) -> Option<PointerEvent> {
        // egui simuliert Maus-Events für den ersten Finger
        if !self.touches.is_empty() {
            return None;
        }
        let position = canvas_point(pos, rect);
        if pressed {
            if !rect.contains(pos) {
                return None;
            }
            self.mouse_down = true;
            Some(PointerEvent::primary(PointerAction::Down, position))
        } else if self.mouse_down {
            self.mouse_down = false;
            Some(PointerEvent::primary(PointerAction::Up, position))
        } else {
            None
        }
    }

    /// Mausbewegung bei gedrückter Taste.
    pub(crate) fn on_mouse_moved(&mut self, pos: egui::Pos2, rect: egui::Rect) -> Option<PointerEvent> {
        if !self.mouse_down || !self.touches.is_empty() {
            return None;
        }
        Some(PointerEvent::primary(
            PointerAction::Move,
            canvas_point(pos, rect),
        ))
    }

    /// Anzahl aktiver Finger.
    pub fn active_touches(&self) -> usize {
        self.touches.len()
    }

    fn index_of(&self, id: egui::TouchId) -> Option<usize> {
        self.touches.iter().position(|(touch, _)| *touch == id)
    }

    fn free_pointer_id(&self) -> i32 {
        (PRIMARY_POINTER_ID..)
            .find(|candidate| !self.touches.iter().any(|(_, used)| used == candidate))
            .unwrap_or(PRIMARY_POINTER_ID)
    }
}

/// Screen-Position → ganzzahlige Canvas-Koordinate (abgeschnitten).
fn canvas_point(pos: egui::Pos2, rect: egui::Rect) -> Point {
    let local = pos - rect.min;
    Point::new(local.x as i32, local.y as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(100.0, 50.0), egui::vec2(400.0, 300.0))
    }

    fn touch(
        input: &mut InputState,
        id: u64,
        phase: egui::TouchPhase,
        x: f32,
        y: f32,
    ) -> Option<PointerEvent> {
        input.on_touch(egui::TouchId(id), phase, egui::pos2(x, y), rect())
    }

    #[test]
    fn test_first_finger_is_down_with_primary_id() {
        let mut input = InputState::new();
        let event = touch(&mut input, 77, egui::TouchPhase::Start, 110.7, 60.2)
            .expect("Event erwartet");
        assert_eq!(event.action, PointerAction::Down);
        assert_eq!(event.pointer_id, 0);
        assert_eq!(event.position, Point::new(10, 10));
    }

    #[test]
    fn test_second_finger_is_pointer_down() {
        let mut input = InputState::new();
        touch(&mut input, 1, egui::TouchPhase::Start, 150.0, 60.0);
        let event = touch(&mut input, 2, egui::TouchPhase::Start, 160.0, 60.0)
            .expect("Event erwartet");
        assert_eq!(event.action, PointerAction::PointerDown);
        assert_eq!(event.pointer_id, 1);
        assert_eq!(event.action_index, 1);
    }

    #[test]
    fn test_lifting_fingers_reuses_ids() {
        let mut input = InputState::new();
        touch(&mut input, 1, egui::TouchPhase::Start, 150.0, 60.0);
        touch(&mut input, 2, egui::TouchPhase::Start, 160.0, 60.0);

        let up = touch(&mut input, 1, egui::TouchPhase::End, 150.0, 60.0).expect("Event erwartet");
        assert_eq!(up.action, PointerAction::PointerUp);

        let again = touch(&mut input, 3, egui::TouchPhase::Start, 170.0, 60.0)
            .expect("Event erwartet");
        assert_eq!(again.pointer_id, 0);

        touch(&mut input, 2, egui::TouchPhase::End, 160.0, 60.0);
        let last = touch(&mut input, 3, egui::TouchPhase::End, 170.0, 60.0).expect("Event erwartet");
        assert_eq!(last.action, PointerAction::Up);
        assert_eq!(input.active_touches(), 0);
    }

    #[test]
    fn test_touch_outside_canvas_is_ignored() {
        let mut input = InputState::new();
        assert!(touch(&mut input, 1, egui::TouchPhase::Start, 10.0, 10.0).is_none());
        assert!(touch(&mut input, 1, egui::TouchPhase::Move, 150.0, 60.0).is_none());
    }

    #[test]
    fn test_mouse_drag_maps_to_primary_pointer() {
        let mut input = InputState::new();
        let down = input
            .on_mouse_button(true, egui::pos2(120.0, 70.0), rect())
            .expect("Event erwartet");
        assert_eq!(down.action, PointerAction::Down);

        let moved = input
            .on_mouse_moved(egui::pos2(140.0, 70.0), rect())
            .expect("Event erwartet");
        assert_eq!(moved.action, PointerAction::Move);
        assert_eq!(moved.position, Point::new(40, 20));

        let up = input
            .on_mouse_button(false, egui::pos2(140.0, 70.0), rect())
            .expect("Event erwartet");
        assert_eq!(up.action, PointerAction::Up);
        assert!(input.on_mouse_moved(egui::pos2(150.0, 70.0), rect()).is_none());
    }

    #[test]
    fn test_mouse_ignored_while_touching() {
        let mut input = InputState::new();
        touch(&mut input, 1, egui::TouchPhase::Start, 150.0, 60.0);
        assert!(input
            .on_mouse_button(true, egui::pos2(150.0, 60.0), rect())
            .is_none());
    }
}
