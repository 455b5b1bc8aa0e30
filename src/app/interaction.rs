//! Pointer and keyboard handling for the canvas.
//!
//! Every handler runs the layout pass first, so hit-testing always sees the
//! extents of the current text rather than whatever was painted last frame.
//! Positions are canvas-local.

use crate::model;
use eframe::egui;

use super::geometry::{boxes_overlap, item_box, normalized_rect};
use super::{DiagramApp, Gesture};

#[cfg(test)]
#[path = "interaction_test.rs"]
mod interaction_test;

/// Keys with editing semantics; printable input arrives through [`DiagramApp::key_text`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum EditKey {
    Backspace,
    Enter,
    Escape,
}

impl EditKey {
    pub(super) fn from_egui(key: egui::Key) -> Option<Self> {
        match key {
            egui::Key::Backspace => Some(Self::Backspace),
            egui::Key::Enter => Some(Self::Enter),
            egui::Key::Escape => Some(Self::Escape),
            _ => None,
        }
    }
}

impl DiagramApp {
    pub(super) fn pointer_down(&mut self, pos: egui::Pos2, modifiers: egui::Modifiers) {
        self.relayout();
        self.context_menu = None;
        match self.hit(pos) {
            Some(id) if modifiers.shift => {
                self.gesture = Gesture::Connecting {
                    from: id,
                    current: None,
                };
            }
            Some(id) => {
                self.gesture = Gesture::Dragging { last: pos };
                let already_selected = self.scene.get(id).is_some_and(|item| item.selected);
                if !already_selected {
                    self.select_only(id);
                    self.scene.move_to_front(id);
                }
            }
            None => {
                self.gesture = Gesture::BoxSelecting {
                    start: pos,
                    current: pos,
                };
                self.scene.clear_selection();
                self.editing = None;
            }
        }
    }

    pub(super) fn pointer_move(&mut self, pos: egui::Pos2) {
        self.relayout();
        match &mut self.gesture {
            Gesture::Idle => {}
            Gesture::Dragging { last } => {
                let delta = pos - *last;
                *last = pos;
                self.scene.translate_selected(delta);
            }
            Gesture::BoxSelecting { start, current } => {
                *current = pos;
                let rect = normalized_rect(*start, pos);
                let padding = self.settings.padding;
                for item in &mut self.scene.items {
                    item.selected = boxes_overlap(item_box(item, padding), rect);
                }
            }
            Gesture::Connecting { current, .. } => *current = Some(pos),
        }
        self.hovered = self.hit(pos);
    }

    pub(super) fn pointer_up(&mut self, pos: egui::Pos2) {
        self.relayout();
        let gesture = std::mem::take(&mut self.gesture);
        let Gesture::Connecting { from, .. } = gesture else {
            return;
        };
        let Some(target) = self.hit(pos) else {
            return;
        };
        let selected = self.scene.selected_ids();
        if selected.is_empty() {
            self.scene.toggle_connection(from, target);
        } else {
            for id in selected.into_iter().filter(|&id| id != target) {
                self.scene.toggle_connection(id, target);
            }
        }
    }

    pub(super) fn double_click(&mut self, pos: egui::Pos2) {
        self.relayout();
        let id = match self.hit(pos) {
            Some(id) => id,
            None => self.scene.add_item(pos, self.settings.default_background),
        };
        self.editing = Some(id);
    }

    /// Printable input for the item under edit. Control characters are dropped.
    pub(super) fn key_text(&mut self, text: &str) {
        let Some(item) = self.editing.and_then(|id| self.scene.get_mut(id)) else {
            return;
        };
        item.text.extend(text.chars().filter(|c| !c.is_control()));
    }

    pub(super) fn key_press(&mut self, key: EditKey, modifiers: egui::Modifiers) {
        self.relayout();
        let Some(editing) = self.editing else {
            if key == EditKey::Backspace {
                self.delete_selection();
            }
            return;
        };
        match key {
            EditKey::Backspace => {
                if let Some(item) = self.scene.get_mut(editing) {
                    item.text.pop();
                }
            }
            EditKey::Enter | EditKey::Escape if modifiers.shift => {
                self.spawn_below(editing);
            }
            EditKey::Enter | EditKey::Escape => {
                if let Some(item) = self.scene.get_mut(editing) {
                    item.selected = false;
                }
                self.editing = None;
            }
        }
    }

    /// Ends the edit of `id` and starts a fresh item directly beneath it.
    fn spawn_below(&mut self, id: model::ItemId) {
        let Some(item) = self.scene.get(id) else {
            self.editing = None;
            return;
        };
        let offset = item.size.y + self.settings.padding * 2.0 + self.settings.padding_between;
        let pos = item.pos + egui::vec2(0.0, offset);
        let new_id = self.scene.add_item(pos, self.settings.default_background);
        self.editing = Some(new_id);
    }

    /// Secondary press: cancel a drag and open the menu when there is something to act on.
    pub(super) fn secondary_press(&mut self, pos: egui::Pos2) {
        if matches!(self.gesture, Gesture::Dragging { .. }) {
            self.gesture = Gesture::Idle;
        }
        if self.scene.has_selection() {
            self.context_menu = Some(pos);
        }
    }
}
