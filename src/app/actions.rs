use crate::model;
use eframe::egui;

use super::doc_ops::{AlignMode, align_selected, stack_selected};
use super::geometry::{item_box, point_in_rounded_rect};
use super::{DiagramApp, Gesture};

impl DiagramApp {
    /// First item in array order whose rounded box contains `pos`.
    pub(super) fn hit(&self, pos: egui::Pos2) -> Option<model::ItemId> {
        let padding = self.settings.padding;
        let radius = self.settings.corner_radius;
        self.scene
            .items
            .iter()
            .find(|item| point_in_rounded_rect(item_box(item, padding), radius, pos))
            .map(|item| item.id)
    }

    pub(super) fn select_only(&mut self, id: model::ItemId) {
        self.scene.clear_selection();
        if let Some(item) = self.scene.get_mut(id) {
            item.selected = true;
        }
    }

    /// Shared epilogue of the context-menu commands.
    fn finish_menu_command(&mut self) {
        self.context_menu = None;
        if matches!(self.gesture, Gesture::Dragging { .. }) {
            self.gesture = Gesture::Idle;
        }
    }

    pub(super) fn delete_selection(&mut self) {
        if !self.scene.has_selection() {
            return;
        }
        if self
            .editing
            .is_some_and(|id| self.scene.get(id).is_some_and(|item| item.selected))
        {
            self.editing = None;
        }
        if let Gesture::Connecting { from, .. } = self.gesture {
            if self.scene.get(from).is_some_and(|item| item.selected) {
                self.gesture = Gesture::Idle;
            }
        }
        self.scene.delete_selected();
        if self.hovered.is_some_and(|id| self.scene.get(id).is_none()) {
            self.hovered = None;
        }
        self.finish_menu_command();
    }

    pub(super) fn align(&mut self, mode: AlignMode) {
        if !self.scene.has_selection() {
            return;
        }
        align_selected(&mut self.scene, mode);
        self.finish_menu_command();
    }

    pub(super) fn stack(&mut self) {
        if !self.scene.has_selection() {
            return;
        }
        stack_selected(
            &mut self.scene,
            self.settings.padding,
            self.settings.padding_between,
        );
        self.finish_menu_command();
    }

    /// Color input changed: remember the value and paint the selection with it.
    pub(super) fn recolor_selection(&mut self, color: model::Rgba) {
        self.pick_color = color;
        self.scene.set_background_selected(color);
    }

    pub(super) fn dismiss_context_menu(&mut self) {
        self.context_menu = None;
    }
}
