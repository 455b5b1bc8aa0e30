use eframe::egui;
use std::time::Duration;

use super::DiagramApp;
use super::doc_ops::AlignMode;
use super::interaction::EditKey;
use super::render::{
    caret_visible, color_row, draw_background, draw_caret, draw_connectors, draw_gesture,
    draw_items,
};

#[cfg(test)]
#[path = "update_test.rs"]
mod update_test;

#[derive(Clone, Copy, Debug)]
enum MenuCommand {
    Delete,
    Stack,
    Align(AlignMode),
}

impl eframe::App for DiagramApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

/// Whether an egui text field (the color picker's numeric inputs) holds focus.
/// Buttons reached with Tab don't count.
fn text_field_focused(ctx: &egui::Context) -> bool {
    ctx.memory(|mem| mem.focused())
        .is_some_and(|id| egui::text_edit::TextEditState::load(ctx, id).is_some())
}

impl DiagramApp {
    fn show(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Fill");
                let mut color = self.pick_color;
                if color_row(ui, &mut color) {
                    self.recolor_selection(color);
                }
                ui.separator();
                ui.weak("Double-click: new node   Shift+drag: connect   Right-click: arrange");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let (rect, response) = ui.allocate_exact_size(
                ui.available_size(),
                egui::Sense::CLICK | egui::Sense::DRAG,
            );
            let origin = rect.min;

            self.dispatch_input(ctx, rect);
            self.relayout();

            let painter = ui.painter_at(rect);
            draw_background(&painter, rect, self.settings.canvas_background);
            draw_connectors(&painter, origin, &self.scene, &self.settings);
            draw_items(&painter, origin, &self.scene, &self.settings);
            draw_gesture(&painter, origin, &self.scene, &self.gesture, &self.settings);

            let time = ctx.input(|i| i.time);
            if caret_visible(time, self.settings.blink_interval_ms) {
                if let Some(item) = self.editing.and_then(|id| self.scene.get(id)) {
                    draw_caret(&painter, origin, item, self.settings.font_size);
                }
            }

            if response.hovered() && self.hovered.is_some() {
                ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
            }

            self.context_menu_ui(ctx, origin);
        });

        ctx.request_repaint_after(Duration::from_millis(self.settings.blink_interval_ms));
    }

    /// Replays this frame's raw events, in order, through the canvas controller.
    fn dispatch_input(&mut self, ctx: &egui::Context, canvas: egui::Rect) {
        let events = ctx.input(|i| i.events.clone());
        let keyboard_free = !text_field_focused(ctx);
        let to_local = |pos: egui::Pos2| (pos - canvas.min).to_pos2();
        // Presses landing on a popup (context menu, color picker) belong to that popup.
        let on_canvas = |pos: egui::Pos2| {
            canvas.contains(pos)
                && ctx
                    .layer_id_at(pos)
                    .is_none_or(|layer| layer.order == egui::Order::Background)
        };

        for event in events {
            match event {
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed: true,
                    modifiers,
                } => {
                    if on_canvas(pos) {
                        self.pointer_down(to_local(pos), modifiers);
                    } else if !canvas.contains(pos) {
                        self.dismiss_context_menu();
                    }
                }
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed: false,
                    ..
                } => self.pointer_up(to_local(pos)),
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Secondary,
                    pressed: true,
                    ..
                } if on_canvas(pos) => self.secondary_press(to_local(pos)),
                egui::Event::PointerMoved(pos) => self.pointer_move(to_local(pos)),
                egui::Event::Text(text) if keyboard_free => self.key_text(&text),
                egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } if keyboard_free => {
                    if let Some(key) = EditKey::from_egui(key) {
                        self.key_press(key, modifiers);
                    }
                }
                _ => {}
            }
        }

        let double = ctx.input(|i| {
            i.pointer
                .button_double_clicked(egui::PointerButton::Primary)
                .then(|| i.pointer.interact_pos())
                .flatten()
        });
        if let Some(pos) = double.filter(|&pos| on_canvas(pos)) {
            self.double_click(to_local(pos));
        }
    }

    fn context_menu_ui(&mut self, ctx: &egui::Context, origin: egui::Pos2) {
        let Some(anchor) = self.context_menu else {
            return;
        };
        let mut command = None;
        egui::Area::new(egui::Id::new("context_menu"))
            .fixed_pos(origin + anchor.to_vec2())
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_min_width(140.0);
                    if ui.button("Delete").clicked() {
                        command = Some(MenuCommand::Delete);
                    }
                    if ui.button("Stack").clicked() {
                        command = Some(MenuCommand::Stack);
                    }
                    ui.separator();
                    for mode in AlignMode::ALL {
                        if ui.button(mode.label()).clicked() {
                            command = Some(MenuCommand::Align(mode));
                        }
                    }
                });
            });
        match command {
            Some(MenuCommand::Delete) => self.delete_selection(),
            Some(MenuCommand::Stack) => self.stack(),
            Some(MenuCommand::Align(mode)) => self.align(mode),
            None => {}
        }
    }
}
