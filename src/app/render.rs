use crate::model;
use eframe::egui;

use super::geometry::{connector_endpoints, item_box, nearest_anchor_pair, rounded_rect_points};
use super::settings::AppSettings;
use super::Gesture;

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

const DASH: f32 = 4.0;
const GAP: f32 = 4.0;
const CORNER_SEGMENTS: usize = 6;
const CARET_WIDTH: f32 = 2.0;

fn ink() -> egui::Stroke {
    egui::Stroke::new(1.0, egui::Color32::BLACK)
}

/// Maps canvas-local coordinates onto the screen.
fn to_screen(origin: egui::Pos2, p: egui::Pos2) -> egui::Pos2 {
    origin + p.to_vec2()
}

pub(super) fn color_row(ui: &mut egui::Ui, rgba: &mut model::Rgba) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        let presets = [
            egui::Color32::from_rgb(0xf5, 0xf5, 0xf5),
            egui::Color32::from_rgb(0xf5, 0xef, 0xdf),
            egui::Color32::from_rgb(255, 214, 214),
            egui::Color32::from_rgb(214, 240, 214),
            egui::Color32::from_rgb(214, 228, 255),
            egui::Color32::from_rgb(255, 236, 179),
        ];
        for c in presets {
            if ui
                .add_sized([18.0, 18.0], egui::Button::new("").fill(c))
                .clicked()
            {
                *rgba = model::Rgba::from_color32(c);
                changed = true;
            }
        }
        let mut arr = [rgba.r, rgba.g, rgba.b, rgba.a];
        if ui.color_edit_button_srgba_unmultiplied(&mut arr).changed() {
            *rgba = model::Rgba {
                r: arr[0],
                g: arr[1],
                b: arr[2],
                a: arr[3],
            };
            changed = true;
        }
    });
    changed
}

pub(super) fn draw_background(painter: &egui::Painter, rect: egui::Rect, color: model::Rgba) {
    painter.rect_filled(rect, 0.0, color.to_color32());
}

/// One dashed line per connected pair.
pub(super) fn draw_connectors(
    painter: &egui::Painter,
    origin: egui::Pos2,
    scene: &model::Scene,
    settings: &AppSettings,
) {
    for (a, b) in scene.connected_pairs() {
        let (Some(a), Some(b)) = (scene.get(a), scene.get(b)) else {
            continue;
        };
        let (p, q) = connector_endpoints(
            settings.connector_routing,
            a,
            b,
            settings.anchor_clearance,
        );
        draw_dashed_line(painter, to_screen(origin, p), to_screen(origin, q), ink());
    }
}

pub(super) fn draw_items(
    painter: &egui::Painter,
    origin: egui::Pos2,
    scene: &model::Scene,
    settings: &AppSettings,
) {
    let font_id = egui::FontId::proportional(settings.font_size);
    for item in &scene.items {
        let body = item_box(item, settings.padding).translate(origin.to_vec2());
        let outline = rounded_rect_points(body, settings.corner_radius, CORNER_SEGMENTS);
        painter.add(egui::Shape::convex_polygon(
            outline,
            item.background.to_color32(),
            egui::Stroke::NONE,
        ));
        painter.text(
            to_screen(origin, item.pos),
            egui::Align2::CENTER_CENTER,
            &item.text,
            font_id.clone(),
            egui::Color32::BLACK,
        );
        if item.selected {
            let highlight = item_box(item, (settings.padding - 2.0).max(0.0))
                .translate(origin.to_vec2());
            draw_dashed_rect(painter, highlight, ink());
        }
    }
}

/// Live connector from the start item to the pointer, and the rubber-band rectangle.
pub(super) fn draw_gesture(
    painter: &egui::Painter,
    origin: egui::Pos2,
    scene: &model::Scene,
    gesture: &Gesture,
    settings: &AppSettings,
) {
    match gesture {
        Gesture::Connecting {
            from,
            current: Some(current),
        } => {
            let Some(start) = scene.get(*from) else {
                return;
            };
            let (p, q) = nearest_anchor_pair(
                start.pos,
                start.size,
                *current,
                egui::Vec2::ZERO,
                settings.anchor_clearance,
            );
            draw_dashed_line(painter, to_screen(origin, p), to_screen(origin, q), ink());
        }
        Gesture::BoxSelecting { start, current } => {
            let r = egui::Rect::from_two_pos(to_screen(origin, *start), to_screen(origin, *current));
            draw_dashed_rect(painter, r, ink());
        }
        _ => {}
    }
}

/// Whether the caret shows during the blink phase containing `time_secs`.
pub(super) fn caret_visible(time_secs: f64, blink_interval_ms: u64) -> bool {
    let interval = blink_interval_ms.max(1) as f64 / 1000.0;
    (time_secs / interval).floor() as u64 % 2 == 0
}

pub(super) fn draw_caret(
    painter: &egui::Painter,
    origin: egui::Pos2,
    item: &model::Item,
    font_size: f32,
) {
    let top = egui::pos2(item.pos.x + item.size.x * 0.5, item.pos.y - font_size * 0.5);
    let caret = egui::Rect::from_min_size(to_screen(origin, top), egui::vec2(CARET_WIDTH, font_size));
    painter.rect_filled(caret, 0.0, egui::Color32::BLACK);
}

fn draw_dashed_rect(painter: &egui::Painter, rect: egui::Rect, stroke: egui::Stroke) {
    let corners = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
    ];
    for i in 0..corners.len() {
        draw_dashed_line(painter, corners[i], corners[(i + 1) % corners.len()], stroke);
    }
}

fn draw_dashed_line(painter: &egui::Painter, a: egui::Pos2, b: egui::Pos2, stroke: egui::Stroke) {
    let v = b - a;
    let len = v.length();
    if len <= f32::EPSILON {
        return;
    }
    let dir = v / len;
    let mut pos = 0.0;
    let mut drawing = true;
    while pos < len {
        let seg_len = if drawing { DASH } else { GAP };
        let next_pos = (pos + seg_len).min(len);
        if drawing {
            painter.line_segment([a + dir * pos, a + dir * next_pos], stroke);
        }
        pos = next_pos;
        drawing = !drawing;
    }
}
