use crate::model;
use eframe::egui;

use super::settings::ConnectorRouting;

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// The item's painted box: text extents grown by `padding` on every side.
pub(super) fn item_box(item: &model::Item, padding: f32) -> egui::Rect {
    egui::Rect::from_center_size(item.pos, item.size).expand(padding)
}

/// Strict overlap; rects that only share an edge do not count.
pub(super) fn boxes_overlap(a: egui::Rect, b: egui::Rect) -> bool {
    a.min.x < b.max.x && a.max.x > b.min.x && a.min.y < b.max.y && a.max.y > b.min.y
}

fn clamp_radius(rect: egui::Rect, radius: f32) -> f32 {
    radius.min(rect.width() * 0.5).min(rect.height() * 0.5).max(0.0)
}

/// Outline of a rounded rectangle, clockwise from the top-left arc.
pub(super) fn rounded_rect_points(
    rect: egui::Rect,
    radius: f32,
    segments_per_corner: usize,
) -> Vec<egui::Pos2> {
    let r = clamp_radius(rect, radius);
    if r <= f32::EPSILON {
        return vec![
            rect.left_top(),
            rect.right_top(),
            rect.right_bottom(),
            rect.left_bottom(),
        ];
    }
    let segments = segments_per_corner.max(1);
    let corners = [
        (egui::pos2(rect.min.x + r, rect.min.y + r), std::f32::consts::PI),
        (egui::pos2(rect.max.x - r, rect.min.y + r), std::f32::consts::PI * 1.5),
        (egui::pos2(rect.max.x - r, rect.max.y - r), 0.0),
        (egui::pos2(rect.min.x + r, rect.max.y - r), std::f32::consts::FRAC_PI_2),
    ];
    let mut points = Vec::with_capacity(4 * (segments + 1));
    for (center, start) in corners {
        for i in 0..=segments {
            let t = start + (i as f32 / segments as f32) * std::f32::consts::FRAC_PI_2;
            points.push(center + egui::vec2(t.cos(), t.sin()) * r);
        }
    }
    points
}

/// Membership test against the rounded rectangle outline.
pub(super) fn point_in_rounded_rect(rect: egui::Rect, radius: f32, p: egui::Pos2) -> bool {
    if !rect.contains(p) {
        return false;
    }
    let r = clamp_radius(rect, radius);
    let inner = rect.shrink(r);
    let nearest = egui::pos2(
        p.x.clamp(inner.min.x, inner.max.x),
        p.y.clamp(inner.min.y, inner.max.y),
    );
    (p - nearest).length_sq() <= r * r
}

/// Side midpoints pushed out by `clearance`: top, bottom, left, right.
pub(super) fn anchor_points(
    center: egui::Pos2,
    size: egui::Vec2,
    clearance: f32,
) -> [egui::Pos2; 4] {
    let hw = size.x * 0.5 + clearance;
    let hh = size.y * 0.5 + clearance;
    [
        egui::pos2(center.x, center.y - hh),
        egui::pos2(center.x, center.y + hh),
        egui::pos2(center.x - hw, center.y),
        egui::pos2(center.x + hw, center.y),
    ]
}

/// Closest pair of anchors between two boxes; the first minimum wins on ties.
pub(super) fn nearest_anchor_pair(
    a_center: egui::Pos2,
    a_size: egui::Vec2,
    b_center: egui::Pos2,
    b_size: egui::Vec2,
    clearance: f32,
) -> (egui::Pos2, egui::Pos2) {
    let from = anchor_points(a_center, a_size, clearance);
    let to = anchor_points(b_center, b_size, clearance);
    let mut best = (from[0], to[0]);
    let mut best_dist = f32::INFINITY;
    for p in from {
        for q in to {
            let d = p.distance(q);
            if d < best_dist {
                best_dist = d;
                best = (p, q);
            }
        }
    }
    best
}

/// Endpoints of a committed connector line between two items.
pub(super) fn connector_endpoints(
    routing: ConnectorRouting,
    a: &model::Item,
    b: &model::Item,
    clearance: f32,
) -> (egui::Pos2, egui::Pos2) {
    match routing {
        ConnectorRouting::NearestAnchor => {
            nearest_anchor_pair(a.pos, a.size, b.pos, b.size, clearance)
        }
        ConnectorRouting::CornerOffset => (a.pos + a.size * 0.5, b.pos + b.size * 0.5),
    }
}

/// Rectangle spanned by two drag corners, in either order.
pub(super) fn normalized_rect(a: egui::Pos2, b: egui::Pos2) -> egui::Rect {
    egui::Rect::from_two_pos(a, b)
}
