#![allow(clippy::float_cmp)]

use super::*;
use crate::model::{ItemId, Rgba, Scene};
use eframe::egui;

// =============================================================
// Helpers
// =============================================================

/// Builds selected items from `(x, y, w, h)` tuples.
fn selected_scene(specs: &[(f32, f32, f32, f32)]) -> (Scene, Vec<ItemId>) {
    let mut scene = Scene::default();
    let mut ids = Vec::new();
    for &(x, y, w, h) in specs {
        let id = scene.add_item(egui::pos2(x, y), Rgba::rgb(0, 0, 0));
        let item = scene.get_mut(id).unwrap();
        item.size = egui::vec2(w, h);
        item.selected = true;
        ids.push(id);
    }
    (scene, ids)
}

fn item(scene: &Scene, id: ItemId) -> &model::Item {
    scene.get(id).unwrap()
}

const SPECS: [(f32, f32, f32, f32); 3] = [
    (100.0, 100.0, 40.0, 16.0),
    (250.0, 40.0, 80.0, 16.0),
    (180.0, 300.0, 10.0, 30.0),
];

// =============================================================
// Align
// =============================================================

#[test]
fn align_left_matches_anchor_left_edge() {
    let (mut scene, ids) = selected_scene(&SPECS);
    align_selected(&mut scene, AlignMode::Left);
    for &id in &ids {
        let it = item(&scene, id);
        assert_eq!(it.pos.x - it.size.x / 2.0, 80.0);
    }
}

#[test]
fn align_right_matches_anchor_right_edge() {
    let (mut scene, ids) = selected_scene(&SPECS);
    align_selected(&mut scene, AlignMode::Right);
    for &id in &ids {
        let it = item(&scene, id);
        assert_eq!(it.pos.x + it.size.x / 2.0, 120.0);
    }
}

#[test]
fn align_top_matches_anchor_top_edge() {
    let (mut scene, ids) = selected_scene(&SPECS);
    align_selected(&mut scene, AlignMode::Top);
    for &id in &ids {
        let it = item(&scene, id);
        assert_eq!(it.pos.y - it.size.y / 2.0, 92.0);
    }
}

#[test]
fn align_bottom_matches_anchor_bottom_edge() {
    let (mut scene, ids) = selected_scene(&SPECS);
    align_selected(&mut scene, AlignMode::Bottom);
    for &id in &ids {
        let it = item(&scene, id);
        assert_eq!(it.pos.y + it.size.y / 2.0, 108.0);
    }
}

#[test]
fn align_centers_copy_anchor_coordinate() {
    let (mut scene, ids) = selected_scene(&SPECS);
    align_selected(&mut scene, AlignMode::HCenter);
    align_selected(&mut scene, AlignMode::VCenter);
    for &id in &ids {
        assert_eq!(item(&scene, id).pos, egui::pos2(100.0, 100.0));
    }
}

#[test]
fn align_never_moves_anchor_or_other_axis() {
    for mode in AlignMode::ALL {
        let (mut scene, ids) = selected_scene(&SPECS);
        let before = scene.clone();
        align_selected(&mut scene, mode);
        assert_eq!(item(&scene, ids[0]).pos, item(&before, ids[0]).pos, "{mode:?}");
        let horizontal = matches!(mode, AlignMode::Left | AlignMode::HCenter | AlignMode::Right);
        for &id in &ids[1..] {
            if horizontal {
                assert_eq!(item(&scene, id).pos.y, item(&before, id).pos.y, "{mode:?}");
            } else {
                assert_eq!(item(&scene, id).pos.x, item(&before, id).pos.x, "{mode:?}");
            }
        }
    }
}

#[test]
fn align_anchor_follows_array_order() {
    let (mut scene, ids) = selected_scene(&SPECS);
    scene.move_to_front(ids[0]);
    align_selected(&mut scene, AlignMode::HCenter);
    // ids[1] is now first in the array.
    assert_eq!(item(&scene, ids[0]).pos.x, 250.0);
    assert_eq!(item(&scene, ids[2]).pos.x, 250.0);
}

#[test]
fn align_ignores_unselected_items() {
    let (mut scene, ids) = selected_scene(&SPECS);
    scene.get_mut(ids[2]).unwrap().selected = false;
    align_selected(&mut scene, AlignMode::Left);
    assert_eq!(item(&scene, ids[2]).pos, egui::pos2(180.0, 300.0));
}

#[test]
fn align_empty_selection_is_noop() {
    let (mut scene, _) = selected_scene(&SPECS);
    scene.clear_selection();
    let before = scene.clone();
    align_selected(&mut scene, AlignMode::Right);
    assert_eq!(scene, before);
}

// =============================================================
// Stack
// =============================================================

#[test]
fn stack_orders_by_y_with_shared_left_edge() {
    let (mut scene, ids) = selected_scene(&SPECS);
    stack_selected(&mut scene, 8.0, 2.0);

    // Sorted by starting y: ids[1] (40), ids[0] (100), ids[2] (300).
    let order = [ids[1], ids[0], ids[2]];
    let lefts: Vec<f32> = order
        .iter()
        .map(|&id| item(&scene, id).pos.x - item(&scene, id).size.x / 2.0)
        .collect();
    // Leftmost padded edge is ids[0]: 100 - 20 - 8 = 72, so text starts at 80.
    assert!(lefts.iter().all(|&l| l == 80.0), "{lefts:?}");

    let ys: Vec<f32> = order.iter().map(|&id| item(&scene, id).pos.y).collect();
    assert!(ys.windows(2).all(|w| w[0] < w[1]), "{ys:?}");
}

#[test]
fn stack_separates_padded_boxes_by_padding_between() {
    let (mut scene, ids) = selected_scene(&SPECS);
    stack_selected(&mut scene, 8.0, 2.0);
    let order = [ids[1], ids[0], ids[2]];
    for pair in order.windows(2) {
        let upper = item(&scene, pair[0]);
        let lower = item(&scene, pair[1]);
        let upper_bottom = upper.pos.y + upper.size.y / 2.0 + 8.0;
        let lower_top = lower.pos.y - lower.size.y / 2.0 - 8.0;
        assert_eq!(lower_top - upper_bottom, 2.0);
    }
}

#[test]
fn stack_keeps_topmost_box_in_place_vertically() {
    let (mut scene, ids) = selected_scene(&SPECS);
    stack_selected(&mut scene, 8.0, 2.0);
    assert_eq!(item(&scene, ids[1]).pos.y, 40.0);
}

#[test]
fn stack_single_item_only_keeps_it_put() {
    let (mut scene, ids) = selected_scene(&SPECS[..1]);
    stack_selected(&mut scene, 8.0, 2.0);
    assert_eq!(item(&scene, ids[0]).pos, egui::pos2(100.0, 100.0));
}

#[test]
fn stack_empty_selection_is_noop() {
    let (mut scene, _) = selected_scene(&SPECS);
    scene.clear_selection();
    let before = scene.clone();
    stack_selected(&mut scene, 8.0, 2.0);
    assert_eq!(scene, before);
}
