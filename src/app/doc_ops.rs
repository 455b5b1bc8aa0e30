use crate::model;

#[cfg(test)]
#[path = "doc_ops_test.rs"]
mod doc_ops_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum AlignMode {
    Left,
    HCenter,
    Right,
    Top,
    VCenter,
    Bottom,
}

impl AlignMode {
    pub(super) const ALL: [AlignMode; 6] = [
        AlignMode::Left,
        AlignMode::HCenter,
        AlignMode::Right,
        AlignMode::Top,
        AlignMode::VCenter,
        AlignMode::Bottom,
    ];

    pub(super) fn label(self) -> &'static str {
        match self {
            AlignMode::Left => "Align left",
            AlignMode::HCenter => "Align center",
            AlignMode::Right => "Align right",
            AlignMode::Top => "Align top",
            AlignMode::VCenter => "Align middle",
            AlignMode::Bottom => "Align bottom",
        }
    }

    /// The edge or center coordinate this mode lines up.
    fn reference(self, item: &model::Item) -> f32 {
        let hw = item.size.x * 0.5;
        let hh = item.size.y * 0.5;
        match self {
            AlignMode::Left => item.pos.x - hw,
            AlignMode::HCenter => item.pos.x,
            AlignMode::Right => item.pos.x + hw,
            AlignMode::Top => item.pos.y - hh,
            AlignMode::VCenter => item.pos.y,
            AlignMode::Bottom => item.pos.y + hh,
        }
    }

    fn apply(self, item: &mut model::Item, reference: f32) {
        let hw = item.size.x * 0.5;
        let hh = item.size.y * 0.5;
        match self {
            AlignMode::Left => item.pos.x = reference + hw,
            AlignMode::HCenter => item.pos.x = reference,
            AlignMode::Right => item.pos.x = reference - hw,
            AlignMode::Top => item.pos.y = reference + hh,
            AlignMode::VCenter => item.pos.y = reference,
            AlignMode::Bottom => item.pos.y = reference - hh,
        }
    }
}

/// Lines up the selection against its first item in array order. That item stays put.
pub(super) fn align_selected(scene: &mut model::Scene, mode: AlignMode) {
    let mut selected = scene.items.iter_mut().filter(|item| item.selected);
    let Some(anchor) = selected.next() else {
        return;
    };
    let reference = mode.reference(anchor);
    let mut moved = 0;
    for item in selected {
        mode.apply(item, reference);
        moved += 1;
    }
    tracing::debug!(?mode, reference, moved, "selection aligned");
}

/// Stacks the selection top to bottom in y order, left-aligned to the leftmost padded edge.
pub(super) fn stack_selected(scene: &mut model::Scene, padding: f32, padding_between: f32) {
    let mut items: Vec<&mut model::Item> =
        scene.items.iter_mut().filter(|item| item.selected).collect();
    if items.is_empty() {
        return;
    }
    items.sort_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

    let left = items
        .iter()
        .map(|item| item.pos.x - item.size.x * 0.5 - padding)
        .fold(f32::INFINITY, f32::min);
    let mut cursor = items[0].pos.y - items[0].size.y * 0.5 - padding;
    for item in &mut items {
        let hw = item.size.x * 0.5;
        let hh = item.size.y * 0.5;
        cursor += hh + padding;
        item.pos.y = cursor;
        item.pos.x = left + hw + padding;
        cursor += hh + padding + padding_between;
    }
    tracing::debug!(count = items.len(), left, "selection stacked");
}
