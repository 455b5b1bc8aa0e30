use crate::model;
use eframe::egui;

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

/// Source of text extents for the layout pass.
pub trait TextMeasure {
    fn text_width(&self, text: &str, font_size: f32) -> f32;
}

/// Measures with the egui font atlas of a live context.
pub struct EguiMeasure {
    painter: egui::Painter,
}

impl EguiMeasure {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            painter: egui::Painter::new(ctx, egui::LayerId::background(), egui::Rect::EVERYTHING),
        }
    }
}

impl TextMeasure for EguiMeasure {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        self.painter
            .layout_no_wrap(
                text.to_owned(),
                egui::FontId::proportional(font_size),
                egui::Color32::BLACK,
            )
            .size()
            .x
    }
}

/// Every char advances by the same amount, so widths are predictable.
#[cfg(test)]
pub(super) struct FixedAdvance(pub f32);

#[cfg(test)]
impl TextMeasure for FixedAdvance {
    fn text_width(&self, text: &str, _font_size: f32) -> f32 {
        text.chars().count() as f32 * self.0
    }
}

/// Refreshes every item's text extents. Height is the font size, width the measured run.
pub(super) fn layout_scene(scene: &mut model::Scene, measure: &dyn TextMeasure, font_size: f32) {
    for item in &mut scene.items {
        item.size = egui::vec2(measure.text_width(&item.text, font_size), font_size);
    }
}
