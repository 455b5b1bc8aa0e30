use crate::model;
use eframe::egui;

mod actions;
mod doc_ops;
mod geometry;
mod interaction;
mod layout;
mod render;
pub mod settings;
mod update;

use layout::{EguiMeasure, TextMeasure};
use settings::AppSettings;

/// Pointer gesture in progress between a press and its release.
#[derive(Clone, Debug, Default, PartialEq)]
enum Gesture {
    #[default]
    Idle,
    Dragging {
        last: egui::Pos2,
    },
    BoxSelecting {
        start: egui::Pos2,
        current: egui::Pos2,
    },
    Connecting {
        from: model::ItemId,
        current: Option<egui::Pos2>,
    },
}

pub struct DiagramApp {
    scene: model::Scene,
    settings: AppSettings,
    measure: Box<dyn TextMeasure>,
    gesture: Gesture,
    /// Item whose text receives keystrokes. Independent of `gesture`.
    editing: Option<model::ItemId>,
    hovered: Option<model::ItemId>,
    /// Canvas-local anchor of the open context menu.
    context_menu: Option<egui::Pos2>,
    pick_color: model::Rgba,
}

impl DiagramApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Self {
        Self::with_measure(settings, Box::new(EguiMeasure::new(cc.egui_ctx.clone())))
    }

    fn with_measure(settings: AppSettings, measure: Box<dyn TextMeasure>) -> Self {
        let pick_color = settings.default_background;
        Self {
            scene: model::Scene::default(),
            settings,
            measure,
            gesture: Gesture::Idle,
            editing: None,
            hovered: None,
            context_menu: None,
            pick_color,
        }
    }

    /// Layout pass: refresh item extents before anything reads geometry.
    fn relayout(&mut self) {
        layout::layout_scene(&mut self.scene, self.measure.as_ref(), self.settings.font_size);
    }
}
