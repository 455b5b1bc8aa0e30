use eframe::egui;
use serde::Deserialize;
use std::collections::BTreeSet;

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

pub type ItemId = u64;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(try_from = "RgbaRepr")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Accepted spellings of a color in the settings file.
#[derive(Deserialize)]
#[serde(untagged)]
enum RgbaRepr {
    Hex(String),
    Table {
        r: u8,
        g: u8,
        b: u8,
        #[serde(default = "opaque")]
        a: u8,
    },
}

fn opaque() -> u8 {
    255
}

impl TryFrom<RgbaRepr> for Rgba {
    type Error = String;

    fn try_from(repr: RgbaRepr) -> Result<Self, Self::Error> {
        match repr {
            RgbaRepr::Hex(s) => Rgba::from_hex(&s).ok_or_else(|| format!("invalid hex color `{s}`")),
            RgbaRepr::Table { r, g, b, a } => Ok(Rgba { r, g, b, a }),
        }
    }
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parses `#rrggbb` or `#rrggbbaa`; the leading `#` is optional.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().trim_start_matches('#');
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a,
        })
    }

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }

    pub fn from_color32(c: egui::Color32) -> Self {
        let [r, g, b, a] = c.to_srgba_unmultiplied();
        Self { r, g, b, a }
    }
}

/// A labeled node on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub id: ItemId,
    /// Center of the item.
    pub pos: egui::Pos2,
    pub text: String,
    /// Measured text extents, refreshed by the layout pass.
    pub size: egui::Vec2,
    pub background: Rgba,
    pub selected: bool,
    pub connections: BTreeSet<ItemId>,
}

impl Item {
    fn new(id: ItemId, pos: egui::Pos2, background: Rgba) -> Self {
        Self {
            id,
            pos,
            text: String::new(),
            size: egui::Vec2::ZERO,
            background,
            selected: false,
            connections: BTreeSet::new(),
        }
    }
}

/// Ordered item list. Array order is both paint order and hit-test order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub items: Vec<Item>,
    next_id: ItemId,
}

impl Scene {
    pub fn add_item(&mut self, pos: egui::Pos2, background: Rgba) -> ItemId {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Item::new(id, pos, background));
        tracing::debug!(id, x = pos.x, y = pos.y, "item created");
        id
    }

    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Ids of the selected items, in array order.
    pub fn selected_ids(&self) -> Vec<ItemId> {
        self.items
            .iter()
            .filter(|item| item.selected)
            .map(|item| item.id)
            .collect()
    }

    pub fn has_selection(&self) -> bool {
        self.items.iter().any(|item| item.selected)
    }

    pub fn clear_selection(&mut self) {
        for item in &mut self.items {
            item.selected = false;
        }
    }

    /// Removes every selected item along with all connections that reference it.
    pub fn delete_selected(&mut self) -> usize {
        let doomed: BTreeSet<ItemId> = self.selected_ids().into_iter().collect();
        if doomed.is_empty() {
            return 0;
        }
        self.items.retain(|item| !doomed.contains(&item.id));
        for item in &mut self.items {
            item.connections.retain(|id| !doomed.contains(id));
        }
        tracing::debug!(count = doomed.len(), "items deleted");
        doomed.len()
    }

    /// Connects `a` and `b` if they are not connected, disconnects them otherwise.
    ///
    /// Returns whether the pair is connected afterwards. Self pairs and unknown
    /// ids leave the scene untouched.
    pub fn toggle_connection(&mut self, a: ItemId, b: ItemId) -> bool {
        if a == b || self.get(a).is_none() || self.get(b).is_none() {
            return false;
        }
        let connected = !self.is_connected(a, b);
        for (this, other) in [(a, b), (b, a)] {
            if let Some(item) = self.get_mut(this) {
                if connected {
                    item.connections.insert(other);
                } else {
                    item.connections.remove(&other);
                }
            }
        }
        tracing::debug!(a, b, connected, "connection toggled");
        connected
    }

    pub fn is_connected(&self, a: ItemId, b: ItemId) -> bool {
        self.get(a).is_some_and(|item| item.connections.contains(&b))
    }

    /// Every connected pair exactly once, ordered by the first endpoint's array position.
    pub fn connected_pairs(&self) -> Vec<(ItemId, ItemId)> {
        let mut seen = BTreeSet::new();
        let mut pairs = Vec::new();
        for item in &self.items {
            for &other in &item.connections {
                let key = (item.id.min(other), item.id.max(other));
                if seen.insert(key) {
                    pairs.push((item.id, other));
                }
            }
        }
        pairs
    }

    pub fn move_to_front(&mut self, id: ItemId) {
        if let Some(idx) = self.index_of(id) {
            let item = self.items.remove(idx);
            self.items.push(item);
        }
    }

    pub fn set_background_selected(&mut self, color: Rgba) -> usize {
        let mut count = 0;
        for item in self.items.iter_mut().filter(|item| item.selected) {
            item.background = color;
            count += 1;
        }
        if count > 0 {
            tracing::debug!(count, ?color, "items recolored");
        }
        count
    }

    pub fn translate_selected(&mut self, delta: egui::Vec2) {
        for item in self.items.iter_mut().filter(|item| item.selected) {
            item.pos += delta;
        }
    }
}
