use eframe::egui;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Element {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub selected: bool,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub locked: bool,
    pub kind: ElementKind,
}

fn default_visible() -> bool {
    true
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum ElementKind {
    Frame {
        device: String,
        corner_radius: f32,
    },
    Rectangle,
    Circle,
    Line,
    Polygon,
    Text {
        content: String,
        font_size: f32,
        font_family: String,
    },
    Component {
        component: String,
    },
    Comment {
        content: String,
        author: String,
        created_at: String,
    },
}

impl ElementKind {
    pub fn slug(&self) -> &'static str {
        match self {
            ElementKind::Frame { .. } => "frame",
            ElementKind::Rectangle => "rectangle",
            ElementKind::Circle => "circle",
            ElementKind::Line => "line",
            ElementKind::Polygon => "polygon",
            ElementKind::Text { .. } => "text",
            ElementKind::Component { .. } => "component",
            ElementKind::Comment { .. } => "comment",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ElementKind::Frame { .. } => "Frame",
            ElementKind::Rectangle => "Rectangle",
            ElementKind::Circle => "Circle",
            ElementKind::Line => "Line",
            ElementKind::Polygon => "Polygon",
            ElementKind::Text { .. } => "Text",
            ElementKind::Component { .. } => "Component",
            ElementKind::Comment { .. } => "Comment",
        }
    }
}

impl Element {
    pub fn rect(&self) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(self.x, self.y),
            egui::vec2(self.width, self.height),
        )
    }

    pub fn translate(&mut self, delta: egui::Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Document {
    pub elements: Vec<Element>,
}

impl Document {
    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Removes every element whose id is in `ids`. Unknown ids are ignored.
    pub fn remove<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        let ids: Vec<&str> = ids.into_iter().collect();
        if ids.is_empty() {
            return;
        }
        self.elements.retain(|e| !ids.contains(&e.id.as_str()));
    }
}

/// One row of the outline panel, derived 1:1 from the document.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerEntry {
    pub id: String,
    pub name: String,
    pub kind_label: &'static str,
    pub visible: bool,
    pub locked: bool,
}

pub fn layer_entries(doc: &Document) -> Vec<LayerEntry> {
    doc.elements
        .iter()
        .enumerate()
        .map(|(index, element)| LayerEntry {
            id: element.id.clone(),
            name: layer_name(element, index),
            kind_label: element.kind.label(),
            visible: element.visible,
            locked: element.locked,
        })
        .collect()
}

fn layer_name(element: &Element, index: usize) -> String {
    let given = match &element.kind {
        ElementKind::Frame { device, .. } => Some(device),
        ElementKind::Text { content, .. } => Some(content),
        ElementKind::Comment { content, .. } => Some(content),
        _ => None,
    };
    match given.filter(|name| !name.is_empty()) {
        Some(name) => name.clone(),
        None => format!("{} {}", element.kind.label(), index + 1),
    }
}

/// Builds an element id from the creation time plus a per-session suffix,
/// e.g. `rectangle-1722950000000-3a1f`.
pub fn allocate_element_id(slug: &str, seq: u32) -> String {
    let since_epoch = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    format!(
        "{}-{}-{:x}{:03x}",
        slug,
        since_epoch.as_millis(),
        seq,
        (since_epoch.subsec_nanos() >> 8) & 0xfff
    )
}

pub fn session_timestamp() -> String {
    let since_epoch = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = since_epoch.as_secs();
    let days = secs / 86400;
    let years_since_1970 = days / 365;
    let year = 1970 + years_since_1970;
    let remaining_days = days % 365;
    let month = (remaining_days / 30) + 1;
    let day = (remaining_days % 30) + 1;
    let day_secs = secs % 86400;
    let hour = day_secs / 3600;
    let minute = (day_secs % 3600) / 60;
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}",
        year, month, day, hour, minute
    )
}
