use crate::model;
use eframe::egui;
use std::collections::HashSet;

mod actions;
mod align;
mod geometry;
mod help;
mod presets;
mod render;
mod settings;
mod update;

#[cfg(test)]
mod tests;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Tool {
    Select,
    Hand,
    Frame,
    Rectangle,
    Circle,
    Line,
    Polygon,
    Text,
    Image,
    Component,
    Eyedropper,
    Comment,
}

impl Tool {
    /// Tools that create an element from a pointer drag.
    fn creates_on_drag(self) -> bool {
        matches!(self, Tool::Rectangle | Tool::Circle | Tool::Line)
    }

    fn label(self) -> &'static str {
        match self {
            Tool::Select => "Select",
            Tool::Hand => "Hand",
            Tool::Frame => "Frame",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Ellipse",
            Tool::Line => "Line",
            Tool::Polygon => "Polygon",
            Tool::Text => "Text",
            Tool::Image => "Image",
            Tool::Component => "Component",
            Tool::Eyedropper => "Eyedropper",
            Tool::Comment => "Comment",
        }
    }
}

/// A shape-creation drag between pointer press and release. Nothing is
/// written to the document until the gesture commits, so an aborted drag
/// leaves no element behind.
#[derive(Clone, Copy, Debug)]
struct DragGesture {
    start: egui::Pos2,
    current: egui::Pos2,
}

/// Pan offset and zoom. Zoom scales the artboard rendering only; pointer
/// mapping stays 1:1 so drag math is independent of the zoom level.
#[derive(Clone, Copy, Debug)]
pub(super) struct View {
    pub pan: egui::Vec2,
    pub zoom_percent: f32,
}

impl Default for View {
    fn default() -> Self {
        Self {
            pan: egui::Vec2::ZERO,
            zoom_percent: 100.0,
        }
    }
}

impl View {
    fn zoom_in(&mut self) {
        self.zoom_percent = (self.zoom_percent + 25.0).min(400.0);
    }

    fn zoom_out(&mut self) {
        self.zoom_percent = (self.zoom_percent - 25.0).max(25.0);
    }

    fn scale(&self) -> f32 {
        self.zoom_percent / 100.0
    }
}

/// The authoritative selection. A primary selection and a multi-selection
/// never coexist; the `selected` flag on elements is a projection of this
/// set, re-derived by the app after every mutation.
#[derive(Clone, Debug, Default, PartialEq)]
pub(super) struct Selection {
    primary: Option<String>,
    multi: HashSet<String>,
}

impl Selection {
    fn select_only(&mut self, id: &str) {
        self.primary = Some(id.to_string());
        self.multi.clear();
    }

    fn toggle(&mut self, id: &str) {
        self.primary = None;
        if !self.multi.remove(id) {
            self.multi.insert(id.to_string());
        }
    }

    fn select_all(&mut self, ids: impl IntoIterator<Item = String>) {
        self.primary = None;
        self.multi = ids.into_iter().collect();
    }

    fn clear(&mut self) {
        self.primary = None;
        self.multi.clear();
    }

    fn remove(&mut self, id: &str) {
        if self.primary.as_deref() == Some(id) {
            self.primary = None;
        }
        self.multi.remove(id);
    }

    pub(super) fn contains(&self, id: &str) -> bool {
        self.primary.as_deref() == Some(id) || self.multi.contains(id)
    }

    pub(super) fn len(&self) -> usize {
        if self.primary.is_some() {
            1
        } else {
            self.multi.len()
        }
    }

    pub(super) fn is_empty(&self) -> bool {
        self.primary.is_none() && self.multi.is_empty()
    }

    pub(super) fn primary(&self) -> Option<&str> {
        self.primary.as_deref()
    }

    /// The id to show in the properties panel: the primary selection, or
    /// the sole member of a one-element multi-selection.
    pub(super) fn single_selected_id(&self) -> Option<String> {
        if let Some(primary) = self.primary() {
            return Some(primary.to_string());
        }
        if self.multi.len() == 1 {
            return self.multi.iter().next().cloned();
        }
        None
    }
}

pub struct CanvasApp {
    doc: model::Document,
    selection: Selection,
    tool: Tool,
    view: View,
    in_progress: Option<DragGesture>,
    pan_active: bool,
    space_pressed: bool,
    show_grid: bool,
    grid_size: f32,
    id_seq: u32,
    project_id: String,
    context_hit: Option<String>,
    clipboard: Vec<model::Element>,
    left_panel_open: bool,
    right_panel_open: bool,
    show_help: bool,
    status: Option<String>,
    settings_path: String,
    default_frame_device: String,
}

impl CanvasApp {
    fn config_path() -> Option<String> {
        if let Some(home) = std::env::var_os("HOME") {
            let path = std::path::PathBuf::from(home)
                .join(".config")
                .join("uiforge.toml");
            if path.exists() {
                return Some(path.display().to_string());
            }
        }
        if std::path::Path::new("settings.toml").exists() {
            return Some("settings.toml".to_string());
        }
        None
    }

    pub fn new(_cc: &eframe::CreationContext<'_>, project_id: String) -> Self {
        let settings_path = Self::config_path().unwrap_or_else(|| "settings.toml".to_string());
        let settings = settings::load_settings(&settings_path)
            .or_else(|| settings::load_settings("settings.json"))
            .unwrap_or_default();
        log::info!("opening design project {project_id}");
        let mut app = Self::with_project(project_id, settings);
        app.settings_path = settings_path;
        app
    }

    /// Context-free constructor, shared by `new` and the tests.
    fn with_project(project_id: String, settings: settings::AppSettings) -> Self {
        Self {
            doc: model::Document::default(),
            selection: Selection::default(),
            tool: Tool::Select,
            view: View::default(),
            in_progress: None,
            pan_active: false,
            space_pressed: false,
            show_grid: settings.show_grid,
            grid_size: settings.grid_size,
            id_seq: 0,
            project_id,
            context_hit: None,
            clipboard: Vec::new(),
            left_panel_open: settings.left_panel_open,
            right_panel_open: settings.right_panel_open,
            show_help: false,
            status: None,
            settings_path: "settings.toml".to_string(),
            default_frame_device: settings.default_frame_device,
        }
    }

    pub(super) fn project_title(&self) -> String {
        format!("Design Project {}", self.project_id)
    }
}
