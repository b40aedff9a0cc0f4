use crate::model::{self, Element, ElementKind};
use eframe::egui;

use super::align::{self, AlignMode, DistributeMode};
use super::geometry;
use super::presets;
use super::{CanvasApp, DragGesture, Tool};

/// Offset applied to duplicated and pasted elements.
const DUPLICATE_NUDGE: egui::Vec2 = egui::Vec2 { x: 20.0, y: 20.0 };

impl CanvasApp {
    pub(super) fn allocate_id(&mut self, slug: &str) -> String {
        self.id_seq += 1;
        model::allocate_element_id(slug, self.id_seq)
    }

    /// Re-derives the denormalized `selected` flag from the authoritative
    /// selection. Every selection mutation below calls this before
    /// returning, so the flags can never drift.
    fn sync_selected_flags(&mut self) {
        for element in &mut self.doc.elements {
            element.selected = self.selection.contains(&element.id);
        }
    }

    fn reveal_properties(&mut self) {
        if !self.right_panel_open {
            self.right_panel_open = true;
        }
    }

    pub(super) fn select_only(&mut self, id: &str) {
        self.selection.select_only(id);
        self.sync_selected_flags();
        self.reveal_properties();
    }

    pub(super) fn toggle_selection(&mut self, id: &str) {
        self.selection.toggle(id);
        self.sync_selected_flags();
        self.reveal_properties();
    }

    pub(super) fn select_all(&mut self) {
        let ids: Vec<String> = self.doc.elements.iter().map(|e| e.id.clone()).collect();
        self.selection.select_all(ids);
        self.sync_selected_flags();
    }

    pub(super) fn clear_selection(&mut self) {
        self.selection.clear();
        self.sync_selected_flags();
    }

    fn push_element(&mut self, element: Element) {
        let id = element.id.clone();
        self.doc.elements.push(element);
        self.select_only(&id);
    }

    /// Ids of the selected elements in document order, with their boxes.
    fn selected_rects(&self) -> Vec<(String, egui::Rect)> {
        self.doc
            .elements
            .iter()
            .filter(|e| self.selection.contains(&e.id))
            .map(|e| (e.id.clone(), e.rect()))
            .collect()
    }

    pub(super) fn apply_alignment(&mut self, mode: AlignMode) {
        if self.selection.len() < 2 {
            return;
        }
        let moves = align::align_positions(&self.selected_rects(), mode);
        self.apply_moves(moves);
    }

    pub(super) fn apply_distribution(&mut self, mode: DistributeMode) {
        if self.selection.len() < 3 {
            return;
        }
        let moves = align::distribute_positions(&self.selected_rects(), mode);
        self.apply_moves(moves);
    }

    fn apply_moves(&mut self, moves: Vec<(String, egui::Pos2)>) {
        for (id, pos) in moves {
            if let Some(element) = self.doc.element_by_id_mut(&id) {
                element.x = pos.x;
                element.y = pos.y;
            }
        }
    }

    pub(super) fn delete_selected(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        let ids: Vec<String> = self
            .doc
            .elements
            .iter()
            .filter(|e| self.selection.contains(&e.id))
            .map(|e| e.id.clone())
            .collect();
        self.doc.remove(ids.iter().map(String::as_str));
        self.clear_selection();
    }

    pub(super) fn delete_element(&mut self, id: &str) {
        self.doc.remove([id]);
        self.selection.remove(id);
        self.sync_selected_flags();
    }

    fn clone_with_nudge(&mut self, element: &Element) -> Element {
        let mut cloned = element.clone();
        cloned.id = self.allocate_id(cloned.kind.slug());
        cloned.translate(DUPLICATE_NUDGE);
        cloned
    }

    pub(super) fn duplicate_selected(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        let sources: Vec<Element> = self
            .doc
            .elements
            .iter()
            .filter(|e| self.selection.contains(&e.id))
            .cloned()
            .collect();
        let clones: Vec<Element> = sources.iter().map(|e| self.clone_with_nudge(e)).collect();
        let new_ids: Vec<String> = clones.iter().map(|e| e.id.clone()).collect();
        self.doc.elements.extend(clones);
        if let [only] = new_ids.as_slice() {
            self.selection.select_only(only);
        } else {
            self.selection.select_all(new_ids);
        }
        self.sync_selected_flags();
    }

    pub(super) fn duplicate_element(&mut self, id: &str) {
        let Some(source) = self.doc.element_by_id(id).cloned() else {
            return;
        };
        let clone = self.clone_with_nudge(&source);
        self.push_element(clone);
    }

    pub(super) fn copy_element(&mut self, id: &str) {
        let sources: Vec<Element> = if self.selection.contains(id) {
            self.doc
                .elements
                .iter()
                .filter(|e| self.selection.contains(&e.id))
                .cloned()
                .collect()
        } else {
            self.doc.element_by_id(id).cloned().into_iter().collect()
        };
        if sources.is_empty() {
            return;
        }
        self.status = Some(format!("Copied {} element(s)", sources.len()));
        self.clipboard = sources;
    }

    pub(super) fn paste_clipboard(&mut self) {
        if self.clipboard.is_empty() {
            return;
        }
        let sources = self.clipboard.clone();
        let clones: Vec<Element> = sources.iter().map(|e| self.clone_with_nudge(e)).collect();
        let new_ids: Vec<String> = clones.iter().map(|e| e.id.clone()).collect();
        self.status = Some(format!("Pasted {} element(s)", clones.len()));
        self.doc.elements.extend(clones);
        if let [only] = new_ids.as_slice() {
            self.selection.select_only(only);
        } else {
            self.selection.select_all(new_ids);
        }
        self.sync_selected_flags();
    }

    pub(super) fn toggle_layer_visibility(&mut self, id: &str) {
        if let Some(element) = self.doc.element_by_id_mut(id) {
            element.visible = !element.visible;
        }
    }

    pub(super) fn toggle_layer_lock(&mut self, id: &str) {
        if let Some(element) = self.doc.element_by_id_mut(id) {
            element.locked = !element.locked;
        }
    }

    pub(super) fn pan_by(&mut self, delta: egui::Vec2) {
        self.view.pan += delta;
    }

    pub(super) fn toggle_grid(&mut self) {
        self.show_grid = !self.show_grid;
        self.persist_settings();
    }

    /// Switches the active tool. Single-shot tools commit their element
    /// right here; the caller is responsible for invoking this once per
    /// discrete key press or toolbar click.
    pub(super) fn activate_tool(&mut self, tool: Tool) {
        self.tool = tool;
        match tool {
            Tool::Text => {
                let id = self.allocate_id("text");
                self.push_element(Element {
                    id,
                    x: 100.0,
                    y: 100.0,
                    width: 200.0,
                    height: 40.0,
                    selected: true,
                    visible: true,
                    locked: false,
                    kind: ElementKind::Text {
                        content: "Edit this text".to_string(),
                        font_size: 16.0,
                        font_family: "Inter".to_string(),
                    },
                });
            }
            Tool::Frame => {
                let device = self.default_frame_device.clone();
                self.create_frame(&device);
            }
            Tool::Component => {
                let id = self.allocate_id("component");
                self.push_element(Element {
                    id,
                    x: 100.0,
                    y: 100.0,
                    width: 120.0,
                    height: 40.0,
                    selected: true,
                    visible: true,
                    locked: false,
                    kind: ElementKind::Component {
                        component: "Button".to_string(),
                    },
                });
            }
            Tool::Comment => {
                let id = self.allocate_id("comment");
                self.push_element(Element {
                    id,
                    x: 150.0,
                    y: 150.0,
                    width: 24.0,
                    height: 24.0,
                    selected: true,
                    visible: true,
                    locked: false,
                    kind: ElementKind::Comment {
                        content: "Add your comment here...".to_string(),
                        author: "Current User".to_string(),
                        created_at: model::session_timestamp(),
                    },
                });
            }
            _ => {}
        }
    }

    /// Creates a device frame from the preset table. An unknown device id
    /// creates nothing.
    pub(super) fn create_frame_preset(&mut self, device_id: &str) {
        let Some(preset) = presets::find_preset(device_id) else {
            return;
        };
        self.push_frame(preset);
    }

    /// The frame tool itself always creates something: an unrecognized
    /// configured default falls back to the built-in frame.
    fn create_frame(&mut self, device_id: &str) {
        match presets::find_preset(device_id) {
            Some(preset) => self.push_frame(preset),
            None => self.push_frame(&presets::DEFAULT_FRAME),
        }
    }

    fn push_frame(&mut self, preset: &presets::DevicePreset) {
        let id = self.allocate_id("frame");
        self.push_element(Element {
            id,
            x: 50.0,
            y: 50.0,
            width: preset.width,
            height: preset.height,
            selected: true,
            visible: true,
            locked: false,
            kind: ElementKind::Frame {
                device: preset.label.to_string(),
                corner_radius: presets::corner_radius_for(preset.id),
            },
        });
    }

    pub(super) fn begin_gesture(&mut self, canvas_pos: egui::Pos2) {
        self.in_progress = Some(DragGesture {
            start: canvas_pos,
            current: canvas_pos,
        });
    }

    pub(super) fn update_gesture(&mut self, canvas_pos: egui::Pos2) {
        if let Some(gesture) = &mut self.in_progress {
            gesture.current = canvas_pos;
        }
    }

    pub(super) fn cancel_gesture(&mut self) {
        self.in_progress = None;
    }

    /// Commits the pending creation drag: the new element's box is the
    /// axis-aligned bounds of the drag vector, and it becomes the sole
    /// selection.
    pub(super) fn commit_gesture(&mut self, canvas_pos: egui::Pos2) {
        let Some(gesture) = self.in_progress.take() else {
            return;
        };
        if !self.tool.creates_on_drag() {
            return;
        }
        let bounds = geometry::drag_bounds(gesture.start, canvas_pos);
        let kind = match self.tool {
            Tool::Rectangle => ElementKind::Rectangle,
            Tool::Circle => ElementKind::Circle,
            Tool::Line => ElementKind::Line,
            _ => return,
        };
        let id = self.allocate_id(kind.slug());
        self.push_element(Element {
            id,
            x: bounds.min.x,
            y: bounds.min.y,
            width: bounds.width(),
            height: bounds.height(),
            selected: true,
            visible: true,
            locked: false,
            kind,
        });
    }
}
