use crate::model;
use eframe::egui;

use super::View;

/// Maps a screen pointer position to canvas space by subtracting the
/// canvas origin and the pan offset. Zoom is not part of the mapping.
pub(super) fn to_canvas_point(screen: egui::Pos2, origin: egui::Pos2, view: &View) -> egui::Pos2 {
    egui::pos2(
        screen.x - origin.x - view.pan.x,
        screen.y - origin.y - view.pan.y,
    )
}

pub(super) fn to_screen_point(canvas: egui::Pos2, origin: egui::Pos2, view: &View) -> egui::Pos2 {
    egui::pos2(
        canvas.x + origin.x + view.pan.x,
        canvas.y + origin.y + view.pan.y,
    )
}

pub(super) fn hit_test_element(element: &model::Element, canvas_pos: egui::Pos2) -> bool {
    element.visible && element.rect().contains(canvas_pos)
}

/// Topmost element under the pointer; later elements render on top.
pub(super) fn topmost_hit(doc: &model::Document, canvas_pos: egui::Pos2) -> Option<String> {
    doc.elements
        .iter()
        .rev()
        .find(|e| hit_test_element(e, canvas_pos))
        .map(|e| e.id.clone())
}

/// Axis-aligned bounding box of a drag vector, valid for reversed drags.
pub(super) fn drag_bounds(start: egui::Pos2, end: egui::Pos2) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(start.x.min(end.x), start.y.min(end.y)),
        egui::vec2((end.x - start.x).abs(), (end.y - start.y).abs()),
    )
}
