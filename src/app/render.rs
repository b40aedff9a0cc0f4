use crate::model::{Document, Element, ElementKind};
use eframe::egui;

use super::geometry::{drag_bounds, to_screen_point};
use super::{presets, DragGesture, Tool, View};

const CANVAS_BG: egui::Color32 = egui::Color32::from_rgb(249, 250, 251);
const GRID_DOT: egui::Color32 = egui::Color32::from_rgb(209, 213, 219);
const SELECTION_BLUE: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);
const RECT_FILL: egui::Color32 = egui::Color32::from_rgb(219, 234, 254);
const CIRCLE_FILL: egui::Color32 = egui::Color32::from_rgb(243, 232, 255);
const POLYGON_FILL: egui::Color32 = egui::Color32::from_rgb(243, 244, 246);
const POLYGON_STROKE: egui::Color32 = egui::Color32::from_rgb(156, 163, 175);
const LINE_STROKE: egui::Color32 = egui::Color32::from_rgb(55, 65, 81);
const FRAME_BORDER: egui::Color32 = egui::Color32::from_rgb(229, 231, 235);
const FRAME_LABEL: egui::Color32 = egui::Color32::from_rgb(107, 114, 128);
const TEXT_COLOR: egui::Color32 = egui::Color32::from_rgb(31, 41, 55);
const COMPONENT_FILL: egui::Color32 = egui::Color32::from_rgb(245, 243, 255);
const COMPONENT_BORDER: egui::Color32 = egui::Color32::from_rgb(216, 180, 254);
const COMPONENT_TEXT: egui::Color32 = egui::Color32::from_rgb(147, 51, 234);
const COMMENT_FILL: egui::Color32 = egui::Color32::from_rgb(254, 243, 199);
const COMMENT_BORDER: egui::Color32 = egui::Color32::from_rgb(253, 224, 71);

/// Canvas-space anchor of the demo artboard; the artboard is the only
/// thing the zoom level scales.
const ARTBOARD_CENTER: egui::Pos2 = egui::Pos2 { x: 800.0, y: 500.0 };

pub(super) fn tool_button(
    ui: &mut egui::Ui,
    label: &str,
    hover: &str,
    tool: Tool,
    active: Tool,
) -> bool {
    ui.selectable_label(active == tool, label)
        .on_hover_text(hover)
        .clicked()
}

pub(super) fn draw_background(
    painter: &egui::Painter,
    rect: egui::Rect,
    view: &View,
    show_grid: bool,
    grid_size: f32,
) {
    painter.rect_filled(rect, 0.0, CANVAS_BG);
    if !show_grid || grid_size < 4.0 {
        return;
    }
    let origin = rect.min;
    let canvas_min = egui::pos2(-view.pan.x, -view.pan.y);
    let canvas_max = canvas_min + rect.size();
    let mut x = (canvas_min.x / grid_size).floor() * grid_size;
    while x <= canvas_max.x {
        let mut y = (canvas_min.y / grid_size).floor() * grid_size;
        while y <= canvas_max.y {
            let screen = to_screen_point(egui::pos2(x, y), origin, view);
            painter.circle_filled(screen, 1.0, GRID_DOT);
            y += grid_size;
        }
        x += grid_size;
    }
}

pub(super) fn draw_artboard(painter: &egui::Painter, origin: egui::Pos2, view: &View) {
    let frame = presets::DEFAULT_FRAME;
    let size = egui::vec2(frame.width, frame.height) * view.scale();
    let center = to_screen_point(ARTBOARD_CENTER, origin, view);
    let rect = egui::Rect::from_center_size(center, size);
    painter.rect_filled(rect, 8.0, egui::Color32::WHITE);
    painter.rect_stroke(
        rect,
        8.0,
        egui::Stroke::new(1.0, FRAME_BORDER),
        egui::StrokeKind::Middle,
    );
    painter.text(
        rect.center_top() + egui::vec2(0.0, 16.0),
        egui::Align2::CENTER_CENTER,
        frame.label,
        egui::FontId::proportional(12.0),
        FRAME_LABEL,
    );
}

pub(super) fn draw_elements(
    painter: &egui::Painter,
    origin: egui::Pos2,
    view: &View,
    doc: &Document,
) {
    for element in &doc.elements {
        if !element.visible {
            continue;
        }
        let rect = egui::Rect::from_min_size(
            to_screen_point(element.rect().min, origin, view),
            element.rect().size(),
        );
        draw_element(painter, rect, element);
        if element.selected {
            draw_selection(painter, rect, element);
        }
    }
}

fn draw_element(painter: &egui::Painter, rect: egui::Rect, element: &Element) {
    match &element.kind {
        ElementKind::Rectangle => {
            painter.rect_filled(rect, 4.0, RECT_FILL);
        }
        ElementKind::Circle => {
            let points = ellipse_points(rect);
            painter.add(egui::Shape::convex_polygon(
                points,
                CIRCLE_FILL,
                egui::Stroke::NONE,
            ));
        }
        ElementKind::Line => {
            let y = rect.center().y;
            painter.line_segment(
                [egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)],
                egui::Stroke::new(2.0, LINE_STROKE),
            );
        }
        ElementKind::Polygon => {
            let points = vec![
                egui::pos2(rect.min.x + rect.width() * 0.5, rect.min.y + rect.height() * 0.1),
                egui::pos2(rect.min.x + rect.width() * 0.9, rect.min.y + rect.height() * 0.9),
                egui::pos2(rect.min.x + rect.width() * 0.1, rect.min.y + rect.height() * 0.9),
            ];
            painter.add(egui::Shape::convex_polygon(
                points,
                POLYGON_FILL,
                egui::Stroke::new(2.0, POLYGON_STROKE),
            ));
        }
        ElementKind::Frame { device, corner_radius } => {
            painter.rect_filled(rect, *corner_radius, egui::Color32::WHITE);
            painter.rect_stroke(
                rect,
                *corner_radius,
                egui::Stroke::new(1.0, FRAME_BORDER),
                egui::StrokeKind::Middle,
            );
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                device,
                egui::FontId::proportional(13.0),
                FRAME_LABEL,
            );
        }
        ElementKind::Text {
            content, font_size, ..
        } => {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                content,
                egui::FontId::proportional(*font_size),
                TEXT_COLOR,
            );
        }
        ElementKind::Component { component } => {
            painter.rect_filled(rect, 8.0, COMPONENT_FILL);
            painter.rect_stroke(
                rect,
                8.0,
                egui::Stroke::new(2.0, COMPONENT_BORDER),
                egui::StrokeKind::Middle,
            );
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                component,
                egui::FontId::proportional(13.0),
                COMPONENT_TEXT,
            );
        }
        ElementKind::Comment { .. } => {
            painter.rect_filled(rect, 8.0, COMMENT_FILL);
            painter.rect_stroke(
                rect,
                8.0,
                egui::Stroke::new(2.0, COMMENT_BORDER),
                egui::StrokeKind::Middle,
            );
        }
    }
}

fn draw_selection(painter: &egui::Painter, rect: egui::Rect, element: &Element) {
    painter.rect_stroke(
        rect,
        2.0,
        egui::Stroke::new(2.0, SELECTION_BLUE),
        egui::StrokeKind::Middle,
    );

    let handle_stroke = egui::Stroke::new(1.5, SELECTION_BLUE);
    let handles = [
        rect.left_top(),
        rect.center_top(),
        rect.right_top(),
        rect.left_center(),
        rect.right_center(),
        rect.left_bottom(),
        rect.center_bottom(),
        rect.right_bottom(),
    ];
    for handle in handles {
        let r = egui::Rect::from_center_size(handle, egui::vec2(7.0, 7.0));
        painter.rect_filled(r, 1.0, egui::Color32::WHITE);
        painter.rect_stroke(r, 1.0, handle_stroke, egui::StrokeKind::Middle);
    }

    let label = format!(
        "{} {} × {}",
        element.kind.label(),
        element.width.round(),
        element.height.round()
    );
    let galley = painter.layout_no_wrap(
        label,
        egui::FontId::proportional(11.0),
        egui::Color32::WHITE,
    );
    let bg = egui::Rect::from_min_size(
        egui::pos2(rect.min.x, rect.min.y - galley.size().y - 10.0),
        galley.size() + egui::vec2(8.0, 6.0),
    );
    painter.rect_filled(bg, 3.0, SELECTION_BLUE);
    painter.galley(bg.min + egui::vec2(4.0, 3.0), galley, egui::Color32::WHITE);
}

pub(super) fn draw_gesture_preview(
    painter: &egui::Painter,
    origin: egui::Pos2,
    view: &View,
    gesture: &DragGesture,
    tool: Tool,
) {
    let bounds = drag_bounds(gesture.start, gesture.current);
    let rect = egui::Rect::from_min_size(
        to_screen_point(bounds.min, origin, view),
        bounds.size(),
    );
    let stroke = egui::Stroke::new(1.5, SELECTION_BLUE);
    match tool {
        Tool::Rectangle => {
            painter.rect_filled(rect, 4.0, RECT_FILL.gamma_multiply(0.5));
            painter.rect_stroke(rect, 4.0, stroke, egui::StrokeKind::Middle);
        }
        Tool::Circle => {
            let points = ellipse_points(rect);
            painter.add(egui::Shape::convex_polygon(
                points,
                CIRCLE_FILL.gamma_multiply(0.5),
                stroke,
            ));
        }
        Tool::Line => {
            let y = rect.center().y;
            painter.line_segment(
                [egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)],
                stroke,
            );
        }
        _ => {}
    }
}

fn ellipse_points(rect: egui::Rect) -> Vec<egui::Pos2> {
    let center = rect.center();
    let rx = rect.width() * 0.5;
    let ry = rect.height() * 0.5;
    let steps = 48;
    (0..steps)
        .map(|i| {
            let t = (i as f32) / (steps as f32) * std::f32::consts::TAU;
            center + egui::vec2(t.cos() * rx, t.sin() * ry)
        })
        .collect()
}
