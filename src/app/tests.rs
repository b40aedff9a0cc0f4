use eframe::egui;

use super::align::{AlignMode, DistributeMode};
use super::settings::AppSettings;
use super::{CanvasApp, Tool};
use crate::model::{self, Element, ElementKind};

fn app() -> CanvasApp {
    CanvasApp::with_project("42".to_string(), AppSettings::default())
}

fn add_rect(app: &mut CanvasApp, x: f32, y: f32, w: f32, h: f32) -> String {
    let id = app.allocate_id("rectangle");
    app.doc.elements.push(Element {
        id: id.clone(),
        x,
        y,
        width: w,
        height: h,
        selected: false,
        visible: true,
        locked: false,
        kind: ElementKind::Rectangle,
    });
    id
}

fn assert_flags_consistent(app: &CanvasApp) {
    for element in &app.doc.elements {
        assert_eq!(
            element.selected,
            app.selection.contains(&element.id),
            "selected flag drifted for {}",
            element.id
        );
    }
}

fn positions(app: &CanvasApp) -> Vec<(f32, f32)> {
    app.doc.elements.iter().map(|e| (e.x, e.y)).collect()
}

#[test]
fn selected_flags_track_every_selection_operation() {
    let mut app = app();
    let a = add_rect(&mut app, 0.0, 0.0, 10.0, 10.0);
    let b = add_rect(&mut app, 20.0, 0.0, 10.0, 10.0);
    let c = add_rect(&mut app, 40.0, 0.0, 10.0, 10.0);

    app.select_only(&a);
    assert_flags_consistent(&app);
    assert_eq!(app.selection.primary(), Some(a.as_str()));

    app.toggle_selection(&b);
    assert_flags_consistent(&app);
    // Shift-click moves to multi-selection and drops the primary.
    assert_eq!(app.selection.primary(), None);
    assert!(app.selection.contains(&b));
    assert!(!app.selection.contains(&a));

    app.toggle_selection(&c);
    app.toggle_selection(&b);
    assert_flags_consistent(&app);
    assert!(app.selection.contains(&c));
    assert!(!app.selection.contains(&b));

    app.select_all();
    assert_flags_consistent(&app);
    assert_eq!(app.selection.len(), 3);

    app.clear_selection();
    assert_flags_consistent(&app);
    assert!(app.selection.is_empty());
    assert!(app.doc.elements.iter().all(|e| !e.selected));
}

#[test]
fn align_left_moves_everything_to_the_minimum_x() {
    let mut app = app();
    let a = add_rect(&mut app, 10.0, 5.0, 20.0, 10.0);
    let b = add_rect(&mut app, 50.0, 25.0, 30.0, 10.0);
    app.select_only(&a);
    app.toggle_selection(&a);
    app.toggle_selection(&b);

    app.apply_alignment(AlignMode::Left);
    assert_eq!(positions(&app), vec![(10.0, 5.0), (10.0, 25.0)]);

    // Idempotent: a second application changes nothing.
    app.apply_alignment(AlignMode::Left);
    assert_eq!(positions(&app), vec![(10.0, 5.0), (10.0, 25.0)]);
}

#[test]
fn alignment_needs_at_least_two_selected() {
    let mut app = app();
    let a = add_rect(&mut app, 10.0, 5.0, 20.0, 10.0);
    add_rect(&mut app, 50.0, 25.0, 30.0, 10.0);
    app.select_only(&a);
    app.apply_alignment(AlignMode::Right);
    assert_eq!(positions(&app), vec![(10.0, 5.0), (50.0, 25.0)]);

    app.clear_selection();
    app.apply_alignment(AlignMode::Left);
    assert_eq!(positions(&app), vec![(10.0, 5.0), (50.0, 25.0)]);
}

#[test]
fn align_center_preserves_the_mean_of_centers() {
    let mut app = app();
    let a = add_rect(&mut app, 0.0, 0.0, 10.0, 10.0);
    let b = add_rect(&mut app, 30.0, 0.0, 50.0, 10.0);
    app.toggle_selection(&a);
    app.toggle_selection(&b);

    let before: f32 = app
        .doc
        .elements
        .iter()
        .map(|e| e.x + e.width / 2.0)
        .sum::<f32>()
        / 2.0;
    app.apply_alignment(AlignMode::HCenter);
    let after: f32 = app
        .doc
        .elements
        .iter()
        .map(|e| e.x + e.width / 2.0)
        .sum::<f32>()
        / 2.0;
    assert!((before - after).abs() < 1e-3);
    // Both centers coincide now.
    let centers: Vec<f32> = app.doc.elements.iter().map(|e| e.x + e.width / 2.0).collect();
    assert!((centers[0] - centers[1]).abs() < 1e-3);
}

#[test]
fn distribute_keeps_an_evenly_spaced_triple_in_place() {
    let mut app = app();
    for x in [0.0, 50.0, 100.0] {
        let id = add_rect(&mut app, x, 0.0, 10.0, 10.0);
        app.toggle_selection(&id);
    }
    app.apply_distribution(DistributeMode::Horizontal);
    assert_eq!(
        positions(&app),
        vec![(0.0, 0.0), (50.0, 0.0), (100.0, 0.0)]
    );
}

#[test]
fn distribute_reassigns_edges_between_the_extremes() {
    let mut app = app();
    for x in [0.0, 10.0, 25.0, 90.0] {
        let id = add_rect(&mut app, x, 0.0, 10.0, 10.0);
        app.toggle_selection(&id);
    }
    app.apply_distribution(DistributeMode::Horizontal);
    let xs: Vec<f32> = app.doc.elements.iter().map(|e| e.x).collect();
    assert_eq!(xs, vec![0.0, 30.0, 60.0, 90.0]);
}

#[test]
fn distribute_needs_at_least_three_selected() {
    let mut app = app();
    for x in [0.0, 80.0] {
        let id = add_rect(&mut app, x, 0.0, 10.0, 10.0);
        app.toggle_selection(&id);
    }
    app.apply_distribution(DistributeMode::Horizontal);
    assert_eq!(positions(&app), vec![(0.0, 0.0), (80.0, 0.0)]);
}

#[test]
fn duplicate_offsets_by_twenty_and_selects_the_clone() {
    let mut app = app();
    let a = add_rect(&mut app, 10.0, 10.0, 40.0, 30.0);
    app.select_only(&a);

    app.duplicate_selected();
    assert_eq!(app.doc.elements.len(), 2);
    let clone = &app.doc.elements[1];
    assert_ne!(clone.id, a);
    assert_eq!((clone.x, clone.y), (30.0, 30.0));
    assert_eq!((clone.width, clone.height), (40.0, 30.0));
    assert_eq!(app.selection.primary(), Some(clone.id.as_str()));
    assert_eq!(app.selection.len(), 1);
    assert_flags_consistent(&app);
    assert!(!app.doc.elements[0].selected);
}

#[test]
fn duplicating_a_multi_selection_selects_only_the_clones() {
    let mut app = app();
    let a = add_rect(&mut app, 0.0, 0.0, 10.0, 10.0);
    let b = add_rect(&mut app, 50.0, 50.0, 10.0, 10.0);
    app.toggle_selection(&a);
    app.toggle_selection(&b);

    app.duplicate_selected();
    assert_eq!(app.doc.elements.len(), 4);
    assert_eq!(app.selection.len(), 2);
    assert!(!app.selection.contains(&a));
    assert!(!app.selection.contains(&b));
    assert_flags_consistent(&app);
    assert_eq!((app.doc.elements[2].x, app.doc.elements[2].y), (20.0, 20.0));
    assert_eq!((app.doc.elements[3].x, app.doc.elements[3].y), (70.0, 70.0));
}

#[test]
fn duplicate_with_empty_selection_is_a_no_op() {
    let mut app = app();
    add_rect(&mut app, 0.0, 0.0, 10.0, 10.0);
    app.duplicate_selected();
    assert_eq!(app.doc.elements.len(), 1);
}

#[test]
fn deleting_a_multi_selection_updates_layers_one_to_one() {
    let mut app = app();
    let a = add_rect(&mut app, 0.0, 0.0, 10.0, 10.0);
    let b = add_rect(&mut app, 20.0, 0.0, 10.0, 10.0);
    let c = add_rect(&mut app, 40.0, 0.0, 10.0, 10.0);
    app.toggle_selection(&a);
    app.toggle_selection(&c);

    app.delete_selected();
    assert_eq!(app.doc.elements.len(), 1);
    assert_eq!(app.doc.elements[0].id, b);
    assert!(app.selection.is_empty());
    assert_flags_consistent(&app);

    let layers = model::layer_entries(&app.doc);
    assert_eq!(layers.len(), 1);
    assert_eq!(layers[0].id, b);
}

#[test]
fn delete_with_empty_selection_and_stale_ids_is_silent() {
    let mut app = app();
    add_rect(&mut app, 0.0, 0.0, 10.0, 10.0);
    app.delete_selected();
    assert_eq!(app.doc.elements.len(), 1);

    app.delete_element("rectangle-0-dead");
    assert_eq!(app.doc.elements.len(), 1);
    app.duplicate_element("rectangle-0-dead");
    assert_eq!(app.doc.elements.len(), 1);
}

#[test]
fn clearing_a_three_element_multi_selection_resets_all_flags() {
    let mut app = app();
    for x in [0.0, 20.0, 40.0] {
        let id = add_rect(&mut app, x, 0.0, 10.0, 10.0);
        app.toggle_selection(&id);
    }
    assert_eq!(app.selection.len(), 3);

    app.clear_selection();
    assert!(app.selection.is_empty());
    assert_eq!(app.doc.elements.iter().filter(|e| e.selected).count(), 0);
}

#[test]
fn panning_moves_the_viewport_and_not_the_elements() {
    let mut app = app();
    add_rect(&mut app, 10.0, 20.0, 30.0, 40.0);
    let before = positions(&app);

    app.pan_by(egui::vec2(15.0, -7.0));
    assert_eq!(app.view.pan, egui::vec2(15.0, -7.0));
    assert_eq!(positions(&app), before);

    app.pan_by(egui::vec2(5.0, 7.0));
    assert_eq!(app.view.pan, egui::vec2(20.0, 0.0));
    assert_eq!(positions(&app), before);
}

#[test]
fn committed_drag_normalizes_a_reversed_vector() {
    let mut app = app();
    app.activate_tool(Tool::Rectangle);
    app.begin_gesture(egui::pos2(80.0, 90.0));
    app.update_gesture(egui::pos2(40.0, 50.0));
    app.commit_gesture(egui::pos2(20.0, 30.0));

    assert!(app.in_progress.is_none());
    assert_eq!(app.doc.elements.len(), 1);
    let e = &app.doc.elements[0];
    assert_eq!((e.x, e.y), (20.0, 30.0));
    assert_eq!((e.width, e.height), (60.0, 60.0));
    assert_eq!(e.kind, ElementKind::Rectangle);
    assert!(e.selected);
    assert_eq!(app.selection.primary(), Some(e.id.as_str()));
}

#[test]
fn each_drag_tool_commits_its_own_kind() {
    let mut app = app();
    for (tool, kind) in [
        (Tool::Circle, ElementKind::Circle),
        (Tool::Line, ElementKind::Line),
    ] {
        app.activate_tool(tool);
        app.begin_gesture(egui::pos2(0.0, 0.0));
        app.commit_gesture(egui::pos2(100.0, 10.0));
        assert_eq!(app.doc.elements.last().unwrap().kind, kind);
    }
    assert_eq!(app.doc.elements.len(), 2);
}

#[test]
fn an_aborted_drag_leaves_no_element_behind() {
    let mut app = app();
    app.activate_tool(Tool::Circle);
    app.begin_gesture(egui::pos2(0.0, 0.0));
    app.update_gesture(egui::pos2(50.0, 50.0));
    app.cancel_gesture();
    assert!(app.in_progress.is_none());
    assert!(app.doc.elements.is_empty());

    // Committing with a non-drag tool active also creates nothing.
    app.begin_gesture(egui::pos2(0.0, 0.0));
    app.tool = Tool::Select;
    app.commit_gesture(egui::pos2(50.0, 50.0));
    assert!(app.doc.elements.is_empty());
}

#[test]
fn text_tool_commits_once_per_activation() {
    let mut app = app();
    app.activate_tool(Tool::Text);
    assert_eq!(app.doc.elements.len(), 1);
    let e = &app.doc.elements[0];
    assert_eq!((e.x, e.y, e.width, e.height), (100.0, 100.0, 200.0, 40.0));
    assert!(matches!(
        &e.kind,
        ElementKind::Text { content, font_size, .. }
            if content == "Edit this text" && *font_size == 16.0
    ));
    assert!(e.selected);

    app.activate_tool(Tool::Text);
    assert_eq!(app.doc.elements.len(), 2);
}

#[test]
fn component_and_comment_tools_use_their_fixed_defaults() {
    let mut app = app();
    app.activate_tool(Tool::Component);
    app.activate_tool(Tool::Comment);
    assert_eq!(app.doc.elements.len(), 2);

    let component = &app.doc.elements[0];
    assert_eq!(
        (component.x, component.y, component.width, component.height),
        (100.0, 100.0, 120.0, 40.0)
    );
    assert!(matches!(
        &component.kind,
        ElementKind::Component { component } if component == "Button"
    ));

    let comment = &app.doc.elements[1];
    assert_eq!(
        (comment.x, comment.y, comment.width, comment.height),
        (150.0, 150.0, 24.0, 24.0)
    );
    assert!(matches!(
        &comment.kind,
        ElementKind::Comment { author, .. } if author == "Current User"
    ));
    // The comment is the latest commit and therefore the sole selection.
    assert_eq!(app.selection.primary(), Some(comment.id.as_str()));
    assert_flags_consistent(&app);
}

#[test]
fn select_and_hand_tools_create_nothing_on_activation() {
    let mut app = app();
    for tool in [
        Tool::Select,
        Tool::Hand,
        Tool::Polygon,
        Tool::Image,
        Tool::Eyedropper,
    ] {
        app.activate_tool(tool);
        assert_eq!(app.tool, tool);
    }
    assert!(app.doc.elements.is_empty());
}

#[test]
fn frame_tool_uses_the_configured_default_device() {
    let mut app = app();
    app.activate_tool(Tool::Frame);
    assert_eq!(app.doc.elements.len(), 1);
    let e = &app.doc.elements[0];
    assert_eq!((e.x, e.y), (50.0, 50.0));
    assert_eq!((e.width, e.height), (393.0, 852.0));
    assert!(matches!(
        &e.kind,
        ElementKind::Frame { device, corner_radius }
            if device == "iPhone 14 & 15 Pro" && *corner_radius == 8.0
    ));
}

#[test]
fn frame_presets_resolve_dimensions_and_corner_radius() {
    let mut app = app();
    app.create_frame_preset("apple-watch-45mm");
    let e = &app.doc.elements[0];
    assert_eq!((e.width, e.height), (198.0, 242.0));
    assert!(matches!(
        &e.kind,
        ElementKind::Frame { corner_radius, .. } if *corner_radius == 12.0
    ));

    // Unknown device ids create nothing.
    app.create_frame_preset("nokia-3310");
    assert_eq!(app.doc.elements.len(), 1);
}

#[test]
fn layer_toggles_write_through_to_the_element() {
    let mut app = app();
    let a = add_rect(&mut app, 0.0, 0.0, 10.0, 10.0);

    app.toggle_layer_visibility(&a);
    app.toggle_layer_lock(&a);
    let e = app.doc.element_by_id(&a).unwrap();
    assert!(!e.visible);
    assert!(e.locked);

    let layers = model::layer_entries(&app.doc);
    assert!(!layers[0].visible);
    assert!(layers[0].locked);

    // Stale ids are ignored.
    app.toggle_layer_visibility("gone");
    app.toggle_layer_lock("gone");
}

#[test]
fn copy_then_paste_clones_with_the_standard_nudge() {
    let mut app = app();
    let a = add_rect(&mut app, 5.0, 5.0, 10.0, 10.0);
    app.copy_element(&a);
    app.paste_clipboard();

    assert_eq!(app.doc.elements.len(), 2);
    let clone = &app.doc.elements[1];
    assert_eq!((clone.x, clone.y), (25.0, 25.0));
    assert_ne!(clone.id, a);
    assert_eq!(app.selection.primary(), Some(clone.id.as_str()));

    // Pasting again keeps cloning from the copied source.
    app.paste_clipboard();
    assert_eq!(app.doc.elements.len(), 3);
}

#[test]
fn selecting_reveals_a_collapsed_properties_panel() {
    let mut app = CanvasApp::with_project(
        "7".to_string(),
        AppSettings {
            right_panel_open: false,
            ..AppSettings::default()
        },
    );
    let a = add_rect(&mut app, 0.0, 0.0, 10.0, 10.0);
    assert!(!app.right_panel_open);
    app.select_only(&a);
    assert!(app.right_panel_open);

    app.right_panel_open = false;
    app.select_all();
    // Select-all is not an element click; the panel stays put.
    assert!(!app.right_panel_open);
}

#[test]
fn project_title_treats_the_id_as_opaque() {
    let app = CanvasApp::with_project("abc-123".to_string(), AppSettings::default());
    assert_eq!(app.project_title(), "Design Project abc-123");
}

#[test]
fn zoom_steps_stay_within_bounds() {
    let mut app = app();
    for _ in 0..20 {
        app.view.zoom_in();
    }
    assert_eq!(app.view.zoom_percent, 400.0);
    for _ in 0..20 {
        app.view.zoom_out();
    }
    assert_eq!(app.view.zoom_percent, 25.0);
    app.view.zoom_in();
    assert_eq!(app.view.zoom_percent, 50.0);
}
