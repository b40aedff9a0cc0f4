use crate::model;
use eframe::egui;

use super::align::{AlignMode, DistributeMode};
use super::geometry::{self, to_canvas_point};
use super::help;
use super::presets;
use super::render::{
    draw_artboard, draw_background, draw_elements, draw_gesture_preview, tool_button,
};
use super::{CanvasApp, Tool};

impl eframe::App for CanvasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Space enables pan eligibility without switching the active tool.
        self.space_pressed =
            ctx.input(|i| i.key_down(egui::Key::Space)) && !ctx.wants_keyboard_input();

        if !ctx.wants_keyboard_input() {
            self.handle_keyboard(ctx);
        }

        // A pending drag must not survive losing the window focus.
        if !ctx.input(|i| i.raw.focused) {
            self.cancel_gesture();
            self.pan_active = false;
        }

        self.top_bar(ctx);
        self.layers_panel(ctx);
        self.properties_panel(ctx);
        self.status_bar(ctx);
        self.canvas(ctx);

        help::draw_help_window(ctx, &mut self.show_help);
    }
}

impl CanvasApp {
    /// Dispatches one frame's worth of key presses. Auto-repeat events are
    /// filtered out so holding a key cannot commit more than one element.
    /// Chorded branches run first; a modifier press never reaches the
    /// plain-letter tool shortcuts.
    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        let presses: Vec<(egui::Modifiers, egui::Key)> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        repeat: false,
                        modifiers,
                        ..
                    } => Some((*modifiers, *key)),
                    _ => None,
                })
                .collect()
        });

        for (modifiers, key) in presses {
            if modifiers.command && modifiers.shift {
                match key {
                    egui::Key::L => self.apply_alignment(AlignMode::Left),
                    egui::Key::C => self.apply_alignment(AlignMode::HCenter),
                    egui::Key::R => self.apply_alignment(AlignMode::Right),
                    egui::Key::T => self.apply_alignment(AlignMode::Top),
                    egui::Key::M => self.apply_alignment(AlignMode::VMiddle),
                    egui::Key::B => self.apply_alignment(AlignMode::Bottom),
                    egui::Key::H => self.apply_distribution(DistributeMode::Horizontal),
                    egui::Key::V => self.apply_distribution(DistributeMode::Vertical),
                    _ => {}
                }
            } else if modifiers.command {
                match key {
                    egui::Key::G => self.toggle_grid(),
                    egui::Key::Slash => self.activate_tool(Tool::Comment),
                    egui::Key::D => self.duplicate_selected(),
                    egui::Key::A => self.select_all(),
                    _ => {}
                }
            } else if modifiers.is_none() {
                match key {
                    egui::Key::V => self.activate_tool(Tool::Select),
                    egui::Key::H => self.activate_tool(Tool::Hand),
                    egui::Key::F => self.activate_tool(Tool::Frame),
                    egui::Key::R => self.activate_tool(Tool::Rectangle),
                    egui::Key::O => self.activate_tool(Tool::Circle),
                    egui::Key::L => self.activate_tool(Tool::Line),
                    egui::Key::P => self.activate_tool(Tool::Polygon),
                    egui::Key::T => self.activate_tool(Tool::Text),
                    egui::Key::I => self.activate_tool(Tool::Eyedropper),
                    egui::Key::C => self.activate_tool(Tool::Component),
                    egui::Key::Delete | egui::Key::Backspace => self.delete_selected(),
                    egui::Key::Escape => {
                        self.clear_selection();
                        self.context_hit = None;
                        self.cancel_gesture();
                    }
                    egui::Key::F1 => self.show_help = true,
                    _ => {}
                }
            }
        }
    }

    fn top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.label(egui::RichText::new(self.project_title()).strong());
                ui.separator();

                let buttons = [
                    ("V", "Select (V)", Tool::Select),
                    ("H", "Hand (H)", Tool::Hand),
                    ("F", "Frame (F)", Tool::Frame),
                    ("R", "Rectangle (R)", Tool::Rectangle),
                    ("O", "Ellipse (O)", Tool::Circle),
                    ("L", "Line (L)", Tool::Line),
                    ("P", "Polygon (P)", Tool::Polygon),
                    ("T", "Text (T)", Tool::Text),
                    ("Img", "Image (I)", Tool::Image),
                    ("C", "Component (C)", Tool::Component),
                    ("Pin", "Comment (⌘/)", Tool::Comment),
                    ("Pick", "Eyedropper (I)", Tool::Eyedropper),
                ];
                for (label, hover, tool) in buttons {
                    if tool_button(ui, label, hover, tool, self.tool) {
                        self.activate_tool(tool);
                    }
                }
                ui.separator();

                ui.menu_button("Frames", |ui| {
                    egui::ScrollArea::vertical().max_height(400.0).show(ui, |ui| {
                        for (group, group_presets) in presets::PRESET_GROUPS {
                            ui.label(*group);
                            for preset in *group_presets {
                                let entry = format!(
                                    "{}  {:.0}×{:.0}",
                                    preset.label, preset.width, preset.height
                                );
                                if ui.button(entry).clicked() {
                                    self.create_frame_preset(preset.id);
                                    ui.close_menu();
                                }
                            }
                            ui.separator();
                        }
                    });
                });

                ui.menu_button("Arrange", |ui| {
                    let can_align = self.selection.len() >= 2;
                    let can_distribute = self.selection.len() >= 3;
                    let aligns = [
                        ("Align Left (⌘⇧L)", AlignMode::Left),
                        ("Align Center (⌘⇧C)", AlignMode::HCenter),
                        ("Align Right (⌘⇧R)", AlignMode::Right),
                        ("Align Top (⌘⇧T)", AlignMode::Top),
                        ("Align Middle (⌘⇧M)", AlignMode::VMiddle),
                        ("Align Bottom (⌘⇧B)", AlignMode::Bottom),
                    ];
                    for (label, mode) in aligns {
                        if ui.add_enabled(can_align, egui::Button::new(label)).clicked() {
                            self.apply_alignment(mode);
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui
                        .add_enabled(
                            can_distribute,
                            egui::Button::new("Distribute Horizontally (⌘⇧H)"),
                        )
                        .clicked()
                    {
                        self.apply_distribution(DistributeMode::Horizontal);
                        ui.close_menu();
                    }
                    if ui
                        .add_enabled(
                            can_distribute,
                            egui::Button::new("Distribute Vertically (⌘⇧V)"),
                        )
                        .clicked()
                    {
                        self.apply_distribution(DistributeMode::Vertical);
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui.checkbox(&mut self.show_grid, "Grid overlay (⌘G)").changed() {
                        self.persist_settings();
                    }
                    ui.horizontal(|ui| {
                        ui.label("Grid size:");
                        if ui
                            .add(
                                egui::DragValue::new(&mut self.grid_size)
                                    .range(4.0..=128.0)
                                    .speed(1.0),
                            )
                            .changed()
                        {
                            self.persist_settings();
                        }
                    });
                    ui.separator();
                    if ui.checkbox(&mut self.left_panel_open, "Layers panel").changed() {
                        self.persist_settings();
                    }
                    if ui
                        .checkbox(&mut self.right_panel_open, "Properties panel")
                        .changed()
                    {
                        self.persist_settings();
                    }
                    ui.separator();
                    if ui.button("Shortcuts (F1)").clicked() {
                        self.show_help = true;
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("+").on_hover_text("Zoom in").clicked() {
                        self.view.zoom_in();
                    }
                    ui.label(format!("{:.0}%", self.view.zoom_percent));
                    if ui.button("−").on_hover_text("Zoom out").clicked() {
                        self.view.zoom_out();
                    }
                });
            });
        });
    }

    fn layers_panel(&mut self, ctx: &egui::Context) {
        if !self.left_panel_open {
            return;
        }
        egui::SidePanel::left("layers_panel")
            .resizable(true)
            .min_width(180.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Layers");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("Hide").clicked() {
                            self.left_panel_open = false;
                            self.persist_settings();
                        }
                    });
                });
                ui.separator();

                let entries = model::layer_entries(&self.doc);
                if entries.is_empty() {
                    ui.label("No layers yet");
                    ui.small("Create elements on the canvas to see them here");
                    return;
                }
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for entry in entries {
                        ui.horizontal(|ui| {
                            let selected = self.selection.contains(&entry.id);
                            if ui
                                .selectable_label(selected, &entry.name)
                                .on_hover_text(entry.kind_label)
                                .clicked()
                            {
                                let shift = ctx.input(|i| i.modifiers.shift);
                                if shift {
                                    self.toggle_selection(&entry.id);
                                } else {
                                    self.select_only(&entry.id);
                                }
                            }
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    let lock = if entry.locked { "🔒" } else { "🔓" };
                                    if ui.small_button(lock).on_hover_text("Toggle lock").clicked()
                                    {
                                        self.toggle_layer_lock(&entry.id);
                                    }
                                    let vis = if entry.visible { "●" } else { "○" };
                                    if ui
                                        .small_button(vis)
                                        .on_hover_text("Toggle visibility")
                                        .clicked()
                                    {
                                        self.toggle_layer_visibility(&entry.id);
                                    }
                                },
                            );
                        });
                    }
                });
            });
    }

    fn properties_panel(&mut self, ctx: &egui::Context) {
        if !self.right_panel_open {
            return;
        }
        egui::SidePanel::right("properties_panel")
            .resizable(true)
            .min_width(220.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Properties");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("Hide").clicked() {
                            self.right_panel_open = false;
                            self.persist_settings();
                        }
                    });
                });
                ui.separator();

                egui::ScrollArea::vertical().show(ui, |ui| {
                    match self.selection.single_selected_id() {
                        Some(id) => self.element_properties(ui, &id),
                        None if self.selection.len() > 1 => {
                            ui.label(format!("{} elements selected", self.selection.len()));
                            ui.small("Use Arrange to align or distribute them");
                        }
                        None => {
                            ui.label("Nothing selected");
                            ui.small("Select an element to edit its properties");
                        }
                    }
                });
            });
    }

    fn element_properties(&mut self, ui: &mut egui::Ui, id: &str) {
        let Some(element) = self.doc.element_by_id_mut(id) else {
            return;
        };
        ui.label(egui::RichText::new(element.kind.label()).strong());
        ui.add_space(4.0);
        ui.label("Position & Size");
        ui.horizontal(|ui| {
            ui.label("X:");
            ui.add(egui::DragValue::new(&mut element.x).speed(1.0));
            ui.label("Y:");
            ui.add(egui::DragValue::new(&mut element.y).speed(1.0));
        });
        ui.horizontal(|ui| {
            ui.label("W:");
            ui.add(
                egui::DragValue::new(&mut element.width)
                    .range(0.0..=100_000.0)
                    .speed(1.0),
            );
            ui.label("H:");
            ui.add(
                egui::DragValue::new(&mut element.height)
                    .range(0.0..=100_000.0)
                    .speed(1.0),
            );
        });

        match &mut element.kind {
            model::ElementKind::Text {
                content,
                font_size,
                font_family,
            } => {
                ui.separator();
                ui.label("Text");
                ui.text_edit_singleline(content);
                ui.horizontal(|ui| {
                    ui.label("Size:");
                    ui.add(
                        egui::DragValue::new(font_size)
                            .range(4.0..=200.0)
                            .speed(0.5),
                    );
                    ui.small(font_family.as_str());
                });
            }
            model::ElementKind::Frame {
                device,
                corner_radius,
            } => {
                ui.separator();
                ui.label("Frame");
                ui.small(device.as_str());
                ui.horizontal(|ui| {
                    ui.label("Corner radius:");
                    ui.add(
                        egui::DragValue::new(corner_radius)
                            .range(0.0..=64.0)
                            .speed(0.5),
                    );
                });
            }
            model::ElementKind::Component { component } => {
                ui.separator();
                ui.label("Component");
                ui.text_edit_singleline(component);
            }
            model::ElementKind::Comment {
                content,
                author,
                created_at,
            } => {
                ui.separator();
                ui.label("Comment");
                ui.text_edit_singleline(content);
                ui.small(format!("{} · {}", author, created_at));
            }
            _ => {}
        }
    }

    fn status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(status) = &self.status {
                    ui.label(status);
                } else {
                    ui.label("Ready");
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Zoom: {:.0}%", self.view.zoom_percent));
                    ui.separator();
                    ui.label(format!("Elements: {}", self.doc.elements.len()));
                    ui.separator();
                    ui.label(format!("Selected: {}", self.selection.len()));
                    ui.separator();
                    ui.label(self.tool.label());
                });
            });
        });
    }

    fn canvas(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let (rect, response) =
                ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
            let origin = rect.min;
            let pointer = ctx.input(|i| i.pointer.interact_pos());
            let canvas_pos = pointer.map(|p| to_canvas_point(p, origin, &self.view));

            if self.pan_active {
                ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
            } else if self.space_pressed {
                ctx.set_cursor_icon(egui::CursorIcon::Grab);
            } else if self.tool.creates_on_drag() && response.hovered() {
                ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
            }

            // Panning pre-empts every other pointer interaction. While a
            // pan trigger is held, even a motionless press stays a pan
            // gesture and never reaches selection or shape creation.
            let pan_eligible =
                self.space_pressed || ctx.input(|i| i.modifiers.command || i.modifiers.ctrl);
            let pan_start = response.drag_started_by(egui::PointerButton::Middle)
                || (response.drag_started_by(egui::PointerButton::Primary) && pan_eligible);
            if pan_start {
                self.pan_active = true;
                self.cancel_gesture();
            }

            if self.pan_active {
                if response.dragged() {
                    self.pan_by(response.drag_delta());
                }
                if ctx.input(|i| i.pointer.any_released()) {
                    self.pan_active = false;
                }
            } else {
                if response.secondary_clicked() {
                    self.context_hit =
                        canvas_pos.and_then(|p| geometry::topmost_hit(&self.doc, p));
                }

                let pressed = (response.drag_started_by(egui::PointerButton::Primary)
                    || response.clicked())
                    && !pan_eligible;
                if pressed {
                    if let Some(p) = canvas_pos {
                        if self.tool.creates_on_drag() {
                            self.begin_gesture(p);
                            if response.clicked() {
                                // Press and release in place: the commit box
                                // collapses to a point.
                                self.commit_gesture(p);
                            }
                        } else if self.tool == Tool::Select {
                            let shift = ctx.input(|i| i.modifiers.shift);
                            match geometry::topmost_hit(&self.doc, p) {
                                Some(id) => {
                                    if shift {
                                        self.toggle_selection(&id);
                                    } else {
                                        self.select_only(&id);
                                    }
                                }
                                None => self.clear_selection(),
                            }
                        }
                    }
                }

                if response.dragged_by(egui::PointerButton::Primary) {
                    if let Some(p) = canvas_pos {
                        self.update_gesture(p);
                    }
                }

                if response.drag_stopped_by(egui::PointerButton::Primary) {
                    match canvas_pos {
                        Some(p) => self.commit_gesture(p),
                        None => self.cancel_gesture(),
                    }
                }
            }

            let painter = ui.painter_at(rect);
            draw_background(&painter, rect, &self.view, self.show_grid, self.grid_size);
            draw_artboard(&painter, origin, &self.view);
            draw_elements(&painter, origin, &self.view, &self.doc);
            if let Some(gesture) = &self.in_progress {
                draw_gesture_preview(&painter, origin, &self.view, gesture, self.tool);
            }

            response.context_menu(|ui| {
                let hit = self.context_hit.clone();
                ui.add_enabled_ui(hit.is_some(), |ui| {
                    if ui.button("Copy").clicked() {
                        if let Some(id) = &hit {
                            self.copy_element(id);
                        }
                        ui.close();
                    }
                    if ui.button("Duplicate").clicked() {
                        if let Some(id) = &hit {
                            self.duplicate_element(id);
                        }
                        ui.close();
                    }
                    if ui.button("Delete").clicked() {
                        if let Some(id) = &hit {
                            self.delete_element(id);
                        }
                        ui.close();
                    }
                });
                ui.separator();
                ui.add_enabled_ui(!self.clipboard.is_empty(), |ui| {
                    if ui.button("Paste").clicked() {
                        self.paste_clipboard();
                        ui.close();
                    }
                });
            });
        });
    }
}
