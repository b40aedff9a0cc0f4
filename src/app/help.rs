use eframe::egui;

pub(super) fn draw_help_window(ctx: &egui::Context, open: &mut bool) {
    egui::Window::new("Shortcuts")
        .open(open)
        .resizable(true)
        .default_width(480.0)
        .default_height(420.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.label("Tools");
                help_row(ui, "V", "Select tool");
                help_row(ui, "H", "Hand tool");
                help_row(ui, "F", "Frame tool");
                help_row(ui, "R", "Rectangle tool");
                help_row(ui, "O", "Ellipse tool");
                help_row(ui, "L", "Line tool");
                help_row(ui, "P", "Polygon tool");
                help_row(ui, "T", "Text tool");
                help_row(ui, "I", "Eyedropper tool");
                help_row(ui, "C", "Component tool");
                help_row(ui, "⌘/", "Comment tool");

                ui.add_space(10.0);
                ui.label("Selection & Editing");
                help_row(ui, "Click", "Select element");
                help_row(ui, "⇧Click", "Toggle element in multi-selection");
                help_row(ui, "⌘A", "Select all");
                help_row(ui, "⌘D", "Duplicate selection");
                help_row(ui, "Delete / Backspace", "Delete selection");
                help_row(ui, "Escape", "Clear selection");

                ui.add_space(10.0);
                ui.label("Alignment");
                help_row(ui, "⌘⇧L", "Align left");
                help_row(ui, "⌘⇧C", "Align center");
                help_row(ui, "⌘⇧R", "Align right");
                help_row(ui, "⌘⇧T", "Align top");
                help_row(ui, "⌘⇧M", "Align middle");
                help_row(ui, "⌘⇧B", "Align bottom");
                help_row(ui, "⌘⇧H", "Distribute horizontally");
                help_row(ui, "⌘⇧V", "Distribute vertically");

                ui.add_space(10.0);
                ui.label("Canvas");
                help_row(ui, "Space + drag", "Pan the canvas");
                help_row(ui, "Middle drag / ⌘drag", "Pan the canvas");
                help_row(ui, "⌘G", "Toggle grid overlay");
                help_row(ui, "Drag (R/O/L)", "Create a shape from the drag box");
            });
        });
}

fn help_row(ui: &mut egui::Ui, keys: &str, action: &str) {
    ui.horizontal(|ui| {
        ui.add_sized([140.0, 16.0], egui::Label::new(egui::RichText::new(keys).monospace()));
        ui.label(action);
    });
}
