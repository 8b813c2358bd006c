use crate::input::Hotkey;
use crate::shape::ShapeKind;
use crate::state::SessionState;

/// Bottom bar showing the active color and tool
pub fn status_panel(session: &SessionState, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let color = session.selected_color();
            ui.colored_label(color.color(), color.label());
            ui.separator();

            let tool = session
                .selected_shape_type()
                .map_or("Pick", ShapeKind::label);
            ui.label(format!("Tool: {tool}"));
            ui.separator();

            ui.label(format!("Shapes: {}", session.document().len()));
            if session.selected_shape().is_some() {
                ui.separator();
                ui.label("1 selected");
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.weak(format!(
                    "{} color  {} shape  {} pick  {} delete",
                    key_names(&[Hotkey::Red, Hotkey::Green, Hotkey::Blue]),
                    key_names(&[Hotkey::Rectangle, Hotkey::Circle]),
                    key_names(&[Hotkey::Pick]),
                    key_names(&[Hotkey::Delete]),
                ));
            });
        });
    });
}

fn key_names(hotkeys: &[Hotkey]) -> String {
    hotkeys
        .iter()
        .map(|hotkey| hotkey.key().name())
        .collect::<Vec<_>>()
        .join("/")
}
