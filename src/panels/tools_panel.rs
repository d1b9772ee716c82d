use crate::app::{SketchApp, ToolbarAction};
use crate::tool::ToolConfig;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    let mut action = None;

    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.heading("Sticker Sketch");

        ui.horizontal_wrapped(|ui| {
            let tool = app.editor().tool();

            for pen in &app.config().pens {
                let selected =
                    matches!(tool, ToolConfig::Pen { thickness } if *thickness == pen.thickness);
                if ui.selectable_label(selected, &pen.label).clicked() {
                    action = Some(ToolbarAction::SelectPen(pen.thickness));
                }
            }

            ui.separator();

            for glyph in &app.config().stickers {
                let selected = matches!(tool, ToolConfig::Sticker { glyph: current, .. } if current == glyph);
                if ui.selectable_label(selected, glyph).clicked() {
                    action = Some(ToolbarAction::SelectSticker(glyph.clone()));
                }
            }
        });

        ui.horizontal(|ui| {
            ui.label("Custom:");
            ui.add(egui::TextEdit::singleline(&mut app.custom_sticker).desired_width(60.0));
            if ui.button("Use sticker").clicked() {
                action = Some(ToolbarAction::SelectSticker(app.custom_sticker.clone()));
            }
        });

        ui.separator();

        // Undo/Redo section
        ui.horizontal(|ui| {
            let history = app.editor().history();

            if ui.add_enabled(history.can_undo(), egui::Button::new("Undo")).clicked() {
                action = Some(ToolbarAction::Undo);
            }
            if ui.add_enabled(history.can_redo(), egui::Button::new("Redo")).clicked() {
                action = Some(ToolbarAction::Redo);
            }
            if ui.button("Clear").clicked() {
                action = Some(ToolbarAction::Clear);
            }

            ui.label(format!(
                "{} drawn, {} undone",
                history.committed_len(),
                history.redoable().len()
            ));
        });
    });

    if let Some(action) = action {
        app.apply(action);
    }
}
