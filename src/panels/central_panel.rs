use crate::app::SketchApp;
use crate::surface::PainterSurface;

pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let size = egui::vec2(app.config().canvas_width, app.config().canvas_height);
        let ink = app.config().ink;
        let background = app.config().background;

        ui.vertical_centered(|ui| {
            let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
            let canvas_rect = response.rect;

            // Handle input
            let (input, editor) = app.input_and_editor();
            for event in input.process_input(ctx, canvas_rect) {
                editor.handle_event(event);
            }

            // The tool preview stands in for the cursor
            if response.hovered() {
                ctx.set_cursor_icon(egui::CursorIcon::None);
            }

            // Render the canvas
            let mut surface = PainterSurface::new(&painter, canvas_rect, ink, background);
            let (driver, editor) = app.driver_and_editor();
            driver.tick(ctx, editor, &mut surface);

            let location = if editor.is_over_canvas() { "on canvas" } else { "off canvas" };
            ui.label(format!(
                "{} | {} ({location})",
                editor.tool().name(),
                editor.input_state().name()
            ));
            if let Some(error) = app.last_error() {
                ui.colored_label(ui.visuals().error_fg_color, error);
            }
        });
    });
}
