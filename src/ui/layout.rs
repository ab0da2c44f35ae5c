use egui::{Button, CentralPanel, Context, Frame, RichText, ScrollArea, Ui, Visuals};

use crate::ui::palette;

/// Barra superior con "volver", título y "reiniciar".
/// Devuelve (clic volver, clic reiniciar).
pub fn top_bar(ctx: &Context, title: &str) -> (bool, bool) {
    let mut back = false;
    let mut reset = false;
    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            back = ui.button("⬅ Back").clicked();
            ui.add_space(8.0);
            ui.label(RichText::new(title).heading().strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                reset = ui
                    .add(Button::new(RichText::new("🔄 Reset").color(palette::MEDICAL_BLUE)))
                    .clicked();
            });
        });
    });
    (back, reset)
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("For educational purposes only")
                    .small()
                    .color(palette::MED_GRAY),
            );
            // ----------- BOTONES DE TEMA -----------
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🌙 Dark mode").clicked() {
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀ Light mode").clicked() {
                    ctx.set_visuals(Visuals::light());
                }
            });
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Panel con scroll vertical y ancho máximo, para listas largas.
pub fn scroll_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui, f32)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    let w = ui.available_width().min(max_width);
                    Frame::default()
                        .inner_margin(egui::Margin::symmetric(12, 8))
                        .show(ui, |ui| {
                            ui.set_width(w);
                            ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                                inner(ui, w);
                            });
                        });
                });
            });
    });
}
