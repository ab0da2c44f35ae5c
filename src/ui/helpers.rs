// src/ui/helpers.rs
use egui::{Button, Color32, ProgressBar, RichText, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Barra de progreso con el texto `etiqueta` a la derecha.
pub fn progress_row(ui: &mut Ui, fraction: f32, color: Color32, label: &str, width: f32) {
    ui.horizontal(|ui| {
        ui.add(
            ProgressBar::new(fraction)
                .fill(color)
                .desired_width((width - 70.0).max(60.0)),
        );
        ui.label(RichText::new(label).small());
    });
}

/// Botón principal de una tarjeta del menú: título en negrita y subtítulo.
pub fn module_card(ui: &mut Ui, title: &str, subtitle: &str, color: Color32, width: f32) -> bool {
    let text = RichText::new(format!("{title}\n{subtitle}")).color(color);
    ui.add_sized([width, 64.0], Button::new(text)).clicked()
}
