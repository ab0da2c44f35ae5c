use crate::app::MedPrepApp;
use crate::ui::helpers::module_card;
use crate::ui::layout::centered_panel;
use crate::ui::palette;
use egui::{Context, RichText};

pub fn ui_home(app: &mut MedPrepApp, ctx: &Context) {
    centered_panel(ctx, 320.0, 480.0, |ui| {
        ui.label(RichText::new("⚕").size(36.0).color(palette::MEDICAL_BLUE));
        ui.heading(RichText::new("MedPrep").strong().color(palette::DEEP_NAVY));
        ui.label("Practice clinical procedures and preparation protocols");
        ui.add_space(24.0);

        ui.label(RichText::new("TRAINING MODULES").small().color(palette::MED_GRAY));
        ui.add_space(8.0);

        let card_w = ui.available_width();
        if module_card(
            ui,
            "🧪 Antibiotic Sequencing",
            "Order the steps to prepare powdered antibiotics correctly",
            palette::MEDICAL_BLUE,
            card_w,
        ) {
            app.open_game();
        }
        ui.add_space(8.0);
        if module_card(
            ui,
            "📋 Colonoscopy Prep",
            "Track dietary, medication, and procedure day tasks",
            palette::TEAL,
            card_w,
        ) {
            app.open_checklist();
        }
    });
}
