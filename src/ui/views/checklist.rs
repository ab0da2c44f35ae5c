use crate::app::MedPrepApp;
use crate::ui::helpers::progress_row;
use crate::ui::layout::{scroll_panel, top_bar};
use crate::ui::palette;
use crate::view_models::PhaseInfo;
use egui::{Button, Context, Frame, RichText, Stroke, Ui};

pub fn ui_checklist(app: &mut MedPrepApp, ctx: &Context) {
    let (back, reset) = top_bar(ctx, "Colonoscopy Prep");
    if back {
        app.go_home();
        return;
    }
    if reset {
        app.reset_checklist();
    }

    // Precomputar para no mantener el borrow de `app` mientras se pinta
    let Some(summary) = app.checklist_summary() else {
        return;
    };
    let phases = app.phase_infos();

    scroll_panel(ctx, 640.0, |ui, width| {
        let bar_color = if summary.progress.is_complete() {
            palette::SUCCESS
        } else {
            palette::MEDICAL_BLUE
        };
        progress_row(ui, summary.progress.fraction(), bar_color, "", width);
        ui.label(RichText::new(summary.label()).strong());
        ui.add_space(12.0);

        for phase in &phases {
            phase_card(app, ui, phase, width);
            ui.add_space(10.0);
        }
    });
}

fn phase_card(app: &mut MedPrepApp, ui: &mut Ui, phase: &PhaseInfo, width: f32) {
    let color = palette::from_rgb(phase.rgb);
    Frame::group(ui.style())
        .stroke(Stroke::new(1.0, palette::DIVIDER))
        .show(ui, |ui| {
            ui.set_width(width - 16.0);

            // Cabecera: pulsar pliega o despliega la fase
            let header = format!(
                "{} {}\n{}",
                phase.icon, phase.title, phase.subtitle
            );
            let header_btn = Button::new(RichText::new(header).strong())
                .fill(palette::tint(color, 0x18))
                .min_size(egui::vec2(width - 60.0, 44.0));
            ui.horizontal(|ui| {
                if ui.add(header_btn).clicked() {
                    app.toggle_phase(&phase.id);
                }
                ui.label(phase.chevron());
            });

            let bar_color = if phase.progress.is_complete() {
                palette::SUCCESS
            } else {
                color
            };
            progress_row(ui, phase.progress.fraction(), bar_color, &phase.progress_label(), width - 16.0);

            if phase.expanded {
                ui.add_space(4.0);
                for task in &phase.tasks {
                    let mut checked = task.checked;
                    let text = if task.checked {
                        RichText::new(&task.text).color(palette::MED_GRAY)
                    } else {
                        RichText::new(&task.text)
                    };
                    if ui.checkbox(&mut checked, text).changed() {
                        app.toggle_task(&task.id);
                    }
                }
            }
        });
}
