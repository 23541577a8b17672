use egui_macroquad::egui;
use egui_plot::{Line, Plot, PlotPoints};
use particle_life::simulation::species::{Rgb, Species};
use particle_life::simulation::stats::PopulationStats;
use std::collections::VecDeque;

use super::state::UIState;

fn to_color32(color: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

pub(super) fn draw_stats_panel(egui_ctx: &egui::Context, state: &UIState, stats: &PopulationStats) {
    egui::Window::new("Populations")
        .default_width(state.stats_panel_width)
        .default_pos(egui::pos2(10.0, 10.0))
        .resizable(false)
        .show(egui_ctx, |ui| {
            for line in stats.summary_lines() {
                ui.horizontal(|ui| {
                    match line.swatch {
                        Some(color) => {
                            ui.colored_label(to_color32(color), format!("● {}", line.label));
                        }
                        None => {
                            ui.label(line.label);
                        }
                    }
                    ui.label(line.value.to_string());
                });
            }

            ui.separator();
            ui.label(format!("Births: {}  Deaths: {}", stats.births, stats.deaths));
            ui.label(format!("Tick: {}", stats.tick));

            ui.collapsing("History", |ui| {
                draw_population_plot(ui, state);
            });
        });
}

fn history_points(data: &VecDeque<(f64, f64)>) -> PlotPoints {
    data.iter().map(|&(x, y)| [x, y]).collect::<Vec<_>>().into()
}

fn draw_population_plot(ui: &mut egui::Ui, state: &UIState) {
    if state.total_history.is_empty() {
        ui.label("Collecting data...");
        return;
    }

    Plot::new("population_plot")
        .height(150.0)
        .width(state.stats_panel_width)
        .show_axes([true, true])
        .legend(egui_plot::Legend::default())
        .label_formatter(|name, value| format!("{}\nTick: {:.0}\nCount: {:.0}", name, value.x, value.y))
        .show(ui, |plot_ui| {
            for (history, species) in state.species_history.iter().zip(Species::ALL) {
                let line = Line::new(history_points(history))
                    .color(to_color32(species.color()))
                    .name(species.label());
                plot_ui.line(line);
            }
            let food_line = Line::new(history_points(&state.food_history))
                .color(egui::Color32::from_rgb(255, 255, 0))
                .name("Food");
            plot_ui.line(food_line);

            let total_line = Line::new(history_points(&state.total_history))
                .color(egui::Color32::from_rgb(200, 200, 200))
                .name("Total");
            plot_ui.line(total_line);
        });
}
