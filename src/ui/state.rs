use egui_macroquad::egui;
use particle_life::simulation::species::Species;
use particle_life::simulation::stats::PopulationStats;
use std::collections::VecDeque;

const MAX_HISTORY_POINTS: usize = 500;

/// Ticks between two history samples.
const SAMPLE_INTERVAL: u64 = 10;

pub struct UIState {
    pub stats_panel_width: f32,
    /// (tick, count) samples per species, in `Species::ALL` order.
    pub species_history: [VecDeque<(f64, f64)>; 3],
    pub food_history: VecDeque<(f64, f64)>,
    pub total_history: VecDeque<(f64, f64)>,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            stats_panel_width: 220.0,
            species_history: [VecDeque::new(), VecDeque::new(), VecDeque::new()],
            food_history: VecDeque::new(),
            total_history: VecDeque::new(),
        }
    }

    pub fn update_history(&mut self, stats: &PopulationStats) {
        if stats.tick % SAMPLE_INTERVAL != 0 {
            return;
        }

        let t = stats.tick as f64;
        for (history, species) in self.species_history.iter_mut().zip(Species::ALL) {
            push_sample(history, t, stats.count(species));
        }
        push_sample(&mut self.food_history, t, stats.food);
        push_sample(&mut self.total_history, t, stats.total);
    }
}

fn push_sample(history: &mut VecDeque<(f64, f64)>, t: f64, value: usize) {
    history.push_back((t, value as f64));
    if history.len() > MAX_HISTORY_POINTS {
        history.pop_front();
    }
}

pub fn draw_ui(state: &UIState, stats: &PopulationStats) {
    egui_macroquad::ui(|egui_ctx| {
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(egui::Color32::from_rgb(240, 240, 240));
        egui_ctx.set_visuals(visuals);

        super::stats::draw_stats_panel(egui_ctx, state, stats);
    });
}

pub fn process_egui() {
    egui_macroquad::draw();
}
