// UI module - population readout drawn with egui on top of the field

mod state;
mod stats;

pub use state::{UIState, draw_ui, process_egui};
