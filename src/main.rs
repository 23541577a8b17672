use macroquad::prelude::*;
use particle_life::simulation::geometric_utils::Bounds;
use particle_life::simulation::params::Params;
use particle_life::simulation::render;
use particle_life::simulation::world::World;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod graphics;
mod ui;

fn window_conf() -> Conf {
    Conf {
        window_title: "Particle Life".to_owned(),
        window_width: 1280,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut window_size = (screen_width(), screen_height());

    let world = Bounds::new(window_size.0, window_size.1)
        .and_then(|bounds| World::new(Params::default(), bounds, None));
    let mut world = match world {
        Ok(world) => world,
        Err(e) => {
            error!("could not create world: {e}");
            return;
        }
    };

    info!("starting particle life simulation");

    let mut canvas = graphics::ScreenCanvas;
    let mut ui_state = ui::UIState::new();

    loop {
        let size = (screen_width(), screen_height());
        if size != window_size {
            window_size = size;
            // invalid sizes (minimized window) keep the previous bounds
            if let Err(e) = world.resize(size.0, size.1) {
                warn!("ignoring resize: {e}");
            }
        }

        let stats = render::run_frame(&mut world, &mut canvas);

        ui_state.update_history(&stats);
        ui::draw_ui(&ui_state, &stats);
        ui::process_egui();

        next_frame().await
    }
}
