#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use ndarray::Array1;
use particle_life::simulation::food::Food;
use particle_life::simulation::geometric_utils::Bounds;
use particle_life::simulation::params::Params;
use particle_life::simulation::render::{Canvas, draw_world, run_frame};
use particle_life::simulation::species::{FOOD_COLOR, Rgb, Species};
use particle_life::simulation::world::World;

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Clear(f32, f32),
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        color: Rgb,
        alpha: f32,
    },
}

#[derive(Default)]
struct RecordingCanvas {
    ops: Vec<Op>,
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, width: f32, height: f32) {
        self.ops.push(Op::Clear(width, height));
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb, alpha: f32) {
        self.ops.push(Op::Circle {
            x,
            y,
            radius,
            color,
            alpha,
        });
    }
}

fn create_test_params() -> Params {
    Params {
        food_spawn_chance: 0.0,
        ..Params::default()
    }
}

fn test_world() -> World {
    World::empty(
        create_test_params(),
        Bounds::new(320.0, 240.0).unwrap(),
        Some(8),
    )
    .unwrap()
}

#[test]
fn test_draws_food_before_creatures() {
    let mut world = test_world();
    world
        .spawn_creature(Species::Blue, Array1::from_vec(vec![10.0, 20.0]), 1.5)
        .unwrap()
        .alpha = 0.5;
    world.add_food(Food::new(100.0, 50.0));
    world.add_food(Food::new(200.0, 60.0));

    let mut canvas = RecordingCanvas::default();
    draw_world(&world, &mut canvas);

    assert_eq!(
        canvas.ops,
        vec![
            Op::Clear(320.0, 240.0),
            Op::Circle {
                x: 100.0,
                y: 50.0,
                radius: 3.0,
                color: FOOD_COLOR,
                alpha: 1.0,
            },
            Op::Circle {
                x: 200.0,
                y: 60.0,
                radius: 3.0,
                color: FOOD_COLOR,
                alpha: 1.0,
            },
            Op::Circle {
                x: 10.0,
                y: 20.0,
                radius: 5.0,
                color: Species::Blue.color(),
                alpha: 0.5,
            },
        ]
    );
}

#[test]
fn test_run_frame_advances_and_reports() {
    let mut world = test_world();
    for species in Species::ALL {
        world
            .spawn_creature(species, Array1::from_vec(vec![160.0, 120.0]), 1.0)
            .unwrap();
    }
    world.add_food(Food::new(5.0, 5.0));

    let mut canvas = RecordingCanvas::default();
    let stats = run_frame(&mut world, &mut canvas);

    assert_eq!(stats.tick, 1);
    assert_eq!(stats.total, world.creatures.len());
    assert_eq!(stats.food, 1);
    assert_eq!(stats.red + stats.green + stats.blue, stats.total);

    // clear + food + every live creature
    assert_eq!(canvas.ops.len(), 2 + world.creatures.len());
    assert_eq!(canvas.ops[0], Op::Clear(320.0, 240.0));
}

#[test]
fn test_resize_changes_cleared_area() {
    let mut world = test_world();
    world.resize(640.0, 480.0).unwrap();

    let mut canvas = RecordingCanvas::default();
    draw_world(&world, &mut canvas);

    assert_eq!(canvas.ops, vec![Op::Clear(640.0, 480.0)]);
}
