use ndarray::Array1;
use particle_life::simulation::creature::Creature;
use particle_life::simulation::food::Food;
use particle_life::simulation::geometric_utils::distance;
use particle_life::simulation::locatable::Locatable;
use particle_life::simulation::species::Species;

#[test]
fn test_food_locatable() {
    let mut food = Food::new(10.0, 20.0);

    // Test pos accessor
    assert_eq!(food.x(), 10.0);
    assert_eq!(food.y(), 20.0);

    // Test pos_mut accessor
    food.pos_mut()[0] = 15.0;
    assert_eq!(food.pos()[0], 15.0);
}

#[test]
fn test_creature_food_distance() {
    let creature = Creature {
        id: 0,
        pos: Array1::from_vec(vec![5.0, 5.0]),
        vel: Array1::zeros(2),
        species: Species::Red,
        energy: 100.0,
        cooldown: 0,
        speed: 1.5,
        alpha: 1.0,
    };
    let food = Food::new(10.0, 10.0);

    let d = distance(&creature, &food);
    assert!((d - 7.071).abs() < 0.01); // sqrt((10-5)^2 + (10-5)^2) ≈ 7.071
    assert_eq!(d, distance(&food, &creature));
}
