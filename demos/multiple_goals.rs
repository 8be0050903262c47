use grid_routing::{GridWorld, PathFinder, Position};

// In this demo a path is found to one of two goals on a 3x3 grid with shape
//  ___
// |S P|
// | # |
// |  P|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - P marks a goal
// The search settles on the closest goal, which is the top one.

fn main() {
    let world = GridWorld::new(
        3,
        3,
        &[Position::new(1, 1)],
        Position::new(0, 0),
        Position::new(0, 0),
        &[Position::new(0, 2), Position::new(2, 2)],
    )
    .unwrap();
    println!("{world}");
    let result = PathFinder
        .search(&world, world.entrance(), world.goals())
        .unwrap();
    println!("Selected goal: {}\n", result.reached.unwrap());
    println!("Path:");
    for p in &result.path {
        println!("{p}");
    }
}
