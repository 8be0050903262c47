use grid_routing::{GridWorld, PathFinder, Position};

// The single goal in the bottom-right corner is sealed off by obstacles, so
// the search sweeps the entrance's component and reports that no route
// exists. That is an ordinary result, not an error.

fn main() {
    let obstacles = [
        Position::new(3, 3),
        Position::new(3, 4),
        Position::new(4, 3),
    ];
    let entrance = Position::new(0, 0);
    let world = GridWorld::new(5, 5, &obstacles, entrance, entrance, &[Position::new(4, 4)])
        .unwrap();
    println!("{world}");

    let result = PathFinder
        .search(&world, world.entrance(), world.goals())
        .unwrap();
    match result.reached {
        Some(goal) => println!("Reached {goal} in {} steps", result.steps()),
        None => println!(
            "No route available (swept {} cells)",
            result.nodes_examined
        ),
    }
}
