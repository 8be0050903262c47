use grid_routing::{GridWorld, PathFinder, Position};

// The 10x10 parking lot this engine was built around: the agent enters at
// the top-left corner, parks at the nearest of three free spots, and later
// drives back out through the same cell.
//
// The printed map uses S for the entrance/exit, P for spots and # for
// obstacles.

fn positions(pairs: &[(i32, i32)]) -> Vec<Position> {
    pairs.iter().map(|&(r, c)| Position::new(r, c)).collect()
}

fn main() {
    let obstacles = positions(&[
        (1, 1),
        (1, 2),
        (1, 3),
        (1, 4),
        (1, 5),
        (1, 6),
        (1, 7),
        (2, 3),
        (3, 3),
        (3, 4),
        (4, 4),
        (5, 5),
        (5, 6),
        (6, 6),
        (6, 3),
        (7, 5),
        (8, 5),
        (8, 6),
        (8, 7),
        (9, 6),
        (4, 2),
        (6, 2),
        (7, 2),
        (2, 8),
        (4, 8),
        (5, 8),
        (6, 8),
        (7, 8),
        (8, 8),
    ]);
    let entrance = Position::new(0, 0);
    let spots = positions(&[(5, 4), (8, 9), (9, 2)]);
    let world = GridWorld::new(10, 10, &obstacles, entrance, entrance, &spots).unwrap();
    println!("{world}");

    let plan = PathFinder.plan_trip(&world).unwrap();
    match plan.inbound.reached {
        Some(spot) => {
            println!("Parking spot found at {spot}");
            println!("Steps taken: {}", plan.inbound.steps());
            println!("Nodes visited: {}", plan.inbound.nodes_examined);
            for p in &plan.inbound.path {
                println!("{p}");
            }
        }
        None => {
            println!("No parking spot available!");
            return;
        }
    }

    let outbound = plan.outbound.unwrap();
    if outbound.found() {
        println!("\nPath to exit found!");
        println!("Steps taken: {}", outbound.steps());
        println!("Nodes visited: {}", outbound.nodes_examined);
    } else {
        println!("\nNo path to exit!");
    }
}
