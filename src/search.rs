use crate::bfs::bfs_multi_goal;
use crate::error::{Result, RoutingError};
use crate::grid_world::{GridWorld, Position};
use log::info;

/// Outcome of a single [PathFinder::search] call.
///
/// `path` runs from the cell after the start up to and including `reached`;
/// it is empty when the start is itself a goal or when no goal is
/// reachable. `nodes_examined` counts cells dequeued from the frontier and
/// is a diagnostic, not a correctness value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub reached: Option<Position>,
    pub path: Vec<Position>,
    pub nodes_examined: usize,
}

impl SearchResult {
    pub fn found(&self) -> bool {
        self.reached.is_some()
    }

    /// Number of moves the agent takes, reported to users as "steps taken".
    pub fn steps(&self) -> usize {
        self.path.len()
    }
}

/// A full visit: entrance to the nearest goal, then from that goal back to
/// the exit. `outbound` is [None] when no goal was reachable inbound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TripPlan {
    pub inbound: SearchResult,
    pub outbound: Option<SearchResult>,
}

/// Breadth-first multi-goal search over a [GridWorld]. All moves are
/// orthogonal and unit cost, so the first goal dequeued is one reached in
/// the fewest steps; among equidistant goals the winner is decided by the
/// fixed neighbor order of [Position::orthogonal_neighbors], making
/// repeated searches on the same grid fully deterministic.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathFinder;

impl PathFinder {
    /// Finds a shortest path from `start` to any position in `goals`.
    ///
    /// Fails with [RoutingError::InvalidStart] if `start` is out of bounds
    /// or blocked. An unreachable (or empty) goal set is not an error: the
    /// sweep exhausts the start's component and reports
    /// `reached = None` with the full dequeue count.
    pub fn search(
        &self,
        grid: &GridWorld,
        start: Position,
        goals: &[Position],
    ) -> Result<SearchResult> {
        if !grid.is_free(start) {
            return Err(RoutingError::InvalidStart(start));
        }
        let (found, nodes_examined) = bfs_multi_goal(
            &start,
            |node| grid.neighbors(*node),
            |node| goals.contains(node),
        );
        Ok(match found {
            Some(mut path) => {
                let reached = path.last().copied();
                // Drop the start cell; callers want the moves that follow it.
                path.remove(0);
                SearchResult {
                    reached,
                    path,
                    nodes_examined,
                }
            }
            None => SearchResult {
                reached: None,
                path: Vec::new(),
                nodes_examined,
            },
        })
    }

    /// Runs the typical session against `grid`: entrance to the nearest
    /// goal, then from the reached goal back to the exit.
    pub fn plan_trip(&self, grid: &GridWorld) -> Result<TripPlan> {
        let inbound = self.search(grid, grid.entrance(), grid.goals())?;
        let outbound = match inbound.reached {
            Some(spot) => {
                info!("goal {spot} reached in {} steps", inbound.steps());
                let back = self.search(grid, spot, &[grid.exit_point()])?;
                if !back.found() {
                    info!("no route from {spot} back to the exit");
                }
                Some(back)
            }
            None => {
                info!("no goal reachable from the entrance");
                None
            }
        };
        Ok(TripPlan { inbound, outbound })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid_world::CellState;

    fn pos(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    fn positions(pairs: &[(i32, i32)]) -> Vec<Position> {
        pairs.iter().map(|&(r, c)| pos(r, c)).collect()
    }

    fn world(rows: usize, cols: usize, obstacles: &[(i32, i32)], goals: &[(i32, i32)]) -> GridWorld {
        GridWorld::new(
            rows,
            cols,
            &positions(obstacles),
            pos(0, 0),
            pos(0, 0),
            &positions(goals),
        )
        .unwrap()
    }

    /// Every consecutive pair of path entries must be one orthogonal step
    /// apart, no cell may repeat, and no cell may be blocked.
    fn assert_walkable(grid: &GridWorld, start: Position, result: &SearchResult) {
        let mut previous = start;
        for (i, &p) in result.path.iter().enumerate() {
            assert_eq!(previous.manhattan_distance(&p), 1);
            assert_eq!(grid.cell(p), Some(CellState::Free));
            assert!(!result.path[..i].contains(&p));
            previous = p;
        }
    }

    #[test]
    fn three_by_three_end_to_end() {
        let w = world(3, 3, &[], &[(2, 2)]);
        let result = PathFinder.search(&w, pos(0, 0), w.goals()).unwrap();
        assert_eq!(result.reached, Some(pos(2, 2)));
        assert_eq!(
            result.path,
            positions(&[(1, 0), (2, 0), (2, 1), (2, 2)])
        );
        assert_eq!(result.nodes_examined, 9);
        assert_walkable(&w, pos(0, 0), &result);
    }

    #[test]
    fn routes_around_an_obstacle() {
        //  ___
        // |S..|
        // |.#.|
        // |..G|
        //  ___
        let w = world(3, 3, &[(1, 1)], &[(2, 2)]);
        let result = PathFinder.search(&w, pos(0, 0), w.goals()).unwrap();
        assert_eq!(result.reached, Some(pos(2, 2)));
        assert_eq!(
            result.path,
            positions(&[(1, 0), (2, 0), (2, 1), (2, 2)])
        );
        assert_eq!(result.nodes_examined, 8);
        assert_walkable(&w, pos(0, 0), &result);
    }

    #[test]
    fn follows_a_winding_corridor() {
        // S#...      down the left edge, along the bottom, and back up
        // .#.#.      through the middle gap to the goal
        // .#.#.
        // ...#.
        let w = world(
            4,
            5,
            &[(0, 1), (1, 1), (2, 1), (1, 3), (2, 3), (3, 3)],
            &[(0, 4)],
        );
        let result = PathFinder.search(&w, pos(0, 0), w.goals()).unwrap();
        assert_eq!(result.reached, Some(pos(0, 4)));
        assert_eq!(result.steps(), 10);
        assert_eq!(result.nodes_examined, 11);
        assert_walkable(&w, pos(0, 0), &result);
    }

    #[test]
    fn start_on_goal_needs_no_movement() {
        for size in [1, 3, 8] {
            let w = world(size, size, &[], &[(0, 0)]);
            let result = PathFinder.search(&w, pos(0, 0), w.goals()).unwrap();
            assert_eq!(result.reached, Some(pos(0, 0)));
            assert_eq!(result.path, vec![]);
            assert_eq!(result.nodes_examined, 1);
        }
    }

    #[test]
    fn equidistant_goals_resolve_by_neighbor_order() {
        // Up is expanded before down, so (0, 1) beats (2, 1).
        let w = world(3, 3, &[], &[(0, 1), (2, 1)]);
        let result = PathFinder.search(&w, pos(1, 1), w.goals()).unwrap();
        assert_eq!(result.reached, Some(pos(0, 1)));
        assert_eq!(result.nodes_examined, 2);

        // Left is expanded before right, so (1, 0) beats (1, 2).
        let w = world(3, 3, &[], &[(1, 0), (1, 2)]);
        let result = PathFinder.search(&w, pos(1, 1), w.goals()).unwrap();
        assert_eq!(result.reached, Some(pos(1, 0)));
        assert_eq!(result.nodes_examined, 4);
    }

    #[test]
    fn repeated_searches_are_identical() {
        let w = world(3, 3, &[(1, 1)], &[(0, 2), (2, 0)]);
        let first = PathFinder.search(&w, pos(0, 0), w.goals()).unwrap();
        for _ in 0..5 {
            assert_eq!(PathFinder.search(&w, pos(0, 0), w.goals()).unwrap(), first);
        }
    }

    #[test]
    fn enclosed_goal_is_a_result_not_an_error() {
        // (4, 4) is sealed off by its three orthogonal approaches.
        let w = world(5, 5, &[(3, 3), (3, 4), (4, 3)], &[(4, 4)]);
        let result = PathFinder.search(&w, pos(0, 0), w.goals()).unwrap();
        assert_eq!(result.reached, None);
        assert_eq!(result.path, vec![]);
        // The whole start component gets swept.
        assert_eq!(result.nodes_examined, 21);
        assert!(!w.reachable(pos(0, 0), pos(4, 4)));
    }

    #[test]
    fn empty_goal_slice_sweeps_the_component() {
        let w = world(3, 3, &[], &[(2, 2)]);
        let result = PathFinder.search(&w, pos(0, 0), &[]).unwrap();
        assert_eq!(result.reached, None);
        assert_eq!(result.nodes_examined, 9);
    }

    #[test]
    fn blocked_or_outside_start_is_rejected() {
        let w = world(3, 3, &[(1, 1)], &[(2, 2)]);
        for start in [pos(1, 1), pos(-1, 0), pos(0, 3)] {
            let err = PathFinder.search(&w, start, w.goals()).unwrap_err();
            assert_eq!(err, RoutingError::InvalidStart(start));
        }
    }

    #[test]
    fn plan_trip_parks_then_exits() {
        // S...      entrance top-left, exit top-right, two candidate
        // .##.      spots; (3, 1) is the nearer one.
        // ...P
        // .P..
        let w = GridWorld::new(
            4,
            4,
            &positions(&[(1, 1), (1, 2)]),
            pos(0, 0),
            pos(0, 3),
            &positions(&[(3, 1), (2, 3)]),
        )
        .unwrap();
        let plan = PathFinder.plan_trip(&w).unwrap();
        assert_eq!(plan.inbound.reached, Some(pos(3, 1)));
        assert_eq!(
            plan.inbound.path,
            positions(&[(1, 0), (2, 0), (3, 0), (3, 1)])
        );
        assert_eq!(plan.inbound.nodes_examined, 9);

        let outbound = plan.outbound.unwrap();
        assert_eq!(outbound.reached, Some(pos(0, 3)));
        assert_eq!(
            outbound.path,
            positions(&[(2, 1), (2, 2), (2, 3), (1, 3), (0, 3)])
        );
        assert_eq!(outbound.nodes_examined, 13);
    }

    #[test]
    fn plan_trip_with_no_reachable_spot_has_no_outbound_leg() {
        // Both goals sealed behind a wall row.
        let w = GridWorld::new(
            4,
            3,
            &positions(&[(2, 0), (2, 1), (2, 2)]),
            pos(0, 0),
            pos(0, 2),
            &positions(&[(3, 0), (3, 2)]),
        )
        .unwrap();
        let plan = PathFinder.plan_trip(&w).unwrap();
        assert!(!plan.inbound.found());
        assert_eq!(plan.outbound, None);
    }
}
