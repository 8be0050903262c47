use crate::error::{Result, RoutingError};
use core::fmt;
use fxhash::FxHashSet;
use grid_util::grid::{BoolGrid, Grid};
use log::info;
use petgraph::unionfind::UnionFind;

/// A cell coordinate as a (row, column) pair, 0-indexed from the top-left
/// corner. Coordinates are signed so that boundary arithmetic like `row - 1`
/// is total; out-of-bounds positions are ordinary values that
/// [GridWorld::is_free] treats as blocked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }

    /// The four orthogonally adjacent cells, in the order up, down, left,
    /// right. The order decides which of several equal-length routes is
    /// discovered first and therefore which goal wins a tie.
    pub fn orthogonal_neighbors(&self) -> [Position; 4] {
        [
            Position::new(self.row - 1, self.col),
            Position::new(self.row + 1, self.col),
            Position::new(self.row, self.col - 1),
            Position::new(self.row, self.col + 1),
        ]
    }

    pub fn manhattan_distance(&self, other: &Position) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Occupancy of a single grid cell. Fixed at [GridWorld] construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    Free,
    Obstacle,
}

/// The static map: dimensions, per-cell obstacle flags and the named points
/// of interest (entrance, exit, goal set). [GridWorld] maintains connected
/// components over the free cells in a [UnionFind] structure in addition to
/// the raw [BoolGrid] occupancy values (`true` means blocked), so that
/// reachability can be answered without flooding the grid. Pure data plus
/// validity queries; the search itself lives in [crate::search].
///
/// Never mutated after construction, so it can be freely shared between
/// concurrent searches.
#[derive(Clone, Debug)]
pub struct GridWorld {
    grid: BoolGrid,
    entrance: Position,
    exit_point: Position,
    goals: Vec<Position>,
    components: UnionFind<usize>,
}

impl GridWorld {
    /// Builds a grid of `rows` x `cols` cells with the given obstacles and
    /// marked points. Fails with [RoutingError::InvalidConfiguration] if a
    /// dimension is zero, if any obstacle lies out of bounds, if the
    /// entrance, exit or a goal is out of bounds or lands on an obstacle,
    /// or if the goal set is empty. Duplicate goals are collapsed, keeping
    /// first-seen order.
    pub fn new(
        rows: usize,
        cols: usize,
        obstacles: &[Position],
        entrance: Position,
        exit_point: Position,
        goals: &[Position],
    ) -> Result<GridWorld> {
        if rows == 0 || cols == 0 {
            return Err(RoutingError::InvalidConfiguration(format!(
                "grid dimensions must be positive, got {rows}x{cols}"
            )));
        }
        let mut grid = BoolGrid::new(cols, rows, false);
        for &p in obstacles {
            if p.row < 0 || p.col < 0 || p.row as usize >= rows || p.col as usize >= cols {
                return Err(RoutingError::InvalidConfiguration(format!(
                    "obstacle {p} lies outside the {rows}x{cols} grid"
                )));
            }
            grid.set(p.col as usize, p.row as usize, true);
        }
        if goals.is_empty() {
            return Err(RoutingError::InvalidConfiguration(
                "goal set is empty".to_owned(),
            ));
        }
        let mut seen: FxHashSet<Position> = FxHashSet::default();
        let mut unique_goals = Vec::with_capacity(goals.len());
        for &g in goals {
            if seen.insert(g) {
                unique_goals.push(g);
            }
        }
        let mut world = GridWorld {
            grid,
            entrance,
            exit_point,
            goals: unique_goals,
            components: UnionFind::new(0),
        };
        for (name, p) in [("entrance", entrance), ("exit", exit_point)] {
            if !world.is_free(p) {
                return Err(RoutingError::InvalidConfiguration(format!(
                    "{name} {p} is not a free in-bounds cell"
                )));
            }
        }
        for &g in &world.goals {
            if !world.is_free(g) {
                return Err(RoutingError::InvalidConfiguration(format!(
                    "goal {g} is not a free in-bounds cell"
                )));
            }
        }
        world.generate_components();
        Ok(world)
    }

    pub fn rows(&self) -> usize {
        self.grid.height
    }
    pub fn cols(&self) -> usize {
        self.grid.width
    }
    pub fn entrance(&self) -> Position {
        self.entrance
    }
    pub fn exit_point(&self) -> Position {
        self.exit_point
    }
    pub fn goals(&self) -> &[Position] {
        &self.goals
    }

    fn in_bounds(&self, pos: Position) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && self.grid.index_in_bounds(pos.col as usize, pos.row as usize)
    }

    fn ix(&self, pos: Position) -> usize {
        self.grid.get_ix(pos.col as usize, pos.row as usize)
    }

    /// Whether `pos` can be stepped on. Out-of-bounds is blocked, never an
    /// error, so boundary checks during a search are uniform.
    pub fn is_free(&self, pos: Position) -> bool {
        self.in_bounds(pos) && !self.grid.get(pos.col as usize, pos.row as usize)
    }

    /// The occupancy of `pos`, or [None] out of bounds.
    pub fn cell(&self, pos: Position) -> Option<CellState> {
        if !self.in_bounds(pos) {
            None
        } else if self.grid.get(pos.col as usize, pos.row as usize) {
            Some(CellState::Obstacle)
        } else {
            Some(CellState::Free)
        }
    }

    /// The free orthogonal neighbors of `pos`, visited up, down, left,
    /// right (see [Position::orthogonal_neighbors]).
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        pos.orthogonal_neighbors()
            .into_iter()
            .filter(move |p| self.is_free(*p))
    }

    /// Retrieves the component id a given free [Position] belongs to.
    pub fn component(&self, pos: Position) -> usize {
        self.components.find(self.ix(pos))
    }

    /// Checks if two positions are free cells on the same connected
    /// component. Unlike a search this answers in near-constant time, but
    /// it says nothing about the route itself.
    pub fn reachable(&self, a: Position, b: Position) -> bool {
        self.is_free(a) && self.is_free(b) && self.components.equiv(self.ix(a), self.ix(b))
    }

    /// Generates a new [UnionFind] structure and links orthogonally adjacent
    /// free cells into the same components.
    fn generate_components(&mut self) {
        info!(
            "generating connected components for a {}x{} grid",
            self.rows(),
            self.cols()
        );
        let w = self.grid.width;
        let h = self.grid.height;
        self.components = UnionFind::new(w * h);
        for row in 0..h as i32 {
            for col in 0..w as i32 {
                let point = Position::new(row, col);
                if !self.is_free(point) {
                    continue;
                }
                let parent_ix = self.ix(point);
                // Down and right suffice; up and left were linked when those
                // cells were scanned.
                for next in [
                    Position::new(point.row + 1, point.col),
                    Position::new(point.row, point.col + 1),
                ] {
                    if self.is_free(next) {
                        self.components.union(parent_ix, self.ix(next));
                    }
                }
            }
        }
    }
}

impl fmt::Display for GridWorld {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows() as i32 {
            for col in 0..self.cols() as i32 {
                let p = Position::new(row, col);
                let c = if p == self.entrance {
                    'S'
                } else if p == self.exit_point {
                    'E'
                } else if self.goals.contains(&p) {
                    'P'
                } else if !self.is_free(p) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
