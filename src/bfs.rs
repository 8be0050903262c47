use fxhash::FxBuildHasher;
/// This module implements the breadth-first core as a generic function over
/// nodes, successor generation and a success predicate, in the style of
/// [pathfinding's bfs function](https://docs.rs/pathfinding/latest/pathfinding/directed/bfs/index.html).
/// An [IndexMap] keyed by node doubles as the visited set and the
/// predecessor table: the frontier holds map indices, and the path is
/// rebuilt by walking predecessor indices back from the dequeued goal.
use indexmap::map::Entry::Vacant;
use indexmap::IndexMap;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use std::collections::VecDeque;
use std::hash::Hash;

fn reverse_path<N>(parents: &FxIndexMap<N, usize>, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path: Vec<N> = itertools::unfold(start, |i| {
        parents.get_index(*i).map(|(node, &parent)| {
            *i = parent;
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Explores from `start` in breadth-first order until a node satisfying
/// `success` is dequeued, and returns the path from `start` up to and
/// including that node together with the number of nodes dequeued. The
/// count is reported even when the frontier runs dry without a hit.
///
/// Nodes are marked visited when enqueued, so each node enters the
/// frontier at most once. The success test runs at dequeue time, so the
/// first hit is a closest one under the order in which `successors`
/// yields nodes.
pub fn bfs_multi_goal<N, FN, IN, FS>(
    start: &N,
    mut successors: FN,
    mut success: FS,
) -> (Option<Vec<N>>, usize)
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FS: FnMut(&N) -> bool,
{
    let mut frontier = VecDeque::new();
    frontier.push_back(0usize);
    let mut parents: FxIndexMap<N, usize> = FxIndexMap::default();
    parents.insert(start.clone(), usize::MAX);
    let mut examined = 0usize;
    while let Some(index) = frontier.pop_front() {
        examined += 1;
        let successors = {
            let (node, _) = parents.get_index(index).unwrap();
            if success(node) {
                return (Some(reverse_path(&parents, index)), examined);
            }
            successors(node)
        };
        for successor in successors {
            if let Vacant(e) = parents.entry(successor) {
                frontier.push_back(e.index());
                e.insert(index);
            }
        }
    }
    (None, examined)
}
