//! Search loops shared by the grid solvers. They are written against generic nodes and costs,
//! with neighbours supplied by a `successors` closure as in
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html),
//! and additionally record the order in which nodes are settled.
//!
//! Instead of mutating back-references on the nodes, every run keeps its bookkeeping in a
//! private [SearchRecords] map. A record's `parent` is the index of its predecessor in the same
//! map, so the records form a tree rooted at the start.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use std::hash::Hash;
use std::ops::Add;

pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Parent index of the root of the search tree.
pub const NO_PARENT: usize = usize::MAX;

/// Per-node bookkeeping of a single search run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeRecord<C> {
    pub parent: usize,
    pub distance: C,
    pub heuristic: C,
    pub visited: bool,
}

impl<C: Copy + Add<Output = C>> NodeRecord<C> {
    pub fn total_cost(&self) -> C {
        self.distance + self.heuristic
    }
}

/// Records of every node a search has reached, in discovery order. Nodes that are absent were
/// never reached.
pub type SearchRecords<N, C> = FxIndexMap<N, NodeRecord<C>>;

/// Raw output of a search loop.
pub(crate) struct Trace<N, C> {
    pub visited: Vec<N>,
    pub records: SearchRecords<N, C>,
    /// Record index of the goal, if it was settled.
    pub goal: Option<usize>,
}

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.cost.eq(&other.cost)
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per estimated cost, then favours the entry that got furthest from the
        // start. Full ties come out in whatever order the heap yields them.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => self.cost.cmp(&other.cost),
            s => s,
        }
    }
}

/// Walks the parent indices from `index` back to the root and returns the nodes root first.
pub(crate) fn reconstruct_path<N: Clone, C>(records: &SearchRecords<N, C>, index: usize) -> Vec<N> {
    let mut path: Vec<N> = std::iter::successors(records.get_index(index), |(_, record)| {
        records.get_index(record.parent)
    })
    .map(|(node, _)| node.clone())
    .collect();
    path.reverse();
    path
}

/// The path from the root of `records` to `goal`, or [None] if `goal` was never reached.
pub fn path_to<N, C>(records: &SearchRecords<N, C>, goal: &N) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone,
{
    records
        .get_index_of(goal)
        .map(|index| reconstruct_path(records, index))
}

/// Best-first search ordered by `distance + heuristic`. With a zero heuristic this is Dijkstra's
/// algorithm.
///
/// The frontier only ever holds nodes that have been reached, so it runs dry exactly when every
/// reachable node is settled. A node that is improved while queued is pushed again and the
/// outdated entry is skipped when popped. Nodes failing `passable` are dropped when popped
/// without being settled.
pub(crate) fn best_first<N, C, FN, IN, FH, FP, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut passable: FP,
    mut success: FS,
) -> Trace<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FP: FnMut(&N) -> bool,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    let mut records: SearchRecords<N, C> = FxIndexMap::default();
    let h = heuristic(start);
    records.insert(
        start.clone(),
        NodeRecord {
            parent: NO_PARENT,
            distance: Zero::zero(),
            heuristic: h,
            visited: false,
        },
    );
    to_see.push(SmallestCostHolder {
        estimated_cost: h,
        cost: Zero::zero(),
        index: 0,
    });
    let mut visited = Vec::new();
    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let successors = {
            let Some((node, record)) = records.get_index_mut(index) else {
                continue;
            };
            if record.visited || cost > record.distance || !passable(node) {
                continue;
            }
            record.visited = true;
            visited.push(node.clone());
            if success(node) {
                return Trace {
                    visited,
                    records,
                    goal: Some(index),
                };
            }
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // index for successor
            match records.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert(NodeRecord {
                        parent: index,
                        distance: new_cost,
                        heuristic: h,
                        visited: false,
                    });
                }
                Occupied(mut e) => {
                    let record = e.get_mut();
                    if record.visited || record.distance <= new_cost {
                        continue;
                    }
                    record.parent = index;
                    record.distance = new_cost;
                    h = record.heuristic;
                    n = e.index();
                }
            }
            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
            });
        }
    }
    Trace {
        visited,
        records,
        goal: None,
    }
}

/// Breadth-first search. Nodes are marked visited when they are enqueued so each enters the
/// queue once; `visited` lists them in dequeue order. Nodes failing `passable` are unmarked and
/// dropped when dequeued.
pub(crate) fn breadth_first<N, C, FN, IN, FP, FS>(
    start: &N,
    mut successors: FN,
    mut passable: FP,
    mut success: FS,
) -> Trace<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FP: FnMut(&N) -> bool,
    FS: FnMut(&N) -> bool,
{
    let mut records: SearchRecords<N, C> = FxIndexMap::default();
    records.insert(
        start.clone(),
        NodeRecord {
            parent: NO_PARENT,
            distance: Zero::zero(),
            heuristic: Zero::zero(),
            visited: true,
        },
    );
    let mut queue = VecDeque::from([0]);
    let mut visited = Vec::new();
    while let Some(index) = queue.pop_front() {
        let successors = {
            let Some((node, record)) = records.get_index_mut(index) else {
                continue;
            };
            if !passable(node) {
                record.visited = false;
                continue;
            }
            visited.push(node.clone());
            if success(node) {
                return Trace {
                    visited,
                    records,
                    goal: Some(index),
                };
            }
            let distance = record.distance;
            successors(node)
                .into_iter()
                .map(move |(n, c)| (n, distance + c))
                .collect::<SmallVec<[(N, C); 4]>>()
        };
        for (successor, distance) in successors {
            if let Vacant(e) = records.entry(successor) {
                queue.push_back(e.index());
                e.insert(NodeRecord {
                    parent: index,
                    distance,
                    heuristic: Zero::zero(),
                    visited: true,
                });
            }
        }
    }
    Trace {
        visited,
        records,
        goal: None,
    }
}

/// Depth-first search. Nodes are marked visited when popped, so a node may be pushed several
/// times. Successors are pushed in reverse so the first successor is explored first. Popped
/// nodes failing `passable` are discarded.
pub(crate) fn depth_first<N, C, FN, IN, FP, FS>(
    start: &N,
    mut successors: FN,
    mut passable: FP,
    mut success: FS,
) -> Trace<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FP: FnMut(&N) -> bool,
    FS: FnMut(&N) -> bool,
{
    let mut records: SearchRecords<N, C> = FxIndexMap::default();
    // Entries hold the record index of the node that pushed them.
    let mut stack: Vec<(N, usize, C)> = vec![(start.clone(), NO_PARENT, Zero::zero())];
    let mut visited = Vec::new();
    while let Some((node, parent, distance)) = stack.pop() {
        if records.contains_key(&node) || !passable(&node) {
            continue;
        }
        let (index, _) = records.insert_full(
            node.clone(),
            NodeRecord {
                parent,
                distance,
                heuristic: Zero::zero(),
                visited: true,
            },
        );
        visited.push(node.clone());
        if success(&node) {
            return Trace {
                visited,
                records,
                goal: Some(index),
            };
        }
        let next = successors(&node)
            .into_iter()
            .filter(|(n, _)| !records.contains_key(n))
            .collect::<SmallVec<[(N, C); 4]>>();
        for (n, c) in next.into_iter().rev() {
            stack.push((n, index, distance + c));
        }
    }
    Trace {
        visited,
        records,
        goal: None,
    }
}
