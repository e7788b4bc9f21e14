use std::ops::Index;

use grid::*;

use super::*;

/// Directed graph on objects induced by an allocation.
///
/// There is an arc `o -> p` when the agent holding `o` strictly prefers `p`.
/// A directed cycle is a chain of agents who could all improve by trading
/// along it, so an allocation is Pareto-efficient iff its graph is acyclic.
#[derive(Clone, Debug, PartialEq)]
pub struct ImprovementGraph {
    /// Adjacency matrix, `arcs[(o, p)]` is set for every arc `o -> p`.
    pub arcs: Grid<bool>,
}

impl ImprovementGraph {
    /// Builds the graph of `assignment` under `preferences`.
    ///
    /// `assignment[i]` is the object of agent `i`; both must have the same length.
    pub fn new(assignment: &[Object], preferences: &Preference) -> Self {
        let n = assignment.len();
        debug_assert_eq!(n, preferences.len(), "One assigned object per agent.");
        let mut arcs = Grid::<bool>::new(n, n);
        for (ag, &held) in assignment.iter().enumerate() {
            for &better in preferences.ranking(ag).iter().take_while(|&&o| o != held) {
                arcs[(held, better)] = true;
            }
        }
        ImprovementGraph { arcs }
    }

    /// Builds a graph from an arc list.
    pub fn from_arcs(node_count: usize, arcs: &[(Object, Object)]) -> Self {
        let mut grid = Grid::<bool>::new(node_count, node_count);
        for &(i, j) in arcs {
            debug_assert!(i < node_count && j < node_count, "Node number out of range");
            grid[(i, j)] = true;
        }
        ImprovementGraph { arcs: grid }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.arcs.rows()
    }

    /// Number of arcs.
    pub fn arc_count(&self) -> usize {
        self.arcs.iter().filter(|&&a| a).count()
    }

    /// Iterator over node identifiers.
    pub fn nodes(&self) -> impl Iterator<Item = Object> {
        0..self.node_count()
    }

    /// Iterator over arcs as `(source, target)`.
    pub fn arcs(&self) -> impl Iterator<Item = (Object, Object)> + '_ {
        self.arcs
            .indexed_iter()
            .filter(|&(_, &a)| a)
            .map(|((i, j), _)| (i, j))
    }

    /// Successors of `node`, in ascending order.
    pub fn successors(&self, node: Object) -> impl Iterator<Item = Object> + '_ {
        self.arcs
            .iter_row(node)
            .enumerate()
            .filter(|&(_, &a)| a)
            .map(|(j, _)| j)
    }

    /// Returns `true` if the graph contains a directed cycle.
    ///
    /// Depth-first search with an explicit stack. A node is `on_path` while it
    /// is on the stack and `explored` once all its successors are finished;
    /// reaching a node that is still on the path closes a cycle.
    pub fn has_cycle(&self) -> bool {
        let n = self.node_count();
        let mut on_path = vec![false; n];
        let mut explored = vec![false; n];
        // (node, next successor column to examine)
        let mut stack: Vec<(Object, usize)> = Vec::with_capacity(n);

        for root in self.nodes() {
            if explored[root] {
                continue;
            }
            on_path[root] = true;
            stack.push((root, 0));
            while let Some(top) = stack.last_mut() {
                let (node, col) = *top;
                match (col..n).find(|&j| self.arcs[(node, j)]) {
                    Some(next) => {
                        top.1 = next + 1;
                        if on_path[next] {
                            tracing::trace!(from = node, to = next, "improvement cycle closed");
                            return true;
                        }
                        if !explored[next] {
                            on_path[next] = true;
                            stack.push((next, 0));
                        }
                    }
                    None => {
                        stack.pop();
                        on_path[node] = false;
                        explored[node] = true;
                    }
                }
            }
        }
        false
    }
}

impl Index<(Object, Object)> for ImprovementGraph {
    type Output = bool;

    /// Returns whether the arc `(source, target)` exists.
    fn index(&self, index: (Object, Object)) -> &Self::Output {
        &self.arcs[index]
    }
}
