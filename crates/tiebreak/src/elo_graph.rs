//! Head-to-head "defeated" graph and cyclic win group detection

use serde::Serialize;
use standings_core::CompetitorId;
use std::collections::BTreeSet;

use crate::stats::HeadToHead;

/// Three or more competitors whose head-to-head results form a directed cycle
/// (A beat B, B beat C, ..., back to A). Groups may overlap.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct CyclicWinGroup {
    pub members: BTreeSet<CompetitorId>,
}

impl CyclicWinGroup {
    pub fn contains(&self, id: &CompetitorId) -> bool {
        self.members.contains(id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Whether `a` and `b` are both members of some group
pub fn share_group(groups: &[CyclicWinGroup], a: &CompetitorId, b: &CompetitorId) -> bool {
    groups.iter().any(|group| group.contains(a) && group.contains(b))
}

/// Directed graph over a set of competitors with an edge A -> B when A holds a
/// winning head-to-head record against B. Split records add no edge.
#[derive(Debug, Clone)]
pub struct EloGraphAnalyzer {
    nodes: Vec<CompetitorId>,
    edges: Vec<Vec<usize>>,
}

impl EloGraphAnalyzer {
    pub fn new(members: &[CompetitorId], head_to_head: &HeadToHead) -> Self {
        let mut nodes = members.to_vec();
        nodes.sort();
        nodes.dedup();

        let edges = nodes
            .iter()
            .map(|a| {
                nodes
                    .iter()
                    .enumerate()
                    .filter(|(_, b)| head_to_head.beats(a, b))
                    .map(|(j, _)| j)
                    .collect()
            })
            .collect();

        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &[CompetitorId] {
        &self.nodes
    }

    /// Competitors `id` holds a winning record against
    pub fn defeated(&self, id: &CompetitorId) -> Vec<&CompetitorId> {
        match self.nodes.binary_search(id) {
            Ok(i) => self.edges[i].iter().map(|&j| &self.nodes[j]).collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    /// Strongly connected components (Tarjan), as node sets
    pub fn strongly_connected(&self) -> Vec<Vec<CompetitorId>> {
        self.components()
            .into_iter()
            .map(|component| component.into_iter().map(|i| self.nodes[i].clone()).collect())
            .collect()
    }

    /// Every distinct member set of a simple cycle of length >= 3
    pub fn cyclic_groups(&self) -> Vec<CyclicWinGroup> {
        let mut found: BTreeSet<BTreeSet<CompetitorId>> = BTreeSet::new();
        // Every cycle lies inside one component; a pair of nodes cannot form a
        // cycle on its own since a split record has no edge
        for component in self.components().iter().filter(|c| c.len() >= 3) {
            let mut allowed = vec![false; self.nodes.len()];
            for &i in component {
                allowed[i] = true;
            }
            let mut starts = component.clone();
            starts.sort_unstable();
            for start in starts {
                let mut path = vec![start];
                let mut on_path = vec![false; self.nodes.len()];
                on_path[start] = true;
                self.extend_path(start, start, &allowed, &mut path, &mut on_path, &mut found);
            }
        }
        found
            .into_iter()
            .map(|members| CyclicWinGroup { members })
            .collect()
    }

    /// DFS from the end of `path` through nodes numbered above `start`, so each
    /// cycle is walked only from its lowest node
    fn extend_path(
        &self,
        start: usize,
        current: usize,
        allowed: &[bool],
        path: &mut Vec<usize>,
        on_path: &mut [bool],
        found: &mut BTreeSet<BTreeSet<CompetitorId>>,
    ) {
        for &next in &self.edges[current] {
            if next == start {
                if path.len() >= 3 {
                    found.insert(path.iter().map(|&i| self.nodes[i].clone()).collect());
                }
            } else if next > start && allowed[next] && !on_path[next] {
                path.push(next);
                on_path[next] = true;
                self.extend_path(start, next, allowed, path, on_path, found);
                on_path[next] = false;
                path.pop();
            }
        }
    }

    fn components(&self) -> Vec<Vec<usize>> {
        let mut tarjan = Tarjan::new(&self.edges);
        for v in 0..self.nodes.len() {
            if tarjan.indices[v].is_none() {
                tarjan.visit(v);
            }
        }
        tarjan.components
    }
}

struct Tarjan<'a> {
    edges: &'a [Vec<usize>],
    next_index: usize,
    indices: Vec<Option<usize>>,
    lowlink: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
    components: Vec<Vec<usize>>,
}

impl<'a> Tarjan<'a> {
    fn new(edges: &'a [Vec<usize>]) -> Self {
        let n = edges.len();
        Self {
            edges,
            next_index: 0,
            indices: vec![None; n],
            lowlink: vec![0; n],
            on_stack: vec![false; n],
            stack: Vec::new(),
            components: Vec::new(),
        }
    }

    fn visit(&mut self, v: usize) {
        self.indices[v] = Some(self.next_index);
        self.lowlink[v] = self.next_index;
        self.next_index += 1;
        self.stack.push(v);
        self.on_stack[v] = true;

        let edges = self.edges;
        for &w in &edges[v] {
            match self.indices[w] {
                None => {
                    self.visit(w);
                    self.lowlink[v] = self.lowlink[v].min(self.lowlink[w]);
                }
                Some(index) if self.on_stack[w] => {
                    self.lowlink[v] = self.lowlink[v].min(index);
                }
                Some(_) => {}
            }
        }

        if self.indices[v] == Some(self.lowlink[v]) {
            let mut component = Vec::new();
            while let Some(w) = self.stack.pop() {
                self.on_stack[w] = false;
                component.push(w);
                if w == v {
                    break;
                }
            }
            self.components.push(component);
        }
    }
}

#[cfg(test)]
#[path = "elo_graph_tests.rs"]
mod elo_graph_tests;
