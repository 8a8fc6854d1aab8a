//! Minimum spanning tree via Prim's algorithm.
//!
//! The tree is stored as its own set of lightweight nodes (identity,
//! position, tree-only adjacency), independent of the cities' road
//! adjacency.  Solvers read it to order their traversal but always walk the
//! world's real roads.

use wf_core::{CityId, Coord};

use crate::city::City;

/// A tree node mirroring one city.
#[derive(Clone, Debug)]
pub struct TreeNode {
    pub id:  CityId,
    pub pos: Coord,
    neighbours: Vec<(CityId, f64)>,
}

impl TreeNode {
    fn new(city: &City) -> Self {
        Self { id: city.id, pos: city.pos, neighbours: Vec::new() }
    }

    /// Tree neighbours with edge lengths, in the order the edges were added
    /// (the parent first, for every node but the root).
    pub fn neighbours(&self) -> &[(CityId, f64)] {
        &self.neighbours
    }
}

/// An edge of the tree, oriented from the node already in the tree to the
/// node it brought in.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TreeEdge {
    pub parent: CityId,
    pub child:  CityId,
    pub length: f64,
}

/// A spanning tree (or, on a disconnected graph, a tree over the root's
/// component).
#[derive(Clone, Debug)]
pub struct SpanningTree {
    /// Indexed by `CityId`; `None` for cities the tree never reached.
    nodes: Vec<Option<TreeNode>>,
    /// Cities in the order they joined the tree.
    order: Vec<CityId>,
    edges: Vec<TreeEdge>,
}

/// A city reachable from the tree, with the tree node it would hang from.
#[derive(Copy, Clone)]
struct Candidate {
    city:   CityId,
    parent: CityId,
    dist:   f64,
}

impl SpanningTree {
    /// Build the tree rooted at the first city.
    ///
    /// The frontier holds one entry per (reachable city, tree neighbour)
    /// pair.  Each step takes the first entry with the smallest distance,
    /// attaches its city, drops every other entry for that city, and adds
    /// the city's own neighbours that are not yet in the tree.
    pub fn prim(cities: &[City]) -> Self {
        let mut tree = SpanningTree {
            nodes: vec![None; cities.len()],
            order: Vec::with_capacity(cities.len()),
            edges: Vec::with_capacity(cities.len().saturating_sub(1)),
        };
        let Some(root) = cities.first() else {
            return tree;
        };

        tree.nodes[root.id.index()] = Some(TreeNode::new(root));
        tree.order.push(root.id);
        let mut frontier: Vec<Candidate> = Self::reachable_from(root, &tree);

        while tree.order.len() < cities.len() {
            let Some(best) = first_minimum(&frontier) else {
                break; // disconnected: the root's component is exhausted
            };
            let Candidate { city, parent, dist } = frontier[best];

            let city_ref = &cities[city.index()];
            let mut node = TreeNode::new(city_ref);
            node.neighbours.push((parent, dist));
            if let Some(p) = tree.nodes[parent.index()].as_mut() {
                p.neighbours.push((city, dist));
            }
            tree.nodes[city.index()] = Some(node);
            tree.order.push(city);
            tree.edges.push(TreeEdge { parent, child: city, length: dist });

            frontier.retain(|c| c.city != city);
            frontier.extend(Self::reachable_from(city_ref, &tree));
        }
        tree
    }

    fn reachable_from(city: &City, tree: &SpanningTree) -> Vec<Candidate> {
        city.neighbours()
            .iter()
            .filter(|&&n| !tree.contains(n))
            .filter_map(|&n| {
                city.distance_to(n).map(|dist| Candidate { city: n, parent: city.id, dist })
            })
            .collect()
    }

    /// The root, or `None` for an empty tree.
    pub fn root(&self) -> Option<CityId> {
        self.order.first().copied()
    }

    /// Number of cities in the tree.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// `true` if the tree reached every city it was built over.
    pub fn is_spanning(&self) -> bool {
        self.order.len() == self.nodes.len()
    }

    pub fn contains(&self, id: CityId) -> bool {
        self.nodes.get(id.index()).is_some_and(Option::is_some)
    }

    pub fn node(&self, id: CityId) -> Option<&TreeNode> {
        self.nodes.get(id.index())?.as_ref()
    }

    /// Cities in the order they joined the tree.
    pub fn order(&self) -> &[CityId] {
        &self.order
    }

    pub fn edges(&self) -> &[TreeEdge] {
        &self.edges
    }

    pub fn total_length(&self) -> f64 {
        self.edges.iter().map(|e| e.length).sum()
    }
}

/// Index of the first entry with the smallest distance.
fn first_minimum(frontier: &[Candidate]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, c) in frontier.iter().enumerate() {
        match best {
            Some(b) if frontier[b].dist <= c.dist => {}
            _ => best = Some(i),
        }
    }
    best
}
