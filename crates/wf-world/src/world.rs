//! The world graph and its builder.
//!
//! # Data layout
//!
//! Cities live in a `Vec<City>` indexed by `CityId`, each carrying its own
//! adjacency.  Roads are additionally recorded in a registry indexed by
//! `RoadId`, in the order they were laid.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps a `Coord` to the nearest `CityId`, so callers
//! can turn arbitrary grid points into query endpoints.
//!
//! # Spanning tree
//!
//! The minimum spanning tree is derived on first use and memoized for the
//! lifetime of the world.  A world never changes after construction, so the
//! cached tree never needs invalidating.

use std::collections::VecDeque;
use std::sync::OnceLock;

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use wf_core::{CityId, Coord, RoadId, WorldConfig, WorldRng};

use crate::city::{City, Road};
use crate::generate;
use crate::mst::SpanningTree;
use crate::{WorldError, WorldResult};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a city position with its `CityId`.
#[derive(Clone)]
struct CityEntry {
    point: [i64; 2],
    id:    CityId,
}

impl RTreeObject for CityEntry {
    type Envelope = AABB<[i64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for CityEntry {
    fn distance_2(&self, point: &[i64; 2]) -> i64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

#[inline]
fn point_of(pos: Coord) -> [i64; 2] {
    [i64::from(pos.x), i64::from(pos.y)]
}

// ── World ─────────────────────────────────────────────────────────────────────

/// A set of cities joined by undirected roads.
///
/// Build one with [`World::generate`] (random layout, guaranteed connected)
/// or by hand with [`WorldBuilder`].
pub struct World {
    cities:      Vec<City>,
    roads:       Vec<Road>,
    spatial_idx: RTree<CityEntry>,
    tree:        OnceLock<SpanningTree>,
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("cities", &self.cities.len())
            .field("roads", &self.roads.len())
            .field("tree_built", &self.tree.get().is_some())
            .finish()
    }
}

impl World {
    /// Generate a connected world from `config`, seeding a fresh RNG from
    /// `config.seed`.
    pub fn generate(config: &WorldConfig) -> WorldResult<World> {
        let mut rng = WorldRng::new(config.seed);
        generate::generate(config, &mut rng)
    }

    /// Generate a connected world drawing from a caller-owned RNG.
    pub fn generate_with(config: &WorldConfig, rng: &mut WorldRng) -> WorldResult<World> {
        generate::generate(config, rng)
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    #[inline]
    pub fn contains(&self, id: CityId) -> bool {
        id.index() < self.cities.len()
    }

    /// The city with identity `id`.
    ///
    /// # Panics
    /// Panics if `id` is not in the world; use [`get_city`](Self::get_city)
    /// for unchecked input.
    #[inline]
    pub fn city(&self, id: CityId) -> &City {
        &self.cities[id.index()]
    }

    pub fn get_city(&self, id: CityId) -> WorldResult<&City> {
        self.cities.get(id.index()).ok_or(WorldError::CityNotFound(id))
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn road(&self, id: RoadId) -> Option<&Road> {
        self.roads.get(id.index())
    }

    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// Length of the road from `from` to `to`, or `None` if they are not
    /// neighbours (or `from` is not in the world).
    #[inline]
    pub fn road_length(&self, from: CityId, to: CityId) -> Option<f64> {
        self.cities.get(from.index())?.distance_to(to)
    }

    // ── Structure ─────────────────────────────────────────────────────────

    /// `true` if every city is reachable from every other city.
    ///
    /// Breadth-first search from the first city; an empty world is
    /// trivially connected.
    pub fn is_connected(&self) -> bool {
        let Some(first) = self.cities.first() else {
            return true;
        };
        let mut seen = vec![false; self.cities.len()];
        let mut queue = VecDeque::from([first.id]);
        seen[first.id.index()] = true;
        let mut reached = 1;

        while let Some(id) = queue.pop_front() {
            for &next in self.city(id).neighbours() {
                if !seen[next.index()] {
                    seen[next.index()] = true;
                    reached += 1;
                    queue.push_back(next);
                }
            }
        }
        reached == self.cities.len()
    }

    /// The minimum spanning tree, built with Prim's algorithm on first call.
    pub fn spanning_tree(&self) -> &SpanningTree {
        self.tree.get_or_init(|| {
            let tree = SpanningTree::prim(&self.cities);
            log::debug!(
                "spanning tree built: {} of {} cities, total length {:.3}",
                tree.len(),
                self.cities.len(),
                tree.total_length()
            );
            tree
        })
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The city closest to `pos`.  `None` only for an empty world.
    pub fn nearest_city(&self, pos: Coord) -> Option<CityId> {
        self.spatial_idx.nearest_neighbor(&point_of(pos)).map(|e| e.id)
    }

    /// Up to `k` cities closest to `pos`, by ascending distance.
    pub fn k_nearest_cities(&self, pos: Coord, k: usize) -> Vec<CityId> {
        self.spatial_idx
            .nearest_neighbor_iter(&point_of(pos))
            .take(k)
            .map(|e| e.id)
            .collect()
    }
}

// ── WorldBuilder ──────────────────────────────────────────────────────────────

/// Assemble a [`World`] city by city and road by road, then call
/// [`build`](Self::build).
///
/// Road lengths are always the Euclidean distance between the two cities,
/// and every road is recorded on both ends.
///
/// # Example
///
/// ```
/// use wf_core::Coord;
/// use wf_world::WorldBuilder;
///
/// let mut b = WorldBuilder::new();
/// let a = b.add_city(Coord::new(0, 0)).unwrap();
/// let c = b.add_city(Coord::new(3, 4)).unwrap();
/// b.add_road(a, c).unwrap();
/// let world = b.build();
/// assert_eq!(world.road_length(c, a), Some(5.0));
/// ```
pub struct WorldBuilder {
    cities: Vec<City>,
    roads:  Vec<Road>,
}

impl WorldBuilder {
    pub fn new() -> Self {
        Self { cities: Vec::new(), roads: Vec::new() }
    }

    pub fn with_capacity(cities: usize, roads: usize) -> Self {
        Self {
            cities: Vec::with_capacity(cities),
            roads:  Vec::with_capacity(roads),
        }
    }

    /// Add a city and return its `CityId` (sequential from 0).
    pub fn add_city(&mut self, pos: Coord) -> WorldResult<CityId> {
        let id = next_city_id(self.cities.len())?;
        self.cities.push(City::new(id, pos));
        Ok(id)
    }

    /// Lay an undirected road between `a` and `b`.
    ///
    /// Fails for unknown cities, self-loops, and roads that already exist.
    pub fn add_road(&mut self, a: CityId, b: CityId) -> WorldResult<RoadId> {
        let pos_a = self.pos(a)?;
        let pos_b = self.pos(b)?;
        if a == b || self.cities[a.index()].is_adjacent(b) {
            return Err(WorldError::InvalidRoad { a, b });
        }

        let id = next_road_id(self.roads.len())?;
        let length = pos_a.distance(pos_b);
        self.cities[a.index()].connect(b, length);
        self.cities[b.index()].connect(a, length);
        self.roads.push(Road { a, b, length });
        Ok(id)
    }

    pub fn pos(&self, id: CityId) -> WorldResult<Coord> {
        self.cities
            .get(id.index())
            .map(|c| c.pos)
            .ok_or(WorldError::CityNotFound(id))
    }

    pub fn is_adjacent(&self, a: CityId, b: CityId) -> bool {
        self.cities.get(a.index()).is_some_and(|c| c.is_adjacent(b))
    }

    pub fn degree(&self, id: CityId) -> usize {
        self.cities.get(id.index()).map_or(0, City::degree)
    }

    pub fn city_count(&self) -> usize { self.cities.len() }
    pub fn road_count(&self) -> usize { self.roads.len() }

    /// Consume the builder and produce a [`World`].
    ///
    /// No connectivity check happens here; see [`World::is_connected`].
    pub fn build(self) -> World {
        let entries: Vec<CityEntry> = self
            .cities
            .iter()
            .map(|c| CityEntry { point: point_of(c.pos), id: c.id })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        World {
            cities: self.cities,
            roads:  self.roads,
            spatial_idx,
            tree:   OnceLock::new(),
        }
    }
}

pub(crate) fn next_city_id(len: usize) -> WorldResult<CityId> {
    CityId::from_index(len).ok_or(WorldError::IdOverflow { what: "city", len })
}

pub(crate) fn next_road_id(len: usize) -> WorldResult<RoadId> {
    RoadId::from_index(len).ok_or(WorldError::IdOverflow { what: "road", len })
}

impl Default for WorldBuilder {
    fn default() -> Self {
        Self::new()
    }
}
