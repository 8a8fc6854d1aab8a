//! Unit tests for wf-world.
//!
//! Hand-built worlds pin exact behaviour; generated worlds check the
//! invariants every seed must satisfy.

#[cfg(test)]
mod helpers {
    use wf_core::{CityId, Coord};
    use crate::{World, WorldBuilder};

    /// A small hand-built world.
    ///
    /// Cities (x, y):
    ///   0:(0,0)  1:(3,0)  2:(3,4)  3:(0,4)  4:(10,10)
    ///
    /// Roads: 0-1 (3), 1-2 (4), 2-3 (3), 3-0 (4), 0-2 (5), 2-4 (~9.22)
    pub fn kite() -> (World, [CityId; 5]) {
        let mut b = WorldBuilder::new();
        let c0 = b.add_city(Coord::new(0, 0)).unwrap();
        let c1 = b.add_city(Coord::new(3, 0)).unwrap();
        let c2 = b.add_city(Coord::new(3, 4)).unwrap();
        let c3 = b.add_city(Coord::new(0, 4)).unwrap();
        let c4 = b.add_city(Coord::new(10, 10)).unwrap();
        b.add_road(c0, c1).unwrap();
        b.add_road(c1, c2).unwrap();
        b.add_road(c2, c3).unwrap();
        b.add_road(c3, c0).unwrap();
        b.add_road(c0, c2).unwrap();
        b.add_road(c2, c4).unwrap();
        (b.build(), [c0, c1, c2, c3, c4])
    }
}

// ── Builder & world structure ─────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use wf_core::{CityId, Coord, RoadId};
    use crate::{WorldBuilder, WorldError};

    #[test]
    fn empty_build() {
        let world = WorldBuilder::new().build();
        assert_eq!(world.city_count(), 0);
        assert_eq!(world.road_count(), 0);
        assert!(world.is_empty());
        assert!(world.is_connected());
        assert!(world.nearest_city(Coord::new(0, 0)).is_none());
    }

    #[test]
    fn road_is_mirrored() {
        let (world, [c0, c1, c2, ..]) = super::helpers::kite();
        assert_eq!(world.road_length(c0, c1), Some(3.0));
        assert_eq!(world.road_length(c1, c0), Some(3.0));
        assert_eq!(world.road_length(c0, c2), Some(5.0));
        assert!(world.city(c1).is_adjacent(c0));
        assert!(!world.city(c1).is_adjacent(c1));
    }

    #[test]
    fn road_registry_order() {
        let (world, [c0, c1, ..]) = super::helpers::kite();
        assert_eq!(world.road_count(), 6);
        let first = world.road(RoadId(0)).unwrap();
        assert_eq!((first.a, first.b, first.length), (c0, c1, 3.0));
        assert_eq!(first.other(c1), Some(c0));
        assert_eq!(first.other(CityId(4)), None);
        assert!(world.road(RoadId(6)).is_none());
    }

    #[test]
    fn rejects_bad_roads() {
        let mut b = WorldBuilder::new();
        let a = b.add_city(Coord::new(0, 0)).unwrap();
        let c = b.add_city(Coord::new(1, 1)).unwrap();
        b.add_road(a, c).unwrap();
        assert_eq!(b.add_road(c, a), Err(WorldError::InvalidRoad { a: c, b: a }));
        assert_eq!(b.add_road(a, a), Err(WorldError::InvalidRoad { a, b: a }));
        assert_eq!(b.add_road(a, CityId(9)), Err(WorldError::CityNotFound(CityId(9))));
        assert_eq!(b.road_count(), 1);
    }

    #[test]
    fn ids_past_u32_are_refused() {
        use crate::world::{next_city_id, next_road_id};

        let past = u32::MAX as usize + 1;
        assert_eq!(next_city_id(7), Ok(CityId(7)));
        assert_eq!(next_city_id(past), Err(WorldError::IdOverflow { what: "city", len: past }));
        assert_eq!(next_road_id(past), Err(WorldError::IdOverflow { what: "road", len: past }));
    }

    #[test]
    fn neighbours_keep_insertion_order() {
        let (world, [c0, c1, c2, c3, _]) = super::helpers::kite();
        assert_eq!(world.city(c0).neighbours(), &[c1, c3, c2]);
    }

    #[test]
    fn sorted_neighbours_ascend_by_length() {
        let (world, [c0, c1, c2, c3, c4]) = super::helpers::kite();
        assert_eq!(world.city(c2).sorted_neighbours(), &[c3, c1, c0, c4]);
        // Cached: a second call hands back the same slice.
        let first = world.city(c0).sorted_neighbours().as_ptr();
        assert_eq!(world.city(c0).sorted_neighbours().as_ptr(), first);
        assert_eq!(world.city(c0).sorted_neighbours(), &[c1, c3, c2]);
    }

    #[test]
    fn connectivity_check() {
        let (world, _) = super::helpers::kite();
        assert!(world.is_connected());

        let mut b = WorldBuilder::new();
        let a = b.add_city(Coord::new(0, 0)).unwrap();
        let c = b.add_city(Coord::new(5, 0)).unwrap();
        b.add_city(Coord::new(9, 9)).unwrap();
        b.add_road(a, c).unwrap();
        assert!(!b.build().is_connected());
    }

    #[test]
    fn get_city_reports_missing() {
        let (world, _) = super::helpers::kite();
        assert!(world.get_city(CityId(4)).is_ok());
        assert_eq!(world.get_city(CityId(5)).unwrap_err(), WorldError::CityNotFound(CityId(5)));
        assert!(!world.contains(CityId(5)));
    }
}

// ── Spatial index ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod snap {
    use wf_core::Coord;

    #[test]
    fn nearest_exact_and_close() {
        let (world, [c0, _, c2, _, c4]) = super::helpers::kite();
        assert_eq!(world.nearest_city(Coord::new(0, 0)), Some(c0));
        assert_eq!(world.nearest_city(Coord::new(4, 5)), Some(c2));
        assert_eq!(world.nearest_city(Coord::new(100, 100)), Some(c4));
    }

    #[test]
    fn k_nearest_order() {
        let (world, [c0, c1, c2, c3, c4]) = super::helpers::kite();
        let nearest = world.k_nearest_cities(Coord::new(-1, -1), 5);
        assert_eq!(nearest.len(), 5);
        assert_eq!(nearest[0], c0);
        // c1 (dist² 17) and c3 (dist² 26) come before c2 (41), c4 last.
        assert_eq!(&nearest[1..], &[c1, c3, c2, c4]);
    }
}

// ── Paths ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod path {
    use std::time::Duration;

    use wf_core::CityId;
    use crate::{Path, WorldError};

    #[test]
    fn new_path_is_trivial() {
        let p = Path::new(CityId(3));
        assert_eq!(p.start(), CityId(3));
        assert_eq!(p.end(), CityId(3));
        assert_eq!(p.len(), 1);
        assert_eq!(p.distance(), 0.0);
        assert!(p.elapsed().is_none());
    }

    #[test]
    fn extend_accumulates() {
        let (world, [c0, c1, c2, c3, _]) = super::helpers::kite();
        let mut p = Path::new(c0);
        p.extend(&world, c1).unwrap().extend(&world, c2).unwrap();
        p.extend(&world, c3).unwrap();
        assert_eq!(p.cities(), &[c0, c1, c2, c3]);
        assert_eq!(p.distance(), 10.0);
    }

    #[test]
    fn extend_rejects_non_neighbour() {
        let (world, [c0, _, _, _, c4]) = super::helpers::kite();
        let mut p = Path::new(c0);
        assert_eq!(
            p.extend(&world, c4).unwrap_err(),
            WorldError::NotAdjacent { from: c0, to: c4 }
        );
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn extended_leaves_original() {
        let (world, [c0, c1, ..]) = super::helpers::kite();
        let p = Path::new(c0);
        let q = p.extended(&world, c1).unwrap();
        assert_eq!(p.len(), 1);
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn truncate_restores_distance() {
        let (world, [c0, c1, c2, ..]) = super::helpers::kite();
        let mut p = Path::new(c0);
        p.extend(&world, c1).unwrap();
        p.extend(&world, c2).unwrap();
        p.truncate(2);
        assert_eq!(p.cities(), &[c0, c1]);
        assert_eq!(p.distance(), 3.0);
        p.truncate(0);
        assert_eq!(p.cities(), &[c0]);
        assert_eq!(p.distance(), 0.0);
    }

    #[test]
    fn merge_reverses_second_half() {
        let (world, [c0, c1, c2, _, c4]) = super::helpers::kite();
        // 0 → 1 → 2  and  4 → 2
        let mut left = Path::new(c0);
        left.extend(&world, c1).unwrap().extend(&world, c2).unwrap();
        let mut right = Path::new(c4);
        right.extend(&world, c2).unwrap();

        let merged = left.merge(&world, &right).unwrap();
        assert_eq!(merged.cities(), &[c0, c1, c2, c4]);
        let expected = 3.0 + 4.0 + world.road_length(c2, c4).unwrap();
        assert!((merged.distance() - expected).abs() < 1e-12);
    }

    #[test]
    fn merge_with_trivial_other() {
        let (world, [c0, c1, ..]) = super::helpers::kite();
        let mut left = Path::new(c0);
        left.extend(&world, c1).unwrap();
        let merged = left.merge(&world, &Path::new(c1)).unwrap();
        assert_eq!(merged, left);
    }

    #[test]
    fn merge_requires_shared_end() {
        let (world, [c0, c1, c2, ..]) = super::helpers::kite();
        let left = Path::new(c0).extended(&world, c1).unwrap();
        let right = Path::new(c2);
        assert_eq!(
            left.merge(&world, &right).unwrap_err(),
            WorldError::PathMismatch { left: c1, right: c2 }
        );
    }

    #[test]
    fn tour_detection() {
        let (world, [c0, c1, c2, c3, _]) = super::helpers::kite();
        let mut p = Path::new(c0);
        for c in [c1, c2, c3, c0] {
            p.extend(&world, c).unwrap();
        }
        assert!(p.is_tour(4));
        assert!(!p.is_tour(5));

        let mut back = Path::new(c0);
        back.extend(&world, c1).unwrap().extend(&world, c0).unwrap();
        assert!(back.is_tour(2));
        assert!(!back.is_tour(3));
    }

    #[test]
    fn elapsed_is_carried() {
        let p = Path::new(CityId(0)).with_elapsed(Duration::from_millis(5));
        assert_eq!(p.elapsed(), Some(Duration::from_millis(5)));
    }
}

// ── Spanning tree ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod mst {
    use wf_core::{CityId, Coord};
    use crate::{SpanningTree, WorldBuilder};

    #[test]
    fn kite_tree_is_minimal() {
        let (world, [c0, c1, c2, c3, c4]) = super::helpers::kite();
        let tree = world.spanning_tree();
        assert!(tree.is_spanning());
        assert_eq!(tree.root(), Some(c0));
        assert_eq!(tree.edges().len(), 4);
        // 0-1 (3), then 0-3 (4) ties 1-2 (4) and was found first, then
        // 3-2 (3) beats 1-2 and 0-2, then 2-4.
        assert_eq!(tree.order(), &[c0, c1, c3, c2, c4]);
        let expected = 3.0 + 4.0 + 3.0 + world.road_length(c2, c4).unwrap();
        assert!((tree.total_length() - expected).abs() < 1e-12);
        assert_eq!(tree.node(c2).unwrap().neighbours()[0].0, c3);
        assert!(tree.contains(c1));
    }

    #[test]
    fn tree_is_memoized() {
        let (world, _) = super::helpers::kite();
        let a = world.spanning_tree() as *const SpanningTree;
        let b = world.spanning_tree() as *const SpanningTree;
        assert_eq!(a, b);
    }

    #[test]
    fn ties_go_to_first_found() {
        // Square with equal sides: from 0, roads to 1 and 3 are both 5.
        let mut b = WorldBuilder::new();
        let c0 = b.add_city(Coord::new(0, 0)).unwrap();
        let c1 = b.add_city(Coord::new(5, 0)).unwrap();
        let c2 = b.add_city(Coord::new(5, 5)).unwrap();
        let c3 = b.add_city(Coord::new(0, 5)).unwrap();
        b.add_road(c0, c3).unwrap();
        b.add_road(c0, c1).unwrap();
        b.add_road(c1, c2).unwrap();
        b.add_road(c2, c3).unwrap();
        let world = b.build();
        let tree = world.spanning_tree();
        assert_eq!(tree.order(), &[c0, c3, c1, c2]);
        assert_eq!(tree.edges()[2].parent, c3);
    }

    #[test]
    fn disconnected_graph_gives_partial_tree() {
        let mut b = WorldBuilder::new();
        let a = b.add_city(Coord::new(0, 0)).unwrap();
        let c = b.add_city(Coord::new(1, 0)).unwrap();
        b.add_city(Coord::new(50, 50)).unwrap();
        b.add_road(a, c).unwrap();
        let world = b.build();
        let tree = world.spanning_tree();
        assert!(!tree.is_spanning());
        assert_eq!(tree.len(), 2);
        assert!(!tree.contains(CityId(2)));
    }

    #[test]
    fn empty_world_gives_empty_tree() {
        let world = WorldBuilder::new().build();
        let tree = world.spanning_tree();
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        assert!(tree.is_spanning());
    }
}

// ── Generation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod generate {
    use std::collections::HashSet;

    use wf_core::{CityId, ConnectionStrategy, CoreError, WorldConfig, WorldRng};
    use crate::{World, WorldError};

    fn cfg(n: usize, f: f64, strategy: ConnectionStrategy, seed: u64) -> WorldConfig {
        WorldConfig::new(n, f, strategy).with_seed(seed)
    }

    /// `true` if the spanning tree's edges form one acyclic component.
    fn is_tree(world: &World) -> bool {
        let n = world.city_count();
        let mut parent: Vec<usize> = (0..n).collect();
        fn find(parent: &mut [usize], mut x: usize) -> usize {
            while parent[x] != x {
                parent[x] = parent[parent[x]];
                x = parent[x];
            }
            x
        }
        for e in world.spanning_tree().edges() {
            let (a, b) = (find(&mut parent, e.parent.index()), find(&mut parent, e.child.index()));
            if a == b {
                return false;
            }
            parent[a] = b;
        }
        world.spanning_tree().edges().len() == n.saturating_sub(1)
    }

    #[test]
    fn generated_worlds_are_connected() {
        for strategy in ConnectionStrategy::ALL {
            for seed in 0..20 {
                let world = World::generate(&cfg(30, 0.15, strategy, seed)).unwrap();
                assert_eq!(world.city_count(), 30);
                assert!(world.is_connected(), "{strategy} seed {seed}");
                assert!(is_tree(&world), "{strategy} seed {seed}");
            }
        }
    }

    #[test]
    fn roads_are_symmetric_and_euclidean() {
        for strategy in ConnectionStrategy::ALL {
            let world = World::generate(&cfg(25, 0.3, strategy, 5)).unwrap();
            for road in world.roads() {
                let (a, b) = (world.city(road.a), world.city(road.b));
                assert_eq!(a.distance_to(b.id), Some(road.length));
                assert_eq!(b.distance_to(a.id), Some(road.length));
                assert_eq!(road.length, a.pos.distance(b.pos));
            }
            let degree_sum: usize = world.cities().iter().map(|c| c.degree()).sum();
            assert_eq!(degree_sum, 2 * world.road_count());
        }
    }

    #[test]
    fn coordinates_in_bounds() {
        let world = World::generate(&cfg(100, 0.1, ConnectionStrategy::Random, 1)).unwrap();
        assert!(world.cities().iter().all(|c| c.pos.in_bounds()));
    }

    #[test]
    fn random_lays_exact_road_count() {
        let config = cfg(40, 0.2, ConnectionStrategy::Random, 9);
        let world = World::generate(&config).unwrap();
        assert_eq!(world.road_count(), config.random_road_count());
        let pairs: HashSet<(CityId, CityId)> = world
            .roads()
            .iter()
            .map(|r| (r.a.min(r.b), r.a.max(r.b)))
            .collect();
        assert_eq!(pairs.len(), world.road_count());
    }

    #[test]
    fn full_fraction_is_complete_graph() {
        for strategy in ConnectionStrategy::ALL {
            let world = World::generate(&cfg(7, 1.0, strategy, 2)).unwrap();
            assert_eq!(world.road_count(), 21, "{strategy}");
            assert!(world.cities().iter().all(|c| c.degree() == 6));
        }
    }

    #[test]
    fn nearest_reaches_target_degree() {
        let config = cfg(30, 0.2, ConnectionStrategy::Nearest, 4);
        let world = World::generate(&config).unwrap();
        let target = config.nearest_target_degree();
        assert!(world.cities().iter().all(|c| c.degree() >= target));
    }

    #[test]
    fn nearest_prefers_closest() {
        // With target degree 1 the first city must be joined to its closest
        // other city.
        let config = cfg(12, 0.05, ConnectionStrategy::Nearest, 21);
        let mut rng = WorldRng::new(config.seed);
        let world = crate::generate::generate_once(&config, &mut rng).unwrap();
        let first = world.city(CityId(0));
        let closest = world
            .cities()
            .iter()
            .filter(|c| c.id != first.id)
            .min_by_key(|c| (first.pos.distance_2(c.pos), c.id))
            .unwrap();
        assert!(first.is_adjacent(closest.id));
    }

    #[test]
    fn same_seed_same_world() {
        let config = cfg(20, 0.2, ConnectionStrategy::Random, 77);
        let a = World::generate(&config).unwrap();
        let b = World::generate(&config).unwrap();
        let pos_a: Vec<_> = a.cities().iter().map(|c| c.pos).collect();
        let pos_b: Vec<_> = b.cities().iter().map(|c| c.pos).collect();
        assert_eq!(pos_a, pos_b);
        assert_eq!(a.roads(), b.roads());
    }

    #[test]
    fn single_city_world() {
        let world = World::generate(&cfg(1, 1.0, ConnectionStrategy::Random, 0)).unwrap();
        assert_eq!(world.city_count(), 1);
        assert_eq!(world.road_count(), 0);
        assert!(world.is_connected());
    }

    #[test]
    fn invalid_config_is_reported() {
        let err = World::generate(&cfg(10, 0.0, ConnectionStrategy::Random, 0)).unwrap_err();
        assert_eq!(err, WorldError::Config(CoreError::InvalidFraction(0.0)));
    }

    #[test]
    fn too_few_random_roads_fail_fast() {
        // 20 cities, 190 pairs, ceil(0.05 × 190) = 10 < 19.
        let err = World::generate(&cfg(20, 0.05, ConnectionStrategy::Random, 0)).unwrap_err();
        assert_eq!(err, WorldError::Unconnectable { roads: 10, cities: 20 });
    }

    #[test]
    fn attempt_limit_is_enforced() {
        // Target degree 1 pairs cities off with their nearest neighbour;
        // 40 scattered cities essentially never end up in one component.
        let config = WorldConfig {
            max_attempts: 3,
            ..cfg(40, 0.01, ConnectionStrategy::Nearest, 8)
        };
        assert_eq!(World::generate(&config).unwrap_err(), WorldError::Disconnected { attempts: 3 });
    }
}
