// crates/mh_setrun/tests/region_props.rs

//! 层级解析的性质测试

use mh_setrun::codes::CoordinateSystem;
use mh_setrun::domain::Domain;
use mh_setrun::region::RegionSet;
use mh_setrun::{LevelBounds, Region};
use proptest::prelude::*;

const MAX_LEVELS: u32 = 6;

fn domain() -> Domain {
    Domain::new(CoordinateSystem::LatLong, [93.0, 28.0], [95.6, 30.0], [255, 222]).unwrap()
}

fn region() -> impl Strategy<Value = Region> {
    (
        1..=MAX_LEVELS,
        1..=MAX_LEVELS,
        0.0..1000.0f64,
        0.0..1000.0f64,
        93.0..95.0f64,
        0.01..0.6f64,
        28.0..29.5f64,
        0.01..0.5f64,
    )
        .prop_map(|(a, b, t0, dt, x, w, y, h)| Region {
            min_level: a.min(b),
            max_level: a.max(b),
            t_start: t0,
            t_end: t0 + dt,
            x_lo: x,
            x_hi: x + w,
            y_lo: y,
            y_hi: y + h,
        })
}

fn set_of(regions: &[Region]) -> RegionSet {
    let domain = domain();
    let mut set = RegionSet::new(MAX_LEVELS);
    for r in regions {
        set.insert(*r, &domain).unwrap();
    }
    set
}

fn regions_and_shuffle() -> impl Strategy<Value = (Vec<Region>, Vec<Region>)> {
    prop::collection::vec(region(), 0..8).prop_flat_map(|regions| {
        let shuffled = Just(regions.clone()).prop_shuffle();
        (Just(regions), shuffled)
    })
}

proptest! {
    #[test]
    fn prop_resolution_ignores_insertion_order(
        (regions, shuffled) in regions_and_shuffle(),
        t in 0.0..2000.0f64,
        x in 93.0..95.6f64,
        y in 28.0..30.0f64,
    ) {
        let a = set_of(&regions).resolve(t, x, y);
        let b = set_of(&shuffled).resolve(t, x, y);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_resolution_stays_within_global_range(
        regions in prop::collection::vec(region(), 0..8),
        t in 0.0..2000.0f64,
        x in 93.0..95.6f64,
        y in 28.0..30.0f64,
    ) {
        let bounds = set_of(&regions).resolve(t, x, y);
        prop_assert!(bounds.min_level >= 1);
        prop_assert!(bounds.min_level <= bounds.max_level);
        prop_assert!(bounds.max_level <= MAX_LEVELS);
    }

    #[test]
    fn prop_uncovered_point_gets_full_range(
        regions in prop::collection::vec(region(), 0..8),
        t in 0.0..2000.0f64,
        x in 93.0..95.6f64,
        y in 28.0..30.0f64,
    ) {
        let set = set_of(&regions);
        if set.covering(t, x, y).is_empty() {
            prop_assert_eq!(set.resolve(t, x, y), LevelBounds::full(MAX_LEVELS));
        }
    }

    #[test]
    fn prop_covering_region_constrains_result(
        regions in prop::collection::vec(region(), 1..8),
        t in 0.0..2000.0f64,
        x in 93.0..95.6f64,
        y in 28.0..30.0f64,
    ) {
        let set = set_of(&regions);
        let bounds = set.resolve(t, x, y);
        for i in set.covering(t, x, y) {
            prop_assert!(bounds.max_level <= regions[i].max_level);
        }
    }
}
