// crates/mh_setrun/tests/scenario_test.rs

//! 内置算例的装配与验证

use mh_setrun::gauge::Gauge;
use mh_setrun::scenario::{self, lake_3088_base, LAKE_3088_REGIONS};
use mh_setrun::schedule::{CheckpointStyle, OutputStyle, TimeSchedule};
use mh_setrun::{Environment, LevelBounds, Region, RunConfig, SetrunError};

// ============================================================
// 完整算例
// ============================================================

#[test]
fn test_lake_3088_builds_clean() {
    let config = scenario::lake_3088().unwrap();

    assert_eq!(config.gauges().len(), 622);
    assert_eq!(config.regions().len(), 13);
    assert!(config.warnings().is_empty(), "{:?}", config.warnings());

    let amr = config.amr();
    assert_eq!(amr.max_levels() - 1, 5);
    assert_eq!(amr.ratios().x.len(), 5);
    assert_eq!(amr.ratios().y.len(), 5);
    assert_eq!(amr.ratios().t.len(), 5);
}

#[test]
fn test_lake_3088_domain() {
    let config = scenario::lake_3088().unwrap();
    let domain = config.domain();
    assert_eq!(domain.lower(), [93.0, 28.0]);
    assert_eq!(domain.upper(), [95.6, 30.0]);
    assert_eq!(domain.num_cells(), [255, 222]);
}

#[test]
fn test_assemble_ignores_reserved_args() {
    let env = Environment::new("/opt/clawpack");
    let args = vec!["--future".to_string()];
    let config = scenario::assemble(&env, &args).unwrap();
    assert_eq!(config, scenario::lake_3088().unwrap());
}

// ============================================================
// 层级解析
// ============================================================

#[test]
fn test_two_disjoint_regions() {
    let mut builder = lake_3088_base().unwrap();
    builder.add_region(Region::from(LAKE_3088_REGIONS[0])).unwrap();
    builder.add_region(Region::from(LAKE_3088_REGIONS[1])).unwrap();
    let config = builder.build().unwrap();

    let r1 = config.resolve_levels(0.0, 94.90, 29.60);
    assert_eq!(r1, LevelBounds { min_level: 5, max_level: 5 });

    let r2 = config.resolve_levels(0.0, 94.85, 29.50);
    assert_eq!(r2, LevelBounds { min_level: 4, max_level: 5 });

    assert_eq!(config.resolve_levels(0.0, 93.5, 28.5), LevelBounds::full(6));
}

#[test]
fn test_lake_point_outside_all_regions() {
    let config = scenario::lake_3088().unwrap();
    assert_eq!(config.resolve_levels(0.0, 93.5, 28.5), LevelBounds::full(6));
    assert_eq!(config.resolve_levels(0.0, 94.90, 29.60), LevelBounds { min_level: 5, max_level: 5 });
}

// ============================================================
// 验证失败
// ============================================================

#[test]
fn test_gauge_outside_domain_rejected() {
    let mut builder = lake_3088_base().unwrap();
    builder
        .add_gauge(Gauge::from((0, 94.092882, 29.203368, 0.0, 226800.0, 660.0)))
        .unwrap();
    let err = builder
        .add_gauge(Gauge::from((1, 200.0, 29.0, 0.0, 226800.0, 660.0)))
        .unwrap_err();
    assert_eq!(err.key(), Some("gauges[id=1].position"));
}

#[test]
fn test_negative_checkpoint_time_rejected() {
    let base = scenario::lake_3088().unwrap();
    let result = TimeSchedule::builder(0.0)
        .with_output(OutputStyle::EquallySpaced {
            num_output_times: 2,
            t_final: 226800.0,
            output_t0: true,
        })
        .with_checkpoint(CheckpointStyle::Times { times: vec![-5.0] })
        .build(base.domain_scheme());

    match result {
        Err(SetrunError::Configuration(report)) => {
            assert_eq!(report.errors[0].key(), Some("time.checkpoint.times[0]"));
        }
        other => panic!("expected configuration error, got {:?}", other),
    }
}

#[test]
fn test_region_level_above_max_rejected() {
    let mut builder = lake_3088_base().unwrap();
    let err = builder
        .add_region(Region::from((1, 7, 0.0, 1e10, 94.0, 95.0, 29.0, 30.0)))
        .unwrap_err();
    assert_eq!(err.key(), Some("regions[0].levels"));
}

#[test]
fn test_builder_is_reusable_after_rejection() {
    let mut builder = lake_3088_base().unwrap();
    assert!(builder
        .add_region(Region::from((0, 3, 0.0, 1e10, 94.0, 95.0, 29.0, 30.0)))
        .is_err());
    builder
        .add_region(Region::from((1, 3, 0.0, 1e10, 94.0, 95.0, 29.0, 30.0)))
        .unwrap();
    let config: RunConfig = builder.build().unwrap();
    assert_eq!(config.regions().len(), 1);
}
