// crates/mh_setrun/src/config.rs

//! 运行配置汇总
//!
//! 构建顺序：计算域与格式 → 时间计划 → AMR 层级 → 区域、测站与外部来源。
//! 前面的结果作为后面的验证上下文传入（计算域用于区域与测站的范围检查，
//! `max_levels` 用于所有层级范围的检查）。
//!
//! 条目在 `add_*` 时立即验证；[`RunConfigBuilder::build`] 最后做一次跨组件复核，
//! 之后得到的 [`RunConfig`] 不可再修改。

use tracing::{debug, warn};

use crate::amr::AmrHierarchy;
use crate::domain::Domain;
use crate::error::{ConfigError, ConfigResult, SetrunResult};
use crate::gauge::{Gauge, GaugeSet};
use crate::geo::{GeoPhysics, RefinementData};
use crate::region::{LevelBounds, Region, RegionSet};
use crate::schedule::TimeSchedule;
use crate::scheme::DomainScheme;
use crate::sources::{DtopoSource, FgmaxSource, FixedGrid, PerturbationSource, Sources, TopoSource};
use crate::validation::{ValidationReport, ValidationWarning};

/// 已验证的完整运行配置
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    domain_scheme: DomainScheme,
    schedule: TimeSchedule,
    amr: AmrHierarchy,
    geo: GeoPhysics,
    refinement: RefinementData,
    regions: RegionSet,
    gauges: GaugeSet,
    sources: Sources,
    warnings: Vec<ValidationWarning>,
}

impl RunConfig {
    /// 开始汇总
    pub fn builder(domain_scheme: DomainScheme, schedule: TimeSchedule, amr: AmrHierarchy) -> RunConfigBuilder {
        RunConfigBuilder::new(domain_scheme, schedule, amr)
    }

    /// 计算域与格式
    pub fn domain_scheme(&self) -> &DomainScheme {
        &self.domain_scheme
    }

    /// 计算域
    pub fn domain(&self) -> &Domain {
        self.domain_scheme.domain()
    }

    /// 时间计划
    pub fn schedule(&self) -> &TimeSchedule {
        &self.schedule
    }

    /// AMR 层级
    pub fn amr(&self) -> &AmrHierarchy {
        &self.amr
    }

    /// 地球物理参数
    pub fn geo(&self) -> &GeoPhysics {
        &self.geo
    }

    /// 按水深的加密控制
    pub fn refinement(&self) -> &RefinementData {
        &self.refinement
    }

    /// 加密区域
    pub fn regions(&self) -> &RegionSet {
        &self.regions
    }

    /// 测站（编号升序）
    pub fn gauges(&self) -> &GaugeSet {
        &self.gauges
    }

    /// 外部来源
    pub fn sources(&self) -> &Sources {
        &self.sources
    }

    /// 构建时产生的警告
    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }

    /// `(t, x, y)` 处允许的层级范围
    pub fn resolve_levels(&self, t: f64, x: f64, y: f64) -> LevelBounds {
        self.regions.resolve(t, x, y)
    }
}

/// [`RunConfig`] 构建器
#[derive(Debug, Clone)]
pub struct RunConfigBuilder {
    domain_scheme: DomainScheme,
    schedule: TimeSchedule,
    amr: AmrHierarchy,
    geo: GeoPhysics,
    refinement: RefinementData,
    regions: RegionSet,
    /// 已提交（含被拒绝）的区域个数，用作错误键中的输入序号
    regions_submitted: usize,
    gauges: GaugeSet,
    sources: Sources,
}

impl RunConfigBuilder {
    /// 由已验证的三个子模型开始
    pub fn new(domain_scheme: DomainScheme, schedule: TimeSchedule, amr: AmrHierarchy) -> Self {
        let regions = RegionSet::new(amr.max_levels());
        Self {
            domain_scheme,
            schedule,
            amr,
            geo: GeoPhysics::default(),
            refinement: RefinementData::default(),
            regions,
            regions_submitted: 0,
            gauges: GaugeSet::new(),
            sources: Sources::default(),
        }
    }

    /// 设置地球物理参数
    pub fn with_geo(mut self, geo: GeoPhysics) -> Self {
        self.geo = geo;
        self
    }

    /// 设置按水深的加密控制
    pub fn with_refinement(mut self, refinement: RefinementData) -> Self {
        self.refinement = refinement;
        self
    }

    fn max_levels(&self) -> u32 {
        self.amr.max_levels()
    }

    /// 添加加密区域
    ///
    /// 错误键 `regions[i]` 中的 `i` 是第几次提交（从 0 开始，被拒绝的也计数），
    /// 不是存储位置。
    pub fn add_region(&mut self, region: Region) -> ConfigResult<()> {
        let index = self.regions_submitted;
        self.regions_submitted += 1;
        self.regions.insert_labeled(region, self.domain_scheme.domain(), index)
    }

    /// 批量添加区域，所有出错条目汇总到同一份报告
    pub fn add_regions<I>(&mut self, regions: I) -> Result<(), ValidationReport>
    where
        I: IntoIterator<Item = Region>,
    {
        let mut report = ValidationReport::new();
        for region in regions {
            report.record(self.add_region(region));
        }
        if report.has_errors() {
            Err(report)
        } else {
            Ok(())
        }
    }

    /// 添加测站
    pub fn add_gauge(&mut self, gauge: Gauge) -> ConfigResult<()> {
        self.gauges.insert(gauge, self.domain_scheme.domain())
    }

    /// 批量添加测站，所有出错条目汇总到同一份报告
    pub fn add_gauges<I>(&mut self, gauges: I) -> Result<(), ValidationReport>
    where
        I: IntoIterator<Item = Gauge>,
    {
        self.gauges.extend(gauges, self.domain_scheme.domain())
    }

    /// 添加地形文件
    pub fn add_topo(&mut self, source: TopoSource) -> ConfigResult<()> {
        let max_levels = self.max_levels();
        self.sources.add_topo(source, max_levels)
    }

    /// 添加动态地形文件（至多一个）
    pub fn add_dtopo(&mut self, source: DtopoSource) -> ConfigResult<()> {
        let max_levels = self.max_levels();
        self.sources.add_dtopo(source, max_levels)
    }

    /// 添加初始扰动文件（至多一个）
    pub fn add_perturbation(&mut self, source: PerturbationSource) -> ConfigResult<()> {
        let max_levels = self.max_levels();
        self.sources.add_perturbation(source, max_levels)
    }

    /// 添加固定输出网格
    pub fn add_fixed_grid(&mut self, grid: FixedGrid) -> ConfigResult<()> {
        self.sources.add_fixed_grid(grid, self.domain_scheme.domain())
    }

    /// 添加 fgmax 点集文件
    pub fn add_fgmax(&mut self, source: FgmaxSource) -> ConfigResult<()> {
        let max_levels = self.max_levels();
        self.sources.add_fgmax(source, max_levels)
    }

    /// 设置 fgmax 每点记录的量的个数（1、2 或 5）
    pub fn set_num_fgmax_val(&mut self, n: u32) -> ConfigResult<()> {
        self.sources.set_num_fgmax_val(n)
    }

    /// 设置动态地形的最大时间步
    pub fn set_dt_max_dtopo(&mut self, dt: f64) -> ConfigResult<()> {
        self.sources.set_dt_max_dtopo(dt)
    }

    /// 跨组件复核并冻结配置
    pub fn build(self) -> SetrunResult<RunConfig> {
        let max_levels = self.max_levels();
        let mut report = ValidationReport::new();

        report.record(self.geo.validate());
        report.record(self.refinement.validate(max_levels));
        for err in self.sources.check_against(max_levels) {
            report.add_error(err);
        }
        let verbosity = self.schedule.controls().verbosity;
        if verbosity > max_levels {
            report.add_error(ConfigError::invalid(
                "time.controls.verbosity",
                verbosity,
                format!("不能超过 max_levels ({max_levels})"),
            ));
        }

        for warning in self
            .amr
            .warnings()
            .into_iter()
            .chain(self.schedule.checkpoint_warnings())
            .chain(self.regions.conflicts())
        {
            report.add_warning(warning);
        }

        let warnings = report.finish()?;
        for warning in &warnings {
            warn!("{}", warning);
        }
        debug!(
            "配置汇总完成: {} 个区域, {} 个测站, {} 个地形文件, {} 个 fgmax 文件",
            self.regions.len(),
            self.gauges.len(),
            self.sources.topo().len(),
            self.sources.fgmax().len()
        );

        Ok(RunConfig {
            domain_scheme: self.domain_scheme,
            schedule: self.schedule,
            amr: self.amr,
            geo: self.geo,
            refinement: self.refinement,
            regions: self.regions,
            gauges: self.gauges,
            sources: self.sources,
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario;
    use crate::schedule::{CheckpointStyle, OutputControls, OutputStyle};
    use std::path::PathBuf;

    fn base() -> RunConfigBuilder {
        scenario::lake_3088_base().unwrap()
    }

    #[test]
    fn test_build_empty_collections() {
        let config = base().build().unwrap();
        assert!(config.regions().is_empty());
        assert!(config.gauges().is_empty());
        assert_eq!(config.resolve_levels(0.0, 94.0, 29.0), LevelBounds::full(6));
    }

    #[test]
    fn test_add_regions_aggregates() {
        let mut builder = base();
        let report = builder
            .add_regions(vec![
                Region::from((1, 7, 0.0, 1.0, 94.0, 95.0, 29.0, 30.0)),
                Region::from((1, 3, 0.0, 1.0, 94.0, 95.0, 29.0, 30.0)),
                Region::from((1, 3, 0.0, 1.0, 10.0, 11.0, 29.0, 30.0)),
            ])
            .unwrap_err();
        assert_eq!(report.error_count(), 2);
        let keys: Vec<_> = report.errors.iter().filter_map(|e| e.key()).collect();
        assert_eq!(keys, vec!["regions[0].levels", "regions[2].bounds"]);
        assert_eq!(builder.build().unwrap().regions().len(), 1);
    }

    #[test]
    fn test_region_keys_follow_submission_order() {
        let mut builder = base();
        let bad = Region::from((1, 7, 0.0, 1.0, 94.0, 95.0, 29.0, 30.0));
        let good = Region::from((1, 3, 0.0, 1.0, 94.0, 95.0, 29.0, 30.0));

        assert_eq!(builder.add_region(bad).unwrap_err().key(), Some("regions[0].levels"));
        builder.add_region(good).unwrap();
        assert_eq!(builder.add_region(bad).unwrap_err().key(), Some("regions[2].levels"));

        let report = builder.add_regions(vec![bad]).unwrap_err();
        assert_eq!(report.errors[0].key(), Some("regions[3].levels"));
        assert_eq!(builder.build().unwrap().regions().len(), 1);
    }

    #[test]
    fn test_second_dtopo_is_error() {
        let mut builder = base();
        let dtopo = DtopoSource {
            dtopo_type: 3,
            min_level: 1,
            max_level: 3,
            path: PathBuf::from("quake.tt3"),
        };
        builder.add_dtopo(dtopo.clone()).unwrap();
        assert!(builder.add_dtopo(dtopo).is_err());
        let config = builder.build().unwrap();
        assert!(config.sources().dtopo().is_some());
    }

    #[test]
    fn test_refinement_max_level_deep_checked_at_build() {
        let builder = base().with_refinement(RefinementData {
            max_level_deep: 9,
            ..RefinementData::default()
        });
        let err = builder.build().unwrap_err();
        assert_eq!(
            err.report().map(|r| r.errors[0].key()),
            Some(Some("refinement.max_level_deep"))
        );
    }

    #[test]
    fn test_verbosity_bounded_by_max_levels() {
        let lake = base();
        let schedule = TimeSchedule::builder(0.0)
            .with_output(OutputStyle::EquallySpaced {
                num_output_times: 2,
                t_final: 226800.0,
                output_t0: true,
            })
            .with_controls(OutputControls {
                verbosity: 7,
                ..OutputControls::default()
            })
            .build(&lake.domain_scheme)
            .unwrap();
        let builder = RunConfig::builder(lake.domain_scheme.clone(), schedule, lake.amr.clone());
        assert!(builder.build().is_err());
    }

    #[test]
    fn test_late_checkpoint_warns() {
        let lake = base();
        let schedule = TimeSchedule::builder(0.0)
            .with_output(OutputStyle::EquallySpaced {
                num_output_times: 2,
                t_final: 1000.0,
                output_t0: true,
            })
            .with_checkpoint(CheckpointStyle::Times { times: vec![500.0, 2000.0] })
            .build(&lake.domain_scheme)
            .unwrap();
        let config = RunConfig::builder(lake.domain_scheme.clone(), schedule, lake.amr.clone())
            .build()
            .unwrap();
        assert_eq!(config.warnings().len(), 1);
        assert!(matches!(
            config.warnings()[0],
            ValidationWarning::CheckpointAfterFinalTime { index: 1, .. }
        ));
    }
}
