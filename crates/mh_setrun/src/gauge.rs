// crates/mh_setrun/src/gauge.rs

//! 测站（固定点时间序列输出）
//!
//! 测站按编号排序保存，写出顺序与添加顺序无关。

use serde::{Deserialize, Serialize};

use crate::domain::Domain;
use crate::error::{ConfigError, ConfigResult};
use crate::validation::{check_non_negative, check_ordered, ValidationReport};

/// 求解器读取的测站行：`[id, x, y, t_start, t_end, min_sample_interval]`
pub type GaugeRow = (u32, f64, f64, f64, f64, f64);

/// 测站
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "GaugeRow", into = "GaugeRow")]
pub struct Gauge {
    /// 编号（全局唯一）
    pub id: u32,
    /// x 坐标
    pub x: f64,
    /// y 坐标
    pub y: f64,
    /// 开始记录时间
    pub t_start: f64,
    /// 结束记录时间
    pub t_end: f64,
    /// 最小采样间隔，0 表示每步都记录
    pub min_sample_interval: f64,
}

impl From<GaugeRow> for Gauge {
    fn from(row: GaugeRow) -> Self {
        let (id, x, y, t_start, t_end, min_sample_interval) = row;
        Self {
            id,
            x,
            y,
            t_start,
            t_end,
            min_sample_interval,
        }
    }
}

impl From<Gauge> for GaugeRow {
    fn from(g: Gauge) -> Self {
        (g.id, g.x, g.y, g.t_start, g.t_end, g.min_sample_interval)
    }
}

impl Gauge {
    /// 验证单个测站（不检查编号唯一性）
    pub fn validate(&self, domain: &Domain) -> ConfigResult<()> {
        domain.check_contains("position", self.x, self.y)?;
        check_ordered("t", self.t_start, self.t_end)?;
        check_non_negative("min_sample_interval", self.min_sample_interval)
    }

    fn key(&self) -> String {
        format!("gauges[id={}]", self.id)
    }
}

/// 测站集合，始终按编号升序
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GaugeSet {
    gauges: Vec<Gauge>,
}

impl GaugeSet {
    /// 空集合
    pub fn new() -> Self {
        Self::default()
    }

    /// 验证并插入测站，保持编号升序
    pub fn insert(&mut self, gauge: Gauge, domain: &Domain) -> ConfigResult<()> {
        let key = gauge.key();
        gauge.validate(domain).map_err(|e| e.within(&key))?;
        match self.gauges.binary_search_by_key(&gauge.id, |g| g.id) {
            Ok(_) => Err(ConfigError::DuplicateId {
                key: "gauges".into(),
                id: gauge.id,
            }),
            Err(pos) => {
                self.gauges.insert(pos, gauge);
                Ok(())
            }
        }
    }

    /// 批量插入，所有出错条目汇总到同一份报告
    pub fn extend<I>(&mut self, gauges: I, domain: &Domain) -> Result<(), ValidationReport>
    where
        I: IntoIterator<Item = Gauge>,
    {
        let mut report = ValidationReport::new();
        for gauge in gauges {
            report.record(self.insert(gauge, domain));
        }
        if report.has_errors() {
            Err(report)
        } else {
            Ok(())
        }
    }

    /// 按编号查找
    pub fn get(&self, id: u32) -> Option<&Gauge> {
        self.gauges
            .binary_search_by_key(&id, |g| g.id)
            .ok()
            .map(|i| &self.gauges[i])
    }

    /// 全部测站（编号升序）
    pub fn as_slice(&self) -> &[Gauge] {
        &self.gauges
    }

    /// 测站个数
    pub fn len(&self) -> usize {
        self.gauges.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.gauges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::CoordinateSystem;

    fn domain() -> Domain {
        Domain::new(CoordinateSystem::LatLong, [93.0, 28.0], [95.6, 30.0], [255, 222]).unwrap()
    }

    #[test]
    fn test_gauge_in_domain() {
        let mut set = GaugeSet::new();
        let gauge = Gauge::from((0, 94.092882, 29.203368, 0.0, 226800.0, 660.0));
        assert!(set.insert(gauge, &domain()).is_ok());
        assert_eq!(set.get(0), Some(&gauge));
    }

    #[test]
    fn test_gauge_outside_domain() {
        let mut set = GaugeSet::new();
        let err = set
            .insert(Gauge::from((7, 200.0, 29.2, 0.0, 226800.0, 660.0)), &domain())
            .unwrap_err();
        assert!(matches!(err, ConfigError::OutOfDomain { ref key, .. } if key == "gauges[id=7].position"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut set = GaugeSet::new();
        set.insert(Gauge::from((3, 94.0, 29.0, 0.0, 1.0, 0.0)), &domain()).unwrap();
        let err = set
            .insert(Gauge::from((3, 94.5, 29.5, 0.0, 1.0, 0.0)), &domain())
            .unwrap_err();
        assert_eq!(err, ConfigError::DuplicateId { key: "gauges".into(), id: 3 });
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_sorted_by_id_regardless_of_insertion() {
        let mut set = GaugeSet::new();
        for id in [5, 1, 9, 0, 3] {
            set.insert(Gauge::from((id, 94.0, 29.0, 0.0, 1.0, 0.0)), &domain()).unwrap();
        }
        let ids: Vec<u32> = set.as_slice().iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![0, 1, 3, 5, 9]);
    }

    #[test]
    fn test_extend_aggregates_errors() {
        let mut set = GaugeSet::new();
        let report = set
            .extend(
                vec![
                    Gauge::from((0, 94.0, 29.0, 0.0, 1.0, 0.0)),
                    Gauge::from((1, 200.0, 29.0, 0.0, 1.0, 0.0)),
                    Gauge::from((0, 94.1, 29.0, 0.0, 1.0, 0.0)),
                    Gauge::from((2, 94.0, 29.0, 5.0, 1.0, 0.0)),
                    Gauge::from((3, 94.0, 29.0, 0.0, 1.0, -1.0)),
                ],
                &domain(),
            )
            .unwrap_err();
        assert_eq!(report.error_count(), 4);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_zero_interval_allowed() {
        let mut set = GaugeSet::new();
        assert!(set.insert(Gauge::from((0, 94.0, 29.0, 0.0, 0.0, 0.0)), &domain()).is_ok());
    }
}
