// crates/mh_setrun/src/region.rs

//! 加密区域与层级解析
//!
//! 区域是一个时空盒子，覆盖范围内的允许加密层级被限定为 `[min_level, max_level]`。
//!
//! # 层级解析
//!
//! 对查询点 `(t, x, y)`，从全局范围 `[1, max_levels]` 出发，
//! 与所有覆盖该点的区域求交：下界取最大、上界取最小，
//! 因此重叠处总是最严格（最窄）的范围生效，结果与区域的添加顺序无关。
//! 若交集为空（重叠区域的层级范围互不相交），上界优先，结果收缩为 `[max, max]`。

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::amr::check_level_range;
use crate::domain::Domain;
use crate::error::{ConfigError, ConfigResult};
use crate::validation::{check_ordered, ValidationWarning};

/// 求解器读取的区域行：`[min_level, max_level, t_start, t_end, x_lo, x_hi, y_lo, y_hi]`
pub type RegionRow = (u32, u32, f64, f64, f64, f64, f64, f64);

/// 加密区域
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RegionRow", into = "RegionRow")]
pub struct Region {
    /// 最低层级
    pub min_level: u32,
    /// 最高层级
    pub max_level: u32,
    /// 起始时间
    pub t_start: f64,
    /// 结束时间
    pub t_end: f64,
    /// 西边界
    pub x_lo: f64,
    /// 东边界
    pub x_hi: f64,
    /// 南边界
    pub y_lo: f64,
    /// 北边界
    pub y_hi: f64,
}

impl From<RegionRow> for Region {
    fn from(row: RegionRow) -> Self {
        let (min_level, max_level, t_start, t_end, x_lo, x_hi, y_lo, y_hi) = row;
        Self {
            min_level,
            max_level,
            t_start,
            t_end,
            x_lo,
            x_hi,
            y_lo,
            y_hi,
        }
    }
}

impl From<Region> for RegionRow {
    fn from(r: Region) -> Self {
        (r.min_level, r.max_level, r.t_start, r.t_end, r.x_lo, r.x_hi, r.y_lo, r.y_hi)
    }
}

impl Region {
    /// 层级范围
    pub fn levels(&self) -> LevelBounds {
        LevelBounds {
            min_level: self.min_level,
            max_level: self.max_level,
        }
    }

    /// `(t, x, y)` 是否在区域内（含边界）
    pub fn covers(&self, t: f64, x: f64, y: f64) -> bool {
        t >= self.t_start
            && t <= self.t_end
            && x >= self.x_lo
            && x <= self.x_hi
            && y >= self.y_lo
            && y <= self.y_hi
    }

    /// 两个区域在时间和空间上是否重叠（含边界）
    pub fn overlaps(&self, other: &Region) -> bool {
        self.t_start <= other.t_end
            && other.t_start <= self.t_end
            && self.x_lo <= other.x_hi
            && other.x_lo <= self.x_hi
            && self.y_lo <= other.y_hi
            && other.y_lo <= self.y_hi
    }

    /// 按层数和计算域验证单个区域
    pub fn validate(&self, domain: &Domain, max_levels: u32) -> ConfigResult<()> {
        check_level_range("levels", self.min_level, self.max_level, max_levels)?;
        check_ordered("t", self.t_start, self.t_end)?;
        check_ordered("x", self.x_lo, self.x_hi)?;
        check_ordered("y", self.y_lo, self.y_hi)?;
        if !domain.intersects(self.x_lo, self.x_hi, self.y_lo, self.y_hi) {
            return Err(ConfigError::invalid(
                "bounds",
                format!("[{}, {}] × [{}, {}]", self.x_lo, self.x_hi, self.y_lo, self.y_hi),
                format!("与计算域 {domain} 不相交"),
            ));
        }
        Ok(())
    }
}

/// 闭区间层级范围 `[min_level, max_level]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelBounds {
    /// 最低层级
    pub min_level: u32,
    /// 最高层级
    pub max_level: u32,
}

impl LevelBounds {
    /// 全局范围 `[1, max_levels]`
    pub fn full(max_levels: u32) -> Self {
        Self {
            min_level: 1,
            max_level: max_levels,
        }
    }

    /// 是否允许 `level`
    pub fn contains(&self, level: u32) -> bool {
        level >= self.min_level && level <= self.max_level
    }

    /// 两个范围是否有公共层级
    pub fn intersects(&self, other: &LevelBounds) -> bool {
        self.min_level.max(other.min_level) <= self.max_level.min(other.max_level)
    }
}

impl fmt::Display for LevelBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min_level, self.max_level)
    }
}

/// 区域集合
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSet {
    max_levels: u32,
    regions: Vec<Region>,
}

impl RegionSet {
    /// 空集合
    pub fn new(max_levels: u32) -> Self {
        Self {
            max_levels,
            regions: Vec::new(),
        }
    }

    /// 验证并追加区域，错误键 `regions[i]` 中的 `i` 为追加后的存储位置
    pub fn insert(&mut self, region: Region, domain: &Domain) -> ConfigResult<()> {
        self.insert_labeled(region, domain, self.regions.len())
    }

    /// 同 [`insert`](Self::insert)，错误键使用调用方给出的输入序号
    pub(crate) fn insert_labeled(&mut self, region: Region, domain: &Domain, index: usize) -> ConfigResult<()> {
        region
            .validate(domain, self.max_levels)
            .map_err(|e| e.within(&format!("regions[{index}]")))?;
        self.regions.push(region);
        Ok(())
    }

    /// 解析 `(t, x, y)` 处允许的层级范围
    pub fn resolve(&self, t: f64, x: f64, y: f64) -> LevelBounds {
        let (lo, hi) = self
            .regions
            .iter()
            .filter(|r| r.covers(t, x, y))
            .fold((1, self.max_levels), |(lo, hi), r| {
                (lo.max(r.min_level), hi.min(r.max_level))
            });
        if lo <= hi {
            LevelBounds {
                min_level: lo,
                max_level: hi,
            }
        } else {
            LevelBounds {
                min_level: hi,
                max_level: hi,
            }
        }
    }

    /// 覆盖 `(t, x, y)` 的区域序号
    pub fn covering(&self, t: f64, x: f64, y: f64) -> Vec<usize> {
        self.regions
            .iter()
            .enumerate()
            .filter(|(_, r)| r.covers(t, x, y))
            .map(|(i, _)| i)
            .collect()
    }

    /// 重叠但层级范围不相交的区域对
    pub fn conflicts(&self) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();
        for (i, a) in self.regions.iter().enumerate() {
            for (j, b) in self.regions.iter().enumerate().skip(i + 1) {
                if a.overlaps(b) && !a.levels().intersects(&b.levels()) {
                    warnings.push(ValidationWarning::ConflictingRegions { first: i, second: j });
                }
            }
        }
        warnings
    }

    /// 全部区域（按添加顺序）
    pub fn as_slice(&self) -> &[Region] {
        &self.regions
    }

    /// 区域个数
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::CoordinateSystem;

    const R1: RegionRow = (5, 5, 0.0, 1e10, 94.84, 94.96, 29.54, 29.64);
    const R2: RegionRow = (4, 5, 0.0, 1e10, 94.79, 94.92, 29.44, 29.54);

    fn domain() -> Domain {
        Domain::new(CoordinateSystem::LatLong, [93.0, 28.0], [95.6, 30.0], [255, 222]).unwrap()
    }

    fn set_of(rows: &[RegionRow]) -> RegionSet {
        let domain = domain();
        let mut set = RegionSet::new(6);
        for &row in rows {
            set.insert(Region::from(row), &domain).unwrap();
        }
        set
    }

    #[test]
    fn test_resolve_inside_single_region() {
        let set = set_of(&[R1, R2]);
        let bounds = set.resolve(100.0, 94.90, 29.60);
        assert_eq!(bounds, LevelBounds { min_level: 5, max_level: 5 });
    }

    #[test]
    fn test_resolve_outside_all_regions() {
        let set = set_of(&[R1, R2]);
        assert_eq!(set.resolve(0.0, 93.5, 28.5), LevelBounds::full(6));
        assert!(set.covering(0.0, 93.5, 28.5).is_empty());
    }

    #[test]
    fn test_most_restrictive_wins() {
        let set = set_of(&[
            (1, 4, 0.0, 1e10, 94.0, 95.0, 29.0, 30.0),
            (3, 6, 0.0, 1e10, 94.5, 95.5, 29.5, 30.0),
        ]);
        // 两个区域都覆盖
        assert_eq!(set.resolve(0.0, 94.7, 29.7), LevelBounds { min_level: 3, max_level: 4 });
        // 只有第一个覆盖
        assert_eq!(set.resolve(0.0, 94.2, 29.2), LevelBounds { min_level: 1, max_level: 4 });
    }

    #[test]
    fn test_time_window() {
        let set = set_of(&[
            (1, 4, 0.0, 184400.0, 95.19, 95.6, 28.0, 28.18),
            (1, 3, 184400.0, 1e10, 95.19, 95.6, 28.0, 28.18),
        ]);
        assert_eq!(set.resolve(1000.0, 95.3, 28.1).max_level, 4);
        assert_eq!(set.resolve(200000.0, 95.3, 28.1).max_level, 3);
        // 交界时刻两个区域都生效
        assert_eq!(set.resolve(184400.0, 95.3, 28.1).max_level, 3);
    }

    #[test]
    fn test_disjoint_levels_collapse_to_cap() {
        let set = set_of(&[
            (5, 5, 0.0, 1e10, 94.0, 95.0, 29.0, 30.0),
            (1, 3, 0.0, 1e10, 94.0, 95.0, 29.0, 30.0),
        ]);
        assert_eq!(set.resolve(0.0, 94.5, 29.5), LevelBounds { min_level: 3, max_level: 3 });
        assert_eq!(set.conflicts().len(), 1);
    }

    #[test]
    fn test_insert_rejects_bad_levels() {
        let mut set = RegionSet::new(6);
        let err = set
            .insert(Region::from((3, 7, 0.0, 1.0, 94.0, 95.0, 29.0, 30.0)), &domain())
            .unwrap_err();
        assert!(matches!(err, ConfigError::LevelRange { ref key, .. } if key == "regions[0].levels"));

        let err = set
            .insert(Region::from((4, 3, 0.0, 1.0, 94.0, 95.0, 29.0, 30.0)), &domain())
            .unwrap_err();
        assert!(matches!(err, ConfigError::LevelRange { .. }));
        assert!(set.is_empty());
    }

    #[test]
    fn test_insert_rejects_region_outside_domain() {
        let mut set = RegionSet::new(6);
        let err = set
            .insert(Region::from((1, 3, 0.0, 1.0, 90.0, 92.0, 29.0, 30.0)), &domain())
            .unwrap_err();
        assert_eq!(err.key(), Some("regions[0].bounds"));
    }

    #[test]
    fn test_insert_rejects_reversed_time() {
        let mut set = RegionSet::new(6);
        assert!(set
            .insert(Region::from((1, 3, 10.0, 1.0, 94.0, 95.0, 29.0, 30.0)), &domain())
            .is_err());
    }

    #[test]
    fn test_region_json_row() {
        let region: Region = serde_json::from_str("[5, 5, 0, 1e10, 94.84, 94.96, 29.54, 29.64]").unwrap();
        assert_eq!(region, Region::from(R1));
        let json = serde_json::to_string(&region).unwrap();
        assert!(json.starts_with("[5,5,"));
    }
}
