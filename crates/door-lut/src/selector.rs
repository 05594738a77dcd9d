//! 查找表选择器
//!
//! 根据参数服务返回的 `(benchmark_type, door_opening_side)` 选出当前使用的阻力表。
//!
//! # 缓存
//!
//! 选择器记住上一次的字符串组合，组合不变时直接返回上次的表（`changed = false`），
//! 不做任何查表操作。
//!
//! # 未识别的值
//!
//! - 未识别的 `benchmark_type`：保持之前的表不变，记录一条 `warn` 日志，
//!   并仍然把该组合记为"上一次"，不会每个周期重复告警
//! - `door_opening_side` 不是 `"CCW"` 时按顺时针选表

use crate::table::ForceTable;
use crate::tables::{FORCE_TABLES, ForceTableSet};
use door_protocol::{BenchmarkProfile, RotationDirection};
use tracing::{debug, warn};

/// 选择键：参数服务返回的原始字符串组合
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionKey {
    pub benchmark_type: String,
    pub door_opening_side: String,
}

impl SelectionKey {
    fn matches(&self, benchmark_type: &str, door_opening_side: &str) -> bool {
        self.benchmark_type == benchmark_type && self.door_opening_side == door_opening_side
    }
}

/// 一次选择的结果
#[derive(Debug, Clone, Copy)]
pub struct Selection {
    /// 当前生效的表；尚未成功选过任何表时为 `None`
    pub table: Option<&'static ForceTable>,

    /// 本次调用是否执行了重新解析（组合与上次不同）
    pub changed: bool,
}

/// 查找表选择器
#[derive(Debug)]
pub struct TableSelector {
    tables: &'static ForceTableSet,
    last: Option<SelectionKey>,
    active: Option<&'static ForceTable>,
    active_profile: Option<BenchmarkProfile>,
}

impl TableSelector {
    /// 使用内置表集合
    pub fn new() -> Self {
        Self::with_tables(&FORCE_TABLES)
    }

    /// 使用自定义表集合
    pub fn with_tables(tables: &'static ForceTableSet) -> Self {
        Self {
            tables,
            last: None,
            active: None,
            active_profile: None,
        }
    }

    /// 选择阻力表
    pub fn select(&mut self, benchmark_type: &str, door_opening_side: &str) -> Selection {
        if let Some(last) = &self.last
            && last.matches(benchmark_type, door_opening_side)
        {
            return Selection {
                table: self.active,
                changed: false,
            };
        }

        self.resolve(benchmark_type, door_opening_side);
        self.last = Some(SelectionKey {
            benchmark_type: benchmark_type.to_string(),
            door_opening_side: door_opening_side.to_string(),
        });

        Selection {
            table: self.active,
            changed: true,
        }
    }

    fn resolve(&mut self, benchmark_type: &str, door_opening_side: &str) {
        let profile = match benchmark_type.parse::<BenchmarkProfile>() {
            Ok(profile) => profile,
            Err(e) => {
                warn!("{}; keeping previously active force table", e);
                return;
            },
        };

        let direction = door_opening_side
            .parse::<RotationDirection>()
            .unwrap_or_default();
        let table = self.tables.table(profile, direction);

        debug!(
            "Force table resolved: {} ({}), peak {} N",
            profile,
            if profile.is_directional() {
                direction.label()
            } else {
                "any side"
            },
            table.peak()
        );

        self.active = Some(table);
        self.active_profile = Some(profile);
    }

    /// 当前生效的表
    pub fn active(&self) -> Option<&'static ForceTable> {
        self.active
    }

    /// 当前生效表对应的力曲线
    pub fn active_profile(&self) -> Option<BenchmarkProfile> {
        self.active_profile
    }

    /// 上一次选择的字符串组合
    pub fn last_key(&self) -> Option<&SelectionKey> {
        self.last.as_ref()
    }

    /// 清空缓存和当前表，回到初始状态
    pub fn reset(&mut self) {
        self.last = None;
        self.active = None;
        self.active_profile = None;
    }
}

impl Default for TableSelector {
    fn default() -> Self {
        Self::new()
    }
}
