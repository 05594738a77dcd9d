//! 门阻力控制器
//!
//! 每个仿真周期调用一次 [`DoorForceController::tick`]：
//!
//! 1. 从 [`ParameterProvider`] 获取当前 `(benchmark_type, door_opening_side)`
//! 2. 组合变化时重新选表（`TableSelector` 内部缓存）
//! 3. 读取铰链角度
//! 4. 插值计算阻力
//! 5. 把阻力施加到关节
//!
//! # 状态
//!
//! ```text
//! Uninitialized ──首次获取参数成功──▶ Active
//! ```
//!
//! `Active` 之后不会回退。`Uninitialized` 时输出 0。
//!
//! # 容错
//!
//! 参数获取失败只记录 `error` 日志，沿用上一次的有效参数（表和方向都不变），
//! 不会阻塞或中断仿真周期。
//!
//! # 示例
//!
//! ```rust
//! use door_driver::{DoorForceController, StaticParams};
//! use door_protocol::{BenchmarkParams, BenchmarkProfile, Deg, RotationDirection};
//!
//! let params =
//!     BenchmarkParams::new(BenchmarkProfile::ConstantForce, RotationDirection::Clockwise);
//! let mut controller = DoorForceController::new(StaticParams(params));
//!
//! let force = controller.compute(Deg(45.0));
//! assert_eq!(force, -15.0);
//! ```

use crate::joint::DoorJoint;
use crate::provider::ParameterProvider;
use door_lut::{ForceTable, TableSelector, interpolate};
use door_protocol::{BenchmarkParams, BenchmarkProfile, Deg, RotationDirection};
use tracing::{error, info, warn};

/// 控制器状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// 尚未成功获取过参数
    Uninitialized,
    /// 已有生效的参数
    Active,
}

/// 当前生效的选择
#[derive(Debug, Clone)]
pub struct ActiveSelection {
    /// 最近一次生效的参数
    pub params: BenchmarkParams,

    /// 解析后的开门方向；无法识别时为 `None`，输出为 0
    pub direction: Option<RotationDirection>,

    /// 当前阻力表；从未识别过任何力曲线时为 `None`
    pub table: Option<&'static ForceTable>,

    /// 当前阻力表对应的力曲线
    pub profile: Option<BenchmarkProfile>,
}

/// 周期统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    /// 已执行的周期数
    pub ticks: u64,
    /// 参数获取失败次数
    pub fetch_failures: u64,
    /// 参数组合变化次数
    pub selection_changes: u64,
}

/// 门阻力控制器
pub struct DoorForceController<P> {
    provider: P,
    selector: TableSelector,
    selection: Option<ActiveSelection>,
    stats: TickStats,
}

impl<P: ParameterProvider> DoorForceController<P> {
    /// 使用内置力曲线创建控制器
    pub fn new(provider: P) -> Self {
        Self::with_selector(provider, TableSelector::new())
    }

    /// 使用自定义选择器（如自定义表集合）
    pub fn with_selector(provider: P, selector: TableSelector) -> Self {
        Self {
            provider,
            selector,
            selection: None,
            stats: TickStats::default(),
        }
    }

    /// 执行一个控制周期，返回施加的阻力
    pub fn tick<J: DoorJoint + ?Sized>(&mut self, joint: &mut J) -> f32 {
        self.refresh_params();
        let force = self.force_for(joint.angle());
        joint.apply_force(force);
        force
    }

    /// 不经过关节，直接由角度计算阻力（同样会获取参数）
    pub fn compute(&mut self, angle: Deg) -> f32 {
        self.refresh_params();
        self.force_for(angle)
    }

    fn refresh_params(&mut self) {
        self.stats.ticks += 1;

        let params = match self.provider.fetch_params() {
            Ok(params) => params,
            Err(e) => {
                self.stats.fetch_failures += 1;
                error!("Failed to fetch benchmark params: {}; keeping current selection", e);
                return;
            },
        };

        let selection = self
            .selector
            .select(&params.benchmark_type, &params.door_opening_side);
        if !selection.changed && self.selection.is_some() {
            return;
        }

        self.stats.selection_changes += 1;

        let direction = match params.direction() {
            Ok(direction) => Some(direction),
            Err(e) => {
                warn!("{}; force output disabled until a valid side is received", e);
                None
            },
        };

        info!(
            "Benchmark params applied: type={:?}, side={:?}, approach={:?}",
            params.benchmark_type, params.door_opening_side, params.robot_approach_side
        );

        self.selection = Some(ActiveSelection {
            params,
            direction,
            table: selection.table,
            profile: self.selector.active_profile(),
        });
    }

    fn force_for(&self, angle: Deg) -> f32 {
        match &self.selection {
            Some(ActiveSelection {
                table: Some(table),
                direction,
                ..
            }) => interpolate(table, angle, *direction),
            _ => 0.0,
        }
    }

    pub fn state(&self) -> ControllerState {
        if self.selection.is_some() {
            ControllerState::Active
        } else {
            ControllerState::Uninitialized
        }
    }

    pub fn active_selection(&self) -> Option<&ActiveSelection> {
        self.selection.as_ref()
    }

    pub fn stats(&self) -> TickStats {
        self.stats
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn into_provider(self) -> P {
        self.provider
    }

    /// 回到 `Uninitialized`，下一个周期重新选表
    pub fn reset(&mut self) {
        self.selector.reset();
        self.selection = None;
    }
}
