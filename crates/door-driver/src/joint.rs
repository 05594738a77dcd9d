//! 门铰链关节接口与初始配置
//!
//! [`DoorJoint`] 是控制器与宿主仿真之间的接缝：读取铰链角度、施加阻力，
//! 以及启动时设置限位和弹簧。宿主如何推进物理、如何执行限位不在本 crate 范围内。
//!
//! # 启动配置
//!
//! [`JointSetup`] 从两个环境变量读取初始配置：
//!
//! | 变量 | 取值 | 效果 |
//! |---|---|---|
//! | `GAZEBO_DOOR_MODEL_DIRECTION` | `push` / `pull` / `pushpull` | 关节限位 |
//! | `GAZEBO_DOOR_MODEL_SELFCLOSE` | `y` / `n` | 自闭合弹簧 |
//!
//! 无法识别的值记录 `error` 日志后忽略，关节保持原有配置。

use crate::error::DriverError;
use door_protocol::{Deg, DoorSwing, Rad, SelfClose};
use tracing::{error, info};

/// 开门方式环境变量
pub const DIRECTION_ENV: &str = "GAZEBO_DOOR_MODEL_DIRECTION";

/// 自闭合环境变量
pub const SELF_CLOSE_ENV: &str = "GAZEBO_DOOR_MODEL_SELFCLOSE";

/// 门铰链关节（单旋转自由度）
pub trait DoorJoint {
    /// 当前铰链角度
    fn angle(&self) -> Deg;

    /// 在旋转自由度上施加力
    fn apply_force(&mut self, force: f32);

    /// 设置转动限位（默认不支持，忽略）
    fn set_limits(&mut self, lower: Rad, upper: Rad) {
        let _ = (lower, upper);
    }

    /// 设置弹簧刚度、阻尼和零载荷位置（默认不支持，忽略）
    fn set_stiffness_damping(&mut self, stiffness: f64, damping: f64, reference: Rad) {
        let _ = (stiffness, damping, reference);
    }
}

impl<J: DoorJoint + ?Sized> DoorJoint for &mut J {
    fn angle(&self) -> Deg {
        (**self).angle()
    }

    fn apply_force(&mut self, force: f32) {
        (**self).apply_force(force)
    }

    fn set_limits(&mut self, lower: Rad, upper: Rad) {
        (**self).set_limits(lower, upper)
    }

    fn set_stiffness_damping(&mut self, stiffness: f64, damping: f64, reference: Rad) {
        (**self).set_stiffness_damping(stiffness, damping, reference)
    }
}

/// 关节初始配置
///
/// `None` 表示不修改关节的对应设置。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JointSetup {
    pub swing: Option<DoorSwing>,
    pub self_close: Option<SelfClose>,
}

impl JointSetup {
    /// 从进程环境变量读取（宽松模式）
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源读取（宽松模式）
    ///
    /// 无法识别的值记录日志后忽略。
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let swing = lookup(DIRECTION_ENV).and_then(|value| {
            value
                .parse::<DoorSwing>()
                .map_err(|e| error!("{}", e))
                .ok()
        });
        let self_close = lookup(SELF_CLOSE_ENV).and_then(|value| {
            value
                .parse::<SelfClose>()
                .map_err(|e| error!("{}", e))
                .ok()
        });

        Self { swing, self_close }
    }

    /// 严格解析：任何无法识别的值都返回错误
    pub fn parse(swing: Option<&str>, self_close: Option<&str>) -> Result<Self, DriverError> {
        Ok(Self {
            swing: swing.map(str::parse::<DoorSwing>).transpose()?,
            self_close: self_close.map(str::parse::<SelfClose>).transpose()?,
        })
    }

    /// 以 `self` 为准，缺省项使用 `fallback`
    pub fn or(self, fallback: JointSetup) -> Self {
        Self {
            swing: self.swing.or(fallback.swing),
            self_close: self.self_close.or(fallback.self_close),
        }
    }

    /// 应用到关节
    pub fn apply<J: DoorJoint + ?Sized>(&self, joint: &mut J) {
        if let Some(swing) = self.swing {
            let (lower, upper) = swing.limits();
            joint.set_limits(lower, upper);
            info!("Door swing {}: limits [{}, {}]", swing, lower, upper);
        }

        if let Some(spring) = self.self_close.and_then(SelfClose::spring) {
            joint.set_stiffness_damping(spring.stiffness, spring.damping, spring.reference);
            info!(
                "Door self-close enabled: stiffness {}, damping {}",
                spring.stiffness, spring.damping
            );
        }
    }
}
