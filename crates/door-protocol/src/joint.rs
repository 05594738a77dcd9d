//! 门铰链初始配置
//!
//! 仿真启动时读取一次：开门方式决定关节转动范围，自闭合决定是否加弹簧。

use crate::{ProtocolError, Rad};
use std::fmt;
use std::str::FromStr;

/// 单侧最大开门角度（rad，约 134.6°）
pub const DOOR_OPEN_LIMIT: Rad = Rad(2.35);

/// 反方向允许的微小余量（rad）
pub const DOOR_BACKLASH: Rad = Rad(0.03);

/// 开门方式（关节转动范围）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DoorSwing {
    /// 只能推开
    Push,
    /// 只能拉开
    Pull,
    /// 双向
    PushPull,
}

impl DoorSwing {
    /// 关节限位 `(lower, upper)`
    pub const fn limits(self) -> (Rad, Rad) {
        match self {
            DoorSwing::Push => (Rad(-DOOR_BACKLASH.0), DOOR_OPEN_LIMIT),
            DoorSwing::Pull => (Rad(-DOOR_OPEN_LIMIT.0), DOOR_BACKLASH),
            DoorSwing::PushPull => (Rad(-DOOR_OPEN_LIMIT.0), DOOR_OPEN_LIMIT),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            DoorSwing::Push => "push",
            DoorSwing::Pull => "pull",
            DoorSwing::PushPull => "pushpull",
        }
    }
}

impl fmt::Display for DoorSwing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DoorSwing {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "push" => Ok(DoorSwing::Push),
            "pull" => Ok(DoorSwing::Pull),
            "pushpull" => Ok(DoorSwing::PushPull),
            _ => Err(ProtocolError::UnknownSwing(s.to_string())),
        }
    }
}

/// 自闭合弹簧参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    /// 刚度
    pub stiffness: f64,
    /// 阻尼
    pub damping: f64,
    /// 零载荷位置
    pub reference: Rad,
}

/// 自闭合门使用的弹簧参数
pub const SELF_CLOSE_SPRING: SpringParams = SpringParams {
    stiffness: 1.5,
    damping: 0.1,
    reference: Rad(0.0),
};

/// 自闭合开关（`"y"` / `"n"`）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelfClose {
    Enabled,
    Disabled,
}

impl SelfClose {
    /// 需要设置的弹簧参数，`Disabled` 时保持关节原状
    pub const fn spring(self) -> Option<SpringParams> {
        match self {
            SelfClose::Enabled => Some(SELF_CLOSE_SPRING),
            SelfClose::Disabled => None,
        }
    }
}

impl From<bool> for SelfClose {
    fn from(enabled: bool) -> Self {
        if enabled {
            SelfClose::Enabled
        } else {
            SelfClose::Disabled
        }
    }
}

impl FromStr for SelfClose {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "y" => Ok(SelfClose::Enabled),
            "n" => Ok(SelfClose::Disabled),
            _ => Err(ProtocolError::UnknownSelfClose(s.to_string())),
        }
    }
}
