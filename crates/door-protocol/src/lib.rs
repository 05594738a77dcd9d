//! # Door Protocol
//!
//! 门力控基准参数定义（无仿真器依赖）
//!
//! ## 模块
//!
//! - `params`: 基准参数服务的响应结构与枚举（力曲线类型、开门方向）
//! - `joint`: 门铰链初始配置（开门方式、自闭合）
//! - `units`: 角度单位（`Deg` / `Rad`）
//!
//! ## 字符串标签
//!
//! 参数服务以字符串形式返回 `benchmark_type` 与 `door_opening_side`。
//! `BenchmarkParams` 原样保存字符串，解析为枚举的工作交给 `FromStr`，
//! 这样上层可以自行决定未识别值的处理策略。

pub mod joint;
pub mod params;
pub mod units;

// 重新导出常用类型
pub use joint::{DoorSwing, SelfClose};
pub use params::{BenchmarkParams, BenchmarkProfile, RotationDirection};
pub use units::{Deg, Rad};

use thiserror::Error;

/// 参数解析错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Unknown benchmark type: {0:?}")]
    UnknownProfile(String),

    #[error("Unknown door opening side: {0:?} (expected CW or CCW)")]
    UnknownDirection(String),

    #[error("Bad door direction: {0:?}, [push][pull][pushpull]")]
    UnknownSwing(String),

    #[error("Bad door self_closing argument: {0:?}, [n][y]")]
    UnknownSelfClose(String),
}
