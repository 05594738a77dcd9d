//! # Door Tools - 配置与录制格式
//!
//! **依赖原则**: 只依赖 `door-protocol`，不依赖 `door-driver`
//!
//! ## 包含模块
//!
//! - `config` - TOML 配置文件（控制频率、参数来源、铰链初始配置）
//! - `recording` - 阻力轨迹录制格式（纯数据结构）

pub mod config;
pub mod recording;

// 重新导出常用类型
pub use config::{ControlSection, DoorConfig, JointSection, ParamsSection};
pub use recording::{ForceSample, ForceTrace, MAGIC, TraceMetadata};
