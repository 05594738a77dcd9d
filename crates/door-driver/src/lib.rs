//! # Door Driver
//!
//! 门阻力控制的周期编排层：参数获取、选表、插值、施加阻力。
//!
//! ## 模块
//!
//! - `controller`: `DoorForceController`，每个仿真周期调用一次 `tick()`
//! - `provider`: `ParameterProvider` trait 及同步实现（固定参数、JSON 文件）
//! - `poller`: 后台轮询参数服务，控制周期无锁读取快照
//! - `joint`: `DoorJoint` trait 与启动时的关节配置（环境变量）
//! - `loop_runner`: 无宿主周期回调时使用的固定频率循环
//!
//! ## 快速开始
//!
//! ```rust,no_run
//! use door_driver::{DoorForceController, JointSetup, JsonFileParams, ParamPoller};
//! use door_driver::poller::DEFAULT_POLL_INTERVAL;
//! # use door_driver::DoorJoint;
//! # use door_protocol::Deg;
//! # struct Hinge;
//! # impl DoorJoint for Hinge {
//! #     fn angle(&self) -> Deg { Deg(30.0) }
//! #     fn apply_force(&mut self, _force: f32) {}
//! # }
//! # fn main() -> Result<(), door_driver::DriverError> {
//! # let mut hinge = Hinge;
//!
//! JointSetup::from_env().apply(&mut hinge);
//!
//! let poller = ParamPoller::spawn(JsonFileParams::new("params.json"), DEFAULT_POLL_INTERVAL)?;
//! let mut controller = DoorForceController::new(poller.reader());
//!
//! // 宿主的每个仿真周期
//! let force = controller.tick(&mut hinge);
//! # let _ = force;
//! # Ok(())
//! # }
//! ```

pub mod controller;
pub mod error;
pub mod joint;
pub mod loop_runner;
pub mod poller;
pub mod provider;

// 重新导出常用类型
pub use controller::{ActiveSelection, ControllerState, DoorForceController, TickStats};
pub use error::{DriverError, FetchError};
pub use joint::{DoorJoint, JointSetup};
pub use loop_runner::{LoopConfig, LoopReport, run_controller};
pub use poller::{ParamPoller, PolledParams};
pub use provider::{JsonFileParams, ParameterProvider, StaticParams};
