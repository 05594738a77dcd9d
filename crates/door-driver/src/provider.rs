//! 基准参数来源
//!
//! 控制器每个周期通过 [`ParameterProvider`] 获取一次 `BenchmarkParams`。
//! 实现可以是同步调用（直接读取），也可以是后台轮询的快照（见 `poller` 模块）。
//!
//! # 实现要求
//!
//! - `fetch_params()` 在控制周期内被调用，应尽快返回
//! - 失败返回 `Err`，控制器会记录日志并沿用上一次的参数
//!
//! # 示例
//!
//! ```rust
//! use door_driver::{FetchError, ParameterProvider};
//! use door_protocol::BenchmarkParams;
//!
//! struct Flaky {
//!     calls: u32,
//! }
//!
//! impl ParameterProvider for Flaky {
//!     fn fetch_params(&mut self) -> Result<BenchmarkParams, FetchError> {
//!         self.calls += 1;
//!         if self.calls % 2 == 0 {
//!             return Err(FetchError::Unavailable("odd tick".to_string()));
//!         }
//!         Ok(BenchmarkParams::default())
//!     }
//! }
//! ```

use crate::error::FetchError;
use door_protocol::BenchmarkParams;
use std::fs;
use std::path::{Path, PathBuf};

/// 基准参数来源
pub trait ParameterProvider {
    /// 获取当前参数
    fn fetch_params(&mut self) -> Result<BenchmarkParams, FetchError>;
}

impl<P: ParameterProvider + ?Sized> ParameterProvider for Box<P> {
    fn fetch_params(&mut self) -> Result<BenchmarkParams, FetchError> {
        (**self).fetch_params()
    }
}

impl<P: ParameterProvider + ?Sized> ParameterProvider for &mut P {
    fn fetch_params(&mut self) -> Result<BenchmarkParams, FetchError> {
        (**self).fetch_params()
    }
}

/// 固定参数
#[derive(Debug, Clone)]
pub struct StaticParams(pub BenchmarkParams);

impl ParameterProvider for StaticParams {
    fn fetch_params(&mut self) -> Result<BenchmarkParams, FetchError> {
        Ok(self.0.clone())
    }
}

/// 从 JSON 文件读取参数
///
/// 每次调用都重新读取文件，外部修改文件即可切换基准设置。
/// 文件内容与参数服务的响应一致：
///
/// ```json
/// {
///   "benchmark_type": "Sudden Ramp",
///   "door_opening_side": "CCW",
///   "robot_approach_side": "Pull"
/// }
/// ```
///
/// 读取有磁盘 IO，控制周期内使用时建议包装在 `ParamPoller` 中。
#[derive(Debug, Clone)]
pub struct JsonFileParams {
    path: PathBuf,
}

impl JsonFileParams {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ParameterProvider for JsonFileParams {
    fn fetch_params(&mut self) -> Result<BenchmarkParams, FetchError> {
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
