//! # 配置文件
//!
//! 独立运行控制器时使用的 TOML 配置：
//!
//! ```toml
//! [control]
//! frequency_hz = 1000.0
//! max_iterations = 5000
//!
//! [params]
//! source = "/tmp/benchmark_params.json"
//! poll_interval_ms = 100
//!
//! [joint]
//! direction = "pushpull"
//! self_close = true
//! ```
//!
//! 所有字段都可省略，缺省值见各 `Default` 实现。
//! `[joint]` 只是缺省值，运行时环境变量优先。

use anyhow::{Context, Result};
use door_protocol::{DoorSwing, SelfClose};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// 完整配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoorConfig {
    pub control: ControlSection,
    pub params: ParamsSection,
    pub joint: JointSection,
}

/// `[control]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlSection {
    /// 控制频率（Hz），与仿真步长一致
    pub frequency_hz: f64,

    /// 最大周期数，省略表示一直运行
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_iterations: Option<usize>,
}

impl Default for ControlSection {
    fn default() -> Self {
        Self {
            frequency_hz: 1000.0,
            max_iterations: None,
        }
    }
}

/// `[params]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamsSection {
    /// 参数文档路径（JSON，内容与参数服务的响应一致）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,

    /// 后台轮询间隔（毫秒）
    pub poll_interval_ms: u64,
}

impl Default for ParamsSection {
    fn default() -> Self {
        Self {
            source: None,
            poll_interval_ms: 100,
        }
    }
}

impl ParamsSection {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// `[joint]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JointSection {
    /// 开门方式：`push` / `pull` / `pushpull`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<DoorSwing>,

    /// 是否自闭合
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_close: Option<bool>,
}

impl JointSection {
    pub fn self_close(&self) -> Option<SelfClose> {
        self.self_close.map(SelfClose::from)
    }
}

impl DoorConfig {
    /// 从文件加载
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("解析配置文件失败: {}", path.display()))
    }

    /// 文件存在时加载，否则返回默认配置
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// 解析 TOML 文本
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// 序列化为 TOML 文本
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("序列化配置失败")
    }

    /// 保存到文件（自动创建父目录）
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).context("创建配置目录失败")?;
        }

        let content = format!("# Door force controller configuration\n\n{}", self.to_toml()?);
        fs::write(path, content).context("写入配置文件失败")?;
        Ok(())
    }
}
