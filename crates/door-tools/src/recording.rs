//! # 阻力轨迹录制格式
//!
//! 回放角度序列时记录每个周期的角度与输出阻力，供离线检查。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 录制文件魔数（用于文件格式识别）
pub const MAGIC: &[u8; 8] = b"DOORTRC\0";

/// 当前格式版本
pub const TRACE_VERSION: u8 = 1;

/// 魔数 + 版本字节
const HEADER_LEN: usize = MAGIC.len() + 1;

/// 阻力轨迹 v1
///
/// ```text
/// [MAGIC: 8 bytes]
/// [Version: 1 byte]
/// [Data: bincode serialized ForceTrace]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForceTrace {
    /// 格式版本
    pub version: u8,

    /// 元数据
    pub metadata: TraceMetadata,

    /// 每个周期一个采样
    pub samples: Vec<ForceSample>,
}

impl ForceTrace {
    pub fn new(metadata: TraceMetadata) -> Self {
        Self {
            version: TRACE_VERSION,
            metadata,
            samples: Vec::new(),
        }
    }

    pub fn add_sample(&mut self, sample: ForceSample) {
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// 最大阻力幅值（带符号返回该采样的原值）
    pub fn peak_force(&self) -> Option<f32> {
        self.samples
            .iter()
            .map(|s| s.force)
            .max_by(|a, b| a.abs().total_cmp(&b.abs()))
    }

    /// 覆盖的角度范围 `(min, max)`
    pub fn angle_range(&self) -> Option<(f64, f64)> {
        let mut iter = self.samples.iter().map(|s| s.angle_deg);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), a| (lo.min(a), hi.max(a))))
    }

    /// 编码为文件内容（头部 + bincode 数据）
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(HEADER_LEN + self.samples.len() * 20);
        bytes.extend_from_slice(MAGIC);
        bytes.push(self.version);
        bincode::serialize_into(&mut bytes, self).context("序列化轨迹失败")?;
        Ok(bytes)
    }

    /// 从文件内容解码（校验魔数与版本）
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let payload = check_header(bytes)?;
        let trace: ForceTrace = bincode::deserialize(payload).context("反序列化轨迹失败")?;
        if trace.version != TRACE_VERSION {
            anyhow::bail!("轨迹头部与数据版本不一致: {}", trace.version);
        }
        Ok(trace)
    }

    /// 保存到文件
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_bytes()?)
            .with_context(|| format!("写入轨迹文件失败: {}", path.display()))
    }

    /// 从文件加载
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes =
            fs::read(path).with_context(|| format!("读取轨迹文件失败: {}", path.display()))?;
        Self::from_bytes(&bytes)
    }
}

/// 校验头部，返回其后的数据部分
fn check_header(bytes: &[u8]) -> Result<&[u8]> {
    if bytes.len() < HEADER_LEN {
        anyhow::bail!("轨迹文件过短: {} 字节", bytes.len());
    }
    let (magic, rest) = bytes.split_at(MAGIC.len());
    if magic != MAGIC {
        anyhow::bail!("无效的轨迹文件格式（魔数不匹配）");
    }
    match rest.split_first() {
        Some((&TRACE_VERSION, payload)) => Ok(payload),
        Some((&version, _)) => anyhow::bail!("不支持的轨迹文件版本: {}", version),
        None => anyhow::bail!("轨迹文件缺少版本字节"),
    }
}

/// 轨迹元数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceMetadata {
    /// 录制开始时间（Unix 时间戳，秒）
    pub start_time: u64,

    /// 录制时的力曲线标签
    pub benchmark_type: String,

    /// 录制时的开门方向标签
    pub door_opening_side: String,

    /// 备注
    pub notes: String,
}

impl TraceMetadata {
    pub fn new(benchmark_type: impl Into<String>, door_opening_side: impl Into<String>) -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        Self {
            start_time: SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_secs(),
            benchmark_type: benchmark_type.into(),
            door_opening_side: door_opening_side.into(),
            notes: String::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// 单个周期的采样
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceSample {
    /// 周期序号（从 0 开始）
    pub tick: u64,

    /// 铰链角度（度）
    pub angle_deg: f64,

    /// 输出阻力（N）
    pub force: f32,
}
