//! 单张阻力查找表

use std::ops::Index;

/// 表长度：0°..=180° 每个整数角度一个采样
pub const TABLE_LEN: usize = 181;

/// 插值时左端点的最大索引（保证 `idx + 1` 仍在表内）
pub const LAST_SEGMENT: usize = TABLE_LEN - 2;

/// 阻力查找表
///
/// 索引为铰链角度的整数幅值（度），值为带符号的阻力（N）。
/// 全部实例都是编译期常量，运行期只读。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForceTable([i32; TABLE_LEN]);

impl ForceTable {
    /// 由完整采样构造
    pub const fn from_samples(samples: [i32; TABLE_LEN]) -> Self {
        Self(samples)
    }

    /// 全角度恒定值
    pub const fn constant(value: i32) -> Self {
        Self([value; TABLE_LEN])
    }

    /// 阶跃：`start..=end` 区间为 `level`，其余为 0
    pub const fn step(start: usize, end: usize, level: i32) -> Self {
        let mut samples = [0; TABLE_LEN];
        let mut i = start;
        while i <= end && i < TABLE_LEN {
            samples[i] = level;
            i += 1;
        }
        Self(samples)
    }

    /// 斜坡：`start` 之前为 0，`start` 处跳到 `from`，
    /// 线性增长到 `end` 处的 `to`，之后保持 `to`
    ///
    /// 中间值按整数截断。
    pub const fn ramp(start: usize, end: usize, from: i32, to: i32) -> Self {
        let mut samples = [0; TABLE_LEN];
        let mut i = start;
        while i < TABLE_LEN {
            samples[i] = if i >= end {
                to
            } else {
                from + (to - from) * (i - start) as i32 / (end - start) as i32
            };
            i += 1;
        }
        Self(samples)
    }

    /// 全部采样
    #[inline]
    pub fn samples(&self) -> &[i32; TABLE_LEN] {
        &self.0
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<i32> {
        self.0.get(index).copied()
    }

    /// 最大阻力幅值
    pub fn peak(&self) -> i32 {
        self.0.iter().map(|v| v.abs()).max().unwrap_or(0)
    }

    /// 是否全为 0
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&v| v == 0)
    }
}

impl Index<usize> for ForceTable {
    type Output = i32;

    #[inline]
    fn index(&self, index: usize) -> &i32 {
        &self.0[index]
    }
}
