//! 阻力插值
//!
//! 由铰链角度计算输出阻力：
//!
//! 1. `p = angle`，`p_floor = floor(p)`，`r = p - p_floor`
//! 2. `idx = |p_floor|`（表关于零点对称，只按幅值索引）
//! 3. `idx > 179` 时钳位为 `idx = 179, r = 1`，超出 180° 的角度取 `table[180]`
//! 4. 在 `table[idx]` 与 `table[idx + 1]` 之间按 `r` 线性插值
//! 5. 乘以方向符号 `-sign(angle)`
//!
//! 负角度同样先取下整再取绝对值，因此 `-45.3°` 落在 `[46, 47]` 区间、
//! 权重 `r = 0.7`；只有整数角度或常量表上才满足严格的奇对称。
//!
//! # 方向分支
//!
//! - 顺时针：`-sign * (table[idx] * (1 - r) + table[idx + 1] * r)`
//! - 逆时针：`-sign * table[idx] * (1 - r) + table[idx + 1] * r`
//!
//! 逆时针分支的符号只作用于左端点项，右端点项不带符号。
//!
//! 方向无法识别（`None`）时输出 0。

use crate::table::{ForceTable, LAST_SEGMENT};
use door_protocol::{Deg, RotationDirection};

/// 计算给定角度下的阻力（N）
///
/// `angle` 可为任意实数角度；`NaN` 输出 0。
pub fn interpolate(table: &ForceTable, angle: Deg, side: Option<RotationDirection>) -> f32 {
    let Some(side) = side else {
        return 0.0;
    };
    if angle.0.is_nan() {
        return 0.0;
    }

    let p = angle.0 as f32;
    let p_floor = p.floor();
    let mut r = p - p_floor;

    // float -> int 饱和转换，±inf 也会落到钳位分支
    let mut idx = usize::try_from((p_floor as i64).unsigned_abs()).unwrap_or(usize::MAX);
    if idx > LAST_SEGMENT {
        idx = LAST_SEGMENT;
        r = 1.0;
    }

    let left = table[idx] as f32;
    let right = table[idx + 1] as f32;
    let sign = direction_sign(angle);

    match side {
        RotationDirection::Clockwise => -sign * (left * (1.0 - r) + right * r),
        RotationDirection::CounterClockwise => -sign * left * (1.0 - r) + right * r,
    }
}

/// `+1` / `-1` / `0`
#[inline]
fn direction_sign(angle: Deg) -> f32 {
    if angle.0 > 0.0 {
        1.0
    } else if angle.0 < 0.0 {
        -1.0
    } else {
        0.0
    }
}

impl ForceTable {
    /// `interpolate(self, angle, Some(direction))` 的简写
    #[inline]
    pub fn force_at(&self, angle: Deg, direction: RotationDirection) -> f32 {
        interpolate(self, angle, Some(direction))
    }
}
