//! 角度单位
//!
//! 使用 NewType 模式区分角度（`Deg`）和弧度（`Rad`）。
//! 仿真器的关节接口使用弧度，力查找表按整数角度索引。
//!
//! ```rust
//! use door_protocol::{Deg, Rad};
//!
//! let angle = Rad(std::f64::consts::FRAC_PI_4).to_deg();
//! assert!((angle.0 - 45.0).abs() < 1e-9);
//! ```

use std::fmt;
use std::ops::Neg;

/// 弧度（NewType）
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rad(pub f64);

impl Rad {
    pub const ZERO: Self = Rad(0.0);

    /// 转换为角度
    #[inline]
    pub fn to_deg(self) -> Deg {
        Deg(self.0.to_degrees())
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Rad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} rad", self.0)
    }
}

impl Neg for Rad {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Rad(-self.0)
    }
}

/// 角度（NewType）
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deg(pub f64);

impl Deg {
    pub const ZERO: Self = Deg(0.0);

    /// 转换为弧度
    #[inline]
    pub fn to_rad(self) -> Rad {
        Rad(self.0.to_radians())
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn abs(self) -> Self {
        Deg(self.0.abs())
    }
}

impl fmt::Display for Deg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°", self.0)
    }
}

impl Neg for Deg {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Deg(-self.0)
    }
}

impl From<Rad> for Deg {
    fn from(rad: Rad) -> Self {
        rad.to_deg()
    }
}

impl From<Deg> for Rad {
    fn from(deg: Deg) -> Self {
        deg.to_rad()
    }
}
