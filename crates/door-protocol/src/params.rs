//! 基准参数服务响应
//!
//! 参数服务（默认名称 [`BENCHMARK_PARAMS_SERVICE`]）无请求参数，
//! 返回当前基准设置：
//!
//! - `benchmark_type`: 力曲线类型（`"No Force"`, `"Constant Force"`, ...）
//! - `door_opening_side`: 开门方向（`"CW"` / `"CCW"`）
//! - `robot_approach_side`: 机器人接近方向（控制器不使用，仅透传）

use crate::ProtocolError;
use std::fmt;
use std::str::FromStr;

/// 基准参数服务名称
pub const BENCHMARK_PARAMS_SERVICE: &str = "madrob/gui/benchmark_params";

/// 参数服务的原始响应
///
/// 字段保持字符串形式，未识别的值不会在反序列化阶段被拒绝。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchmarkParams {
    /// 力曲线类型标签
    pub benchmark_type: String,

    /// 开门方向标签
    pub door_opening_side: String,

    /// 机器人接近方向标签
    #[cfg_attr(feature = "serde", serde(default))]
    pub robot_approach_side: String,
}

impl BenchmarkParams {
    /// 由枚举值构造（接近方向留空）
    pub fn new(profile: BenchmarkProfile, direction: RotationDirection) -> Self {
        Self {
            benchmark_type: profile.label().to_string(),
            door_opening_side: direction.label().to_string(),
            robot_approach_side: String::new(),
        }
    }

    /// 解析力曲线类型
    pub fn profile(&self) -> Result<BenchmarkProfile, ProtocolError> {
        self.benchmark_type.parse()
    }

    /// 解析开门方向
    pub fn direction(&self) -> Result<RotationDirection, ProtocolError> {
        self.door_opening_side.parse()
    }
}

/// 力曲线类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BenchmarkProfile {
    /// 无阻力
    NoForce,
    /// 恒定阻力
    ConstantForce,
    /// 突变阻力（某角度区间内突然出现）
    SuddenForce,
    /// 突变后线性增长
    SuddenRamp,
    /// 风载式线性增长
    WindRamp,
}

impl BenchmarkProfile {
    /// 全部力曲线类型
    pub const ALL: [BenchmarkProfile; 5] = [
        BenchmarkProfile::NoForce,
        BenchmarkProfile::ConstantForce,
        BenchmarkProfile::SuddenForce,
        BenchmarkProfile::SuddenRamp,
        BenchmarkProfile::WindRamp,
    ];

    /// 参数服务使用的标签
    pub const fn label(self) -> &'static str {
        match self {
            BenchmarkProfile::NoForce => "No Force",
            BenchmarkProfile::ConstantForce => "Constant Force",
            BenchmarkProfile::SuddenForce => "Sudden Force",
            BenchmarkProfile::SuddenRamp => "Sudden Ramp",
            BenchmarkProfile::WindRamp => "Wind Ramp",
        }
    }

    /// 是否区分开门方向
    ///
    /// `NoForce` 与 `ConstantForce` 两个方向共用一张表。
    pub const fn is_directional(self) -> bool {
        matches!(
            self,
            BenchmarkProfile::SuddenForce
                | BenchmarkProfile::SuddenRamp
                | BenchmarkProfile::WindRamp
        )
    }
}

impl fmt::Display for BenchmarkProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BenchmarkProfile {
    type Err = ProtocolError;

    /// 精确匹配（区分大小写），与参数服务的标签一致
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BenchmarkProfile::ALL
            .into_iter()
            .find(|profile| profile.label() == s)
            .ok_or_else(|| ProtocolError::UnknownProfile(s.to_string()))
    }
}

/// 开门方向（门的旋转方向）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RotationDirection {
    /// 顺时针（`"CW"`），选表时的默认方向
    #[default]
    Clockwise,
    /// 逆时针（`"CCW"`）
    CounterClockwise,
}

impl RotationDirection {
    /// 参数服务使用的标签
    pub const fn label(self) -> &'static str {
        match self {
            RotationDirection::Clockwise => "CW",
            RotationDirection::CounterClockwise => "CCW",
        }
    }
}

impl fmt::Display for RotationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RotationDirection {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CW" => Ok(RotationDirection::Clockwise),
            "CCW" => Ok(RotationDirection::CounterClockwise),
            _ => Err(ProtocolError::UnknownDirection(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_labels_roundtrip() {
        for profile in BenchmarkProfile::ALL {
            assert_eq!(profile.label().parse::<BenchmarkProfile>(), Ok(profile));
        }
    }

    #[test]
    fn test_profile_parse_is_exact() {
        assert!("constant force".parse::<BenchmarkProfile>().is_err());
        assert!("Constant Force ".parse::<BenchmarkProfile>().is_err());
        assert_eq!(
            "".parse::<BenchmarkProfile>(),
            Err(ProtocolError::UnknownProfile(String::new()))
        );
    }

    #[test]
    fn test_directional_profiles() {
        assert!(!BenchmarkProfile::NoForce.is_directional());
        assert!(!BenchmarkProfile::ConstantForce.is_directional());
        assert!(BenchmarkProfile::SuddenForce.is_directional());
        assert!(BenchmarkProfile::SuddenRamp.is_directional());
        assert!(BenchmarkProfile::WindRamp.is_directional());
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!("CW".parse(), Ok(RotationDirection::Clockwise));
        assert_eq!("CCW".parse(), Ok(RotationDirection::CounterClockwise));
        assert!("cw".parse::<RotationDirection>().is_err());
        assert_eq!(RotationDirection::default(), RotationDirection::Clockwise);
    }

    #[test]
    fn test_params_accessors() {
        let params = BenchmarkParams::new(
            BenchmarkProfile::WindRamp,
            RotationDirection::CounterClockwise,
        );
        assert_eq!(params.benchmark_type, "Wind Ramp");
        assert_eq!(params.door_opening_side, "CCW");
        assert_eq!(params.profile(), Ok(BenchmarkProfile::WindRamp));
        assert_eq!(params.direction(), Ok(RotationDirection::CounterClockwise));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_params_from_service_json() {
        let json = r#"{
            "benchmark_type": "Sudden Ramp",
            "door_opening_side": "CW",
            "robot_approach_side": "Push"
        }"#;
        let params: BenchmarkParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.profile(), Ok(BenchmarkProfile::SuddenRamp));
        assert_eq!(params.robot_approach_side, "Push");

        // 接近方向缺省
        let json = r#"{"benchmark_type": "Gusty", "door_opening_side": "CCW"}"#;
        let params: BenchmarkParams = serde_json::from_str(json).unwrap();
        assert!(params.profile().is_err());
        assert_eq!(params.robot_approach_side, "");
    }
}
