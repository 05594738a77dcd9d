//! 集成测试共用的假关节与脚本化参数来源

#![allow(dead_code)]

use door_driver::{DoorJoint, FetchError, ParameterProvider};
use door_protocol::{BenchmarkParams, BenchmarkProfile, Deg, Rad, RotationDirection};
use std::collections::VecDeque;

/// 按预设角度序列转动的铰链，记录每次施加的力
#[derive(Debug, Default)]
pub struct MockJoint {
    angles: VecDeque<Deg>,
    current: Deg,
    pub forces: Vec<f32>,
    pub limits: Option<(Rad, Rad)>,
    pub spring: Option<(f64, f64, Rad)>,
}

impl MockJoint {
    pub fn at(angle: f64) -> Self {
        Self {
            current: Deg(angle),
            ..Default::default()
        }
    }

    /// 每次施力后前进到下一个角度，序列用完后停在最后一个角度
    pub fn sweeping(angles: &[f64]) -> Self {
        let mut angles: VecDeque<Deg> = angles.iter().copied().map(Deg).collect();
        let current = angles.pop_front().unwrap_or(Deg::ZERO);
        Self {
            angles,
            current,
            ..Default::default()
        }
    }
}

impl DoorJoint for MockJoint {
    fn angle(&self) -> Deg {
        self.current
    }

    fn apply_force(&mut self, force: f32) {
        self.forces.push(force);
        if let Some(next) = self.angles.pop_front() {
            self.current = next;
        }
    }

    fn set_limits(&mut self, lower: Rad, upper: Rad) {
        self.limits = Some((lower, upper));
    }

    fn set_stiffness_damping(&mut self, stiffness: f64, damping: f64, reference: Rad) {
        self.spring = Some((stiffness, damping, reference));
    }
}

/// 按脚本依次返回结果的参数来源，脚本用完后重复最后一个成功结果
#[derive(Debug, Default)]
pub struct ScriptedParams {
    script: VecDeque<Result<BenchmarkParams, String>>,
    last_ok: Option<BenchmarkParams>,
    pub calls: usize,
}

impl ScriptedParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok(mut self, params: BenchmarkParams) -> Self {
        self.script.push_back(Ok(params));
        self
    }

    pub fn raw(self, benchmark_type: &str, door_opening_side: &str) -> Self {
        self.ok(BenchmarkParams {
            benchmark_type: benchmark_type.to_string(),
            door_opening_side: door_opening_side.to_string(),
            robot_approach_side: String::new(),
        })
    }

    pub fn fail(mut self, reason: &str) -> Self {
        self.script.push_back(Err(reason.to_string()));
        self
    }
}

impl ParameterProvider for ScriptedParams {
    fn fetch_params(&mut self) -> Result<BenchmarkParams, FetchError> {
        self.calls += 1;
        match self.script.pop_front() {
            Some(Ok(params)) => {
                self.last_ok = Some(params.clone());
                Ok(params)
            },
            Some(Err(reason)) => Err(FetchError::Unavailable(reason)),
            None => self
                .last_ok
                .clone()
                .ok_or_else(|| FetchError::Unavailable("script exhausted".to_string())),
        }
    }
}

pub fn params(profile: BenchmarkProfile, direction: RotationDirection) -> BenchmarkParams {
    BenchmarkParams::new(profile, direction)
}
