//! sweep 命令
//!
//! 按固定步长扫描角度区间，输出每个角度的阻力

use crate::utils;
use anyhow::Result;
use clap::Args;
use door_driver::{DoorForceController, StaticParams};
use door_protocol::Deg;
use serde::Serialize;

/// 单次扫描最多输出的点数
const MAX_POINTS: usize = 100_000;

/// 区间长度按步长计数时的容差，吸收 `0.3 / 0.1` 这类浮点误差
const STEP_TOLERANCE: f64 = 1e-9;

/// sweep 命令参数
#[derive(Args, Debug)]
pub struct SweepCommand {
    /// 力曲线标签
    #[arg(short, long, default_value = "Constant Force")]
    pub profile: String,

    /// 开门方向（CW / CCW）
    #[arg(short, long, default_value = "CW")]
    pub side: String,

    /// 起始角度（度）
    #[arg(long, default_value_t = -180.0, allow_hyphen_values = true)]
    pub from: f64,

    /// 结束角度（度，包含）
    #[arg(long, default_value_t = 180.0, allow_hyphen_values = true)]
    pub to: f64,

    /// 步长（度）
    #[arg(long, default_value_t = 1.0)]
    pub step: f64,

    /// 以 JSON 输出
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub angle: f64,
    pub force: f32,
}

impl SweepCommand {
    pub fn execute(&self) -> Result<()> {
        let points = sweep(&self.profile, &self.side, self.from, self.to, self.step)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&points)?);
        } else {
            for p in &points {
                println!("{:>10.3} {:>10.3}", p.angle, p.force);
            }
        }
        Ok(())
    }
}

/// 扫描 `[from, to]`，角度按 `from + i * step` 计算，避免累加误差
///
/// 终点在容差内落在网格上时包含终点。
pub fn sweep(profile: &str, side: &str, from: f64, to: f64, step: f64) -> Result<Vec<SweepPoint>> {
    if !step.is_finite() || step <= 0.0 {
        anyhow::bail!("步长必须为正数，当前: {}", step);
    }
    if !from.is_finite() || !to.is_finite() || from > to {
        anyhow::bail!("无效的角度区间: [{}, {}]", from, to);
    }

    let span = (to - from) / step + STEP_TOLERANCE;
    if !span.is_finite() || span >= MAX_POINTS as f64 {
        anyhow::bail!(
            "扫描点数过多: 区间 [{}, {}] 步长 {} (上限 {})",
            from,
            to,
            step,
            MAX_POINTS
        );
    }
    let count = span.floor() as usize + 1;

    let mut controller = DoorForceController::new(StaticParams(utils::raw_params(profile, side)));
    Ok((0..count)
        .map(|i| {
            let angle = (from + i as f64 * step).min(to);
            SweepPoint {
                angle,
                force: controller.compute(Deg(angle)),
            }
        })
        .collect())
}
