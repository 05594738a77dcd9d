//! force 命令
//!
//! 经过完整的控制器路径（选表 + 插值）计算单个角度的阻力

use crate::utils;
use anyhow::Result;
use clap::Args;
use door_driver::{DoorForceController, StaticParams};
use door_protocol::Deg;

/// force 命令参数
#[derive(Args, Debug)]
pub struct ForceCommand {
    /// 力曲线标签（如 "Sudden Ramp"）
    #[arg(short, long, default_value = "Constant Force")]
    pub profile: String,

    /// 开门方向（CW / CCW）
    #[arg(short, long, default_value = "CW")]
    pub side: String,

    /// 铰链角度（度）
    #[arg(short, long, allow_hyphen_values = true)]
    pub angle: f64,
}

impl ForceCommand {
    pub fn execute(&self) -> Result<()> {
        let force = evaluate(&self.profile, &self.side, self.angle);
        println!("{:.3}", force);
        Ok(())
    }
}

/// 用固定参数计算一次阻力
pub fn evaluate(profile: &str, side: &str, angle: f64) -> f32 {
    let mut controller = DoorForceController::new(StaticParams(utils::raw_params(profile, side)));
    controller.compute(Deg(angle))
}
