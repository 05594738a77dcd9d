//! inspect 命令
//!
//! 查看 `replay --output` 录制的轨迹文件

use anyhow::Result;
use clap::Args;
use door_tools::ForceTrace;
use std::path::PathBuf;

/// inspect 命令参数
#[derive(Args, Debug)]
pub struct InspectCommand {
    /// 轨迹文件路径
    #[arg(short, long)]
    pub input: PathBuf,

    /// 打印前 N 个采样
    #[arg(short = 'n', long, default_value_t = 0)]
    pub samples: usize,
}

impl InspectCommand {
    pub fn execute(&self) -> Result<()> {
        let trace = ForceTrace::load(&self.input)?;

        println!("📁 文件: {}", self.input.display());
        println!("版本: {}", trace.version);
        println!("录制时间: {}", trace.metadata.start_time);
        println!("力曲线: {:?}", trace.metadata.benchmark_type);
        println!("开门方向: {:?}", trace.metadata.door_opening_side);
        if !trace.metadata.notes.is_empty() {
            println!("备注: {}", trace.metadata.notes);
        }
        println!("周期数: {}", trace.len());

        if let Some((lo, hi)) = trace.angle_range() {
            println!("角度范围: {:.2}° .. {:.2}°", lo, hi);
        }
        if let Some(peak) = trace.peak_force() {
            println!("峰值阻力: {:.3} N", peak);
        }

        if self.samples > 0 {
            println!();
            println!("{:>8} {:>10} {:>10}", "TICK", "ANGLE", "FORCE");
            for s in trace.samples.iter().take(self.samples) {
                println!("{:>8} {:>10.3} {:>10.3}", s.tick, s.angle_deg, s.force);
            }
        }
        Ok(())
    }
}
