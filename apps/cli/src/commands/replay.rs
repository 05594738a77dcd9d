//! replay 命令
//!
//! 把角度序列逐周期送入控制器，模拟铰链在这些角度下受到的阻力。
//!
//! 参数来源优先级：`--params` 文件 > `--profile/--side` > 配置文件 `[params] source`。
//! 关节初始配置：环境变量优先，配置文件 `[joint]` 作为缺省。

use crate::utils;
use anyhow::{Context, Result};
use clap::Args;
use door_driver::{
    DoorForceController, DoorJoint, FetchError, JointSetup, JsonFileParams, LoopConfig,
    ParamPoller, ParameterProvider, PolledParams, StaticParams, run_controller,
};
use door_protocol::{BenchmarkParams, Deg, Rad};
use door_tools::{DoorConfig, ForceSample, ForceTrace, TraceMetadata};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, warn};

/// 回放命令参数
#[derive(Args, Debug)]
pub struct ReplayCommand {
    /// 角度序列文件（度，空白或逗号分隔，`#` 为注释）
    #[arg(short, long)]
    pub angles: PathBuf,

    /// 参数文档（JSON，每个周期重新读取）
    #[arg(long, conflicts_with = "profile")]
    pub params: Option<PathBuf>,

    /// 力曲线标签
    #[arg(short, long)]
    pub profile: Option<String>,

    /// 开门方向（CW / CCW），与 `--profile` 一起使用
    #[arg(short, long, default_value = "CW")]
    pub side: String,

    /// 通过后台线程轮询参数文档
    #[arg(long)]
    pub poll: bool,

    /// 按配置的控制频率实时回放（Ctrl-C 可中断）
    #[arg(long)]
    pub realtime: bool,

    /// 录制轨迹到文件
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 轨迹备注
    #[arg(long, default_value = "")]
    pub notes: String,
}

/// 回放用的铰链：按序列给出角度，记录每个周期的输出
#[derive(Debug)]
pub struct ReplayJoint {
    angles: Vec<f64>,
    cursor: usize,
    samples: Vec<ForceSample>,
    limits: Option<(Rad, Rad)>,
}

impl ReplayJoint {
    pub fn new(angles: Vec<f64>) -> Self {
        Self {
            samples: Vec::with_capacity(angles.len()),
            angles,
            cursor: 0,
            limits: None,
        }
    }

    pub fn remaining(&self) -> usize {
        self.angles.len().saturating_sub(self.cursor)
    }

    pub fn limits(&self) -> Option<(Rad, Rad)> {
        self.limits
    }

    pub fn samples(&self) -> &[ForceSample] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<ForceSample> {
        self.samples
    }

    fn current(&self) -> f64 {
        self.angles
            .get(self.cursor)
            .or_else(|| self.angles.last())
            .copied()
            .unwrap_or(0.0)
    }
}

impl DoorJoint for ReplayJoint {
    fn angle(&self) -> Deg {
        Deg(self.current())
    }

    fn apply_force(&mut self, force: f32) {
        self.samples.push(ForceSample {
            tick: self.samples.len() as u64,
            angle_deg: self.current(),
            force,
        });
        self.cursor += 1;
    }

    fn set_limits(&mut self, lower: Rad, upper: Rad) {
        self.limits = Some((lower, upper));
    }
}

impl ReplayCommand {
    pub fn execute(&self, config: &DoorConfig) -> Result<()> {
        let angles = utils::read_angles(&self.angles)?;
        if angles.is_empty() {
            anyhow::bail!("角度文件为空: {}", self.angles.display());
        }

        let mut joint = ReplayJoint::new(angles);
        let fallback = JointSetup {
            swing: config.joint.direction,
            self_close: config.joint.self_close(),
        };
        JointSetup::from_env().or(fallback).apply(&mut joint);
        if let Some((lower, upper)) = joint.limits() {
            println!("关节限位: [{}, {}]", lower, upper);
        }

        let provider = self.provider(config)?;
        let mut controller = DoorForceController::new(provider);

        let ticks = if self.realtime {
            self.run_realtime(&mut joint, &mut controller, config)?
        } else {
            while joint.remaining() > 0 {
                controller.tick(&mut joint);
            }
            joint.samples().len()
        };

        let stats = controller.stats();
        info!(
            "Replay finished: {} ticks, {} fetch failures, {} selection changes",
            ticks, stats.fetch_failures, stats.selection_changes
        );

        let (benchmark_type, door_opening_side) = controller
            .active_selection()
            .map(|s| (s.params.benchmark_type.clone(), s.params.door_opening_side.clone()))
            .unwrap_or_default();
        let mut trace = ForceTrace::new(
            TraceMetadata::new(benchmark_type, door_opening_side).with_notes(self.notes.clone()),
        );
        for sample in joint.into_samples() {
            trace.add_sample(sample);
        }

        print_summary(&trace);

        if let Some(output) = &self.output {
            trace.save(output)?;
            println!("💾 轨迹已保存: {}", output.display());
        }
        Ok(())
    }

    fn provider(&self, config: &DoorConfig) -> Result<Box<dyn ParameterProvider>> {
        if let Some(profile) = &self.profile {
            if self.poll {
                warn!("--poll has no effect with fixed --profile parameters");
            }
            return Ok(Box::new(StaticParams(utils::raw_params(profile, &self.side))));
        }

        let source = self
            .params
            .clone()
            .or_else(|| config.params.source.clone())
            .context("需要 --params、--profile 或配置文件中的 [params] source")?;
        let file = JsonFileParams::new(source);

        if self.poll {
            let poller = ParamPoller::spawn(file, config.params.poll_interval())?;
            Ok(Box::new(PollingProvider {
                reader: poller.reader(),
                _poller: poller,
            }))
        } else {
            Ok(Box::new(file))
        }
    }

    fn run_realtime(
        &self,
        joint: &mut ReplayJoint,
        controller: &mut DoorForceController<Box<dyn ParameterProvider>>,
        config: &DoorConfig,
    ) -> Result<usize> {
        let stop = Arc::new(AtomicBool::new(false));
        let handler_stop = stop.clone();
        ctrlc::set_handler(move || {
            handler_stop.store(true, Ordering::SeqCst);
        })
        .context("注册 Ctrl-C 处理器失败")?;

        let loop_config = LoopConfig {
            frequency_hz: config.control.frequency_hz,
            max_iterations: Some(
                config
                    .control
                    .max_iterations
                    .map_or(joint.remaining(), |max| max.min(joint.remaining())),
            ),
        };

        println!(
            "⏱  实时回放 {} 个周期 @ {} Hz（Ctrl-C 停止）",
            loop_config.max_iterations.unwrap_or_default(),
            loop_config.frequency_hz
        );

        let report = run_controller(joint, controller, &loop_config, &stop)?;
        if report.overruns > 0 {
            println!("⚠️  超时周期: {} / {}", report.overruns, report.ticks);
        }
        if stop.load(Ordering::SeqCst) {
            println!("🛑 回放已中断");
        }
        Ok(report.ticks)
    }
}

/// 持有轮询线程的读取端，drop 时一起停止线程
struct PollingProvider {
    reader: PolledParams,
    _poller: ParamPoller,
}

impl ParameterProvider for PollingProvider {
    fn fetch_params(&mut self) -> Result<BenchmarkParams, FetchError> {
        self.reader.fetch_params()
    }
}

fn print_summary(trace: &ForceTrace) {
    println!("周期数: {}", trace.len());
    println!(
        "参数: {:?} / {:?}",
        trace.metadata.benchmark_type, trace.metadata.door_opening_side
    );
    if let Some((lo, hi)) = trace.angle_range() {
        println!("角度范围: {:.2}° .. {:.2}°", lo, hi);
    }
    if let Some(peak) = trace.peak_force() {
        println!("峰值阻力: {:.3} N", peak);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_joint_sequence() {
        let mut joint = ReplayJoint::new(vec![10.0, 20.0]);
        assert_eq!(joint.angle(), Deg(10.0));
        joint.apply_force(-1.0);
        assert_eq!(joint.angle(), Deg(20.0));
        joint.apply_force(-2.0);
        assert_eq!(joint.remaining(), 0);

        // 序列用完后停在最后一个角度
        assert_eq!(joint.angle(), Deg(20.0));

        let samples = joint.into_samples();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[1].tick, 1);
        assert_eq!(samples[1].angle_deg, 20.0);
        assert_eq!(samples[1].force, -2.0);
    }

    #[test]
    fn test_replay_through_controller() {
        let mut joint = ReplayJoint::new(vec![20.0, 30.0, 50.0]);
        let mut controller = DoorForceController::new(StaticParams(utils::raw_params(
            "Sudden Force",
            "CW",
        )));
        while joint.remaining() > 0 {
            controller.tick(&mut joint);
        }
        let forces: Vec<f32> = joint.samples().iter().map(|s| s.force).collect();
        assert_eq!(forces, vec![0.0, -40.0, 0.0]);
    }
}
