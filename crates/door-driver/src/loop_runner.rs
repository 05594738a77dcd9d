//! Loop Runner - 固定频率控制循环
//!
//! 宿主仿真自带周期回调时直接调用 `DoorForceController::tick()` 即可；
//! 没有周期回调的宿主（如独立的测试台、回放工具）可以使用 [`run_controller`]。
//!
//! # 循环锚点
//!
//! 使用绝对时间锚点（`next_tick += period`）消除累积漂移，
//! 通过 `spin_sleep` 降低延时抖动。单个周期超时（Overrun）时不睡眠，直接追赶。

use crate::controller::DoorForceController;
use crate::error::DriverError;
use crate::joint::DoorJoint;
use crate::provider::ParameterProvider;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// 控制循环配置
#[derive(Debug, Clone, PartialEq)]
pub struct LoopConfig {
    /// 控制频率（Hz），与仿真步长一致，默认 1000Hz
    pub frequency_hz: f64,

    /// 最大迭代次数（None 表示直到 `stop` 被置位）
    pub max_iterations: Option<usize>,
}

impl Default for LoopConfig {
    fn default() -> Self {
        LoopConfig {
            frequency_hz: 1000.0,
            max_iterations: None,
        }
    }
}

impl LoopConfig {
    /// 校验配置
    pub fn validate(&self) -> Result<(), DriverError> {
        if !self.frequency_hz.is_finite() || self.frequency_hz <= 0.0 {
            return Err(DriverError::Config(format!(
                "Invalid frequency_hz: {} (must be > 0)",
                self.frequency_hz
            )));
        }
        if Duration::try_from_secs_f64(1.0 / self.frequency_hz).is_err() {
            return Err(DriverError::Config(format!(
                "Invalid frequency_hz: {} (period not representable)",
                self.frequency_hz
            )));
        }
        if self.frequency_hz > 10000.0 {
            warn!(
                "Very high control frequency: {} Hz. This may cause performance issues.",
                self.frequency_hz
            );
        }
        Ok(())
    }

    /// 标称周期（频率无效时为 `Duration::MAX`，先调用 `validate()`）
    pub fn period(&self) -> Duration {
        Duration::try_from_secs_f64(1.0 / self.frequency_hz).unwrap_or(Duration::MAX)
    }
}

/// 两条超时日志之间至少间隔的超时周期数
const OVERRUN_LOG_INTERVAL: u64 = 1000;

/// 控制循环的运行结果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopReport {
    /// 实际执行的周期数
    pub ticks: usize,
    /// 超时（未能在周期内完成）的周期数
    pub overruns: u64,
}

/// 运行控制循环
///
/// 阻塞直到达到 `max_iterations` 或 `stop` 被置位。
/// 超时只在第一次以及之后每 1000 次记录一条 `warn`，结束时汇总。
pub fn run_controller<P, J>(
    joint: &mut J,
    controller: &mut DoorForceController<P>,
    config: &LoopConfig,
    stop: &AtomicBool,
) -> Result<LoopReport, DriverError>
where
    P: ParameterProvider,
    J: DoorJoint + ?Sized,
{
    config.validate()?;

    let period = config.period();
    let mut next_tick = Instant::now();
    let mut iteration = 0;
    let mut overruns: u64 = 0;

    loop {
        if let Some(max_iter) = config.max_iterations
            && iteration >= max_iter
        {
            break;
        }
        if stop.load(Ordering::Relaxed) {
            break;
        }

        // 1. 设定下一个锚点（绝对时间）
        next_tick += period;

        // 2. 控制周期
        controller.tick(joint);
        iteration += 1;

        // 3. 睡眠到下一个锚点
        let now = Instant::now();
        if next_tick > now {
            spin_sleep::sleep(next_tick - now);
        } else {
            if overruns % OVERRUN_LOG_INTERVAL == 0 {
                warn!(
                    "Control loop overrun #{}: tick took {:?} (period {:?}), \
                     skipping sleep to catch up",
                    overruns + 1,
                    now.duration_since(next_tick - period),
                    period
                );
            }
            overruns += 1;
            next_tick = now;
        }
    }

    if overruns > 0 {
        warn!("Control loop finished with {} overruns in {} ticks", overruns, iteration);
    } else {
        debug!("Control loop finished after {} ticks", iteration);
    }
    Ok(LoopReport {
        ticks: iteration,
        overruns,
    })
}
