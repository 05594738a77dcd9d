//! 后台参数轮询
//!
//! 参数服务是一次请求/响应调用，可能有网络往返延迟。
//! `ParamPoller` 在独立线程中周期性调用真实的 [`ParameterProvider`]，
//! 把最新结果写入 `ArcSwapOption`；控制周期通过 [`PolledParams`] 无锁读取快照，
//! 不会被慢速的参数服务阻塞。
//!
//! # 线程模型
//!
//! ```text
//! poller 线程:   provider.fetch_params() ─store→ ArcSwapOption<BenchmarkParams>
//! 控制线程:      PolledParams::fetch_params() ─load→ 快照（Wait-Free）
//! ```
//!
//! - 获取失败时保留上一次的快照，只记录日志
//! - `ParamPoller` 被 drop 时发送停止信号并等待线程退出

use crate::error::{DriverError, FetchError};
use crate::provider::ParameterProvider;
use arc_swap::ArcSwapOption;
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, bounded};
use door_protocol::BenchmarkParams;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::JoinHandle;
use std::time::Duration;
use tracing::{debug, error, trace};

/// 默认轮询间隔
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// 轮询线程与读取端共享的状态
#[derive(Debug, Default)]
struct SharedParams {
    latest: ArcSwapOption<BenchmarkParams>,
    successes: AtomicU64,
    failures: AtomicU64,
}

/// 后台参数轮询器
///
/// 持有轮询线程；drop 时停止线程。
pub struct ParamPoller {
    shared: Arc<SharedParams>,
    shutdown_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl ParamPoller {
    /// 启动轮询线程
    ///
    /// 线程启动后立即进行第一次获取，之后每隔 `interval` 获取一次。
    pub fn spawn<P>(mut provider: P, interval: Duration) -> Result<Self, DriverError>
    where
        P: ParameterProvider + Send + 'static,
    {
        if interval.is_zero() {
            return Err(DriverError::Config(
                "poll interval must be greater than zero".to_string(),
            ));
        }

        let shared = Arc::new(SharedParams::default());
        let (shutdown_tx, shutdown_rx) = bounded::<()>(1);

        let thread_shared = shared.clone();
        let handle = std::thread::Builder::new()
            .name("door-param-poller".to_string())
            .spawn(move || poll_loop(&mut provider, &thread_shared, &shutdown_rx, interval))
            .map_err(DriverError::ThreadSpawn)?;

        debug!("Parameter poller started, interval {:?}", interval);

        Ok(Self {
            shared,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    /// 创建读取端（可多次创建，Clone 开销为一次 Arc 计数）
    pub fn reader(&self) -> PolledParams {
        PolledParams {
            shared: self.shared.clone(),
        }
    }

    /// 成功获取的次数
    pub fn success_count(&self) -> u64 {
        self.shared.successes.load(Ordering::Relaxed)
    }

    /// 获取失败的次数
    pub fn failure_count(&self) -> u64 {
        self.shared.failures.load(Ordering::Relaxed)
    }

    /// 停止轮询线程并等待退出
    pub fn stop(&mut self) {
        // 发送失败说明线程已经退出
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            error!("Parameter poller thread panicked");
        }
    }
}

impl Drop for ParamPoller {
    fn drop(&mut self) {
        self.stop();
    }
}

fn poll_loop<P: ParameterProvider>(
    provider: &mut P,
    shared: &SharedParams,
    shutdown_rx: &Receiver<()>,
    interval: Duration,
) {
    loop {
        match provider.fetch_params() {
            Ok(params) => {
                trace!("Polled benchmark params: {:?}", params);
                shared.latest.store(Some(Arc::new(params)));
                shared.successes.fetch_add(1, Ordering::Relaxed);
            },
            Err(e) => {
                shared.failures.fetch_add(1, Ordering::Relaxed);
                error!("Failed to poll benchmark params: {}", e);
            },
        }

        match shutdown_rx.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => continue,
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    debug!("Parameter poller stopped");
}

/// 轮询结果的读取端
///
/// 实现 [`ParameterProvider`]，`fetch_params()` 只做一次原子加载。
#[derive(Debug, Clone)]
pub struct PolledParams {
    shared: Arc<SharedParams>,
}

impl PolledParams {
    /// 最新快照（不克隆内容）
    pub fn latest(&self) -> Option<Arc<BenchmarkParams>> {
        self.shared.latest.load_full()
    }
}

impl ParameterProvider for PolledParams {
    fn fetch_params(&mut self) -> Result<BenchmarkParams, FetchError> {
        let guard = self.shared.latest.load();
        match guard.as_deref() {
            Some(params) => Ok(params.clone()),
            None => Err(FetchError::NotYetAvailable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::StaticParams;
    use door_protocol::{BenchmarkProfile, RotationDirection};
    use std::time::Instant;

    fn wait_for<F: Fn() -> bool>(cond: F) -> bool {
        let deadline = Instant::now() + Duration::from_secs(2);
        while Instant::now() < deadline {
            if cond() {
                return true;
            }
            std::thread::sleep(Duration::from_millis(1));
        }
        false
    }

    #[test]
    fn test_zero_interval_rejected() {
        let provider = StaticParams(BenchmarkParams::default());
        let result = ParamPoller::spawn(provider, Duration::ZERO);
        assert!(matches!(result, Err(DriverError::Config(_))));
    }

    #[test]
    fn test_poller_publishes_params() {
        let params =
            BenchmarkParams::new(BenchmarkProfile::SuddenRamp, RotationDirection::Clockwise);
        let poller =
            ParamPoller::spawn(StaticParams(params.clone()), Duration::from_millis(5)).unwrap();
        let mut reader = poller.reader();

        assert!(wait_for(|| poller.success_count() > 0));
        assert_eq!(reader.fetch_params().unwrap(), params);
        assert_eq!(reader.latest().as_deref(), Some(&params));
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut poller = ParamPoller::spawn(
            StaticParams(BenchmarkParams::default()),
            Duration::from_secs(60),
        )
        .unwrap();
        poller.stop();
        poller.stop();
    }
}
