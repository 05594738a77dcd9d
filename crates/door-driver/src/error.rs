//! 驱动层错误类型定义

use door_protocol::ProtocolError;
use thiserror::Error;

/// 参数获取错误
///
/// 控制周期内遇到此错误不会中断，只会沿用上一次的有效参数。
#[derive(Error, Debug)]
pub enum FetchError {
    /// 参数服务不可达或返回失败
    #[error("Parameter service unavailable: {0}")]
    Unavailable(String),

    /// 后台轮询尚未拿到第一份参数
    #[error("No benchmark params received yet")]
    NotYetAvailable,

    /// 参数文件读取失败
    #[error("Failed to read parameter document: {0}")]
    Io(#[from] std::io::Error),

    /// 参数文件格式错误
    #[error("Invalid parameter document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// 驱动层错误类型
#[derive(Error, Debug)]
pub enum DriverError {
    /// 配置无效（如控制频率 <= 0）
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// 参数获取失败
    #[error("Parameter fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// 参数或配置值无法识别
    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// 后台轮询线程创建失败
    #[error("Failed to spawn parameter poller thread: {0}")]
    ThreadSpawn(#[source] std::io::Error),
}
