//! 扫描层错误类型定义
//! 内核错误（CoreError）在此映射为对应的扫描层变体，调用方只需处理一种错误类型
use thiserror::Error;

use sctscan_engine::CoreError;
use serde_json::Error as SerdeJsonError;
use std::time::SystemTimeError;

#[derive(Error, Debug)]
pub enum ScanError {
    // ===================== 输入相关错误 =====================
    /// 空文本 / 非UTF-8 / 无法识别的输入
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// 未知分类编码
    #[error("Taxonomy code not found: {0}")]
    NotFound(String),

    // ===================== 深度分析相关错误 =====================
    /// 深度分析不可用（未配置凭据 / 未启用 llm 特性）
    #[error("Deep analysis unavailable: {0}")]
    Unavailable(String),

    /// 上游模型错误（网络 / 服务端 / 响应无法解析）
    #[error("Upstream analyzer error: {0}")]
    UpstreamError(String),

    // ===================== 内核/初始化错误 =====================
    /// 内核层其余错误（规则编译失败等）
    #[error("Engine error: {0}")]
    Core(CoreError),

    #[error("Scanner initialization failed: {0}")]
    ScannerInitError(String),

    // ===================== 基础错误 =====================
    #[error("JSON processing failed: {0}")]
    JsonError(#[from] SerdeJsonError),

    #[error("System time calculation failed: {0}")]
    SystemTimeError(#[from] SystemTimeError),

    #[error("Async task failed: {0}")]
    AsyncTaskError(String),
}

impl From<CoreError> for ScanError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput(msg) => ScanError::InvalidInput(msg),
            CoreError::NotFound(code) => ScanError::NotFound(code),
            other => ScanError::Core(other),
        }
    }
}

impl ScanError {
    /// 深度分析可降级的错误（Deep 模式下回退到本地结果）
    #[inline]
    pub fn is_fallback_eligible(&self) -> bool {
        matches!(self, ScanError::Unavailable(_) | ScanError::UpstreamError(_))
    }
}

// 全局Result类型
pub type ScanResult<T> = Result<T, ScanError>;
