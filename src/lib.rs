//! sctscan - 认知威胁扫描器：SCT 影响技术分类 + 接种内容生成

pub mod analyzer;
pub mod config;
pub mod error;
pub mod input;
pub mod report;
pub mod scanner;
pub mod utils;

// 导出全局错误类型
pub use self::error::{ScanError, ScanResult};

// 导出配置模块核心结构体与构建器
pub use crate::config::{AnalysisMode, CustomConfigBuilder, LlmOptions, RetryPolicy, ScanConfig};

// 导出输入/报告类型
pub use crate::input::{OriginKind, ScanInput, SourceInfo};
pub use crate::report::{
    render, render_batch, render_inoculation, render_inoculations, render_report, severity_label,
    OutputFormat, ReportBody, ReportMetadata, ScanReport,
};

// 导出分析器抽象（自定义深度分析器接入点）
pub use crate::analyzer::{CompletionClient, ContentAnalyzer, LlmAnalyzer, PatternAnalyzer};
#[cfg(feature = "llm")]
pub use crate::analyzer::AnthropicClient;

// 导出扫描接口
pub use crate::scanner::{
    init_global_scanner, inoculate, inoculate_all, scan, scan_batch, scan_text, Scanner,
};

// 导出内核常用类型
pub use sctscan_engine::{
    AnalysisResult, Classification, InoculationContent, MatchEvidence, MatchMap, StageClass,
    TaxonomyCategory, TaxonomyRegistry, Technique,
};

/// 将 log 记录转发到 tracing 订阅者（tracing 特性）
/// 已设置过全局 logger 时返回 ScannerInitError
#[cfg(feature = "tracing")]
pub fn init_log_bridge() -> ScanResult<()> {
    tracing_log::LogTracer::init()
        .map_err(|e| ScanError::ScannerInitError(format!("Failed to install log bridge: {}", e)))
}
