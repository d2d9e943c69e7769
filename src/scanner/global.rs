//! 全局扫描器单例
//! 进程内唯一实例；未显式初始化时首次使用按环境变量配置懒加载

use once_cell::sync::OnceCell;

use super::scanner::Scanner;
use crate::config::ScanConfig;
use crate::error::{ScanError, ScanResult};
use crate::input::ScanInput;
use crate::report::ScanReport;

static GLOBAL_SCANNER: OnceCell<Scanner> = OnceCell::new();

/// 初始化全局扫描器
/// 幂等：已初始化则忽略新配置并返回 Ok(())
pub fn init_global_scanner(config: ScanConfig) -> ScanResult<()> {
    if GLOBAL_SCANNER.get().is_some() {
        log::debug!("Global scanner already initialized, skip reinitialization");
        return Ok(());
    }

    let scanner = Scanner::new(config).map_err(|e| {
        ScanError::ScannerInitError(format!("Failed to create Scanner instance: {}", e))
    })?;

    // 并发初始化时只有一个成功，其余视为已初始化
    if GLOBAL_SCANNER.set(scanner).is_err() {
        log::debug!("Global scanner initialized concurrently by another caller");
        return Ok(());
    }

    log::info!("Global Scanner initialized successfully");
    Ok(())
}

/// 获取全局扫描器（自动懒加载）
pub(crate) fn get_global_scanner() -> ScanResult<&'static Scanner> {
    GLOBAL_SCANNER.get_or_try_init(|| {
        log::debug!("Lazy initializing global Scanner from environment");
        let config = ScanConfig::from_env()?;
        Scanner::new(config)
    })
}

/// 使用全局扫描器扫描直接文本
#[inline]
pub async fn scan_text(text: &str) -> ScanResult<ScanReport> {
    get_global_scanner()?.scan_text(text).await
}

/// 使用全局扫描器扫描单个输入
#[inline]
pub async fn scan(input: &ScanInput) -> ScanResult<ScanReport> {
    get_global_scanner()?.scan(input).await
}

/// 使用全局扫描器批量扫描
pub async fn scan_batch(inputs: Vec<ScanInput>) -> ScanResult<Vec<ScanResult<ScanReport>>> {
    Ok(get_global_scanner()?.scan_batch(inputs).await)
}
