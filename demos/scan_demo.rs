//! Cognitive threat scan demonstration for sctscan
//! sctscan 单文本扫描 + 接种内容演示程序
//!
//! 运行命令：
//! cargo run --example scan_demo
//! SCTSCAN_MODE=deep ANTHROPIC_API_KEY=... cargo run --example scan_demo --features llm

use env_logger::{Builder, Env, Target};
use sctscan::{inoculate, render_inoculation, render_report, OutputFormat, ScanConfig, Scanner};
use std::{error::Error, time::Instant};

const SAMPLE: &str = "BREAKING: Scientists don't want you to know this! \
    Experts agree that everyone is switching. Share this before they delete it! \
    You have 24 hours to act.";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // ========== 1. 日志系统初始化 ==========
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .init();

    // ========== 2. 配置 + 扫描器 ==========
    let config = ScanConfig::from_env()?;
    let scanner = Scanner::new(config)?;

    // ========== 3. 扫描 ==========
    let start_instant = Instant::now();
    let report = scanner.scan_text(SAMPLE).await?;
    let scan_duration_ms = start_instant.elapsed().as_secs_f64() * 1000.0;

    println!("{}", render_report(&report, OutputFormat::Text)?);
    println!("✅ 扫描完成 | 总耗时: {:.3} 毫秒", scan_duration_ms);

    // ========== 4. 主分类的接种内容 ==========
    if let Some(code) = report.body.classification_code.as_deref() {
        let content = inoculate(code)?;
        println!("\n{}", render_inoculation(&content, OutputFormat::Text)?);
    }

    Ok(())
}
