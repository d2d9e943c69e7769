//! Concurrent batch scan demonstration for sctscan
//! sctscan 批量并发扫描演示程序：结果顺序与输入一致，单项失败不影响其余项
//!
//! 运行命令：
//! cargo run --example batch_demo

use sctscan::{render_batch, OutputFormat, ScanConfig, ScanInput, Scanner, SourceInfo};
use std::{error::Error, time::Instant};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let scanner = Scanner::new(ScanConfig::builder().batch_concurrency(8).build())?;

    let feed = [
        ("https://feed.example/1", "The weather today is sunny with a high of 72 degrees."),
        ("https://feed.example/2", "Your account will be suspended in 24 hours unless you verify immediately."),
        ("https://feed.example/3", "   "),
        ("https://feed.example/4", "Real patriots already know the truth. Only sheep believe the mainstream media."),
        ("https://feed.example/5", "You've already invested so much, don't quit now. Take the pledge publicly."),
    ];
    let inputs: Vec<ScanInput> = feed
        .iter()
        .map(|(link, text)| ScanInput::new(SourceInfo::feed_item(*link), *text))
        .collect();

    let start_instant = Instant::now();
    let results = scanner.scan_batch(inputs).await;
    let elapsed_ms = start_instant.elapsed().as_secs_f64() * 1000.0;

    println!("{}", render_batch(&results, OutputFormat::Json)?);
    println!(
        "✅ 批量扫描完成 | 条目: {} | 失败: {} | 总耗时: {:.3} 毫秒",
        results.len(),
        results.iter().filter(|r| r.is_err()).count(),
        elapsed_ms
    );

    Ok(())
}
