//! 扫描模块：单项/批量扫描 + 全局扫描器单例
pub mod global;
pub mod scanner;

pub use self::global::{init_global_scanner, scan, scan_batch, scan_text};
pub use self::scanner::{inoculate, inoculate_all, Scanner};
