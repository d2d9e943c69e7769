//! 报告组装 + 渲染（纯函数，无 I/O）

mod render;
mod schema;

pub use render::{render, render_batch, render_inoculation, render_inoculations, render_report, OutputFormat};
pub use schema::{severity_label, ReportBody, ReportMetadata, ScanReport, SCANNER_ID};
