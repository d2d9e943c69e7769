//! sctscan-engine 内核错误定义
//! 封装内核层所有核心错误，与前端扫描层错误解耦，基于thiserror实现类型安全处理
use thiserror::Error;

use regex::Error as RegexError;

/// 内核核心错误枚举
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================== 输入相关错误 =====================
    /// 无效输入（空文本 / 非UTF-8字节流）
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ===================== 查找相关错误 =====================
    /// 未知的分类编码（注册表中不存在）
    #[error("Taxonomy code not found: {0}")]
    NotFound(String),

    // ===================== 编译相关错误 =====================
    /// 规则正则编译失败（静态规则表书写错误）
    #[error("Regex compilation failed: {0}")]
    RegexCompileError(#[from] RegexError),
}

/// 内核层全局Result类型别名
pub type CoreResult<T> = Result<T, CoreError>;
