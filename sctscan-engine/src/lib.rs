// 核心公共结构体+枚举
pub mod core;
// 内核错误
pub mod error;
// 静态分类注册表
pub mod taxonomy;
// 规则编译+文本匹配
pub mod matcher;
// 评分/分类+建议文本
pub mod scorer;
// 接种内容模板
pub mod inoculation;
// 预览/文本工具
pub mod utils;

// 顶层导出常用类型
pub use core::{
    AnalysisResult, CategoryMatches, Classification, MatchEvidence, MatchMap, PatternRule,
    StageClass, TaxonomyCategory, Technique, BENIGN_OBJECTIVE, BENIGN_RECOMMENDATION,
};
pub use error::{CoreError, CoreResult};
pub use inoculation::{generate, generate_all, InoculationContent};
pub use matcher::{match_bytes, match_text, PatternMatcher, LONG_INPUT_BYTES, MAX_MATCHES_PER_RULE};
pub use scorer::{classify, Scorer, CATEGORY_SCORE_CAP, MAX_TECHNIQUES};
pub use taxonomy::TaxonomyRegistry;
