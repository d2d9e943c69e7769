mod enums;
mod category;
mod evidence;
mod result;

// 导出常用项
pub use enums::StageClass;
pub use category::{PatternRule, TaxonomyCategory};
pub use evidence::{CategoryMatches, MatchEvidence, MatchMap};
pub use result::{AnalysisResult, Classification, Technique, BENIGN_OBJECTIVE, BENIGN_RECOMMENDATION};
