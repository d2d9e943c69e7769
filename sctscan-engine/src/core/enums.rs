use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// 影响行动阶段分类
/// 每个分类对阶段估计的贡献值，取所有命中分类中的最大值
/// 1 = 初始暴露 … 5 = 传播扩散
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageClass {
    Exposure = 1,
    Priming = 2,
    Capture = 3,
    Entrenchment = 4,
    Propagation = 5,
}

impl StageClass {
    /// 阶段贡献值（1-5）
    #[inline(always)]
    pub const fn stage(self) -> u8 {
        self as u8
    }
}

impl Display for StageClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StageClass::Exposure => write!(f, "exposure"),
            StageClass::Priming => write!(f, "priming"),
            StageClass::Capture => write!(f, "capture"),
            StageClass::Entrenchment => write!(f, "entrenchment"),
            StageClass::Propagation => write!(f, "propagation"),
        }
    }
}
