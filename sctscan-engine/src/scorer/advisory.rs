//! 分类 → 建议文本 静态表
//! surfaces / recommendations 在报告中按技术顺序拼接去重；objective 取主分类

/// 单个分类的建议条目
#[derive(Debug, Clone, Copy)]
pub struct Advisory {
    pub code: &'static str,
    pub vulnerability_surfaces: &'static [&'static str],
    pub behavioral_objective: &'static str,
    pub recommendations: &'static [&'static str],
}

pub static ADVISORIES: [Advisory; 12] = [
    Advisory {
        code: "SCT-001",
        vulnerability_surfaces: &["Affective processing under time pressure", "Threat-detection reflexes"],
        behavioral_objective: "Provoke an immediate emotional reaction that preempts evaluation.",
        recommendations: &[
            "Pause before acting; strong emotion is the signal to slow down.",
            "Separate the factual claim from the emotional framing and evaluate it alone.",
        ],
    },
    Advisory {
        code: "SCT-002",
        vulnerability_surfaces: &["Gaps in domain knowledge", "Trust in unnamed sources"],
        behavioral_objective: "Accept claims whose evidence cannot be inspected.",
        recommendations: &[
            "Ask for the primary source, sample size and timeframe behind each statistic.",
            "Treat anonymous or unverifiable sourcing as unconfirmed.",
        ],
    },
    Advisory {
        code: "SCT-003",
        vulnerability_surfaces: &["Deference to perceived expertise"],
        behavioral_objective: "Borrow credibility the source has not earned.",
        recommendations: &[
            "Verify credentials and affiliations independently of the content.",
            "Check whether the cited authority actually works in the relevant field.",
        ],
    },
    Advisory {
        code: "SCT-004",
        vulnerability_surfaces: &["Conformity instinct", "Fear of missing out"],
        behavioral_objective: "Adopt a position because others appear to have adopted it.",
        recommendations: &[
            "Ask how the popularity claim was measured and by whom.",
            "Judge the claim on its merits regardless of apparent consensus.",
        ],
    },
    Advisory {
        code: "SCT-005",
        vulnerability_surfaces: &["Group identity and belonging", "Self-concept defense"],
        behavioral_objective: "Align belief with group membership rather than evidence.",
        recommendations: &[
            "Notice when agreement is framed as a test of who you are.",
            "Restate the claim without the identity language and re-evaluate it.",
        ],
    },
    Advisory {
        code: "SCT-006",
        vulnerability_surfaces: &["Decision-making under deadlines", "Incremental commitment"],
        behavioral_objective: "Decide before there is time to verify.",
        recommendations: &[
            "Treat artificial deadlines as a reason to wait, not to hurry.",
            "Contact the purported sender through a known channel before acting.",
        ],
    },
    Advisory {
        code: "SCT-007",
        vulnerability_surfaces: &["Impulse to share", "Distrust of gatekeepers"],
        behavioral_objective: "Redistribute the content before evaluating it.",
        recommendations: &[
            "Do not share content until it has been verified.",
            "Treat claims of suppression as unverified until independently confirmed.",
        ],
    },
    Advisory {
        code: "SCT-008",
        vulnerability_surfaces: &["Neural substrate", "Trust in medical procedures"],
        behavioral_objective: "Alter cognition without informational consent.",
        recommendations: &[
            "Seek independent clinical review of any proposed neural intervention.",
            "Document cognitive changes that follow procedures and report discrepancies.",
        ],
    },
    Advisory {
        code: "SCT-009",
        vulnerability_surfaces: &["Reward circuitry", "Neurochemical state"],
        behavioral_objective: "Sustain compulsive engagement through neurochemical reward.",
        recommendations: &[
            "Limit exposure windows and disable infinite feeds where possible.",
            "Compare how you feel after exposure with what the content actually said.",
        ],
    },
    Advisory {
        code: "SCT-010",
        vulnerability_surfaces: &["Information diet", "Attention bandwidth"],
        behavioral_objective: "Route all perception through a single controlled channel.",
        recommendations: &[
            "Maintain multiple independent information sources.",
            "Reduce notification volume to what can actually be processed.",
        ],
    },
    Advisory {
        code: "SCT-011",
        vulnerability_surfaces: &["Institutional trust anchors", "Social trust networks"],
        behavioral_objective: "Disable collective verification by discrediting every trust anchor.",
        recommendations: &[
            "Distinguish specific, evidenced criticism from blanket distrust.",
            "Identify which alternative authority the content is steering you toward.",
        ],
    },
    Advisory {
        code: "SCT-012",
        vulnerability_surfaces: &["Consistency bias", "Sunk-cost reasoning"],
        behavioral_objective: "Lock in continued participation through prior commitments.",
        recommendations: &[
            "Evaluate the next step on its own merits, ignoring what was already invested.",
            "Be cautious about public pledges requested by the same source.",
        ],
    },
];

/// 按编码查找建议
pub fn advisory_for(code: &str) -> Option<&'static Advisory> {
    ADVISORIES.iter().find(|a| a.code == code)
}
