pub mod scan;

pub use scan::{
    AnalysisMode, CustomConfigBuilder, LlmOptions, RetryPolicy, ScanConfig,
    DEFAULT_BATCH_CONCURRENCY, DEFAULT_LLM_ENDPOINT, DEFAULT_LLM_MODEL, DEFAULT_MAX_INPUT_CHARS,
};
