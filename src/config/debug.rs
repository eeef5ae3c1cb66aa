//! Debugging feature flags.

pub struct LogFlags {
    /// Log every emitted event (start, end, point count, depth).
    pub log_segmentation: bool,

    /// Log which rule in the chain produced the verdict.
    pub log_rule_chain: bool,

    /// Log dropped lines while parsing delimited text.
    pub log_ingest: bool,

    /// Activate trace_time macro (for scope-level timing)
    pub log_performance: bool,
}

pub const DEBUG_FLAGS: LogFlags = LogFlags {
    log_segmentation: false,
    log_rule_chain: true,
    log_ingest: false,
    log_performance: true,
};
