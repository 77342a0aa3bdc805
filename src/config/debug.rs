//! Debugging feature flags.

pub struct LogFlags {
    /// Log the override fetch lifecycle (start, outcome, cancellation).
    pub log_store_fetch: bool,

    /// Log every recomputation of the ordered board.
    pub log_ranking: bool,

    /// Log preference transitions (theme, language, exchange, mode).
    pub log_preferences: bool,
}

pub const DF: LogFlags = LogFlags {
    log_store_fetch: true,
    log_ranking: false,
    log_preferences: false,
};
