//! Parser configuration

/// How `t=` lines following a time block are grouped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFolding {
    /// Both `t=` and `r=` lines continue the current time block, so adjacent
    /// `t=` lines end up in a single time description
    #[default]
    Compatible,
    /// Every `t=` line starts a new time description; only `r=` lines fold
    Strict,
}

/// What to do when a singleton field (`i=`, `c=`, ...) appears twice in the
/// same scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Keep the last occurrence
    #[default]
    LastWins,
    /// Fail with a structural error at the second occurrence
    Reject,
}

/// Configuration for [`SdpParser`](crate::SdpParser)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParserConfig {
    /// Grouping of `t=`/`r=` lines (default: compatible folding)
    pub time_folding: TimeFolding,

    /// Handling of repeated singleton fields (default: last wins)
    pub duplicates: DuplicatePolicy,

    /// Upper bound on the number of lines in a body (default: unlimited)
    pub max_lines: Option<usize>,
}

impl ParserConfig {
    /// Create a new config builder
    #[must_use]
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::default()
    }

    /// Strict configuration: every `t=` starts a new block and duplicate
    /// singletons are rejected
    #[must_use]
    pub fn strict() -> Self {
        Self {
            time_folding: TimeFolding::Strict,
            duplicates: DuplicatePolicy::Reject,
            max_lines: None,
        }
    }
}

/// Builder for `ParserConfig`
#[derive(Debug, Clone, Default)]
pub struct ParserConfigBuilder {
    config: ParserConfig,
}

impl ParserConfigBuilder {
    /// Set time block folding
    #[must_use]
    pub fn time_folding(mut self, folding: TimeFolding) -> Self {
        self.config.time_folding = folding;
        self
    }

    /// Set duplicate singleton policy
    #[must_use]
    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.config.duplicates = policy;
        self
    }

    /// Limit the number of lines accepted
    #[must_use]
    pub fn max_lines(mut self, max: usize) -> Self {
        self.config.max_lines = Some(max);
        self
    }

    /// Build the config
    #[must_use]
    pub fn build(self) -> ParserConfig {
        self.config
    }
}
