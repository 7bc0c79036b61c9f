//! Analysis configuration.
//!
//! Knobs shared by the scanner and the parser. Defaults match the language definition; the CLI maps its flags onto
//! the builder methods.

/// Longest identifier the language accepts.
pub const DEFAULT_MAX_IDENTIFIER_LEN: usize = 5;

/// Which synchronization set panic-mode recovery uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecoveryPolicy {
    /// Synchronize on the FOLLOW set of the failing non-terminal only.
    #[default]
    Local,
    /// Synchronize on the union of the FOLLOW sets of every non-terminal still pending on the parse stack.
    Enclosing,
}

impl RecoveryPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            RecoveryPolicy::Local => "local",
            RecoveryPolicy::Enclosing => "enclosing",
        }
    }
}

/// Scanner and parser settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Identifiers longer than this are lexical errors
    pub max_identifier_len: usize,
    /// Synchronization policy for syntax errors
    pub recovery: RecoveryPolicy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_identifier_len: DEFAULT_MAX_IDENTIFIER_LEN,
            recovery: RecoveryPolicy::Local,
        }
    }
}

impl AnalysisConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the identifier length limit (clamped to at least 1)
    pub fn with_max_identifier_len(mut self, len: usize) -> Self {
        self.max_identifier_len = len.max(1);
        self
    }

    /// Set the recovery policy
    pub fn with_recovery(mut self, recovery: RecoveryPolicy) -> Self {
        self.recovery = recovery;
        self
    }
}
