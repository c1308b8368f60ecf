use serde::{Deserialize, Serialize};

/// What an unbounded evaluation does when the function never halts on its input.
///
/// Only consulted when no step budget is given; a bounded evaluation of a
/// diverging input always reports "not halted".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UndefinedPolicy {
    /// End the session with a divergence error instead of hanging.
    #[default]
    Abort,
    /// Report "not halted" and let the caller carry on.
    Continue,
}

impl UndefinedPolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Abort => "abort",
            Self::Continue => "continue",
        }
    }
}
