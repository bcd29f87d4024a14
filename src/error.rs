use std::fmt;

use thiserror::Error;

/// 输入序列的角色，用于错误信息。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    Reference,
    Query,
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceKind::Reference => write!(f, "reference"),
            SequenceKind::Query => write!(f, "query"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReconstructError {
    #[error("{which} sequence is empty")]
    EmptySequence { which: SequenceKind },

    #[error("{which} sequence has {len} bases, maximum supported is {max}")]
    TooLong { which: SequenceKind, len: usize, max: usize },

    #[error("{which} sequence has invalid base {base:?} at position {pos}")]
    InvalidBase { which: SequenceKind, pos: usize, base: char },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("no complete reconstruction found (query covered up to position {covered})")]
    NoReconstruction { covered: usize },

    #[error("trace at query position {pos} points past the reference end (ref_start={ref_start}, len={len})")]
    TraceOutOfBounds { pos: usize, ref_start: usize, len: usize },
}

impl ReconstructError {
    /// 输入/配置类错误（区别于无解）。
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ReconstructError::EmptySequence { .. }
                | ReconstructError::TooLong { .. }
                | ReconstructError::InvalidBase { .. }
                | ReconstructError::InvalidConfig(_)
        )
    }
}
