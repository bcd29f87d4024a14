use serde::{Deserialize, Serialize};

use crate::error::ReconstructError;

/// 默认最大序列长度（参考与查询各自的上限）。
pub const DEFAULT_MAX_SEQ_LEN: usize = 10_000;

/// 默认多项式哈希基数。
pub const DEFAULT_BASE: u64 = 131;

/// 单次运行的配置。
///
/// 哈希宽度固定为 64 位（溢出回绕）；`base` 是可调的碰撞风险参数，
/// 哈希碰撞不会被检测，见 [`crate::index::reference`]。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    pub max_seq_len: usize,
    pub base: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { max_seq_len: DEFAULT_MAX_SEQ_LEN, base: DEFAULT_BASE }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> Result<(), ReconstructError> {
        if self.max_seq_len == 0 {
            return Err(ReconstructError::InvalidConfig("max_seq_len must be positive".to_string()));
        }
        if self.base < 2 {
            return Err(ReconstructError::InvalidConfig(format!(
                "hash base must be at least 2, got {}",
                self.base
            )));
        }
        Ok(())
    }
}
