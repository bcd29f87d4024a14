use crate::config::SolverConfig;
use crate::error::{ReconstructError, SequenceKind};
use crate::util::dna;

/// 参考、查询、参考反向互补三条序列。构建后只读。
#[derive(Debug, Clone)]
pub struct SequenceStore {
    reference: Vec<u8>,
    query: Vec<u8>,
    revcomp: Vec<u8>,
}

impl SequenceStore {
    /// 校验长度上限和字母表后建立存储。
    ///
    /// 长度检查先于任何哈希计算。空序列在这里是合法的：空参考得到空索引，
    /// 空查询的最优分段为零段。
    pub fn new(reference: &[u8], query: &[u8], config: &SolverConfig) -> Result<Self, ReconstructError> {
        let reference = checked(reference, SequenceKind::Reference, config.max_seq_len)?;
        let query = checked(query, SequenceKind::Query, config.max_seq_len)?;
        let revcomp = dna::revcomp(&reference);
        Ok(Self { reference, query, revcomp })
    }

    /// 与 [`SequenceStore::new`] 相同，但拒绝空序列；面向外部输入。
    pub fn from_input(reference: &[u8], query: &[u8], config: &SolverConfig) -> Result<Self, ReconstructError> {
        if reference.is_empty() {
            return Err(ReconstructError::EmptySequence { which: SequenceKind::Reference });
        }
        if query.is_empty() {
            return Err(ReconstructError::EmptySequence { which: SequenceKind::Query });
        }
        Self::new(reference, query, config)
    }

    pub fn reference(&self) -> &[u8] {
        &self.reference
    }

    pub fn query(&self) -> &[u8] {
        &self.query
    }

    pub fn revcomp(&self) -> &[u8] {
        &self.revcomp
    }

    pub fn ref_len(&self) -> usize {
        self.reference.len()
    }

    pub fn query_len(&self) -> usize {
        self.query.len()
    }
}

pub(crate) fn checked(seq: &[u8], which: SequenceKind, max: usize) -> Result<Vec<u8>, ReconstructError> {
    if seq.len() > max {
        return Err(ReconstructError::TooLong { which, len: seq.len(), max });
    }
    dna::normalize_seq(seq).map_err(|(pos, b)| ReconstructError::InvalidBase {
        which,
        pos,
        base: char::from(b),
    })
}
