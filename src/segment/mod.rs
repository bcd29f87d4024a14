pub mod report;
pub mod solver;
pub mod store;

use std::time::Instant;

use tracing::{debug, info};

use crate::config::SolverConfig;
use crate::error::{ReconstructError, SequenceKind};
use crate::index::{PowerTable, PrefixHash, ReferenceIndex};
use crate::util::dna;

pub use report::{collect_patterns, Match, PatternCounts};
pub use solver::{solve, Segmentation, Step, UNREACHABLE};
pub use store::SequenceStore;

/// 一次运行的全部状态：序列、三张前缀哈希表、参考索引。
///
/// 构建后只读；[`Reconstructor::run`] 可以重复调用，结果相同。
#[derive(Debug)]
pub struct Reconstructor {
    config: SolverConfig,
    store: SequenceStore,
    powers: PowerTable,
    query_hash: PrefixHash,
    index: ReferenceIndex,
}

/// 求解结果：DP 表与统计好的片段。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    pub segmentation: Segmentation,
    pub patterns: PatternCounts,
}

impl Reconstructor {
    pub fn new(store: SequenceStore, config: SolverConfig) -> Result<Self, ReconstructError> {
        config.validate()?;

        let powers = PowerTable::new(config.base, store.ref_len().max(store.query_len()));
        let reference_hash = PrefixHash::build(store.reference(), config.base);
        let revcomp_hash = PrefixHash::build(store.revcomp(), config.base);
        let query_hash = PrefixHash::build(store.query(), config.base);

        let t0 = Instant::now();
        let index = ReferenceIndex::build(&reference_hash, &revcomp_hash, &powers);
        info!(
            ref_len = store.ref_len(),
            entries = index.len(),
            forward = index.forward_count(),
            reverse = index.reverse_count(),
            "reference index built"
        );
        debug!("index build took {:.3}s", t0.elapsed().as_secs_f64());

        Ok(Self { config, store, powers, query_hash, index })
    }

    /// 校验输入后构建；空序列、超长、非法碱基都在这里拒绝。
    pub fn from_sequences(reference: &[u8], query: &[u8], config: SolverConfig) -> Result<Self, ReconstructError> {
        config.validate()?;
        let store = SequenceStore::from_input(reference, query, &config)?;
        Self::new(store, config)
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn store(&self) -> &SequenceStore {
        &self.store
    }

    pub fn index(&self) -> &ReferenceIndex {
        &self.index
    }

    pub fn solve(&self) -> Segmentation {
        let t0 = Instant::now();
        let seg = solve(&self.query_hash, &self.index, &self.powers);
        debug!(
            query_len = self.store.query_len(),
            "segmentation solved in {:.3}s",
            t0.elapsed().as_secs_f64()
        );
        seg
    }

    /// 求解并统计片段；查询无法完整重建时返回 `NoReconstruction`。
    pub fn run(&self) -> Result<Reconstruction, ReconstructError> {
        let segmentation = self.solve();
        match segmentation.segment_count() {
            Some(n) => info!(segments = n, "query fully reconstructed"),
            None => info!("query cannot be fully reconstructed"),
        }
        let patterns = collect_patterns(&segmentation, self.store.ref_len())?;
        Ok(Reconstruction { segmentation, patterns })
    }
}

/// 一步完成：校验、建索引、求解、统计。
pub fn reconstruct(reference: &[u8], query: &[u8], config: SolverConfig) -> Result<PatternCounts, ReconstructError> {
    Reconstructor::from_sequences(reference, query, config)?.run().map(|r| r.patterns)
}

/// 只为参考建索引（不需要查询），供统计使用。
pub fn index_reference(reference: &[u8], config: &SolverConfig) -> Result<ReferenceIndex, ReconstructError> {
    config.validate()?;
    if reference.is_empty() {
        return Err(ReconstructError::EmptySequence { which: SequenceKind::Reference });
    }
    let reference = store::checked(reference, SequenceKind::Reference, config.max_seq_len)?;
    let revcomp = dna::revcomp(&reference);
    let powers = PowerTable::new(config.base, reference.len());
    Ok(ReferenceIndex::build(
        &PrefixHash::build(&reference, config.base),
        &PrefixHash::build(&revcomp, config.base),
        &powers,
    ))
}
