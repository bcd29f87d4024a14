use std::collections::BTreeMap;

use serde::Serialize;

use super::solver::Segmentation;
use crate::error::ReconstructError;
use crate::index::Orientation;

/// 超过该长度的片段在展示时截断。
pub const EXCERPT_FULL_MAX: usize = 10;
const EXCERPT_PREFIX: usize = 5;

/// 最优重建中用到的一个参考片段：(参考终点, 长度, 方向)。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Match {
    pub ref_end: usize,
    pub len: usize,
    pub orientation: Orientation,
}

impl Match {
    pub fn ref_start(&self) -> usize {
        self.ref_end + 1 - self.len
    }

    /// 参考正向上 `[start, end]` 的碱基，长片段截成前 5 个碱基加 `...`。
    pub fn excerpt(&self, reference: &[u8]) -> String {
        let bases = &reference[self.ref_start()..=self.ref_end];
        if self.len <= EXCERPT_FULL_MAX {
            String::from_utf8_lossy(bases).into_owned()
        } else {
            format!("{}...", String::from_utf8_lossy(&bases[..EXCERPT_PREFIX]))
        }
    }
}

/// 各个不同 [`Match`] 的出现次数。按 `(ref_end, len, orientation)` 排序。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternCounts {
    counts: BTreeMap<Match, usize>,
    total: usize,
}

impl PatternCounts {
    pub fn record(&mut self, m: Match) {
        *self.counts.entry(m).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn get(&self, m: &Match) -> usize {
        self.counts.get(m).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Match, usize)> + '_ {
        self.counts.iter().map(|(m, &c)| (m, c))
    }

    /// 不同片段的个数。
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// 重建所用片段总数（含重复）。
    pub fn total_segments(&self) -> usize {
        self.total
    }
}

/// 沿回溯从 0 走到查询末尾，统计每个片段。
///
/// 回溯在某个位置缺失或不前进时说明查询无法完整重建，返回
/// [`ReconstructError::NoReconstruction`]，不产出部分结果。
pub fn collect_patterns(seg: &Segmentation, ref_len: usize) -> Result<PatternCounts, ReconstructError> {
    let query_len = seg.query_len();
    let mut counts = PatternCounts::default();
    let mut pos = 0usize;

    while pos < query_len {
        let step = match seg.step_at(pos) {
            Some(s) if s.next > pos && s.next <= query_len => s,
            _ => return Err(ReconstructError::NoReconstruction { covered: pos }),
        };
        let len = step.next - pos;
        if step.ref_start + len > ref_len {
            return Err(ReconstructError::TraceOutOfBounds { pos, ref_start: step.ref_start, len });
        }
        counts.record(Match { ref_end: step.ref_start + len - 1, len, orientation: step.orientation });
        pos = step.next;
    }

    Ok(counts)
}
