use crate::index::{Orientation, PowerTable, PrefixHash, ReferenceIndex};

/// `best[p]` 不可达时的哨兵值。
pub const UNREACHABLE: u32 = u32::MAX;

/// 位置 `p` 上最优选择的回溯信息。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// 下一个未覆盖的查询位置（`end + 1`）
    pub next: usize,
    /// 命中来源在参考上的起点
    pub ref_start: usize,
    pub orientation: Orientation,
}

/// 分段 DP 的结果。
///
/// `best[p]` 为覆盖 `query[p..]` 所需的最少片段数，`best[len] = 0`。
/// `trace[p]` 仅在 `best[p]` 可达时有值。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    best: Vec<u32>,
    trace: Vec<Option<Step>>,
}

impl Segmentation {
    pub fn query_len(&self) -> usize {
        self.best.len() - 1
    }

    /// 最少片段数；查询无法完整覆盖时为 `None`。
    pub fn segment_count(&self) -> Option<u32> {
        match self.best[0] {
            UNREACHABLE => None,
            n => Some(n),
        }
    }

    pub fn is_solved(&self) -> bool {
        self.segment_count().is_some()
    }

    /// 覆盖 `query[pos..]` 的最少片段数，不可达返回 `UNREACHABLE`。
    pub fn best_at(&self, pos: usize) -> u32 {
        self.best[pos]
    }

    pub fn step_at(&self, pos: usize) -> Option<Step> {
        self.trace.get(pos).copied().flatten()
    }
}

/// 从终点向前计算最少分段。
///
/// 对每个 `p`，按 `end` 递增枚举 `query[p..=end]`；只有严格更优才更新，
/// 所以等价最优解里保留 `end` 最小（片段最短）的那个。
pub fn solve(query: &PrefixHash, index: &ReferenceIndex, powers: &PowerTable) -> Segmentation {
    let n = query.seq_len();
    let mut best = vec![UNREACHABLE; n + 1];
    let mut trace: Vec<Option<Step>> = vec![None; n + 1];
    best[n] = 0;

    for p in (0..n).rev() {
        for end in p..n {
            let next = end + 1;
            if best[next] == UNREACHABLE {
                continue;
            }
            let Some(origin) = index.lookup(query.substr(p, end, powers)) else {
                continue;
            };
            let cand = best[next] + 1;
            if cand < best[p] {
                best[p] = cand;
                trace[p] = Some(Step { next, ref_start: origin.start, orientation: origin.orientation });
            }
        }
    }

    Segmentation { best, trace }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::dna;

    const BASE: u64 = 131;

    fn run(reference: &[u8], query: &[u8]) -> Segmentation {
        let rc = dna::revcomp(reference);
        let pw = PowerTable::new(BASE, reference.len().max(query.len()));
        let idx = ReferenceIndex::build(
            &PrefixHash::build(reference, BASE),
            &PrefixHash::build(&rc, BASE),
            &pw,
        );
        solve(&PrefixHash::build(query, BASE), &idx, &pw)
    }

    /// 暴力求最少分段：枚举所有切分，每段必须是参考的正向或反向互补子串。
    fn brute_force_min(reference: &[u8], query: &[u8]) -> Option<u32> {
        let rc = dna::revcomp(reference);
        let occurs = |piece: &[u8]| {
            reference.windows(piece.len()).any(|w| w == piece) || rc.windows(piece.len()).any(|w| w == piece)
        };
        let n = query.len();
        if n == 0 {
            return Some(0);
        }
        let mut best: Option<u32> = None;
        // bit i set = cut after position i
        for mask in 0u32..(1 << (n - 1)) {
            let mut start = 0;
            let mut pieces = 0u32;
            let mut ok = true;
            for i in 0..n {
                if i == n - 1 || mask & (1 << i) != 0 {
                    if !occurs(&query[start..=i]) {
                        ok = false;
                        break;
                    }
                    pieces += 1;
                    start = i + 1;
                }
            }
            if ok {
                best = Some(best.map_or(pieces, |b| b.min(pieces)));
            }
        }
        best
    }

    fn make_seq(len: usize, seed: u32) -> Vec<u8> {
        let mut x = seed;
        (0..len)
            .map(|_| {
                x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                dna::BASES[(x >> 16) as usize % 4]
            })
            .collect()
    }

    #[test]
    fn exact_substring_is_one_forward_segment() {
        let seg = run(b"ACGTACGT", b"ACGT");
        assert_eq!(seg.segment_count(), Some(1));
        let step = seg.step_at(0).unwrap();
        assert_eq!(step, Step { next: 4, ref_start: 0, orientation: Orientation::Forward });
    }

    #[test]
    fn reverse_complement_substring_is_one_reverse_segment() {
        // revcomp("AAACG") = "CGTTT"
        let seg = run(b"TAAACGA", b"CGTTT");
        assert_eq!(seg.segment_count(), Some(1));
        let step = seg.step_at(0).unwrap();
        assert_eq!(step.orientation, Orientation::Reverse);
        assert_eq!(step.ref_start, 1);
        assert_eq!(step.next, 5);
    }

    #[test]
    fn query_longer_than_reference_reuses_segments() {
        let seg = run(b"ACG", b"ACGACGACG");
        assert_eq!(seg.segment_count(), Some(3));
    }

    #[test]
    fn unreachable_terminal_reported() {
        let seg = run(b"AAAA", b"CCCC");
        assert_eq!(seg.segment_count(), None);
        assert!(!seg.is_solved());
        assert_eq!(seg.step_at(0), None);
        assert_eq!(seg.best_at(4), 0);
    }

    #[test]
    fn empty_reference_cannot_cover_query() {
        let seg = run(b"", b"ACGT");
        assert_eq!(seg.segment_count(), None);
    }

    #[test]
    fn empty_query_needs_no_segments() {
        let seg = run(b"ACGT", b"");
        assert_eq!(seg.segment_count(), Some(0));
        assert_eq!(seg.query_len(), 0);
    }

    #[test]
    fn shortest_winning_extension_is_kept_on_ties() {
        let seg = run(b"ACTTCGT", b"ACGT");
        assert_eq!(seg.segment_count(), Some(2));
        // "A|CGT"、"AC|GT"、"ACG|T" 都是 2 段，按 end 递增先遇到 "A"
        assert_eq!(seg.step_at(0).unwrap().next, 1);
    }

    #[test]
    fn dp_matches_brute_force_on_small_inputs() {
        for seed in 0..40u32 {
            let reference = make_seq(3 + (seed as usize % 5), seed * 7 + 1);
            let query = make_seq(1 + (seed as usize % 8), seed * 13 + 5);
            let seg = run(&reference, &query);
            assert_eq!(
                seg.segment_count(),
                brute_force_min(&reference, &query),
                "reference={:?} query={:?}",
                String::from_utf8_lossy(&reference),
                String::from_utf8_lossy(&query)
            );
        }
    }

    #[test]
    fn solving_twice_is_deterministic() {
        let reference = make_seq(40, 99);
        let query = make_seq(30, 3);
        assert_eq!(run(&reference, &query), run(&reference, &query));
    }
}
