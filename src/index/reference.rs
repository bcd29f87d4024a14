use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::hash::{PowerTable, PrefixHash};

/// 片段取自参考的方向。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Forward,
    Reverse,
}

impl Orientation {
    #[inline]
    pub fn is_reversed(self) -> bool {
        self == Orientation::Reverse
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Forward => write!(f, "not reversed"),
            Orientation::Reverse => write!(f, "reversed"),
        }
    }
}

/// 某个哈希值的规范来源：参考上的起点 + 方向。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    pub start: usize,
    pub orientation: Orientation,
}

/// 参考序列全部子串（正向 + 反向互补）的哈希索引。
///
/// 同一哈希只保留第一次登记的来源（先写者胜）。两个不同子串发生 64 位哈希碰撞时，
/// 后者被静默丢弃，查询可能因此得到假阳性匹配；这是该哈希宽度下接受的近似。
#[derive(Debug, Default)]
pub struct ReferenceIndex {
    map: HashMap<u64, Origin>,
    forward: usize,
    reverse: usize,
}

impl ReferenceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从参考及其反向互补的前缀哈希表构建索引，O(L²)。
    ///
    /// 枚举所有 `start <= end`，对每一对先登记正向子串，再登记反向互补子串；
    /// 这个顺序决定了碰撞或重复时保留哪个来源。
    pub fn build(reference: &PrefixHash, revcomp: &PrefixHash, powers: &PowerTable) -> Self {
        let len = reference.seq_len();
        debug_assert_eq!(len, revcomp.seq_len());

        let mut index = Self::new();
        if len == 0 {
            return index;
        }
        index.map.reserve(len.saturating_mul(len + 1).min(1 << 20));

        for start in 0..len {
            for end in start..len {
                let fwd = reference.substr(start, end, powers);
                index.register(fwd, start, Orientation::Forward);

                let rev = revcomp.mirrored(start, end, powers);
                index.register(rev, start, Orientation::Reverse);
            }
        }
        index
    }

    /// 登记一个来源；哈希已存在则忽略，返回是否插入。
    pub fn register(&mut self, hash: u64, start: usize, orientation: Orientation) -> bool {
        match self.map.entry(hash) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(Origin { start, orientation });
                match orientation {
                    Orientation::Forward => self.forward += 1,
                    Orientation::Reverse => self.reverse += 1,
                }
                true
            }
        }
    }

    #[inline]
    pub fn lookup(&self, hash: u64) -> Option<&Origin> {
        self.map.get(&hash)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// 以正向来源登记的不同哈希数。
    pub fn forward_count(&self) -> usize {
        self.forward
    }

    /// 以反向互补来源登记的不同哈希数。
    pub fn reverse_count(&self) -> usize {
        self.reverse
    }
}
