//! 多项式滚动哈希。
//!
//! `H[i] = H[i-1] * BASE + seq[i]`，全部运算在 `u64` 上回绕（溢出即取模 2^64）。
//! 预处理 O(n) 后，任意子串哈希 O(1)：
//! `hash(a..=b) = H[b] - H[a-1] * BASE^(b-a+1)`。
//!
//! 字符值直接取 ASCII 码，与参考实现逐位一致。

/// BASE 的幂表：`powers[0] = 1`，`powers[k] = powers[k-1] * BASE`。
#[derive(Debug, Clone)]
pub struct PowerTable {
    base: u64,
    powers: Vec<u64>,
}

impl PowerTable {
    /// 预计算 `0..=max_len` 的幂，可覆盖任意不超过 `max_len` 的子串长度。
    pub fn new(base: u64, max_len: usize) -> Self {
        let mut powers = Vec::with_capacity(max_len + 1);
        let mut p = 1u64;
        powers.push(p);
        for _ in 0..max_len {
            p = p.wrapping_mul(base);
            powers.push(p);
        }
        Self { base, powers }
    }

    #[inline]
    pub fn base(&self) -> u64 {
        self.base
    }

    #[inline]
    pub fn get(&self, k: usize) -> u64 {
        self.powers[k]
    }

    /// 可查询的最大指数。
    pub fn max_exponent(&self) -> usize {
        self.powers.len() - 1
    }
}

/// 单条序列的前缀哈希表。
///
/// 内部多存一个 `prefix[0] = 0`，于是 `a == 0` 不再需要特判。
#[derive(Debug, Clone)]
pub struct PrefixHash {
    prefix: Vec<u64>,
}

impl PrefixHash {
    pub fn build(seq: &[u8], base: u64) -> Self {
        let mut prefix = Vec::with_capacity(seq.len() + 1);
        let mut h = 0u64;
        prefix.push(h);
        for &b in seq {
            h = h.wrapping_mul(base).wrapping_add(b as u64);
            prefix.push(h);
        }
        Self { prefix }
    }

    /// 被哈希序列的长度。
    #[inline]
    pub fn seq_len(&self) -> usize {
        self.prefix.len() - 1
    }

    /// 闭区间 `[a, b]`（0 起始）的子串哈希。
    #[inline]
    pub fn substr(&self, a: usize, b: usize, powers: &PowerTable) -> u64 {
        debug_assert!(a <= b && b < self.seq_len(), "bad range [{}, {}]", a, b);
        self.prefix[b + 1].wrapping_sub(self.prefix[a].wrapping_mul(powers.get(b - a + 1)))
    }

    /// 镜像区间 `[L-b-1, L-a-1]` 的子串哈希。
    ///
    /// 当 `self` 是参考序列反向互补的前缀表时，结果等于正向参考 `[a, b]`
    /// 这段的反向互补的哈希。
    #[inline]
    pub fn mirrored(&self, a: usize, b: usize, powers: &PowerTable) -> u64 {
        let l = self.seq_len();
        self.substr(l - b - 1, l - a - 1, powers)
    }
}

/// O(n) 直接计算整段哈希，供测试与校验使用。
pub fn linear_hash(seq: &[u8], base: u64) -> u64 {
    seq.iter().fold(0u64, |h, &b| h.wrapping_mul(base).wrapping_add(b as u64))
}
