/// 规范碱基字母表。索引与比较都只接受这四个字符。
pub const BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

#[inline]
pub fn is_canonical(b: u8) -> bool {
    matches!(b, b'A' | b'C' | b'G' | b'T')
}

/// Watson-Crick 配对：A↔T，C↔G。其它字节原样返回。
#[inline]
pub fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'C' => b'G',
        b'G' => b'C',
        b'T' => b'A',
        other => other,
    }
}

pub fn revcomp(seq: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(seq.len());
    for &b in seq.iter().rev() {
        out.push(complement(b));
    }
    out
}

/// 大写化并检查字母表；返回第一个非法字节的位置和值。
pub fn normalize_seq(seq: &[u8]) -> Result<Vec<u8>, (usize, u8)> {
    let mut out = Vec::with_capacity(seq.len());
    for (i, &b) in seq.iter().enumerate() {
        let up = b.to_ascii_uppercase();
        if !is_canonical(up) {
            return Err((i, b));
        }
        out.push(up);
    }
    Ok(out)
}
