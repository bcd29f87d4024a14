use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use crate::segment::PatternCounts;

pub const TABLE_HEADER: &str = "| Location in ref |    Segment    | count | Size  | Reversed |";

/// 文本表格，每个不同片段一行。
pub fn write_table<W: Write>(out: &mut W, reference: &[u8], patterns: &PatternCounts) -> Result<()> {
    writeln!(out, "{}", TABLE_HEADER)?;
    for (m, count) in patterns.iter() {
        writeln!(
            out,
            "| {:>5}  -  {:>5} | {:<13} | {:>5} | {:>5} | {:<8} |",
            m.ref_start(),
            m.ref_end,
            m.excerpt(reference),
            count,
            m.len,
            if m.orientation.is_reversed() { "Yes" } else { "No" },
        )?;
    }
    writeln!(out, "segments: {}, distinct: {}", patterns.total_segments(), patterns.len())?;
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct PatternRow {
    pub ref_start: usize,
    pub ref_end: usize,
    pub len: usize,
    pub reversed: bool,
    pub count: usize,
    pub excerpt: String,
}

#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub generated_at: String,
    pub reference_len: usize,
    pub query_len: usize,
    pub segments: usize,
    pub patterns: Vec<PatternRow>,
}

impl JsonReport {
    pub fn new(reference: &[u8], query_len: usize, patterns: &PatternCounts) -> Self {
        let rows = patterns
            .iter()
            .map(|(m, count)| PatternRow {
                ref_start: m.ref_start(),
                ref_end: m.ref_end,
                len: m.len,
                reversed: m.orientation.is_reversed(),
                count,
                excerpt: m.excerpt(reference),
            })
            .collect();
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            reference_len: reference.len(),
            query_len,
            segments: patterns.total_segments(),
            patterns: rows,
        }
    }
}

pub fn write_json<W: Write>(out: &mut W, report: &JsonReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
