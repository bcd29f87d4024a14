//! 演示如何在 library 模式下使用 segrep 重建查询序列。
//!
//! 运行方式：
//! ```bash
//! cargo run --example reconstruct
//! ```

use segrep::config::SolverConfig;
use segrep::io::output;
use segrep::segment::Reconstructor;
use segrep::util::dna;

fn main() -> anyhow::Result<()> {
    // 1. 参考序列
    let reference = b"ACGTACGTAGCTGATCGTAGCTAGCTAGCTGATCGTAGCTAGCTAGCTGAT";
    println!("参考序列: {}", String::from_utf8_lossy(reference));
    println!("参考长度: {} bp", reference.len());

    // 2. 查询 = 正向片段 + 反向互补片段 + 重复的正向片段
    let mut query = reference[5..20].to_vec();
    query.extend(dna::revcomp(&reference[22..34]));
    query.extend_from_slice(&reference[5..20]);
    println!("查询序列: {}", String::from_utf8_lossy(&query));

    // 3. 建索引并求解
    let solver = Reconstructor::from_sequences(reference, &query, SolverConfig::default())?;
    println!(
        "\n参考索引：{} 个不同哈希（正向 {}，反向互补 {}）",
        solver.index().len(),
        solver.index().forward_count(),
        solver.index().reverse_count()
    );

    let result = solver.run()?;
    println!("最少片段数: {:?}", result.segmentation.segment_count());

    // 4. 输出表格
    println!();
    output::write_table(&mut std::io::stdout(), reference, &result.patterns)?;

    println!("\n完成！");
    Ok(())
}
