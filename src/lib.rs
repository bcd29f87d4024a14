//! # segrep
//!
//! 把查询 DNA 序列重建为参考序列片段的最短拼接，每个片段可取正向或反向互补。
//!
//! 流程：
//!
//! - **序列存储**：参考、查询、参考的反向互补，长度上限在加载时检查
//! - **滚动哈希**：前缀哈希 + 幂表，O(1) 取任意子串哈希
//! - **参考索引**：参考全部子串（两种方向）的哈希 → 首次出现的来源
//! - **分段求解**：从查询末尾向前的 DP，求最少片段数
//! - **片段统计**：沿回溯统计 (参考终点, 长度, 方向) 的出现次数
//!
//! ## 快速示例
//!
//! ```rust
//! use segrep::config::SolverConfig;
//! use segrep::index::Orientation;
//! use segrep::segment::{reconstruct, Match};
//!
//! let counts = reconstruct(b"ACGTACGT", b"ACGT", SolverConfig::default()).unwrap();
//! let m = Match { ref_end: 3, len: 4, orientation: Orientation::Forward };
//! assert_eq!(counts.get(&m), 1);
//! assert_eq!(counts.len(), 1);
//! ```
//!
//! ## 模块说明
//!
//! - [`index`] — 滚动哈希与参考索引
//! - [`segment`] — 序列存储、分段 DP、片段统计
//! - [`io`] — 序列文件读取（FASTA / 纯文本）与结果输出（表格 / JSON）
//! - [`config`] — 运行参数
//! - [`error`] — 错误类型
//! - [`util`] — 反向互补等 DNA 工具函数

pub mod config;
pub mod error;
pub mod index;
pub mod io;
pub mod segment;
pub mod util;

pub use config::SolverConfig;
pub use error::{ReconstructError, SequenceKind};
pub use segment::{reconstruct, Match, PatternCounts, Reconstructor};
