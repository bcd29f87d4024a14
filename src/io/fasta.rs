use anyhow::{Context, Result};
use std::io::BufRead;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct FastaRecord {
    pub id: String,
    pub desc: Option<String>,
    pub seq: Vec<u8>,
}

pub struct FastaReader<R: BufRead> {
    reader: R,
    buf: String,
    done: bool,
    peek_header: Option<String>,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, buf: String::new(), done: false, peek_header: None }
    }

    /// 以已读到的首个 header 开始（格式探测时用）。
    fn with_header(reader: R, header: String) -> Self {
        Self { reader, buf: String::new(), done: false, peek_header: Some(header) }
    }

    pub fn next_record(&mut self) -> Result<Option<FastaRecord>> {
        if self.done {
            return Ok(None);
        }

        let header = match self.peek_header.take() {
            Some(h) => h,
            None => loop {
                self.buf.clear();
                if self.reader.read_line(&mut self.buf)? == 0 {
                    self.done = true;
                    return Ok(None);
                }
                if let Some(h) = self.buf.strip_prefix('>') {
                    break h.trim().to_string();
                }
            },
        };

        let mut parts = header.splitn(2, char::is_whitespace);
        let id = parts.next().unwrap_or("").to_string();
        let desc = parts.next().map(|s| s.trim().to_string()).filter(|s| !s.is_empty());

        let mut seq: Vec<u8> = Vec::new();
        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                self.done = true;
                break;
            }
            if let Some(h) = self.buf.strip_prefix('>') {
                self.peek_header = Some(h.trim().to_string());
                break;
            }
            seq.extend(
                self.buf
                    .bytes()
                    .filter(|b| !b.is_ascii_whitespace())
                    .map(|b| b.to_ascii_uppercase()),
            );
        }

        Ok(Some(FastaRecord { id, desc, seq }))
    }
}

/// 读取一条序列。
///
/// 首个非空行以 `>` 开头时按 FASTA 解析并取第一条记录；否则取文件中第一个
/// 空白分隔的词作为序列（纯文本格式，一行一条）。碱基统一大写，字母表检查留给调用方。
pub fn parse_sequence<R: BufRead>(mut reader: R) -> Result<Vec<u8>> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(Vec::new());
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(h) = trimmed.strip_prefix('>') {
            let mut fasta = FastaReader::with_header(reader, h.trim().to_string());
            return Ok(fasta.next_record()?.map(|r| r.seq).unwrap_or_default());
        }
        let token = trimmed.split_whitespace().next().unwrap_or("");
        return Ok(token.bytes().map(|b| b.to_ascii_uppercase()).collect());
    }
}

pub fn read_sequence<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let fh = std::fs::File::open(path).with_context(|| format!("cannot open sequence file '{}'", path.display()))?;
    parse_sequence(std::io::BufReader::new(fh)).with_context(|| format!("cannot read sequence file '{}'", path.display()))
}
