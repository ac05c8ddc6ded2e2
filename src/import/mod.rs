//! 数据导入模块
//!
//! 从 CSV 边表、JSON Lines 和顶点列表构建图。
//! 数据来源（例如社交网络好友关系的抓取）不在本库范围内，这里只负责
//! 把有限的 (顶点, 顶点) 对流和顶点集合读入 [`Graph`]。

use crate::error::{Error, Result};
use crate::graph::{Graph, Vertex};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;
use tracing::{info, warn};

/// 输入格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputFormat {
    /// 每行 `u,v`
    #[default]
    Csv,
    /// 每行 `{"u": ..., "v": ...}`
    JsonLines,
}

impl FromStr for InputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(InputFormat::Csv),
            "jsonl" | "json" | "ndjson" => Ok(InputFormat::JsonLines),
            other => Err(Error::ParseError(format!("不支持的格式: {}", other))),
        }
    }
}

/// 导入统计
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ImportStats {
    /// 读取的记录数
    pub records: usize,
    /// 新增顶点数
    pub vertices_imported: usize,
    /// 新增边数
    pub edges_imported: usize,
    /// 被忽略的自环
    pub self_loops: usize,
    /// 被忽略的重复边
    pub duplicates: usize,
    /// 格式错误的记录
    pub errors: usize,
    pub duration_ms: u64,
}

/// 导入选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    /// CSV 分隔符
    pub delimiter: u8,
    /// CSV 是否有表头
    pub has_header: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_header: false,
        }
    }
}

/// JSON Lines 中的一条边
#[derive(Debug, Deserialize)]
struct EdgeRecord {
    #[serde(alias = "source", alias = "uid1")]
    u: serde_json::Value,
    #[serde(alias = "target", alias = "uid2")]
    v: serde_json::Value,
}

/// 边表导入器
pub struct EdgeListImporter {
    graph: Graph<String>,
    options: ImportOptions,
}

impl EdgeListImporter {
    /// 创建导入器（空图）
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            options: ImportOptions::default(),
        }
    }

    /// 在已有图上继续导入
    pub fn with_graph(mut self, graph: Graph<String>) -> Self {
        self.graph = graph;
        self
    }

    /// 设置导入选项
    pub fn with_options(mut self, options: ImportOptions) -> Self {
        self.options = options;
        self
    }

    /// 设置 CSV 分隔符，只接受单字节 ASCII 字符
    pub fn with_delimiter(mut self, delimiter: char) -> Result<Self> {
        if !delimiter.is_ascii() {
            return Err(Error::InvalidConfig(format!(
                "分隔符必须是 ASCII 字符: {:?}",
                delimiter
            )));
        }
        self.options.delimiter = delimiter as u8;
        Ok(self)
    }

    /// 设置 CSV 是否有表头
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.options.has_header = has_header;
        self
    }

    /// 当前图
    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }

    /// 取出图
    pub fn into_graph(self) -> Graph<String> {
        self.graph
    }

    /// 按格式导入边表文件
    pub fn import_file<P: AsRef<Path>>(&mut self, path: P, format: InputFormat) -> Result<ImportStats> {
        let path = path.as_ref();
        info!(path = %path.display(), ?format, "importing edge list");
        let file = File::open(path)?;
        match format {
            InputFormat::Csv => self.import_csv(file),
            InputFormat::JsonLines => self.import_jsonl(BufReader::new(file)),
        }
    }

    /// 从 CSV 导入边
    ///
    /// `#` 开头的行为注释；字段两端空白被去除；多于两列时只取前两列。
    pub fn import_csv<R: Read>(&mut self, reader: R) -> Result<ImportStats> {
        let start = std::time::Instant::now();
        let order_before = self.graph.order();
        let mut stats = ImportStats::default();

        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(self.options.delimiter)
            .has_headers(self.options.has_header)
            .comment(Some(b'#'))
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        for (line, result) in rdr.records().enumerate() {
            stats.records += 1;
            let record = match result {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    warn!(line = line + 1, error = %e, "skipping malformed record");
                    stats.errors += 1;
                    continue;
                }
            };
            match (record.get(0), record.get(1)) {
                (Some(u), Some(v)) if !u.is_empty() && !v.is_empty() => {
                    self.record_pair(u.to_string(), v.to_string(), &mut stats);
                }
                _ => {
                    warn!(line = line + 1, "skipping record without two endpoints");
                    stats.errors += 1;
                }
            }
        }

        stats.vertices_imported = self.graph.order() - order_before;
        stats.duration_ms = start.elapsed().as_millis() as u64;
        info!(?stats, "csv import finished");
        Ok(stats)
    }

    /// 从 JSON Lines 导入边
    ///
    /// 端点可以是字符串或数字，数字按十进制文本存储。
    pub fn import_jsonl<R: BufRead>(&mut self, reader: R) -> Result<ImportStats> {
        let start = std::time::Instant::now();
        let order_before = self.graph.order();
        let mut stats = ImportStats::default();

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            stats.records += 1;
            match parse_json_edge(line) {
                Ok((u, v)) => self.record_pair(u, v, &mut stats),
                Err(e) => {
                    warn!(line = line_no + 1, error = %e, "skipping malformed record");
                    stats.errors += 1;
                }
            }
        }

        stats.vertices_imported = self.graph.order() - order_before;
        stats.duration_ms = start.elapsed().as_millis() as u64;
        info!(?stats, "jsonl import finished");
        Ok(stats)
    }

    /// 导入顶点列表文件（每行一个标识符）
    pub fn import_vertex_file<P: AsRef<Path>>(&mut self, path: P) -> Result<ImportStats> {
        let path = path.as_ref();
        info!(path = %path.display(), "importing vertex list");
        self.import_vertices(BufReader::new(File::open(path)?))
    }

    /// 导入顶点列表，空行和 `#` 注释被跳过
    pub fn import_vertices<R: BufRead>(&mut self, reader: R) -> Result<ImportStats> {
        let start = std::time::Instant::now();
        let mut stats = ImportStats::default();

        for line in reader.lines() {
            let line = line?;
            let id = line.trim();
            if id.is_empty() || id.starts_with('#') {
                continue;
            }
            stats.records += 1;
            if self.graph.add_vertex(id.to_string()) {
                stats.vertices_imported += 1;
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        info!(?stats, "vertex import finished");
        Ok(stats)
    }

    fn record_pair(&mut self, u: String, v: String, stats: &mut ImportStats) {
        if u == v {
            stats.self_loops += 1;
            // 自环不是边，但端点仍然是顶点
            self.graph.add_vertex(u);
        } else if self.graph.add_edge(u, v) {
            stats.edges_imported += 1;
        } else {
            stats.duplicates += 1;
        }
    }
}

impl Default for EdgeListImporter {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_json_edge(line: &str) -> Result<(String, String)> {
    let record: EdgeRecord = serde_json::from_str(line)?;
    Ok((json_vertex(record.u)?, json_vertex(record.v)?))
}

fn json_vertex(value: serde_json::Value) -> Result<String> {
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(Error::ImportError(format!("无效的顶点标识符: {}", other))),
    }
}

/// 由内存中的顶点对流直接建图
pub fn from_pairs<V, I>(pairs: I) -> Graph<V>
where
    V: Vertex,
    I: IntoIterator<Item = (V, V)>,
{
    pairs.into_iter().collect()
}

/// 从文件导入边表
pub fn import_edge_list<P: AsRef<Path>>(path: P, format: InputFormat) -> Result<Graph<String>> {
    let mut importer = EdgeListImporter::new();
    importer.import_file(path, format)?;
    Ok(importer.into_graph())
}
