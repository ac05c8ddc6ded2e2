//! 结果打印器
//!
//! 提供表格、垂直和 JSON 格式的结果输出

use crate::algorithm::SearchOutcome;
use crate::error::Result;
use crate::graph::{Graph, Vertex};
use indexmap::IndexSet;
use prettytable::{format, row, Cell, Row, Table};
use serde::Serialize;
use std::fmt::Display;

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 垂直模式
    Vertical,
    /// JSON
    Json,
}

/// 图统计
#[derive(Debug, Clone, Serialize)]
pub struct GraphSummary {
    pub order: usize,
    pub size: usize,
    /// 阶小于 2 时为空
    pub density: Option<f64>,
    pub min_degree: Option<usize>,
    pub max_degree: Option<usize>,
}

impl GraphSummary {
    pub fn of<V: Vertex>(graph: &Graph<V>) -> Self {
        Self {
            order: graph.order(),
            size: graph.size(),
            density: graph.density().ok(),
            min_degree: graph.min_degree(),
            max_degree: graph.max_degree(),
        }
    }
}

/// 一次运行的完整报告
#[derive(Debug, Clone, Serialize)]
pub struct RunReport<V> {
    pub graph: GraphSummary,
    /// 贪心极大独立集
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greedy: Option<IndexSet<V>>,
    /// 精确搜索结果
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact: Option<SearchOutcome<V>>,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 渲染报告
    pub fn render<V>(&self, report: &RunReport<V>) -> Result<String>
    where
        V: Vertex + Display + Serialize,
    {
        if self.mode == PrintMode::Json {
            return Ok(serde_json::to_string_pretty(report)? + "\n");
        }

        let mut output = self.print_summary(&report.graph);
        if let Some(set) = &report.greedy {
            output.push_str(&format!(
                "\nA maximal independent set of cardinality {}:\n",
                set.len()
            ));
            output.push_str(&self.print_set(set));
        }
        if let Some(outcome) = &report.exact {
            let qualifier = if outcome.complete {
                "Maximum"
            } else {
                "Lower bound on maximum"
            };
            output.push_str(&format!(
                "\n{} independent set cardinality: {} ({} nodes, {} cutoffs, {} ms)\n",
                qualifier, outcome.size, outcome.nodes, outcome.cutoffs, outcome.duration_ms
            ));
            output.push_str(&self.print_set(&outcome.witness));
        }
        Ok(output)
    }

    /// 打印图统计
    pub fn print_summary(&self, summary: &GraphSummary) -> String {
        let fmt_opt = |v: Option<usize>| v.map(|d| d.to_string()).unwrap_or_else(|| "-".into());
        let rows = vec![
            ("Order".to_string(), summary.order.to_string()),
            ("Size".to_string(), summary.size.to_string()),
            (
                "Density".to_string(),
                summary
                    .density
                    .map(|d| format!("{:.4}", d))
                    .unwrap_or_else(|| "undefined".into()),
            ),
            ("Min Degree".to_string(), fmt_opt(summary.min_degree)),
            ("Max Degree".to_string(), fmt_opt(summary.max_degree)),
        ];

        match self.mode {
            PrintMode::Vertical => self.format_vertical(&rows),
            _ => {
                let mut table = Table::new();
                table.set_format(*format::consts::FORMAT_BOX_CHARS);
                table.set_titles(row!["Property", "Value"]);
                for (name, value) in rows {
                    table.add_row(row![name, value]);
                }
                table.to_string()
            }
        }
    }

    /// 打印顶点集合
    pub fn print_set<V: Display>(&self, set: &IndexSet<V>) -> String {
        if set.is_empty() {
            return "Empty set\n".to_string();
        }
        match self.mode {
            PrintMode::Vertical => set.iter().map(|v| format!("\t{}\n", v)).collect(),
            _ => {
                let mut table = Table::new();
                table.set_format(*format::consts::FORMAT_BOX_CHARS);
                table.set_titles(Row::new(vec![Cell::new("#"), Cell::new("Vertex")]));
                for (i, v) in set.iter().enumerate() {
                    table.add_row(Row::new(vec![
                        Cell::new(&(i + 1).to_string()),
                        Cell::new(&v.to_string()),
                    ]));
                }
                table.to_string()
            }
        }
    }

    /// 垂直格式
    fn format_vertical(&self, rows: &[(String, String)]) -> String {
        let width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        rows.iter()
            .map(|(name, value)| format!("{:>width$}: {}\n", name, value, width = width))
            .collect()
    }
}
