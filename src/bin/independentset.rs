//! 独立集命令行工具
//!
//! 读取边表，计算极大独立集和/或最大独立集

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use independentset::algorithm::{greedy_mis, greedy_mis_by_key, ExactSolver, SolverConfig};
use independentset::cli::{GraphSummary, PrintMode, Printer, RunReport};
use independentset::graph::Graph;
use independentset::import::{EdgeListImporter, InputFormat};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// 贪心极大独立集
    Greedy,
    /// 精确最大独立集
    Exact,
    /// 两者都计算
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GreedyOrder {
    /// 插入顺序
    Insertion,
    /// 度数从小到大
    MinDegree,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Output {
    Table,
    Vertical,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "independentset")]
#[command(about = "无向图独立集求解工具")]
struct Args {
    /// 边表文件路径
    #[arg(short, long)]
    input: PathBuf,

    /// 输入格式: csv, jsonl
    #[arg(short, long, default_value = "csv")]
    format: String,

    /// CSV 分隔符
    #[arg(long, default_value = ",")]
    delimiter: char,

    /// CSV 首行为表头
    #[arg(long)]
    header: bool,

    /// 顶点列表文件（每行一个标识符，用于孤立顶点）
    #[arg(long)]
    vertices: Option<PathBuf>,

    /// 中心顶点：与导入的图做联接，即与所有顶点相邻
    #[arg(long)]
    hub: Option<String>,

    /// 计算模式
    #[arg(short, long, value_enum, default_value = "greedy")]
    mode: Mode,

    /// 贪心遍历顺序
    #[arg(long, value_enum, default_value = "insertion")]
    greedy_order: GreedyOrder,

    /// 求解器配置文件（JSON），命令行参数优先
    #[arg(long)]
    solver_config: Option<PathBuf>,

    /// 精确搜索的最大分支深度
    #[arg(long)]
    max_depth: Option<usize>,

    /// 精确搜索的时间上限（毫秒）
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// 并行精确搜索
    #[arg(short, long)]
    parallel: bool,

    /// 并行展开的分支层数
    #[arg(long)]
    parallel_depth: Option<usize>,

    /// 输出格式
    #[arg(short, long, value_enum, default_value = "table")]
    output: Output,

    /// 日志级别（RUST_LOG 优先）
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let graph = load_graph(&args)?;
    info!(order = graph.order(), size = graph.size(), "graph built");

    let greedy = match args.mode {
        Mode::Greedy | Mode::Both => Some(match args.greedy_order {
            GreedyOrder::Insertion => greedy_mis(&graph),
            GreedyOrder::MinDegree => greedy_mis_by_key(&graph, |g, v| g.degree(v)),
        }),
        Mode::Exact => None,
    };

    let exact = match args.mode {
        Mode::Exact | Mode::Both => {
            let solver = ExactSolver::new(solver_config(&args)?);
            Some(if args.parallel {
                solver.solve_parallel(&graph)
            } else {
                solver.solve(&graph)
            })
        }
        Mode::Greedy => None,
    };

    let report = RunReport {
        graph: GraphSummary::of(&graph),
        greedy,
        exact,
    };
    let mode = match args.output {
        Output::Table => PrintMode::Table,
        Output::Vertical => PrintMode::Vertical,
        Output::Json => PrintMode::Json,
    };
    print!("{}", Printer::new(mode).render(&report)?);

    Ok(())
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn load_graph(args: &Args) -> Result<Graph<String>> {
    let format: InputFormat = args.format.parse()?;
    let mut importer = EdgeListImporter::new()
        .with_delimiter(args.delimiter)?
        .with_header(args.header);

    importer
        .import_file(&args.input, format)
        .with_context(|| format!("导入边表失败: {}", args.input.display()))?;
    if let Some(path) = &args.vertices {
        importer
            .import_vertex_file(path)
            .with_context(|| format!("导入顶点列表失败: {}", path.display()))?;
    }

    let social = importer.into_graph();
    Ok(match &args.hub {
        // 中心顶点与图中所有顶点相邻
        Some(hub) => Graph::from_parts([hub.clone()], []).join(&social),
        None => social,
    })
}

fn solver_config(args: &Args) -> Result<SolverConfig> {
    let mut config = match &args.solver_config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("读取求解器配置失败: {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("解析求解器配置失败: {}", path.display()))?
        }
        None => SolverConfig::default(),
    };

    if let Some(depth) = args.max_depth {
        config = config.with_max_depth(depth);
    }
    if let Some(ms) = args.timeout_ms {
        config = config.with_deadline(Duration::from_millis(ms));
    }
    if let Some(depth) = args.parallel_depth {
        config = config.with_parallel_depth(depth);
    }
    Ok(config)
}
