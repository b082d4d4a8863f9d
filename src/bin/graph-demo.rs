//! adjgraph 演示入口
//!
//! 构建示例图 (V, U, W, Z) 并打印邻接表

use adjgraph::{Direction, Edge, Graph, GraphConfig, Vertex};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "graph-demo")]
#[command(about = "邻接表图演示")]
struct Args {
    /// 构建有向图
    #[arg(short, long)]
    directed: bool,

    /// JSON 配置文件
    #[arg(short, long)]
    config: Option<String>,

    /// 日志级别（未设置 RUST_LOG 时生效）
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let mut config = match &args.config {
        Some(path) => GraphConfig::from_json_file(path)?,
        None => GraphConfig::default(),
    };
    // 命令行参数优先
    if args.directed {
        config.directed = true;
    }

    let mut graph: Graph<&str, &str> = Graph::from_config(&config);

    let v = graph.insert_vertex(Vertex::new("V"))?;
    let u = graph.insert_vertex(Vertex::new("U"))?;
    let w = graph.insert_vertex(Vertex::new("W"))?;
    let z = graph.insert_vertex(Vertex::new("Z"))?;

    for (origin, destination, weight) in [(&v, &u, "e"), (&u, &w, "g"), (&v, &w, "f"), (&w, &z, "h")] {
        graph.insert_edge(Edge::weighted(origin.clone(), destination.clone(), weight))?;
    }

    info!(
        directed = graph.is_directed(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "示例图已构建"
    );
    info!(
        out_degree = graph.degree(&w, Direction::Outgoing)?,
        in_degree = graph.degree(&w, Direction::Incoming)?,
        "顶点 W 的度"
    );

    print!("{}", graph);
    Ok(())
}
