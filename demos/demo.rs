//! wgraph 演示脚本
//!
//! 构建一个小型有向带权图并执行基本查询

use tracing_subscriber::EnvFilter;
use wgraph::{Graph, GraphConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("wgraph 演示");
    println!("===========\n");

    let config = GraphConfig::new().with_vertex_capacity(4);
    let mut graph: Graph<String, i32> = Graph::with_config(config)?;

    // 1. 添加顶点和边
    println!("1. 构建图...");
    for v in ["A", "B", "C", "D"] {
        graph.add_vertex(v.to_string());
    }
    graph.add_edge("A".into(), "B".into(), 5);
    graph.add_edge("A".into(), "C".into(), 2);
    graph.add_edge("C".into(), "D".into(), 7);

    // 端点不存在，不会生效
    let added = graph.add_edge("A".into(), "Z".into(), 1);
    println!("   添加 A->Z: {}", added);
    println!(
        "   当前图大小: {} 顶点, {} 边\n",
        graph.num_vertices(),
        graph.num_edges()
    );

    // 2. 查询
    println!("2. 查询...");
    let (a, b, c) = ("A".to_string(), "B".to_string(), "C".to_string());
    println!("   顶点: {:?}", graph.get_vertices());
    println!("   A->C 权重: {:?}", graph.get_weight(&a, &c));
    println!("   B->A 权重: {:?}", graph.get_weight(&b, &a));
    println!("   A 的邻居: {:?}\n", graph.neighbors(&a));

    // 3. 调试输出
    println!("3. 图内部状态:");
    graph.dump(&mut std::io::stdout().lock())?;

    println!("\n统计: {:?}", graph.stats());
    println!("\n演示完成!");
    Ok(())
}
