//! CLI command implementations.

use crate::{Order, Strategy};
use colored::Colorize;
use serde::Serialize;
use sprig_graph::{
    AncestorResolver, AncestryFixture, Graph, GraphError, GraphFixture, Path as VertexPath,
    NO_ANCESTOR,
};
use std::path::Path;
use tracing::info;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[derive(Debug, Serialize)]
struct TraversalReport {
    start: i64,
    order: &'static str,
    vertices: Vec<i64>,
}

#[derive(Debug, Serialize)]
struct PathReport {
    from: i64,
    to: i64,
    strategy: &'static str,
    path: Option<Vec<i64>>,
}

#[derive(Debug, Serialize)]
struct AncestorReport {
    start: i64,
    ancestor: i64,
    generations: Option<usize>,
}

impl Order {
    fn as_str(self) -> &'static str {
        match self {
            Order::Bft => "bft",
            Order::Dft => "dft",
            Order::DftRecursive => "dft-recursive",
        }
    }
}

impl Strategy {
    fn as_str(self) -> &'static str {
        match self {
            Strategy::Bfs => "bfs",
            Strategy::Dfs => "dfs",
            Strategy::DfsRecursive => "dfs-recursive",
        }
    }
}

fn run_traversal(
    graph: &Graph<i64>,
    start: i64,
    order: Order,
) -> std::result::Result<Vec<i64>, GraphError<i64>> {
    match order {
        Order::Bft => graph.bft(&start),
        Order::Dft => graph.dft(&start),
        Order::DftRecursive => graph.dft_recursive(&start),
    }
}

fn run_search(
    graph: &Graph<i64>,
    from: i64,
    to: i64,
    strategy: Strategy,
) -> std::result::Result<Option<VertexPath<i64>>, GraphError<i64>> {
    match strategy {
        Strategy::Bfs => graph.bfs(&from, &to),
        Strategy::Dfs => graph.dfs(&from, &to),
        Strategy::DfsRecursive => graph.dfs_recursive(&from, &to),
    }
}

fn load_graph(file: &Path, strict: bool) -> Result<Graph<i64>> {
    let fixture = GraphFixture::from_path(file)?;
    let graph = if strict {
        fixture.try_into_graph()?
    } else {
        fixture.into_graph()
    };
    info!(
        "loaded {} ({} vertices, {} edges)",
        file.display(),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn format_vertices(vertices: &[i64]) -> String {
    vertices
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_adjacency(graph: &Graph<i64>) {
    for vertex in graph.vertices() {
        let neighbors: Vec<i64> = graph
            .get_neighbors(vertex)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        println!(
            "  {} {} {{{}}}",
            vertex.to_string().cyan(),
            "→".dimmed(),
            format_vertices(&neighbors)
        );
    }
}

fn print_path(label: &str, path: Option<&[i64]>) {
    match path {
        Some(path) => println!(
            "{} [{}] {}",
            label.yellow(),
            format_vertices(path),
            format!("({} edges)", path.len().saturating_sub(1)).dimmed()
        ),
        None => println!("{} {}", label.yellow(), "no path".red()),
    }
}

/// The seven-vertex example graph.
fn demo_graph() -> Result<Graph<i64>> {
    let mut graph = Graph::new();
    for vertex in 1..=7 {
        graph.add_vertex(vertex);
    }
    graph.add_edge(5, 3)?;
    graph.add_edge(6, 3)?;
    graph.add_edge(7, 1)?;
    graph.add_edge(4, 7)?;
    graph.add_edge(1, 2)?;
    graph.add_edge(7, 6)?;
    graph.add_edge(2, 4)?;
    graph.add_edge(3, 5)?;
    graph.add_edge(2, 3)?;
    graph.add_edge(4, 6)?;
    Ok(graph)
}

/// Example genealogy as (parent, child) pairs.
const DEMO_FAMILY: [(i64, i64); 10] = [
    (1, 3),
    (2, 3),
    (3, 6),
    (5, 6),
    (5, 7),
    (4, 5),
    (4, 8),
    (8, 9),
    (11, 8),
    (10, 1),
];

/// Run every algorithm on the example graph.
pub fn demo() -> Result<()> {
    let graph = demo_graph()?;

    println!("{}", "Adjacency:".cyan());
    println!("  {}", serde_json::to_string(&graph)?);

    println!("\n{}", "Traversals from 1:".cyan());
    for order in [Order::Bft, Order::Dft, Order::DftRecursive] {
        let vertices = run_traversal(&graph, 1, order)?;
        println!("  {:<14} {}", order.as_str().yellow(), format_vertices(&vertices));
    }

    println!("\n{}", "Paths from 1 to 6:".cyan());
    for strategy in [Strategy::Bfs, Strategy::Dfs, Strategy::DfsRecursive] {
        let path = run_search(&graph, 1, 6, strategy)?;
        print_path(&format!("  {:<14}", strategy.as_str()), path.as_deref());
    }

    let resolver = AncestorResolver::from_pairs(DEMO_FAMILY);
    let earliest = resolver.earliest(&6);
    println!("\n{}", "Earliest ancestor of 6:".cyan());
    match earliest {
        Some(ancestor) => println!(
            "  {} {}",
            ancestor.id.to_string().green(),
            format!("({} generations)", ancestor.generations).dimmed()
        ),
        None => println!("  {}", NO_ANCESTOR),
    }

    Ok(())
}

/// Print a graph's adjacency sets.
pub fn show(file: &Path, strict: bool) -> Result<()> {
    let graph = load_graph(file, strict)?;

    println!(
        "{} vertices, {} edges",
        graph.vertex_count().to_string().cyan(),
        graph.edge_count().to_string().cyan()
    );
    print_adjacency(&graph);

    Ok(())
}

/// Traverse everything reachable from `start`.
pub fn traverse(file: &Path, start: i64, order: Order, strict: bool, json: bool) -> Result<()> {
    let graph = load_graph(file, strict)?;
    let vertices = run_traversal(&graph, start, order)?;

    if json {
        let report = TraversalReport {
            start,
            order: order.as_str(),
            vertices,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {} from {}: {}",
        "✓".green(),
        order.as_str().yellow(),
        start.to_string().cyan(),
        format_vertices(&vertices)
    );
    Ok(())
}

/// Search for a path from `from` to `to`.
pub fn path(
    file: &Path,
    from: i64,
    to: i64,
    strategy: Strategy,
    strict: bool,
    json: bool,
) -> Result<()> {
    let graph = load_graph(file, strict)?;
    let found = run_search(&graph, from, to, strategy)?;

    if json {
        let report = PathReport {
            from,
            to,
            strategy: strategy.as_str(),
            path: found,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_path(strategy.as_str(), found.as_deref());
    Ok(())
}

/// Find the earliest known ancestor of `start`.
pub fn ancestor(file: &Path, start: i64, json: bool) -> Result<()> {
    let fixture = AncestryFixture::from_path(file)?;
    let resolver = fixture.resolver();
    info!("loaded {} ({} people)", file.display(), resolver.people());

    let earliest = resolver.earliest(&start);

    if json {
        let report = AncestorReport {
            start,
            ancestor: earliest.as_ref().map_or(NO_ANCESTOR, |a| a.id),
            generations: earliest.as_ref().map(|a| a.generations),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match earliest {
        Some(ancestor) => println!(
            "{} {} {}",
            "✓".green(),
            ancestor.id.to_string().cyan(),
            format!("({} generations)", ancestor.generations).dimmed()
        ),
        None => println!("{}", NO_ANCESTOR),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_graph_paths() {
        let graph = demo_graph().unwrap();
        assert_eq!(
            run_search(&graph, 1, 3, Strategy::Bfs).unwrap(),
            Some(vec![1, 2, 3])
        );
        assert_eq!(
            run_search(&graph, 1, 6, Strategy::Bfs).unwrap(),
            Some(vec![1, 2, 4, 6])
        );
    }

    #[test]
    fn test_demo_graph_traversals_cover_everything() {
        let graph = demo_graph().unwrap();
        for order in [Order::Bft, Order::Dft, Order::DftRecursive] {
            let mut vertices = run_traversal(&graph, 1, order).unwrap();
            vertices.sort();
            assert_eq!(vertices, vec![1, 2, 3, 4, 5, 6, 7]);
        }
    }

    #[test]
    fn test_demo_family() {
        assert_eq!(sprig_graph::earliest_ancestor(&DEMO_FAMILY, 6), 10);
    }

    #[test]
    fn test_unknown_start_is_an_error() {
        let graph = demo_graph().unwrap();
        assert!(run_traversal(&graph, 99, Order::Bft).is_err());
        assert!(run_search(&graph, 99, 1, Strategy::Dfs).is_err());
    }

    #[test]
    fn test_format_vertices() {
        assert_eq!(format_vertices(&[1, 2, 3]), "1, 2, 3");
        assert_eq!(format_vertices(&[]), "");
    }
}
