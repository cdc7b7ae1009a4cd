//! CLI command implementations.

use std::io::{BufRead, Write};

use rand::Rng;
use serde::Serialize;

use crate::complex::{compare_sorts, ComplexVector};
use crate::config::{ComplexConfig, HistogramConfig, HuffmanConfig, NmsConfig};
use crate::expr::{Evaluation, DEMO_EXPRESSIONS};
use crate::graph::{
    biconnected_components, chain_graph, dijkstra, prim, sample_graph, traverse, Biconnectivity,
    SpanningTree, TraversalOrder, Weight, WeightedGraph,
};
use crate::histogram::random_cases;
use crate::huffman::{load_text, HuffmanTree};
use crate::nms::run_benchmark;
use crate::types::{Complex, LabError, LabResult};

/// Walk through the complex-vector operations and time bubble vs merge sort.
pub fn cmd_complex<R: Rng + ?Sized>(
    config: &ComplexConfig,
    rng: &mut R,
    json: bool,
) -> LabResult<()> {
    log::info!("complex vector demo");

    let original = ComplexVector::random(config.sample_size, rng);

    let mut shuffled = original.clone();
    shuffled.shuffle(rng);

    let probe = original.get(0).unwrap_or_default();
    let found = shuffled.find(&probe);

    let mut edited = shuffled.clone();
    edited.insert(0, Complex::new(1.0, 1.0));
    let removed = edited.remove(1);

    let mut deduped = original.clone();
    for i in 0..original.len().min(3) {
        if let Some(c) = original.get(i) {
            deduped.push(c);
        }
    }
    let with_duplicates = deduped.clone();
    let duplicates_removed = deduped.unique();

    let timings = compare_sorts(config.benchmark_size, rng);

    let mut sorted = ComplexVector::random(config.range_sample_size, rng);
    sorted.merge_sort();
    let in_range = sorted.range_search(config.range_low, config.range_high);

    if json {
        let out = serde_json::json!({
            "original": original,
            "shuffled": shuffled,
            "find": { "target": probe, "index": found },
            "after_insert_and_remove": edited,
            "removed": removed,
            "unique": {
                "input": with_duplicates,
                "output": deduped,
                "removed": duplicates_removed,
            },
            "sort_timings": timings,
            "range_search": {
                "low": config.range_low,
                "high": config.range_high,
                "sorted": sorted,
                "matches": in_range,
            },
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        println!("Original:  {}", original);
        println!("Shuffled:  {}", shuffled);
        match found {
            Some(i) => println!("Find {}: index {}", probe, i),
            None => println!("Find {}: not found", probe),
        }
        println!("Insert 1.00+1.00i at 0, remove index 1: {}", edited);
        if let Some(c) = removed {
            println!("  removed {}", c);
        }
        println!("With duplicates: {}", with_duplicates);
        println!(
            "Unique ({} removed): {}",
            duplicates_removed, deduped
        );
        println!();
        println!(
            "{:<10} {:>6} {:>12} {:>12} {:>9}",
            "Input", "Size", "Bubble (ms)", "Merge (ms)", "Speedup"
        );
        for t in &timings {
            let speedup = t
                .speedup()
                .map(|s| format!("{:.1}x", s))
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{:<10} {:>6} {:>12.3} {:>12.3} {:>9}",
                t.order.name(),
                t.size,
                t.bubble_ms,
                t.merge_ms,
                speedup
            );
        }
        println!();
        println!("Sorted:    {}", sorted.format_with_modulus());
        println!(
            "Modulus in [{}, {}): {}",
            config.range_low,
            config.range_high,
            in_range.format_with_modulus()
        );
    }
    Ok(())
}

/// Evaluate expressions: the given ones, or the demo list when none are
/// given, then optionally lines from `input` until `q`.
pub fn cmd_expr<B: BufRead>(
    expressions: &[String],
    input: Option<B>,
    json: bool,
) -> LabResult<()> {
    let mut results: Vec<Evaluation> = if expressions.is_empty() {
        DEMO_EXPRESSIONS.iter().map(|e| Evaluation::run(e)).collect()
    } else {
        expressions.iter().map(|e| Evaluation::run(e)).collect()
    };

    if !json {
        for r in &results {
            print_evaluation(r);
        }
    }

    if let Some(input) = input {
        let mut lines = input.lines();
        loop {
            if !json {
                print!("> ");
                std::io::stdout().flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            let line = line.trim();
            if line.eq_ignore_ascii_case("q") {
                break;
            }
            if line.is_empty() {
                continue;
            }
            let r = Evaluation::run(line);
            if !json {
                print_evaluation(&r);
            }
            results.push(r);
        }
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&results).unwrap_or_default()
        );
    }
    Ok(())
}

fn print_evaluation(r: &Evaluation) {
    match (&r.value, &r.error) {
        (Some(v), _) => println!("{} = {}", r.expression, v),
        (None, Some(e)) => println!("{} -> error: {}", r.expression, e),
        (None, None) => println!("{} -> no result", r.expression),
    }
}

/// Solve random largest-rectangle cases.
pub fn cmd_histogram<R: Rng + ?Sized>(
    config: &HistogramConfig,
    rng: &mut R,
    json: bool,
) -> LabResult<()> {
    log::info!("histogram demo, {} cases", config.cases);
    let cases = random_cases(config.cases, config.max_len, config.max_height, rng);

    if json {
        println!("{}", serde_json::to_string_pretty(&cases).unwrap_or_default());
    } else {
        for (i, case) in cases.iter().enumerate() {
            println!("Case {}: {} bars", i + 1, case.heights.len());
            println!("  Heights: {:?}", case.heights);
            println!("  Largest rectangle: {}", case.area);
        }
    }
    Ok(())
}

/// Build a Huffman code from the speech text and encode the demo words.
pub fn cmd_huffman(config: &HuffmanConfig, json: bool) -> LabResult<()> {
    let (text, source) = load_text(config.text_path.as_deref());
    let tree = HuffmanTree::from_text(&text)?;
    log::info!(
        "huffman tree over {} symbols, weight {}",
        tree.codes().len(),
        tree.total_weight()
    );

    let mut words = Vec::with_capacity(config.words.len());
    for word in &config.words {
        let bits = tree.encode(word);
        let (bitmap, len) = tree.encode_to_bitmap(word);
        let decoded = tree.decode(&bits)?;
        words.push((word.as_str(), bits, bitmap.to_bit_string(len), decoded));
    }

    if json {
        let out = serde_json::json!({
            "source": source,
            "characters": text.len(),
            "frequencies": tree.frequencies(),
            "codes": tree.codes(),
            "weighted_path_length": tree.weighted_path_length(),
            "words": words
                .iter()
                .map(|(word, bits, _, decoded)| serde_json::json!({
                    "word": word,
                    "bits": bits,
                    "length": bits.len(),
                    "decoded": decoded,
                }))
                .collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        match &source {
            crate::huffman::TextSource::File(path) => println!("Text: {}", path),
            crate::huffman::TextSource::Fallback => println!("Text: built-in excerpt"),
        }
        println!("Characters: {}", text.len());
        println!("Codes:");
        for (symbol, code) in tree.codes() {
            let freq = tree.frequencies().get(symbol).copied().unwrap_or(0);
            println!("  {} ({:>4}): {}", symbol, freq, code);
        }
        println!("Weighted path length: {}", tree.weighted_path_length());
        println!();
        for (word, bits, bitmap_bits, decoded) in &words {
            println!("{:<10} {} ({} bits)", word, bits, bits.len());
            println!("{:<10} bitmap {}, decodes to {}", "", bitmap_bits, decoded);
        }
    }
    Ok(())
}

/// Everything the graph command reports for one graph.
#[derive(Debug, Clone, Serialize)]
pub struct GraphReport {
    pub graph: String,
    pub start: char,
    pub vertices: Vec<char>,
    pub matrix: Vec<Vec<Weight>>,
    pub bfs: Vec<char>,
    pub dfs: Vec<char>,
    pub distances: Vec<VertexDistance>,
    pub spanning_tree: SpanningTree,
    pub biconnected: Biconnectivity,
}

/// Shortest distance to one vertex; `None` when unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VertexDistance {
    pub vertex: char,
    pub distance: Option<u64>,
}

/// Run every graph algorithm on `graph` from `start`.
pub fn graph_report(name: &str, graph: &WeightedGraph, start: char) -> LabResult<GraphReport> {
    let bfs = traverse(graph, start, TraversalOrder::BreadthFirst)?;
    let dfs = traverse(graph, start, TraversalOrder::DepthFirst)?;
    let distances = dijkstra(graph, start)?
        .into_iter()
        .map(|(vertex, d)| VertexDistance {
            vertex,
            distance: d.value(),
        })
        .collect();
    let spanning_tree = prim(graph, start)?;
    let biconnected = biconnected_components(graph);

    Ok(GraphReport {
        graph: name.to_string(),
        start,
        vertices: graph.labels().to_vec(),
        matrix: graph.matrix().to_vec(),
        bfs,
        dfs,
        distances,
        spanning_tree,
        biconnected,
    })
}

/// Run every graph algorithm on both sample graphs.
pub fn cmd_graph(start: char, json: bool) -> LabResult<()> {
    let graphs = [("sample", sample_graph()?), ("chain", chain_graph()?)];

    let mut reports = Vec::with_capacity(graphs.len());
    for (name, graph) in &graphs {
        log::info!(
            "{} graph: {} vertices, {} edges",
            name,
            graph.vertex_count(),
            graph.edge_count()
        );
        let report = graph_report(name, graph, start)?;
        if !json {
            print_graph_report(graph, &report);
        }
        reports.push(report);
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&reports).unwrap_or_default()
        );
    }
    Ok(())
}

fn print_graph_report(graph: &WeightedGraph, report: &GraphReport) {
    let start = report.start;
    println!(
        "== {} graph ({} vertices, {} edges) ==",
        report.graph,
        graph.vertex_count(),
        graph.edge_count()
    );
    println!("{}", graph.format_matrix());
    println!("BFS from {}: {}", start, join_labels(&report.bfs));
    println!("DFS from {}: {}", start, join_labels(&report.dfs));
    println!("Shortest distances from {}:", start);
    for d in &report.distances {
        match d.distance {
            Some(value) => println!("  {}: {}", d.vertex, value),
            None => println!("  {}: unreachable", d.vertex),
        }
    }
    println!("Minimum spanning tree from {}:", start);
    for e in &report.spanning_tree.edges {
        println!("  {} - {} ({})", e.parent, e.child, e.weight);
    }
    println!("  total weight {}", report.spanning_tree.total_weight);
    println!("Biconnected components:");
    for (i, component) in report.biconnected.components.iter().enumerate() {
        let edges: Vec<String> = component
            .iter()
            .map(|(a, b)| format!("{}-{}", a, b))
            .collect();
        println!("  {}: {}", i + 1, edges.join(" "));
    }
    println!(
        "Articulation points: {}",
        join_labels(&report.biconnected.articulation_points)
    );
    println!();
}

fn join_labels(labels: &[char]) -> String {
    labels
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a comma-separated list of box counts. Every entry must be a
/// non-negative integer; one bad entry rejects the whole list.
pub fn parse_sizes(list: &str) -> LabResult<Vec<usize>> {
    list.split(',')
        .map(|s| {
            let s = s.trim();
            s.parse::<usize>()
                .map_err(|_| LabError::InvalidArgument(format!("bad size '{}' in --sizes", s)))
        })
        .collect()
}

/// Run the NMS sort benchmark and print the summary table.
pub fn cmd_nms<R: Rng + ?Sized>(config: &NmsConfig, rng: &mut R, json: bool) -> LabResult<()> {
    let results = run_benchmark(config, rng);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&results).unwrap_or_default()
        );
    } else {
        println!(
            "{:<10} {:>6} {:<10} {:>10} {:>10} {:>10} {:>6}",
            "Algorithm", "Boxes", "Layout", "Sort (ms)", "NMS (ms)", "Total (ms)", "Kept"
        );
        for r in &results {
            println!(
                "{:<10} {:>6} {:<10} {:>10.3} {:>10.3} {:>10.3} {:>6}",
                r.algorithm.name(),
                r.size,
                r.distribution.name(),
                r.sort_ms,
                r.nms_ms,
                r.total_ms,
                r.kept
            );
        }
        println!(
            "IoU threshold {}, {} run(s) per cell",
            config.iou_threshold,
            config.repetitions.max(1)
        );
    }
    Ok(())
}
