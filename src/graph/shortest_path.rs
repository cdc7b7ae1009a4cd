//! Single-source shortest paths (dense Dijkstra).

use serde::Serialize;

use crate::types::LabResult;

use super::WeightedGraph;

/// Distance from the source to one vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Distance {
    /// Total weight of a shortest path.
    Finite(u64),
    /// No path from the source.
    Unreachable,
}

impl Distance {
    /// The finite value, if any.
    pub fn value(&self) -> Option<u64> {
        match self {
            Self::Finite(d) => Some(*d),
            Self::Unreachable => None,
        }
    }

    /// True if a path exists.
    pub fn is_reachable(&self) -> bool {
        matches!(self, Self::Finite(_))
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finite(d) => write!(f, "{}", d),
            Self::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// Shortest distance from `start` to every vertex, in vertex-index order.
///
/// O(V²) over the weight matrix: each round settles the unsettled vertex with
/// the smallest tentative distance and relaxes its row. Stops early once the
/// remaining vertices are all unreachable.
pub fn dijkstra(graph: &WeightedGraph, start: char) -> LabResult<Vec<(char, Distance)>> {
    let source = graph.require(start)?;
    let n = graph.vertex_count();

    let mut dist: Vec<Option<u64>> = vec![None; n];
    let mut settled = vec![false; n];
    dist[source] = Some(0);

    for _ in 0..n {
        let next = (0..n)
            .filter(|&v| !settled[v])
            .filter_map(|v| dist[v].map(|d| (d, v)))
            .min();
        let Some((d_u, u)) = next else {
            break;
        };

        settled[u] = true;
        log::debug!("settled {} at distance {}", graph.label(u), d_u);

        for v in 0..n {
            let w = graph.weight(u, v);
            if w == 0 || settled[v] {
                continue;
            }
            let candidate = d_u + u64::from(w);
            if dist[v].map_or(true, |d| candidate < d) {
                dist[v] = Some(candidate);
            }
        }
    }

    Ok(dist
        .into_iter()
        .enumerate()
        .map(|(i, d)| {
            let distance = d.map_or(Distance::Unreachable, Distance::Finite);
            (graph.label(i), distance)
        })
        .collect())
}
