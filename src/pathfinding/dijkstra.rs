//! Kürzeste Wege im Navigationsgraphen (Dijkstra, Kantengewicht = euklidische Länge).
//!
//! Hallen haben typischerweise einige Dutzend Nodes; die Auswahl des nächsten
//! Nodes erfolgt deshalb per linearem Scan statt Priority-Queue. Der Scan
//! läuft in Eingabereihenfolge und nimmt das erste Minimum, damit bei gleich
//! langen Alternativen immer dieselbe Route herauskommt.

use crate::core::{NavigationNode, NodeId};
use std::collections::HashMap;

/// Berechnet den kürzesten Weg von `start` nach `end`.
///
/// - `start == end` → `[start]`, ohne Lookup (auch wenn die ID fehlt)
/// - kein Weg (getrennte Komponenten, unbekannte Start-/Ziel-ID) → leerer Vec
/// - Verbindungen auf unbekannte IDs werden ignoriert
///
/// Kommt eine ID mehrfach vor, gilt der letzte Eintrag.
pub fn find_path(start: &NodeId, end: &NodeId, nodes: &[NavigationNode]) -> Vec<NodeId> {
    if start == end {
        return vec![start.clone()];
    }

    let index: HashMap<&NodeId, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (&node.id, i))
        .collect();

    let (Some(&start_idx), Some(&end_idx)) = (index.get(start), index.get(end)) else {
        log::debug!("Wegsuche {}→{}: Start oder Ziel nicht im Graphen", start, end);
        return Vec::new();
    };

    let n = nodes.len();
    let mut distance = vec![f32::INFINITY; n];
    let mut previous: Vec<Option<usize>> = vec![None; n];
    // Überschattete Duplikate gelten von Anfang an als besucht
    let mut visited: Vec<bool> = nodes
        .iter()
        .enumerate()
        .map(|(i, node)| index[&node.id] != i)
        .collect();
    distance[start_idx] = 0.0;

    loop {
        let mut current = None;
        let mut min_distance = f32::INFINITY;
        for i in 0..n {
            if !visited[i] && distance[i] < min_distance {
                min_distance = distance[i];
                current = Some(i);
            }
        }

        // Rest unerreichbar
        let Some(current) = current else {
            break;
        };
        if current == end_idx {
            break;
        }
        visited[current] = true;

        let node = &nodes[current];
        for neighbor_id in &node.connections {
            let Some(&neighbor) = index.get(neighbor_id) else {
                log::trace!("Hängende Verbindung {}→{} ignoriert", node.id, neighbor_id);
                continue;
            };
            if visited[neighbor] {
                continue;
            }

            let candidate = distance[current] + node.distance_to(&nodes[neighbor]);
            if candidate < distance[neighbor] {
                distance[neighbor] = candidate;
                previous[neighbor] = Some(current);
            }
        }
    }

    let mut path = Vec::new();
    let mut cursor = Some(end_idx);
    while let Some(i) = cursor {
        path.push(nodes[i].id.clone());
        cursor = previous[i];
    }
    path.reverse();

    if path.first() != Some(start) {
        log::debug!("Kein Weg zwischen {} und {}", start, end);
        return Vec::new();
    }

    path
}

/// Summiert die Kantenlängen eines Pfades.
///
/// `None` bei leerem Pfad oder unbekannter ID im Pfad.
pub fn path_length(path: &[NodeId], nodes: &[NavigationNode]) -> Option<f32> {
    if path.is_empty() {
        return None;
    }

    let lookup: HashMap<&NodeId, &NavigationNode> = nodes.iter().map(|n| (&n.id, n)).collect();
    let mut total = 0.0;
    for pair in path.windows(2) {
        let a = lookup.get(&pair[0])?;
        let b = lookup.get(&pair[1])?;
        total += a.distance_to(b);
    }
    lookup.get(&path[0])?;
    Some(total)
}
