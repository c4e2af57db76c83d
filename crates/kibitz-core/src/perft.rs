//! Perft (performance test) for move generation correctness verification.

use crate::position::Position;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without applying them.
pub fn perft(position: &Position, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = position.legal_moves();

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in &moves {
        let mut child = *position;
        if child.apply(mv).is_ok() {
            nodes += perft(&child, depth - 1);
        }
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns `(coordinates, node_count)` pairs sorted alphabetically. Depth 0
/// has no moves to break down and yields an empty list.
pub fn divide(position: &Position, depth: usize) -> Vec<(String, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    let moves = position.legal_moves();
    let mut results: Vec<(String, u64)> = moves
        .iter()
        .map(|mv| {
            let mut child = *position;
            let count = match child.apply(mv) {
                Ok(()) if depth > 1 => perft(&child, depth - 1),
                Ok(()) => 1,
                Err(_) => 0,
            };
            (mv.coordinates(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
