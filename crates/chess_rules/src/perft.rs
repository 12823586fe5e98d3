use crate::{board::Board, moves::Move};

/// Pure perft node count.
/// Counts all positions reachable through `Done` transitions down to `depth`.
pub fn perft(board: &Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let player = board.current_player();
    player
        .pseudo_legal_moves()
        .map(|mv| {
            let transition = player.make_move(mv);
            if transition.status().is_done() {
                perft(transition.board(), depth - 1)
            } else {
                0
            }
        })
        .sum()
}

/// Per-move breakdown of [`perft`] at the root, for locating generation bugs.
pub fn divide(board: &Board, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    board
        .current_player()
        .legal_moves()
        .into_iter()
        .map(|mv| {
            let next = mv.execute(board);
            let nodes = perft(&next, depth - 1);
            (mv, nodes)
        })
        .collect()
}
