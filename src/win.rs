use crate::board::{Board, Direction};
use crate::config::EdgePolicy;
use crate::types::Player;

pub const RUN_LENGTH: usize = 5;

/// Five consecutive stones of one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub player: Player,
    pub direction: Direction,
    pub cells: [usize; RUN_LENGTH],
}

/// Returns `true` if any player has five in a row.
pub fn has_win(board: &Board, policy: EdgePolicy) -> bool {
    find_run(board, policy).is_some()
}

/// Finds the first run of five, scanning start cells in index order and
/// directions in `Direction::ALL` order.
pub fn find_run(board: &Board, policy: EdgePolicy) -> Option<Run> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter_map(|(start, cell)| cell.player().map(|player| (start, player)))
        .find_map(|(start, player)| {
            Direction::ALL
                .into_iter()
                .find_map(|direction| run_from(board, start, player, direction, policy))
        })
}

fn run_from(
    board: &Board,
    start: usize,
    player: Player,
    direction: Direction,
    policy: EdgePolicy,
) -> Option<Run> {
    let mut cells = [start; RUN_LENGTH];
    let mut current = start;

    for slot in cells.iter_mut().skip(1) {
        current = board.step(current, direction, policy)?;
        if board.cell_at(current).player() != Some(player) {
            return None;
        }
        *slot = current;
    }

    Some(Run {
        player,
        direction,
        cells,
    })
}
