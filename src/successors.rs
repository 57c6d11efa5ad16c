// Successor generation for both sides
//
// Player: one step in each in-bounds cardinal direction, plus the diagonals while they are
// unlocked; the landing cell is resolved through ladders and snakes.
//
// Snake (only the active one moves):
//   1. drag an adjacent ladder one row up or down,
//   2. translate head and tail together one step in any of the eight directions,
//   3. stay put.
// Translate and drag moves that put the snake's head on the player relocate the player in
// the same successor.

use crate::geometry::Board;
use crate::resolver::resolve;
use crate::state::GameState;
use crate::types::{Cell, Direction, Ladder, Side, Snake};

/// Where a ladder start sits relative to the active snake's head, in expansion order.
/// Offsets are (row, col) from the head.
const LADDER_CONTACTS: [(i32, i32); 5] = [(-1, 0), (0, -1), (1, 0), (0, 1), (0, 0)];

impl GameState {
    /// All legal next states for the side to move
    pub fn successors(&self) -> Vec<GameState> {
        match self.side_to_move() {
            Side::Player => self.player_successors(),
            Side::Snake => self.snake_successors(),
        }
    }

    fn player_successors(&self) -> Vec<GameState> {
        let board = self.board();
        let next_cooldown = (self.diagonal_cooldown() + 1) % self.diagonal_period();

        let diagonals: &[Direction] = if self.diagonal_unlocked() {
            &Direction::PLAYER_DIAGONAL
        } else {
            &[]
        };

        Direction::PLAYER_CARDINAL
            .iter()
            .chain(diagonals.iter())
            .filter_map(|&dir| board.step(self.player(), dir))
            .map(|landing| {
                let resolved = resolve(landing, self.ladders(), self.snakes());
                self.derive(
                    resolved,
                    self.snakes().to_vec(),
                    self.ladders().to_vec(),
                    self.turn() + 1,
                    Side::Snake,
                    next_cooldown,
                )
            })
            .collect()
    }

    fn snake_successors(&self) -> Vec<GameState> {
        let mut successors = Vec::new();

        if let Some(active) = self.active_snake() {
            self.push_ladder_drags(active, &mut successors);
            self.push_translations(active, &mut successors);
        }

        // Stay
        successors.push(self.derive(
            self.player(),
            self.snakes().to_vec(),
            self.ladders().to_vec(),
            self.turn(),
            Side::Player,
            self.diagonal_cooldown(),
        ));

        successors
    }

    fn push_ladder_drags(&self, active: usize, out: &mut Vec<GameState>) {
        let board = self.board();
        let snake = self.snakes()[active];
        let (head_row, head_col) = board.to_matrix(snake.head);

        for (index, ladder) in self.ladders().iter().enumerate() {
            let (start_row, start_col) = board.to_matrix(ladder.start);
            let (end_row, end_col) = board.to_matrix(ladder.end);

            for &(dr, dc) in LADDER_CONTACTS.iter() {
                if (start_row, start_col) != (head_row + dr, head_col + dc) {
                    continue;
                }

                for shift in [1, -1] {
                    let (new_start_row, new_end_row) = (start_row + shift, end_row + shift);
                    if !row_in_range(&board, new_start_row) || !row_in_range(&board, new_end_row) {
                        continue;
                    }

                    let new_head = board.to_index(new_start_row, start_col);
                    let new_tail = snake.tail + (new_head - snake.head);
                    if !board.contains(new_tail) {
                        continue;
                    }

                    let mut ladders = self.ladders().to_vec();
                    ladders[index] = Ladder::new(new_head, board.to_index(new_end_row, end_col));
                    out.push(self.snake_moved(active, Snake::new(new_head, new_tail), ladders));
                }
            }
        }
    }

    fn push_translations(&self, active: usize, out: &mut Vec<GameState>) {
        let board = self.board();
        let snake = self.snakes()[active];
        let head = board.to_matrix(snake.head);
        let tail = board.to_matrix(snake.tail);

        for dir in Direction::SNAKE_ORDER {
            if !translation_in_bounds(&board, head, tail, dir) {
                continue;
            }
            let (dr, dc) = dir.delta();
            let moved = Snake::new(
                board.to_index(head.0 + dr, head.1 + dc),
                board.to_index(tail.0 + dr, tail.1 + dc),
            );
            out.push(self.snake_moved(active, moved, self.ladders().to_vec()));
        }
    }

    /// Child state after the active snake moved to `moved`
    fn snake_moved(&self, active: usize, moved: Snake, ladders: Vec<Ladder>) -> GameState {
        let mut snakes = self.snakes().to_vec();
        snakes[active] = moved;

        let player: Cell = if moved.head == self.player() {
            resolve(moved.head, &ladders, &snakes)
        } else {
            self.player()
        };

        self.derive(
            player,
            snakes,
            ladders,
            self.turn(),
            Side::Player,
            self.diagonal_cooldown(),
        )
    }
}

fn row_in_range(board: &Board, row: i32) -> bool {
    row >= 0 && row < board.rows
}

/// Both endpoints stay on the board after moving one step in `dir`.
/// Diagonal moves compare the row against `cols`; identical on square boards.
fn translation_in_bounds(
    board: &Board,
    head: (i32, i32),
    tail: (i32, i32),
    dir: Direction,
) -> bool {
    let (dr, dc) = dir.delta();
    let row_limit = if dir.is_diagonal() { board.cols } else { board.rows };

    [head, tail].iter().all(|&(row, col)| {
        let (nr, nc) = (row + dr, col + dc);
        nr >= 0 && nr < row_limit && nc >= 0 && nc < board.cols
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_state(player: Cell, size: i32, cooldown: i32, period: i32) -> GameState {
        GameState::new(player, vec![], vec![], 0, 12, size, size, Side::Player, cooldown, period)
    }

    fn snake_state(player: Cell, snakes: Vec<Snake>, ladders: Vec<Ladder>) -> GameState {
        GameState::new(player, snakes, ladders, 2, 12, 7, 7, Side::Snake, 1, 3)
    }

    fn players(states: &[GameState]) -> Vec<Cell> {
        states.iter().map(|s| s.player()).collect()
    }

    #[test]
    fn test_player_interior_cardinal_only() {
        // (3,3) on a 7x7 board, diagonal locked
        let succ = player_state(24, 7, 0, 3).successors();
        assert_eq!(players(&succ), vec![31, 25, 17, 23]);
        for s in &succ {
            assert_eq!(s.side_to_move(), Side::Snake);
            assert_eq!(s.turn(), 1);
            assert_eq!(s.diagonal_cooldown(), 1);
        }
    }

    #[test]
    fn test_player_interior_with_diagonal_unlocked() {
        let succ = player_state(24, 7, 3, 3).successors();
        assert_eq!(succ.len(), 8);
        assert_eq!(players(&succ), vec![31, 25, 17, 23, 32, 16, 30, 18]);
        // cooldown wraps modulo the period
        assert!(succ.iter().all(|s| s.diagonal_cooldown() == 1));
    }

    #[test]
    fn test_player_corner_moves() {
        let succ = player_state(0, 7, 0, 3).successors();
        assert_eq!(players(&succ), vec![7, 1]);

        let succ = player_state(0, 7, 3, 3).successors();
        assert_eq!(players(&succ), vec![7, 1, 8]);
    }

    #[test]
    fn test_player_landing_is_resolved() {
        let state = GameState::new(
            6,
            vec![Snake::new(7, 0)],
            vec![],
            0,
            5,
            3,
            3,
            Side::Player,
            0,
            3,
        );
        let succ = state.successors();
        // (2,0): right lands on the snake head at 7, down to 3
        assert_eq!(players(&succ), vec![0, 3]);
    }

    #[test]
    fn test_snake_stay_always_present() {
        let state = snake_state(10, vec![Snake::new(24, 3)], vec![]);
        let succ = state.successors();
        let stay = succ.last().expect("stay option");
        assert!(stay.same_positions(&state));
        assert_eq!(stay.side_to_move(), Side::Player);
        assert_eq!(stay.turn(), state.turn());
        assert_eq!(stay.diagonal_cooldown(), state.diagonal_cooldown());
    }

    #[test]
    fn test_snake_without_snakes_only_stays() {
        let state = snake_state(10, vec![], vec![Ladder::new(3, 30)]);
        let succ = state.successors();
        assert_eq!(succ.len(), 1);
        assert!(succ[0].same_positions(&state));
    }

    #[test]
    fn test_snake_translations_interior() {
        // head (3,3), tail (2,2): all eight translations stay on the board, plus stay
        let state = snake_state(0, vec![Snake::new(24, 16)], vec![]);
        let succ = state.successors();
        assert_eq!(succ.len(), 9);
        let heads: Vec<Cell> = succ[..8].iter().map(|s| s.snakes()[0].head).collect();
        assert_eq!(heads, vec![31, 17, 23, 25, 32, 30, 16, 18]);
        let tails: Vec<Cell> = succ[..8].iter().map(|s| s.snakes()[0].tail).collect();
        assert_eq!(tails, vec![23, 9, 15, 17, 24, 22, 8, 10]);
    }

    #[test]
    fn test_snake_translation_blocked_by_tail_at_edge() {
        // head (3,3), tail (0,0): nothing that moves the tail down or left
        let state = snake_state(48, vec![Snake::new(24, 0)], vec![]);
        let heads: Vec<Cell> = state.successors()[..]
            .iter()
            .map(|s| s.snakes()[0].head)
            .collect();
        // up, right, up-right, then stay
        assert_eq!(heads, vec![31, 25, 32, 24]);
    }

    #[test]
    fn test_only_active_snake_moves() {
        let state = snake_state(0, vec![Snake::new(46, 40), Snake::new(8, 2)], vec![]);
        assert_eq!(state.active_snake(), Some(1));
        for child in state.successors() {
            assert_eq!(child.snakes()[0], Snake::new(46, 40));
        }
    }

    #[test]
    fn test_snake_onto_player_relocates_player() {
        // player at (4,3)=31, head (3,3)=24 tail (0,3)=3: moving up lands on the player
        let state = snake_state(31, vec![Snake::new(24, 3)], vec![]);
        let succ = state.successors();
        let up = &succ[0];
        assert_eq!(up.snakes()[0], Snake::new(31, 10));
        assert_eq!(up.player(), 10);
        // moves that miss the player leave it alone
        assert!(succ[1..].iter().all(|s| s.player() == 31));
    }

    #[test]
    fn test_drag_ladder_below_head() {
        // head (3,3)=24, tail (4,0)=28; ladder start one row below at (2,3)=17, end (5,3)=38
        let state = snake_state(0, vec![Snake::new(24, 28)], vec![Ladder::new(17, 38)]);
        let succ = state.successors();

        // up: the ladder start moves under the head, the snake stays where it is
        let up = &succ[0];
        assert_eq!(up.ladders()[0], Ladder::new(24, 45));
        assert_eq!(up.snakes()[0], Snake::new(24, 28));

        // down: head follows the ladder start to (1,3), tail shifts by the same amount
        let down = &succ[1];
        assert_eq!(down.ladders()[0], Ladder::new(10, 31));
        assert_eq!(down.snakes()[0], Snake::new(10, 14));
    }

    #[test]
    fn test_drag_onto_player_climbs_dragged_ladder() {
        // player at (1,3)=10; the down-drag moves head and ladder start onto the player
        let state = snake_state(10, vec![Snake::new(24, 28)], vec![Ladder::new(17, 38)]);
        let succ = state.successors();

        // up-drag misses the player
        assert_eq!(succ[0].player(), 10);

        let down = &succ[1];
        assert_eq!(down.snakes()[0], Snake::new(10, 14));
        assert_eq!(down.ladders()[0], Ladder::new(10, 31));
        // the updated ladder starts on the head and wins over the snake
        assert_eq!(down.player(), 31);
        assert_ne!(down.player(), 14);
    }

    #[test]
    fn test_drag_ladder_left_of_head() {
        // head (3,3)=24, tail (5,5)=40; ladder start at (3,2)=23, end (4,2)=30
        let state = snake_state(0, vec![Snake::new(24, 40)], vec![Ladder::new(23, 30)]);
        let succ = state.successors();

        // up: head -> (4,2)=30, tail shifts by +6
        assert_eq!(succ[0].snakes()[0], Snake::new(30, 46));
        assert_eq!(succ[0].ladders()[0], Ladder::new(30, 37));
        // down: head -> (2,2)=16, tail shifts by -8
        assert_eq!(succ[1].snakes()[0], Snake::new(16, 32));
        assert_eq!(succ[1].ladders()[0], Ladder::new(16, 23));
    }

    #[test]
    fn test_drag_respects_board_edges() {
        // ladder end on the top row cannot be dragged up
        let state = snake_state(0, vec![Snake::new(24, 7)], vec![Ladder::new(24, 45)]);
        let succ = state.successors();
        let drags: Vec<&GameState> = succ
            .iter()
            .filter(|s| s.ladders()[0] != Ladder::new(24, 45))
            .collect();
        assert_eq!(drags.len(), 1);
        assert_eq!(drags[0].ladders()[0], Ladder::new(17, 38));
        assert_eq!(drags[0].snakes()[0], Snake::new(17, 0));
    }

    #[test]
    fn test_drag_tail_leaving_board_is_skipped() {
        // down-drag would push the tail (0,1)=1 below row 0
        let state = snake_state(48, vec![Snake::new(24, 1)], vec![Ladder::new(24, 38)]);
        let succ = state.successors();
        let drags: Vec<&GameState> = succ
            .iter()
            .filter(|s| s.ladders()[0] != Ladder::new(24, 38))
            .collect();
        assert_eq!(drags.len(), 1);
        assert_eq!(drags[0].ladders()[0], Ladder::new(31, 45));
    }

    #[test]
    fn test_parent_untouched_by_expansion() {
        let state = snake_state(0, vec![Snake::new(24, 7)], vec![Ladder::new(17, 38)]);
        let before = state.clone();
        let _ = state.successors();
        assert_eq!(state, before);
    }
}
