// Random placement of ladders and snakes at the start of a match

use rand::Rng;

use crate::geometry::Board;
use crate::types::{Ladder, Snake};

/// Initial ladder and snake positions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Layout {
    pub ladders: Vec<Ladder>,
    pub snakes: Vec<Snake>,
}

impl Layout {
    pub fn new(ladders: Vec<Ladder>, snakes: Vec<Snake>) -> Self {
        Layout { ladders, snakes }
    }

    /// Places `ladders` ladders and `snakes` snakes at random.
    ///
    /// No ladder or snake starts on cell 0. Ladders point upward and reach at most four rows
    /// ahead; snake heads avoid the goal cell and never equal their tails.
    pub fn generate<R: Rng>(board: Board, ladders: u32, snakes: u32, rng: &mut R) -> Self {
        let n = board.cell_count();

        let ladders = (0..ladders)
            .map(|_| {
                let start = rng.random_range(1..n - 1);
                let end = rng.random_range(start + 1..n.min(start + 4 * board.rows));
                Ladder::new(start, end)
            })
            .collect();

        let snakes = (0..snakes)
            .map(|_| {
                let head = rng.random_range(1..n - 1);
                let mut tail = rng.random_range(0..n - 1);
                if head == tail {
                    tail += if tail == n - 1 { -1 } else { 1 };
                }
                Snake::new(head, tail)
            })
            .collect();

        Layout { ladders, snakes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_positions_are_on_board() {
        let board = Board::square(5);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let layout = Layout::generate(board, 3, 4, &mut rng);
            assert_eq!(layout.ladders.len(), 3);
            assert_eq!(layout.snakes.len(), 4);
            for ladder in &layout.ladders {
                assert!(ladder.start >= 1 && ladder.start < board.last_cell());
                assert!(ladder.end > ladder.start && board.contains(ladder.end));
                assert!(ladder.end < ladder.start + 4 * board.rows);
            }
            for snake in &layout.snakes {
                assert!(snake.head >= 1 && snake.head < board.last_cell());
                assert!(board.contains(snake.tail));
                assert_ne!(snake.head, snake.tail);
            }
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let board = Board::square(7);
        let a = Layout::generate(board, 2, 3, &mut StdRng::seed_from_u64(42));
        let b = Layout::generate(board, 2, 3, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
