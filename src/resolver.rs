// Ladder/snake chain resolution
//
// A piece that lands on a ladder start climbs to its end; on a snake head it slides to the
// tail; and the new cell is checked again. Ladders win over snakes on the same cell.

use crate::types::{Cell, Ladder, Snake};

/// Upper bound on chain steps. A ladder and a snake pointing at each other would otherwise
/// bounce forever; after this many steps the last reached cell is returned as-is.
pub const MAX_RESOLVE_STEPS: usize = 100;

/// Resolves a raw landing cell to the cell the piece finally rests on
pub fn resolve(landing: Cell, ladders: &[Ladder], snakes: &[Snake]) -> Cell {
    let mut cell = landing;

    for _ in 0..MAX_RESOLVE_STEPS {
        if let Some(ladder) = ladders.iter().find(|l| l.start == cell) {
            cell = ladder.end;
        } else if let Some(snake) = snakes.iter().find(|s| s.head == cell) {
            cell = snake.tail;
        } else {
            return cell;
        }
    }

    cell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_transitions_is_identity() {
        assert_eq!(resolve(4, &[], &[]), 4);
        assert_eq!(resolve(4, &[Ladder::new(1, 8)], &[Snake::new(7, 0)]), 4);
    }

    #[test]
    fn test_ladder_then_snake_chain() {
        // 20 -> snake -> 15 -> ladder -> 31
        let ladders = [Ladder::new(15, 31)];
        let snakes = [Snake::new(20, 15)];
        assert_eq!(resolve(20, &ladders, &snakes), 31);
    }

    #[test]
    fn test_ladder_has_priority_over_snake() {
        let ladders = [Ladder::new(5, 12)];
        let snakes = [Snake::new(5, 1)];
        assert_eq!(resolve(5, &ladders, &snakes), 12);
    }

    #[test]
    fn test_mutual_cycle_terminates() {
        let ladders = [Ladder::new(5, 9)];
        let snakes = [Snake::new(9, 5)];
        let first = resolve(5, &ladders, &snakes);
        let second = resolve(5, &ladders, &snakes);
        // 100 alternating steps starting at 5 end back on 5
        assert_eq!(first, 5);
        assert_eq!(first, second);
        assert_eq!(resolve(9, &ladders, &snakes), 9);
    }

    #[test]
    fn test_idempotent_once_settled() {
        let ladders = [Ladder::new(2, 14), Ladder::new(6, 20)];
        let snakes = [Snake::new(14, 6), Snake::new(30, 1)];
        for start in 0..36 {
            let once = resolve(start, &ladders, &snakes);
            assert_eq!(resolve(once, &ladders, &snakes), once, "start {}", start);
        }
    }
}
