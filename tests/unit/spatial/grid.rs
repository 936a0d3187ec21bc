//! Tests for the board container and its occupancy bookkeeping

#[cfg(test)]
mod tests {
    use lairforge::GenerationError;
    use lairforge::actors::{Actor, ActorKind};
    use lairforge::spatial::grid::Cover;
    use lairforge::spatial::{Board, BoardShape, Position};

    fn board() -> Board {
        Board::new(BoardShape::new(13, 10))
    }

    // Tests a new board has no actors, no fixed cells and cleared covers
    // Verified by starting covers as weathered
    #[test]
    fn test_new_board_is_empty() {
        let board = board();
        assert_eq!(board.width(), 13);
        assert_eq!(board.height(), 10);
        assert_eq!(board.actor_count(), 0);
        assert_eq!(board.empty_count(), 130);
        assert_eq!(board.fixed_count(), 0);
        assert_eq!(board.kind_at(Position::new(3, 3)), ActorKind::Empty);
        assert_eq!(board.cover(Position::new(3, 3)), Some(Cover::Cleared));
        assert!(board.check_occupancy().is_ok());
    }

    // Tests placing an actor updates the cell, the actor and the empty count
    // Verified by not recording the position on the actor
    #[test]
    fn test_set_places_actor() {
        let mut board = board();
        let pos = Position::new(4, 2);
        let Ok(id) = board.set(pos, Actor::new(ActorKind::Rat)) else {
            panic!("placing on an empty cell should succeed");
        };

        assert_eq!(board.occupant(pos), Some(id));
        assert_eq!(board.kind_at(pos), ActorKind::Rat);
        assert_eq!(board.actor(id).and_then(|a| a.position), Some(pos));
        assert_eq!(board.empty_count(), 129);
        assert!(board.check_occupancy().is_ok());
    }

    // Tests placing on occupied or off-board cells fails without adding actors
    // Verified by pushing the actor before the occupancy check
    #[test]
    fn test_set_rejects_occupied_and_off_board() {
        let mut board = board();
        let pos = Position::new(1, 1);
        assert!(board.set(pos, Actor::new(ActorKind::Rat)).is_ok());
        assert!(matches!(
            board.set(pos, Actor::new(ActorKind::Bat)),
            Err(GenerationError::InvariantViolation { .. })
        ));
        assert!(matches!(
            board.set(Position::new(13, 0), Actor::new(ActorKind::Bat)),
            Err(GenerationError::InvalidParameter { .. })
        ));
        assert_eq!(board.actor_count(), 1);
    }

    // Tests swapping with an empty cell moves the actor
    // Verified by leaving the old cell occupied
    #[test]
    fn test_swap_with_empty_moves_actor() {
        let mut board = board();
        let from = Position::new(2, 2);
        let to = Position::new(7, 3);
        let Ok(id) = board.set(from, Actor::new(ActorKind::Dragon)) else {
            panic!("placement failed");
        };

        assert!(board.swap(from, to).is_ok());
        assert_eq!(board.occupant(from), None);
        assert_eq!(board.occupant(to), Some(id));
        assert_eq!(board.actor(id).and_then(|a| a.position), Some(to));
        assert!(board.check_occupancy().is_ok());
    }

    // Tests swapping two actors exchanges them and self swaps are no-ops
    // Verified by updating only the first actor's position
    #[test]
    fn test_swap_two_actors() {
        let mut board = board();
        let a = Position::new(0, 0);
        let b = Position::new(1, 0);
        let (Ok(first), Ok(second)) = (
            board.set(a, Actor::new(ActorKind::Rat)),
            board.set(b, Actor::new(ActorKind::Bat)),
        ) else {
            panic!("placement failed");
        };

        assert!(board.swap(a, b).is_ok());
        assert_eq!(board.occupant(a), Some(second));
        assert_eq!(board.occupant(b), Some(first));
        assert!(board.swap(a, a).is_ok());
        assert_eq!(board.occupant(a), Some(second));
    }

    // Tests locked actors never move, even as the passive side of a swap
    // Verified by checking only the first cell for a lock
    #[test]
    fn test_swap_rejects_locked() {
        let mut board = board();
        let locked = Position::new(3, 3);
        let free = Position::new(5, 5);
        let Ok(id) = board.set(locked, Actor::new(ActorKind::Wizard)) else {
            panic!("placement failed");
        };
        assert!(board.lock(id).is_ok());

        assert!(matches!(
            board.swap(free, locked),
            Err(GenerationError::InvariantViolation { .. })
        ));
        assert_eq!(board.occupant(locked), Some(id));
        assert_eq!(board.occupant(free), None);
        assert!(board.is_fixed(locked));
        assert!(board.actor(id).is_some_and(|a| a.locked));
    }

    // Tests fixed cells are neither movable nor placeable
    // Verified by ignoring the fixed mask in movable_positions
    #[test]
    fn test_movable_positions_skip_fixed_cells() {
        let mut board = board();
        let Ok(id) = board.set(Position::new(0, 0), Actor::new(ActorKind::MineKing)) else {
            panic!("placement failed");
        };
        assert!(board.lock(id).is_ok());

        let movable = board.movable_positions();
        assert_eq!(movable.len(), 129);
        assert!(!movable.contains(&Position::new(0, 0)));
        assert!(board.set(Position::new(0, 0), Actor::new(ActorKind::Rat)).is_err());
    }

    // Tests final locking fixes every cell and actor
    // Verified by fixing only occupied cells
    #[test]
    fn test_lock_all_cells() {
        let mut board = board();
        assert!(board.set(Position::new(2, 2), Actor::new(ActorKind::Rat)).is_ok());
        board.lock_all_cells();
        assert_eq!(board.fixed_count(), 130);
        assert!(board.actors().all(|(_, actor)| actor.locked));
        assert!(board.swap(Position::new(0, 0), Position::new(1, 0)).is_err());
    }

    // Tests actors of a kind come back in creation order
    // Verified by iterating the grid row by row
    #[test]
    fn test_actors_of_in_creation_order() {
        let mut board = board();
        let positions = [Position::new(9, 9), Position::new(0, 0), Position::new(4, 4)];
        for pos in positions {
            assert!(board.set(pos, Actor::new(ActorKind::Chest)).is_ok());
        }
        assert!(board.set(Position::new(5, 5), Actor::new(ActorKind::Rat)).is_ok());

        let chests: Vec<_> = board
            .actors_of(ActorKind::Chest)
            .map(|(_, pos)| pos)
            .collect();
        assert_eq!(chests, positions.to_vec());
    }

    // Tests covers can be set and off-board lookups return nothing
    // Verified by clamping off-board cover lookups
    #[test]
    fn test_covers() {
        let mut board = board();
        let pos = Position::new(3, 1);
        board.set_cover(pos, Cover::Covered(12));
        assert_eq!(board.cover(pos), Some(Cover::Covered(12)));
        assert_eq!(board.cover(Position::new(30, 30)), None);
    }
}
