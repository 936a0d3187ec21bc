//! Tests for finished-board invariant checks

#[cfg(test)]
mod tests {
    use lairforge::actors::{Actor, ActorKind};
    use lairforge::analysis::validation::{Diagnostic, validate};
    use lairforge::spatial::{Board, BoardShape, Position};

    fn board_with(actors: &[(ActorKind, usize, usize)]) -> Board {
        let mut board = Board::new(BoardShape::new(13, 10));
        for &(kind, x, y) in actors {
            board
                .set(Position::new(x, y), Actor::new(kind))
                .expect("free cell");
        }
        board
    }

    // Tests a locked board with the dragon centred has no findings
    // Verified by flagging locked empty cells
    #[test]
    fn test_valid_board_has_no_findings() {
        let mut board = board_with(&[(ActorKind::Dragon, 6, 4), (ActorKind::Wizard, 0, 4)]);
        board.lock_all_cells();
        assert!(validate(&board).is_empty());
    }

    // Tests every unlocked actor is reported with its position
    // Verified by checking only the fixed mask
    #[test]
    fn test_reports_unlocked_actor() {
        let board = board_with(&[(ActorKind::Dragon, 6, 4), (ActorKind::Wizard, 0, 4)]);
        let findings = validate(&board);
        assert_eq!(findings.len(), 2);
        assert!(findings.contains(&Diagnostic::Unlocked {
            kind: ActorKind::Wizard,
            position: Some(Position::new(0, 4)),
        }));
    }

    // Tests a dragon away from (6,4) is reported
    // Verified by comparing against the rounded-up centre
    #[test]
    fn test_reports_dragon_off_center() {
        let mut board = board_with(&[(ActorKind::Dragon, 1, 1), (ActorKind::Wizard, 0, 4)]);
        board.lock_all_cells();
        assert_eq!(
            validate(&board),
            vec![Diagnostic::DragonOffCenter(Position::new(1, 1))]
        );
    }

    // Tests duplicated unique bosses and a missing wizard are both reported
    // Verified by stopping at the first finding
    #[test]
    fn test_reports_duplicates_and_missing() {
        let mut board = board_with(&[
            (ActorKind::Dragon, 6, 4),
            (ActorKind::Gnome, 1, 1),
            (ActorKind::Gnome, 2, 2),
        ]);
        board.lock_all_cells();
        assert_eq!(
            validate(&board),
            vec![
                Diagnostic::Duplicate {
                    kind: ActorKind::Gnome,
                    count: 2
                },
                Diagnostic::Missing(ActorKind::Wizard),
            ]
        );
    }

    // Tests diagnostic messages, including actors that were never placed
    // Verified by printing a position for unplaced actors
    #[test]
    fn test_display() {
        assert_eq!(
            Diagnostic::Missing(ActorKind::Dragon).to_string(),
            "no dragon on the board"
        );
        assert_eq!(
            Diagnostic::DragonOffCenter(Position::new(1, 2)).to_string(),
            "dragon sits at (1, 2) instead of the centre"
        );
        assert_eq!(
            Diagnostic::Unlocked {
                kind: ActorKind::Rat,
                position: None
            }
            .to_string(),
            "rat was never placed"
        );
    }
}
