//! Tests for the layer state machine and the generation driver

#[cfg(test)]
mod tests {
    use lairforge::GenerationError;
    use lairforge::actors::{Actor, ActorKind};
    use lairforge::algorithm::scheduler::{
        ActorGroup, LayerDirective, LayerPhase, LayerPlan, LayerScheduler, generate,
        generate_with,
    };
    use lairforge::io::configuration::{COVER_TOP_LEFT, COVER_TOP_RIGHT, Tuning};
    use lairforge::spatial::Position;
    use lairforge::spatial::grid::Cover;

    fn small_tuning() -> Tuning {
        Tuning {
            width: 3,
            height: 3,
            ..Tuning::default()
        }
    }

    fn rats(count: usize) -> Vec<Actor> {
        vec![Actor::new(ActorKind::Rat); count]
    }

    // Tests fixed decor on the top corners and weathered 4..=24 covers elsewhere
    // Verified by weathering the corners like other cells
    #[test]
    fn test_new_scheduler_weathers_covers() {
        let scheduler = LayerScheduler::new(Tuning::default(), 3).expect("valid tuning");
        let board = scheduler.board();

        assert_eq!(scheduler.phase(), LayerPhase::Idle);
        assert_eq!(board.cover(Position::new(0, 0)), Some(Cover::Covered(COVER_TOP_LEFT)));
        assert_eq!(board.cover(Position::new(12, 0)), Some(Cover::Covered(COVER_TOP_RIGHT)));
        for pos in board.shape().positions().filter(|pos| pos.y > 0) {
            assert!(
                matches!(board.cover(pos), Some(Cover::Covered(4..=24))),
                "cell {pos} has an unexpected cover"
            );
        }
    }

    // Tests a scheduler refuses tuning that fails validation
    // Verified by skipping Tuning::validate in LayerScheduler::new
    #[test]
    fn test_rejects_invalid_tuning() {
        let tuning = Tuning {
            width: 2,
            ..Tuning::default()
        };
        assert!(matches!(
            LayerScheduler::new(tuning, 0),
            Err(GenerationError::InvalidParameter { .. })
        ));
    }

    // Tests begin, add and end move through the phases and lock every placed actor
    // Verified by leaving the phase Open after end_layer
    #[test]
    fn test_layer_lifecycle() {
        let mut scheduler = LayerScheduler::new(Tuning::default(), 5).expect("valid tuning");

        scheduler.begin_layer().expect("idle scheduler opens a layer");
        assert_eq!(scheduler.phase(), LayerPhase::Open);
        scheduler.add(rats(3), 3).expect("room for three rats");
        scheduler
            .add(vec![Actor::new(ActorKind::Dragon)], 1)
            .expect("room for the dragon");
        assert_eq!(scheduler.pending_count(), 4);

        let report = scheduler.end_layer().expect("layer should lock");
        assert_eq!(report.index, 0);
        assert_eq!(report.placed.len(), 4);
        assert_eq!(scheduler.phase(), LayerPhase::Locked);
        assert_eq!(scheduler.layer_index(), 1);
        assert_eq!(scheduler.pending_count(), 0);

        let board = scheduler.board();
        assert_eq!(board.fixed_count(), 4);
        assert!(report
            .placed
            .iter()
            .all(|&id| board.actor(id).is_some_and(|a| a.locked)));
        assert!(board.check_occupancy().is_ok());
    }

    // Tests out-of-order calls are rejected as invalid state
    // Verified by allowing add while idle
    #[test]
    fn test_phase_violations() {
        let mut scheduler = LayerScheduler::new(Tuning::default(), 5).expect("valid tuning");
        assert!(matches!(
            scheduler.add(rats(1), 1),
            Err(GenerationError::InvalidState { .. })
        ));
        assert!(matches!(
            scheduler.end_layer(),
            Err(GenerationError::InvalidState { .. })
        ));

        scheduler.begin_layer().expect("first layer");
        assert!(matches!(
            scheduler.begin_layer(),
            Err(GenerationError::InvalidState { .. })
        ));
        assert!(matches!(
            scheduler.finish(),
            Err(GenerationError::InvalidState { .. })
        ));
    }

    // Tests asking for more actors than a group holds keeps the layer open
    // Verified by taking the whole group regardless of count
    #[test]
    fn test_group_smaller_than_count() {
        let mut scheduler = LayerScheduler::new(Tuning::default(), 5).expect("valid tuning");
        scheduler.begin_layer().expect("first layer");
        assert!(matches!(
            scheduler.add(rats(1), 2),
            Err(GenerationError::InvalidParameter { .. })
        ));
        assert_eq!(scheduler.phase(), LayerPhase::Open);
    }

    // Tests overfilling aborts the layer, clears pending actors and allows a new layer
    // Verified by keeping pending actors after the abort
    #[test]
    fn test_insufficient_space_aborts_layer() {
        let mut scheduler = LayerScheduler::new(small_tuning(), 5).expect("valid tuning");
        scheduler.begin_layer().expect("first layer");
        scheduler.add(rats(6), 6).expect("six fit");

        let result = scheduler.add(rats(4), 4);
        assert!(matches!(
            result,
            Err(GenerationError::InsufficientSpace {
                layer: 0,
                requested: 10,
                available: 9
            })
        ));
        assert_eq!(scheduler.phase(), LayerPhase::Idle);
        assert_eq!(scheduler.pending_count(), 0);
        assert_eq!(scheduler.board().actor_count(), 0);

        scheduler.begin_layer().expect("a new layer may open after an abort");
        scheduler.add(rats(9), 9).expect("nine fit exactly");
        let report = scheduler.end_layer().expect("full board locks");
        assert_eq!(report.placed.len(), 9);
        assert_eq!(scheduler.board().empty_count(), 0);
    }

    // Tests finish resolves, counts and fixes the whole board
    // Verified by returning the board before resolve
    #[test]
    fn test_finish_hands_over_locked_board() {
        let mut scheduler = LayerScheduler::new(Tuning::default(), 9).expect("valid tuning");
        scheduler.begin_layer().expect("first layer");
        scheduler
            .add(vec![Actor::new(ActorKind::Dragon), Actor::new(ActorKind::Wizard)], 2)
            .expect("room");
        scheduler.end_layer().expect("layer locks");

        let generation = scheduler.finish().expect("finish after a locked layer");
        assert_eq!(generation.seed, 9);
        assert_eq!(generation.layers.len(), 1);
        assert_eq!(generation.board.fixed_count(), 130);
        assert_eq!(generation.statistics.actor_count, 2);
        assert_eq!(generation.resolution.revealed, 1);
        assert!(generation.diagnostics.is_empty());
    }

    // Tests plan capacity is checked layer by layer and short groups are rejected
    // Verified by checking only the total actor count
    #[test]
    fn test_plan_validation() {
        let plan = LayerPlan::default()
            .with(LayerDirective::default().with(ActorGroup::all(rats(5))))
            .with(LayerDirective::default().with(ActorGroup::all(rats(5))));
        assert_eq!(plan.actor_count(), 10);
        assert!(plan.validate(10).is_ok());
        assert!(matches!(
            plan.validate(9),
            Err(GenerationError::InsufficientSpace {
                layer: 1,
                requested: 5,
                available: 4
            })
        ));

        let short = LayerPlan::default().with(LayerDirective::default().with(ActorGroup {
            actors: rats(1),
            count: 3,
        }));
        assert!(short.validate(100).is_err());
    }

    // Tests the observer sees each layer in order with its placed count
    // Verified by calling the observer after finish only
    #[test]
    fn test_generate_reports_every_layer() {
        let plan = LayerPlan::default()
            .with(LayerDirective::default().with(ActorGroup::all(vec![Actor::new(
                ActorKind::Dragon,
            )])))
            .with(LayerDirective::default().with(ActorGroup::repeat(
                &Actor::new(ActorKind::Medikit),
                3,
            )));

        let mut seen = Vec::new();
        let generation = generate_with(plan, &Tuning::default(), 17, |report| {
            seen.push((report.index, report.placed.len()));
        })
        .expect("plan fits");

        assert_eq!(seen, vec![(0, 1), (1, 3)]);
        assert_eq!(generation.layers.len(), 2);
        assert_eq!(generation.statistics.count_of(ActorKind::Medikit), 3);
    }

    // Tests a plan larger than the board fails before placing anything
    // Verified by validating the plan against twice the cell count
    #[test]
    fn test_generate_rejects_oversized_plan() {
        let plan =
            LayerPlan::default().with(LayerDirective::default().with(ActorGroup::all(rats(10))));
        assert!(matches!(
            generate(plan, &small_tuning(), 1),
            Err(GenerationError::InsufficientSpace { .. })
        ));
    }

    // Tests phase names in lower case
    // Verified by printing the Debug name
    #[test]
    fn test_phase_display() {
        assert_eq!(LayerPhase::Optimizing.to_string(), "optimizing");
        assert_eq!(LayerPhase::Done.to_string(), "done");
    }
}
