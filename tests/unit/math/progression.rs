//! Tests for player level and hit-point progression

#[cfg(test)]
mod tests {
    use lairforge::math::progression::{
        MAX_HP_CAP, STARTING_MAX_HP, is_half_heart_level, project, xp_to_next_level,
    };

    // Tests XP table lookups and repetition of the last entry past the table
    // Verified by returning 0 past the table
    #[test]
    fn test_xp_table_lookup() {
        assert_eq!(xp_to_next_level(0), 0);
        assert_eq!(xp_to_next_level(1), 4);
        assert_eq!(xp_to_next_level(4), 9);
        assert_eq!(xp_to_next_level(14), 25);
        // Past the table the last entry repeats
        assert_eq!(xp_to_next_level(40), 25);
    }

    // Tests odd and even levels for the extra heart
    // Verified by adding the heart on even levels
    #[test]
    fn test_half_heart_levels() {
        assert!(is_half_heart_level(2));
        assert!(!is_half_heart_level(3));
    }

    // Tests no XP leaves the player at level 1 with starting hit points
    // Verified by starting at level 0
    #[test]
    fn test_project_without_xp() {
        let curve = project(0);
        assert!(curve.steps.is_empty());
        assert_eq!(curve.final_level, 1);
        assert_eq!(curve.final_max_hp, STARTING_MAX_HP);
        assert_eq!(curve.leftover_xp, 0);
    }

    // Tests 18 XP buys three levels with 2 left and one extra heart at level 3
    // Verified by adding hit points on every level-up
    #[test]
    fn test_project_small_pool() {
        let curve = project(18);
        let levels: Vec<_> = curve.steps.iter().map(|step| (step.level, step.max_hp)).collect();
        assert_eq!(levels, vec![(2, 4), (3, 5), (4, 5)]);
        assert_eq!(curve.steps.last().map(|step| step.cumulative_xp), Some(16));
        assert_eq!(curve.final_level, 4);
        assert_eq!(curve.leftover_xp, 2);
    }

    // Tests max hit points stop at the cap for huge XP pools
    // Verified by removing the cap check
    #[test]
    fn test_hit_points_are_capped() {
        let curve = project(100_000);
        assert_eq!(curve.final_max_hp, MAX_HP_CAP);
        assert!(curve.steps.iter().all(|step| step.max_hp <= MAX_HP_CAP));
        assert!(curve.final_level > 30);
    }
}
