//! Player level and hit-point progression
//!
//! Level: 1   2  3  4  5   6   7   8   9  10  11  12  13  14  15
//! HP:    4      5     6       7       8       9      10      11

use serde::Serialize;

/// Experience needed to leave each level, indexed by level
pub const XP_PER_LEVEL: [u32; 15] = [0, 4, 5, 7, 9, 9, 10, 12, 12, 12, 15, 18, 21, 21, 25];

/// Maximum hit points at level one
pub const STARTING_MAX_HP: u32 = 4;

/// Maximum hit points can never exceed this
pub const MAX_HP_CAP: u32 = 19;

/// Experience required to advance from `level` to the next
///
/// Levels past the table reuse its last entry.
pub fn xp_to_next_level(level: u32) -> u32 {
    let last = XP_PER_LEVEL.len() - 1;
    let index = (level as usize).min(last);
    XP_PER_LEVEL.get(index).copied().unwrap_or(0)
}

/// Even levels only grant half a heart, so no extra maximum hit point
pub const fn is_half_heart_level(level: u32) -> bool {
    level % 2 == 0
}

/// One level-up on the projected curve
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LevelStep {
    /// Level reached
    pub level: u32,
    /// Experience spent on this level-up
    pub xp_required: u32,
    /// Experience spent on all level-ups so far
    pub cumulative_xp: u32,
    /// Maximum hit points after the level-up
    pub max_hp: u32,
}

/// Projection of the levels and hit points a board's experience affords
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResourceCurve {
    /// Level-ups in order
    pub steps: Vec<LevelStep>,
    /// Level after spending all affordable experience
    pub final_level: u32,
    /// Maximum hit points at the final level
    pub final_max_hp: u32,
    /// Experience left over below the next threshold
    pub leftover_xp: u32,
}

/// Spend `total_xp` on level-ups starting from level one
pub fn project(total_xp: u32) -> ResourceCurve {
    let mut level = 1;
    let mut max_hp = STARTING_MAX_HP;
    let mut pool = total_xp;
    let mut cumulative_xp = 0;
    let mut steps = Vec::new();

    loop {
        let xp_required = xp_to_next_level(level);
        if xp_required == 0 || pool < xp_required {
            break;
        }
        pool -= xp_required;
        cumulative_xp += xp_required;
        level += 1;
        if max_hp < MAX_HP_CAP && !is_half_heart_level(level) {
            max_hp += 1;
        }
        steps.push(LevelStep {
            level,
            xp_required,
            cumulative_xp,
            max_hp,
        });
    }

    ResourceCurve {
        steps,
        final_level: level,
        final_max_hp: max_hp,
        leftover_xp: pool,
    }
}
