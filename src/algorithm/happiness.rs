//! Per-actor happiness scoring
//!
//! Happiness is a pure function of the board: every rule reads positions and
//! relationship descriptors, never hidden counters. Kinds without a rule score
//! zero. Summing the score of every actor gives the total the optimizer climbs.

use crate::actors::{ActorId, ActorKind, PairRole, Relation};
use crate::io::configuration::{ScoreTable, Tuning};
use crate::spatial::{Board, BoardShape, Position};
use std::collections::BTreeMap;

/// King-move ring scanned for wall neighbours
const WALL_NEIGHBOURHOOD: f64 = 1.5;

/// Chest claimed by a minotaur
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChestClaim {
    /// Claimed chest
    pub chest: ActorId,
    /// Where the chest stands
    pub position: Position,
}

/// Assign each chest to at most one minotaur
///
/// A minotaur qualifies when exactly one chest lies within range. Minotaurs
/// are considered in creation order, so when several qualify for the same
/// chest the lowest id keeps it and the others get nothing.
pub fn chest_owners(board: &Board, scores: &ScoreTable) -> BTreeMap<ActorId, ChestClaim> {
    let chests: Vec<(ActorId, Position)> = board.actors_of(ActorKind::Chest).collect();
    let mut owners = BTreeMap::new();
    let mut claimed = Vec::new();

    for (minotaur, pos) in board.actors_of(ActorKind::Minotaur) {
        let mut nearby = chests
            .iter()
            .filter(|(_, chest_pos)| pos.distance(*chest_pos) < scores.minotaur_chest_radius);
        let (Some(&(chest, position)), None) = (nearby.next(), nearby.next()) else {
            continue;
        };
        if claimed.contains(&chest) {
            continue;
        }
        claimed.push(chest);
        owners.insert(minotaur, ChestClaim { chest, position });
    }

    owners
}

/// What an orb would reveal from its position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OrbAssessment {
    /// Whether the orb sits closer to the rim than allowed
    pub near_edge: bool,
    /// Forbidden actors inside the reveal radius
    pub forbidden: usize,
    /// Walls inside the reveal radius
    pub walls: usize,
    /// Medikits inside the reveal radius
    pub medikits: usize,
}

impl OrbAssessment {
    /// Score contribution of the assessment
    pub fn score(&self, scores: &ScoreTable) -> i64 {
        let mut score = 0;
        if self.near_edge {
            score += scores.orb_near_edge;
        }
        score += scores.orb_forbidden_reveal * self.forbidden as i64;
        let excess_walls = self.walls.saturating_sub(scores.orb_wall_allowance);
        score += scores.orb_excess_wall * excess_walls as i64;
        if self.medikits == 1 && self.walls > 0 {
            score += scores.orb_healing_reveal;
        }
        score
    }
}

/// Inspect the cells an orb at `pos` would reveal
pub fn assess_orb(board: &Board, pos: Position, scores: &ScoreTable) -> OrbAssessment {
    let shape = board.shape();
    let mut assessment = OrbAssessment {
        near_edge: shape.edge_distance(pos) < scores.orb_edge_threshold,
        ..OrbAssessment::default()
    };

    for neighbour in shape.within(pos, scores.orb_reveal_radius) {
        match board.kind_at(neighbour) {
            ActorKind::Wall => assessment.walls += 1,
            ActorKind::Medikit => assessment.medikits += 1,
            kind if kind.is_orb_forbidden() => assessment.forbidden += 1,
            _ => {}
        }
    }

    assessment
}

/// Shared state for scoring every actor on one board
struct ScoringContext<'a> {
    board: &'a Board,
    shape: BoardShape,
    scores: &'a ScoreTable,
    owners: BTreeMap<ActorId, ChestClaim>,
}

impl<'a> ScoringContext<'a> {
    fn new(board: &'a Board, tuning: &'a Tuning) -> Self {
        Self {
            board,
            shape: board.shape(),
            scores: &tuning.scores,
            owners: chest_owners(board, &tuning.scores),
        }
    }

    /// Count actors of `kind` strictly closer than `radius`
    fn count_near(&self, pos: Position, kind: ActorKind, radius: f64) -> usize {
        self.shape
            .within(pos, radius)
            .filter(|&other| pos.distance(other) < radius && self.board.kind_at(other) == kind)
            .count()
    }

    fn is_near(&self, pos: Position, kind: ActorKind, radius: f64) -> bool {
        self.count_near(pos, kind, radius) > 0
    }

    /// Position of the first other actor of `kind` sharing `relation`
    fn partner(&self, id: ActorId, kind: ActorKind, relation: Option<Relation>) -> Option<Position> {
        self.board
            .actors_of(kind)
            .filter(|&(other, _)| other != id)
            .find(|&(other, _)| {
                relation.is_none_or(|wanted| {
                    self.board
                        .actor(other)
                        .is_some_and(|actor| actor.relation == wanted)
                })
            })
            .map(|(_, pos)| pos)
    }

    fn score(&self, id: ActorId) -> i64 {
        let Some(actor) = self.board.actor(id) else {
            return 0;
        };
        let Some(pos) = actor.position else {
            return 0;
        };
        let s = self.scores;
        let adjacent = s.adjacency_radius;

        match (actor.kind, actor.relation) {
            (ActorKind::DragonEgg, _) => {
                bonus(self.is_near(pos, ActorKind::Dragon, adjacent), s.dragon_egg_near_dragon)
            }
            (ActorKind::Dragon, _) => bonus(self.shape.is_center(pos), s.dragon_centered),
            (ActorKind::Fidel, _) => bonus(self.shape.is_corner(pos), s.fidel_corner),
            (ActorKind::Gnome, _) => {
                bonus(self.is_near(pos, ActorKind::Medikit, adjacent), s.gnome_near_medikit)
            }
            (ActorKind::MineKing, _) => bonus(self.shape.is_corner(pos), s.mine_king_corner),
            (ActorKind::Wizard, _) => bonus(self.shape.is_edge(pos), s.wizard_edge),
            (ActorKind::BigSlime, _) => {
                bonus(self.is_near(pos, ActorKind::Wizard, adjacent), s.big_slime_near_wizard)
            }
            (ActorKind::Rat, Relation::RatGuard) => {
                let beside_king = self
                    .board
                    .actors_of(ActorKind::RatKing)
                    .any(|(_, king)| king.y == pos.y && pos.x.abs_diff(king.x) == 1);
                bonus(beside_king, s.rat_guard_beside_king)
            }
            (ActorKind::Guard, Relation::Quadrant(quadrant)) => bonus(
                self.shape.quadrant_of(pos) == Some(quadrant),
                s.guard_quadrant,
            ),
            (ActorKind::Giant, relation) => self.giant_score(id, pos, relation),
            (ActorKind::Gargoyle, Relation::Twin(group)) => {
                let twin_near = self
                    .partner(id, ActorKind::Gargoyle, Some(Relation::Twin(group)))
                    .is_some_and(|twin| pos.distance(twin) < adjacent);
                bonus(twin_near, s.gargoyle_twin)
            }
            (ActorKind::Minotaur, _) => bonus(self.owners.contains_key(&id), s.minotaur_chest),
            (ActorKind::Orb, _) => assess_orb(self.board, pos, s).score(s),
            (ActorKind::Medikit, _) => {
                s.medikit_crowding
                    * self.count_near(pos, ActorKind::Medikit, s.medikit_crowding_radius) as i64
            }
            (ActorKind::Chest, _) => {
                s.chest_crowding
                    * self.count_near(pos, ActorKind::Chest, s.chest_crowding_radius) as i64
            }
            (ActorKind::Wall, _) => self.wall_score(pos),
            _ => 0,
        }
    }

    fn giant_score(&self, id: ActorId, pos: Position, relation: Relation) -> i64 {
        let center = self.shape.center();
        let on_own_side = match relation {
            Relation::Lover(PairRole::Left) => pos.x < center.x,
            Relation::Lover(PairRole::Right) => pos.x > center.x,
            _ => false,
        };
        let mut score = bonus(on_own_side, self.scores.giant_side);

        let mirrored = self
            .partner(id, ActorKind::Giant, None)
            .is_some_and(|love| {
                love.y == pos.y && pos.x.abs_diff(center.x) == love.x.abs_diff(center.x)
            });
        score += bonus(mirrored, self.scores.giant_symmetry);
        score
    }

    /// Walls like to come in isolated pairs away from the rim
    ///
    /// Only the eight surrounding cells count, whatever `adjacency_radius` is.
    fn wall_score(&self, pos: Position) -> i64 {
        let mut orthogonal = 0;
        let mut diagonal = 0;
        let mut on_rim = usize::from(self.shape.is_border(pos));

        for other in self.shape.within(pos, WALL_NEIGHBOURHOOD) {
            if self.board.kind_at(other) != ActorKind::Wall {
                continue;
            }
            match pos.x.abs_diff(other.x) + pos.y.abs_diff(other.y) {
                1 => {
                    orthogonal += 1;
                    if self.shape.is_border(other) {
                        on_rim += 1;
                    }
                }
                2 => diagonal += 1,
                _ => {}
            }
        }

        bonus(
            orthogonal == 1 && diagonal == 0 && on_rim < 2,
            self.scores.wall_pair,
        )
    }
}

const fn bonus(condition: bool, amount: i64) -> i64 {
    if condition { amount } else { 0 }
}

/// Happiness of a single actor on the current board
pub fn happiness(board: &Board, id: ActorId, tuning: &Tuning) -> i64 {
    ScoringContext::new(board, tuning).score(id)
}

/// Sum of every actor's happiness
pub fn total_happiness(board: &Board, tuning: &Tuning) -> i64 {
    let context = ScoringContext::new(board, tuning);
    board.actors().map(|(id, _)| context.score(id)).sum()
}

/// Happiness of every actor, indexed by actor id
pub fn happiness_by_actor(board: &Board, tuning: &Tuning) -> Vec<i64> {
    let context = ScoringContext::new(board, tuning);
    board.actors().map(|(id, _)| context.score(id)).collect()
}
