//! Standard layer plan
//!
//! Bosses and uniques go first, escalating groups follow, then the elite and
//! loot layer, and the common fodder fills in last.

use crate::actors::{Actor, ActorKind, Loot, PairRole, Quadrant, Relation};
use crate::algorithm::scheduler::{ActorGroup, LayerDirective, LayerPlan};

fn group(kind: ActorKind, count: usize) -> ActorGroup {
    ActorGroup::repeat(&Actor::new(kind), count)
}

/// Dragon and wizard
pub fn boss_layer() -> LayerDirective {
    LayerDirective::default()
        .with(group(ActorKind::Dragon, 1))
        .with(group(ActorKind::Wizard, 1))
}

/// The wizard's big slimes
pub fn big_slime_layer() -> LayerDirective {
    LayerDirective::default().with(group(ActorKind::BigSlime, 5))
}

/// The mine king
pub fn mine_king_layer() -> LayerDirective {
    LayerDirective::default().with(group(ActorKind::MineKing, 1))
}

/// Romeo and Juliet
pub fn lovers_layer() -> LayerDirective {
    let romeo = Actor::new(ActorKind::Giant)
        .named("romeo")
        .with_relation(Relation::Lover(PairRole::Left));
    let juliet = Actor::new(ActorKind::Giant)
        .named("juliet")
        .with_relation(Relation::Lover(PairRole::Right));
    LayerDirective::default()
        .with(ActorGroup::all(vec![romeo]))
        .with(ActorGroup::all(vec![juliet]))
}

/// Four guards, one per quadrant
pub fn guards() -> Vec<Actor> {
    (1..=4)
        .filter_map(|number| {
            Quadrant::from_number(number).map(|quadrant| {
                Actor::new(ActorKind::Guard)
                    .named(format!("guard{number}"))
                    .with_relation(Relation::Quadrant(quadrant))
            })
        })
        .collect()
}

/// Two gargoyles sharing a twin group
pub fn gargoyle_twins(group_number: u8) -> Vec<Actor> {
    let gargoyle = Actor::new(ActorKind::Gargoyle)
        .named(format!("gargoyle{group_number}"))
        .with_relation(Relation::Twin(group_number));
    vec![gargoyle.clone(), gargoyle]
}

/// Rats that want to flank the rat king
pub fn rat_guards(count: usize) -> Vec<Actor> {
    let rat = Actor::new(ActorKind::Rat)
        .named("rat_guard")
        .with_relation(Relation::RatGuard);
    vec![rat; count]
}

/// Rat king, walls, minotaurs, guards, gargoyles, traps and loot
pub fn elite_layer() -> LayerDirective {
    let treasure_wall = Actor::new(ActorKind::Wall).containing(Loot::treasure(1));
    let medikit_chest = Actor::new(ActorKind::Chest).containing(Loot::medikit());
    let healing_orb = Actor::new(ActorKind::Orb)
        .named("orb_with_healing")
        .always_revealed();

    let mut layer = LayerDirective::default()
        .with(group(ActorKind::RatKing, 1))
        .with(ActorGroup::repeat(&treasure_wall, 6))
        .with(group(ActorKind::Minotaur, 5))
        .with(ActorGroup::all(guards()));
    for twin_group in 1..=4 {
        layer = layer.with(ActorGroup::all(gargoyle_twins(twin_group)));
    }
    layer
        .with(group(ActorKind::Gazer, 2))
        .with(group(ActorKind::Mine, 9))
        .with(group(ActorKind::Medikit, 5))
        .with(group(ActorKind::Chest, 3))
        .with(ActorGroup::repeat(&medikit_chest, 2))
        .with(ActorGroup::all(vec![healing_orb]))
        .with(group(ActorKind::DragonEgg, 1))
}

/// Common monsters and the last few uniques
pub fn fodder_layer() -> LayerDirective {
    LayerDirective::default()
        .with(group(ActorKind::Rat, 13))
        .with(group(ActorKind::Bat, 12))
        .with(group(ActorKind::Skeleton, 10))
        .with(group(ActorKind::Slime, 8))
        .with(group(ActorKind::Mimic, 1))
        .with(group(ActorKind::Gnome, 1))
        .with(group(ActorKind::SpellMakeOrb, 1))
}

/// The six layers of a standard dungeon
pub fn standard_plan() -> LayerPlan {
    LayerPlan::default()
        .with(boss_layer())
        .with(big_slime_layer())
        .with(mine_king_layer())
        .with(lovers_layer())
        .with(elite_layer())
        .with(fodder_layer())
}
