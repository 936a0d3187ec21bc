//! Tests for the actor kind enumeration and its base attributes

#[cfg(test)]
mod tests {
    use lairforge::actors::ActorKind;
    use std::collections::HashSet;

    // Tests ALL lists every kind once in declaration order, which statistics maps sort by
    // Verified by duplicating Rat in ActorKind::ALL
    #[test]
    fn test_all_kinds_listed_once_in_order() {
        let unique: HashSet<_> = ActorKind::ALL.iter().copied().collect();
        assert_eq!(unique.len(), ActorKind::ALL.len());
        assert!(ActorKind::ALL.is_sorted());
        assert_eq!(ActorKind::ALL.first(), Some(&ActorKind::Empty));
    }

    // Tests base level and XP for a sample of kinds, mines included
    // Verified by giving mines their level as XP
    #[test]
    fn test_base_attributes() {
        assert_eq!(ActorKind::Dragon.base_level(), 13);
        assert_eq!(ActorKind::Dragon.base_xp(), 13);
        assert_eq!(ActorKind::Mine.base_level(), 100);
        assert_eq!(ActorKind::Mine.base_xp(), 3);
        assert_eq!(ActorKind::Gnome.base_level(), 0);
        assert_eq!(ActorKind::Gnome.base_xp(), 9);
        assert_eq!(ActorKind::Treasure.base_xp(), 1);
        assert_eq!(ActorKind::Wall.base_xp(), 0);
    }

    // Tests monsters are told apart from items, walls and empties
    // Verified by classifying chests as monsters
    #[test]
    fn test_monster_classification() {
        assert!(ActorKind::Rat.is_monster());
        assert!(ActorKind::Dragon.is_monster());
        assert!(!ActorKind::Empty.is_monster());
        assert!(!ActorKind::Chest.is_monster());
        assert!(!ActorKind::Orb.is_monster());
        assert!(!ActorKind::Wall.is_monster());
    }

    // Tests kinds an orb must keep hidden against kinds it may reveal
    // Verified by dropping Gazer from the forbidden set
    #[test]
    fn test_orb_forbidden_kinds() {
        for kind in [
            ActorKind::Dragon,
            ActorKind::Gazer,
            ActorKind::Chest,
            ActorKind::Mimic,
            ActorKind::BigSlime,
        ] {
            assert!(kind.is_orb_forbidden(), "{kind} should be hidden from orbs");
        }
        for kind in [ActorKind::Wall, ActorKind::Medikit, ActorKind::Rat, ActorKind::Empty] {
            assert!(!kind.is_orb_forbidden(), "{kind} may be revealed");
        }
    }

    // Tests the unique bosses in declaration order
    // Verified by marking Giant as unique
    #[test]
    fn test_unique_kinds() {
        let unique: Vec<_> = ActorKind::ALL
            .into_iter()
            .filter(|kind| kind.is_unique())
            .collect();
        assert_eq!(
            unique,
            vec![
                ActorKind::MineKing,
                ActorKind::Dragon,
                ActorKind::RatKing,
                ActorKind::Wizard,
                ActorKind::Gnome,
                ActorKind::DragonEgg,
            ]
        );
    }

    // Tests display goes through the in-game label
    // Verified by printing the Debug variant name
    #[test]
    fn test_display_uses_label() {
        assert_eq!(ActorKind::RatKing.to_string(), "rat king");
        assert_eq!(ActorKind::Guard.to_string(), "guardian");
        assert_eq!(ActorKind::SpellMakeOrb.label(), "spell_reveal");
    }

    // Tests tuning files name kinds by variant
    // Verified by renaming variants to snake_case in serde
    #[test]
    fn test_serialized_as_variant_name() {
        let json = serde_json::to_string(&ActorKind::BigSlime).unwrap_or_default();
        assert_eq!(json, "\"BigSlime\"");
        let parsed: Option<ActorKind> = serde_json::from_str("\"DragonEgg\"").ok();
        assert_eq!(parsed, Some(ActorKind::DragonEgg));
    }
}
