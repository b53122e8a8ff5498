//! Trademark-safe renaming of item display names.
//!
//! Every entry of [`NAME_REPLACEMENTS`] is applied in table order as a plain
//! substring replacement over the output of the previous entry. There are no
//! word boundaries: `"Hel"` also matches inside `"Helmet"`.

/// Ordered `(forbidden, replacement)` pairs.
///
/// Order is significant: `"Typhoon"` becomes `"Cyclone"`, which the later
/// `"Cyclone"` entry turns into `"Heavy Missile BC"`. A trigger on its own
/// always sanitizes to text free of triggers. Replacements that land next to
/// other letters can still form a new trigger (`"BC" + "himera"`), so a
/// second pass is not guaranteed to be a no-op for arbitrary input.
pub const NAME_REPLACEMENTS: &[(&str, &str)] = &[
    ("Dominix", "Sentinel"),
    ("Megathron", "Titan"),
    ("Hyperion", "Assault"),
    ("Apocalypse", "Laser"),
    ("Armageddon", "Energy"),
    ("Abaddon", "Artillery"),
    ("Tempest", "Storm"),
    ("Maelstrom", "Heavy Artillery"),
    ("Typhoon", "Cyclone"),
    ("Raven", "Cruise"),
    ("Scorpion", "ECM"),
    ("Rokh", "Railgun"),
    ("Kronos", "Blaster Marauder"),
    ("Paladin", "Laser Marauder"),
    ("Vargur", "Projectile Marauder"),
    ("Golem", "Missile Marauder"),
    ("Nightmare", "Laser Faction"),
    ("Vindicator", "Blaster Faction"),
    ("Machariel", "Projectile Faction"),
    ("Thanatos", "Drone Carrier"),
    ("Archon", "Armor Carrier"),
    ("Chimera", "Shield Carrier"),
    ("Nidhoggur", "Projectile Carrier"),
    ("Aeon", "Laser Supercarrier"),
    ("Hel", "Projectile Supercarrier"),
    ("Nyx", "Hybrid Supercarrier"),
    ("Phoenix", "Missile Dreadnought"),
    ("Moros", "Blaster Dreadnought"),
    ("Revelation", "Laser Dreadnought"),
    ("Naglfar", "Projectile Dreadnought"),
    ("Zirnitra", "Pirate DN-A"),
    ("Chemosh", "Pirate DN-B"),
    ("Vehement", "Faction DN"),
    ("Caiman", "Pirate DN-C"),
    ("Molok", "Pirate DN-D"),
    ("Komodo", "Faction DN Elite"),
    ("Avatar", "Laser Titan"),
    ("Erebus", "Hybrid Titan"),
    ("Leviathan", "Missile Titan"),
    ("Ragnarok", "Projectile Titan"),
    ("Vendetta", "Faction Titan-A"),
    ("Vanquisher", "Faction Titan-B"),
    ("Drake", "Missile BC"),
    ("Ferox", "Railgun BC"),
    ("Hurricane", "Projectile BC"),
    ("Prophecy", "Laser BC"),
    ("Harbinger", "Beam BC"),
    ("Myrmidon", "Drone BC"),
    ("Brutix", "Blaster BC"),
    ("Cyclone", "Heavy Missile BC"),
    ("Talos", "Artillery BC"),
    ("Naga", "Railgun Elite BC"),
    ("Oracle", "Laser Elite BC"),
    ("Basilisk", "Shield Logi"),
    ("Oneiros", "Armor Logi"),
    ("Scythe", "Fast Logi"),
    ("Venture", "Mining Frigate"),
    ("Prospect", "Expedition Frigate"),
    ("Procurer", "Tanked Barge"),
    ("Retriever", "Standard Barge"),
    ("Covetor", "Yield Barge"),
    ("Skiff", "Tanked Exhumer"),
    ("Mackinaw", "Standard Exhumer"),
    ("Hulk", "Yield Exhumer"),
    ("Orca", "Industrial Command"),
    ("Rorqual", "Capital Industrial"),
    ("Badger", "Fast Hauler"),
    ("Tayra", "Medium Hauler"),
    ("Bestower", "Standard Hauler"),
    ("Iteron", "Large Hauler"),
    ("Mammoth", "Heavy Hauler"),
    ("Nereus", "Specialist Hauler"),
    ("Kryos", "Ore Hauler"),
    ("Miasmos", "Gas Hauler"),
    ("Epithal", "Planetary Hauler"),
    ("Hoarder", "Quick Hauler"),
    ("Bustard", "DST-A"),
    ("Mastodon", "DST-B"),
    ("Crane", "BR-A"),
    ("Viator", "BR-B"),
    ("Charon", "Standard Freighter"),
    ("Obelisk", "Heavy Freighter"),
    ("Fenrir", "Fast Freighter"),
    ("Prowler", "Covert Ops"),
    ("Raptor", "Interceptor"),
    ("Hound", "Bomber"),
    ("Ibis", "Rookie-A"),
    ("Velator", "Rookie-B"),
    ("Reaper", "Rookie-C"),
    ("Impairor", "Rookie-D"),
];

/// Apply every replacement in [`NAME_REPLACEMENTS`] to `name`.
pub fn sanitize_name(name: &str) -> String {
    let mut out = name.to_string();
    for (forbidden, replacement) in NAME_REPLACEMENTS {
        if out.contains(forbidden) {
            out = out.replace(forbidden, replacement);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_known_hull_name() {
        assert_eq!(sanitize_name("Dominix Fleet"), "Sentinel Fleet");
    }

    #[test]
    fn test_unmapped_name_is_unchanged() {
        assert_eq!(sanitize_name("Basic Armor Plate"), "Basic Armor Plate");
        assert_eq!(sanitize_name(""), "");
    }

    #[test]
    fn test_earlier_replacement_feeds_later_rule() {
        assert_eq!(sanitize_name("Typhoon"), "Heavy Missile BC");
    }

    #[test]
    fn test_matches_inside_longer_words() {
        assert_eq!(sanitize_name("Helmet"), "Projectile Supercarriermet");
    }

    #[test]
    fn test_replaces_every_occurrence() {
        assert_eq!(sanitize_name("Raven & Raven Navy"), "Cruise & Cruise Navy");
    }

    #[test]
    fn test_sanitizing_separate_triggers_is_idempotent() {
        for (forbidden, _) in NAME_REPLACEMENTS {
            let once = sanitize_name(forbidden);
            assert_eq!(sanitize_name(&once), once, "not idempotent for {}", forbidden);
        }
        let once = sanitize_name("Dominix Navy Issue with Hulk escort");
        assert_eq!(sanitize_name(&once), once);
    }

    #[test]
    fn test_replacement_can_join_neighbouring_text_into_trigger() {
        // "Cyclone" -> "Heavy Missile BC", which meets "himera" after the
        // "Chimera" rule has already run
        let once = sanitize_name("Typhoonhimera");
        assert_eq!(once, "Heavy Missile BChimera");
        assert_eq!(sanitize_name(&once), "Heavy Missile BShield Carrier");
    }

    #[test]
    fn test_replacements_never_reintroduce_triggers() {
        for (forbidden, _) in NAME_REPLACEMENTS {
            let result = sanitize_name(forbidden);
            for (trigger, _) in NAME_REPLACEMENTS {
                assert!(
                    !result.contains(trigger),
                    "{} sanitizes to {} which still contains {}",
                    forbidden,
                    result,
                    trigger
                );
            }
        }
    }
}
