/// Source file and default-value constants shared by the parsers and the driver.

// Default locations (relative to the working directory)
pub const DEFAULT_CONFIG_PATH: &str = "itemdb.toml";
pub const DEFAULT_INPUT_DIR: &str = "data/batch05";
pub const DEFAULT_OUTPUT_PATH: &str = "scripts/ItemDatabase.gd";

// Environment overrides
pub const INPUT_DIR_ENV: &str = "ITEMDB_INPUT_DIR";
pub const OUTPUT_PATH_ENV: &str = "ITEMDB_OUTPUT_PATH";

/// The monolithic, header-less database sheet.
pub const COMPLETE_DATABASE_FILE: &str = "COMPLETE_SPACE_GAME_DATABASE.tsv";

/// Well-formed sheets with named header rows, in load order.
pub const HEADER_SOURCE_FILES: &[&str] = &[
    "06_COMPONENTS.tsv",
    "07a_WEAPONS_PART1.tsv",
    "07b_WEAPONS_PART2.tsv",
    "08_AMMUNITION.tsv",
    "09a_shields_armor.tsv",
    "09b_engines_power.tsv",
    "09c_cargo_sensors.tsv",
    "09d_ecm_mining.tsv",
    "09e_command_medical.tsv",
    "09f_utility_station.tsv",
    "10a_frigates_destroyers.tsv",
    "10b_cruisers_battlecruisers.tsv",
    "10c_battleships_carriers.tsv",
    "10d_dreadnoughts_titans.tsv",
    "10e_industrial_special_civilian.tsv",
];

/// Lines in the positional sheet starting with this marker are headers, not rows.
pub const POSITIONAL_HEADER_MARKER: &str = "DATABASE";

// Field defaults, as text; typing happens at emission
pub const DEFAULT_TIER: &str = "1";
pub const DEFAULT_BASE_PRICE: &str = "1000";
pub const DEFAULT_VOLUME: &str = "10.0";
pub const DEFAULT_MASS: &str = "10.0";

// Typed fallbacks used by the emitter
pub const FALLBACK_TIER: i64 = 1;
pub const FALLBACK_BASE_PRICE: i64 = 1000;
pub const FALLBACK_VOLUME: f64 = 10.0;
pub const FALLBACK_MASS: f64 = 10.0;

/// Positional price candidates must fall strictly inside (0, PRICE_CEILING).
pub const PRICE_CEILING: f64 = 1_000_000.0;
