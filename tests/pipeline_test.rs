use anyhow::Result;
use itemdb_gen::config::{Config, SourceEntry};
use itemdb_gen::idempotency::WriteOutcome;
use itemdb_gen::pipeline::Pipeline;
use itemdb_gen::SourceFormat;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const POSITIONAL_SHEET: &str = "\
# COMPLETE SPACE GAME DATABASE
DATABASE\tNAME\tTIER
ORE_042\tDominix Ore Sample\t2\t1.5\t0.3\traw\t500\tnotes
";

const HEADER_SHEET: &str = "\
# weapons batch
ID\tNAME\tTIER\tCATEGORY\tBASE_PRICE\tVOLUME_M3\tMASS_KG\tINFO_TEXT
WEP_RAIL_M\tRokh Railgun\t3\tWeapon module\t\t8\t900\tMedium railgun turret
COMP_EMPTY\t\t1\tComponents\t10\t1\t1\tdropped
";

fn write_sheets(dir: &Path) -> Result<()> {
    fs::write(dir.join("COMPLETE.tsv"), POSITIONAL_SHEET)?;
    fs::write(dir.join("07_WEAPONS.tsv"), HEADER_SHEET)?;
    Ok(())
}

fn config(dir: &Path, output: &str) -> Config {
    Config {
        input_dir: dir.to_path_buf(),
        output_path: dir.join(output),
        sources: vec![
            SourceEntry {
                file: "COMPLETE.tsv".to_string(),
                format: SourceFormat::Positional,
            },
            SourceEntry {
                file: "07_WEAPONS.tsv".to_string(),
                format: SourceFormat::Header,
            },
        ],
    }
}

#[test]
fn test_end_to_end_two_sources() -> Result<()> {
    let temp_dir = tempdir()?;
    write_sheets(temp_dir.path())?;
    let config = config(temp_dir.path(), "scripts/ItemDatabase.gd");

    let result = Pipeline::run(&config)?;
    assert_eq!(result.total_items, 2);
    assert_eq!(result.sources.len(), 2);
    assert_eq!(result.sources[0].items, 1);
    assert_eq!(result.sources[1].items, 1);

    let out = fs::read_to_string(&config.output_path)?;
    assert!(out.contains("# TOTAL ITEMS: 2\n"));
    assert_eq!(out.matches("] = ItemData.new()").count(), 2);
    assert_eq!(out.matches("item_registry[\"ORE_042\"] = ItemData.new()").count(), 1);
    assert_eq!(out.matches("item_registry[\"WEP_RAIL_M\"] = ItemData.new()").count(), 1);

    // Positional row: sanitized name, raw description, typed values
    assert!(out.contains("item_registry[\"ORE_042\"].name = \"Sentinel Ore Sample\"\n"));
    assert!(out.contains("item_registry[\"ORE_042\"].description = \"Dominix Ore Sample\"\n"));
    assert!(out.contains("item_registry[\"ORE_042\"].category = ItemCategory.ORE\n"));
    assert!(out.contains("item_registry[\"ORE_042\"].tier = 2\n"));
    assert!(out.contains("item_registry[\"ORE_042\"].base_price = 500\n"));
    assert!(out.contains("item_registry[\"ORE_042\"].mass = 1.5\n"));
    assert!(out.contains("item_registry[\"ORE_042\"].volume = 0.3\n"));

    // Header row: "Weapon module" resolves to MODULE, blank price falls back
    assert!(out.contains("item_registry[\"WEP_RAIL_M\"].name = \"Railgun Railgun\"\n"));
    assert!(out.contains("item_registry[\"WEP_RAIL_M\"].category = ItemCategory.MODULE\n"));
    assert!(out.contains("item_registry[\"WEP_RAIL_M\"].base_price = 1000\n"));
    assert!(out.contains("item_registry[\"WEP_RAIL_M\"].volume = 8.0\n"));
    assert!(out.contains("item_registry[\"WEP_RAIL_M\"].mass = 900.0\n"));
    assert!(out.contains(
        "item_registry[\"WEP_RAIL_M\"].description = \"Medium railgun turret\"\n"
    ));
    assert!(!out.contains("COMP_EMPTY"));

    Ok(())
}

#[test]
fn test_identical_inputs_give_identical_artifacts() -> Result<()> {
    let temp_dir = tempdir()?;
    write_sheets(temp_dir.path())?;

    let first = Pipeline::run(&config(temp_dir.path(), "a/ItemDatabase.gd"))?;
    let second = Pipeline::run(&config(temp_dir.path(), "b/ItemDatabase.gd"))?;

    let a = fs::read(&first.output_file)?;
    let b = fs::read(&second.output_file)?;
    assert_eq!(a, b);
    assert_eq!(first.outcome.sha256(), second.outcome.sha256());
    Ok(())
}

#[test]
fn test_rerun_leaves_unchanged_output_alone() -> Result<()> {
    let temp_dir = tempdir()?;
    write_sheets(temp_dir.path())?;
    let config = config(temp_dir.path(), "ItemDatabase.gd");

    let first = Pipeline::run(&config)?;
    assert!(matches!(first.outcome, WriteOutcome::Written { .. }));

    let second = Pipeline::run(&config)?;
    assert!(matches!(second.outcome, WriteOutcome::Unchanged { .. }));

    // New input changes the artifact
    fs::write(
        temp_dir.path().join("07_WEAPONS.tsv"),
        "ID\tNAME\nAMMO_EMP_S\tEMP Charge S\n",
    )?;
    let third = Pipeline::run(&config)?;
    assert!(matches!(third.outcome, WriteOutcome::Written { .. }));
    assert_eq!(third.total_items, 2);
    Ok(())
}

#[test]
fn test_duplicate_ids_are_emitted_in_order() -> Result<()> {
    let temp_dir = tempdir()?;
    fs::write(temp_dir.path().join("COMPLETE.tsv"), "MOD_1\tFirst\t1\n")?;
    fs::write(temp_dir.path().join("07_WEAPONS.tsv"), "ID\tNAME\nMOD_1\tSecond\n")?;
    let config = config(temp_dir.path(), "ItemDatabase.gd");

    let result = Pipeline::run(&config)?;
    assert_eq!(result.total_items, 2);

    let out = fs::read_to_string(&config.output_path)?;
    let first = out.find("item_registry[\"MOD_1\"].name = \"First\"").unwrap();
    let second = out.find("item_registry[\"MOD_1\"].name = \"Second\"").unwrap();
    assert!(first < second);
    Ok(())
}

#[test]
fn test_config_file_drives_the_run() -> Result<()> {
    let temp_dir = tempdir()?;
    write_sheets(temp_dir.path())?;
    let config_path = temp_dir.path().join("itemdb.toml");
    fs::write(
        &config_path,
        format!(
            "input_dir = {:?}\noutput_path = {:?}\n\n[[sources]]\nfile = \"07_WEAPONS.tsv\"\nformat = \"header\"\n",
            temp_dir.path().display().to_string(),
            temp_dir.path().join("gen.gd").display().to_string(),
        ),
    )?;

    let config = Config::from_toml_str(&fs::read_to_string(&config_path)?)?;
    let result = Pipeline::run(&config)?;
    assert_eq!(result.total_items, 1);
    assert!(temp_dir.path().join("gen.gd").exists());
    Ok(())
}
