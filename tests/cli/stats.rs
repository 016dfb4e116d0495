use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, SAMPLE_CATALOG, run};

#[test]
fn test_stats_text_output() -> Result<()> {
    let test = CliTest::with_catalog("app_fr.ts", SAMPLE_CATALOG)?;

    let (code, stdout, _) = run(&mut test.stats_command());
    assert_eq!(code, 0);
    assert!(stdout.contains("translations/app_fr.ts (fr)"), "stdout: {}", stdout);
    assert!(stdout.contains("contexts: 3, messages: 6"), "stdout: {}", stdout);
    assert!(
        stdout.contains("finished: 3, unfinished: 1, vanished: 1, obsolete: 1"),
        "stdout: {}",
        stdout
    );
    assert!(stdout.contains("completion: 75.0%"), "stdout: {}", stdout);
    Ok(())
}

#[test]
fn test_stats_json_output() -> Result<()> {
    let test = CliTest::with_catalog("app_fr.ts", SAMPLE_CATALOG)?;

    let (code, stdout, _) = run(test.stats_command().arg("--json"));
    assert_eq!(code, 0);

    let parsed: Value = serde_json::from_str(&stdout)?;
    let files = parsed.as_array().expect("stats JSON should be an array");
    assert_eq!(files.len(), 1);

    let file = &files[0];
    assert_eq!(file["filePath"], "translations/app_fr.ts");
    assert_eq!(file["language"], "fr");
    assert_eq!(file["contexts"], 3);
    assert_eq!(file["messages"], 6);
    assert_eq!(file["finished"], 3);
    assert_eq!(file["unfinished"], 1);
    assert_eq!(file["vanished"], 1);
    assert_eq!(file["obsolete"], 1);
    Ok(())
}

#[test]
fn test_stats_no_catalogs() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(&mut test.stats_command());
    assert_eq!(code, 0);
    assert!(stdout.contains("No catalog files found."), "stdout: {}", stdout);
    Ok(())
}

#[test]
fn test_stats_multiple_catalogs_sorted() -> Result<()> {
    let test = CliTest::with_catalog("app_fr.ts", SAMPLE_CATALOG)?;
    test.write_file(
        "translations/app_de.ts",
        "<TS language=\"de\"><context><name>QtBoolEdit</name>\
<message><source>True</source><translation>wahr</translation></message></context></TS>",
    )?;

    let (code, stdout, _) = run(&mut test.stats_command());
    assert_eq!(code, 0);
    let de_pos = stdout.find("app_de.ts").expect("de catalog listed");
    let fr_pos = stdout.find("app_fr.ts").expect("fr catalog listed");
    assert!(de_pos < fr_pos, "stdout: {}", stdout);
    Ok(())
}
