use anyhow::Result;

use crate::{CliTest, SAMPLE_CATALOG, run};

#[test]
fn test_query_resolves_translation() -> Result<()> {
    let test = CliTest::with_catalog("app_fr.ts", SAMPLE_CATALOG)?;

    let (code, stdout, _) = run(test
        .query_command()
        .arg("FileEdit")
        .arg("Choose a file"));
    assert_eq!(code, 0);
    assert_eq!(stdout, "Choisir un fichier\n");
    Ok(())
}

#[test]
fn test_query_bool_edit() -> Result<()> {
    let test = CliTest::with_catalog("app_fr.ts", SAMPLE_CATALOG)?;

    let (code, stdout, _) = run(test.query_command().arg("QtBoolEdit").arg("True"));
    assert_eq!(code, 0);
    assert_eq!(stdout, "vrai\n");
    Ok(())
}

#[test]
fn test_query_unfinished_falls_back_to_source() -> Result<()> {
    let test = CliTest::with_catalog("app_fr.ts", SAMPLE_CATALOG)?;

    let (code, stdout, _) = run(test.query_command().arg("MainWindow").arg("Zoom In"));
    assert_eq!(code, 0);
    assert!(stdout.starts_with("Zoom In\n"), "stdout: {}", stdout);
    assert!(stdout.contains("is unfinished"), "stdout: {}", stdout);
    assert!(
        stdout.contains("falling back to source text"),
        "stdout: {}",
        stdout
    );
    Ok(())
}

#[test]
fn test_query_vanished_falls_back_to_source() -> Result<()> {
    let test = CliTest::with_catalog("app_fr.ts", SAMPLE_CATALOG)?;

    let (code, stdout, _) = run(test.query_command().arg("MainWindow").arg("&Open..."));
    assert_eq!(code, 0);
    assert!(stdout.starts_with("&Open...\n"), "stdout: {}", stdout);
    assert!(stdout.contains("has vanished"), "stdout: {}", stdout);
    Ok(())
}

#[test]
fn test_query_missing_entry_fails() -> Result<()> {
    let test = CliTest::with_catalog("app_fr.ts", SAMPLE_CATALOG)?;

    let (code, stdout, _) = run(test.query_command().arg("MainWindow").arg("Nope"));
    assert_eq!(code, 1);
    assert!(stdout.contains("no entry for \"Nope\""), "stdout: {}", stdout);
    Ok(())
}

#[test]
fn test_query_file_filter() -> Result<()> {
    let test = CliTest::with_catalog("app_fr.ts", SAMPLE_CATALOG)?;
    test.write_file(
        "translations/app_de.ts",
        "<TS language=\"de\"><context><name>QtBoolEdit</name>\
<message><source>True</source><translation>wahr</translation></message></context></TS>",
    )?;

    let (code, stdout, _) = run(test
        .query_command()
        .arg("QtBoolEdit")
        .arg("True")
        .arg("--file")
        .arg("translations/app_de.ts"));
    assert_eq!(code, 0);
    assert_eq!(stdout, "wahr\n");
    Ok(())
}
