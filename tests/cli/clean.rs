use anyhow::Result;

use crate::{CliTest, SAMPLE_CATALOG, run};

#[test]
fn test_clean_dry_run_previews_and_keeps_files() -> Result<()> {
    let test = CliTest::with_catalog("app_fr.ts", SAMPLE_CATALOG)?;

    let (code, stdout, _) = run(&mut test.clean_command());
    assert_eq!(code, 0);
    assert!(stdout.contains("Would remove 2 entries"), "stdout: {}", stdout);
    assert!(stdout.contains("vanished: 1"), "stdout: {}", stdout);
    assert!(stdout.contains("obsolete: 1"), "stdout: {}", stdout);
    assert!(stdout.contains("--apply"), "stdout: {}", stdout);

    // Dry-run must not touch the file.
    let content = test.read_file("translations/app_fr.ts")?;
    assert!(content.contains("type=\"vanished\""));
    assert!(content.contains("type=\"obsolete\""));
    Ok(())
}

#[test]
fn test_clean_apply_removes_retired_entries() -> Result<()> {
    let test = CliTest::with_catalog("app_fr.ts", SAMPLE_CATALOG)?;

    let (code, stdout, _) = run(test.clean_command().arg("--apply"));
    assert_eq!(code, 0);
    assert!(stdout.contains("Removed 2 entries"), "stdout: {}", stdout);

    let content = test.read_file("translations/app_fr.ts")?;
    assert!(!content.contains("vanished"));
    assert!(!content.contains("obsolete"));
    assert!(!content.contains("&amp;Open..."));
    assert!(!content.contains("Add triangle"));
    // Live entries survive.
    assert!(content.contains("Choisir un fichier"));
    assert!(content.contains("Zoom In"));
    Ok(())
}

#[test]
fn test_clean_apply_drops_emptied_contexts() -> Result<()> {
    let test = CliTest::with_catalog(
        "app_fr.ts",
        r#"<TS>
<context>
    <name>ConsoleWindow</name>
    <message>
        <source>&amp;Close</source>
        <translation type="vanished">&amp;Fermer</translation>
    </message>
</context>
<context>
    <name>FileEdit</name>
    <message>
        <source>Choose a file</source>
        <translation>Choisir un fichier</translation>
    </message>
</context>
</TS>
"#,
    )?;

    run(test.clean_command().arg("--apply"));

    let content = test.read_file("translations/app_fr.ts")?;
    assert!(!content.contains("ConsoleWindow"));
    assert!(content.contains("FileEdit"));
    Ok(())
}

#[test]
fn test_clean_statuses_filter() -> Result<()> {
    let test = CliTest::with_catalog("app_fr.ts", SAMPLE_CATALOG)?;

    let (code, stdout, _) = run(test
        .clean_command()
        .arg("--apply")
        .arg("--statuses")
        .arg("vanished"));
    assert_eq!(code, 0);
    assert!(stdout.contains("Removed 1 entry"), "stdout: {}", stdout);

    let content = test.read_file("translations/app_fr.ts")?;
    assert!(!content.contains("type=\"vanished\""));
    assert!(content.contains("type=\"obsolete\""));
    Ok(())
}

#[test]
fn test_clean_nothing_to_remove() -> Result<()> {
    let test = CliTest::with_catalog(
        "app_fr.ts",
        "<TS><context><name>C</name><message><source>Hi</source><translation>Salut</translation></message></context></TS>",
    )?;

    let (code, stdout, _) = run(&mut test.clean_command());
    assert_eq!(code, 0);
    assert!(
        stdout.contains("No retired entries to remove"),
        "stdout: {}",
        stdout
    );
    Ok(())
}

#[test]
fn test_clean_round_trip_preserves_live_semantics() -> Result<()> {
    let test = CliTest::with_catalog("app_fr.ts", SAMPLE_CATALOG)?;

    run(test.clean_command().arg("--apply"));

    // The rewritten catalog still resolves active lookups.
    let (code, stdout, _) = run(test
        .query_command()
        .arg("FileEdit")
        .arg("Choose a file"));
    assert_eq!(code, 0);
    assert!(stdout.starts_with("Choisir un fichier"), "stdout: {}", stdout);
    Ok(())
}
