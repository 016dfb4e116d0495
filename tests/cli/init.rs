use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(test.command().arg("init"));
    assert_eq!(code, 0);
    assert!(stdout.contains("Created .lingorc.json"), "stdout: {}", stdout);

    let content = test.read_file(".lingorc.json")?;
    let parsed: Value = serde_json::from_str(&content)?;
    assert_eq!(parsed["translationsRoot"], "./translations");
    assert!(parsed["ignores"].as_array().unwrap().is_empty());
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".lingorc.json", "{}")?;

    let (code, _, stderr) = run(test.command().arg("init"));
    assert_eq!(code, 2);
    assert!(stderr.contains("already exists"), "stderr: {}", stderr);
    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(&mut test.command());
    assert_eq!(code, 0);
    assert!(stdout.contains("Usage:"), "stdout: {}", stdout);
    Ok(())
}
