use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;

mod tools;

/// Test fixture for MCP integration tests
///
/// Manages a temporary project structure with a translations/ directory
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;

        // Create translations directory
        let translations_dir = project_root.join("translations");
        fs::create_dir_all(&translations_dir)?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a test project with one catalog file
    pub fn with_catalog(name: &str, content: &str) -> Result<Self> {
        let fixture = Self::new()?;
        fixture.write_catalog(name, content)?;
        Ok(fixture)
    }

    /// Write a catalog file to translations/<name>
    pub fn write_catalog(&self, name: &str, content: &str) -> Result<()> {
        let path = self.project_root.join("translations").join(name);
        fs::write(&path, content)
            .with_context(|| format!("Failed to write catalog file: {}", path.display()))?;
        Ok(())
    }

    /// Write a .lingorc.json config file
    pub fn write_config(&self, content: &str) -> Result<()> {
        let path = self.project_root.join(".lingorc.json");
        fs::write(&path, content)?;
        Ok(())
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }
}

/// A catalog with one issue per rule family.
pub fn fixture_with_issues() -> Result<McpTestFixture> {
    McpTestFixture::with_catalog(
        "app_fr.ts",
        r#"<TS version="2.1" language="fr">
<context>
    <name>FileEdit</name>
    <message>
        <source>Choose a file</source>
        <translation>Choisir un fichier</translation>
    </message>
</context>
<context>
    <name>MainWindow</name>
    <message>
        <source>Zoom In</source>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <source>&amp;Open...</source>
        <translation type="vanished">&amp;Ouvrir...</translation>
    </message>
</context>
</TS>
"#,
    )
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert pagination fields in a scan result
pub fn assert_pagination(
    result: &Value,
    expected_offset: usize,
    expected_limit: usize,
    expected_has_more: bool,
) {
    let pagination = &result["pagination"];
    assert_eq!(
        pagination["offset"].as_u64().unwrap(),
        expected_offset as u64,
        "Pagination offset mismatch"
    );
    assert_eq!(
        pagination["limit"].as_u64().unwrap(),
        expected_limit as u64,
        "Pagination limit mismatch"
    );
    assert_eq!(
        pagination["hasMore"].as_bool().unwrap(),
        expected_has_more,
        "Pagination hasMore mismatch"
    );
}

/// Extract JSON value from a successful CallToolResult
///
/// Panics if the result indicates an error or cannot be parsed
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    // Check for errors using is_error field
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    // Extract text from the content
    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
