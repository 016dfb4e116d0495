use lingo::mcp::{
    LingoMcpServer,
    types::{GetCatalogsParams, GetConfigParams},
};
use rmcp::handler::server::wrapper::Parameters;

use crate::{McpTestFixture, extract_tool_result_json, fixture_with_issues};

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = LingoMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json = extract_tool_result_json(&result);

    assert_eq!(json["fromFile"], false);
    assert_eq!(json["config"]["translationsRoot"], "./translations");
}

#[tokio::test]
async fn test_get_config_from_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(r#"{ "ignoreContexts": ["QtBoolEdit"] }"#)
        .unwrap();
    let server = LingoMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json = extract_tool_result_json(&result);

    assert_eq!(json["fromFile"], true);
    assert_eq!(json["config"]["ignoreContexts"][0], "QtBoolEdit");
}

#[tokio::test]
async fn test_get_catalogs_lists_files() {
    let fixture = fixture_with_issues().unwrap();
    let server = LingoMcpServer::new();

    let params = Parameters(GetCatalogsParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_catalogs(params).await.unwrap();
    let json = extract_tool_result_json(&result);

    assert_eq!(json["translationsRoot"], "./translations");
    let catalogs = json["catalogs"].as_array().unwrap();
    assert_eq!(catalogs.len(), 1);
    assert_eq!(catalogs[0]["filePath"], "translations/app_fr.ts");
    assert_eq!(catalogs[0]["language"], "fr");
    assert_eq!(catalogs[0]["contextCount"], 2);
    assert_eq!(catalogs[0]["messageCount"], 3);
}

#[tokio::test]
async fn test_get_catalogs_empty_project() {
    let fixture = McpTestFixture::new().unwrap();
    let server = LingoMcpServer::new();

    let params = Parameters(GetCatalogsParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_catalogs(params).await.unwrap();
    let json = extract_tool_result_json(&result);

    assert!(json["catalogs"].as_array().unwrap().is_empty());
}
