use lingo::mcp::{LingoMcpServer, types::QueryTranslationParams};
use rmcp::handler::server::wrapper::Parameters;

use crate::{extract_tool_result_json, fixture_with_issues};

#[tokio::test]
async fn test_query_translation_found() {
    let fixture = fixture_with_issues().unwrap();
    let server = LingoMcpServer::new();

    let params = Parameters(QueryTranslationParams {
        project_root_path: fixture.root(),
        context: "FileEdit".to_string(),
        source: "Choose a file".to_string(),
    });

    let result = server.query_translation(params).await.unwrap();
    let json = extract_tool_result_json(&result);

    assert_eq!(json["found"], true);
    assert_eq!(json["translated"], true);
    assert_eq!(json["translation"], "Choisir un fichier");
    assert_eq!(json["status"], "finished");
}

#[tokio::test]
async fn test_query_translation_unfinished_falls_back() {
    let fixture = fixture_with_issues().unwrap();
    let server = LingoMcpServer::new();

    let params = Parameters(QueryTranslationParams {
        project_root_path: fixture.root(),
        context: "MainWindow".to_string(),
        source: "Zoom In".to_string(),
    });

    let result = server.query_translation(params).await.unwrap();
    let json = extract_tool_result_json(&result);

    assert_eq!(json["found"], true);
    assert_eq!(json["translated"], false);
    assert_eq!(json["status"], "unfinished");
    assert_eq!(json["fallback"], "Zoom In");
    assert!(json.get("translation").is_none());
}

#[tokio::test]
async fn test_query_translation_vanished_is_not_served() {
    let fixture = fixture_with_issues().unwrap();
    let server = LingoMcpServer::new();

    let params = Parameters(QueryTranslationParams {
        project_root_path: fixture.root(),
        context: "MainWindow".to_string(),
        source: "&Open...".to_string(),
    });

    let result = server.query_translation(params).await.unwrap();
    let json = extract_tool_result_json(&result);

    assert_eq!(json["found"], true);
    assert_eq!(json["translated"], false);
    assert_eq!(json["status"], "vanished");
    assert_eq!(json["fallback"], "&Open...");
}

#[tokio::test]
async fn test_query_translation_not_found() {
    let fixture = fixture_with_issues().unwrap();
    let server = LingoMcpServer::new();

    let params = Parameters(QueryTranslationParams {
        project_root_path: fixture.root(),
        context: "MainWindow".to_string(),
        source: "Nope".to_string(),
    });

    let result = server.query_translation(params).await.unwrap();
    let json = extract_tool_result_json(&result);

    assert_eq!(json["found"], false);
    assert_eq!(json["translated"], false);
    assert_eq!(json["fallback"], "Nope");
}
