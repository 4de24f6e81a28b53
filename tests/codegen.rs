//! Tests for code generation: remote replies, fallback and the preview panel.
mod common;

use common::*;
use pipeforge::codegen::{GenerateResponse, fallback_script};
use pipeforge::prelude::*;
use std::time::Duration;

#[test]
fn test_fallback_embeds_parameters_when_service_is_down() {
    let generator = CodeGenerator::new(FailingTransport);
    let code = generator.generate(&simple_parameter_map());

    assert!(code.contains("import pandas as pd"));
    assert!(code.contains("def main():"));
    assert!(code.contains("\"region-1\""));
    assert!(code.contains("\"a\": 1"));
    assert!(!code.contains("{{PARAMETERS}}"));
}

#[test]
fn test_remote_code_is_returned_verbatim() {
    let transport = StubTransport::returning(Some("print('hello')"));
    let generator = CodeGenerator::new(transport.clone());

    let code = generator.generate(&simple_parameter_map());
    assert_eq!(code, "print('hello')");

    let requests = transport.recorded();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].parameters,
        serde_json::json!({ "region-1": { "a": 1 } })
    );
}

#[test]
fn test_reply_without_code_uses_fallback() {
    for reply in [None, Some("")] {
        let generator = CodeGenerator::new(StubTransport::returning(reply));
        let code = generator.generate(&simple_parameter_map());
        assert!(code.contains("\"a\": 1"), "reply {:?} should fall back", reply);
    }
}

#[test]
fn test_empty_parameter_map_still_generates() {
    let generator = CodeGenerator::new(FailingTransport);
    let code = generator.generate(&ParameterMap::new());
    assert!(code.contains("params = {}"));
}

#[test]
fn test_fallback_script_is_deterministic() {
    let params = simple_parameter_map().to_json();
    assert_eq!(fallback_script(&params), fallback_script(&params));
}

#[test]
fn test_response_ignores_extra_fields() {
    let reply: GenerateResponse = serde_json::from_value(serde_json::json!({
        "code": "x = 1",
        "message": "Code generated successfully",
        "parameters": { "region-1": {} }
    }))
    .unwrap();
    assert_eq!(reply.code.as_deref(), Some("x = 1"));

    let empty: GenerateResponse =
        serde_json::from_value(serde_json::json!({ "message": "no code" })).unwrap();
    assert_eq!(empty.code, None);
}

#[test]
fn test_unreachable_service_falls_back() {
    // Port 9 (discard) is expected to refuse connections on the test host.
    let transport = HttpTransport::new("http://127.0.0.1:9/api/generate-code", Duration::from_secs(2));
    assert_eq!(transport.endpoint(), "http://127.0.0.1:9/api/generate-code");

    let generator = CodeGenerator::new(transport);
    let code = generator.generate(&simple_parameter_map());
    assert!(code.contains("\"a\": 1"));
}

#[test]
fn test_spawned_generation_returns_result() {
    let generator = CodeGenerator::new(StubTransport::returning(Some("done")));
    let handle = generator.spawn(simple_parameter_map());
    assert_eq!(handle.join().unwrap(), "done");
}

#[test]
fn test_generation_uses_controller_parameters() {
    let mut graph = GraphController::with_default_regions();
    let mut form = StepParameterForm::new(4);
    let update = form.on_change("n_estimators", "100").unwrap();
    graph.update_parameters("region-4", update.snapshot);

    let transport = StubTransport::returning(None);
    let code = CodeGenerator::new(transport.clone()).generate(graph.parameters());

    assert!(code.contains("\"n_estimators\": 100"));
    assert_eq!(
        transport.recorded()[0].parameters,
        serde_json::json!({ "region-4": { "n_estimators": 100 } })
    );
}

#[test]
fn test_code_preview_visibility() {
    let mut preview = CodePreview::new();
    assert!(!preview.is_visible());
    assert_eq!(preview.text(), "");

    preview.show("first".to_string());
    assert!(preview.is_visible());
    preview.show("second".to_string());
    assert_eq!(preview.text(), "second");

    preview.close();
    assert!(!preview.is_visible());
    assert_eq!(preview.text(), "second");
}

#[test]
fn test_codegen_error_display() {
    assert_eq!(
        CodegenError::Status(500).to_string(),
        "Code generation service answered with status 500"
    );
}
