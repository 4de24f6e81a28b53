//! Tests for persisting and rehydrating the workspace.
mod common;

use common::*;
use pipeforge::prelude::*;
use pipeforge::store::StorageBackend;

fn store_with(backend: &MemoryBackend, version: u32, format: StorageFormat) -> WorkspaceStore {
    WorkspaceStore::new(backend.clone(), "workspace-storage", version, format)
}

#[test]
fn test_mutations_are_mirrored_and_rehydrated() {
    let backend = MemoryBackend::new();
    {
        let mut graph = GraphController::open(WorkspaceStore::with_defaults(backend.clone()));
        graph.add_node(NewNodeDraft::new(NodeType::Region, "Ingest"));
        graph.add_node(NewNodeDraft::new(NodeType::Region, "Train"));
        graph.connect("region-1", "region-2");
        graph.move_node("region-2", Position::new(10.0, 20.0));
    }

    let graph = GraphController::open(WorkspaceStore::with_defaults(backend));
    assert_eq!(graph.nodes().len(), 2);
    assert_eq!(graph.edges().len(), 1);
    assert_eq!(graph.node("region-2").unwrap().position, Position::new(10.0, 20.0));
    assert_steps_contiguous(&graph);
}

#[test]
fn test_version_mismatch_discards_record() {
    let backend = MemoryBackend::new();
    let mut graph = GraphController::open(store_with(&backend, 1, StorageFormat::Json));
    graph.add_node(NewNodeDraft::new(NodeType::Region, "Ingest"));

    let newer = store_with(&backend, 2, StorageFormat::Json);
    assert!(newer.load().unwrap().is_none());
    assert!(GraphController::open(newer).nodes().is_empty());

    let same = store_with(&backend, 1, StorageFormat::Json);
    assert_eq!(same.load().unwrap().unwrap().version, 1);
}

#[test]
fn test_binary_format_round_trip() {
    let backend = MemoryBackend::new();
    let mut graph = GraphController::open_or_seed(store_with(&backend, 1, StorageFormat::Binary));
    let mut form = StepParameterForm::new(1);
    form.on_change("source_type", "csv");
    let update = form.on_change("sample_size", "500").unwrap();
    graph.update_parameters("region-1", update.snapshot);
    let expected = graph.state().clone();

    assert!(backend.read("workspace-storage.bin").unwrap().is_some());
    assert!(backend.read("workspace-storage.json").unwrap().is_none());

    let reopened = GraphController::open(store_with(&backend, 1, StorageFormat::Binary));
    assert_eq!(reopened.state(), &expected);

    let mismatched = store_with(&backend, 3, StorageFormat::Binary);
    assert!(mismatched.hydrate().is_empty());
}

#[test]
fn test_nan_parameters_survive_persistence() {
    let backend = MemoryBackend::new();
    let mut graph = GraphController::open_or_seed(WorkspaceStore::with_defaults(backend.clone()));
    let mut form = StepParameterForm::new(4);
    let update = form.on_change("max_depth", "deep").unwrap();
    graph.update_parameters("region-4", update.snapshot);

    let reopened = GraphController::open(WorkspaceStore::with_defaults(backend));
    let value = reopened
        .parameters()
        .get("region-4")
        .and_then(|s| s.get("max_depth"))
        .and_then(ParamValue::as_number)
        .unwrap();
    assert!(value.is_nan());
}

#[test]
fn test_corrupt_record_starts_empty() {
    let backend = MemoryBackend::new();
    backend
        .write("workspace-storage.json", b"{ not json")
        .unwrap();

    let store = WorkspaceStore::with_defaults(backend.clone());
    assert!(matches!(store.load(), Err(StoreError::Decode(_))));
    assert!(store.hydrate().is_empty());

    let graph = GraphController::open_or_seed(WorkspaceStore::with_defaults(backend.clone()));
    assert_eq!(graph.nodes().len(), 7);
    // Seeding does not overwrite the unreadable record.
    assert_eq!(
        backend.read("workspace-storage.json").unwrap().as_deref(),
        Some(&b"{ not json"[..])
    );
}

#[test]
fn test_non_finite_positions_do_not_lose_workspace() {
    let backend = MemoryBackend::new();
    let mut graph = GraphController::open_or_seed(WorkspaceStore::with_defaults(backend.clone()));
    graph.add_node(NewNodeDraft::new(NodeType::Custom, "Extra").parent_region("Deployment"));

    assert!(!graph.move_node("region-1", Position::new(f64::NAN, 0.0)));
    graph.apply_node_changes(&[NodeChange::Position {
        id: "region-2".to_string(),
        position: Some(Position::new(0.0, f64::INFINITY)),
        dragging: false,
    }]);
    assert!(graph.node("region-1").unwrap().position.is_finite());
    assert!(graph.node("region-2").unwrap().position.is_finite());

    let reopened = GraphController::open_or_seed(WorkspaceStore::with_defaults(backend));
    assert_eq!(reopened.nodes().len(), 8);
    assert_eq!(reopened.state(), graph.state());
}

#[test]
fn test_non_finite_positions_from_node_lists_survive_reload() {
    let backend = MemoryBackend::new();
    let mut graph = GraphController::open(WorkspaceStore::with_defaults(backend.clone()));
    graph.add_node(NewNodeDraft::new(NodeType::Region, "Ingest"));
    let mut nodes = graph.nodes().to_vec();
    nodes[0].position = Position::new(f64::NAN, f64::NEG_INFINITY);
    graph.set_nodes(nodes);

    let store = WorkspaceStore::with_defaults(backend);
    let record = store.load().unwrap().unwrap();
    let position = record.state.nodes[0].position;
    assert!(position.x.is_nan());
    assert_eq!(position.y, f64::NEG_INFINITY);
}

#[test]
fn test_infinite_parameters_survive_persistence() {
    for format in [StorageFormat::Json, StorageFormat::Binary] {
        let backend = MemoryBackend::new();
        let mut graph = GraphController::open_or_seed(store_with(&backend, 1, format));
        let mut form = StepParameterForm::new(4);
        form.on_change("max_depth", "Infinity");
        let update = form.on_change("learning_rate", "-Infinity").unwrap();
        graph.update_parameters("region-4", update.snapshot);

        let reopened = GraphController::open(store_with(&backend, 1, format));
        let stored = reopened.parameters().get("region-4").unwrap();
        assert_eq!(stored.get("max_depth"), Some(&ParamValue::Number(f64::INFINITY)));
        assert_eq!(
            stored.get("learning_rate"),
            Some(&ParamValue::Number(f64::NEG_INFINITY)),
            "format {:?}",
            format
        );
    }
}

#[test]
fn test_json_encodes_non_finite_numbers_readably() {
    let backend = MemoryBackend::new();
    let mut graph = GraphController::open_or_seed(WorkspaceStore::with_defaults(backend.clone()));
    let mut form = StepParameterForm::new(4);
    form.on_change("max_depth", "Infinity");
    let update = form.on_change("n_estimators", "many").unwrap();
    graph.update_parameters("region-4", update.snapshot);

    let bytes = backend.read("workspace-storage.json").unwrap().unwrap();
    let record: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let stored = &record["state"]["parameters"]["region-4"];
    assert_eq!(stored["max_depth"], serde_json::json!({ "Number": "Infinity" }));
    assert_eq!(stored["n_estimators"], serde_json::json!({ "Number": null }));
}

#[test]
fn test_open_or_seed_keeps_existing_workspace() {
    let backend = MemoryBackend::new();
    let mut graph = GraphController::open_or_seed(WorkspaceStore::with_defaults(backend.clone()));
    assert_eq!(graph.nodes().len(), 7);
    graph.delete_node("region-7");

    let reopened = GraphController::open_or_seed(WorkspaceStore::with_defaults(backend));
    assert_eq!(reopened.nodes().len(), 6);
}

#[test]
fn test_reset_and_clear() {
    let backend = MemoryBackend::new();
    let store = WorkspaceStore::with_defaults(backend.clone());
    let mut graph = GraphController::open(store);
    graph.add_node(NewNodeDraft::new(NodeType::Custom, "Mine"));
    graph.reset();
    assert_eq!(graph.nodes().len(), 7);
    assert!(graph.node("custom-1").is_none());

    let store = WorkspaceStore::with_defaults(backend.clone());
    assert_eq!(store.hydrate().nodes.len(), 7);
    store.clear().unwrap();
    assert!(store.load().unwrap().is_none());
    // Clearing twice is fine.
    store.clear().unwrap();
}

#[test]
fn test_file_backend_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let backend = FileBackend::new(dir.path().join("workspace"));
    assert!(backend.read("missing.json").unwrap().is_none());

    {
        let mut graph = GraphController::open_or_seed(WorkspaceStore::with_defaults(backend.clone()));
        graph.connect("region-1", "region-2");
    }
    assert!(dir.path().join("workspace/workspace-storage.json").exists());

    let graph = GraphController::open(WorkspaceStore::with_defaults(backend.clone()));
    assert_eq!(graph.nodes().len(), 7);
    assert_eq!(graph.edges()[0].id, "edge-1");

    backend.remove("workspace-storage.json").unwrap();
    backend.remove("workspace-storage.json").unwrap();
}

#[test]
fn test_edge_ids_continue_after_rehydration() {
    let backend = MemoryBackend::new();
    {
        let mut graph = GraphController::open_or_seed(WorkspaceStore::with_defaults(backend.clone()));
        graph.connect("region-1", "region-2");
    }
    let mut graph = GraphController::open(WorkspaceStore::with_defaults(backend));
    let id = graph.connect("region-2", "region-3").unwrap().id.clone();
    assert_eq!(id, "edge-2");
}

#[test]
fn test_json_record_shape() {
    let backend = MemoryBackend::new();
    let mut graph = GraphController::open(WorkspaceStore::with_defaults(backend.clone()));
    graph.add_node(NewNodeDraft::new(NodeType::Region, "Ingest"));

    let bytes = backend.read("workspace-storage.json").unwrap().unwrap();
    let record: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(record["version"], 1);
    assert_eq!(record["state"]["nodes"][0]["id"], "region-1");
    assert_eq!(record["state"]["nodes"][0]["data"]["regionType"], "Ingest");
}
