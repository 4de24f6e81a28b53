//! Common test utilities for building workspaces and stub transports.
use pipeforge::codegen::{GenerateRequest, GenerateResponse};
use pipeforge::prelude::*;
use std::sync::{Arc, Mutex};

/// Step numbers of all nodes, in list order.
#[allow(dead_code)]
pub fn step_numbers(graph: &GraphController) -> Vec<u32> {
    graph.nodes().iter().map(|n| n.step()).collect()
}

/// Asserts that steps are exactly `1..=N` in list order.
#[allow(dead_code)]
pub fn assert_steps_contiguous(graph: &GraphController) {
    let expected: Vec<u32> = (1..=graph.nodes().len() as u32).collect();
    assert_eq!(step_numbers(graph), expected);
}

/// Asserts that no edge references a node that is not in the graph.
#[allow(dead_code)]
pub fn assert_no_dangling_edges(graph: &GraphController) {
    for edge in graph.edges() {
        assert!(graph.node(&edge.source).is_some(), "dangling source in {:?}", edge);
        assert!(graph.node(&edge.target).is_some(), "dangling target in {:?}", edge);
    }
}

/// Creates a controller holding `count` region nodes labelled `Region 1..=count`.
#[allow(dead_code)]
pub fn graph_with_regions(count: usize) -> GraphController {
    let mut graph = GraphController::new();
    for i in 1..=count {
        graph.add_node(
            NewNodeDraft::new(NodeType::Region, format!("Region {}", i))
                .description(format!("Description {}", i)),
        );
    }
    graph
}

/// A parameter map with a single node holding `{ "a": 1 }`.
#[allow(dead_code)]
pub fn simple_parameter_map() -> ParameterMap {
    let mut snapshot = ParameterSnapshot::new();
    snapshot.insert("a", ParamValue::Number(1.0));
    let mut map = ParameterMap::new();
    map.replace("region-1", snapshot);
    map
}

/// Transport that fails every request, as if the service were down.
#[allow(dead_code)]
#[derive(Debug, Clone, Default)]
pub struct FailingTransport;

impl CodegenTransport for FailingTransport {
    fn request(&self, _body: &GenerateRequest) -> Result<GenerateResponse, CodegenError> {
        Err(CodegenError::Transport {
            endpoint: "stub".to_string(),
            message: "connection refused".to_string(),
        })
    }
}

/// Transport answering with a fixed response and recording every request.
#[allow(dead_code)]
#[derive(Debug, Clone, Default)]
pub struct StubTransport {
    pub response: GenerateResponse,
    pub requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

#[allow(dead_code)]
impl StubTransport {
    pub fn returning(code: Option<&str>) -> Self {
        Self {
            response: GenerateResponse {
                code: code.map(str::to_string),
            },
            requests: Arc::default(),
        }
    }

    pub fn recorded(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl CodegenTransport for StubTransport {
    fn request(&self, body: &GenerateRequest) -> Result<GenerateResponse, CodegenError> {
        self.requests.lock().unwrap().push(body.clone());
        Ok(self.response.clone())
    }
}
