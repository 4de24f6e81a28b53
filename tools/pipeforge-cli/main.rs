use clap::{Parser, Subcommand, ValueEnum};
use itertools::Itertools;
use pipeforge::node::{
    EditDraft, NodeBody, add_custom_parameter, change_region_parameter, region_form,
    request_delete, set_custom_parameter_value,
};
use pipeforge::prelude::*;
use std::fs;
use std::path::PathBuf;

/// Node types offered by the add-node form.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum NodeTypeCli {
    Region,
    Custom,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatCli {
    Json,
    Binary,
}

/// Headless editor for machine-learning pipeline workspaces
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a JSON workspace config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the persisted workspace
    #[arg(long)]
    storage_dir: Option<PathBuf>,

    /// On-disk encoding of the workspace record
    #[arg(long, value_enum)]
    format: Option<FormatCli>,

    /// Code generation endpoint
    #[arg(long)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start over with the seven predefined pipeline regions
    Init,
    /// Remove the persisted workspace entirely
    Reset,
    /// Show every node and edge
    List,
    /// Add a node at the end of the pipeline
    Add {
        #[arg(short = 't', long = "type", value_enum, default_value = "region")]
        node_type: NodeTypeCli,
        #[arg(short, long)]
        label: String,
        #[arg(short, long, default_value = "")]
        description: String,
        /// Parent region label, for custom nodes
        #[arg(short, long)]
        parent: Option<String>,
    },
    /// Change a node's label and/or description
    Edit {
        id: String,
        #[arg(short, long)]
        label: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete a node and its edges
    Delete { id: String },
    /// Connect two nodes
    Connect { source: String, target: String },
    /// Move a node on the canvas
    Move { id: String, x: f64, y: f64 },
    /// Set a parameter of a region node's step form
    Set { id: String, key: String, value: String },
    /// Add a parameter to a custom node
    AddParam {
        id: String,
        #[arg(short, long)]
        label: String,
        /// One of string, number, boolean, select
        #[arg(short = 't', long = "type", default_value = "string")]
        param_type: String,
        /// Comma-separated options, for select parameters
        #[arg(short, long, default_value = "")]
        options: String,
    },
    /// Set the value of a custom node's parameter by index
    SetParam { id: String, index: usize, value: String },
    /// Generate code from the configured parameters
    Generate {
        /// Write the code to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = load_config(&cli);
    match cli.command {
        Command::Init => {
            let mut graph = GraphController::open(config.open_store());
            graph.reset();
            println!("Initialized workspace with {} regions", graph.nodes().len());
        }
        Command::Reset => {
            config
                .open_store()
                .clear()
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to reset workspace: {}", e)));
            println!("Workspace removed");
        }
        Command::List => list(&GraphController::open_or_seed(config.open_store())),
        Command::Generate { output } => {
            let graph = GraphController::open_or_seed(config.open_store());
            let code = config.code_generator().generate(graph.parameters());
            match output {
                Some(path) => {
                    fs::write(&path, code).unwrap_or_else(|e| {
                        exit_with_error(&format!("Failed to write '{}': {}", path.display(), e))
                    });
                    println!("Wrote generated code to '{}'", path.display());
                }
                None => println!("{}", code),
            }
        }
        command => {
            let mut graph = GraphController::open_or_seed(config.open_store());
            edit(&mut graph, command);
        }
    }
}

fn load_config(cli: &Cli) -> WorkspaceConfig {
    let mut config = match &cli.config {
        Some(path) => WorkspaceConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e))),
        None => WorkspaceConfig::default(),
    };
    if let Some(dir) = &cli.storage_dir {
        config.storage_dir = dir.clone();
    }
    if let Some(format) = cli.format {
        config.storage_format = match format {
            FormatCli::Json => StorageFormat::Json,
            FormatCli::Binary => StorageFormat::Binary,
        };
    }
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = endpoint.clone();
    }
    config
}

/// Applies one mutating command. The attached store persists the result.
fn edit(graph: &mut GraphController, command: Command) {
    match command {
        Command::Add {
            node_type,
            label,
            description,
            parent,
        } => {
            let node_type = match node_type {
                NodeTypeCli::Region => NodeType::Region,
                NodeTypeCli::Custom => NodeType::Custom,
            };
            let mut draft = NewNodeDraft::new(node_type, label).description(description);
            if let Some(parent) = parent {
                draft = draft.parent_region(parent);
            }
            let id = graph.add_node(draft);
            println!("Added node '{}'", id);
        }
        Command::Edit {
            id,
            label,
            description,
        } => {
            let node = current_node(graph, &id);
            let mut draft = EditDraft::for_node(&node)
                .unwrap_or_else(|| exit_with_error(&format!("Node '{}' cannot be edited", id)));
            if let Some(label) = label {
                draft.label = label;
            }
            if let Some(description) = description {
                draft.description = description;
            }
            draft.confirm(graph);
            println!("Updated node '{}'", id);
        }
        Command::Delete { id } => {
            let node = current_node(graph, &id);
            request_delete(&node, graph).unwrap_or_else(|e| exit_with_error(&e.to_string()));
            println!("Deleted node '{}'", id);
        }
        Command::Connect { source, target } => match graph.connect(&source, &target) {
            Some(edge) => println!("Connected '{}' -> '{}' ({})", source, target, edge.id),
            None => exit_with_error("Both endpoints must be existing nodes"),
        },
        Command::Move { id, x, y } => {
            let position = Position::new(x, y);
            if !position.is_finite() {
                exit_with_error("Coordinates must be finite numbers");
            }
            if !graph.move_node(&id, position) {
                exit_with_error(&format!("Node '{}' not found", id));
            }
        }
        Command::Set { id, key, value } => {
            let node = current_node(graph, &id);
            let mut form = region_form(&node)
                .unwrap_or_else(|| exit_with_error(&format!("Node '{}' has no step form", id)));
            if !change_region_parameter(&id, &mut form, &key, &value, graph) {
                let known = form.schema().parameters.iter().map(|p| p.name).join(", ");
                exit_with_error(&format!(
                    "'{}' has no parameter '{}' (expected one of: {})",
                    form.schema().title,
                    key,
                    known
                ));
            }
        }
        Command::AddParam {
            id,
            label,
            param_type,
            options,
        } => {
            let node = current_node(graph, &id);
            let type_tag: ParameterTypeTag = param_type
                .parse()
                .unwrap_or_else(|e: WorkspaceError| exit_with_error(&e.to_string()));
            let draft = ParameterDraft::new(label, type_tag).with_options(options);
            add_custom_parameter(&node, draft, graph)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
        }
        Command::SetParam { id, index, value } => {
            let node = current_node(graph, &id);
            set_custom_parameter_value(&node, index, &value, graph)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
        }
        Command::Init | Command::Reset | Command::List | Command::Generate { .. } => {}
    }
}

fn current_node(graph: &GraphController, id: &str) -> Node {
    graph
        .node(id)
        .cloned()
        .unwrap_or_else(|| exit_with_error(&format!("Node '{}' not found", id)))
}

fn list(graph: &GraphController) {
    println!("--- Nodes ({}) ---", graph.nodes().len());
    for node in graph.nodes() {
        let card = render(node);
        println!(
            "[{}] {} ({}) at ({}, {})",
            card.id, card.title, node.node_type(), node.position.x, node.position.y
        );
        if let Some(subtitle) = &card.subtitle {
            println!("    {}", subtitle);
        }
        if !card.description.is_empty() {
            println!("    {}", card.description);
        }
        match &card.body {
            NodeBody::Form(fields) => {
                for field in fields {
                    if let Some(value) = &field.value {
                        println!("    {} = {}", field.label, value);
                    }
                }
            }
            NodeBody::CustomParameters(rows) => {
                for row in rows {
                    println!("    #{} {} = {}", row.index, row.label, row.value);
                }
            }
            NodeBody::Empty => {}
        }
    }

    println!("\n--- Edges ({}) ---", graph.edges().len());
    for edge in graph.edges() {
        println!("[{}] {} -> {}", edge.id, edge.source, edge.target);
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
