mod api;
mod args;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::filter::LevelFilter;
use wires::{ApiError, ExecuteRequest, ExecuteResult, InputError, Wire, find_wire, find_wireflow, validate_inputs};

use crate::api::ApiClient;
use crate::args::{WireFields, collect_inputs, parse_key_value, read_wireflow};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("{kind} `{id}` not found")]
    NotFound { kind: &'static str, id: String },
    #[error("invalid key/value `{0}`; expected name=value")]
    InvalidKeyValue(String),
    #[error("cannot read {path}: {message}")]
    ReadFile { path: String, message: String },
    #[error("input name `{0}` may only use letters, digits and _")]
    InvalidInputName(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "geminiwire", about = "Manage and run wires and wireflows")]
struct Cli {
    #[arg(long, env = "GEMINIWIRE_API_BASE_URL", default_value = wires::DEFAULT_API_BASE_URL)]
    base_url: String,

    /// Log requests to stderr (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Wire operations.
    Wire(WireCommand),
    /// Wireflow operations.
    Wireflow(WireflowCommand),
}

#[derive(Args, Debug)]
struct WireCommand {
    #[command(subcommand)]
    command: WireSubcommand,
}

#[derive(Subcommand, Debug)]
enum WireSubcommand {
    List,
    Show {
        wire_id: String,
    },
    Create {
        wire_id: String,
        #[command(flatten)]
        fields: WireFieldArgs,
    },
    /// Change only the fields given; everything else is kept.
    Update {
        wire_id: String,
        #[command(flatten)]
        fields: WireFieldArgs,
    },
    Delete {
        wire_id: String,
    },
    Execute(ExecuteArgs),
}

#[derive(Args, Debug)]
struct WireFieldArgs {
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    prompt: Option<String>,
    /// Declared input as `name=placeholder`; repeat for more. Replaces all inputs on update.
    #[arg(long = "input", value_parser = parse_key_value)]
    inputs: Vec<(String, String)>,
    #[arg(long)]
    output_key: Option<String>,
}

impl From<WireFieldArgs> for WireFields {
    fn from(args: WireFieldArgs) -> Self {
        Self {
            description: args.description,
            prompt: args.prompt,
            inputs: (!args.inputs.is_empty()).then_some(args.inputs),
            output_key: args.output_key,
        }
    }
}

#[derive(Args, Debug)]
struct WireflowCommand {
    #[command(subcommand)]
    command: WireflowSubcommand,
}

#[derive(Subcommand, Debug)]
enum WireflowSubcommand {
    List,
    Show {
        wireflow_id: String,
    },
    /// Create from a JSON document.
    Create {
        #[arg(long)]
        file: PathBuf,
    },
    /// Replace the steps and description from a JSON document; the id is kept.
    Update {
        wireflow_id: String,
        #[arg(long)]
        file: PathBuf,
    },
    Delete {
        wireflow_id: String,
    },
    Execute(ExecuteArgs),
}

#[derive(Args, Debug)]
struct ExecuteArgs {
    id: String,
    /// Input value as `name=value`; repeat for more.
    #[arg(long = "input", value_parser = parse_key_value)]
    inputs: Vec<(String, String)>,
    /// Print the full JSON response instead of the output text.
    #[arg(long)]
    raw: bool,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let client = ApiClient::new(&cli.base_url)?;
    tracing::debug!(base_url = client.base_url(), "using backend");

    match cli.command {
        Command::Wire(wire) => run_wire(&client, wire.command).await,
        Command::Wireflow(flow) => run_wireflow(&client, flow.command).await,
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt().with_writer(std::io::stderr).with_max_level(level).with_target(false).init();
}

async fn run_wire(client: &ApiClient, command: WireSubcommand) -> Result<(), CliError> {
    match command {
        WireSubcommand::List => print_json(&client.list_wires().await?),
        WireSubcommand::Show { wire_id } => print_json(&fetch_wire(client, &wire_id).await?),
        WireSubcommand::Create { wire_id, fields } => {
            let wire = WireFields::from(fields).into_wire(&wire_id)?;
            client.create_wire(&wire).await?;
            print_json(&wire)
        }
        WireSubcommand::Update { wire_id, fields } => {
            let mut wire = fetch_wire(client, &wire_id).await?;
            WireFields::from(fields).apply_to(&mut wire)?;
            client.update_wire(&wire).await?;
            print_json(&wire)
        }
        WireSubcommand::Delete { wire_id } => {
            client.delete_wire(&wire_id).await?;
            print_json(&serde_json::json!({ "deleted": wire_id }))
        }
        WireSubcommand::Execute(exec) => {
            let wire = fetch_wire(client, &exec.id).await?;
            let inputs = validate_inputs(wire.inputs.keys().map(String::as_str), &collect_inputs(exec.inputs))?;
            let request = ExecuteRequest::Wire { wire_id: wire.wire_id, inputs };
            print_result(&client.execute(&request).await?, exec.raw);
            Ok(())
        }
    }
}

async fn run_wireflow(client: &ApiClient, command: WireflowSubcommand) -> Result<(), CliError> {
    match command {
        WireflowSubcommand::List => print_json(&client.list_wireflows().await?),
        WireflowSubcommand::Show { wireflow_id } => {
            let flows = client.list_wireflows().await?;
            let flow = find_wireflow(&flows, &wireflow_id)
                .ok_or(CliError::NotFound { kind: "wireflow", id: wireflow_id.clone() })?;
            print_json(flow)
        }
        WireflowSubcommand::Create { file } => {
            let flow = read_wireflow(&file, None)?;
            client.create_wireflow(&flow).await?;
            print_json(&flow)
        }
        WireflowSubcommand::Update { wireflow_id, file } => {
            let flow = read_wireflow(&file, Some(&wireflow_id))?;
            client.update_wireflow(&flow).await?;
            print_json(&flow)
        }
        WireflowSubcommand::Delete { wireflow_id } => {
            client.delete_wireflow(&wireflow_id).await?;
            print_json(&serde_json::json!({ "deleted": wireflow_id }))
        }
        WireflowSubcommand::Execute(exec) => {
            let flows = client.list_wireflows().await?;
            let flow =
                find_wireflow(&flows, &exec.id).ok_or(CliError::NotFound { kind: "wireflow", id: exec.id.clone() })?;
            let required = flow.required_inputs();
            let inputs = validate_inputs(required.iter().map(String::as_str), &collect_inputs(exec.inputs))?;
            let request = ExecuteRequest::Wireflow { wireflow_id: flow.wireflow_id.clone(), inputs };
            print_result(&client.execute(&request).await?, exec.raw);
            Ok(())
        }
    }
}

async fn fetch_wire(client: &ApiClient, wire_id: &str) -> Result<Wire, CliError> {
    let wires = client.list_wires().await?;
    find_wire(&wires, wire_id)
        .cloned()
        .ok_or_else(|| CliError::NotFound { kind: "wire", id: wire_id.to_owned() })
}

fn print_result(result: &ExecuteResult, raw: bool) {
    if raw {
        println!("{}", result.raw_json());
    } else if result.is_error() {
        eprintln!("error: {}", result.display_text());
    } else {
        println!("{}", result.display_text());
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
