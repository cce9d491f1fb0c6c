use clap::Parser;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use workshop_graph::prelude::*;

/// Browse a workshop block template catalog
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the template catalog JSON file
    catalog_path: String,

    /// Only list templates whose name contains this text
    #[arg(short, long)]
    search: Option<String>,

    /// Show the ports and parameters of the named template
    #[arg(short, long)]
    inspect: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let load_start = Instant::now();
    let catalog = Catalog::from_file(&cli.catalog_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load catalog: {}", e)));
    let load_duration = load_start.elapsed();
    let types = TypeTable::default();

    match cli.inspect {
        Some(name) => inspect(&catalog, &types, &name),
        None => list(&catalog.filter(cli.search.as_deref().unwrap_or("")), &types),
    }

    println!("\nLoaded {} templates in {:?}", catalog.len(), load_duration);
}

fn list(catalog: &Catalog, types: &TypeTable) {
    println!("--- Actions ({}) ---", catalog.actions.len());
    for template in &catalog.actions {
        println!("  {}", template.signature(types));
    }
    println!("\n--- Values ({}) ---", catalog.values.len());
    for template in &catalog.values {
        println!("  {}", template.signature(types));
    }
}

fn inspect(catalog: &Catalog, types: &TypeTable, name: &str) {
    let (kind, spec) = match catalog.action_spec(name, types) {
        Ok(spec) => (BlockKind::Action, spec),
        Err(_) => match catalog.value_spec(name, types) {
            Ok(spec) => (BlockKind::Value, spec),
            Err(e) => exit_with_error(&e.to_string()),
        },
    };

    println!("{} block '{}'", kind, spec.name);
    print_spec(&spec);

    // A value block without wired inputs can be previewed on its own.
    let standalone = spec
        .argument_order
        .iter()
        .all(|slot| matches!(slot, ArgumentSlot::Parameter(_)));
    if kind == BlockKind::Value && standalone {
        let mut graph = Graph::new();
        let block = graph.spawn(spec);
        match CodeGenerator::new(&graph).expression(block) {
            Ok(text) => println!("\nPreview: {}", text),
            Err(e) => println!("\nPreview unavailable: {}", e),
        }
    }
}

fn print_spec(spec: &BlockSpec) {
    println!("\nInputs:");
    for port in &spec.inputs {
        println!("  {} ({}, {})", port.name, port.connection_type, capacity(port.max_connections));
    }
    println!("Outputs:");
    for port in &spec.outputs {
        println!("  {} ({}, {})", port.name, port.connection_type, capacity(port.max_connections));
    }
    println!("Parameters:");
    for parameter in &spec.parameters {
        if parameter.allowed_values.is_empty() {
            println!("  {} [{}] = {}", parameter.name, parameter.kind, parameter.default);
        } else {
            println!(
                "  {} [{}] = {} (one of: {})",
                parameter.name,
                parameter.kind,
                parameter.default,
                parameter.allowed_values.join(", ")
            );
        }
    }
    let order: Vec<&str> = spec
        .argument_order
        .iter()
        .map(|slot| match slot {
            ArgumentSlot::Input(name) | ArgumentSlot::Parameter(name) => name.as_str(),
        })
        .collect();
    println!("Argument order: {}", order.join(", "));
}

fn capacity(max_connections: Option<usize>) -> String {
    max_connections.map_or("unbounded".to_string(), |max| format!("max {}", max))
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
