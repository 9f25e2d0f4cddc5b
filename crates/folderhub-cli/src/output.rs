//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use folderhub_entity::folder::FolderNode;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                println!("{}", Table::new(items));
            }
        }
        OutputFormat::Json => print_json(&items),
    }
}

/// Print a single item as a one-row table or JSON
pub fn print_item<T: Serialize + Tabled>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", Table::new([item])),
        OutputFormat::Json => print_json(item),
    }
}

/// Print folder trees as an indented outline or JSON
pub fn print_tree(roots: &[FolderNode], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if roots.is_empty() {
                println!("No folders.");
            }
            for root in roots {
                print_node(root, 0);
            }
        }
        OutputFormat::Json => print_json(&roots),
    }
}

fn print_node(node: &FolderNode, indent: usize) {
    let projects = match node.project_count {
        0 => String::new(),
        1 => " (1 project)".to_string(),
        n => format!(" ({n} projects)"),
    };
    println!("{}{}{}  [{}]", "  ".repeat(indent), node.name, projects, node.id);
    for child in &node.children {
        print_node(child, indent + 1);
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => print_error(&format!("Failed to serialize output: {e}")),
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}
