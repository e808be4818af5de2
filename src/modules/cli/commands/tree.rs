//! Tree command implementation

use clap::Args;
use fishgen_core::FishgenError;
use fishgen_parser::{parse_file_with, TreeValidator};
use fishgen_types::{CommandId, CommandTree};
use serde_json::{json, Value};
use tracing::info;

/// Tree command arguments
#[derive(Args, Debug)]
pub struct TreeCommand {
    /// Print the tree as JSON
    #[arg(long)]
    pub json: bool,

    /// Accept command names that are not lower-kebab-case or lower_snake_case
    #[arg(long)]
    pub lenient: bool,
}

impl TreeCommand {
    /// Execute the tree command
    pub fn execute(&self, file: &str) -> Result<(), FishgenError> {
        info!("Loading command tree from: {}", file);

        let validator = if self.lenient {
            TreeValidator::lenient()
        } else {
            TreeValidator::new()
        };
        let tree = parse_file_with(file, &validator)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&to_json(&tree, tree.root()))?);
        } else {
            print!("{}", render_outline(&tree));
        }
        Ok(())
    }
}

/// Indented outline: one line per command, its own flags below it
pub fn render_outline(tree: &CommandTree) -> String {
    let mut out = String::new();
    let mut stack = vec![(tree.root(), 0usize)];

    while let Some((id, depth)) = stack.pop() {
        let command = tree.get(id);
        let indent = "  ".repeat(depth);

        out.push_str(&indent);
        out.push_str(&command.name);
        if !command.short.is_empty() {
            out.push_str(" - ");
            out.push_str(&command.short);
        }
        for marker in markers(tree, id) {
            out.push_str(" [");
            out.push_str(marker);
            out.push(']');
        }
        out.push('\n');

        for flag in tree.local_flags(id) {
            out.push_str(&indent);
            out.push_str("    --");
            out.push_str(&flag.name);
            if let Some(c) = flag.shorthand {
                out.push_str(&format!(", -{}", c));
            }
            if flag.takes_argument() {
                out.push_str(&format!(" <{}>", flag.value_kind));
            }
            if flag.persistent {
                out.push_str(" (persistent)");
            }
            if !flag.is_completable() {
                out.push_str(" (not completed)");
            }
            out.push('\n');
        }

        stack.extend(tree.children(id).iter().rev().map(|child| (*child, depth + 1)));
    }

    out
}

fn markers(tree: &CommandTree, id: CommandId) -> Vec<&'static str> {
    let command = tree.get(id);
    let mut markers = Vec::new();
    if command.is_help {
        markers.push("help");
    }
    if command.hidden {
        markers.push("hidden");
    }
    if command.deprecated.is_some() {
        markers.push("deprecated");
    }
    if !command.runnable {
        markers.push("group");
    }
    markers
}

/// Nested JSON view of the subtree at `id`
pub fn to_json(tree: &CommandTree, id: CommandId) -> Value {
    let command = tree.get(id);
    let flags: Vec<Value> = tree
        .local_flags(id)
        .into_iter()
        .map(|flag| serde_json::to_value(flag).unwrap_or(Value::Null))
        .collect();
    let children: Vec<Value> = tree
        .children(id)
        .iter()
        .map(|child| to_json(tree, *child))
        .collect();

    json!({
        "name": command.name,
        "short": command.short,
        "available": id == tree.root() || tree.is_available(id),
        "flags": flags,
        "commands": children,
    })
}
