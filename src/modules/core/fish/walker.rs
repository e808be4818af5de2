//! Depth-first walk over the command tree

use fishgen_types::{CommandId, CommandTree};
use tracing::trace;

use super::buffer::CompletionBuffer;
use super::condition::Condition;
use super::flags::write_flags;
use super::{quote, MAX_DEPTH};
use crate::{FishgenError, Result};

/// Emit subcommand and flag lines for `root` and everything below it.
///
/// Each command is handled before its children, children in declaration
/// order. An explicit stack keeps very deep trees off the call stack.
pub fn walk(tree: &CommandTree, root: CommandId, buffer: &mut CompletionBuffer) -> Result<()> {
    let program = tree.name(root);
    let available = tree.availability();
    let mut stack = vec![(root, 0usize)];

    while let Some((node, depth)) = stack.pop() {
        trace!(command = tree.name(node), depth, "visiting");
        let children: Vec<CommandId> = tree
            .children(node)
            .iter()
            .copied()
            .filter(|child| available[child.index()])
            .collect();

        if !children.is_empty() {
            let condition = Condition::for_subcommands(tree, root, node)?;
            for &child in &children {
                buffer.push_line(&subcommand_line(program, &condition, tree, child));
            }
        }

        write_flags(tree, root, node, buffer)?;

        if !children.is_empty() && depth + 1 > MAX_DEPTH {
            return Err(FishgenError::Generation(format!(
                "command tree below '{}' is deeper than {} levels",
                program, MAX_DEPTH
            )));
        }
        stack.extend(children.into_iter().rev().map(|child| (child, depth + 1)));
    }

    Ok(())
}

/// `complete -c <program> -f -n '<cond>' -a <child> -d '<short>'`
pub fn subcommand_line(
    program: &str,
    condition: &Condition,
    tree: &CommandTree,
    child: CommandId,
) -> String {
    let command = tree.get(child);
    format!(
        "complete -c {} -f {} -a {} -d {}",
        program,
        condition,
        quote::word(&command.name),
        quote::description(&command.short)
    )
}
