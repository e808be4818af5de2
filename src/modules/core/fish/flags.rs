//! Flag registration lines

use fishgen_types::{CommandId, CommandTree, Flag};
use tracing::trace;

use super::buffer::CompletionBuffer;
use super::condition::Condition;
use super::quote;
use crate::Result;

/// Emit one `complete` line per completable flag of `node`, local flags
/// first, then inherited ones
pub fn write_flags(
    tree: &CommandTree,
    root: CommandId,
    node: CommandId,
    buffer: &mut CompletionBuffer,
) -> Result<()> {
    let program = tree.name(root);
    let flags: Vec<&Flag> = tree
        .local_flags(node)
        .into_iter()
        .chain(tree.inherited_flags(node))
        .filter(|flag| flag.is_completable())
        .collect();
    if flags.is_empty() {
        return Ok(());
    }

    let condition = Condition::for_flags(tree, root, node)?;
    for flag in flags {
        trace!(command = tree.name(node), flag = %flag.name, "flag completion");
        buffer.push_line(&flag_line(program, &condition, flag));
    }
    Ok(())
}

/// `complete -c <program> -f -n '<cond>' [-r] [-s <c>] -l <name> -d '<usage>'`
pub fn flag_line(program: &str, condition: &Condition, flag: &Flag) -> String {
    let mut parts: Vec<String> = vec![
        "complete".into(),
        "-c".into(),
        program.to_string(),
        "-f".into(),
        condition.to_string(),
    ];
    if flag.takes_argument() {
        parts.push("-r".into());
    }
    if let Some(shorthand) = flag.shorthand {
        parts.push("-s".into());
        parts.push(quote::word(&shorthand.to_string()).into_owned());
    }
    parts.push("-l".into());
    parts.push(quote::word(&flag.name).into_owned());
    parts.push("-d".into());
    parts.push(quote::description(&flag.usage));
    parts.join(" ")
}
