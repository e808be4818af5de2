//! Helper functions emitted once at the top of every script

use fishgen_types::{CommandId, CommandTree};

use super::buffer::CompletionBuffer;
use super::quote;

/// Name of the predicate that holds while no subcommand of `program` has
/// been typed yet
pub fn no_subcommand_fn(program: &str) -> String {
    format!("__fish_{}_no_subcommand", program)
}

/// Name of the predicate testing whether `--<flag>` is on the command line
pub fn has_flag_fn(program: &str) -> String {
    format!("__fish_{}_has_flag", program)
}

/// Emit both helper predicates, scoped to the root's name so scripts for
/// different programs can be sourced side by side
pub fn write_preamble(tree: &CommandTree, root: CommandId, buffer: &mut CompletionBuffer) {
    let program = tree.name(root);

    let mut contains = String::from("contains -- $i");
    for child in tree.visible_children(root) {
        contains.push(' ');
        contains.push_str(&quote::word(tree.name(child)));
    }

    buffer.push_line(&format!("# fish completion for {}", program));
    buffer.push_line(&format!(
        "function {} --description {}",
        no_subcommand_fn(program),
        quote::single_quoted(&format!(
            "Test if {} has yet to be given the subcommand",
            program
        ))
    ));
    buffer.push_line("\tfor i in (commandline -opc)");
    buffer.push_line(&format!("\t\tif {}", contains));
    buffer.push_line("\t\t\treturn 1");
    buffer.push_line("\t\tend");
    buffer.push_line("\tend");
    buffer.push_line("\treturn 0");
    buffer.push_line("end");

    buffer.push_line(&format!(
        "function {} --description {}",
        has_flag_fn(program),
        quote::single_quoted(&format!("Test if a flag was given to {}", program))
    ));
    buffer.push_line("\tfor i in (commandline -opc)");
    buffer.push_line("\t\tif contains -- \"--$argv[1]\" $i");
    buffer.push_line("\t\t\treturn 0");
    buffer.push_line("\t\tend");
    buffer.push_line("\tend");
    buffer.push_line("\treturn 1");
    buffer.push_line("end");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preamble(tree: &CommandTree) -> String {
        let mut buffer = CompletionBuffer::new();
        write_preamble(tree, tree.root(), &mut buffer);
        buffer.into_string()
    }

    #[test]
    fn test_preamble_names_are_scoped_to_program() {
        let tree = CommandTree::new("app", "");
        let text = preamble(&tree);
        assert!(text.contains("function __fish_app_no_subcommand --description"));
        assert!(text.contains("function __fish_app_has_flag --description"));
        assert_eq!(text.matches("function ").count(), 2);
        assert_eq!(text.matches("\nend\n").count(), 2);
    }

    #[test]
    fn test_preamble_lists_visible_children_in_order() {
        let mut tree = CommandTree::new("app", "");
        let root = tree.root();
        tree.add_command(root, "build", "");
        let secret = tree.add_command(root, "secret", "");
        tree.get_mut(secret).hidden = true;
        tree.add_help_command(root);
        tree.add_command(root, "deploy", "");

        let text = preamble(&tree);
        assert!(text.contains("\t\tif contains -- $i build deploy\n"));
    }

    #[test]
    fn test_preamble_without_children() {
        let tree = CommandTree::new("app", "");
        let text = preamble(&tree);
        assert!(text.contains("\t\tif contains -- $i\n"));
    }

    #[test]
    fn test_has_flag_reads_first_argument() {
        let tree = CommandTree::new("app", "");
        assert!(preamble(&tree).contains("contains -- \"--$argv[1]\" $i"));
    }
}
