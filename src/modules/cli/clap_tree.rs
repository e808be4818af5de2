//! Conversion from clap command definitions to [`CommandTree`]

use clap::Command as ClapCommand;
use fishgen_types::{CommandId, CommandTree, Flag, ValueKind};

/// Build a command tree mirroring a clap command definition.
///
/// The definition does not need to be built first: clap's implicit
/// `--help`, `--version` and `help` subcommand are added here the same way
/// clap would add them. Positional arguments are not flags and are skipped.
pub fn from_clap(cmd: &ClapCommand, bin_name: &str) -> CommandTree {
    let about = cmd.get_about().map(|s| s.to_string()).unwrap_or_default();
    let mut tree = CommandTree::new(bin_name, about);
    let root = tree.root();

    if !cmd.is_disable_help_flag_set() {
        tree.add_flag(
            root,
            Flag::bool("help")
                .with_shorthand('h')
                .with_usage("Print help")
                .persistent(),
        );
    }
    if cmd.get_version().is_some() && !cmd.is_disable_version_flag_set() {
        tree.add_flag(
            root,
            Flag::bool("version")
                .with_shorthand('V')
                .with_usage("Print version"),
        );
    }

    fill(&mut tree, root, cmd);
    tree
}

fn fill(tree: &mut CommandTree, id: CommandId, cmd: &ClapCommand) {
    for arg in cmd.get_arguments().filter(|arg| !arg.is_positional()) {
        let Some(long) = arg.get_long() else {
            continue;
        };
        let value_kind = if arg.get_action().takes_values() {
            ValueKind::String
        } else {
            ValueKind::Bool
        };
        let mut flag = Flag::new(long, value_kind)
            .with_usage(arg.get_help().map(|s| s.to_string()).unwrap_or_default());
        flag.shorthand = arg.get_short();
        flag.persistent = arg.is_global_set();
        flag.hidden = arg.is_hide_set();
        tree.add_flag(id, flag);
    }

    let command = tree.get_mut(id);
    command.runnable = !(cmd.has_subcommands() && cmd.is_subcommand_required_set());

    for sub in cmd.get_subcommands() {
        let about = sub.get_about().map(|s| s.to_string()).unwrap_or_default();
        let child = tree.add_command(id, sub.get_name(), about);
        tree.get_mut(child).hidden = sub.is_hide_set();
        fill(tree, child, sub);
    }

    if cmd.has_subcommands() && !cmd.is_disable_help_subcommand_set() {
        tree.add_help_command(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{Arg, ArgAction};

    fn sample() -> ClapCommand {
        ClapCommand::new("tool")
            .about("A tool")
            .version("1.0")
            .subcommand_required(true)
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .global(true)
                    .action(ArgAction::SetTrue)
                    .help("Verbose output"),
            )
            .subcommand(
                ClapCommand::new("build")
                    .about("Build things")
                    .arg(Arg::new("out").short('o').long("out").help("Output dir"))
                    .arg(Arg::new("target")),
            )
            .subcommand(ClapCommand::new("secret").hide(true))
    }

    #[test]
    fn test_from_clap_structure() {
        let tree = from_clap(&sample(), "tool");
        let root = tree.root();
        assert_eq!(tree.name(root), "tool");
        assert_eq!(tree.get(root).short, "A tool");
        assert!(!tree.get(root).runnable);

        let build = tree.find("build").unwrap();
        assert_eq!(tree.get(build).short, "Build things");
        let secret = tree.find("secret").unwrap();
        assert!(!tree.is_available(secret));
        assert!(tree.get(tree.find("help").unwrap()).is_help);
        assert_eq!(tree.visible_children(root), vec![build]);
    }

    #[test]
    fn test_from_clap_flags() {
        let tree = from_clap(&sample(), "tool");
        let root = tree.root();
        let build = tree.find("build").unwrap();

        let out = &tree.get(build).flags[0];
        assert_eq!(out.name, "out");
        assert_eq!(out.shorthand, Some('o'));
        assert_eq!(out.value_kind, ValueKind::String);
        assert_eq!(out.usage, "Output dir");
        // positional `target` is not a flag
        assert_eq!(tree.get(build).flags.len(), 1);

        let inherited: Vec<&str> = tree
            .inherited_flags(build)
            .into_iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(inherited, ["help", "verbose"]);

        let version = tree
            .local_flags(root)
            .into_iter()
            .find(|f| f.name == "version")
            .unwrap();
        assert!(!version.persistent);
        assert!(!version.takes_argument());
    }
}
