//! Command tree
//!
//! Commands live in an arena owned by [`CommandTree`] and refer to each other
//! by [`CommandId`]. The parent link is a plain index used to rebuild paths
//! from the root; children are owned by the arena in declaration order.

use std::collections::HashSet;
use std::fmt;

use crate::Flag;

/// Index of a command inside its [`CommandTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandId(usize);

impl CommandId {
    /// Position of the command in the arena
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single command in the tree
#[derive(Debug, Clone)]
pub struct Command {
    /// Name as typed on the command line
    pub name: String,

    /// One-line description
    pub short: String,

    /// Hidden commands are runnable but never suggested
    pub hidden: bool,

    /// Deprecation notice; deprecated commands are never suggested
    pub deprecated: Option<String>,

    /// Whether the command does something on its own, as opposed to only
    /// grouping subcommands
    pub runnable: bool,

    /// Marks the designated `help` pseudo-command
    pub is_help: bool,

    /// Declared flags, persistent or not
    pub flags: Vec<Flag>,

    parent: Option<CommandId>,
    children: Vec<CommandId>,
}

impl Command {
    fn new(name: String, short: String, parent: Option<CommandId>) -> Self {
        Self {
            name,
            short,
            hidden: false,
            deprecated: None,
            runnable: true,
            is_help: false,
            flags: Vec::new(),
            parent,
            children: Vec::new(),
        }
    }

    /// Parent command, `None` for the tree root
    pub fn parent(&self) -> Option<CommandId> {
        self.parent
    }

    /// Children in declaration order
    pub fn children(&self) -> &[CommandId] {
        &self.children
    }
}

/// Arena holding a whole command hierarchy
#[derive(Debug, Clone)]
pub struct CommandTree {
    commands: Vec<Command>,
}

impl CommandTree {
    /// Create a tree holding only the root command
    pub fn new(root_name: impl Into<String>, short: impl Into<String>) -> Self {
        Self {
            commands: vec![Command::new(root_name.into(), short.into(), None)],
        }
    }

    /// The root command
    pub fn root(&self) -> CommandId {
        CommandId(0)
    }

    /// Number of commands in the tree, root included
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Append a child command under `parent`
    pub fn add_command(
        &mut self,
        parent: CommandId,
        name: impl Into<String>,
        short: impl Into<String>,
    ) -> CommandId {
        let id = CommandId(self.commands.len());
        self.commands
            .push(Command::new(name.into(), short.into(), Some(parent)));
        self.commands[parent.0].children.push(id);
        id
    }

    /// Append the `help` pseudo-command under `parent`
    pub fn add_help_command(&mut self, parent: CommandId) -> CommandId {
        let id = self.add_command(parent, "help", "Help about any command");
        self.commands[id.0].is_help = true;
        id
    }

    /// Declare a flag on a command
    pub fn add_flag(&mut self, id: CommandId, flag: Flag) {
        self.commands[id.0].flags.push(flag);
    }

    /// Look up a command.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not handed out by this tree.
    pub fn get(&self, id: CommandId) -> &Command {
        &self.commands[id.0]
    }

    pub fn get_mut(&mut self, id: CommandId) -> &mut Command {
        &mut self.commands[id.0]
    }

    pub fn name(&self, id: CommandId) -> &str {
        &self.commands[id.0].name
    }

    pub fn parent(&self, id: CommandId) -> Option<CommandId> {
        self.commands[id.0].parent
    }

    pub fn children(&self, id: CommandId) -> &[CommandId] {
        &self.commands[id.0].children
    }

    /// Number of ancestors between `id` and the tree root
    pub fn depth(&self, id: CommandId) -> usize {
        self.ancestors(id).count()
    }

    /// Strict ancestors of `id`, nearest first
    pub fn ancestors(&self, id: CommandId) -> impl Iterator<Item = CommandId> + '_ {
        std::iter::successors(self.parent(id), move |current| self.parent(*current))
    }

    /// Resolve a space separated path of command names below the root
    pub fn find(&self, path: &str) -> Option<CommandId> {
        path.split_whitespace().try_fold(self.root(), |current, name| {
            self.children(current)
                .iter()
                .copied()
                .find(|child| self.name(*child) == name)
        })
    }

    /// Whether a command should be offered to users at all.
    ///
    /// Hidden, deprecated and help commands never are. A command that cannot
    /// run by itself is only offered when something below it can be.
    pub fn is_available(&self, id: CommandId) -> bool {
        if self.is_excluded(id) {
            return false;
        }
        if self.get(id).runnable {
            return true;
        }

        let mut stack: Vec<CommandId> = self.children(id).to_vec();
        while let Some(current) = stack.pop() {
            if self.is_excluded(current) {
                continue;
            }
            if self.get(current).runnable {
                return true;
            }
            stack.extend_from_slice(self.children(current));
        }
        false
    }

    /// Availability of every command, indexed by [`CommandId::index`].
    ///
    /// Children are always created after their parent, so walking the arena
    /// backwards settles every child before its parent.
    pub fn availability(&self) -> Vec<bool> {
        let mut available = vec![false; self.commands.len()];
        for index in (0..self.commands.len()).rev() {
            let command = &self.commands[index];
            available[index] = !self.is_excluded(CommandId(index))
                && (command.runnable || command.children.iter().any(|c| available[c.0]));
        }
        available
    }

    /// Available children of `id` in declaration order
    pub fn visible_children(&self, id: CommandId) -> Vec<CommandId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|child| self.is_available(*child))
            .collect()
    }

    fn is_excluded(&self, id: CommandId) -> bool {
        let command = self.get(id);
        command.hidden || command.deprecated.is_some() || command.is_help
    }

    /// Every flag declared on the command itself, persistent or not
    pub fn local_flags(&self, id: CommandId) -> Vec<&Flag> {
        sorted(self.get(id).flags.iter().collect())
    }

    /// Flags declared on the command that descendants do not inherit
    pub fn local_non_persistent_flags(&self, id: CommandId) -> Vec<&Flag> {
        sorted(
            self.get(id)
                .flags
                .iter()
                .filter(|flag| !flag.persistent)
                .collect(),
        )
    }

    /// Persistent flags of the ancestors that reach this command.
    ///
    /// A local flag shadows an inherited one with the same name, and a
    /// nearer ancestor shadows a farther one.
    pub fn inherited_flags(&self, id: CommandId) -> Vec<&Flag> {
        let mut seen: HashSet<&str> = self
            .get(id)
            .flags
            .iter()
            .map(|flag| flag.name.as_str())
            .collect();

        let mut inherited = Vec::new();
        for ancestor in self.ancestors(id) {
            for flag in self.get(ancestor).flags.iter().filter(|f| f.persistent) {
                if seen.insert(flag.name.as_str()) {
                    inherited.push(flag);
                }
            }
        }
        sorted(inherited)
    }

    /// Every flag usable at this command, local or inherited
    pub fn all_flags(&self, id: CommandId) -> Vec<&Flag> {
        let mut flags = self.local_flags(id);
        flags.extend(self.inherited_flags(id));
        sorted(flags)
    }
}

fn sorted(mut flags: Vec<&Flag>) -> Vec<&Flag> {
    flags.sort_by(|a, b| a.name.cmp(&b.name));
    flags
}
