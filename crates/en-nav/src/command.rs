//! The catalogue of navigation commands.
//!
//! Every command is a row in [`COMMANDS`]: list commands name the category
//! they list, the category whose files can point into it, and the rules
//! relating the two. The two root commands open files at the application
//! root instead.

use en_core::Category;
use smallvec::SmallVec;

use crate::rules::{
    CONTROLLERS_TO_MODELS, MODELS_TO_CONTROLLERS, RelationRule, TEMPLATES_TO_VIEWS,
    VIEWS_TO_TEMPLATES,
};

/// What a command does when run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    /// Lists the files of a category.
    List {
        /// Category whose files are listed.
        listed: Category,
        /// Category whose files can be related to listed files.
        related: Option<Category>,
        /// Rules from `related` into `listed`, in priority order.
        rules: &'static [RelationRule],
    },
    /// Opens the application entry file directly.
    OpenApplicationFile,
    /// Lists the regular files at the application root.
    OpenRootFile,
}

/// A named navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Name used on the command line.
    pub name: &'static str,
    /// Human-readable caption.
    pub caption: &'static str,
    /// What the command does.
    pub action: CommandAction,
}

impl CommandSpec {
    const fn list(
        name: &'static str,
        caption: &'static str,
        listed: Category,
        related: Option<Category>,
        rules: &'static [RelationRule],
    ) -> Self {
        Self {
            name,
            caption,
            action: CommandAction::List {
                listed,
                related,
                rules,
            },
        }
    }

    /// Looks up a command by name.
    #[must_use]
    pub fn by_name(name: &str) -> Option<&'static Self> {
        COMMANDS.iter().find(|spec| spec.name == name)
    }

    /// Returns the categories whose locations must be configured for the
    /// command to run.
    #[must_use]
    pub fn required_categories(&self) -> SmallVec<[Category; 2]> {
        match self.action {
            CommandAction::List {
                listed, related, ..
            } => std::iter::once(listed).chain(related).collect(),
            CommandAction::OpenApplicationFile | CommandAction::OpenRootFile => SmallVec::new(),
        }
    }

    /// Returns the title shown above the choices.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self.action {
            CommandAction::List { listed, .. } => match listed {
                Category::Models => "Models",
                Category::Controllers => "Controllers",
                Category::Views => "Views",
                Category::Templates => "Templates",
                Category::Mixins => "Mixins",
                Category::Data => "Data",
                Category::Adapters => "Adapters",
                Category::States => "States",
            },
            CommandAction::OpenApplicationFile => "Application",
            CommandAction::OpenRootFile => "Root",
        }
    }
}

/// Every navigation command, in menu order.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec::list(
        "models",
        "List Models",
        Category::Models,
        Some(Category::Controllers),
        CONTROLLERS_TO_MODELS,
    ),
    CommandSpec::list(
        "controllers",
        "List Controllers",
        Category::Controllers,
        Some(Category::Models),
        MODELS_TO_CONTROLLERS,
    ),
    CommandSpec::list(
        "views",
        "List Views",
        Category::Views,
        Some(Category::Templates),
        TEMPLATES_TO_VIEWS,
    ),
    CommandSpec::list(
        "templates",
        "List Templates",
        Category::Templates,
        Some(Category::Views),
        VIEWS_TO_TEMPLATES,
    ),
    CommandSpec::list("mixins", "List Mixins", Category::Mixins, None, &[]),
    CommandSpec::list("data", "List Data", Category::Data, None, &[]),
    CommandSpec::list("adapters", "List Adapters", Category::Adapters, None, &[]),
    CommandSpec::list("states", "List States", Category::States, None, &[]),
    CommandSpec {
        name: "application",
        caption: "Open Application File",
        action: CommandAction::OpenApplicationFile,
    },
    CommandSpec {
        name: "root",
        caption: "Open Root File",
        action: CommandAction::OpenRootFile,
    },
];
