//! Running a command from start to finish.
//!
//! Each invocation walks the same stages:
//!
//! ```text
//! Idle ─► SettingsResolved ─► RootResolved ─► CategoryPathsResolved
//!      ─► FilesListed ─► PresentedToUser ─► FileOpened | Cancelled
//! ```
//!
//! Settings and paths are resolved fresh each time into an
//! [`InvocationContext`]; later stages receive it by reference and return
//! new values rather than updating shared state.

use camino::{Utf8Path, Utf8PathBuf};
use en_core::{Category, FileListing, LayeredSettings, SettingsProvider};
use en_scanner::FileLister;
use regex::Regex;
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use crate::command::{CommandAction, CommandSpec};
use crate::error::NavError;
use crate::host::{Selection, SelectionUi, Workspace};
use crate::matcher::{RelatedCategory, RelatedFileMatcher};
use crate::resolver::{resolve_all, resolve_category, resolve_root};
use crate::rules::{RelationRule, compile_all};

/// Key of the application-file pattern setting.
pub const APPLICATION_FILE_KEY: &str = "application_file";

/// How an invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user picked a file (or the command picked one) and it was opened.
    Opened(Utf8PathBuf),
    /// The user dismissed the choices.
    Cancelled,
    /// The command stopped before anything was shown.
    NoListing,
}

/// Everything resolved before a command touches the filesystem.
#[derive(Debug, Clone)]
pub struct InvocationContext {
    settings: LayeredSettings,
    active_file: Option<Utf8PathBuf>,
    root: Utf8PathBuf,
}

impl InvocationContext {
    /// Reads settings, the open file and the application root from the
    /// workspace.
    ///
    /// # Errors
    ///
    /// See [`resolve_root`]; settings read failures surface as
    /// [`NavError::Config`].
    pub fn resolve(workspace: &impl Workspace) -> Result<Self, NavError> {
        let settings =
            LayeredSettings::new(workspace.project_settings()?, workspace.user_settings()?);
        debug!(
            project_scope = settings.project().is_some(),
            "Settings resolved"
        );

        let root = resolve_root(&workspace.project_folders(), &settings)?;
        Ok(Self {
            settings,
            active_file: workspace.active_file(),
            root,
        })
    }

    /// Builds a context from already-resolved parts.
    #[must_use]
    pub const fn from_parts(
        settings: LayeredSettings,
        active_file: Option<Utf8PathBuf>,
        root: Utf8PathBuf,
    ) -> Self {
        Self {
            settings,
            active_file,
            root,
        }
    }

    /// Returns the application root.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Returns the file being edited.
    #[must_use]
    pub fn active_file(&self) -> Option<&Utf8Path> {
        self.active_file.as_deref()
    }

    /// Returns the merged settings.
    #[must_use]
    pub const fn settings(&self) -> &LayeredSettings {
        &self.settings
    }

    /// Resolves the directory of `category`.
    ///
    /// # Errors
    ///
    /// See [`resolve_category`].
    pub fn category_path(&self, category: Category) -> Result<Utf8PathBuf, NavError> {
        resolve_category(&self.root, category, &self.settings)
    }
}

/// Choices ready to be shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choices {
    /// Title shown above the choices.
    pub title: &'static str,
    /// The files behind the choices, in display order.
    pub entries: FileListing,
    /// One display label per entry.
    pub labels: Vec<String>,
}

/// What a command produced before reaching the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prepared {
    /// Let the user pick from these.
    Choose(Choices),
    /// Open this file without asking.
    Open(Utf8PathBuf),
    /// Nothing to show.
    Nothing,
}

/// Runs `spec` end to end.
///
/// User-visible failures are reported through [`SelectionUi::show_error`]
/// and silent ones are logged; both end as [`Outcome::NoListing`].
///
/// # Errors
///
/// Returns any other [`NavError`], including UI failures.
pub fn execute<W, L, U>(
    spec: &CommandSpec,
    workspace: &W,
    lister: &L,
    ui: &mut U,
) -> Result<Outcome, NavError>
where
    W: Workspace,
    L: FileLister,
    U: SelectionUi,
{
    info!(command = spec.name, "Running command");

    let prepared =
        match InvocationContext::resolve(workspace).and_then(|ctx| prepare(spec, &ctx, lister)) {
            Ok(prepared) => prepared,
            Err(e) if e.is_user_visible() => {
                ui.show_error(&e.to_string());
                return Ok(Outcome::NoListing);
            }
            Err(e) if e.is_silent() => {
                debug!(command = spec.name, reason = %e, "Command produced no listing");
                return Ok(Outcome::NoListing);
            }
            Err(e) => return Err(e),
        };

    present(prepared, ui)
}

/// Runs every stage of `spec` up to the UI.
///
/// # Errors
///
/// Returns the first failure of any stage.
pub fn prepare(
    spec: &CommandSpec,
    ctx: &InvocationContext,
    lister: &impl FileLister,
) -> Result<Prepared, NavError> {
    match spec.action {
        CommandAction::List {
            listed,
            related,
            rules,
        } => list_category(ctx, lister, spec.title(), listed, related, rules).map(Prepared::Choose),
        CommandAction::OpenApplicationFile => {
            let found = find_application_file(ctx, lister)?;
            Ok(found.map_or(Prepared::Nothing, Prepared::Open))
        }
        CommandAction::OpenRootFile => {
            list_root_files(ctx, lister, spec.title()).map(Prepared::Choose)
        }
    }
}

/// Shows prepared choices and opens the result.
///
/// # Errors
///
/// Returns [`NavError::Host`] if the UI fails.
pub fn present<U: SelectionUi>(prepared: Prepared, ui: &mut U) -> Result<Outcome, NavError> {
    match prepared {
        Prepared::Nothing => Ok(Outcome::NoListing),
        Prepared::Open(path) => open(ui, path),
        Prepared::Choose(choices) => {
            let selection = ui
                .present_choices(choices.title, &choices.labels)
                .map_err(NavError::host)?;
            debug!(?selection, "Presented to user");

            let Selection::Chosen(index) = selection else {
                return Ok(Outcome::Cancelled);
            };
            match choices.entries.get(index) {
                Some(path) => open(ui, path.to_owned()),
                None => {
                    warn!(index, count = choices.entries.len(), "Selection out of range");
                    Ok(Outcome::Cancelled)
                }
            }
        }
    }
}

fn open<U: SelectionUi>(ui: &mut U, path: Utf8PathBuf) -> Result<Outcome, NavError> {
    ui.open_file(&path).map_err(NavError::host)?;
    info!(file = %path, "Opened file");
    Ok(Outcome::Opened(path))
}

fn list_category(
    ctx: &InvocationContext,
    lister: &impl FileLister,
    title: &'static str,
    listed: Category,
    related: Option<Category>,
    rules: &[RelationRule],
) -> Result<Choices, NavError> {
    let listed_root = ctx.category_path(listed)?;
    let related_root = related
        .map(|category| ctx.category_path(category).map(|root| (category, root)))
        .transpose()?;
    debug!(listed = %listed_root, related = ?related_root, "Category paths resolved");

    let source = listed.grammar().file_pattern();
    let pattern = Regex::new(&source).map_err(|e| NavError::invalid_pattern(&source, e))?;
    let mut listing = FileListing::new(lister.list_files(&listed_root, &pattern)?);

    let nested = nested_roots(ctx, listed, &listed_root);
    if !nested.is_empty() {
        listing.retain(|path| !nested.iter().any(|dir| path.starts_with(dir)));
    }
    debug!(count = listing.len(), category = %listed, "Files listed");

    let compiled = compile_all(rules)?;
    let mut matcher = RelatedFileMatcher::new(listed, &listed_root);
    if let Some((category, root)) = &related_root {
        matcher = matcher.with_related(RelatedCategory {
            category: *category,
            root,
            rules: &compiled,
        });
    }
    let entries = matcher.arrange(ctx.active_file(), listing)?;
    let labels = entries.labels_relative_to(&listed_root);

    Ok(Choices {
        title,
        entries,
        labels,
    })
}

/// Returns the directories of other categories strictly inside `listed_root`.
fn nested_roots(
    ctx: &InvocationContext,
    listed: Category,
    listed_root: &Utf8Path,
) -> SmallVec<[Utf8PathBuf; 2]> {
    resolve_all(ctx.root(), ctx.settings())
        .into_iter()
        .filter(|(category, dir)| {
            *category != listed && dir != listed_root && dir.starts_with(listed_root)
        })
        .map(|(_, dir)| dir)
        .collect()
}

fn find_application_file(
    ctx: &InvocationContext,
    lister: &impl FileLister,
) -> Result<Option<Utf8PathBuf>, NavError> {
    let source = ctx
        .settings()
        .string(APPLICATION_FILE_KEY)?
        .ok_or_else(|| NavError::MissingSetting(APPLICATION_FILE_KEY.to_owned()))?;
    let anchored = format!("^(?:{source})$");
    let pattern = Regex::new(&anchored).map_err(|e| NavError::invalid_pattern(anchored, e))?;

    let found = lister
        .list_entries(ctx.root())?
        .into_iter()
        .find(|entry| pattern.is_match(entry.file_name()))
        .map(|entry| entry.path);

    if found.is_none() {
        debug!(root = %ctx.root(), "No application file in root");
    }
    Ok(found)
}

fn list_root_files(
    ctx: &InvocationContext,
    lister: &impl FileLister,
    title: &'static str,
) -> Result<Choices, NavError> {
    let entries: FileListing = lister
        .list_entries(ctx.root())?
        .into_iter()
        .filter(|entry| entry.is_file)
        .map(|entry| entry.path)
        .collect();
    let labels = entries.file_name_labels();

    Ok(Choices {
        title,
        entries,
        labels,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use en_core::SettingsLayer;
    use en_scanner::{DirectoryEntry, ScanError};
    use serde_json::json;

    use super::*;

    /// Lists from an in-memory map of directory to files.
    #[derive(Default)]
    struct MemoryLister {
        files: BTreeMap<Utf8PathBuf, Vec<Utf8PathBuf>>,
        entries: Vec<DirectoryEntry>,
    }

    impl MemoryLister {
        fn with_files(mut self, root: &str, files: &[&str]) -> Self {
            self.files.insert(
                Utf8PathBuf::from(root),
                files.iter().map(Utf8PathBuf::from).collect(),
            );
            self
        }

        fn with_entry(mut self, path: &str, is_file: bool) -> Self {
            self.entries.push(DirectoryEntry {
                path: Utf8PathBuf::from(path),
                is_file,
            });
            self
        }
    }

    impl FileLister for MemoryLister {
        fn list_files(
            &self,
            root: &Utf8Path,
            pattern: &Regex,
        ) -> Result<Vec<Utf8PathBuf>, ScanError> {
            Ok(self
                .files
                .iter()
                .filter(|(dir, _)| dir.starts_with(root))
                .flat_map(|(_, files)| files.iter())
                .filter(|path| path.file_name().is_some_and(|name| pattern.is_match(name)))
                .cloned()
                .collect())
        }

        fn list_entries(&self, _dir: &Utf8Path) -> Result<Vec<DirectoryEntry>, ScanError> {
            Ok(self.entries.clone())
        }
    }

    struct FakeWorkspace {
        folders: Vec<Utf8PathBuf>,
        active: Option<Utf8PathBuf>,
        project: Option<SettingsLayer>,
    }

    impl FakeWorkspace {
        fn new(active: Option<&str>) -> Self {
            Self {
                folders: vec![Utf8PathBuf::from("/p")],
                active: active.map(Utf8PathBuf::from),
                project: None,
            }
        }
    }

    impl Workspace for FakeWorkspace {
        fn project_folders(&self) -> Vec<Utf8PathBuf> {
            self.folders.clone()
        }

        fn active_file(&self) -> Option<Utf8PathBuf> {
            self.active.clone()
        }

        fn project_settings(&self) -> Result<Option<SettingsLayer>, en_core::ConfigError> {
            Ok(self.project.clone())
        }

        fn user_settings(&self) -> Result<SettingsLayer, en_core::ConfigError> {
            SettingsLayer::defaults()
        }
    }

    #[derive(Default)]
    struct RecordingUi {
        answer: Option<usize>,
        shown: Vec<(String, Vec<String>)>,
        opened: Vec<Utf8PathBuf>,
        errors: Vec<String>,
    }

    impl SelectionUi for RecordingUi {
        type Error = std::io::Error;

        fn present_choices(
            &mut self,
            title: &str,
            choices: &[String],
        ) -> Result<Selection, Self::Error> {
            self.shown.push((title.to_owned(), choices.to_vec()));
            Ok(self.answer.map_or(Selection::Cancelled, Selection::Chosen))
        }

        fn open_file(&mut self, path: &Utf8Path) -> Result<(), Self::Error> {
            self.opened.push(path.to_owned());
            Ok(())
        }

        fn show_error(&mut self, message: &str) {
            self.errors.push(message.to_owned());
        }
    }

    const ROOT: &str = "/p/app/assets/javascripts";

    fn run(
        command: &str,
        workspace: &FakeWorkspace,
        lister: &MemoryLister,
        ui: &mut RecordingUi,
    ) -> Outcome {
        let spec = CommandSpec::by_name(command).unwrap();
        execute(spec, workspace, lister, ui).unwrap()
    }

    fn models_lister() -> MemoryLister {
        MemoryLister::default().with_files(
            "/p/app/assets/javascripts/models",
            &[
                "/p/app/assets/javascripts/models/comment.js",
                "/p/app/assets/javascripts/models/post.js.coffee",
                "/p/app/assets/javascripts/models/README.md",
            ],
        )
    }

    #[test]
    fn test_models_listing_promotes_related_model() {
        let workspace = FakeWorkspace::new(Some(
            "/p/app/assets/javascripts/controllers/selected_post_controller.js",
        ));
        let mut ui = RecordingUi {
            answer: Some(0),
            ..RecordingUi::default()
        };

        let outcome = run("models", &workspace, &models_lister(), &mut ui);

        assert_eq!(ui.shown[0].0, "Models");
        assert_eq!(ui.shown[0].1, vec!["post.js.coffee", "comment.js"]);
        assert_eq!(
            outcome,
            Outcome::Opened(Utf8PathBuf::from(format!("{ROOT}/models/post.js.coffee")))
        );
        assert_eq!(ui.opened.len(), 1);
    }

    #[test]
    fn test_cancel_never_opens() {
        let workspace = FakeWorkspace::new(None);
        let mut ui = RecordingUi::default();

        let outcome = run("models", &workspace, &models_lister(), &mut ui);

        assert_eq!(outcome, Outcome::Cancelled);
        assert_eq!(ui.shown.len(), 1);
        assert!(ui.opened.is_empty());
    }

    #[test]
    fn test_no_project_root_is_reported() {
        let mut workspace = FakeWorkspace::new(None);
        workspace.folders.clear();
        let mut ui = RecordingUi::default();

        let outcome = run("models", &workspace, &models_lister(), &mut ui);

        assert_eq!(outcome, Outcome::NoListing);
        assert_eq!(ui.errors, vec!["Could not find project root"]);
        assert!(ui.shown.is_empty());
    }

    #[test]
    fn test_missing_related_location_is_silent() {
        let mut workspace = FakeWorkspace::new(None);
        workspace.project = Some(SettingsLayer::new().with("controllers_location", json!(null)));
        let mut ui = RecordingUi::default();

        let outcome = run("models", &workspace, &models_lister(), &mut ui);

        // null in the project scope unsets the user default
        assert_eq!(outcome, Outcome::NoListing);
        assert!(ui.shown.is_empty());
        assert!(ui.errors.is_empty());

        let spec = CommandSpec::by_name("models").unwrap();
        let ctx = InvocationContext::from_parts(
            LayeredSettings::new(
                None,
                SettingsLayer::new()
                    .with("root", json!([]))
                    .with("models_location", json!(["models"])),
            ),
            None,
            Utf8PathBuf::from("/p"),
        );
        let err = prepare(spec, &ctx, &models_lister()).unwrap_err();
        assert!(matches!(err, NavError::MissingCategoryPath(Category::Controllers)));
        assert!(err.is_silent());
    }

    #[test]
    fn test_open_file_is_excluded_from_own_listing() {
        let workspace = FakeWorkspace::new(Some("/p/app/assets/javascripts/models/comment.js"));
        let mut ui = RecordingUi::default();

        run("models", &workspace, &models_lister(), &mut ui);

        assert_eq!(ui.shown[0].1, vec!["post.js.coffee"]);
    }

    #[test]
    fn test_nested_category_is_excluded() {
        let mut workspace = FakeWorkspace::new(None);
        workspace.project =
            Some(SettingsLayer::new().with("templates_location", json!(["views", "templates"])));
        let lister = MemoryLister::default()
            .with_files(
                "/p/app/assets/javascripts/views",
                &["/p/app/assets/javascripts/views/post_view.js"],
            )
            .with_files(
                "/p/app/assets/javascripts/views/templates",
                &[
                    "/p/app/assets/javascripts/views/templates/helpers.js",
                    "/p/app/assets/javascripts/views/templates/post.handlebars",
                ],
            );
        let mut ui = RecordingUi::default();

        run("views", &workspace, &lister, &mut ui);

        assert_eq!(ui.shown[0].1, vec!["post_view.js"]);
    }

    #[test]
    fn test_template_in_nested_location_promotes_its_view() {
        let mut workspace = FakeWorkspace::new(Some(
            "/p/app/assets/javascripts/views/templates/post.handlebars",
        ));
        workspace.project =
            Some(SettingsLayer::new().with("templates_location", json!(["views", "templates"])));
        let lister = MemoryLister::default()
            .with_files(
                "/p/app/assets/javascripts/views",
                &[
                    "/p/app/assets/javascripts/views/comment_view.js",
                    "/p/app/assets/javascripts/views/post_view.js",
                ],
            )
            .with_files(
                "/p/app/assets/javascripts/views/templates",
                &["/p/app/assets/javascripts/views/templates/post.handlebars"],
            );
        let mut ui = RecordingUi::default();

        run("views", &workspace, &lister, &mut ui);

        assert_eq!(ui.shown[0].1, vec!["post_view.js", "comment_view.js"]);
    }

    #[test]
    fn test_open_template_is_excluded_from_templates() {
        let workspace = FakeWorkspace::new(Some(
            "/p/app/assets/javascripts/templates/post_view.handlebars",
        ));
        let lister = MemoryLister::default().with_files(
            "/p/app/assets/javascripts/templates",
            &[
                "/p/app/assets/javascripts/templates/post_view.handlebars",
                "/p/app/assets/javascripts/templates/comment.handlebars",
                "/p/app/assets/javascripts/templates/post.handlebars.erb",
            ],
        );
        let mut ui = RecordingUi::default();

        run("templates", &workspace, &lister, &mut ui);

        assert_eq!(ui.shown[0].0, "Templates");
        assert_eq!(ui.shown[0].1, vec!["comment.handlebars", "post.handlebars.erb"]);
    }

    #[test]
    fn test_application_file_opens_first_match() {
        let workspace = FakeWorkspace::new(None);
        let lister = MemoryLister::default()
            .with_entry(&format!("{ROOT}/app.js.coffee"), true)
            .with_entry(&format!("{ROOT}/application.js"), true)
            .with_entry(&format!("{ROOT}/router.js"), true);
        let mut ui = RecordingUi::default();

        let outcome = run("application", &workspace, &lister, &mut ui);

        assert_eq!(
            outcome,
            Outcome::Opened(Utf8PathBuf::from(format!("{ROOT}/app.js.coffee")))
        );
        assert!(ui.shown.is_empty());
    }

    #[test]
    fn test_application_file_missing() {
        let workspace = FakeWorkspace::new(None);
        let lister = MemoryLister::default().with_entry(&format!("{ROOT}/router.js"), true);
        let mut ui = RecordingUi::default();

        let outcome = run("application", &workspace, &lister, &mut ui);

        assert_eq!(outcome, Outcome::NoListing);
        assert!(ui.opened.is_empty());
    }

    #[test]
    fn test_application_pattern_is_anchored() {
        let workspace = FakeWorkspace::new(None);
        let lister = MemoryLister::default().with_entry(&format!("{ROOT}/myapp.js.bak"), true);
        let mut ui = RecordingUi::default();

        assert_eq!(run("application", &workspace, &lister, &mut ui), Outcome::NoListing);
    }

    #[test]
    fn test_invalid_application_pattern_propagates() {
        let mut workspace = FakeWorkspace::new(None);
        workspace.project = Some(SettingsLayer::new().with("application_file", json!("(")));
        let spec = CommandSpec::by_name("application").unwrap();
        let mut ui = RecordingUi::default();

        let err = execute(spec, &workspace, &MemoryLister::default(), &mut ui).unwrap_err();
        assert!(matches!(err, NavError::InvalidPattern { .. }));
    }

    #[test]
    fn test_root_files_list_regular_files() {
        let workspace = FakeWorkspace::new(None);
        let lister = MemoryLister::default()
            .with_entry(&format!("{ROOT}/app.js"), true)
            .with_entry(&format!("{ROOT}/models"), false)
            .with_entry(&format!("{ROOT}/router.js"), true);
        let mut ui = RecordingUi {
            answer: Some(1),
            ..RecordingUi::default()
        };

        let outcome = run("root", &workspace, &lister, &mut ui);

        assert_eq!(ui.shown[0].0, "Root");
        assert_eq!(ui.shown[0].1, vec!["app.js", "router.js"]);
        assert_eq!(
            outcome,
            Outcome::Opened(Utf8PathBuf::from(format!("{ROOT}/router.js")))
        );
    }

    #[test]
    fn test_out_of_range_selection_is_cancel() {
        let workspace = FakeWorkspace::new(None);
        let mut ui = RecordingUi {
            answer: Some(9),
            ..RecordingUi::default()
        };

        let outcome = run("models", &workspace, &models_lister(), &mut ui);
        assert_eq!(outcome, Outcome::Cancelled);
        assert!(ui.opened.is_empty());
    }
}
