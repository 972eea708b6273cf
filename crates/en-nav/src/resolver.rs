//! Turning settings into absolute directories.
//!
//! The application root is the first project folder joined with the `root`
//! setting's segments; each category directory is the root joined with the
//! category's `<category>_location` segments.

use camino::{Utf8Path, Utf8PathBuf};
use en_core::{Category, SettingsProvider};
use tracing::{debug, warn};

use crate::error::NavError;

/// Key of the application-root setting.
pub const ROOT_KEY: &str = "root";

/// Resolves the application root.
///
/// # Errors
///
/// - [`NavError::NoProjectRoot`] if `folders` is empty.
/// - [`NavError::MissingSetting`] if `root` is not configured.
/// - [`NavError::Config`] if `root` has the wrong shape.
pub fn resolve_root(
    folders: &[Utf8PathBuf],
    settings: &impl SettingsProvider,
) -> Result<Utf8PathBuf, NavError> {
    let project = folders.first().ok_or(NavError::NoProjectRoot)?;
    let segments = settings
        .path_segments(ROOT_KEY)?
        .ok_or_else(|| NavError::MissingSetting(ROOT_KEY.to_owned()))?;

    let root = join_segments(project, &segments);
    debug!(root = %root, "Resolved application root");
    Ok(root)
}

/// Resolves the directory of `category` under `root`.
///
/// # Errors
///
/// - [`NavError::MissingCategoryPath`] if the category has no location.
/// - [`NavError::Config`] if the location has the wrong shape.
pub fn resolve_category(
    root: &Utf8Path,
    category: Category,
    settings: &impl SettingsProvider,
) -> Result<Utf8PathBuf, NavError> {
    let segments = settings
        .path_segments(category.settings_key())?
        .ok_or(NavError::MissingCategoryPath(category))?;
    Ok(join_segments(root, &segments))
}

/// Resolves every category that has a usable location.
///
/// Categories that are missing or misconfigured are skipped.
#[must_use]
pub fn resolve_all(
    root: &Utf8Path,
    settings: &impl SettingsProvider,
) -> Vec<(Category, Utf8PathBuf)> {
    Category::ALL
        .into_iter()
        .filter_map(|category| match resolve_category(root, category, settings) {
            Ok(path) => Some((category, path)),
            Err(NavError::MissingCategoryPath(_)) => None,
            Err(e) => {
                warn!(%category, error = %e, "Ignoring category location");
                None
            }
        })
        .collect()
}

fn join_segments(base: &Utf8Path, segments: &[String]) -> Utf8PathBuf {
    segments
        .iter()
        .filter(|segment| !segment.is_empty())
        .fold(base.to_owned(), |path, segment| path.join(segment))
}

#[cfg(test)]
mod tests {
    use en_core::SettingsLayer;
    use serde_json::json;

    use super::*;

    fn folders() -> Vec<Utf8PathBuf> {
        vec![Utf8PathBuf::from("/p"), Utf8PathBuf::from("/other")]
    }

    #[test]
    fn test_resolve_root_uses_first_folder() {
        let settings = SettingsLayer::new().with("root", json!(["app", "assets", "javascripts"]));
        let root = resolve_root(&folders(), &settings).unwrap();
        assert_eq!(root, "/p/app/assets/javascripts");
    }

    #[test]
    fn test_resolve_root_empty_segments() {
        let settings = SettingsLayer::new().with("root", json!([]));
        assert_eq!(resolve_root(&folders(), &settings).unwrap(), "/p");
    }

    #[test]
    fn test_resolve_root_without_folders() {
        let settings = SettingsLayer::defaults().unwrap();
        let err = resolve_root(&[], &settings).unwrap_err();
        assert!(matches!(err, NavError::NoProjectRoot));
    }

    #[test]
    fn test_resolve_root_without_setting() {
        let err = resolve_root(&folders(), &SettingsLayer::new()).unwrap_err();
        assert!(err.is_silent());
    }

    #[test]
    fn test_resolve_category() {
        let settings = SettingsLayer::new().with("models_location", json!(["data", "models"]));
        let path = resolve_category(Utf8Path::new("/p/app"), Category::Models, &settings).unwrap();
        assert_eq!(path, "/p/app/data/models");

        let err =
            resolve_category(Utf8Path::new("/p/app"), Category::Views, &settings).unwrap_err();
        assert!(matches!(err, NavError::MissingCategoryPath(Category::Views)));
    }

    #[test]
    fn test_resolve_category_wrong_shape() {
        let settings = SettingsLayer::new().with("views_location", json!(3));
        let err =
            resolve_category(Utf8Path::new("/p"), Category::Views, &settings).unwrap_err();
        assert!(matches!(err, NavError::Config(_)));
        assert!(!err.is_silent());
    }

    #[test]
    fn test_resolve_all_skips_unusable() {
        let settings = SettingsLayer::new()
            .with("models_location", json!(["models"]))
            .with("views_location", json!(3))
            .with("templates_location", json!("templates"));
        let resolved = resolve_all(Utf8Path::new("/p"), &settings);
        assert_eq!(
            resolved,
            vec![
                (Category::Models, Utf8PathBuf::from("/p/models")),
                (Category::Templates, Utf8PathBuf::from("/p/templates")),
            ]
        );
    }
}
