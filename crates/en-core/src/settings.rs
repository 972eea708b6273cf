//! Layered navigation settings.
//!
//! Settings are flat JSON objects. Two scopes are consulted, in order:
//!
//! 1. **Project scope**: settings attached to the current project, used only
//!    when present *and* containing the requested key.
//! 2. **User/default scope**: the compiled defaults ([`DEFAULT_SETTINGS`])
//!    with the user's settings file merged over them key by key.
//!
//! A key missing from the project scope always falls through to the
//! user/default scope.
//!
//! # Recognized keys
//!
//! | Key | Shape | Meaning |
//! |-----|-------|---------|
//! | `root` | path segments | Application root, relative to the first project folder |
//! | `{category}_location` | path segments | Category directory, relative to the root |
//! | `application_file` | regex | Name of the application entry file in the root |

use camino::Utf8Path;
use serde_json::Value;
use tracing::debug;

use crate::error::ConfigError;
use crate::hash::FxHashMap;

/// The compiled-in default settings document.
pub const DEFAULT_SETTINGS: &str = include_str!("../default-settings.json");

/// Read access to navigation settings.
///
/// The typed helpers are provided on top of [`setting`](Self::setting), so
/// implementors only decide where a raw value comes from.
pub trait SettingsProvider {
    /// Returns the raw value for `key`, if any scope defines it.
    fn setting(&self, key: &str) -> Option<&Value>;

    /// Returns `key` as a list of path segments.
    ///
    /// A bare string is accepted as a single segment; `null` is treated as
    /// absent.
    fn path_segments(&self, key: &str) -> Result<Option<Vec<String>>, ConfigError> {
        match self.setting(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(segment)) => Ok(Some(vec![segment.clone()])),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str().map(str::to_owned).ok_or_else(|| {
                        ConfigError::invalid_value(key, "path segments must be strings")
                    })
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Some),
            Some(_) => Err(ConfigError::invalid_value(
                key,
                "expected an array of path segments",
            )),
        }
    }

    /// Returns `key` as a string.
    fn string(&self, key: &str) -> Result<Option<&str>, ConfigError> {
        match self.setting(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(value)) => Ok(Some(value)),
            Some(_) => Err(ConfigError::invalid_value(key, "expected a string")),
        }
    }
}

/// One scope of settings: a flat map from key to JSON value.
///
/// # Examples
///
/// ```
/// use en_core::{SettingsLayer, SettingsProvider};
///
/// let defaults = SettingsLayer::defaults()?;
/// let segments = defaults.path_segments("models_location")?;
/// assert_eq!(segments, Some(vec!["models".to_owned()]));
/// # Ok::<(), en_core::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsLayer {
    values: FxHashMap<String, Value>,
}

impl SettingsLayer {
    /// Creates an empty layer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the compiled-in defaults.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::from_json_str(DEFAULT_SETTINGS)
    }

    /// Builds a layer from a JSON object. Returns `None` for any other value.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self {
                values: map.into_iter().collect(),
            }),
            _ => None,
        }
    }

    /// Parses a layer from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
            .ok_or_else(|| ConfigError::invalid_value("<document>", "expected a JSON object"))
    }

    /// Reads a layer from a JSON file.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let value: Value = serde_json::from_str(&text)?;
        let layer =
            Self::from_value(value).ok_or_else(|| ConfigError::NotAnObject(path.to_owned()))?;
        debug!(path = %path, keys = layer.len(), "Loaded settings file");
        Ok(layer)
    }

    /// Sets `key`, returning the layer for chaining.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Merges `other` over this layer; keys in `other` win.
    pub fn merge(&mut self, other: Self) {
        self.values.extend(other.values);
    }

    /// Returns the raw value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Returns `true` if this layer defines `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns the number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the layer defines no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SettingsProvider for SettingsLayer {
    fn setting(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

/// Project settings layered over user/default settings.
///
/// # Examples
///
/// ```
/// use en_core::{LayeredSettings, SettingsLayer, SettingsProvider};
///
/// let user = SettingsLayer::new().with("root", "app");
/// let project = SettingsLayer::new().with("models_location", "models");
/// let settings = LayeredSettings::new(Some(project), user);
///
/// // Absent from the project scope, so it falls through.
/// assert_eq!(settings.string("root")?, Some("app"));
/// # Ok::<(), en_core::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayeredSettings {
    project: Option<SettingsLayer>,
    user: SettingsLayer,
}

impl LayeredSettings {
    /// Layers `project` (if any) over `user`.
    #[must_use]
    pub const fn new(project: Option<SettingsLayer>, user: SettingsLayer) -> Self {
        Self { project, user }
    }

    /// Returns the project scope, if one was found.
    #[must_use]
    pub const fn project(&self) -> Option<&SettingsLayer> {
        self.project.as_ref()
    }

    /// Returns the user/default scope.
    #[must_use]
    pub const fn user(&self) -> &SettingsLayer {
        &self.user
    }
}

impl SettingsProvider for LayeredSettings {
    fn setting(&self, key: &str) -> Option<&Value> {
        self.project
            .as_ref()
            .and_then(|project| project.get(key))
            .or_else(|| self.user.get(key))
    }
}
