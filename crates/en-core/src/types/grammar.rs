//! Extension grammars distinguishing script files from templates.
//!
//! Two fixed regular languages cover every file the navigator lists:
//!
//! - **Script**: `js`, `coffee`, `js.coffee`, each optionally followed by `.erb`
//! - **Template**: `handlebars`, optionally followed by `.erb`

/// Extension alternatives for script files, without the leading dot.
pub const SCRIPT_EXTENSIONS: &str = r"(?:js|(?:js\.)?coffee)(?:\.erb)?";

/// Extension alternatives for template files, without the leading dot.
pub const TEMPLATE_EXTENSIONS: &str = r"handlebars(?:\.erb)?";

/// The filename grammar a category's files are written in.
///
/// # Examples
///
/// ```
/// use en_core::ExtensionGrammar;
///
/// assert_eq!(
///     ExtensionGrammar::Script.file_pattern(),
///     r"\.(?:js|(?:js\.)?coffee)(?:\.erb)?$"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionGrammar {
    /// JavaScript and CoffeeScript sources.
    Script,
    /// Handlebars templates.
    Template,
}

impl ExtensionGrammar {
    /// Returns the extension alternatives as a regex fragment (no leading dot,
    /// no anchors), for embedding in larger patterns.
    #[inline]
    #[must_use]
    pub const fn extensions(self) -> &'static str {
        match self {
            Self::Script => SCRIPT_EXTENSIONS,
            Self::Template => TEMPLATE_EXTENSIONS,
        }
    }

    /// Returns the filename-suffix pattern used when listing a directory.
    #[must_use]
    pub fn file_pattern(self) -> String {
        format!(r"\.{}$", self.extensions())
    }
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::*;

    fn matches(grammar: ExtensionGrammar, file_name: &str) -> bool {
        Regex::new(&grammar.file_pattern()).unwrap().is_match(file_name)
    }

    #[test]
    fn test_script_grammar() {
        let script = ExtensionGrammar::Script;
        assert!(matches(script, "post.js"));
        assert!(matches(script, "post.coffee"));
        assert!(matches(script, "post.js.coffee"));
        assert!(matches(script, "post.js.erb"));
        assert!(matches(script, "post.js.coffee.erb"));
        assert!(!matches(script, "post.jsx"));
        assert!(!matches(script, "post.handlebars"));
        assert!(!matches(script, "post_js"));
    }

    #[test]
    fn test_template_grammar() {
        let template = ExtensionGrammar::Template;
        assert!(matches(template, "post.handlebars"));
        assert!(matches(template, "post.handlebars.erb"));
        assert!(!matches(template, "post.hbs"));
        assert!(!matches(template, "post.js"));
    }

    #[test]
    fn test_file_pattern() {
        assert_eq!(
            ExtensionGrammar::Template.file_pattern(),
            r"\.handlebars(?:\.erb)?$"
        );
    }
}
