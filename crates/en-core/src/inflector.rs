//! English noun inflection for naming conventions.
//!
//! Translates between the singular names of models (`post`) and the plural
//! names of controllers (`posts_controller`). The rules are the usual
//! ordered suffix rewrites: irregular words and uncountable nouns are checked
//! first, then the first matching suffix rule wins. Unknown forms fall
//! through to the generic `s` rules; inflection never fails.
//!
//! Snake-case compounds inflect on their last word, so `blog_post` becomes
//! `blog_posts`.
//!
//! # Examples
//!
//! ```
//! use en_core::inflector::{pluralize, singularize};
//!
//! assert_eq!(pluralize("post"), "posts");
//! assert_eq!(pluralize("category"), "categories");
//! assert_eq!(singularize("people"), "person");
//! assert_eq!(singularize(&pluralize("address")), "address");
//! ```

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

/// Plural rules, highest priority first.
const PLURAL_RULES: &[(&str, &str)] = &[
    (r"(?i)(quiz)$", "${1}zes"),
    (r"(?i)^(oxen)$", "${1}"),
    (r"(?i)^(ox)$", "${1}en"),
    (r"(?i)^(m|l)ice$", "${1}ice"),
    (r"(?i)^(m|l)ouse$", "${1}ice"),
    (r"(?i)(matr|vert|ind)(?:ix|ex)$", "${1}ices"),
    (r"(?i)(x|ch|ss|sh)$", "${1}es"),
    (r"(?i)([^aeiouy]|qu)y$", "${1}ies"),
    (r"(?i)(hive)$", "${1}s"),
    (r"(?i)(?:([^f])fe|([lr])f)$", "${1}${2}ves"),
    (r"(?i)sis$", "ses"),
    (r"(?i)([ti])a$", "${1}a"),
    (r"(?i)([ti])um$", "${1}a"),
    (r"(?i)(buffal|tomat)o$", "${1}oes"),
    (r"(?i)(bu)s$", "${1}ses"),
    (r"(?i)(alias|status)$", "${1}es"),
    (r"(?i)(octop|vir)i$", "${1}i"),
    (r"(?i)(octop|vir)us$", "${1}i"),
    (r"(?i)^(ax|test)is$", "${1}es"),
    (r"(?i)([^aeiou]us|[^aeiou]as)$", "${1}es"),
    (r"(?i)s$", "s"),
    (r"$", "s"),
];

/// Singular rules, highest priority first.
const SINGULAR_RULES: &[(&str, &str)] = &[
    (r"(?i)(database)s$", "${1}"),
    (r"(?i)(quiz)zes$", "${1}"),
    (r"(?i)(matr)ices$", "${1}ix"),
    (r"(?i)(vert|ind)ices$", "${1}ex"),
    (r"(?i)^(ox)en", "${1}"),
    (r"(?i)(alias|status)(es)?$", "${1}"),
    (r"(?i)(octop|vir)(us|i)$", "${1}us"),
    (r"(?i)^(a)x[ie]s$", "${1}xis"),
    (r"(?i)(cris|test)(is|es)$", "${1}is"),
    (r"(?i)(^|_)([dfhtw]oe)s$", "${1}${2}"),
    (r"(?i)(canoe|floe|oboe|sloe|tiptoe|shoe)s$", "${1}"),
    (r"(?i)(o)es$", "${1}"),
    (r"(?i)([^aeiou]us)es$", "${1}"),
    (r"(?i)(atl|canv)ases$", "${1}as"),
    (r"(?i)(bus)(es)?$", "${1}"),
    (r"(?i)^(m|l)ice$", "${1}ouse"),
    (r"(?i)(x|ch|ss|sh)es$", "${1}"),
    (r"(?i)(^|_)([dlpt])ies$", "${1}${2}ie"),
    (r"(?i)(brown|calor|cook|cut|good|hood|pix|rook)ies$", "${1}ie"),
    (r"(?i)(m)ovies$", "${1}ovie"),
    (r"(?i)(s)eries$", "${1}eries"),
    (r"(?i)([^aeiouy]|qu)ies$", "${1}y"),
    (r"(?i)([lr])ves$", "${1}f"),
    (r"(?i)(tive)s$", "${1}"),
    (r"(?i)(hive)s$", "${1}"),
    (r"(?i)([^f])ves$", "${1}fe"),
    (r"(?i)(^analy)(sis|ses)$", "${1}sis"),
    (
        r"(?i)((a)naly|(b)a|(d)iagno|(p)arenthe|(p)rogno|(s)ynop|(t)he)(sis|ses)$",
        "${1}sis",
    ),
    (r"(?i)([ti])a$", "${1}um"),
    (r"(?i)(n)ews$", "${1}ews"),
    (r"(?i)([^aeiou]us|(?:atl|canv)as)$", "${1}"),
    (r"(?i)(ss)$", "${1}"),
    (r"(?i)s$", ""),
];

/// Singular/plural pairs the suffix rules get wrong.
const IRREGULARS: &[(&str, &str)] = &[
    ("person", "people"),
    ("woman", "women"),
    ("man", "men"),
    ("child", "children"),
    ("sex", "sexes"),
    ("move", "moves"),
    ("zombie", "zombies"),
    ("abuse", "abuses"),
    ("excuse", "excuses"),
    ("fuse", "fuses"),
    ("muse", "muses"),
    ("ruse", "ruses"),
];

/// Nouns spelled the same in both numbers.
const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "jeans",
    "police",
];

struct Inflection {
    pattern: Regex,
    replacement: &'static str,
}

fn compile(rules: &[(&'static str, &'static str)]) -> Vec<Inflection> {
    rules
        .iter()
        .filter_map(|&(pattern, replacement)| match Regex::new(pattern) {
            Ok(pattern) => Some(Inflection { pattern, replacement }),
            Err(err) => {
                warn!(pattern, error = %err, "Skipping invalid inflection rule");
                None
            }
        })
        .collect()
}

static PLURALS: LazyLock<Vec<Inflection>> = LazyLock::new(|| compile(PLURAL_RULES));
static SINGULARS: LazyLock<Vec<Inflection>> = LazyLock::new(|| compile(SINGULAR_RULES));

/// Returns the plural form of `word`.
#[must_use]
pub fn pluralize(word: &str) -> String {
    if word.is_empty() || is_uncountable(word) {
        return word.to_owned();
    }
    if let Some(inflected) = inflect_irregular(word, |&(singular, plural)| (singular, plural)) {
        return inflected;
    }
    apply(&PLURALS, word)
}

/// Returns the singular form of `word`.
#[must_use]
pub fn singularize(word: &str) -> String {
    if word.is_empty() || is_uncountable(word) {
        return word.to_owned();
    }
    if let Some(inflected) = inflect_irregular(word, |&(singular, plural)| (plural, singular)) {
        return inflected;
    }
    apply(&SINGULARS, word)
}

fn apply(rules: &[Inflection], word: &str) -> String {
    rules
        .iter()
        .find(|rule| rule.pattern.is_match(word))
        .map_or_else(
            || word.to_owned(),
            |rule| rule.pattern.replace(word, rule.replacement).into_owned(),
        )
}

/// Returns the last word of a snake-case compound.
fn last_word(word: &str) -> &str {
    word.rsplit('_').next().unwrap_or(word)
}

fn is_uncountable(word: &str) -> bool {
    let last = last_word(word).to_ascii_lowercase();
    UNCOUNTABLE.contains(&last.as_str())
}

/// Rewrites an irregular last word. `direction` maps a table entry to
/// `(from, to)`. A word already in the target form is returned unchanged.
fn inflect_irregular(
    word: &str,
    direction: impl Fn(&(&'static str, &'static str)) -> (&'static str, &'static str),
) -> Option<String> {
    let last = last_word(word).to_ascii_lowercase();
    let prefix = &word[..word.len() - last.len()];

    IRREGULARS.iter().map(direction).find_map(|(from, to)| {
        if last == from {
            Some(format!("{prefix}{}", match_case(last_word(word), to)))
        } else if last == to {
            Some(word.to_owned())
        } else {
            None
        }
    })
}

/// Carries a leading capital over to the replacement.
fn match_case(original: &str, replacement: &str) -> String {
    if original.chars().next().is_some_and(char::is_uppercase) {
        let mut chars = replacement.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    } else {
        replacement.to_owned()
    }
}
