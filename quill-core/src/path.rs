//! URL path template rewriting.

use std::sync::LazyLock;

use regex::Regex;

static PATH_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[a-zA-Z_]+\}").expect("valid path parameter regex"));

/// Rewrites `{param}` placeholders into a profile's interpolation syntax.
///
/// Each placeholder becomes `prefix + transform(param) + suffix`. Literal
/// text between placeholders is copied byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathTemplater {
    prefix: &'static str,
    suffix: &'static str,
}

impl PathTemplater {
    /// Create a templater that wraps parameter names in `prefix` and `suffix`.
    pub const fn new(prefix: &'static str, suffix: &'static str) -> Self {
        Self { prefix, suffix }
    }

    /// Rewrite every well-formed placeholder in `path`.
    ///
    /// Malformed or unterminated placeholders are left in place as literal
    /// text.
    pub fn normalize(&self, path: &str, transform: impl Fn(&str) -> String) -> String {
        let mut out = String::with_capacity(path.len());
        let mut cursor = 0;

        for token in PATH_PARAM.find_iter(path) {
            out.push_str(&path[cursor..token.start()]);

            let param = &path[token.start() + 1..token.end() - 1];
            out.push_str(self.prefix);
            out.push_str(&transform(param));
            out.push_str(self.suffix);

            cursor = token.end();
        }

        out.push_str(&path[cursor..]);
        out
    }
}

/// Returns true if `path` contains braces that are not part of a well-formed
/// `{param}` placeholder.
pub fn has_malformed_tokens(path: &str) -> bool {
    PATH_PARAM
        .replace_all(path, "")
        .chars()
        .any(|c| c == '{' || c == '}')
}
