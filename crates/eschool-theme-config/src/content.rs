//! Content pattern compilation.
//!
//! Patterns use globset syntax with `*` kept inside a single path segment:
//! `**/` spans any number of directories, `{a,b}` gives alternatives and
//! `[abc]` / `[!abc]` are character classes. A leading `./` is ignored and
//! paths are matched relative to the project root with `/` separators.

use globset::{Glob, GlobBuilder};

/// Compile a content pattern.
pub fn compile_pattern(pattern: &str) -> Result<Glob, globset::Error> {
    let body = pattern.strip_prefix("./").unwrap_or(pattern);
    GlobBuilder::new(body).literal_separator(true).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(pattern: &str, path: &str) -> bool {
        compile_pattern(pattern).unwrap().compile_matcher().is_match(path)
    }

    #[test]
    fn double_star_spans_directories() {
        assert!(matches("./**/*.py", "manage.py"));
        assert!(matches("./**/*.py", "academic/views.py"));
        assert!(matches("./**/*.py", "finance/api/v1/urls.py"));
        assert!(!matches("./**/*.py", "static/app.js"));
        assert!(matches("./static/**", "static/js/app.js"));
    }

    #[test]
    fn single_star_stays_in_segment() {
        assert!(matches("./*/templates/**/*.html", "academic/templates/a/b.html"));
        assert!(matches("./*/templates/**/*.html", "accounts/templates/login.html"));
        assert!(!matches("./*/templates/**/*.html", "templates/base.html"));
        assert!(!matches("./*/templates/**/*.html", "a/b/templates/x.html"));
    }

    #[test]
    fn double_star_inside_segment_does_not_cross_directories() {
        assert!(matches("./static/**.js", "static/app.js"));
        assert!(!matches("./static/**.js", "static/a/b.js"));
    }

    #[test]
    fn braces_and_classes() {
        assert!(matches("./static/**/*.{js,ts}", "static/app.ts"));
        assert!(matches("./static/**/*.{js,ts}", "static/vendor/lib.js"));
        assert!(!matches("./static/**/*.{js,ts}", "static/app.css"));
        assert!(matches("./v[0-9].py", "v2.py"));
        assert!(!matches("./v[!0-9].py", "v2.py"));
        assert!(matches("./?.py", "a.py"));
        assert!(!matches("./?.py", "ab.py"));
    }

    #[test]
    fn rejects_unbalanced_patterns() {
        assert!(compile_pattern("./{a,b/*.html").is_err());
        assert!(compile_pattern("./[ab.html").is_err());
    }
}
