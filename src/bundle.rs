// src/bundle.rs
//! Concatenates the browser scripts into a single bundle.

use crate::constants::{SOURCE_SCRIPTS, STRICT_MODE_DIRECTIVE};
use crate::error::AppError;
use std::fs;
use std::path::{Path, PathBuf};

/// Ordered list of scripts that make up the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceList(Vec<PathBuf>);

impl SourceList {
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self(paths.into_iter().map(Into::into).collect())
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.0
    }
}

impl Default for SourceList {
    fn default() -> Self {
        Self::new(SOURCE_SCRIPTS)
    }
}

/// Concatenated, directive-free script text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bundle(String);

impl Bundle {
    /// Wraps already-assembled text, stripping the directive.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self(strip_directive(&text.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Removes every occurrence of `'use strict';`, wherever it appears.
pub fn strip_directive(text: &str) -> String {
    text.replace(STRICT_MODE_DIRECTIVE, "")
}

/// Reads every source under `root` in order and builds the bundle.
///
/// Each file contributes its contents followed by a single newline. The
/// first unreadable file aborts the whole bundle.
pub fn assemble_bundle(root: &Path, sources: &SourceList) -> Result<Bundle, AppError> {
    let mut text = String::new();

    for relative in sources.paths() {
        let path = root.join(relative);
        let contents = fs::read_to_string(&path).map_err(|source| AppError::SourceUnreadable {
            path: relative.clone(),
            source,
        })?;
        log::debug!("Read {} ({} bytes)", relative.display(), contents.len());
        text.push_str(&contents);
        text.push('\n');
    }

    let before = text.len();
    let bundle = Bundle::from_text(text);
    let removed = (before - bundle.len()) / STRICT_MODE_DIRECTIVE.len();
    log::info!(
        "Bundled {} scripts into {} bytes ({} strict-mode directives removed)",
        sources.paths().len(),
        bundle.len(),
        removed
    );
    if bundle.is_empty() {
        log::warn!("Every source script is empty");
    }

    Ok(bundle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write_sources(root: &Path, sources: &SourceList, bodies: &[&str]) {
        for (path, body) in sources.paths().iter().zip(bodies) {
            let full = root.join(path);
            fs::create_dir_all(full.parent().unwrap()).unwrap();
            fs::write(full, body).unwrap();
        }
    }

    #[test]
    fn test_default_sources_keep_load_order() {
        let sources = SourceList::default();
        assert_eq!(sources.paths().len(), 6);
        assert_eq!(sources.paths()[0], PathBuf::from("public/jsfxr.js"));
        assert_eq!(sources.paths()[5], PathBuf::from("public/game.js"));
    }

    #[test]
    fn test_strip_directive_is_global() {
        let text = "'use strict';\nvar s = \"'use strict';\"; // 'use strict';\n";
        assert_eq!(strip_directive(text), "\nvar s = \"\"; // \n");
        assert_eq!(strip_directive("\"use strict\";"), "\"use strict\";");
    }

    #[test]
    fn test_assemble_concatenates_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let sources = SourceList::default();
        let bodies = [
            "'use strict';\nconst a = 1;",
            "'use strict';\nconst b = 2;",
            "'use strict';\nconst c = 3;",
            "'use strict';\nconst d = 4;",
            "'use strict';\nconst e = 5;",
            "'use strict';\nconst f = 6;",
        ];
        write_sources(dir.path(), &sources, &bodies);

        let bundle = assemble_bundle(dir.path(), &sources).unwrap();

        assert_eq!(
            bundle.as_str(),
            "\nconst a = 1;\n\nconst b = 2;\n\nconst c = 3;\n\nconst d = 4;\n\nconst e = 5;\n\nconst f = 6;\n"
        );
        assert!(!bundle.as_str().contains(STRICT_MODE_DIRECTIVE));
    }

    #[test]
    fn test_assemble_fails_on_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let sources = SourceList::new(["a.js", "missing.js"]);
        fs::write(dir.path().join("a.js"), "var a;").unwrap();

        let err = assemble_bundle(dir.path(), &sources).unwrap_err();
        match err {
            AppError::SourceUnreadable { path, .. } => {
                assert_eq!(path, PathBuf::from("missing.js"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
