use regex::Regex;
use std::sync::LazyLock;

use crate::error::Result;
use crate::model::file_tree::{FileTree, join};
use crate::model::workspace::ProjectDescriptor;
use crate::msg::Outcome;

pub const MODULE_NAME: &str = "BxDesignModule";
pub const MODULE_IMPORT: &str = "import { BxDesignModule } from 'bx-design';";
const PROVIDERS_IMPORT: &str = "import { importProvidersFrom } from '@angular/core';";
const PROVIDER_ENTRY: &str = "importProvidersFrom(BxDesignModule)";

static MODULE_IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s*\{[^}]*\bBxDesignModule\b[^}]*\}\s*from\s*['"]bx-design['"]"#)
        .expect("valid module import regex")
});
static PROVIDERS_IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s*\{[^}]*\bimportProvidersFrom\b[^}]*\}\s*from\s*['"]@angular/core['"]"#)
        .expect("valid importProvidersFrom regex")
});
static PROVIDERS_ARRAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"providers\s*:\s*\[").expect("valid providers regex"));
static IMPORTS_ARRAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"imports\s*:\s*\[").expect("valid imports regex"));
static MODULE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bBxDesignModule\b").expect("valid module name regex"));

/// How the application bootstraps, which decides where the module goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppShape {
    /// `app/app.config.ts` with a `providers` array.
    Standalone,
    /// `app/app.module.ts` with an `imports` array.
    NgModule,
}

impl AppShape {
    fn file_name(self) -> &'static str {
        match self {
            AppShape::Standalone => "app/app.config.ts",
            AppShape::NgModule => "app/app.module.ts",
        }
    }
}

/// Contents of the array whose opening `[` ends at `start`, up to its
/// matching `]`. Nested brackets are skipped. `None` if it never closes.
fn array_body(text: &str, start: usize) -> Option<&str> {
    let mut depth = 1usize;
    for (offset, ch) in text[start..].char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset]);
                }
            }
            _ => {}
        }
    }
    None
}

fn module_in_imports(text: &str) -> bool {
    IMPORTS_ARRAY_RE
        .find(text)
        .and_then(|m| array_body(text, m.end()))
        .is_some_and(|body| MODULE_NAME_RE.is_match(body))
}

/// Register the module in `source`. `None` means the array anchor is missing.
pub fn register(source: &str, shape: AppShape) -> Option<String> {
    let mut text = source.to_string();

    let (anchor_re, entry, entry_present) = match shape {
        AppShape::Standalone => (
            &PROVIDERS_ARRAY_RE,
            format!("{PROVIDER_ENTRY}, "),
            text.contains(PROVIDER_ENTRY),
        ),
        AppShape::NgModule => (
            &IMPORTS_ARRAY_RE,
            format!("{MODULE_NAME}, "),
            module_in_imports(&text),
        ),
    };

    if !entry_present {
        let at = anchor_re.find(&text)?.end();
        text.insert_str(at, &entry);
    }

    let mut header = String::new();
    if shape == AppShape::Standalone && !PROVIDERS_IMPORT_RE.is_match(&text) {
        header.push_str(PROVIDERS_IMPORT);
        header.push('\n');
    }
    if !MODULE_IMPORT_RE.is_match(&text) {
        header.push_str(MODULE_IMPORT);
        header.push('\n');
    }
    text.insert_str(0, &header);

    Some(text)
}

pub fn apply(tree: &mut dyn FileTree, project: &ProjectDescriptor) -> Result<Vec<Outcome>> {
    for shape in [AppShape::Standalone, AppShape::NgModule] {
        let path = join(&project.source_root, shape.file_name());
        let Some(source) = tree.read_optional(&path)? else {
            continue;
        };

        let outcome = match register(&source, shape) {
            None => {
                tracing::warn!("{path}: no array to register {MODULE_NAME} in");
                Outcome::Warning(format!(
                    "{path} has no {} array, {MODULE_NAME} not registered",
                    match shape {
                        AppShape::Standalone => "providers",
                        AppShape::NgModule => "imports",
                    }
                ))
            }
            Some(text) if text == source => {
                tracing::debug!("{path}: {MODULE_NAME} already registered");
                Outcome::Skipped(format!("{MODULE_NAME} already registered in {path}"))
            }
            Some(text) => {
                tree.overwrite(&path, &text)?;
                tracing::info!("{path}: registered {MODULE_NAME}");
                Outcome::Applied(format!("Registered {MODULE_NAME} in {path}"))
            }
        };
        return Ok(vec![outcome]);
    }

    tracing::debug!("no app config or root module under {}", project.source_root);
    Ok(vec![Outcome::Skipped(format!(
        "no app.config.ts or app.module.ts under {}",
        project.source_root
    ))])
}
