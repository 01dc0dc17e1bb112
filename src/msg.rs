use std::fmt;

/// Installer steps, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    RootImport,
    IndexDocument,
    StyleScaffold,
    StylesheetImports,
}

impl Step {
    pub const ALL: [Step; 4] = [
        Step::RootImport,
        Step::IndexDocument,
        Step::StyleScaffold,
        Step::StylesheetImports,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Step::RootImport => "root import",
            Step::IndexDocument => "index.html",
            Step::StyleScaffold => "style scaffold",
            Step::StylesheetImports => "styles.scss",
        }
    }
}

/// What happened during a step. Warnings never abort the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied(String),
    Skipped(String),
    Warning(String),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Outcome::Warning(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Applied(text) => write!(f, "✔ {text}"),
            Outcome::Skipped(text) => write!(f, "· {text}"),
            Outcome::Warning(text) => write!(f, "⚠ {text}"),
        }
    }
}
