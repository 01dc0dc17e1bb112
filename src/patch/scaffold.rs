use crate::error::{InstallError, Result};
use crate::model::file_tree::{FileTree, join};
use crate::model::workspace::ProjectDescriptor;
use crate::msg::Outcome;

pub const STYLES_DIR: &str = "styles";

const PALETTE: &str = r#"// BxDesign palette. Adjust the tokens to match your brand.
$palette: (
  primary: #1f6feb,
  primary-contrast: #ffffff,
  secondary: #6e7781,
  secondary-contrast: #ffffff,
  success: #1a7f37,
  warning: #9a6700,
  danger: #cf222e,
  surface: #ffffff,
  on-surface: #1f2328,
  border: #d0d7de,
);
"#;

const TYPOGRAPHY: &str = r#"// BxDesign typography scale.
$typography: (
  font-family: ('Roboto', sans-serif),
  heading: (size: 1.5rem, weight: 500, line-height: 2rem),
  title: (size: 1.125rem, weight: 500, line-height: 1.5rem),
  body: (size: 1rem, weight: 400, line-height: 1.5rem),
  label: (size: 0.875rem, weight: 500, line-height: 1.25rem),
  caption: (size: 0.75rem, weight: 400, line-height: 1rem),
);
"#;

/// Templates written under `<sourceRoot>/styles`.
pub fn templates() -> [(&'static str, &'static str); 2] {
    [("_palette.scss", PALETTE), ("_typography.scss", TYPOGRAPHY)]
}

pub fn apply(tree: &mut dyn FileTree, project: &ProjectDescriptor) -> Result<Vec<Outcome>> {
    let dir = join(&project.source_root, STYLES_DIR);
    let mut outcomes = Vec::new();

    for (name, template) in templates() {
        let path = join(&dir, name);
        match tree.create(&path, template) {
            Ok(()) => {
                tracing::info!("created {path}");
                outcomes.push(Outcome::Applied(format!("Created {path}")));
            }
            Err(InstallError::FileConflict(_)) => {
                tracing::debug!("{path} already exists");
                outcomes.push(Outcome::Skipped(format!("{path} already exists")));
            }
            Err(err) => return Err(err),
        }
    }

    Ok(outcomes)
}
