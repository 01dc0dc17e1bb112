use crate::error::Result;
use crate::model::file_tree::{FileTree, join};
use crate::model::workspace::ProjectDescriptor;
use crate::msg::Outcome;

pub const DIRECTIVES: [&str; 4] = [
    "@use 'bx-design/styles' as bx;",
    "@use './styles/palette' as palette;",
    "@use './styles/typography' as typography;",
    "@include bx.core(palette.$palette, typography.$typography);",
];

/// Prepend the library directives to `<sourceRoot>/styles.scss`.
///
/// This step has no idempotence check: a re-run prepends the block again.
/// When that happens a warning is reported alongside the change.
pub fn apply(tree: &mut dyn FileTree, project: &ProjectDescriptor) -> Result<Vec<Outcome>> {
    let path = join(&project.source_root, "styles.scss");
    let Some(current) = tree.read_optional(&path)? else {
        tracing::debug!("{path} not found, skipping style directives");
        return Ok(vec![Outcome::Skipped(format!("{path} not found"))]);
    };

    let already_present = DIRECTIVES.iter().all(|line| current.contains(line));

    let mut text = DIRECTIVES.join("\n");
    text.push('\n');
    text.push_str(&current);
    tree.overwrite(&path, &text)?;

    tracing::info!("prepended style directives to {path}");
    let mut outcomes = vec![Outcome::Applied(format!("Added style directives to {path}"))];
    if already_present {
        tracing::warn!("{path} already contained the style directives");
        outcomes.push(Outcome::Warning(format!(
            "{path} already contained the style directives, they are now duplicated"
        )));
    }

    Ok(outcomes)
}
