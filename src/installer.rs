use std::collections::HashSet;

use crate::error::Result;
use crate::model::config::InstallerConfig;
use crate::model::file_tree::FileTree;
use crate::model::workspace::Workspace;
use crate::msg::{Outcome, Step};
use crate::patch::{index_html, root_import, scaffold, stylesheet};

#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    pub project: Option<String>,
    pub skip: HashSet<Step>,
}

#[derive(Debug, Clone)]
pub struct Report {
    pub project: String,
    pub entries: Vec<(Step, Outcome)>,
}

impl Report {
    pub fn outcomes(&self, step: Step) -> impl Iterator<Item = &Outcome> {
        self.entries
            .iter()
            .filter(move |(s, _)| *s == step)
            .map(|(_, outcome)| outcome)
    }

    pub fn applied_count(&self) -> usize {
        self.entries.iter().filter(|(_, o)| o.is_applied()).count()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Outcome> {
        self.entries
            .iter()
            .map(|(_, outcome)| outcome)
            .filter(|outcome| outcome.is_warning())
    }

    pub fn messages(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "📦 Adding the BxDesign library to the project: {}",
            self.project
        )];
        lines.extend(
            self.entries
                .iter()
                .map(|(step, outcome)| format!("[{}] {outcome}", step.label())),
        );
        lines
    }
}

fn enabled(step: Step, options: &InstallOptions, config: &InstallerConfig) -> bool {
    let configured = match step {
        Step::RootImport => config.steps.root_import,
        Step::IndexDocument => config.steps.index_html,
        Step::StyleScaffold => config.steps.scaffold,
        Step::StylesheetImports => config.steps.stylesheet,
    };
    configured && !options.skip.contains(&step)
}

/// Enable the library in one project of the workspace held by `tree`.
///
/// Workspace and project errors abort before any file is written. Structural
/// problems inside a step are reported as warnings and the run continues.
pub fn install_into(
    tree: &mut dyn FileTree,
    options: &InstallOptions,
    config: &InstallerConfig,
) -> Result<Report> {
    let workspace = Workspace::load(&*tree)?;
    let project = workspace.resolve(options.project.as_deref())?.clone();

    tracing::info!(
        "adding BxDesign to project {} (source root {})",
        project.name,
        project.source_root
    );

    let mut report = Report {
        project: project.name.clone(),
        entries: Vec::new(),
    };

    for step in Step::ALL {
        if !enabled(step, options, config) {
            tracing::debug!("step {} disabled", step.label());
            continue;
        }

        let outcomes = match step {
            Step::RootImport => root_import::apply(tree, &project)?,
            Step::IndexDocument => index_html::apply(tree, &project, &config.fonts)?,
            Step::StyleScaffold => scaffold::apply(tree, &project)?,
            Step::StylesheetImports => stylesheet::apply(tree, &project)?,
        };
        report
            .entries
            .extend(outcomes.into_iter().map(|outcome| (step, outcome)));
    }

    tracing::info!(
        "finished with {} changes, {} warnings",
        report.applied_count(),
        report.warnings().count()
    );

    Ok(report)
}
