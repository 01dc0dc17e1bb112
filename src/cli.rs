use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use bx_add::msg::Step;

#[derive(Clone, Debug, Parser)]
#[command(name = "bx-add", version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Project to install into. Defaults to the workspace's default project.
    #[arg(short, long)]
    pub project: Option<String>,

    /// Workspace directory containing angular.json.
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Skip a step. May be given more than once.
    #[arg(long, value_enum)]
    pub skip: Vec<SkipStep>,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SkipStep {
    RootImport,
    Index,
    Scaffold,
    Styles,
}

impl From<SkipStep> for Step {
    fn from(value: SkipStep) -> Self {
        match value {
            SkipStep::RootImport => Step::RootImport,
            SkipStep::Index => Step::IndexDocument,
            SkipStep::Scaffold => Step::StyleScaffold,
            SkipStep::Styles => Step::StylesheetImports,
        }
    }
}
