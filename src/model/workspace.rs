use serde::Deserialize;
use std::collections::BTreeMap;

use crate::error::{InstallError, Result};
use crate::model::file_tree::{FileTree, join};

pub const WORKSPACE_FILE: &str = "angular.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    pub name: String,
    pub root: String,
    pub source_root: String,
}

#[derive(Debug, Clone, Default)]
pub struct Workspace {
    pub default_project: Option<String>,
    pub projects: BTreeMap<String, ProjectDescriptor>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorkspaceFile {
    #[serde(default)]
    default_project: Option<String>,
    #[serde(default)]
    projects: BTreeMap<String, ProjectEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectEntry {
    #[serde(default)]
    root: String,
    #[serde(default)]
    source_root: Option<String>,
}

impl Workspace {
    /// Load the manifest from the tree. Fails before anything is touched.
    pub fn load(tree: &dyn FileTree) -> Result<Self> {
        if !tree.exists(WORKSPACE_FILE) {
            return Err(InstallError::WorkspaceMissing);
        }
        let raw = tree.read(WORKSPACE_FILE)?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let file: WorkspaceFile = serde_json::from_str(raw)?;

        let projects = file
            .projects
            .into_iter()
            .map(|(name, entry)| {
                let source_root = entry
                    .source_root
                    .unwrap_or_else(|| join(&entry.root, "src"));
                let descriptor = ProjectDescriptor {
                    name: name.clone(),
                    root: entry.root,
                    source_root,
                };
                (name, descriptor)
            })
            .collect();

        Ok(Self {
            default_project: file.default_project,
            projects,
        })
    }

    /// Project names in ascending order.
    pub fn available(&self) -> Vec<String> {
        // BTreeMap keys are already sorted.
        self.projects.keys().cloned().collect()
    }

    /// Pick the target project: the requested one, or the declared default.
    /// A blank name counts as no name.
    pub fn resolve(&self, requested: Option<&str>) -> Result<&ProjectDescriptor> {
        match requested.filter(|name| !name.trim().is_empty()) {
            None => self
                .default_project
                .as_deref()
                .and_then(|name| self.projects.get(name))
                .ok_or_else(|| InstallError::NoDefaultProject {
                    available: self.available(),
                }),
            Some(name) => self
                .projects
                .get(name)
                .ok_or_else(|| InstallError::ProjectNotFound {
                    name: name.to_string(),
                    available: self.available(),
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::file_tree::MemoryTree;

    const MANIFEST: &str = r#"{
        "version": 1,
        "defaultProject": "app",
        "projects": {
            "lib": { "root": "projects/lib", "sourceRoot": "projects/lib/src", "projectType": "library" },
            "app": { "root": "", "sourceRoot": "src", "projectType": "application" }
        }
    }"#;

    #[test]
    fn resolves_default_project_when_none_requested() {
        let workspace = Workspace::parse(MANIFEST).unwrap();
        let project = workspace.resolve(None).unwrap();

        assert_eq!(project.name, "app");
        assert_eq!(project.source_root, "src");
    }

    #[test]
    fn resolves_requested_project() {
        let workspace = Workspace::parse(MANIFEST).unwrap();
        let project = workspace.resolve(Some("lib")).unwrap();

        assert_eq!(project.root, "projects/lib");
        assert_eq!(project.source_root, "projects/lib/src");
    }

    #[test]
    fn resolution_is_case_sensitive() {
        let workspace = Workspace::parse(MANIFEST).unwrap();
        let err = workspace.resolve(Some("App")).unwrap_err();

        match err {
            InstallError::ProjectNotFound { name, available } => {
                assert_eq!(name, "App");
                assert_eq!(available, vec!["app", "lib"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_default_lists_projects_sorted() {
        let workspace =
            Workspace::parse(r#"{ "projects": { "zeta": {}, "lib": {}, "alpha": {} } }"#).unwrap();
        let err = workspace.resolve(None).unwrap_err();

        match err {
            InstallError::NoDefaultProject { available } => {
                assert_eq!(available, vec!["alpha", "lib", "zeta"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn default_naming_unknown_project_is_no_default() {
        let workspace =
            Workspace::parse(r#"{ "defaultProject": "gone", "projects": { "lib": {} } }"#).unwrap();

        assert!(matches!(
            workspace.resolve(None),
            Err(InstallError::NoDefaultProject { .. })
        ));
    }

    #[test]
    fn resolution_is_deterministic() {
        let workspace = Workspace::parse(MANIFEST).unwrap();

        assert_eq!(workspace.resolve(None).unwrap(), workspace.resolve(None).unwrap());
        let first = workspace.resolve(Some("x")).unwrap_err().to_string();
        let second = workspace.resolve(Some("x")).unwrap_err().to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn blank_project_name_falls_back_to_default() {
        let workspace = Workspace::parse(MANIFEST).unwrap();

        assert_eq!(workspace.resolve(Some("")).unwrap().name, "app");
        assert_eq!(workspace.resolve(Some("  ")).unwrap().name, "app");
    }

    #[test]
    fn source_root_defaults_under_root() {
        let workspace =
            Workspace::parse(r#"{ "projects": { "web": { "root": "projects/web" }, "app": {} } }"#)
                .unwrap();

        assert_eq!(workspace.projects["web"].source_root, "projects/web/src");
        assert_eq!(workspace.projects["app"].source_root, "src");
    }

    #[test]
    fn load_fails_without_manifest() {
        let tree = MemoryTree::new();
        assert!(matches!(
            Workspace::load(&tree),
            Err(InstallError::WorkspaceMissing)
        ));
    }

    #[test]
    fn load_reports_invalid_json() {
        let tree = MemoryTree::new().with_file(WORKSPACE_FILE, "{ not json");
        assert!(matches!(
            Workspace::load(&tree),
            Err(InstallError::WorkspaceInvalid(_))
        ));
    }
}
