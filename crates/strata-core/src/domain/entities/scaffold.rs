use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{
    entities::{
        common::{Permissions, RelativePath},
        feature_name::FeatureName,
        layout::LayoutTemplate,
        readme::{README_FILE_NAME, README_TEMPLATE, RenderContext, display_path},
    },
    value_objects::FeatureCategory,
};

/// Caller-supplied input for one generation.
///
/// The name is kept raw here and validated when the request is planned, so
/// an invalid name is reported as a regular error rather than being
/// unrepresentable at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub category: FeatureCategory,
    pub name: String,
}

impl ScaffoldRequest {
    pub fn new(category: FeatureCategory, name: impl Into<String>) -> Self {
        Self {
            category,
            name: name.into(),
        }
    }
}

/// Everything a generation will do, computed without touching disk.
///
/// Paths are relative to the output root the service was built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    pub(crate) category: FeatureCategory,
    pub(crate) name: FeatureName,
    pub(crate) base_path: PathBuf,
    pub(crate) directories: Vec<RelativePath>,
    pub(crate) readme: String,
}

impl ScaffoldPlan {
    /// Resolve a validated name against a layout.
    pub fn build(layout: &LayoutTemplate, name: FeatureName) -> Self {
        let base_path = layout.base_path(&name);
        let readme =
            RenderContext::new(layout.category(), &name, &base_path).render(README_TEMPLATE);

        Self {
            category: layout.category(),
            name,
            base_path,
            directories: layout.directories().to_vec(),
            readme,
        }
    }

    pub fn category(&self) -> FeatureCategory {
        self.category
    }

    pub fn name(&self) -> &FeatureName {
        &self.name
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Template-relative directories in creation order.
    pub fn directories(&self) -> &[RelativePath] {
        &self.directories
    }

    pub fn readme_path(&self) -> PathBuf {
        self.base_path.join(README_FILE_NAME)
    }

    pub fn readme(&self) -> &str {
        &self.readme
    }

    pub const fn directory_permissions(&self) -> Permissions {
        Permissions::directory()
    }

    pub const fn file_permissions(&self) -> Permissions {
        Permissions::file()
    }

    /// Render a tree preview of the planned layout.
    ///
    /// ```text
    /// gateways/gateway-api/
    /// ├── cmd/
    /// ├── internal/
    /// │   └── domain/
    /// └── README.md
    /// ```
    pub fn render_tree(&self) -> String {
        let mut root = TreeNode::default();
        for dir in &self.directories {
            let mut node = &mut root;
            for segment in dir.segments() {
                node = node.child(segment);
            }
        }

        let mut out = format!("{}/\n", display_path(&self.base_path));
        let total = root.children.len() + 1;
        for (i, child) in root.children.iter().enumerate() {
            child.render(&mut out, "", i + 1 == total);
        }
        out.push_str("└── ");
        out.push_str(README_FILE_NAME);
        out.push('\n');
        out
    }

    pub(crate) fn into_result(self, created: Vec<RelativePath>) -> ScaffoldResult {
        ScaffoldResult {
            category: self.category,
            name: self.name.to_string(),
            base_path: self.base_path,
            created_directories: created.into_iter().map(RelativePath::into_path_buf).collect(),
            readme_written: true,
        }
    }
}

/// Directory tree in first-appearance order.
#[derive(Debug, Default)]
struct TreeNode {
    name: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    fn child(&mut self, name: String) -> &mut TreeNode {
        let index = match self.children.iter().position(|c| c.name == name) {
            Some(index) => index,
            None => {
                self.children.push(TreeNode {
                    name,
                    children: Vec::new(),
                });
                self.children.len() - 1
            }
        };
        &mut self.children[index]
    }

    fn render(&self, out: &mut String, prefix: &str, last: bool) {
        out.push_str(prefix);
        out.push_str(if last { "└── " } else { "├── " });
        out.push_str(&self.name);
        out.push_str("/\n");

        let child_prefix = format!("{prefix}{}", if last { "    " } else { "│   " });
        let count = self.children.len();
        for (i, child) in self.children.iter().enumerate() {
            child.render(out, &child_prefix, i + 1 == count);
        }
    }
}

/// Outcome of a successful generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldResult {
    pub category: FeatureCategory,
    pub name: String,
    /// Relative to the output root, e.g. `gateways/gateway-api`.
    pub base_path: PathBuf,
    /// Template-relative directories, in the order they were created.
    pub created_directories: Vec<PathBuf>,
    pub readme_written: bool,
}

impl ScaffoldResult {
    pub fn readme_path(&self) -> PathBuf {
        self.base_path.join(README_FILE_NAME)
    }
}
