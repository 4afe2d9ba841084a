//! README rendering.
//!
//! The README is the only generated file with content. Its body comes from
//! a fixed template with `{{VARIABLE}}` placeholders; the wording is free to
//! change, but the rendered text always carries the category, the name and
//! the literal base path.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::{entities::feature_name::FeatureName, value_objects::FeatureCategory};

/// File name written at the root of every generated feature.
pub const README_FILE_NAME: &str = "README.md";

/// Built-in README template.
pub const README_TEMPLATE: &str = "# {{CATEGORY}} {{NAME}}

Auto-generated {{CATEGORY}} named \"{{NAME}}\".

Path:
{{BASE_PATH}}
";

/// Context for README rendering.
///
/// ## Built-in Variables
///
/// | Variable | Example |
/// |----------|---------|
/// | `CATEGORY` | "gateway" |
/// | `NAME` | "api" |
/// | `BASE_PATH` | "gateways/gateway-api" |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(category: FeatureCategory, name: &FeatureName, base_path: &Path) -> Self {
        let mut vars = HashMap::new();
        vars.insert("CATEGORY".to_string(), category.as_str().to_string());
        vars.insert("NAME".to_string(), name.as_str().to_string());
        // Forward slashes on every platform so the README reads the same
        // wherever it was generated.
        vars.insert("BASE_PATH".to_string(), display_path(base_path));

        Self { variables: vars }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Replace `{{VARIABLE}}` placeholders in a single left-to-right pass.
    ///
    /// - `{{UNKNOWN}}` → left as-is
    /// - repeated placeholders → all replaced
    /// - substituted values are never re-scanned, so a name containing
    ///   `{{CATEGORY}}` renders literally
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];

            let value = after
                .find("}}")
                .and_then(|end| self.get(&after[..end]).map(|v| (v, end)));

            match value {
                Some((value, end)) => {
                    out.push_str(value);
                    rest = &after[end + 2..];
                }
                None => {
                    out.push('{');
                    rest = &rest[start + 1..];
                }
            }
        }
        out.push_str(rest);

        out
    }
}

/// Render a relative path with `/` separators.
pub fn display_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
