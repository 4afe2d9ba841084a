//! Scaffold Service - the materializer.
//!
//! Coordinates one generation:
//! 1. Validate the feature name
//! 2. Look up the category's layout
//! 3. Create every layout directory under `{root}/{category}-{name}`
//! 4. Write the README
//!
//! Directory creation is idempotent; the README is always overwritten. The
//! first failure aborts the run.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{
        DomainError, DomainValidator as validator, FeatureCategory, LayoutRegistry,
        README_FILE_NAME, RelativePath, ScaffoldPlan, ScaffoldRequest, ScaffoldResult,
    },
    error::{StrataError, StrataResult},
};

/// What to do with directories already created when a run fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Leave everything on disk and return the first error.
    #[default]
    Abort,
    /// Remove the directories this run created (never pre-existing ones),
    /// then return the first error.
    Rollback,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    registry: LayoutRegistry,
    filesystem: Box<dyn Filesystem>,
    output_root: PathBuf,
    policy: FailurePolicy,
}

impl ScaffoldService {
    /// Create a service writing below `output_root`.
    pub fn new(
        registry: LayoutRegistry,
        filesystem: Box<dyn Filesystem>,
        output_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            registry,
            filesystem,
            output_root: output_root.into(),
            policy: FailurePolicy::default(),
        }
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.policy
    }

    pub fn registry(&self) -> &LayoutRegistry {
        &self.registry
    }

    /// Build a request from raw boundary strings.
    ///
    /// The name is checked before the category is parsed.
    pub fn request_from_raw(category: &str, name: &str) -> StrataResult<ScaffoldRequest> {
        validator::validate_name(name)?;
        let category = category.parse::<FeatureCategory>()?;
        Ok(ScaffoldRequest::new(category, name))
    }

    /// Compute what `generate` would do without touching the filesystem.
    #[instrument(skip_all, fields(category = %request.category, name = %request.name))]
    pub fn plan(&self, request: &ScaffoldRequest) -> StrataResult<ScaffoldPlan> {
        let name = validator::validate_name(&request.name)?;

        let layout = self.registry.lookup(request.category).ok_or_else(|| {
            DomainError::UnknownCategory {
                category: request.category.to_string(),
            }
        })?;

        let plan = ScaffoldPlan::build(&layout, name);
        debug!(base_path = %plan.base_path().display(), "Plan computed");
        Ok(plan)
    }

    /// Scaffold a feature.
    #[instrument(
        skip_all,
        fields(
            category = %request.category,
            name = %request.name,
            output_root = %self.output_root.display()
        )
    )]
    pub fn generate(&self, request: &ScaffoldRequest) -> StrataResult<ScaffoldResult> {
        let plan = self.plan(request)?;
        self.apply(plan)
    }

    /// Scaffold from raw strings, as received from a command line.
    pub fn generate_raw(&self, category: &str, name: &str) -> StrataResult<ScaffoldResult> {
        let request = Self::request_from_raw(category, name)?;
        self.generate(&request)
    }

    /// Materialize a plan.
    pub fn apply(&self, plan: ScaffoldPlan) -> StrataResult<ScaffoldResult> {
        info!(
            "Scaffolding {} '{}' at {}",
            plan.category(),
            plan.name(),
            plan.base_path().display()
        );

        let base = self.output_root.join(plan.base_path());
        let total = plan.directories().len();
        let mut created: Vec<RelativePath> = Vec::with_capacity(total);
        // Directories that did not exist before this run, parents first.
        let mut fresh: Vec<PathBuf> = Vec::new();
        if self.policy == FailurePolicy::Rollback {
            self.record_missing_root(&mut fresh);
        }

        for dir in plan.directories() {
            if self.policy == FailurePolicy::Rollback {
                self.record_missing(&plan.base_path().join(dir), &mut fresh);
            }

            let full = base.join(dir);
            debug!(dir = %dir, "Creating directory");

            if let Err(e) = self
                .filesystem
                .create_dir_all(&full, plan.directory_permissions())
            {
                return Err(self.fail(&plan, dir.as_path(), full, created.len(), e, &fresh));
            }
            created.push(dir.clone());
        }

        let readme = self.output_root.join(plan.readme_path());
        debug!(path = %readme.display(), "Writing README");
        if let Err(e) = self
            .filesystem
            .write_file(&readme, plan.readme(), plan.file_permissions())
        {
            return Err(self.fail(
                &plan,
                Path::new(README_FILE_NAME),
                readme,
                created.len(),
                e,
                &fresh,
            ));
        }

        info!(
            directories = created.len(),
            "Scaffold completed successfully"
        );
        Ok(plan.into_result(created))
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Remember the missing ancestors of the output root, outermost first.
    fn record_missing_root(&self, fresh: &mut Vec<PathBuf>) {
        let mut missing: Vec<PathBuf> = self
            .output_root
            .ancestors()
            .filter(|p| !p.as_os_str().is_empty())
            .take_while(|p| !self.filesystem.exists(p))
            .map(Path::to_path_buf)
            .collect();
        missing.reverse();
        fresh.extend(missing);
    }

    /// Remember every not-yet-existing directory on the way to `relative`.
    fn record_missing(&self, relative: &Path, fresh: &mut Vec<PathBuf>) {
        let mut current = self.output_root.clone();
        for component in relative.components() {
            current.push(component);
            if !fresh.contains(&current) && !self.filesystem.exists(&current) {
                fresh.push(current.clone());
            }
        }
    }

    /// Tag a port failure with progress, rolling back if configured.
    fn fail(
        &self,
        plan: &ScaffoldPlan,
        entry: &Path,
        path: PathBuf,
        completed: usize,
        cause: StrataError,
        fresh: &[PathBuf],
    ) -> StrataError {
        let reason = match cause {
            StrataError::Application(ApplicationError::Io { reason, .. }) => reason,
            other => other.to_string(),
        };

        warn!(
            entry = %entry.display(),
            completed,
            reason = %reason,
            "Scaffold aborted"
        );

        if self.policy == FailurePolicy::Rollback {
            self.rollback(fresh);
        }

        ApplicationError::FilesystemError {
            entry: entry.to_path_buf(),
            base_path: plan.base_path().to_path_buf(),
            path,
            completed,
            total: plan.directories().len(),
            reason,
        }
        .into()
    }

    /// Best-effort removal of directories created by this run, deepest first.
    fn rollback(&self, fresh: &[PathBuf]) {
        for path in fresh.iter().rev() {
            if !self.filesystem.exists(path) {
                continue;
            }
            if let Err(e) = self.filesystem.remove_dir(path) {
                warn!(
                    error = %e,
                    path = %path.display(),
                    "Rollback failed"
                );
            }
        }
        info!(candidates = fresh.len(), "Rollback finished");
    }
}
