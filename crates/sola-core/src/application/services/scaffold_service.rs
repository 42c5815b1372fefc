//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the scaffolding workflow:
//! 1. Create the layout's directories (idempotent)
//! 2. Drop a package marker into every non-hidden directory
//! 3. Render each template of the layout, skipping the ones not on disk
//!
//! There is no rollback: whatever was created before a failure stays.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ports::{Filesystem, TemplateStore},
        services::TemplateService,
    },
    domain::{DomainValidator as validator, PACKAGE_MARKER, ProjectLayout, RenderContext},
    error::SolaResult,
};

/// What a scaffold run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Project root (`<output_root>/<project_name>`).
    pub root: PathBuf,
    /// Layout directories, created or already present.
    pub directories: Vec<PathBuf>,
    /// Package markers created by this run (pre-existing ones are not listed).
    pub markers: Vec<PathBuf>,
    /// Files rendered from templates.
    pub rendered: Vec<PathBuf>,
    /// Template names that were not found and therefore skipped.
    pub skipped: Vec<String>,
}

impl ScaffoldReport {
    /// `true` if every template of the layout was rendered.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    templates: TemplateService,
    filesystem: Arc<dyn Filesystem>,
    layout: ProjectLayout,
}

impl ScaffoldService {
    /// Create a scaffold service using the standard layout.
    pub fn new(store: Box<dyn TemplateStore>, filesystem: Arc<dyn Filesystem>) -> Self {
        Self {
            templates: TemplateService::new(store, Arc::clone(&filesystem)),
            filesystem,
            layout: ProjectLayout::standard(),
        }
    }

    /// Replace the layout (tests, alternative skeletons).
    pub fn with_layout(mut self, layout: ProjectLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Scaffold `<output_root>/<project_name>`.
    ///
    /// Safe to run twice: directories are reused, markers are never
    /// truncated, and rendered files are simply rendered again.
    #[instrument(
        skip_all,
        fields(
            project = %project_name,
            output_root = %output_root.as_ref().display()
        )
    )]
    pub fn scaffold(
        &self,
        project_name: &str,
        output_root: impl AsRef<Path>,
    ) -> SolaResult<ScaffoldReport> {
        validator::validate_project_name(project_name)?;

        let root = output_root.as_ref().join(project_name);
        let mut report = ScaffoldReport {
            root: root.clone(),
            ..ScaffoldReport::default()
        };

        // 1. Directories before files
        for dir in self.layout.directories() {
            let path = root.join(dir);
            self.filesystem.create_dir_all(&path)?;
            report.directories.push(path);
        }

        // 2. Package markers
        for dir in self.layout.package_directories() {
            let marker = root.join(dir).join(PACKAGE_MARKER);
            if self.filesystem.touch(&marker)? {
                report.markers.push(marker);
            }
        }

        // 3. Templates
        match self.templates.list() {
            Ok(available) => debug!(?available, "Templates in store"),
            Err(e) => debug!(error = %e, "Template store cannot be listed"),
        }
        let context = RenderContext::new(project_name);
        for mapping in self.layout.files() {
            let destination = root.join(&mapping.output);
            match self.templates.render(&mapping.template, &destination, &context) {
                Ok(()) => report.rendered.push(destination),
                Err(e) if e.is_template_missing() => {
                    warn!(template = %mapping.template, "Skipping missing template");
                    report.skipped.push(mapping.template.clone());
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            rendered = report.rendered.len(),
            skipped = report.skipped.len(),
            "Scaffold completed"
        );
        Ok(report)
    }
}
