//! `sola init`: scaffold a new project under the current directory.

use std::sync::Arc;

use tracing::{debug, instrument};

use sola_adapters::{DirectoryStore, LocalFilesystem, builtin_store};
use sola_core::application::{ScaffoldReport, ScaffoldService, TemplateStore};

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let cwd = std::env::current_dir().with_cli_context(|| "Cannot read the current directory")?;
    let store: Box<dyn TemplateStore> = match &config.paths.templates_dir {
        Some(dir) => {
            debug!(templates = %dir.display(), "Using template directory");
            Box::new(DirectoryStore::new(dir))
        }
        None => {
            debug!("Using built-in templates");
            Box::new(builtin_store())
        }
    };

    let service = ScaffoldService::new(store, Arc::new(LocalFilesystem::new()));

    output.header(&format!("Forging SOLA project: {}", args.name))?;
    let report = service.scaffold(&args.name, &cwd)?;
    report_result(&args.name, &report, &output)
}

fn report_result(name: &str, report: &ScaffoldReport, output: &OutputManager) -> CliResult<()> {
    for template in &report.skipped {
        output.warning(&format!("Template '{template}' not found; skipped"))?;
    }

    if report.is_complete() {
        output.success(&format!(
            "Project '{name}' created at {}",
            report.root.display()
        ))?;
    } else {
        output.success(&format!(
            "Project '{name}' created at {} ({} of {} templates skipped)",
            report.root.display(),
            report.skipped.len(),
            report.skipped.len() + report.rendered.len(),
        ))?;
    }

    output.info("Next steps:")?;
    output.print(&format!("  cd {name}"))?;
    output.print("  sola build --task \"describe your service\"")?;
    Ok(())
}
