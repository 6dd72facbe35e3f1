//! Orchestrator for coordinating the whole check-and-install workflow
//!
//! This module provides:
//! - Workflow coordination: load → fetch → judge → report → confirm → install
//! - Bounded parallel registry lookups
//! - Mapping of the final state to a process exit code

use crate::cli::CliArgs;
use crate::domain::{CheckReport, Dependency};
use crate::error::AppError;
use crate::manifest::{IgnoreSet, Manifest};
use crate::output::{OutputConfig, TextFormatter};
use crate::package_manager::{PackageManager, PackageManagerRunner, SystemPackageManager};
use crate::progress::{Progress, CHECK_MESSAGE, INSTALL_MESSAGE};
use crate::prompt::Confirmation;
use crate::registry::{create_source, HttpClient, VersionSource};
use crate::update::UpdateJudge;
use log::{debug, warn};
use std::io::{BufRead, Write};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Nothing was outdated
    NoUpdates,
    /// Some latest versions could not be found; nothing was offered
    Unresolved(Vec<String>),
    /// The operator did not confirm
    Declined,
    /// The install command succeeded
    Installed,
    /// The install command failed or could not be spawned
    InstallFailed,
}

impl RunOutcome {
    /// Exit code reported to the shell
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RunOutcome::NoUpdates | RunOutcome::Declined | RunOutcome::Installed => {
                ExitCode::SUCCESS
            }
            RunOutcome::Unresolved(_) => ExitCode::from(2),
            RunOutcome::InstallFailed => ExitCode::FAILURE,
        }
    }
}

/// Orchestrator for coordinating the update workflow
pub struct Orchestrator {
    /// CLI arguments for configuration
    args: CliArgs,
    /// Where latest versions come from
    source: Arc<dyn VersionSource>,
    /// Executes the install command
    runner: Box<dyn PackageManagerRunner>,
}

impl Orchestrator {
    /// Create a new orchestrator talking to the configured registries
    pub fn new(args: CliArgs) -> Result<Self, AppError> {
        let client = HttpClient::with_timeout(args.timeout())?;
        let source = create_source(client, &args.registry, &args.fallback_registry);

        Ok(Self::with_components(
            args,
            Arc::new(source),
            Box::new(SystemPackageManager::new()),
        ))
    }

    /// Create an orchestrator with custom collaborators (for testing)
    pub fn with_components(
        args: CliArgs,
        source: Arc<dyn VersionSource>,
        runner: Box<dyn PackageManagerRunner>,
    ) -> Self {
        Self {
            args,
            source,
            runner,
        }
    }

    /// Run the workflow once, reading the confirmation from `input`
    pub async fn run<R: BufRead>(
        &self,
        input: R,
        writer: &mut dyn Write,
    ) -> Result<RunOutcome, AppError> {
        let formatter = OutputConfig::from_cli(self.args.no_color).formatter();

        let manifest = Manifest::load(&self.args.path)?;
        let ignore = self.build_ignore(&manifest);
        debug!(
            "Modules: {}",
            quoted_names(manifest.dependencies.iter().map(|d| d.name.as_str()))
        );
        if !ignore.is_empty() {
            debug!("Ignored: {}", quoted_names(ignore.iter()));
        }

        formatter.format_checking(manifest.runtime_count(), manifest.dev_count(), writer)?;

        let judge = UpdateJudge::new(ignore);
        let report = self.check(manifest.dependencies.clone(), &judge).await;
        debug!(
            "Checked {} modules: {} outdated, {} up to date, {} unresolved, {} ignored",
            report.total(),
            report.outdated.len(),
            report.up_to_date,
            report.unresolved.len(),
            report.ignored
        );
        debug!(
            "Outdated modules: {}",
            if report.has_updates() {
                quoted_names(report.outdated.iter().map(|r| r.name()))
            } else {
                "None".to_string()
            }
        );

        if report.has_unresolved() {
            let names = report.unresolved_names();
            formatter.format_unresolved(&names, writer)?;
            return Ok(RunOutcome::Unresolved(names));
        }

        if !report.has_updates() {
            formatter.format_no_updates(writer)?;
            return Ok(RunOutcome::NoUpdates);
        }

        formatter.format_table(&report.outdated, writer)?;

        let confirmed = if self.args.yes {
            debug!("Confirmation skipped by --yes");
            true
        } else {
            debug!("Asking for update confirmation");
            Confirmation::new(input).ask(&formatter, writer)?
        };

        if !confirmed {
            debug!("Closing the process");
            return Ok(RunOutcome::Declined);
        }

        self.install(&report, manifest.project_dir(), &formatter, writer)
    }

    /// Merge the manifest's ignore list with --ignore names
    fn build_ignore(&self, manifest: &Manifest) -> IgnoreSet {
        let mut ignore = manifest.ignore.clone();
        ignore.extend(self.args.ignore.iter().cloned());
        ignore
    }

    /// Resolve every non-ignored dependency and classify the results
    async fn check(&self, dependencies: Vec<Dependency>, judge: &UpdateJudge) -> CheckReport {
        let latest = self.fetch_all(&dependencies, judge).await;
        let resolved = dependencies
            .into_iter()
            .zip(latest)
            .map(|(dep, latest)| dep.resolve(latest))
            .collect();
        judge.classify(resolved)
    }

    /// Look up latest versions with at most `concurrency` requests in flight.
    /// Slot `i` holds the result for `dependencies[i]`; ignored entries stay None.
    async fn fetch_all(
        &self,
        dependencies: &[Dependency],
        judge: &UpdateJudge,
    ) -> Vec<Option<String>> {
        let mut slots: Vec<Option<String>> = vec![None; dependencies.len()];
        let semaphore = Arc::new(Semaphore::new(self.args.concurrency));
        let mut tasks = JoinSet::new();

        for (index, dep) in dependencies.iter().enumerate() {
            if judge.should_skip(dep) {
                continue;
            }

            let source = Arc::clone(&self.source);
            let semaphore = Arc::clone(&semaphore);
            let name = dep.name.clone();
            tasks.spawn(async move {
                let _permit = semaphore.acquire_owned().await;
                let result = source.fetch_latest(&name).await;
                (index, name, result)
            });
        }

        if tasks.is_empty() {
            return slots;
        }

        let mut progress = Progress::new(!self.args.no_progress);
        progress.start(tasks.len() as u64, CHECK_MESSAGE);

        while let Some(joined) = tasks.join_next().await {
            progress.inc();
            match joined {
                Ok((index, name, Ok(version))) => {
                    debug!("{}: latest version {}", name, version);
                    slots[index] = Some(version);
                }
                Ok((_, name, Err(e))) => {
                    debug!("{}: lookup failed: {}", name, e);
                }
                Err(e) => {
                    warn!("registry lookup task aborted: {}", e);
                }
            }
        }

        progress.finish();
        slots
    }

    /// Run one install command for every outdated dependency
    fn install(
        &self,
        report: &CheckReport,
        project_dir: &Path,
        formatter: &TextFormatter,
        writer: &mut dyn Write,
    ) -> Result<RunOutcome, AppError> {
        let package_manager = self
            .args
            .package_manager
            .unwrap_or_else(|| PackageManager::detect(project_dir));
        let packages = report.install_specs();

        let command = package_manager.install_command(&packages).join(" ");
        formatter.format_install_command(&command, writer)?;

        let mut progress = Progress::new(!self.args.no_progress);
        progress.start(packages.len() as u64, INSTALL_MESSAGE);
        let result = self
            .runner
            .run_install(package_manager, &packages, project_dir);
        for _ in &packages {
            progress.inc();
        }
        progress.finish();

        debug!("`{}` finished, success: {}", result.command, result.success);
        if !result.stdout.trim().is_empty() {
            debug!("Install stdout: {}", result.stdout.trim());
        }

        if result.success {
            formatter.format_install_completed(writer)?;
            Ok(RunOutcome::Installed)
        } else {
            debug!("Install stderr: {}", result.stderr.trim());
            formatter.format_install_failed(writer)?;
            Ok(RunOutcome::InstallFailed)
        }
    }
}

fn quoted_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names
        .map(|n| format!("\"{}\"", n))
        .collect::<Vec<_>>()
        .join(", ")
}
