//! Command line interface
//!
//! Flags override the loaded configuration; see [`Cli::apply_overrides`].

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use inject_it_application::run;
use inject_it_domain::{Result, RunResult};
use inject_it_infrastructure::config::loader::{to_toml, validate_app_config};
use inject_it_infrastructure::{AppConfig, ConfigLoader, LoadedConfig, TracingProgressSink};
use inject_it_providers::FileSystemProjectProvider;

use crate::report;

/// Command line interface for inject-it
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "inject-it")]
#[command(about = "Migrate constructor-parameter injection to inject() fields")]
#[command(version)]
pub struct Cli {
    /// Project root (defaults to `project.root`, usually the current directory)
    pub root: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Glob selecting files to load; repeat to add more
    #[arg(long = "include", value_name = "GLOB")]
    pub include: Vec<String>,

    /// Glob excluding files from loading; repeat to add more
    #[arg(long = "exclude", value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Glob over class names to migrate
    #[arg(long, value_name = "GLOB")]
    pub class_pattern: Option<String>,

    /// Glob restricting which files' classes are migrated
    #[arg(long, value_name = "GLOB")]
    pub class_files: Option<String>,

    /// Module the accessor function is imported from
    #[arg(long, value_name = "NAME")]
    pub module: Option<String>,

    /// Accessor function name
    #[arg(long, value_name = "NAME")]
    pub accessor: Option<String>,

    /// Plan and print a diff without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

/// How a completed run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every selected class was migrated or skipped
    Success,
    /// At least one class was left unmodified because of an error
    ClassFailures,
}

impl RunStatus {
    /// Status for a run result
    pub fn from_result(result: &RunResult) -> Self {
        if result.success {
            Self::Success
        } else {
            Self::ClassFailures
        }
    }

    /// Process exit code: 0 on success, 2 when classes failed
    pub fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::ClassFailures => 2,
        }
    }

    /// Process exit code as an [`ExitCode`]
    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self.code())
    }
}

impl Cli {
    /// Load the configuration, apply the command-line overrides, then validate
    pub fn load_config(&self) -> Result<LoadedConfig> {
        let mut loader = ConfigLoader::new();
        if let Some(path) = &self.config {
            loader = loader.with_config_path(path);
        }
        let mut loaded = loader.load()?;
        self.apply_overrides(&mut loaded.config);
        validate_app_config(&loaded.config)?;
        Ok(loaded)
    }

    /// Overwrite configuration values given on the command line
    ///
    /// Repeated `--include`/`--exclude` flags replace the configured lists.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(root) = &self.root {
            config.project.root.clone_from(root);
        }
        if !self.include.is_empty() {
            config.project.include.clone_from(&self.include);
        }
        if !self.exclude.is_empty() {
            config.project.exclude.clone_from(&self.exclude);
        }
        if let Some(pattern) = &self.class_pattern {
            config.migration.class_name_pattern.clone_from(pattern);
        }
        if let Some(pattern) = &self.class_files {
            config.migration.class_files.clone_from(pattern);
        }
        if let Some(module) = &self.module {
            config.migration.accessor_module.clone_from(module);
        }
        if let Some(accessor) = &self.accessor {
            config.migration.accessor_function.clone_from(accessor);
        }
        if self.dry_run {
            config.migration.dry_run = true;
        }
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
    }

    /// Run the migration described by `config` and write the report to `out`
    pub fn execute(&self, config: &AppConfig, out: &mut dyn Write) -> Result<RunStatus> {
        if self.print_config {
            write!(out, "{}", to_toml(config)?)?;
            return Ok(RunStatus::Success);
        }

        let request = config.to_run_request();
        let provider = FileSystemProjectProvider::new()?;
        if !self.json {
            report::write_banner(out, &request)?;
        }

        let outcome = run(&provider, &request, &TracingProgressSink)?;

        if self.json {
            report::write_json(out, &request, &outcome)?;
        } else {
            report::write_human(out, &request, &outcome)?;
        }
        Ok(RunStatus::from_result(&outcome.result))
    }
}
