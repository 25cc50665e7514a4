use std::path::{Path, PathBuf};
use std::process;

use clap::Args;
use eyre::Result;
use sago_app::{Application, Config};
use sago_core::FsTree;
use sago_dsl::ops;
use sago_dsl::report::{Output, Report, TerminalOutput};
use sago_generators::builtin_registry;

use super::UnwrapOrExit;

/// Default configuration path; missing is fine, the defaults apply.
const DEFAULT_CONFIG: &str = "sago.toml";

#[derive(Args)]
pub struct DslCommand {
    /// Constants to generate RBIs for (defaults to every eligible type)
    pub constants: Vec<String>,

    /// Path to sago.toml (defaults to ./sago.toml)
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Path to the reflection snapshot (overrides sago.toml)
    #[arg(short, long)]
    pub app: Option<PathBuf>,

    /// Output directory for generated RBI files (overrides sago.toml)
    #[arg(short, long)]
    pub outdir: Option<PathBuf>,

    /// Suppress per-file output lines
    #[arg(short, long)]
    pub quiet: bool,

    /// Check that RBIs are up-to-date instead of writing anything
    #[arg(long)]
    pub verify: bool,

    /// Omit the autogenerated header block from RBI files
    #[arg(long)]
    pub no_file_header: bool,

    /// Only run the named generators
    #[arg(long, num_args = 1.., conflicts_with = "exclude_generators")]
    pub generators: Vec<String>,

    /// Run every generator except the named ones
    #[arg(long, num_args = 1..)]
    pub exclude_generators: Vec<String>,

    /// Exit code when a run completes with errors (overrides sago.toml)
    #[arg(long)]
    pub error_exit_code: Option<i32>,
}

impl DslCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.load_config();
        let snapshot = self.app.clone().unwrap_or_else(|| config.snapshot.clone());
        let outdir = self.outdir.clone().unwrap_or_else(|| config.outdir.clone());
        let error_exit_code = self.error_exit_code.unwrap_or(config.error_exit_code);
        let file_header = !self.no_file_header && config.file_header;

        let application = Application::load(&snapshot).unwrap_or_exit();
        let mut out = TerminalOutput::new();
        out.line("Loading Rails application... Done");
        let registry = builtin_registry();
        out.line("Loading DSL generator classes... Done");

        let code = if self.verify {
            let live = FsTree::new(outdir);
            let opts = ops::verify::VerifyOptions {
                constants: self.constants.clone(),
                file_header,
                generators: self.generators.clone(),
                exclude_generators: self.exclude_generators.clone(),
            };
            let report = ops::verify::run(&application, &registry, &live, &opts)?;
            report.render(&mut out);
            report.exit_code()
        } else {
            let mut tree = FsTree::new(outdir);
            let opts = ops::dsl::DslOptions {
                constants: self.constants.clone(),
                quiet: self.quiet,
                file_header,
                generators: self.generators.clone(),
                exclude_generators: self.exclude_generators.clone(),
            };
            let report = ops::dsl::run(&application, &registry, &mut tree, &opts)?;
            report.render(&mut out);
            report.exit_code(error_exit_code)
        };

        if code != 0 {
            process::exit(code);
        }
        Ok(())
    }

    fn load_config(&self) -> Config {
        if self.config.exists() || self.config != Path::new(DEFAULT_CONFIG) {
            Config::load(&self.config).unwrap_or_exit()
        } else {
            Config::default()
        }
    }
}
