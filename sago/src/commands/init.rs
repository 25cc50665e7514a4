use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use sago_core::{File, FileRules, Overwrite, WriteResult};

/// Starter configuration written by `sago init`.
const SAGO_TOML: &str = r#"[app]
snapshot = "reflection.json"

[rbi]
outdir = "sorbet/rbi/dsl"
file_header = true
error_exit_code = 1
"#;

#[derive(Args)]
pub struct InitCommand {
    /// Directory to initialize (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let path = self.path.join("sago.toml");
        let rules = FileRules {
            overwrite: Overwrite::IfMissing,
        };
        match File::with_rules(&path, SAGO_TOML, rules).write()? {
            WriteResult::Written => println!("Created {}", path.display()),
            WriteResult::Skipped => println!("{} already exists, skipping", path.display()),
        }
        Ok(())
    }
}
