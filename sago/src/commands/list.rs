use clap::Args;
use eyre::Result;
use sago_generators::builtin_registry;

#[derive(Args)]
pub struct ListCommand {}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let registry = builtin_registry();
        println!("DSL generators:");
        for name in registry.names() {
            println!("  - {}", name);
        }
        Ok(())
    }
}
