//! Minimal CLI: read payload → infer → print schema
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// infer an Avro record schema from a sample JSON payload
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    /// path to the file with the JSON payload
    #[arg(long)]
    file: PathBuf,

    /// name of the emitted record schema
    #[arg(long)]
    name: String,

    /// wrap every field type in a [T, "null"] union
    #[arg(long, default_value_t = false)]
    nullable: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let payload = std::fs::read(&self.file)
            .with_context(|| format!("failed to read payload file {}", self.file.display()))?;

        let inferred = crate::inference::infer(&self.name, &payload, self.nullable)?;

        // warnings on stderr, schema on stdout
        for warning in &inferred.warnings {
            eprintln!("{} {warning}", "warning:".yellow().bold());
        }
        let schema = String::from_utf8(inferred.schema).context("schema is not valid UTF-8")?;
        println!("{schema}");
        Ok(())
    }
}
