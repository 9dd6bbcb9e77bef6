//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{ApiKey, DumpConfig};
use crate::dump::{DumpSummary, Dumper, EventsOptions};
use crate::error::Result;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    ///
    /// The API key is read before anything else so a missing key fails the
    /// run without touching the group list or the network.
    pub async fn run(&self) -> Result<()> {
        let api_key = ApiKey::from_env()?;
        let dumper = Dumper::new(self.build_config()?, api_key)?;
        info!(
            "Reading groups from {} via {}",
            dumper.config().groups_file.display(),
            dumper.config().base_url
        );

        let summary = match &self.cli.command {
            Commands::Events { skip_existing, .. } => {
                let options = EventsOptions {
                    skip_existing: *skip_existing,
                };
                dumper.dump_events(&options).await?
            }
            Commands::Members => dumper.dump_members().await?,
        };

        self.print_summary(&summary)
    }

    /// Merge defaults, the config file, and flags
    pub fn build_config(&self) -> Result<DumpConfig> {
        let mut config = match &self.cli.config {
            Some(path) => DumpConfig::from_yaml_file(path)?,
            None => DumpConfig::default(),
        };

        if let Some(groups) = &self.cli.groups {
            config.groups_file.clone_from(groups);
        }
        if let Some(root) = &self.cli.output_dir {
            config = config.with_output_root(root);
        }
        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(timeout) = self.cli.timeout_secs {
            config.timeout_secs = timeout;
        }
        if let Commands::Events {
            batch_size: Some(size),
            ..
        } = self.cli.command
        {
            config.batch_size = size;
        }

        config.validate()?;
        Ok(config)
    }

    fn print_summary(&self, summary: &DumpSummary) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(summary)?);
            }
            OutputFormat::Pretty => {
                let elapsed = summary.elapsed().map_or_else(
                    || "-".to_string(),
                    |d| format!("{:.1}s", d.num_milliseconds() as f64 / 1000.0),
                );
                println!(
                    "{}: {} written, {} skipped, {} records, {} requests in {}",
                    summary.kind,
                    summary.written,
                    summary.skipped,
                    summary.records,
                    summary.requests,
                    elapsed
                );
            }
        }
        Ok(())
    }
}
