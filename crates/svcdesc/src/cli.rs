//! Command-line interface of the `svcdesc` binary.
//!
//! The bootstrap options (`--service-file`, `--service-port`,
//! `--service-host`) are parsed once into [`BootstrapArgs`] and turned into
//! [`RuntimeOptions`]; nothing below this module reads flags or the
//! environment.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use svcdesc_config::{
    DescriptorLoader, Format, RuntimeOptions, DEFAULT_SERVICE_FILE, SERVICE_HOST_ENV,
};
use svcdesc_core::{KeyedSet, Service};
use svcdesc_telemetry::LogConfig;
use tracing::info;

/// Inspect and bind service descriptors.
#[derive(Debug, Parser)]
#[command(name = "svcdesc", version, about = "Inspect and bind service descriptors", long_about = None)]
pub struct Cli {
    /// Descriptor location and runtime binding.
    #[command(flatten)]
    pub bootstrap: BootstrapArgs,

    /// Log filter directive.
    #[arg(long, env = "SVCDESC_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Logging configuration selected on the command line.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        LogConfig::default()
            .with_level(self.log_level.clone())
            .with_json(self.log_json)
    }
}

/// Bootstrap options shared by every command.
#[derive(Debug, Clone, Args)]
pub struct BootstrapArgs {
    /// Full path to service file.
    #[arg(long, default_value = DEFAULT_SERVICE_FILE, global = true)]
    pub service_file: PathBuf,

    /// Port that this service will be operating on. Required by `bind`.
    #[arg(long, global = true)]
    pub service_port: Option<String>,

    /// The hostname this service will be serving from. Overrides SERVICE_HOST.
    #[arg(long, env = SERVICE_HOST_ENV, global = true)]
    pub service_host: Option<String>,
}

impl From<&BootstrapArgs> for RuntimeOptions {
    fn from(args: &BootstrapArgs) -> Self {
        Self {
            service_file: args.service_file.clone(),
            service_port: args.service_port.clone(),
            service_host: args.service_host.clone(),
        }
    }
}

/// Keyed collections of a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Collection {
    /// Configuration values.
    Configs,
    /// Command-line flags.
    Flags,
    /// Call parameters.
    Parameters,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the descriptor
    Show {
        /// Output encoding (json, yaml, toml).
        #[arg(long, default_value = "json")]
        format: Format,
    },
    /// Validate the descriptor and report duplicate keys
    Validate,
    /// List the required keys of a collection
    Required {
        /// Collection to query.
        #[arg(value_enum)]
        collection: Collection,
    },
    /// Print one element of a collection by key
    Get {
        /// Collection to query.
        #[arg(value_enum)]
        collection: Collection,
        /// Key to look up.
        key: String,
    },
    /// Bind port and host and print the serving address
    Bind,
}

/// Runs a parsed command, writing its output to `out`.
///
/// # Errors
///
/// Returns the loader, model or resolver error of the command, or an I/O
/// error writing the output.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let file = &cli.bootstrap.service_file;

    match &cli.command {
        Command::Show { format } => {
            let service = load(file, false)?;
            let encoded = match format {
                Format::Json => svcdesc_config::to_json_pretty(&service)?,
                Format::Yaml => svcdesc_config::to_yaml(&service)?,
                Format::Toml => String::from_utf8(format.encode(&service)?)
                    .context("encoded descriptor is not UTF-8")?,
            };
            writeln!(out, "{}", encoded.trim_end())?;
        }
        Command::Validate => {
            let service = load(file, true)?;
            for (kind, key) in service.duplicate_keys() {
                writeln!(out, "warning: duplicate {kind} key {key}")?;
            }
            writeln!(out, "{} is valid", service.id())?;
        }
        Command::Required { collection } => {
            let service = load(file, false)?;
            let keys = match collection {
                Collection::Configs => service.configs.required_keys(),
                Collection::Flags => service.flags.required_keys(),
                Collection::Parameters => service.parameters.required_keys(),
            };
            for key in keys {
                writeln!(out, "{key}")?;
            }
        }
        Command::Get { collection, key } => {
            let service = load(file, false)?;
            let element = match collection {
                Collection::Configs => {
                    serde_json::to_string_pretty(service.configs.get_by_key(key)?)?
                }
                Collection::Flags => serde_json::to_string_pretty(service.flags.get_by_key(key)?)?,
                Collection::Parameters => {
                    serde_json::to_string_pretty(service.parameters.get_by_key(key)?)?
                }
            };
            writeln!(out, "{element}")?;
        }
        Command::Bind => {
            let options = RuntimeOptions::from(&cli.bootstrap);
            let service = options.resolve()?;
            if let Some(runtime) = service.runtime() {
                info!(service = %service.id(), address = %runtime, "service bound");
                writeln!(out, "{} {}", service.id(), runtime)?;
            }
        }
    }

    Ok(())
}

fn load(file: &Path, strict: bool) -> Result<Service> {
    let loader = if strict {
        DescriptorLoader::new().strict()
    } else {
        DescriptorLoader::new()
    };
    loader
        .load_file(file)
        .with_context(|| format!("loading {}", file.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["svcdesc", "validate"]).unwrap();
        assert_eq!(cli.bootstrap.service_file, PathBuf::from("Service.yaml"));
        assert_eq!(cli.bootstrap.service_port, None);
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_bootstrap_to_runtime_options() {
        let cli = Cli::try_parse_from([
            "svcdesc",
            "bind",
            "--service-file",
            "other.yaml",
            "--service-port",
            "80",
            "--service-host",
            "localhost",
        ])
        .unwrap();

        let options = RuntimeOptions::from(&cli.bootstrap);
        assert_eq!(options.service_file, PathBuf::from("other.yaml"));
        assert_eq!(options.service_port.as_deref(), Some("80"));
        assert_eq!(options.service_host.as_deref(), Some("localhost"));
    }

    #[test]
    fn test_show_format_parses() {
        let cli = Cli::try_parse_from(["svcdesc", "show", "--format", "yaml"]).unwrap();
        assert!(matches!(cli.command, Command::Show { format: Format::Yaml }));
        assert!(Cli::try_parse_from(["svcdesc", "show", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_collection_values() {
        let cli = Cli::try_parse_from(["svcdesc", "get", "parameters", "id"]).unwrap();
        match cli.command {
            Command::Get { collection, key } => {
                assert_eq!(collection, Collection::Parameters);
                assert_eq!(key, "id");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
