use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the fnty binary.
#[derive(Parser, Debug)]
#[command(
    name = "fnty",
    version,
    about = "Inspect function types: classification, receiver encoding and decomposition"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load an environment file and report on every type it names.
    Check {
        /// Path to the environment JSON file.
        env: PathBuf,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text, ignore_case = true)]
        format: OutputFormat,

        /// Override `builtins.maxFunctionArity` from the environment file.
        #[arg(long = "max-arity", alias = "maxArity")]
        max_arity: Option<u32>,
    },

    /// List the members of the built-in function family.
    Builtins {
        /// Highest arity to register.
        #[arg(long = "max-arity", alias = "maxArity")]
        max_arity: Option<u32>,

        /// Leave out the `SuspendFunction` and `KSuspendFunction` families.
        #[arg(long = "no-suspend")]
        no_suspend: bool,

        /// Leave out the reflective `KFunction` and `KSuspendFunction` families.
        #[arg(long = "no-reflection")]
        no_reflection: bool,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text, ignore_case = true)]
        format: OutputFormat,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
