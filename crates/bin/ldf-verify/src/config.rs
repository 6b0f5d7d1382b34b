use clap::Parser;
use std::error::Error;
use std::fmt;

const DEFAULT_NEO4J_URI: &str = "bolt://localhost:7687";
const DEFAULT_NEO4J_USER: &str = "neo4j";
const DEFAULT_NEO4J_PASSWORD: &str = "neo4j123";

#[derive(Parser, Debug)]
#[command(name = "ldf-verify", version, about = "Smoke-checks the platform graph database.")]
struct CliArgs {
    #[arg(long, env = "NEO4J_URI", default_value = DEFAULT_NEO4J_URI)]
    uri: String,

    #[arg(long, env = "NEO4J_USER", default_value = DEFAULT_NEO4J_USER)]
    user: String,

    #[arg(long, env = "NEO4J_PASSWORD", default_value = DEFAULT_NEO4J_PASSWORD)]
    password: String,
}

/// Connection settings loaded from CLI arguments and environment
/// variables, fixed for the lifetime of the process.
#[derive(Clone, Debug)]
pub struct VerifyConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidSetting { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value:?}")
            }
        }
    }
}

impl Error for ConfigError {}

impl VerifyConfig {
    /// Parses the process arguments and environment into a validated
    /// configuration.
    ///
    /// # Errors
    /// Returns `ConfigError` when a setting is present but unusable.
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }
}

impl TryFrom<CliArgs> for VerifyConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.uri.trim().is_empty() {
            return Err(ConfigError::InvalidSetting {
                name: "NEO4J_URI",
                value: args.uri,
            });
        }
        if args.user.trim().is_empty() {
            return Err(ConfigError::InvalidSetting {
                name: "NEO4J_USER",
                value: args.user,
            });
        }

        Ok(Self {
            uri: args.uri,
            user: args.user,
            password: args.password,
        })
    }
}
