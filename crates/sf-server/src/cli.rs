use clap::{Args, Parser, Subcommand};
use sf_config::StorefrontConfig;

/// Top-level CLI parser for the `storefront` binary.
#[derive(Debug, Parser)]
#[command(name = "storefront", version, about = "Storefront API server")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeArgs),
    /// Print the effective configuration with secrets redacted
    Config,
}

#[derive(Debug, Default, Args)]
pub struct ServeArgs {
    /// Interface to bind (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides server.port)
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl ServeArgs {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut StorefrontConfig) {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_overrides_bind_address() {
        let cli = Cli::try_parse_from(["storefront", "-v", "serve", "--host", "127.0.0.1", "-p", "8080"])
            .expect("cli should parse");
        assert!(cli.verbose);

        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        let mut config = StorefrontConfig::default();
        args.apply(&mut config);
        assert_eq!(config.server.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn serve_without_flags_keeps_config() {
        let mut config = StorefrontConfig::default();
        ServeArgs::default().apply(&mut config);
        assert_eq!(config.server.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["storefront", "config", "--quiet"]).expect("cli should parse");
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Config));
    }
}
