// Gitstr Auth: CLI Module
//
// Command-line interface using clap derive macros.
// Subcommands: whoami, relays, repo.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::execute;

use crate::resolver::ResolveOptions;

/// gitstr-auth: resolve the key gitstr signs with.
#[derive(Parser, Debug)]
#[command(name = "gitstr-auth")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Bunker URL of a NIP-46 remote signer. Remembered in `str.bunker`.
    #[arg(long, global = true)]
    pub connect: Option<String>,

    /// Secret key as hex, nsec or ncryptsec. Pass an empty value to ignore
    /// the stored key and be asked instead.
    #[arg(long, global = true)]
    pub sec: Option<String>,

    /// Store the given plain secret key in git config without asking.
    #[arg(long, global = true)]
    pub store_sec: bool,

    /// Run as if started in this directory.
    #[arg(short = 'C', global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Disable coloured prompts.
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            connect: self.connect.clone(),
            sec: self.sec.clone(),
            store_sec: self.store_sec,
        }
    }
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Resolve the signing credential and print its public key.
    Whoami,

    /// List the relays patches are published to.
    Relays,

    /// Show the repository id and owner key from git config.
    Repo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sec_absent_vs_empty() {
        let cli = Cli::parse_from(["gitstr-auth", "whoami"]);
        assert_eq!(cli.resolve_options().sec, None);

        let cli = Cli::parse_from(["gitstr-auth", "whoami", "--sec", ""]);
        assert_eq!(
            cli.resolve_options().sec.as_deref(),
            Some(""),
            "An explicitly empty --sec must stay distinguishable from no --sec"
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "gitstr-auth",
            "whoami",
            "--connect",
            "bunker://abc",
            "--store-sec",
            "-C",
            "/tmp/repo",
        ]);
        let options = cli.resolve_options();
        assert_eq!(options.connect.as_deref(), Some("bunker://abc"));
        assert!(options.store_sec);
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/repo")));
        assert_eq!(cli.command, Commands::Whoami);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
