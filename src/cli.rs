use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::commands::{cmd_assign, cmd_auto, cmd_check, cmd_get, cmd_ls};
use crate::display::Layout;
use crate::error::Result;
use crate::paths::keys_file;
use crate::store::ShortcutStore;

#[derive(Parser)]
#[command(name = "shortkeys")]
#[command(about = "Single-character keyboard shortcuts for grouped actions")]
#[command(version)]
pub struct Cli {
    /// Key file to use (default: $SHORTKEYS_FILE or .shortkeys/keys.yaml)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Show informational log messages on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Assign a shortcut to a target
    #[command(visible_alias = "a")]
    Assign {
        /// Target (action or menu item) name
        target: String,

        /// Preferred shortcut; another one is picked if it is taken
        #[arg(short, long)]
        key: Option<char>,

        /// Group the shortcut belongs to (default: the global group)
        #[arg(short, long, default_value = "")]
        group: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Automatically assign shortcuts to one or more targets
    Auto {
        /// Target names, assigned in the order given
        #[arg(required = true)]
        targets: Vec<String>,

        /// Group the shortcuts belong to (default: the global group)
        #[arg(short, long, default_value = "")]
        group: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the target bound to a shortcut
    Get {
        /// Shortcut character
        key: char,

        /// Group to look in (default: the global group)
        #[arg(short, long, default_value = "")]
        group: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List shortcuts
    #[command(visible_alias = "l")]
    Ls {
        /// Only list this group ("" for the global group)
        #[arg(short, long)]
        group: Option<String>,

        /// One shortcut per line
        #[arg(long)]
        expanded: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate the key file
    Check {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let keys = ShortcutStore::open(keys_file(self.file.as_deref()));

        match self.command {
            Commands::Assign {
                target,
                key,
                group,
                json,
            } => cmd_assign(&keys, &target, key, &group, json),
            Commands::Auto {
                targets,
                group,
                json,
            } => cmd_auto(&keys, &targets, &group, json),
            Commands::Get { key, group, json } => cmd_get(&keys, key, &group, json),
            Commands::Ls {
                group,
                expanded,
                json,
            } => {
                let layout = if expanded {
                    Layout::Expanded
                } else {
                    Layout::Compact
                };
                cmd_ls(&keys, group.as_deref(), layout, json)
            }
            Commands::Check { json } => cmd_check(&keys, json),
            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "shortkeys", &mut io::stdout());
}
