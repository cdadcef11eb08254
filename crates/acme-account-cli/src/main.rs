//! acme-account CLI — `acme` command.
//!
//! Inspects and prepares the local ACME account: the account record, its
//! signing key and certificate files. Talking to the CA is out of scope.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};

use acme_account::{
    load_certificate, read_account, render_account, resolve_key, write_account, AccountError,
    AccountRecord, ConfigDir,
};

// ── Directory helpers ─────────────────────────────────────────────────────────

/// `-c` wins over `ACME_CONFIG`, which wins over `~/.config/acme`.
fn config_dir(flag: Option<PathBuf>) -> Result<ConfigDir> {
    let dir = match flag {
        Some(path) => ConfigDir::new(path),
        None => ConfigDir::resolve().context("failed to resolve configuration directory")?,
    };
    log::debug!("configuration directory: {}", dir.path().display());
    Ok(dir)
}

// ── CLI structure ─────────────────────────────────────────────────────────────

/// acme — manage the local ACME account record and signing key.
#[derive(Parser, Debug)]
#[command(
    name = "acme",
    about = "Local ACME account tool",
    version,
    long_about = "acme — local ACME account tool\n\nInspect the account record, make sure a signing key exists,\nand decode certificate files."
)]
struct Cli {
    /// Configuration directory (default: $ACME_CONFIG or ~/.config/acme)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a fresh account record and make sure a key exists
    Init {
        /// CA directory URL
        #[arg(long)]
        ca: String,

        /// Contact URI, e.g. mailto:admin@example.com (repeatable)
        #[arg(long = "contact")]
        contacts: Vec<String>,

        /// Overwrite an existing account record
        #[arg(long)]
        force: bool,
    },

    /// Show the account record
    Whoami,

    /// Show the account key, generating one if it is missing
    Key {
        /// Fail instead of generating a missing key
        #[arg(long)]
        no_generate: bool,
    },

    /// Decode a PEM certificate file
    Cert {
        /// Path to the certificate
        path: PathBuf,
    },
}

// ── Main entry point ──────────────────────────────────────────────────────────

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let verbose = cli.verbose;

    let result = config_dir(cli.config).and_then(|dir| {
        if verbose {
            eprintln!("config: {}", dir.path().display());
        }
        match cli.command {
            Commands::Init {
                ca,
                contacts,
                force,
            } => cmd_init(&dir, ca, contacts, force, verbose),
            Commands::Whoami => cmd_whoami(&dir),
            Commands::Key { no_generate } => cmd_key(&dir, !no_generate),
            Commands::Cert { path } => cmd_cert(&path),
        }
    });

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

// ── Command implementations ───────────────────────────────────────────────────

/// `acme init --ca URL [--contact URI]... [--force]`
fn cmd_init(
    dir: &ConfigDir,
    ca: String,
    contact: Vec<String>,
    force: bool,
    verbose: bool,
) -> Result<()> {
    let path = dir.account_path();
    if path.exists() && !force {
        return Err(anyhow!(
            "account already exists at {} (use --force to replace it)",
            path.display()
        ));
    }

    let record = AccountRecord {
        contact,
        ca,
        ..AccountRecord::default()
    };
    write_account(dir, &record).context("failed to write account")?;

    let key = resolve_key(&dir.key_path(), true).context("failed to prepare account key")?;

    println!("Created account at {}", path.display());
    if verbose {
        println!(
            "  Key: {} ({}, {} bits)",
            dir.key_path().display(),
            key.algorithm(),
            key.bits()
        );
    }

    Ok(())
}

/// `acme whoami`
fn cmd_whoami(dir: &ConfigDir) -> Result<()> {
    let account = match read_account(dir) {
        Ok(account) => account,
        Err(AccountError::NotFound(path)) => {
            return Err(anyhow!("no account found (expected at {})", path.display()));
        }
        Err(e) => return Err(e).context("failed to read account"),
    };

    let key_path = dir.key_path();
    let mut stdout = std::io::stdout().lock();
    render_account(&mut stdout, &account.record, &key_path)?;

    if !account.has_key() {
        eprintln!("warning: no usable key at {}", key_path.display());
    }

    Ok(())
}

/// `acme key [--no-generate]`
fn cmd_key(dir: &ConfigDir, allow_generate: bool) -> Result<()> {
    if allow_generate {
        dir.ensure().context("failed to create configuration directory")?;
    }

    let path = dir.key_path();
    let key = resolve_key(&path, allow_generate)
        .with_context(|| format!("failed to resolve key {}", path.display()))?;

    println!("Key:       {}", path.display());
    println!("Algorithm: {}", key.algorithm());
    println!("Size:      {} bits", key.bits());

    Ok(())
}

/// `acme cert PATH`
fn cmd_cert(path: &Path) -> Result<()> {
    let cert = load_certificate(path)
        .with_context(|| format!("failed to load certificate {}", path.display()))?;
    let tbs = &cert.tbs_certificate;

    let serial = tbs
        .serial_number
        .as_bytes()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(":");

    println!("Subject: {}", tbs.subject);
    println!("Issuer:  {}", tbs.issuer);
    println!("Serial:  {serial}");

    Ok(())
}
