// SPDX-License-Identifier: PMPL-1.0-or-later

//! dashboard-locale: inspect and switch the finance dashboard's UI language
//!
//! Operates on the same persisted store the dashboard reads its language
//! from, so a language chosen here is the one the next session starts in.

mod logger;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dashboard_locale::config::{self, Settings};
use dashboard_locale::i18n::{self, Area, Lang, LocaleService, TranslationTable};
use dashboard_locale::storage::FileStore;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dashboard-locale")]
#[command(version)]
#[command(about = "Inspect and switch the dashboard UI language")]
#[command(long_about = None)]
struct Cli {
    /// Settings file (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Language store file, overrides the settings file
    #[arg(short, long, global = true)]
    store: Option<PathBuf>,

    /// JSON catalog replacing the built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current language
    Show,

    /// Translate keys in the current language
    Translate {
        /// Translation keys
        #[arg(value_name = "KEY", required = true)]
        keys: Vec<String>,
    },

    /// Switch between Chinese and English
    Toggle,

    /// Set the language to any tag
    Set {
        /// Language tag, e.g. zh or en
        #[arg(value_name = "TAG")]
        tag: String,
    },

    /// List translation keys with both texts
    Keys {
        /// Only keys of this UI area
        #[arg(short, long, value_enum)]
        area: Option<Area>,
    },

    /// Report keys lacking a text in a supported language
    Audit,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = config::load(cli.config.as_deref())?;
    if cli.store.is_some() {
        settings.store = cli.store;
    }
    if cli.catalog.is_some() {
        settings.catalog = cli.catalog;
    }
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        settings.level()
    };
    logger::setup(level)?;

    let mut service = open_service(&settings)?;

    match cli.command {
        Commands::Show => {
            let current = service.current();
            println!("Language: {}", describe(current).bold());
            println!(
                "  Primary: {}",
                if service.is_primary() { "yes" } else { "no" }
            );
            println!("  Store: {}", service.store().path().display());
        }

        Commands::Translate { keys } => {
            for key in &keys {
                let text = service.translate(key);
                if text == key.as_str() && !service.table().contains(key) {
                    println!("{}  {}", key, text.dimmed());
                } else {
                    println!("{}  {}", key, text);
                }
            }
        }

        Commands::Toggle => {
            service.toggle_language();
            println!("Language: {}", describe(service.current()).bold());
        }

        Commands::Set { tag } => {
            let lang = Lang::from_code(tag.trim());
            if !lang.is_supported() {
                let hint = if i18n::is_known_tag(lang.code()) {
                    "no translations exist for it"
                } else {
                    "it is not an ISO 639-1 language code"
                };
                eprintln!(
                    "{} '{}' accepted, but {}; the UI will show raw keys",
                    "warning:".yellow().bold(),
                    lang,
                    hint
                );
            }
            service.set_language(lang);
            println!("Language: {}", describe(service.current()).bold());
        }

        Commands::Keys { area } => {
            let table = service.table();
            let keys: Vec<&str> = match area {
                Some(area) => table.keys_in(area).collect(),
                None => table.keys().collect(),
            };
            for key in &keys {
                let entry = table.entry(key);
                let text = |lang: &Lang| {
                    entry
                        .and_then(|e| e.get(lang))
                        .map(|t| format!("{:?}", t))
                        .unwrap_or_else(|| "-".red().to_string())
                };
                println!("{:<24} {}  {}", key, text(&Lang::Zh), text(&Lang::En));
            }
            println!("\n{} keys", keys.len());
        }

        Commands::Audit => {
            let gaps = service.table().missing();
            if gaps.is_empty() {
                println!(
                    "{} all {} keys have zh and en texts",
                    "ok:".green().bold(),
                    service.table().len()
                );
            } else {
                for (key, lang) in &gaps {
                    println!("  {} has no '{}' text", key, lang);
                }
                bail!("{} missing translations", gaps.len());
            }
        }
    }

    Ok(())
}

fn open_service(settings: &Settings) -> Result<LocaleService<FileStore>> {
    let table = match &settings.catalog {
        Some(path) => TranslationTable::load(path)?,
        None => TranslationTable::builtin(),
    };
    let store = FileStore::open(settings.store_path())?;
    Ok(LocaleService::new(table, store))
}

fn describe(lang: &Lang) -> String {
    match lang.native_name() {
        Some(name) => format!("{} ({})", lang, name),
        None => lang.to_string(),
    }
}
