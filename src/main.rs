//! Command-line front end: load a workspace's translations and query them.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{
    Parser,
    Subcommand,
};
use i18n_resolver::config::ConfigManager;
use i18n_resolver::indexer::TranslationIndexer;
use i18n_resolver::{
    Locale,
    TextDirection,
    TranslationResolver,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "i18n-resolver", version, about = "Resolve translation keys against a workspace")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Workspace root to scan for translation files.
    #[arg(short, long, default_value = ".")]
    workspace: PathBuf,

    /// Settings file (defaults to `<workspace>/.i18n-resolver.json`).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one key.
    Resolve {
        /// Translation key (the singular key when `--plural` is given).
        key: String,

        /// Locale to resolve in, instead of the configured default.
        #[arg(short, long)]
        locale: Option<Locale>,

        /// Placeholder value as `name=value`; repeatable.
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,

        /// Plural key, selected unless `--count` is 1.
        #[arg(long, requires = "count")]
        plural: Option<String>,

        #[arg(long, requires = "plural", allow_negative_numbers = true)]
        count: Option<i64>,
    },
    /// List keys each locale cannot resolve.
    Check,
    /// Print the text direction of a locale.
    Direction { locale: Locale },
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected name=value, got '{raw}'"))
}

fn load_resolver(cli: &Cli) -> anyhow::Result<TranslationResolver> {
    let mut config_manager = ConfigManager::new();
    config_manager
        .load_settings(Some(cli.workspace.as_path()), cli.config.as_deref())
        .context("failed to load settings")?;

    let mut indexer = TranslationIndexer::new();
    let table = indexer
        .index_workspace(&cli.workspace, &config_manager)
        .context("failed to index translation files")?;
    for path in indexer.skipped() {
        eprintln!("warning: skipped {}", path.display());
    }

    let mut resolver = TranslationResolver::new();
    resolver.set_translations(table);
    if !config_manager.get_settings().apply_to(&mut resolver)? {
        eprintln!(
            "warning: default locale '{}' has no translations, using {}",
            config_manager.get_settings().default_locale,
            resolver.locale()
        );
    }

    Ok(resolver)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Resolve { key, locale, params, plural, count } => {
            let mut resolver = load_resolver(&cli)?;
            if let Some(locale) = locale
                && !resolver.set_locale(locale.clone())
            {
                eprintln!("warning: no translations for {locale}, using {}", resolver.locale());
            }

            let params: Vec<(&str, &str)> =
                params.iter().map(|(name, value)| (name.as_str(), value.as_str())).collect();
            let text = match (plural, count) {
                (Some(plural), Some(count)) => {
                    resolver.resolve_plural(key, plural, *count, &params)
                }
                _ => resolver.resolve_with(key, &params),
            };
            println!("{text}");
        }
        Commands::Check => {
            let resolver = load_resolver(&cli)?;
            let mut locales: Vec<Locale> =
                resolver.translations().keys().filter_map(|key| key.parse().ok()).collect();
            locales.sort_by_key(Locale::to_string);

            let mut complete = true;
            for locale in &locales {
                let missing = resolver.missing_keys(locale);
                if missing.is_empty() {
                    println!("{locale}: complete");
                    continue;
                }
                complete = false;
                println!("{locale}: {} missing", missing.len());
                for key in missing {
                    println!("  {key}");
                }
            }

            if !complete {
                std::process::exit(1);
            }
        }
        Commands::Direction { locale } => {
            println!("{}", TextDirection::for_locale(locale));
        }
    }

    Ok(())
}
