use std::fs;
use std::io::{self, Write};
use std::process;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use tracing::Level;

use locale_patch::core::{format_output_path, patch_document, print_error_message, PatchOptions};
use locale_patch::env::{self, EnvVar};
use locale_patch::translation::error::helpers::log_error;
use locale_patch::translation::{ConfigManager, Locale, TranslationConfig, TranslationResult};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LocaleArg {
    Source,
    Target,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::Source => Locale::Source,
            LocaleArg::Target => Locale::Target,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "locale-patch",
    version,
    about = "Swap the text of a rendered page between its source and target locale"
)]
struct Cli {
    /// HTML file to patch
    #[arg(required_unless_present_any = ["print_env", "init_config"])]
    input: Option<String>,

    /// Write output to file ("%lang%" is replaced by the locale code), stdout if omitted
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Locale to render the document in
    #[arg(short = 'l', long = "locale", value_enum, default_value = "target")]
    locale: LocaleArg,

    /// Flat JSON or TOML translation table merged over the built-in one
    #[arg(short = 't', long = "table")]
    table: Option<String>,

    /// Read settings from this file instead of the default search paths
    #[arg(short = 'c', long = "config")]
    config: Option<String>,

    /// Character encoding of the input document
    #[arg(short = 'e', long = "encoding")]
    encoding: Option<String>,

    /// Do not use the built-in translation table
    #[arg(long = "no-builtin")]
    no_builtin: bool,

    /// List text fragments without a translation on stderr
    #[arg(long = "report")]
    report: bool,

    /// Print supported environment variables and exit
    #[arg(long = "print-env")]
    print_env: bool,

    /// Write an example configuration file and exit
    #[arg(long = "init-config", value_name = "PATH")]
    init_config: Option<String>,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        Level::DEBUG
    } else {
        let name = env::core::LogLevel::get_or_default("warn".to_string());
        Level::from_str(&name).unwrap_or(Level::WARN)
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn load_config(cli: &Cli) -> TranslationResult<TranslationConfig> {
    let mut config = match &cli.config {
        Some(path) => ConfigManager::from_file(path)?.into_config(),
        None => ConfigManager::new()?.into_config(),
    };

    if let Some(table) = &cli.table {
        config.table_path = Some(table.clone());
    }
    if cli.no_builtin {
        config.builtin_table = false;
    }

    Ok(config)
}

fn run(cli: Cli) -> TranslationResult<()> {
    if cli.print_env {
        print!("{}", env::generate_env_docs());
        return Ok(());
    }

    if let Some(path) = &cli.init_config {
        ConfigManager::generate_example_config(path)?;
        eprintln!("Wrote {}", path);
        return Ok(());
    }

    let config = load_config(&cli)?;
    let options = PatchOptions {
        encoding: cli.encoding.clone(),
        locale: cli.locale.into(),
        report_untranslated: cli.report,
    };

    let Some(input) = cli.input.as_deref() else {
        return Ok(());
    };
    let result = patch_document(input, &options, &config)?;

    if cli.report {
        for fragment in &result.untranslated {
            eprintln!("untranslated: {}", fragment);
        }
    }

    match &cli.output {
        Some(template) => {
            let lang = match options.locale {
                Locale::Source => &config.source_lang,
                Locale::Target => &config.target_lang,
            };
            fs::write(format_output_path(template, lang), &result.data)?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&result.data)?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        log_error(&e);
        print_error_message(&e.to_string());
        process::exit(1);
    }
}
