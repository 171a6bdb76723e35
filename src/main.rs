//! mdhtml CLI - Markdown to HTML transpiler

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use mdhtml::{document, io, lexer, DocumentOptions, Options};

/// Convert a Markdown file to a standalone HTML page.
#[derive(Debug, Parser)]
#[command(name = "mdhtml", version, about)]
struct Cli {
    /// Input Markdown file (`-` reads stdin)
    input: PathBuf,

    /// Output HTML file (`-` writes stdout)
    #[arg(default_value_os_t = io::default_output())]
    output: PathBuf,

    /// Page title
    #[arg(long, default_value = document::DEFAULT_TITLE)]
    title: String,

    /// Omit the embedded stylesheet
    #[arg(long)]
    no_style: bool,

    /// Write only the HTML fragment, without the document shell
    #[arg(long)]
    fragment: bool,

    /// Add `class="language-<tag>"` to fenced code blocks
    #[arg(long)]
    language_class: bool,

    /// More log output (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    fn document_options(&self) -> DocumentOptions {
        DocumentOptions {
            title: self.title.clone(),
            stylesheet: (!self.no_style).then(|| document::DEFAULT_STYLESHEET.to_owned()),
            ..DocumentOptions::default()
        }
    }
}

fn run(cli: &Cli) -> mdhtml::Result<()> {
    log::info!("Input:  {}", cli.input.display());
    log::info!("Output: {}", cli.output.display());

    log::info!("Reading input file...");
    let lines = io::read_lines(&cli.input)?;

    log::info!("Performing lexical analysis...");
    let tokens = lexer::tokenize(&lines);
    log::info!("Generated {} tokens", tokens.len());

    log::info!("Parsing tokens...");
    let options = Options {
        language_class: cli.language_class,
    };
    let root = mdhtml::block::parse_with_options(&tokens, &options);

    log::info!("Generating HTML...");
    let body = mdhtml::render(&root);
    let html = if cli.fragment {
        body
    } else {
        document::wrap(&body, &cli.document_options())
    };

    log::info!("Writing output file...");
    io::write_output(&cli.output, &html)?;

    log::info!("HTML file generated: {}", cli.output.display());
    Ok(())
}

/// Logger at the `-v` level; `RUST_LOG` directives, when set, are applied
/// last and take precedence.
fn logger(level: log::LevelFilter, env_filters: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if let Some(filters) = env_filters {
        builder.parse_filters(filters);
    }
    builder
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let env_filters = std::env::var(env_logger::DEFAULT_FILTER_ENV).ok();
    logger(cli.log_level(), env_filters.as_deref()).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
