use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use slug_core::{assign_slug, PostRecord, SlugEngine, SlugError, SlugOptions, SlugRegistry};
use std::io::{self, stdin, stdout, BufRead, Write};
use std::path::PathBuf;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_REGISTRY_PATH: &str = "slug_registry.bin";

#[derive(Parser)]
#[command(name = "slug_engine", about = "Urdu text to Latin transliteration and URL slugs")]
struct Cli {
    /// JSON file with slug options (max_len, min_len, fallback).
    #[arg(long, env = "URDU_SLUG_OPTIONS", global = true)]
    options: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the slug for the given text.
    Slug { text: Vec<String> },
    /// Print the transliteration of the given text.
    Translit { text: Vec<String> },
    /// Read JSON-lines post records on stdin and write them back with slugs.
    Assign {
        #[arg(long, env = "URDU_SLUG_REGISTRY", default_value = DEFAULT_REGISTRY_PATH)]
        registry: PathBuf,
    },
    /// Type lines and see their transliteration and slug.
    Repl,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e}");
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), SlugError> {
    let options = match &cli.options {
        Some(path) => SlugOptions::from_json_file(path)?,
        None => SlugOptions::default(),
    };
    let engine = SlugEngine::new().with_options(options);

    match cli.command.unwrap_or(Command::Repl) {
        Command::Slug { text } => println!("{}", engine.make_slug(&text.join(" "))),
        Command::Translit { text } => println!("{}", engine.transliterate(&text.join(" "))),
        Command::Assign { registry } => assign_stream(&engine, registry)?,
        Command::Repl => repl(&engine)?,
    }
    Ok(())
}

fn assign_stream(engine: &SlugEngine, registry_path: PathBuf) -> Result<(), SlugError> {
    let mut registry = SlugRegistry::from_file_or_new(&registry_path);
    let mut out = stdout().lock();

    for (n, line) in stdin().lock().lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let mut post: PostRecord = match serde_json::from_str(&line) {
            Ok(post) => post,
            Err(e) => {
                warn!(line = n + 1, error = %e, "skipping malformed post record");
                continue;
            }
        };
        if let Err(e) = assign_slug(engine, &mut post, &mut registry) {
            warn!(line = n + 1, error = %e, "slug not assigned, writing post unchanged");
        }
        serde_json::to_writer(&mut out, &post)?;
        writeln!(out)?;
    }

    registry.save()
}

fn repl(engine: &SlugEngine) -> Result<(), SlugError> {
    println!("{}", "Urdu slug engine. Type 'exit' to quit.".bold());
    println!("---------------------------------------------------------------");

    let mut input = String::new();
    loop {
        print!("\n> ");
        stdout().flush()?;

        input.clear();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let text = input.trim();
        if text == "exit" {
            break;
        }
        println!("Transliteration -> {}", engine.transliterate(text).cyan());
        println!("Slug            -> {}", engine.make_slug(text).green().bold());
    }
    Ok(())
}
