//! Bias Detector CLI
//!
//! Highlights political, gender and cultural bias-indicative words in text.

use bias_core::persistence::save_lexicon;
use bias_core::render::TerminalRenderer;
use bias_core::report::html_page;
use bias_core::{classifier_from_config, BiasClassifier, Config, Report, Result};
use clap::{Parser, Subcommand};
use log::{error, info, warn};
use rayon::prelude::*;
use std::fs;
use std::io::{self, stdin, stdout, BufRead, Read, Write};
use std::path::PathBuf;

const EMPTY_INPUT_HINT: &str = "Please enter or upload some text to analyze.";

#[derive(Parser)]
#[command(name = "bias_detector")]
#[command(version)]
#[command(about = "Societal bias detector for news stories", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Lexicon file (.json or .bin); overrides the configuration
    #[arg(short, long, global = true)]
    lexicon: Option<PathBuf>,

    /// Plain output without terminal colors
    #[arg(long, global = true)]
    no_color: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze text files, inline text or stdin
    Analyze {
        /// Input text files (stdin when none and no --text)
        files: Vec<PathBuf>,

        /// Text to analyze
        #[arg(short, long)]
        text: Option<String>,

        /// Also write an HTML report to this file
        #[arg(long)]
        html: Option<PathBuf>,
    },

    /// Analyze one line at a time; 'exit' quits
    Interactive,

    /// Inspect or export the active lexicon
    Lexicon {
        #[command(subcommand)]
        action: LexiconAction,
    },
}

#[derive(Subcommand)]
enum LexiconAction {
    /// Print categories, explanations and keywords
    Show,

    /// Write the lexicon to a file (.bin for a bincode snapshot, otherwise JSON)
    Export {
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let result = load_config(&cli).and_then(|config| {
        let classifier = classifier_from_config(&config)?;
        match cli.command {
            Commands::Analyze { files, text, html } => {
                analyze(&classifier, &config, files, text, html)
            }
            Commands::Interactive => interactive(&classifier, &config),
            Commands::Lexicon { action } => match action {
                LexiconAction::Show => show_lexicon(&classifier),
                LexiconAction::Export { path } => save_lexicon(classifier.lexicon(), &path),
            },
        }
    });

    if let Err(e) = result {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_or_default(cli.config.as_deref())?;
    if let Some(lexicon) = &cli.lexicon {
        config.lexicon_path = Some(lexicon.clone());
    }
    if cli.no_color {
        config.report.color = false;
    }
    Ok(config)
}

fn analyze(
    classifier: &BiasClassifier,
    config: &Config,
    files: Vec<PathBuf>,
    text: Option<String>,
    html: Option<PathBuf>,
) -> Result<()> {
    let mut inputs: Vec<(String, String)> = Vec::new();
    if let Some(text) = text {
        inputs.push(("text".to_string(), text));
    }
    for path in files {
        let content = fs::read_to_string(&path)?;
        inputs.push((path.display().to_string(), content));
    }
    if inputs.is_empty() {
        let mut content = String::new();
        stdin().read_to_string(&mut content)?;
        inputs.push(("stdin".to_string(), content));
    }

    inputs.retain(|(name, content)| {
        if content.trim().is_empty() {
            warn!("{}: {}", name, EMPTY_INPUT_HINT);
            false
        } else {
            true
        }
    });
    if inputs.is_empty() {
        println!("{}", EMPTY_INPUT_HINT);
        return Ok(());
    }

    let renderer = TerminalRenderer::new(stdout(), config.report.clone());
    let reports: Vec<Report> = inputs
        .par_iter()
        .map(|(name, content)| -> Result<Report> {
            let report = Report::build(classifier.analyze(content), classifier.lexicon())?;
            renderer.render(name, &report)?;
            Ok(report)
        })
        .collect::<Result<_>>()?;

    if let Some(path) = html {
        let sections: Vec<(&str, &Report)> = inputs
            .iter()
            .map(|(name, _)| name.as_str())
            .zip(reports.iter())
            .collect();
        fs::write(&path, html_page("Bias Analysis", &sections))?;
        info!("Wrote HTML report to {}", path.display());
    }
    Ok(())
}

fn interactive(classifier: &BiasClassifier, config: &Config) -> Result<()> {
    let renderer = TerminalRenderer::new(stdout(), config.report.clone());

    println!("Societal Bias Detector. Type a line of text to analyze, 'exit' to quit.");
    println!("---------------------------------------------------------------");

    let mut count = 0;
    prompt()?;
    for line in stdin().lock().lines() {
        let input = line?;
        match input.trim() {
            "exit" => break,
            "" => println!("{}", EMPTY_INPUT_HINT),
            text => {
                count += 1;
                let report = Report::build(classifier.analyze(text), classifier.lexicon())?;
                renderer.render(&format!("input {}", count), &report)?;
            }
        }
        prompt()?;
    }
    Ok(())
}

fn prompt() -> io::Result<()> {
    print!("> ");
    stdout().flush()
}

fn show_lexicon(classifier: &BiasClassifier) -> Result<()> {
    let lexicon = classifier.lexicon();
    let mut out = stdout().lock();
    for (priority, entry) in lexicon.entries().iter().enumerate() {
        writeln!(out, "{}. {} ({})", priority + 1, entry.category.title(), entry.category)?;
        writeln!(out, "   {}", entry.explanation)?;
        writeln!(out, "   {}", entry.keywords.join(", "))?;
    }
    writeln!(
        out,
        "{} categories, {} keywords",
        lexicon.categories().len(),
        lexicon.keyword_count()
    )?;
    Ok(())
}
