use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{debug, info, warn};

use speller::config::{expand_tilde, Config, ReportMode};
use speller::lexer::Lexer;
use speller::pipeline::Pipeline;
use speller::WordSet;

#[derive(Parser, Debug)]
#[clap(
    name = "speller",
    version,
    about = "Reports the words of a text that are missing from a word list."
)]
struct Args {
    /// Word list to load. Overrides the config file.
    #[clap(short = 'd', long)]
    dictionary: Option<PathBuf>,

    /// JSON config file.
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// What to print. Overrides the config file.
    #[clap(short = 'r', long, value_enum)]
    report: Option<ReportMode>,

    /// Text to check.
    text: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(dictionary) = args.dictionary {
        config.dictionary = expand_tilde(&dictionary).unwrap_or(dictionary);
    }
    if let Some(report) = args.report {
        config.report = report;
    }
    debug!("using dictionary {}", config.dictionary.display());

    let mut words = WordSet::new();

    let start = Instant::now();
    let loaded = words.load(&config.dictionary);
    let time_load = start.elapsed();
    if let Err(err) = loaded {
        warn!("load failed, releasing partial word list");
        words.unload();
        return Err(format!("could not load {}: {err}", config.dictionary.display()).into());
    }

    let text = String::from_utf8_lossy(&fs::read(&args.text)?).into_owned();

    let start = Instant::now();
    let outcome = Pipeline::new(&words).run(Lexer::new(text));
    let time_check = start.elapsed();

    let start = Instant::now();
    let size = words.size();
    let time_size = start.elapsed();

    let start = Instant::now();
    let unloaded = words.unload();
    let time_unload = start.elapsed();
    if !unloaded {
        return Err(format!("could not unload {}", config.dictionary.display()).into());
    }

    info!(
        "checked {} words, {} misspelled",
        outcome.words,
        outcome.misspelled.len()
    );

    if config.report == ReportMode::All {
        println!("\nMISSPELLED WORDS\n");
        for token in &outcome.misspelled {
            println!("{}", token.lexeme);
        }
    }

    if config.report != ReportMode::Quiet {
        println!("\nWORDS MISSPELLED:     {}", outcome.misspelled.len());
        println!("WORDS IN DICTIONARY:  {}", size);
        println!("WORDS IN TEXT:        {}", outcome.words);
        println!("TIME IN load:         {}", seconds(time_load));
        println!("TIME IN check:        {}", seconds(time_check));
        println!("TIME IN size:         {}", seconds(time_size));
        println!("TIME IN unload:       {}", seconds(time_unload));
        println!(
            "TIME IN TOTAL:        {}\n",
            seconds(time_load + time_check + time_size + time_unload)
        );
    }

    Ok(())
}

fn seconds(d: Duration) -> String {
    format!("{:.2}", d.as_secs_f64())
}
