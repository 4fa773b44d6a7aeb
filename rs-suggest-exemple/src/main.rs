mod session;
mod settings;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use rs_suggest_core::io::read_corpus;
use rs_suggest_core::SuggestionEngine;

use session::Session;
use settings::Settings;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Verbosity is controlled by RUST_LOG (ex. RUST_LOG=debug)
    env_logger::init();

    // Settings file: first argument, else $RS_SUGGEST_CONFIG, else defaults
    let settings_path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load(settings_path.as_deref())?;

    // Learn the corpus once, the engine is read-only afterwards
    let corpus = read_corpus(&settings.corpus_path, settings.corpus_limit())?;
    let engine = SuggestionEngine::from_corpus(&corpus, &settings.engine)?;
    drop(corpus);

    let mut session = Session::new(&engine, settings.suggestions.clone());

    println!("Type some text and press Enter (end it with a space to ask for the next word).");
    println!("Pick a suggestion with ':1', ':2'... Quit with ':q'.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print!("> ");
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        match line.as_str() {
            ":q" => break,
            s if s.starts_with(':') => match s[1..].parse::<usize>() {
                Ok(n) if n > 0 && n <= session.suggestions().len() => {
                    let chosen = session.suggestions()[n - 1].clone();
                    session.accept(&chosen);
                }
                _ => println!("No suggestion '{}'", &s[1..]),
            },
            s => session.update(s),
        }

        println!("Text: [{}]", session.input());
        if session.suggestions().is_empty() {
            println!("No suggestions.");
        }
        for (i, suggestion) in session.suggestions().iter().enumerate() {
            println!("  :{}: {}", i + 1, suggestion);
        }
        print!("> ");
        stdout.flush()?;
    }

    Ok(())
}
