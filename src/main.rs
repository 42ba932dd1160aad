//! Application entry point — Simak listening-dictation quiz.
//!
//! # Startup sequence
//!
//! 1. Initialise logging.
//! 2. Load [`AppConfig`] from disk (returns default on first run).
//! 3. Load the corpus manifest and build the difficulty [`Catalog`].
//! 4. Load the glossary and trivia question files (built-in starter
//!    data when absent).
//! 5. Create the [`tokio`] runtime and the command/reply channels.
//! 6. Spawn the quiz engine actor and the reply printer.
//! 7. Spawn the daily scheduler (only when enabled and a destination
//!    is configured).
//! 8. Read stdin on the main thread — the console transport — until
//!    EOF.
//!
//! # Console commands
//!
//! | input | effect |
//! |-------|--------|
//! | `!cv [easy\|normal\|hard\|all]` | start a quiz |
//! | `!hint` | next hint tier |
//! | `!answer` | reveal and close |
//! | `!today` | trivia question of the day |
//! | `!ping` | liveness check |
//! | anything else | transcription attempt |

use std::io::BufRead;

use anyhow::Context;
use tokio::sync::mpsc;

use simak::{
    config::{AppConfig, AppPaths},
    corpus::{load_manifest, Catalog, Difficulty},
    glossary::Glossary,
    quiz::{self, QuizCommand, QuizEngine, Reply},
    schedule,
    trivia::QuestionBank,
};

/// User id of the local console session.
const CONSOLE_USER: &str = "console";

// ---------------------------------------------------------------------------
// Reply printer
// ---------------------------------------------------------------------------

/// Print engine replies to stdout, resolving clip handles to paths.
///
/// Clip readability is checked here, on the transport side: an
/// unreadable clip is reported but the session the engine just started
/// stays started — `!answer` recovers it.
async fn print_replies(mut reply_rx: mpsc::Receiver<Reply>) {
    while let Some(reply) = reply_rx.recv().await {
        for message in &reply.messages {
            println!("{message}");
        }
        if let Some(clip) = &reply.clip {
            if clip.is_file() {
                println!("[clip] {}", clip.display());
            } else {
                log::warn!("clip not readable: {}", clip.display());
                println!("Error opening audio clip: {}", clip.display());
            }
        }
    }
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> anyhow::Result<()> {
    // 1. Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Simak starting up");

    // 2. Configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config ({e}); using defaults");
        AppConfig::default()
    });

    // 3. Corpus → catalog.  A missing corpus is not fatal: the engine
    //    reports empty pools per request, exactly like an unknown level.
    let records = match load_manifest(&config.corpus.manifest, &config.corpus.clips_dir) {
        Ok(records) => records,
        Err(e) => {
            log::warn!("Failed to load corpus: {e}");
            Vec::new()
        }
    };
    let catalog = Catalog::build(records);
    log::info!(
        "Catalog: easy={}, normal={}, hard={}",
        catalog.bucket(Difficulty::Easy).len(),
        catalog.bucket(Difficulty::Normal).len(),
        catalog.bucket(Difficulty::Hard).len()
    );

    // 4. Optional data files
    let paths = AppPaths::new();
    let glossary = Glossary::load_or_default(&paths.glossary_file);
    let mut questions = QuestionBank::load_or_default(&paths.questions_file);

    // 5. Runtime + channels
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("failed to create tokio runtime")?;

    let (command_tx, command_rx) = mpsc::channel::<QuizCommand>(16);
    let (reply_tx, reply_rx) = mpsc::channel::<Reply>(32);

    // 6. Engine actor + reply printer
    let engine = QuizEngine::new(catalog, glossary);
    rt.spawn(quiz::run(engine, command_rx, reply_tx));
    rt.spawn(print_replies(reply_rx));

    // 7. Daily scheduler — only with a destination and a valid time.
    if config.daily.enabled {
        match (&config.daily.destination, config.daily.fire_time()) {
            (Some(destination), Some(at)) => {
                log::info!(
                    "Daily quiz enabled at {} for {destination}",
                    config.daily.time
                );
                rt.spawn(schedule::run_daily(at, command_tx.clone()));
            }
            (None, _) => log::info!("Daily quiz enabled but no destination set — skipping"),
            (_, None) => log::warn!(
                "Daily quiz time {:?} is not HH:MM — skipping",
                config.daily.time
            ),
        }
    }

    // 8. Console transport on the main thread
    let default_level = config.quiz.default_level.clone();
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let command = match input.split_whitespace().collect::<Vec<_>>().as_slice() {
            ["!ping"] => {
                println!("pong");
                continue;
            }
            ["!today"] => {
                match questions.daily_question() {
                    Some(text) => println!("{text}"),
                    None => println!("No trivia questions loaded."),
                }
                continue;
            }
            ["!cv"] => QuizCommand::Start {
                level: default_level.clone(),
                user: CONSOLE_USER.into(),
            },
            ["!cv", level, ..] => QuizCommand::Start {
                level: (*level).to_string(),
                user: CONSOLE_USER.into(),
            },
            ["!hint"] => QuizCommand::Hint {
                user: CONSOLE_USER.into(),
            },
            ["!answer"] => QuizCommand::Reveal {
                user: CONSOLE_USER.into(),
            },
            [first, ..] if first.starts_with('!') => {
                println!("Unknown command: {first}");
                continue;
            }
            _ => QuizCommand::Submit {
                text: input.to_string(),
                user: CONSOLE_USER.into(),
            },
        };

        if command_tx.blocking_send(command).is_err() {
            log::warn!("quiz engine stopped — exiting");
            break;
        }
    }

    log::info!("stdin closed — shutting down");
    Ok(())
}
