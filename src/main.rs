//! backpract CLI - backend practice lessons.

use backpract::cli;
use backpract::config::load_config;
use backpract::executor::{ExecutionClient, HELLO};
use backpract::logging::init_logging;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "backpract")]
#[command(author, version, about = "Backend practice lessons", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a course, replacing any finished session.
    Start {
        /// Technology (course) to take.
        technology: String,

        /// Number of lessons required to finish the course.
        #[arg(short, long)]
        lessons: u32,

        /// Abandon an unfinished course.
        #[arg(short, long)]
        force: bool,
    },

    /// Show the active session.
    Status,

    /// Move to a lesson.
    Goto {
        /// Lesson ID (e.g. "2-1").
        lesson: String,
    },

    /// Mark a lesson of the active course as completed.
    Complete {
        /// Lesson ID.
        lesson: String,
    },

    /// Clear the completion flag of one lesson.
    Uncomplete {
        /// Lesson ID.
        lesson: String,

        /// Technology the lesson belongs to.
        technology: String,
    },

    /// List completed lessons of a technology.
    Lessons {
        /// Technology to list.
        technology: String,
    },

    /// End the session and remove all lesson progress.
    Clear,

    /// Execute a source file on the execution service.
    Run {
        /// Source file, or "-" for stdin.
        file: PathBuf,

        /// Language key (see `backpract languages`).
        #[arg(short, long)]
        language: String,

        /// Text passed to the program's standard input.
        #[arg(long)]
        stdin: Option<String>,
    },

    /// List runtimes offered by the execution service.
    Runtimes,

    /// Print starter code for a language.
    Template {
        /// Language key.
        language: String,

        /// Template kind.
        #[arg(long, default_value = HELLO)]
        kind: String,
    },

    /// List supported language keys.
    Languages,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("backpract: error: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config.logging);

    let store = cli::open_store(&config);
    let client = ExecutionClient::new(config.executor.base_url.clone());

    let result = match cli.command {
        Commands::Start {
            technology,
            lessons,
            force,
        } => cli::start::run(&store, &technology, lessons, force),
        Commands::Status => {
            cli::status::run(&store);
            Ok(())
        }
        Commands::Goto { lesson } => {
            cli::lessons::goto(&store, &lesson);
            Ok(())
        }
        Commands::Complete { lesson } => cli::lessons::complete(&store, &lesson),
        Commands::Uncomplete { lesson, technology } => {
            cli::lessons::uncomplete(&store, &lesson, &technology);
            Ok(())
        }
        Commands::Lessons { technology } => {
            cli::lessons::list(&store, &technology);
            Ok(())
        }
        Commands::Clear => {
            cli::clear::run(&store);
            Ok(())
        }
        Commands::Run {
            file,
            language,
            stdin,
        } => {
            return match cli::run::run(&client, &file, &language, stdin.as_deref()).await {
                Ok(code) => ExitCode::from(cli::run::exit_status(code)),
                Err(e) => {
                    eprintln!("backpract: error: {e}");
                    ExitCode::FAILURE
                }
            };
        }
        Commands::Runtimes => cli::runtimes::run(&client).await,
        Commands::Template { language, kind } => {
            cli::template::run(&language, &kind);
            Ok(())
        }
        Commands::Languages => {
            cli::template::languages();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("backpract: error: {e}");
            ExitCode::FAILURE
        }
    }
}
