//! Interactive console front end for the Gorev task manager
//!
//! All task state lives in `gorev-core`; this binary renders menus and
//! prompts in the selected language and maps store errors to messages.

mod app;
mod lang;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gorev_core::task::TaskStore;

use crate::app::App;
use crate::lang::{error_key, message, Locale};

#[derive(Parser, Debug)]
#[command(name = "gorev", version, about = "Interactive task list manager")]
struct Cli {
    /// Storage file for tasks
    #[arg(long, default_value = "tasks.json")]
    file: PathBuf,

    /// Interface language at startup
    #[arg(long, value_enum, default_value_t = Locale::Turkish)]
    lang: Locale,
}

fn main() -> Result<()> {
    // Log lines go to stderr so they never interleave with the menu
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gorev_cli=info,gorev_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // A broken storage file must not prevent startup; surface the error
    // and continue with an empty list.
    let store = match TaskStore::open(&cli.file) {
        Ok(store) => store,
        Err(err) => {
            tracing::warn!("failed to load tasks: {}", err);
            eprintln!("{}{}", message(cli.lang, error_key(&err)), err);
            TaskStore::new(&cli.file)
        }
    };

    App::new(store, cli.lang).run()?;
    Ok(())
}
