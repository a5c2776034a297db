//! Application - Session Setup and Input Loop
//!
//! Main entry point for the terminal session.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::app::settings::Settings;
use crate::components::layout::{ConfigDemo, Header};
use crate::helpers::SessionAction;
use crate::states::{ConfigStore, i18n_session};
use crate::storage::{FileBackend, MemoryBackend, PersistenceBackend};

/// Open the backend selected by `settings`
pub fn open_backend(settings: &Settings) -> Result<Box<dyn PersistenceBackend>> {
    if settings.in_memory {
        info!("Using in-memory storage");
        return Ok(Box::new(MemoryBackend::new()));
    }

    let backend = match &settings.storage_dir {
        Some(dir) => FileBackend::new(dir),
        None => FileBackend::open_default().context("Could not open the data directory")?,
    };
    info!(dir = ?backend.dir(), "Using file storage");
    Ok(Box::new(backend))
}

/// Run the application against stdin/stdout
pub fn run_app(settings: &Settings) -> Result<()> {
    let backend = open_backend(settings)?;
    let mut store = ConfigStore::with_key(backend, settings.storage_key.clone());

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut store, stdin.lock(), &mut stdout.lock())
}

/// Drive both panels from line-based input until EOF or `quit`
pub fn run_session<B, R, W>(store: &mut ConfigStore<B>, input: R, output: &mut W) -> Result<()>
where
    B: PersistenceBackend,
    R: BufRead,
    W: Write,
{
    let header = Header::new(store);
    let demo = ConfigDemo::new(store);

    // Observers are removed even when the loop fails
    let result = drive_panels(store, &header, &demo, input, output);
    header.detach(store);
    demo.detach(store);
    result?;

    output.flush()?;
    Ok(())
}

fn drive_panels<B, R, W>(
    store: &mut ConfigStore<B>,
    header: &Header,
    demo: &ConfigDemo,
    input: R,
    output: &mut W,
) -> Result<()>
where
    B: PersistenceBackend,
    R: BufRead,
    W: Write,
{
    report_write_error(store, output)?;
    render_dirty(store, header, demo, output)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        let action = match line.parse::<SessionAction>() {
            Ok(action) => action,
            Err(e) => {
                debug!(input = %line, error = %e, "Rejected input");
                writeln!(output, "{}: {e}", i18n_session(store.language(), "unknown"))?;
                continue;
            }
        };

        match action {
            SessionAction::Quit => break,
            SessionAction::Help => writeln!(output, "{}", i18n_session(store.language(), "help"))?,
            SessionAction::Show => {
                header.invalidate();
                demo.invalidate();
            }
            SessionAction::ToggleTheme => demo.toggle_theme(store),
            SessionAction::SetTheme(theme) => store.set_theme(theme),
            SessionAction::ChangeLanguage(lang) => demo.change_language(store, &lang),
            SessionAction::ChangeUsername(name) => demo.on_username_change(store, &name),
        }

        report_write_error(store, output)?;
        render_dirty(store, header, demo, output)?;
    }

    Ok(())
}

fn render_dirty<B: PersistenceBackend, W: Write>(
    store: &ConfigStore<B>,
    header: &Header,
    demo: &ConfigDemo,
    output: &mut W,
) -> Result<()> {
    if header.needs_render() {
        writeln!(output, "{}", header.render(store))?;
    }
    if demo.needs_render() {
        writeln!(output, "{}", demo.render(store))?;
    }
    Ok(())
}

fn report_write_error<B: PersistenceBackend, W: Write>(
    store: &mut ConfigStore<B>,
    output: &mut W,
) -> Result<()> {
    if let Some(e) = store.take_write_error() {
        writeln!(output, "{} ({e})", i18n_session(store.language(), "write_failed"))?;
    }
    Ok(())
}
