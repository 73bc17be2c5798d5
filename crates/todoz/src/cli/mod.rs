//! Argument parsing, dispatch, and rendering for the `todoz` binary.
//!
//! The flow is the same for every invocation: open the session against the
//! slot (loading the stored list), dispatch exactly one operation, render,
//! and close (which flushes a final save). No-op outcomes such as an unknown
//! id are rendered as dim informational lines, never as process failures.

mod commands;
mod render;

use anyhow::Result;
use clap::Parser;
use todozapp::model::MoveDirection;
use todozapp::session::Session;
use todozapp::store::fs::FileSlot;

use commands::{Cli, Commands};

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let slot = match &cli.file {
        Some(path) => FileSlot::new(path),
        None => FileSlot::at_default_location()?,
    };

    let mut session = Session::open(slot)?;
    render::print_notices(&session.take_notices());

    match cli.command {
        None | Some(Commands::List) => render::print_items(session.list().items()),

        Some(Commands::Add { text }) => {
            let text = text.join(" ");
            match session.add(&text)? {
                Some(item) => render::print_success(&format!("Added {}: {}", item.id, item.text)),
                None => render::print_noop("Nothing to add: the text was empty."),
            }
        }

        Some(Commands::Done { id }) => {
            if session.toggle(id)? {
                render::print_items(session.list().items());
            } else {
                render::print_noop(&format!("No item with id {}.", id));
            }
        }

        Some(Commands::Remove { id }) => {
            if session.remove(id)? {
                render::print_success(&format!("Removed {}.", id));
            } else {
                render::print_noop(&format!("No item with id {}.", id));
            }
        }

        Some(Commands::Up { id }) => {
            move_and_render(&mut session, id, MoveDirection::Up)?;
        }

        Some(Commands::Down { id }) => {
            move_and_render(&mut session, id, MoveDirection::Down)?;
        }

        Some(Commands::Pri { id }) => {
            if session.cycle_priority(id)? {
                render::print_items(session.list().items());
            } else {
                render::print_noop(&format!("No item with id {}.", id));
            }
        }
    }

    session.close()?;
    Ok(())
}

fn move_and_render(
    session: &mut Session<FileSlot>,
    id: u64,
    direction: MoveDirection,
) -> Result<()> {
    if session.move_item(id, direction)? {
        render::print_items(session.list().items());
    } else {
        render::print_noop(&format!("No item with id {}.", id));
    }
    Ok(())
}
