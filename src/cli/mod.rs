//! Command-Line Interface
//!
//! Argument definitions for the `easy-prompt` binary and the handlers for
//! its one-shot subcommands. The interactive editor lives in [`session`].

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use easy_prompt_core::{form_fields, serialize, PromptRecord, PromptStats};

use crate::state::AppState;
use crate::utils::error::AppResult;
use crate::utils::paths::DATA_DIR_ENV;

pub mod session;

pub use session::{parse_line, run_session, SessionCommand};

#[derive(Parser)]
#[command(name = "easy-prompt")]
#[command(about = "Build structured, tagged prompts from a form")]
#[command(version)]
pub struct Cli {
    /// Data directory (default: ~/.easy-prompt)
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a prompt record (JSON) to the tagged document
    Render {
        /// Record file (default: stdin)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Also print counters to stderr
        #[arg(long)]
        stats: bool,
    },

    /// List available templates
    Templates,

    /// List available personas
    Personas,

    /// List form fields and their status
    Fields,

    /// Interactive form editor over stdin (default)
    Session,
}

/// Read a record from `file` (or stdin) and print its serialization.
pub fn run_render(file: Option<&Path>, stats: bool) -> AppResult<()> {
    let content = match file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let record: PromptRecord = serde_json::from_str(&content)?;
    let text = serialize(&record);

    let mut out = io::stdout().lock();
    writeln!(out, "{}", text)?;
    if stats {
        let stats = PromptStats::compute(&text, &record);
        eprintln!(
            "characters: {}  words: {}  tokens: ~{}  sections: {}",
            stats.characters, stats.words, stats.token_estimate, stats.sections
        );
    }
    Ok(())
}

/// Print the template catalog.
pub fn run_list_templates(state: &AppState, out: &mut impl Write) -> AppResult<()> {
    for template in state.catalog().templates() {
        writeln!(out, "{:<20} {} - {}", template.id, template.name, template.description)?;
    }
    Ok(())
}

/// Print the persona catalog.
pub fn run_list_personas(state: &AppState, out: &mut impl Write) -> AppResult<()> {
    for persona in state.catalog().personas() {
        writeln!(out, "{:<20} {} - {}", persona.id, persona.name, persona.description)?;
    }
    Ok(())
}

/// Print the form fields in display order.
pub fn run_list_fields(out: &mut impl Write) -> AppResult<()> {
    for field in form_fields() {
        writeln!(
            out,
            "{:<16} {:<20} [{}] {}",
            field.section.key(),
            field.label,
            field.status.label(),
            field.description
        )?;
    }
    Ok(())
}
