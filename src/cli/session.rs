//! Interactive Session
//!
//! A line-oriented form editor. Each input line is one command; every
//! command goes through the command layer, so edits are persisted and
//! broadcast exactly as they would be from a graphical frontend.
//!
//! Text arguments take the rest of the line; `\n`, `\t` and `\\` are
//! unescaped so multi-line fields can be entered on one line.

use std::io::{BufRead, Write};

use easy_prompt_core::Section;

use crate::commands;
use crate::models::response::CommandResponse;
use crate::state::AppState;
use crate::utils::error::{AppError, AppResult};

pub const HELP: &str = "\
Commands:
  set <field> <text>               replace a field (task, role, context, ...)
  toggle <section>                 flip a section on or off
  add-example                      append an empty example
  example <n|id> <input|output> <text>
                                   edit an example
  remove-example <n|id>            delete an example
  template <id>                    load a template
  persona <id>                     load a persona
  clear                            reset the form and the preview
  show                             print the preview
  edit <text>                      overwrite the preview text
  stats                            print counters
  copy                             copy the preview to the clipboard
  flush                            save now
  help                             show this list
  quit                             save and exit";

/// One parsed session line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Set { field: String, value: String },
    Toggle { section: String },
    AddExample,
    Example { target: String, field: String, value: String },
    RemoveExample { target: String },
    Template { id: String },
    Persona { id: String },
    Clear,
    Show,
    Edit { value: String },
    Stats,
    Copy,
    Flush,
    Help,
    Quit,
}

/// Replace `\n`, `\t` and `\\` escapes. Other backslashes are kept.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Split off the first whitespace-delimited word.
fn next_word(line: &str) -> (&str, &str) {
    let line = line.trim_start();
    match line.find(char::is_whitespace) {
        Some(pos) => (&line[..pos], line[pos..].trim_start()),
        None => (line, ""),
    }
}

fn required<'a>(word: &'a str, what: &str, usage: &str) -> AppResult<&'a str> {
    if word.is_empty() {
        Err(AppError::validation(format!("missing {} (usage: {})", what, usage)))
    } else {
        Ok(word)
    }
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> AppResult<Option<SessionCommand>> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() || line.trim_start().starts_with('#') {
        return Ok(None);
    }
    let (verb, rest) = next_word(line);
    let command = match verb.to_ascii_lowercase().as_str() {
        "set" => {
            let (field, value) = next_word(rest);
            SessionCommand::Set {
                field: required(field, "field", "set <field> <text>")?.to_string(),
                value: unescape(value),
            }
        }
        "toggle" => SessionCommand::Toggle {
            section: required(rest.trim(), "section", "toggle <section>")?.to_string(),
        },
        "add-example" => SessionCommand::AddExample,
        "example" => {
            let usage = "example <n|id> <input|output> <text>";
            let (target, rest) = next_word(rest);
            let (field, value) = next_word(rest);
            SessionCommand::Example {
                target: required(target, "example", usage)?.to_string(),
                field: required(field, "input or output", usage)?.to_string(),
                value: unescape(value),
            }
        }
        "remove-example" => SessionCommand::RemoveExample {
            target: required(rest.trim(), "example", "remove-example <n|id>")?.to_string(),
        },
        "template" => SessionCommand::Template {
            id: required(rest.trim(), "template id", "template <id>")?.to_string(),
        },
        "persona" => SessionCommand::Persona {
            id: required(rest.trim(), "persona id", "persona <id>")?.to_string(),
        },
        "clear" => SessionCommand::Clear,
        "show" => SessionCommand::Show,
        "edit" => SessionCommand::Edit {
            value: unescape(rest),
        },
        "stats" => SessionCommand::Stats,
        "copy" => SessionCommand::Copy,
        "flush" | "save" => SessionCommand::Flush,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other => {
            return Err(AppError::validation(format!(
                "unknown command '{}' (try 'help')",
                other
            )))
        }
    };
    Ok(Some(command))
}

/// Resolve `n` (1-based position) or a literal id to an example id.
async fn resolve_example(state: &AppState, target: &str) -> String {
    if let Ok(position) = target.parse::<usize>() {
        let form = state.form_view().await;
        if let Some(example) = position.checked_sub(1).and_then(|i| form.record.examples.get(i)) {
            return example.id.clone();
        }
    }
    target.to_string()
}

fn report<T>(out: &mut impl Write, response: &CommandResponse<T>) -> AppResult<bool> {
    if let Some(error) = &response.error {
        writeln!(out, "error: {}", error)?;
    }
    Ok(response.success)
}

/// Run one command. Returns `false` when the session should end.
pub async fn execute(
    state: &AppState,
    command: SessionCommand,
    out: &mut impl Write,
) -> AppResult<bool> {
    match command {
        SessionCommand::Set { field, value } => {
            if report(out, &commands::set_field(state, &field, value).await)? {
                writeln!(out, "ok")?;
            }
        }
        SessionCommand::Toggle { section } => {
            let response = commands::toggle_section(state, &section).await;
            if report(out, &response)? {
                if let Some(form) = response.data {
                    let section: Section = section.parse()?;
                    let switch = if form.record.enabled_sections.is_enabled(section) {
                        "on"
                    } else {
                        "off"
                    };
                    writeln!(out, "{} {}", section.key(), switch)?;
                }
            }
        }
        SessionCommand::AddExample => {
            let response = commands::add_example(state).await;
            if report(out, &response)? {
                if let Some(added) = response.data {
                    writeln!(
                        out,
                        "added example {} ({})",
                        added.form.record.examples.len(),
                        added.id
                    )?;
                }
            }
        }
        SessionCommand::Example {
            target,
            field,
            value,
        } => {
            let id = resolve_example(state, &target).await;
            if report(out, &commands::update_example(state, id, &field, value).await)? {
                writeln!(out, "ok")?;
            }
        }
        SessionCommand::RemoveExample { target } => {
            let id = resolve_example(state, &target).await;
            if report(out, &commands::remove_example(state, id).await)? {
                writeln!(out, "ok")?;
            }
        }
        SessionCommand::Template { id } => {
            if report(out, &commands::load_template(state, &id).await)? {
                writeln!(out, "loaded template {}", id)?;
            }
        }
        SessionCommand::Persona { id } => {
            if report(out, &commands::load_persona(state, &id).await)? {
                writeln!(out, "loaded persona {}", id)?;
            }
        }
        SessionCommand::Clear => {
            if report(out, &commands::clear_all(state).await)? {
                writeln!(out, "cleared")?;
            }
        }
        SessionCommand::Show => {
            let response = commands::get_preview(state).await;
            if let Some(preview) = response.data {
                match preview.hint {
                    Some(hint) => writeln!(out, "{}", hint)?,
                    None => writeln!(out, "{}", preview.text)?,
                }
                if preview.is_edited {
                    writeln!(out, "(edited)")?;
                }
            }
        }
        SessionCommand::Edit { value } => {
            let response = commands::edit_preview(state, value).await;
            if let Some(preview) = response.data {
                writeln!(out, "{}", if preview.is_edited { "edited" } else { "in sync" })?;
            }
        }
        SessionCommand::Stats => {
            if let Some(stats) = commands::get_stats(state).await.data {
                writeln!(
                    out,
                    "characters: {}  words: {}  tokens: ~{}  sections: {}",
                    stats.characters, stats.words, stats.token_estimate, stats.sections
                )?;
            }
        }
        SessionCommand::Copy => {
            let response = commands::copy_preview(state).await;
            if report(out, &response)? {
                if let Some(status) = response.data {
                    writeln!(out, "{:?}", status)?;
                }
            }
        }
        SessionCommand::Flush => {
            if report(out, &commands::flush(state).await)? {
                writeln!(out, "saved")?;
            }
        }
        SessionCommand::Help => writeln!(out, "{}", HELP)?,
        SessionCommand::Quit => return Ok(false),
    }
    Ok(true)
}

/// Read commands from `input` until EOF or `quit`, then flush.
pub async fn run_session(
    state: &AppState,
    input: impl BufRead,
    out: &mut impl Write,
) -> AppResult<()> {
    for line in input.lines() {
        let line = line?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "error: {}", e)?;
                continue;
            }
        };
        if !execute(state, command, out).await? {
            break;
        }
        out.flush()?;
    }
    state.flush().await?;
    Ok(())
}
