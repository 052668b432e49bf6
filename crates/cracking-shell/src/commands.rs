use std::path::PathBuf;

use cracking_core::models::audience::Audience;
use cracking_core::models::page::Page;
use cracking_core::models::profile::ProfileField;

use crate::error::CommandError;
use crate::state::Event;

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(Event),
    /// Redraw the current page.
    Show,
    Help,
    /// Write the carer summary as a DOCX file.
    Export(PathBuf),
    Quit,
}

pub const HELP: &str = "\
Pages:      home | education | profile | portal | go <page>
Education:  audience <patient|carer> | open <entry-id>
Profile:    start <category> | next | back | close | question <n>
            answer <text> | clear
Anywhere:   set <field> <text> | show | export <file.docx> | help | quit";

/// Turn one input line into a command. Blank lines yield `None`.
///
/// The first word is the verb. For `answer` and `set` everything after the
/// single separating space is the raw value, surrounding whitespace included.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    if line.trim().is_empty() {
        return Ok(None);
    }
    let line = line.trim_start();
    let (verb, raw) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = raw.trim();

    let command = match verb.to_ascii_lowercase().as_str() {
        "home" => Command::Event(Event::Navigate(Page::Home)),
        "education" => Command::Event(Event::Navigate(Page::Education)),
        "profile" | "personalisation" => Command::Event(Event::Navigate(Page::Personalisation)),
        "portal" => Command::Event(Event::Navigate(Page::CarerPortal)),
        "go" => Command::Event(Event::Navigate(
            required(rest, "go", "a page name")?.parse::<Page>()?,
        )),
        "audience" => Command::Event(Event::SetAudience(
            required(rest, "audience", "'patient' or 'carer'")?.parse::<Audience>()?,
        )),
        "open" => Command::Event(Event::ToggleEntry(
            required(rest, "open", "an entry id")?.to_string(),
        )),
        "start" => Command::Event(Event::SelectCategory(
            required(rest, "start", "a category id")?.to_string(),
        )),
        "next" => Command::Event(Event::Next),
        "back" => Command::Event(Event::Back),
        "close" => Command::Event(Event::Close),
        "question" => {
            let raw = required(rest, "question", "a question number")?;
            let number: usize = raw
                .parse()
                .map_err(|_| CommandError::InvalidNumber(raw.to_string()))?;
            let index = number
                .checked_sub(1)
                .ok_or_else(|| CommandError::InvalidNumber(raw.to_string()))?;
            Command::Event(Event::GoTo(index))
        }
        "answer" => Command::Event(Event::Answer(raw.to_string())),
        "clear" => Command::Event(Event::Answer(String::new())),
        "set" => {
            required(rest, "set", "a field name")?;
            let args = raw.trim_start();
            let (field, value) = args.split_once(char::is_whitespace).unwrap_or((args, ""));
            Command::Event(Event::SetField {
                field: field.parse::<ProfileField>()?,
                value: value.to_string(),
            })
        }
        "export" => Command::Export(PathBuf::from(required(rest, "export", "a file path")?)),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(CommandError::UnknownCommand(verb.to_string())),
    };
    Ok(Some(command))
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument { command, argument })
    } else {
        Ok(rest)
    }
}
