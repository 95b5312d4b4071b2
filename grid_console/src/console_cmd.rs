use anyhow::{bail, Context};
use scoring::roster::{self, Role};

pub const HELP: &str = "\
commands:
  bat <1-5> <name>          set batsman row (#n picks roster entry n, - blanks it)
  bowl <1-5> <name>         set bowler column (#n picks roster entry n, - blanks it)
  scan <text>               fill slots from names found in recognized sheet text
  show                      print the grid
  roster [bat|bowl] [query] list roster names
  reset                     blank the local grid
  submit                    send every filled cell to the server
  list                      print records stored on the server
  clear                     delete server records and blank the grid
  help                      print this help
  quit                      exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCmd {
    SetName { role: Role, index: usize, name: String },
    Scan(String),
    Show,
    Roster { role: Option<Role>, query: String },
    Reset,
    Submit,
    List,
    Clear,
    Help,
    Quit,
}

impl ConsoleCmd {
    pub fn parse(input: &str) -> anyhow::Result<ConsoleCmd> {
        let (message_type, rem) = split_word(input.trim());

        let cmd = match message_type {
            "bat" => parse_set_name(Role::Batsman, rem)?,
            "bowl" => parse_set_name(Role::Bowler, rem)?,
            "scan" => {
                if rem.is_empty() {
                    bail!("scan needs the recognized text");
                }
                ConsoleCmd::Scan(rem.to_owned())
            }
            "show" => ConsoleCmd::Show,
            "roster" => {
                let (first, rest) = split_word(rem);
                match Role::parse(first) {
                    Some(role) => ConsoleCmd::Roster { role: Some(role), query: rest.to_owned() },
                    None => ConsoleCmd::Roster { role: None, query: rem.to_owned() },
                }
            }
            "reset" => ConsoleCmd::Reset,
            "submit" => ConsoleCmd::Submit,
            "list" => ConsoleCmd::List,
            "clear" => ConsoleCmd::Clear,
            "help" | "?" => ConsoleCmd::Help,
            "quit" | "exit" => ConsoleCmd::Quit,
            "" => bail!("empty command, try `help`"),
            _ => bail!("cmd not recognized: {message_type}"),
        };
        Ok(cmd)
    }
}

fn split_word(input: &str) -> (&str, &str) {
    match input.find(' ') {
        Some(i) => (&input[..i], input[i + 1..].trim()),
        None => (input, ""),
    }
}

fn parse_set_name(role: Role, rem: &str) -> anyhow::Result<ConsoleCmd> {
    let (slot, name) = split_word(rem);
    let slot = slot.parse::<usize>().with_context(|| format!("expected a slot number, got `{slot}`"))?;
    if slot == 0 {
        bail!("slots are numbered from 1");
    }
    let name = expand_name(role, name)?;
    Ok(ConsoleCmd::SetName { role, index: slot - 1, name })
}

/// `#n` picks from the roster and `-` blanks the slot. Anything else is
/// taken verbatim so names outside the roster still work.
fn expand_name(role: Role, name: &str) -> anyhow::Result<String> {
    if name == "-" {
        return Ok(String::new());
    }
    if let Some(number) = name.strip_prefix('#') {
        let number = number.parse::<usize>().with_context(|| format!("bad roster number `{number}`"))?;
        let picked = roster::pick(role, number).with_context(|| format!("no roster entry #{number}"))?;
        return Ok(picked.to_owned());
    }
    if name.is_empty() {
        bail!("missing name, use - to blank the slot");
    }
    Ok(name.to_owned())
}
