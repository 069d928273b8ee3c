//! Line-oriented terminal front end.
//!
//! Turns typed lines into [`Command`]s and draws snapshots as a text progress
//! bar. Used by the `progress-tracker` binary.

use std::io::Write;

use tracing::warn;

use crate::animation::AnimationFlag;
use crate::error::CommandParseError;
use crate::renderer::Renderer;
use crate::view::Snapshot;
use crate::Command;

const BAR_WIDTH: usize = 20;

const PULSE_MARKS: [(AnimationFlag, char); 3] = [
    (AnimationFlag::AddPulse, '+'),
    (AnimationFlag::CompletePulse, '*'),
    (AnimationFlag::ResetShake, '~'),
];

pub const HELP: &str = "\
commands:
  goal <n>                  set the goal
  type <currency|elements>  change what is counted
  stage <n>                 stage an amount without adding it
  add [n]                   add the staged amount (or stage n and add it)
  reset                     ask to reset progress
  yes | no                  confirm or cancel a reset
  lang <en|es>              switch language
  help                      show this help
  quit                      exit";

fn number(verb: &'static str, arg: Option<&str>) -> Result<f64, CommandParseError> {
    let raw = arg.ok_or(CommandParseError::MissingArgument { verb })?;
    raw.parse().map_err(|_| CommandParseError::NotANumber {
        verb,
        value: raw.to_string(),
    })
}

/// Parse one input line.
///
/// Blank lines and `help` produce no commands. `add <n>` expands to staging
/// the amount followed by a commit, mirroring typing into the amount field
/// and pressing the button.
pub fn parse_line(line: &str) -> Result<Vec<Command>, CommandParseError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(Vec::new());
    };
    let arg = words.next();

    let commands = match verb.to_ascii_lowercase().as_str() {
        "help" | "?" => Vec::new(),
        "goal" => vec![Command::SetGoal(number("goal", arg)?)],
        "type" => {
            let raw = arg.ok_or(CommandParseError::MissingArgument { verb: "type" })?;
            vec![Command::SetType(raw.parse()?)]
        }
        "stage" => vec![Command::SetPendingAmount(number("stage", arg)?)],
        "add" => match arg {
            Some(_) => vec![
                Command::SetPendingAmount(number("add", arg)?),
                Command::CommitIncrement,
            ],
            None => vec![Command::CommitIncrement],
        },
        "commit" => vec![Command::CommitIncrement],
        "reset" => vec![Command::RequestReset],
        "yes" | "y" | "si" | "sí" | "confirm" => vec![Command::ConfirmReset],
        "no" | "n" | "cancel" => vec![Command::CancelReset],
        "lang" | "language" | "idioma" => {
            let raw = arg.ok_or(CommandParseError::MissingArgument { verb: "lang" })?;
            vec![Command::SetLocale(raw.parse()?)]
        }
        "quit" | "exit" | "q" => vec![Command::Shutdown],
        _ => return Err(CommandParseError::UnknownVerb(verb.to_string())),
    };
    Ok(commands)
}

/// `[#####---------------]` for the given percent.
#[must_use]
pub fn progress_bar(percent: u8, width: usize) -> String {
    let filled = usize::from(percent.min(100)) * width / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Text rendering of a snapshot. Empty until the entry reveal has happened.
pub fn render_frame(snapshot: &Snapshot) -> String {
    let mut frame = String::new();
    if !snapshot.animation.entry_revealed {
        return frame;
    }

    let marks: String = PULSE_MARKS
        .iter()
        .filter(|(flag, _)| snapshot.animation.is_set(*flag))
        .map(|(_, mark)| *mark)
        .collect();

    frame.push_str(&format!(
        "{} {:>3}%  {}",
        progress_bar(snapshot.percent, BAR_WIDTH),
        snapshot.percent,
        snapshot.label
    ));
    if !marks.is_empty() {
        frame.push_str(&format!("  {marks}"));
    }
    if let Some(prompt) = &snapshot.texts.confirm_reset {
        frame.push_str(&format!(
            "\n{prompt} ({}/{})",
            snapshot.texts.yes, snapshot.texts.no
        ));
    }
    frame
}

/// Renderer writing frames to any [`Write`] sink, usually stdout.
///
/// Identical consecutive frames are written once.
pub struct ConsoleRenderer<W: Write> {
    out: W,
    last_frame: String,
    title_shown: bool,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last_frame: String::new(),
            title_shown: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, snapshot: &Snapshot, frame: &str) -> std::io::Result<()> {
        if !self.title_shown {
            writeln!(self.out, "{}", snapshot.texts.title)?;
            self.title_shown = true;
        }
        writeln!(self.out, "{frame}")?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render(&mut self, snapshot: Snapshot) {
        let frame = render_frame(&snapshot);
        if frame.is_empty() || frame == self.last_frame {
            return;
        }
        if let Err(err) = self.write_frame(&snapshot, &frame) {
            warn!(error = %err, "failed to write frame");
        }
        self.last_frame = frame;
    }
}
