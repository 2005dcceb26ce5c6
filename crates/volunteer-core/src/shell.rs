use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, anyhow};
use tracing::{debug, info, warn};
use volunteer_model::{DeleteOutcome, EventOutcome, FilterField, TaskViewModel, ViewEvent};

use crate::render::Renderer;

const HELP: &str = "\
commands:
  filter <type|date|points> [value]   set a filter field (no value clears it)
  page <n>                            jump to a page
  next | prev                         move one page
  delete <id>                         ask to delete a task
  confirm | cancel                    answer the delete dialog
  show                                redraw the current page
  help                                this text
  quit                                leave the shell";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Event(ViewEvent),
    Show,
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (head, rest) = line
            .split_once(char::is_whitespace)
            .map(|(h, r)| (h, r.trim()))
            .unwrap_or((line, ""));

        let event = match head {
            "filter" => {
                let (field, value) = rest
                    .split_once(char::is_whitespace)
                    .map(|(f, v)| (f, v.trim()))
                    .unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err(anyhow!("usage: filter <type|date|points> [value]"));
                }
                ViewEvent::FilterChanged {
                    field: field.parse::<FilterField>()?,
                    value: value.to_string(),
                }
            }
            "page" => ViewEvent::PageRequested(
                rest.parse::<usize>()
                    .with_context(|| format!("invalid page number: {rest:?}"))?,
            ),
            "next" | "n" => ViewEvent::NextRequested,
            "prev" | "previous" | "p" => ViewEvent::PreviousRequested,
            "delete" | "rm" => ViewEvent::DeleteRequested(
                rest.parse::<u64>()
                    .with_context(|| format!("invalid task id: {rest:?}"))?,
            ),
            "confirm" | "yes" => ViewEvent::DeleteConfirmed,
            "cancel" | "no" => ViewEvent::DeleteCancelled,
            "show" | "" => return Ok(ShellCommand::Show),
            "help" | "?" => return Ok(ShellCommand::Help),
            "quit" | "exit" | "q" => return Ok(ShellCommand::Quit),
            other => return Err(anyhow!("unknown command: {other} (try `help`)")),
        };

        Ok(ShellCommand::Event(event))
    }
}

/// Reads one command per line and redraws after every event. Command errors
/// are reported to `output` and the loop carries on.
#[tracing::instrument(skip_all)]
pub fn run_shell<R, W>(
    vm: &mut TaskViewModel,
    renderer: &Renderer,
    input: R,
    output: &mut W,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    renderer.print_task_page(output, &vm.snapshot())?;
    writeln!(output, "type `help` for commands")?;

    for line in input.lines() {
        let line = line.context("failed reading shell input")?;
        let command = match line.parse::<ShellCommand>() {
            Ok(command) => command,
            Err(err) => {
                warn!(error = %err, "rejected shell command");
                writeln!(output, "error: {err:#}")?;
                continue;
            }
        };
        debug!(?command, "shell command");

        match command {
            ShellCommand::Quit => break,
            ShellCommand::Help => {
                writeln!(output, "{HELP}")?;
                continue;
            }
            ShellCommand::Show => {}
            ShellCommand::Event(event) => match vm.handle(event) {
                Ok(outcome) => report_outcome(output, &outcome)?,
                Err(err) => {
                    writeln!(output, "error: {err:#}")?;
                    continue;
                }
            },
        }

        writeln!(output)?;
        renderer.print_task_page(output, &vm.snapshot())?;
    }

    info!("shell finished");
    Ok(())
}

fn report_outcome<W: Write>(output: &mut W, outcome: &EventOutcome) -> anyhow::Result<()> {
    match outcome {
        EventOutcome::Page { changed: false, current } => {
            writeln!(output, "staying on page {current}")?;
        }
        EventOutcome::Deleted(DeleteOutcome::NothingPending) => {
            writeln!(output, "nothing to delete")?;
        }
        EventOutcome::Deleted(DeleteOutcome::Dismissed(task)) => {
            writeln!(output, "\"{}\" deleted (display only)", task.name)?;
        }
        EventOutcome::Deleted(DeleteOutcome::Removed(task)) => {
            writeln!(output, "\"{}\" removed", task.name)?;
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use volunteer_model::sample::sample_tasks;
    use volunteer_model::{FilterField, TaskViewModel, ViewEvent, ViewModelPolicy};

    use super::{ShellCommand, run_shell};
    use crate::render::Renderer;

    #[test]
    fn parses_filter_commands() {
        assert_eq!(
            "filter type crowd control".parse::<ShellCommand>().expect("parse"),
            ShellCommand::Event(ViewEvent::FilterChanged {
                field: FilterField::Type,
                value: "crowd control".to_string(),
            })
        );
        assert_eq!(
            "filter points".parse::<ShellCommand>().expect("parse"),
            ShellCommand::Event(ViewEvent::FilterChanged {
                field: FilterField::MinPoints,
                value: String::new(),
            })
        );
        assert!("filter".parse::<ShellCommand>().is_err());
        assert!("filter colour red".parse::<ShellCommand>().is_err());
    }

    #[test]
    fn parses_navigation_and_delete() {
        assert_eq!(
            "page 3".parse::<ShellCommand>().expect("parse"),
            ShellCommand::Event(ViewEvent::PageRequested(3))
        );
        assert_eq!(
            "  next ".parse::<ShellCommand>().expect("parse"),
            ShellCommand::Event(ViewEvent::NextRequested)
        );
        assert_eq!(
            "delete 7".parse::<ShellCommand>().expect("parse"),
            ShellCommand::Event(ViewEvent::DeleteRequested(7))
        );
        assert!("page two".parse::<ShellCommand>().is_err());
        assert!("dance".parse::<ShellCommand>().is_err());
        assert_eq!("".parse::<ShellCommand>().expect("parse"), ShellCommand::Show);
    }

    #[test]
    fn session_survives_bad_input_and_deletes() {
        let mut vm = TaskViewModel::new(sample_tasks(), ViewModelPolicy::default());
        let script = "page 9\nbogus\ndelete 2\nconfirm\nnext\nquit\nnext\n";
        let mut out = Vec::new();

        run_shell(&mut vm, &Renderer::plain(), Cursor::new(script), &mut out).expect("shell");

        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("staying on page 1"));
        assert!(text.contains("error: unknown command: bogus"));
        assert!(text.contains("Are you sure you want to delete \"Friday Prayer Setup\"?"));
        assert!(text.contains("\"Friday Prayer Setup\" deleted (display only)"));
        assert_eq!(vm.current_page(), 2);
        assert!(!vm.workflow().confirmation_visible());
    }
}
