// Line-oriented interactive shell over a Session

use crate::models::TaskStatus;
use crate::notice::Notice;
use crate::session::Session;
use clap::{Parser, Subcommand};
use colored::Colorize;
use eyre::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

pub const EMPTY_LIST: &str = "No tasks available.";

/// One line of shell input
#[derive(Parser, Debug)]
#[command(no_binary_name = true, name = "tasklist", disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
enum ShellCommand {
    /// Add a task
    Add {
        /// Initial status
        #[arg(short, long, default_value = "incomplete")]
        status: TaskStatus,

        /// Task title
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        title: Vec<String>,
    },

    /// Edit the task in a row; omitted fields keep their values
    Edit {
        row: usize,

        #[arg(short, long)]
        status: Option<TaskStatus>,

        /// New title
        #[arg(num_args = 0.., trailing_var_arg = true)]
        title: Vec<String>,
    },

    /// Delete the task in a row
    #[command(alias = "rm")]
    Delete { row: usize },

    /// Toggle the task in a row between incomplete and complete
    #[command(alias = "done")]
    Toggle { row: usize },

    /// Show all, incomplete or completed tasks
    Filter { value: String },

    /// Print the visible tasks
    #[command(alias = "ls")]
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// Output settings for the shell
#[derive(Debug, Clone, Copy)]
pub struct ShellOptions {
    pub color: bool,
    /// Print a prompt before reading each line
    pub prompt: bool,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            color: true,
            prompt: true,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Run the shell until `quit` or end of input
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, output: &mut W, options: ShellOptions) -> Result<()> {
    print_list(session, output, options)?;

    let mut lines = input.lines();
    loop {
        if options.prompt {
            write!(output, "> ")?;
            output.flush()?;
        }

        let line = match lines.next() {
            Some(line) => line.context("Failed to read input")?,
            None => break,
        };

        if execute_line(session, &line, output, options)? == Flow::Quit {
            break;
        }
    }

    debug!("Shell finished");
    Ok(())
}

fn execute_line<W: Write>(session: &mut Session, line: &str, output: &mut W, options: ShellOptions) -> Result<Flow> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Ok(Flow::Continue);
    }

    let parsed = match ShellLine::try_parse_from(words) {
        Ok(parsed) => parsed,
        Err(err) => {
            // Help output also arrives here
            debug!(kind = ?err.kind(), "parse: rejected line");
            write!(output, "{}", err)?;
            return Ok(Flow::Continue);
        }
    };

    let notice = match parsed.command {
        ShellCommand::Add { status, title } => session.add(&title.join(" "), status),
        ShellCommand::Edit { row, status, title } => {
            let title = title.join(" ");
            let title = if title.is_empty() { None } else { Some(title.as_str()) };
            session.edit(row, title, status)
        }
        ShellCommand::Delete { row } => session.delete(row),
        ShellCommand::Toggle { row } => session.toggle(row),
        ShellCommand::Filter { value } => session.filter(&value),
        ShellCommand::List { json } => {
            if json {
                print_json(session, output)?;
            } else {
                print_list(session, output, options)?;
            }
            return Ok(Flow::Continue);
        }
        ShellCommand::Quit => return Ok(Flow::Quit),
    };

    print_notice(&notice, output, options)?;
    print_list(session, output, options)?;
    Ok(Flow::Continue)
}

fn print_notice<W: Write>(notice: &Notice, output: &mut W, options: ShellOptions) -> Result<()> {
    if notice.is_error() {
        warn!(message = %notice.message, "Action rejected");
    }
    writeln!(output, "{}", notice.render(options.color))?;
    Ok(())
}

fn print_list<W: Write>(session: &Session, output: &mut W, options: ShellOptions) -> Result<()> {
    let store = session.store();
    let header = format!("TODO LIST [{}]", store.active_filter());
    if options.color {
        writeln!(output, "{}", header.bold().cyan())?;
    } else {
        writeln!(output, "{}", header)?;
    }

    let rows = session.rows();
    if rows.is_empty() {
        writeln!(output, "  {}", EMPTY_LIST)?;
    }
    for row in rows {
        writeln!(output, "  {}", row)?;
    }

    let (incomplete, complete) = store.counts();
    writeln!(output, "  ({} incomplete, {} complete)", incomplete, complete)?;
    Ok(())
}

fn print_json<W: Write>(session: &Session, output: &mut W) -> Result<()> {
    let visible = session.store().visible_tasks();
    let json = serde_json::to_string_pretty(&visible).context("Failed to serialize tasks")?;
    writeln!(output, "{}", json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motivate::{DEFAULT_MESSAGES, Motivator};
    use crate::store::TaskStore;

    const PLAIN: ShellOptions = ShellOptions {
        color: false,
        prompt: false,
    };

    fn run_script(script: &str) -> (Session, String) {
        let mut session = Session::new(TaskStore::new().with_motivator(Motivator::seeded(2)));
        let mut output = Vec::new();
        run(&mut session, script.as_bytes(), &mut output, PLAIN).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_add_with_status() {
        let parsed = ShellLine::try_parse_from(["add", "--status", "complete", "Buy", "milk"]).unwrap();
        assert_eq!(
            parsed.command,
            ShellCommand::Add {
                status: TaskStatus::Complete,
                title: vec!["Buy".to_string(), "milk".to_string()],
            }
        );
    }

    #[test]
    fn test_parse_edit_without_title() {
        let parsed = ShellLine::try_parse_from(["edit", "2", "-s", "incomplete"]).unwrap();
        assert_eq!(
            parsed.command,
            ShellCommand::Edit {
                row: 2,
                status: Some(TaskStatus::Incomplete),
                title: Vec::new(),
            }
        );
    }

    #[test]
    fn test_parse_aliases() {
        let parsed = ShellLine::try_parse_from(["rm", "1"]).unwrap();
        assert_eq!(parsed.command, ShellCommand::Delete { row: 1 });
        let parsed = ShellLine::try_parse_from(["done", "3"]).unwrap();
        assert_eq!(parsed.command, ShellCommand::Toggle { row: 3 });
        let parsed = ShellLine::try_parse_from(["exit"]).unwrap();
        assert_eq!(parsed.command, ShellCommand::Quit);
    }

    #[test]
    fn test_parse_rejects_bad_status() {
        assert!(ShellLine::try_parse_from(["add", "--status", "done", "x"]).is_err());
        assert!(ShellLine::try_parse_from(["add"]).is_err());
    }

    #[test]
    fn test_empty_list_message() {
        let (_, output) = run_script("");
        assert!(output.contains(EMPTY_LIST));
    }

    #[test]
    fn test_script_scenario() {
        let (session, output) = run_script("add Buy milk\nadd Walk dog\ntoggle 1\nfilter completed\nquit\nadd ignored\n");

        assert!(output.contains("✔ Task added successfully!"));
        assert!(output.contains("ℹ Showing completed tasks"));
        assert!(DEFAULT_MESSAGES.iter().any(|m| output.contains(m)));

        let visible = session.store().visible_tasks();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Buy milk");
        // Input after quit is not executed
        assert_eq!(session.store().len(), 2);
    }

    #[test]
    fn test_script_edit_no_change() {
        let (session, output) = run_script("add Buy milk\nedit 1 Buy milk\nedit 1\n");
        assert_eq!(output.matches("No changes made ❌").count(), 2);
        assert_eq!(session.store().tasks()[0].title, "Buy milk");
    }

    #[test]
    fn test_script_delete_and_not_found() {
        let (session, output) = run_script("add A\ndelete 1\ndelete 1\n");
        assert!(output.contains("Task deleted successfully!"));
        assert!(output.contains("✖ Task not found"));
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_script_parse_error_continues() {
        let (session, output) = run_script("frobnicate\nadd Still works\n");
        assert!(output.contains("frobnicate"));
        assert_eq!(session.store().len(), 1);
    }

    #[test]
    fn test_list_json() {
        let (_, output) = run_script("add A\nlist --json\n");
        assert!(output.contains("\"title\": \"A\""));
        assert!(output.contains("\"status\": \"incomplete\""));
    }

    #[test]
    fn test_prompt_printed() {
        let mut session = Session::new(TaskStore::new());
        let mut output = Vec::new();
        let options = ShellOptions {
            color: false,
            prompt: true,
        };
        run(&mut session, "list\n".as_bytes(), &mut output, options).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.matches("> ").count(), 2);
    }
}
