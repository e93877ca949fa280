use anyhow::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use common::{is_blank, Draft, RequestId};
use crate::board::RequestBoard;
use crate::client::RequestApi;
use crate::view::render_board;

const HELP: &str = "Commands:
  new            create a request
  advance <id>   move a request to its next status
  refresh        reload the list
  help           show this help
  quit           leave the dashboard";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    New,
    Advance(RequestId),
    Refresh,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let cmd = parts.next().unwrap_or("").to_lowercase();
    match cmd.as_str() {
        "new" | "add" => Ok(Command::New),
        "advance" | "ack" | "complete" => match parts.next() {
            Some(id) => id.parse().map(Command::Advance).map_err(|e: anyhow::Error| e.to_string()),
            None => Err(format!("Usage: {} <id>", cmd)),
        },
        "refresh" | "r" => Ok(Command::Refresh),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        _ => Err(format!("Unknown command: {}", cmd)),
    }
}

/// Interactive session: render, read one command, act, render again.
pub async fn run<A, R, W>(board: &mut RequestBoard<A>, input: R, out: &mut W) -> Result<()>
where
    A: RequestApi,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    board.load().await;
    write!(out, "{}", render_board(board))?;
    writeln!(out, "Type 'help' for commands.")?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let line = match lines.next_line().await? {
            Some(line) => line,
            None => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            Ok(Command::Refresh) => board.load().await,
            Ok(Command::New) => {
                // A draft left over from a failed submit is offered again.
                let kept = board.draft().clone();
                let Some(name) = prompt_required(&mut lines, out, "Customer name", &kept.customer_name).await? else { break };
                let Some(details) = prompt_required(&mut lines, out, "Request details", &kept.request_details).await? else { break };
                if let Err(e) = board.submit_draft(Draft::new(name, details)).await {
                    writeln!(out, "{}", e)?;
                    continue;
                }
            }
            Ok(Command::Advance(id)) => {
                let next = board.find(id).map(|r| r.status.next());
                match next {
                    None => {
                        writeln!(out, "Request {} not found", id)?;
                        continue;
                    }
                    Some(None) => {
                        writeln!(out, "Request {} is already completed", id)?;
                        continue;
                    }
                    Some(Some(next)) => board.advance(id, next).await,
                }
            }
            Err(msg) => {
                writeln!(out, "{}", msg)?;
                continue;
            }
        }

        write!(out, "{}", render_board(board))?;
    }

    Ok(())
}

/// Ask until a non-blank answer is given; a blank line keeps `current` if it
/// is non-blank. Answers are returned as typed. `None` on end of input.
async fn prompt_required<R, W>(
    lines: &mut tokio::io::Lines<R>,
    out: &mut W,
    label: &str,
    current: &str,
) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    loop {
        if is_blank(current) {
            write!(out, "{}: ", label)?;
        } else {
            write!(out, "{} [{}]: ", label, current)?;
        }
        out.flush()?;
        match lines.next_line().await? {
            Some(line) if !is_blank(&line) => return Ok(Some(line)),
            Some(_) if !is_blank(current) => return Ok(Some(current.to_string())),
            Some(_) => writeln!(out, "{} is required", label)?,
            None => return Ok(None),
        }
    }
}
