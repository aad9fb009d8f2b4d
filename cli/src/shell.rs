use std::io::{self, BufRead, Lines, StdinLock, Write};

use anyhow::Result;
use entity::EmployeeDraft;
use roster::{Roster, RosterError, SlotStore, matches};

use crate::view;

const HELP: &str = "\
commands:
  list            show the roster
  search TEXT     filter the roster
  add             fill in the form for a new employee
  edit N          load row N into the form and update it
  show N          show every field of row N
  delete N        remove row N
  reset           clear the form and cancel any edit
  help            this text
  quit            leave the shell";

/// The interactive form loop. One command runs to completion before the
/// next line is read.
pub fn run(app: &mut Roster<SlotStore>) -> Result<()> {
    let mut lines = io::stdin().lock().lines();
    println!("roster shell (type 'help' for commands)");
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let mut parts = line.trim().splitn(2, ' ');
        let command = parts.next().unwrap_or("");
        let rest = parts.next().unwrap_or("").trim();
        match command {
            "" => {}
            "help" => println!("{HELP}"),
            "list" => print_table(app, ""),
            "search" => print_table(app, rest),
            "add" => {
                let draft = prompt_draft(&mut lines, EmployeeDraft::default())?;
                respond(app.add(draft).map(|r| format!("added {}", r.full_name())))?;
            }
            "edit" => match parse_index(rest) {
                Some(index) => run_edit(app, &mut lines, index)?,
                None => println!("expected a row number"),
            },
            "show" => match parse_index(rest) {
                Some(index) => respond(app.select(index).map(view::detail))?,
                None => println!("expected a row number"),
            },
            "delete" => match parse_index(rest) {
                Some(index) => {
                    respond(app.remove(index).map(|r| format!("deleted {}", r.full_name())))?;
                }
                None => println!("expected a row number"),
            },
            "reset" => {
                app.cancel_edit();
                app.clear_selection();
                println!("form cleared");
            }
            "quit" | "exit" => break,
            other => println!("unknown command '{other}', type 'help'"),
        }
    }
    Ok(())
}

fn run_edit(
    app: &mut Roster<SlotStore>,
    lines: &mut Lines<StdinLock<'static>>,
    index: usize,
) -> Result<()> {
    let buffer = match app.begin_edit(index) {
        Ok(buffer) => buffer,
        Err(err) => {
            println!("nothing changed: {err}");
            return Ok(());
        }
    };
    println!("editing row {index}; empty input keeps the current value");
    let draft = prompt_draft(lines, buffer)?;
    respond(app.commit_edit(draft).map(|r| format!("updated {}", r.full_name())))
}

fn print_table(app: &Roster<SlotStore>, query: &str) {
    let rows: Vec<_> = app
        .records()
        .iter()
        .enumerate()
        .filter(|(_, record)| matches(record, query))
        .collect();
    println!("{}", view::table(&rows));
}

/// Prompt field by field over the draft buffer. Empty input keeps whatever
/// the buffer already holds.
fn prompt_draft(
    lines: &mut Lines<StdinLock<'static>>,
    mut draft: EmployeeDraft,
) -> Result<EmployeeDraft> {
    draft.name = prompt_field(lines, "name", &draft.name)?;
    draft.last_name = prompt_field(lines, "last name", &draft.last_name)?;
    draft.position = prompt_field(lines, "position", &draft.position)?;
    draft.dni = prompt_field(lines, "dni", &draft.dni)?;
    let current_age = draft.age.map(|a| a.to_string()).unwrap_or_default();
    let entered = prompt_field(lines, "age", &current_age)?;
    draft.age = match entered.trim() {
        "" => None,
        raw => match raw.parse() {
            Ok(age) => Some(age),
            Err(_) => {
                println!("not a number, leaving age unchanged");
                draft.age
            }
        },
    };
    draft.description = prompt_field(lines, "description", &draft.description)?;
    Ok(draft)
}

fn prompt_field(
    lines: &mut Lines<StdinLock<'static>>,
    label: &str,
    current: &str,
) -> Result<String> {
    if current.is_empty() {
        print!("{label}: ");
    } else {
        print!("{label} [{current}]: ");
    }
    io::stdout().flush()?;
    let line = lines.next().transpose()?.unwrap_or_default();
    let entered = line.trim();
    Ok(if entered.is_empty() {
        current.to_string()
    } else {
        entered.to_string()
    })
}

fn parse_index(raw: &str) -> Option<usize> {
    raw.parse().ok()
}

fn respond(outcome: Result<String, RosterError>) -> Result<()> {
    match outcome {
        Ok(line) => {
            println!("{line}");
            Ok(())
        }
        Err(RosterError::Store(err)) => Err(err.into()),
        Err(err) => {
            println!("nothing changed: {err}");
            Ok(())
        }
    }
}
