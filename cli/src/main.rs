mod config;
mod shell;
mod view;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use entity::{Employee, EmployeeDraft};
use platform_obs::{ObsConfig, init_tracing};
use roster::{EMPLOYEES_SLOT, Roster, RosterError, RosterResult, SlotStore, matches};
use tracing::debug;

use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "roster", version, about = "Employee roster manager")]
struct Cli {
    /// Directory holding the durable slot.
    #[arg(long, global = true, env = "ROSTER_STATE_DIR", value_name = "DIR")]
    state_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a new employee.
    Add(DraftArgs),
    /// List employees, optionally filtered by substring.
    List {
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// Show every field of one employee.
    Show { index: usize },
    /// Edit an employee in place; omitted flags keep current values.
    Edit {
        index: usize,
        #[command(flatten)]
        fields: EditArgs,
    },
    /// Delete an employee by position.
    Delete { index: usize },
    /// Print the durable slot location.
    Path,
    /// Start the interactive shell.
    Shell,
}

#[derive(Args, Debug)]
struct DraftArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long, default_value = "")]
    position: String,
    #[arg(long, default_value = "")]
    dni: String,
    #[arg(long)]
    age: Option<u32>,
    #[arg(long, default_value = "")]
    description: String,
}

impl From<DraftArgs> for EmployeeDraft {
    fn from(args: DraftArgs) -> Self {
        Self {
            name: args.name,
            last_name: args.last_name,
            position: args.position,
            dni: args.dni,
            age: args.age,
            description: args.description,
        }
    }
}

#[derive(Args, Debug)]
struct EditArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    #[arg(long)]
    position: Option<String>,
    #[arg(long)]
    dni: Option<String>,
    #[arg(long)]
    age: Option<u32>,
    #[arg(long)]
    description: Option<String>,
}

impl EditArgs {
    fn overlay(self, draft: &mut EmployeeDraft) {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(last_name) = self.last_name {
            draft.last_name = last_name;
        }
        if let Some(position) = self.position {
            draft.position = position;
        }
        if let Some(dni) = self.dni {
            draft.dni = dni;
        }
        if let Some(age) = self.age {
            draft.age = Some(age);
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
    }
}

fn main() -> Result<()> {
    init_tracing(ObsConfig::default())?;
    let cli = Cli::parse();
    let config = AppConfig::load(cli.state_dir)?;
    let store = SlotStore::new(config.settings.slot(EMPLOYEES_SLOT));
    debug!(slot = %store.path().display(), "opening roster");
    let mut app = Roster::open(store);

    match cli.command {
        Command::Add(args) => report(
            app.add(args.into())
                .map(|record| format!("added {}", record.full_name())),
        ),
        Command::List { query } => {
            println!("{}", view::table(&filtered(&app, &query)));
            Ok(())
        }
        Command::Show { index } => report(app.select(index).map(view::detail)),
        Command::Edit { index, fields } => report(run_edit(&mut app, index, fields)),
        Command::Delete { index } => report(
            app.remove(index)
                .map(|record| format!("deleted {}", record.full_name())),
        ),
        Command::Path => {
            println!("{}", app.store().path().display());
            Ok(())
        }
        Command::Shell => shell::run(&mut app),
    }
}

fn run_edit(app: &mut Roster<SlotStore>, index: usize, fields: EditArgs) -> RosterResult<String> {
    let mut buffer = app.begin_edit(index)?;
    fields.overlay(&mut buffer);
    let record = app.commit_edit(buffer)?;
    Ok(format!("updated {}", record.full_name()))
}

/// Matching records paired with their position in the full sequence, so the
/// printed row numbers stay valid for `edit`/`delete`.
fn filtered<'a>(app: &'a Roster<SlotStore>, query: &str) -> Vec<(usize, &'a Employee)> {
    app.records()
        .iter()
        .enumerate()
        .filter(|(_, record)| matches(record, query))
        .collect()
}

/// Rejected operations stay quiet no-ops (exit 0, one-line notice); only
/// storage failures abort.
fn report(outcome: RosterResult<String>) -> Result<()> {
    match outcome {
        Ok(line) => {
            println!("{line}");
            Ok(())
        }
        Err(RosterError::Store(err)) => Err(err.into()),
        Err(err) => {
            eprintln!("nothing changed: {err}");
            Ok(())
        }
    }
}
