use std::cell::Cell;
use std::rc::Rc;

use crate::cli::commands::ReplayArgs;
use crate::cli::output::*;
use crate::io::script_io;
use crate::model::{Config, ShoppingList};
use crate::ops::{Action, Store};

use super::CliError;

/// Apply a script of actions to `list` and print the result.
pub fn cmd_replay(
    args: ReplayArgs,
    list: ShoppingList,
    config: &Config,
    json: bool,
) -> Result<(), CliError> {
    let actions = script_io::read_script(&args.script)?;
    tracing::info!(
        script = %args.script.display(),
        actions = actions.len(),
        "replaying"
    );

    let mut store = Store::new(list, config.list.undo_limit);
    // (1-based index, action name) of the action being applied
    let current: Rc<Cell<(usize, &'static str)>> = Rc::new(Cell::new((0, "")));
    if args.steps {
        let current = Rc::clone(&current);
        store.subscribe(move |state| {
            let (index, action) = current.get();
            print_step(index, action, state, json);
        });
    }

    let errors = run_actions(&mut store, &actions, args.keep_going, &current)?;

    let state = store.state();
    if json {
        let report = ReplayJson {
            list: list_to_json(state),
            errors: errors
                .iter()
                .map(|(index, action, e)| ReplayErrorJson {
                    index: *index,
                    action: *action,
                    error: e.to_string(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if args.steps {
            println!("result:");
        }
        for line in format_list(state) {
            println!("{}", line);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(CliError::ActionsFailed {
            count: errors.len(),
            total: actions.len(),
        })
    }
}

type Failure = (usize, &'static str, crate::ops::ListError);

/// Dispatch every action. Without `keep_going` the first failure is
/// returned as an error; with it, failures are reported on stderr and
/// collected.
fn run_actions(
    store: &mut Store,
    actions: &[Action],
    keep_going: bool,
    current: &Cell<(usize, &'static str)>,
) -> Result<Vec<Failure>, CliError> {
    let mut failures = Vec::new();
    for (i, action) in actions.iter().enumerate() {
        let index = i + 1;
        current.set((index, action.name()));
        if let Err(e) = store.dispatch(action) {
            if !keep_going {
                return Err(CliError::Action {
                    index,
                    action: action.name(),
                    source: e,
                });
            }
            eprintln!("warning: action {} ({}) failed: {}", index, action.name(), e);
            failures.push((index, action.name(), e));
        }
    }
    Ok(failures)
}

fn print_step(index: usize, action: &str, state: &ShoppingList, json: bool) {
    if json {
        match serde_json::to_string(&list_to_json(state)) {
            Ok(line) => println!("{}", line),
            Err(e) => tracing::error!(error = %e, "could not serialize step"),
        }
    } else {
        println!("[{}] {}", index, action);
        for line in format_list(state) {
            println!("{}", line);
        }
    }
}
