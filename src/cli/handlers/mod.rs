mod replay;
pub use replay::cmd_replay;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io::{self, ConfigError};
use crate::io::script_io::ScriptError;
use crate::logging::LogError;
use crate::model::{Config, ShoppingList};
use crate::ops::{Action, ListError, apply};

/// Error type for CLI commands
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error(transparent)]
    Log(#[from] LogError),
    #[error("invalid --item {0:?}: expected NAME=QTY")]
    ItemSyntax(String),
    #[error("invalid --item {arg:?}: {source}")]
    InvalidItem { arg: String, source: ListError },
    #[error("action {index} ({action}) failed: {source}")]
    Action {
        index: usize,
        action: &'static str,
        source: ListError,
    },
    #[error("{count} of {total} actions failed")]
    ActionsFailed { count: usize, total: usize },
    #[error("could not write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), CliError> {
    let json = cli.json;
    let (config, list) = load_start(&cli)?;

    match cli.command {
        // No subcommand launches the TUI; main handles that before dispatch
        None | Some(Commands::List) => cmd_list(&list, json),
        Some(Commands::Replay(args)) => cmd_replay(args, list, &config, json),
    }
}

/// Load the config and build the list every command starts from: config
/// seeds first, then `--item` flags in order.
pub fn load_start(cli: &Cli) -> Result<(Config, ShoppingList), CliError> {
    let config = config_io::load_config(cli.config.as_deref())?;
    let list = starting_list(&config, &cli.items)?;
    Ok((config, list))
}

pub fn starting_list(config: &Config, items: &[String]) -> Result<ShoppingList, CliError> {
    let mut list = ShoppingList::from_config(&config.list);
    for arg in items {
        let (name, quantity) = arg
            .rsplit_once('=')
            .ok_or_else(|| CliError::ItemSyntax(arg.clone()))?;
        let action = Action::Add {
            name: name.to_string(),
            quantity: quantity.to_string(),
        };
        list = apply(&list, &action).map_err(|e| CliError::InvalidItem {
            arg: arg.clone(),
            source: e,
        })?;
    }
    Ok(list)
}

fn cmd_list(list: &ShoppingList, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(&list_to_json(list))?);
    } else {
        for line in format_list(list) {
            println!("{}", line);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{IdPolicy, SeedItem};
    use pretty_assertions::assert_eq;

    fn names(list: &ShoppingList) -> Vec<(u32, &str, i32)> {
        list.items()
            .iter()
            .map(|i| (i.id.0, i.name.as_str(), i.quantity))
            .collect()
    }

    #[test]
    fn item_flags_follow_seeds() {
        let mut config = Config::default();
        config.list.items.push(SeedItem {
            name: "Milk".into(),
            quantity: 2,
        });
        let list = starting_list(&config, &["Eggs=12".into(), "a=b=3".into()]).unwrap();
        assert_eq!(
            names(&list),
            vec![(1, "Milk", 2), (2, "Eggs", 12), (3, "a=b", 3)]
        );
        assert_eq!(list.id_policy(), IdPolicy::Monotonic);
    }

    #[test]
    fn item_flag_without_equals() {
        let err = starting_list(&Config::default(), &["Milk".into()]).unwrap_err();
        assert!(matches!(err, CliError::ItemSyntax(_)));
        assert_eq!(err.to_string(), r#"invalid --item "Milk": expected NAME=QTY"#);
    }

    #[test]
    fn item_flag_with_bad_quantity() {
        let err = starting_list(&Config::default(), &["Milk=lots".into()]).unwrap_err();
        match err {
            CliError::InvalidItem { source, .. } => {
                assert_eq!(source, ListError::InvalidQuantity("lots".into()))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn item_flag_with_blank_name() {
        let err = starting_list(&Config::default(), &[" =2".into()]).unwrap_err();
        assert!(err.to_string().contains("item name is blank"));
    }
}
