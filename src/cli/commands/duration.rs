use crate::cli::parser::Commands;
use crate::core::calculator::duration::trade_duration;
use crate::errors::AppResult;

/// Print the duration of an entry/exit pair.
///
/// Missing or malformed times print an empty line rather than an error.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Duration { entry, exit } = cmd {
        let entry = entry.as_deref().unwrap_or("");
        let exit = exit.as_deref().unwrap_or("");
        println!("{}", trade_duration(entry, exit));
    }

    Ok(())
}
