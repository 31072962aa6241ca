use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            ConfigLogic::print(cfg)?;
        }

        if *check {
            ConfigLogic::check(&cfg.path)?;
        }

        if *migrate {
            ConfigLogic::migrate(cfg)?;
        }

        if *edit_config {
            ConfigLogic::edit(&cfg.path, editor)?;
        }
    }

    Ok(())
}
