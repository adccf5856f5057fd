use clap::Parser;
use clap::error::ErrorKind;

use qmgr::cli::{Cli, Command, USAGE};
use qmgr::commands;
use qmgr::error::QmgrError;
use qmgr::logging;
use qmgr::settings::Settings;

#[tokio::main(flavor = "current_thread")]
async fn main() -> miette::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            eprint!("{USAGE}");
            return Ok(());
        }
    };

    let Some(command) = cli.command else {
        eprint!("{USAGE}");
        return Ok(());
    };

    logging::init();
    let settings = Settings::from_env()?;

    // Every command except `list` needs a VM name.
    let label = command.label();
    let require = |name: Option<String>| -> String {
        match name {
            Some(name) => name,
            None => {
                eprintln!("{}", QmgrError::MissingArgument {
                    command: label.to_string(),
                });
                std::process::exit(1);
            }
        }
    };

    match command {
        Command::List => {
            for name in commands::list(&settings)? {
                println!("{name}");
            }
        }
        Command::Run { name } => {
            let name = require(name);
            commands::run(&settings, &name).await?;
        }
        Command::Create { name, size } => {
            let name = require(name);
            let config_path = commands::create(&settings, &name, &size).await?;
            println!("{}", config_path.display());
            qmgr::process::open_editor(settings.editor.as_deref(), &config_path).await?;
        }
        Command::Edit { name } => {
            let name = require(name);
            commands::edit(&settings, &name).await?;
        }
    }

    Ok(())
}
