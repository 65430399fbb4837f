use colored::Colorize;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

use cookbook::{
    AppContext, CookbookError,
    cli::{Cli, Commands},
    commands::{self, edit::EditRequest, search::SearchParams},
    config::CookbookConfig,
    logging,
};

type Result<T> = std::result::Result<T, CookbookError>;

fn run(cli: &Cli) -> Result<()> {
    let log_config = cli.log_config().with_ansi(io::stderr().is_terminal());
    logging::init_logging(&log_config)?;

    let config = CookbookConfig::load()?;
    let quiet = cli.quiet || config.quiet;
    let command = cli.get_command();

    if let Commands::Config { command } = &command {
        return commands::config(config, command, quiet);
    }

    let recipes_path = config.recipes_path(cli.file.as_deref())?;
    let mut app = AppContext::open(recipes_path)?;
    execute(&mut app, &command, quiet)?;
    app.shutdown()?;
    Ok(())
}

fn execute(app: &mut AppContext, command: &Commands, quiet: bool) -> Result<()> {
    match command {
        Commands::List => commands::list(app, quiet)?,
        Commands::Show { title } => commands::show(app, title, quiet)?,
        Commands::Add { title, fields } => commands::add(app, title, fields, quiet)?,
        Commands::Edit {
            title,
            new_title,
            fields,
            clear_tags,
        } => {
            let request = EditRequest {
                new_title: new_title.as_deref(),
                fields,
                clear_tags: *clear_tags,
            };
            commands::edit(app, title, &request, quiet)?;
        }
        Commands::Delete { title, force } => commands::delete(app, title, *force, quiet)?,
        Commands::Tags => commands::tags(app, quiet)?,
        Commands::Search {
            query,
            tags,
            untagged,
            invert,
        } => {
            let params = SearchParams {
                query: query.clone(),
                tags: tags.clone(),
                untagged: *untagged,
                invert: *invert,
            };
            commands::search(app, &params, quiet)?;
        }
        // Handled before the store is opened
        Commands::Config { .. } => {}
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
