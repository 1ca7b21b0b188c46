use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use kl_toolkit::utils::{logger, validation::Validate};
use kl_toolkit::{app, CliConfig, KlConfig, KlError};

fn main() {
    let cli = match CliConfig::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(1);
            }
        },
    };

    match execute(&cli) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => {
            eprintln!("❌ {:#}", e);

            let exit_code = e.downcast_ref::<KlError>().map_or(2, KlError::exit_code);
            std::process::exit(exit_code);
        }
    }
}

fn execute(cli: &CliConfig) -> anyhow::Result<String> {
    let mut config = match &cli.config {
        Some(path) => KlConfig::from_file(path)
            .with_context(|| format!("failed to load config file '{}'", path))?,
        None => KlConfig::default(),
    };
    cli.apply_to(&mut config);

    if config.logging.json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.logging.verbose);
    }

    tracing::debug!("effective config: {:?}", config);
    config.validate()?;

    let output = app::run(&cli.command, &config)?;
    Ok(app::render(&output, &config)?)
}
