use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;
use subnet_calc::calculate;
use subnet_calc::config::{Args, Config, Request};
use subnet_calc::output::render;

const LOG_CONFIG_FILE: &str = "log4rs.yml";

fn init_logging() -> Result<(), Box<dyn Error>> {
    if Path::new(LOG_CONFIG_FILE).exists() {
        log4rs::init_file(LOG_CONFIG_FILE, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {LOG_CONFIG_FILE}: {e}"))?;
        return Ok(());
    }
    // No config next to the binary, warnings to stderr only
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} {t} - {m}{n}")))
        .build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    init_logging()?;
    log::info!("#Start main()");

    let args = Args::parse();
    let config = Config::from_env().with_args(&args);
    if !config.color {
        colored::control::set_override(false);
    }

    let result = Request::resolve(&args, &config)
        .and_then(|req| calculate(&req.address, &req.prefix));
    let result = match result {
        Ok(result) => result,
        Err(e) => {
            log::info!("Rejected input: {e}");
            eprintln!("{} {}", "ERROR".on_red(), e.user_message());
            std::process::exit(2);
        }
    };

    print!("{}", render(&result, config.format)?);
    log::info!("#End main() {}", result.cidr());
    Ok(())
}
