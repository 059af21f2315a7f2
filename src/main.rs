use colored::Colorize;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;
use subnet_tutor::cli::{handle_line, Reply};
use subnet_tutor::config::Config;

fn init_logging(log_config: &Path) -> Result<(), Box<dyn Error>> {
    if log_config.exists() {
        match log4rs::init_file(log_config, Default::default()) {
            Ok(()) => return Ok(()),
            Err(e) => eprintln!("Error initializing log4rs from {}: {e}", log_config.display()),
        }
    }
    // no usable config file, warnings to stderr only
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {t} - {m}{n}")))
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
    let config = Config::from_env()?;
    init_logging(&config.log_config)?;
    config.apply_color();
    log::info!("#Start main() {:?}", config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        return match handle_line(&args.join(" "), config.output) {
            Reply::Text(text) => {
                println!("{text}");
                Ok(())
            }
            Reply::Failure(text) => {
                eprintln!("{text}");
                std::process::exit(1)
            }
            Reply::Quit | Reply::Nothing => Ok(()),
        };
    }

    let interactive = io::stdin().is_terminal();
    if interactive {
        println!(
            "{} type 'help' for commands, 'quit' to leave",
            "IPv4 subnetting tutor".bold()
        );
    }
    let mut stdout = io::stdout();
    let mut lines = io::stdin().lock().lines();
    loop {
        if interactive {
            write!(stdout, "{} ", "subnet>".bold())?;
            stdout.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        match handle_line(&line?, config.output) {
            Reply::Text(text) | Reply::Failure(text) => println!("{text}"),
            Reply::Quit => break,
            Reply::Nothing => {}
        }
    }
    log::info!("#End main()");
    Ok(())
}
