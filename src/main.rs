// std imports
use std::{
    io::{BufRead, IsTerminal, stdin, stdout},
    process,
};

// third-party imports
use clap::{CommandFactory, Parser};
use env_logger::{self as logger};
use wildmask::Pattern;

// local imports
use wmatch::{
    app::{App, Options},
    cli,
    error::*,
};

const WMATCH_DEBUG_LOG: &str = "WMATCH_DEBUG_LOG";
const WMATCH_DEBUG_LOG_STYLE: &str = "WMATCH_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(WMATCH_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(logger::Env::new().filter(WMATCH_DEBUG_LOG).write_style(WMATCH_DEBUG_LOG_STYLE))
            .format_timestamp_micros()
            .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

fn run() -> Result<bool> {
    bootstrap();

    let opt = cli::Opt::parse();

    let pattern = Pattern::new(&opt.pattern);
    log::debug!("compiled pattern: {pattern}");

    let texts: Vec<String> = if opt.texts.is_empty() {
        if stdin().is_terminal() {
            let mut cmd = cli::Opt::command();
            cmd.print_help().map_err(Error::Io)?;
            return Ok(true);
        }
        stdin().lock().lines().collect::<std::io::Result<_>>()?
    } else {
        opt.texts
    };

    let app = App::new(Options {
        pattern,
        quiet: opt.quiet,
    });

    match app.run(&texts, &mut stdout().lock()) {
        Err(Error::Io(ref e)) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(true),
        result => result,
    }
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            log::error!("{err}");
            process::exit(2);
        }
    }
}
