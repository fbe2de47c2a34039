use std::{
    io::{self, BufRead as _},
    sync::OnceLock,
};

use application::{Args, Config, Fixture, Outcome, Service, Session};
use service::infra::Memory;
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    _ = start();
}

fn start() -> Result<(), ()> {
    let Args {
        config,
        catalog: catalog_path,
    } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config { catalog, log } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let fixture = match catalog_path.or(catalog.path) {
        Some(path) => Fixture::load(&path).map_err(|e| {
            log::error!("failed to load catalog from `{path}`: {e}");
        })?,
        None => Fixture::builtin().map_err(|e| {
            log::error!("failed to load built-in catalog: {e}");
        })?,
    };
    let venues = fixture.into_venues().map_err(|e| {
        log::error!("invalid catalog: {e}");
    })?;
    log::info!("catalog of {} venues loaded", venues.len());

    let database = Memory::new(venues).map_err(|e| {
        log::error!("failed to seed `Memory` database: {e}");
    })?;
    let mut service = Service::new(database);
    let mut session = Session::new(&mut service);

    for line in io::stdin().lock().lines() {
        let line = line.map_err(|e| {
            log::error!("failed to read standard input: {e}");
        })?;
        if line.trim().is_empty() {
            continue;
        }

        match session.execute_line(&line) {
            Ok(Outcome::Reply(text)) => println!("{text}\n"),
            Ok(Outcome::Quit) => break,
            Err(e) => {
                log::debug!("action failed: {e}");
                println!("[{}]: {}\n", e.code, e.message);
            }
        }
    }

    log::info!("session is over");
    Ok(())
}
