use std::{
    path::PathBuf,
    sync::atomic::{AtomicBool, Ordering},
    thread,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use chrono::{Local, Timelike, Utc};
use clap::{Arg, ArgAction, Args, CommandFactory, FromArgMatches, Parser, Subcommand};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use tracing::{debug, info};
use ttyclock::{ticker::Ticker, App, Command, Options, Time};

use crate::console::{restore_terminal, ConsoleScreen};
mod console;
mod logger;
mod signals;

/// Pause after a handled key so a held key does not flood the loop.
const KEY_DEBOUNCE: Duration = Duration::from_millis(50);

#[derive(Parser)]
#[command(
    name = "ttyclock",
    about = "Block-digit clock and countdown timer for the terminal"
)]
struct Cli {
    /// Write a log to this file
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
    /// Log at debug level
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Args, Clone, Debug)]
struct DisplayArgs {
    /// Set the clock color
    #[arg(short = 'C', long, value_name = "0-7", allow_negative_numbers = true)]
    color: Option<i64>,
    /// Use bold colors
    #[arg(short, long)]
    bold: bool,
    /// Show box
    #[arg(short = 'x', long = "box")]
    boxed: bool,
    /// Hide the seconds
    #[arg(short = 's', long)]
    no_seconds: bool,
}

impl DisplayArgs {
    fn options(&self) -> Options {
        let mut options = Options {
            bold: self.bold,
            boxed: self.boxed,
            show_seconds: !self.no_seconds,
            ..Options::default()
        };
        if let Some(color) = self.color {
            options.set_color(color);
        }
        options
    }
}

#[derive(Subcommand)]
enum Cmd {
    /// Show the local time with the date underneath
    Clock {
        #[command(flatten)]
        display: DisplayArgs,
        /// strftime format of the date line
        #[arg(short, long, default_value = "%F")]
        format: String,
    },
    /// Count down from hh:mm:ss; shorter forms such as 5 or 1:30 count from the right
    Timer {
        #[arg(value_name = "hh:mm:ss")]
        time: String,
        #[command(flatten)]
        display: DisplayArgs,
    },
}

fn parse_cli() -> Cli {
    let cmd = Cli::command()
        .disable_version_flag(true)
        .subcommand_required(false)
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .help("Print version")
                .action(ArgAction::Version),
        )
        .arg(
            Arg::new("info")
                .short('i')
                .long("info")
                .help("Print authors and exit")
                .action(ArgAction::SetTrue),
        );
    let matches = cmd.version(env!("CARGO_PKG_VERSION")).get_matches();
    if matches.get_flag("info") {
        println!(
            "ttyclock {} by {}",
            env!("CARGO_PKG_VERSION"),
            env!("CARGO_PKG_AUTHORS")
        );
        std::process::exit(0);
    }
    Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

/// Time until the wall clock reaches its next whole second, capped at one
/// second.
fn until_next_second() -> Duration {
    let nanos = u64::from(Local::now().nanosecond() % 1_000_000_000);
    Duration::from_nanos(1_000_000_000 - nanos).min(Duration::from_secs(1))
}

fn run(mut app: App, stop: &AtomicBool) -> Result<()> {
    let mut screen = ConsoleScreen::enter().context("cannot set up terminal")?;
    app.start(&mut screen)?;
    let mut ticker = Ticker::every_second(Instant::now());

    while app.is_running() {
        if stop.load(Ordering::Relaxed) {
            info!("terminated by signal");
            break;
        }
        let ticks = ticker.due(Instant::now());
        app.advance(ticks, &Local::now())?;
        app.redraw(&mut screen, Utc::now().timestamp() % 2 == 0)?;

        let timeout = until_next_second().min(ticker.remaining(Instant::now()));
        if !event::poll(timeout)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let command = match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        Some(Command::Quit)
                    }
                    KeyCode::Char(ch) => Command::from_key(ch),
                    _ => None,
                };
                if let Some(command) = command {
                    app.handle(&mut screen, command)?;
                    thread::sleep(KEY_DEBOUNCE);
                }
            }
            Event::Resize(cols, rows) => {
                screen.set_size(rows, cols)?;
                app.resize(&mut screen, rows, cols)?;
            }
            _ => {}
        }
    }
    debug!("leaving");
    Ok(())
}

fn main() -> Result<()> {
    let cli = parse_cli();
    logger::init_logger(cli.log_file.as_deref(), cli.verbose)?;

    let app = match cli.command {
        Cmd::Clock { display, format } => App::clock(display.options(), format)?,
        Cmd::Timer { time, display } => {
            let start = Time::parse_partial(&time)?;
            info!(%start, "starting countdown");
            App::timer(display.options(), start)?
        }
    };

    let stop = signals::stop_flag().context("cannot install signal handlers")?;
    std::panic::set_hook(Box::new(|info| {
        restore_terminal();
        eprintln!("{info}");
    }));
    run(app, &stop)
}
