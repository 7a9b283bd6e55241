//! Command-line driver for tipkit against a simulated host.
use std::{
    path::{Path, PathBuf},
    process,
    rc::Rc,
};

use clap::{Parser, Subcommand};
use config::TooltipConfig;
use logging as logshared;
use thiserror::Error;
use tipkit::{ManualScheduler, Point, Rect, Size, TokioScheduler, Tooltip, sim::SimHost};
use tipkit_geom::{DEFAULT_SCREEN, StaticWorkArea, resolve_position, usable_area};
use tokio::runtime;
use tracing::debug;

/// Geometry flag parsers.
mod args;
/// Scripted pointer sessions.
mod script;

use crate::args::{parse_point, parse_rect, parse_size};

#[derive(Parser, Debug)]
#[command(name = "tipsim", about = "Simulate tooltip placement and timing", version)]
/// Command-line interface for the `tipsim` binary.
struct Cli {
    /// What to do.
    #[command(subcommand)]
    command: Command,

    /// Logging controls
    #[command(flatten)]
    log: logshared::LogArgs,
}

#[derive(Subcommand, Debug)]
/// Top-level CLI subcommands.
enum Command {
    /// Resolve where a tooltip would be placed and print `x,y`.
    Place {
        /// Widget rectangle
        #[arg(long, value_name = "X,Y,W,H", value_parser = parse_rect)]
        widget: Rect,
        /// Pointer position
        #[arg(long, value_name = "X,Y", value_parser = parse_point)]
        pointer: Point,
        /// Tooltip size
        #[arg(long, value_name = "WxH", value_parser = parse_size)]
        size: Size,
        /// Usable work area (defaults to the whole screen)
        #[arg(long, value_name = "X,Y,W,H", value_parser = parse_rect)]
        work_area: Option<Rect>,
        /// Screen size
        #[arg(long, value_name = "WxH", value_parser = parse_size)]
        screen: Option<Size>,
        /// Tooltip configuration (.ron)
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
    /// Replay a scripted hover session and print what the overlay did.
    Run {
        /// Tooltip configuration (.ron)
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
        /// Tooltip text
        #[arg(long, default_value = "Hello from tipkit")]
        text: String,
        /// Widget rectangle
        #[arg(long, value_name = "X,Y,W,H", value_parser = parse_rect, default_value = "200,200,120,28")]
        widget: Rect,
        /// How long the pointer hovers before leaving, in milliseconds
        #[arg(long, value_name = "MS", default_value_t = 600)]
        hover: u64,
        /// Use real timers on a tokio runtime instead of a virtual clock
        #[arg(long)]
        realtime: bool,
    },
    /// Load and validate a configuration file then exit.
    Check {
        /// Path to the configuration file
        path: PathBuf,
        /// Dump the resolved configuration as JSON to stdout
        #[arg(long)]
        dump: bool,
    },
}

/// Failures that end the program.
#[derive(Debug, Error)]
enum Error {
    /// Configuration could not be loaded.
    #[error("{}", .0.pretty())]
    Config(#[from] config::Error),
    /// The tooltip could not be set up.
    #[error(transparent)]
    Tooltip(#[from] tipkit::Error),
    /// The tokio runtime failed to start.
    #[error("runtime: {0}")]
    Runtime(String),
    /// Output could not be rendered.
    #[error("serialize: {0}")]
    Serialize(String),
}

/// Load `path` over the defaults, or just the defaults.
fn load(path: Option<&Path>) -> Result<TooltipConfig, Error> {
    match path {
        Some(p) => Ok(config::load_config(p)?),
        None => Ok(TooltipConfig::default()),
    }
}

/// `tipsim place`
fn place(
    widget: Rect,
    pointer: Point,
    size: Size,
    area: Option<Rect>,
    screen: Option<Size>,
    config: Option<&Path>,
) -> Result<(), Error> {
    let config = load(config)?;
    let source = StaticWorkArea {
        area,
        screen: screen.unwrap_or(DEFAULT_SCREEN),
    };
    let area = usable_area(&source);
    let pos = resolve_position(
        &config.anchor_spec(),
        &widget,
        size,
        pointer,
        &area,
        config.pointer_policy,
    );
    println!("{},{}", pos.x, pos.y);
    Ok(())
}

/// `tipsim run`
fn run(
    config: Option<&Path>,
    text: String,
    widget: Rect,
    hover: u64,
    realtime: bool,
) -> Result<(), Error> {
    let config = load(config)?;
    let settle = config.anim_out + config.hide_delay.max(config.anim_in) + 100;
    let host = Rc::new(SimHost::new(widget, DEFAULT_SCREEN));
    let steps = script::default_session(widget, hover);
    let lines = if realtime {
        let rt = runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .map_err(|e| Error::Runtime(e.to_string()))?;
        rt.block_on(async {
            let sched = Rc::new(TokioScheduler::new());
            let tip = Tooltip::bind(host.clone(), sched.clone(), config, text)?;
            Ok::<_, Error>(script::run_realtime(host.clone(), sched, tip, steps, settle).await)
        })?
    } else {
        let sched = Rc::new(ManualScheduler::new());
        let tip = Tooltip::bind(host.clone(), sched.clone(), config, text)?;
        script::run_manual(&host, &sched, &tip, &steps, settle)
    };
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

/// `tipsim check`
fn check(path: &Path, dump: bool) -> Result<(), Error> {
    let config = config::load_config(path)?;
    if dump {
        let json =
            serde_json::to_string_pretty(&config).map_err(|e| Error::Serialize(e.to_string()))?;
        println!("{json}");
    } else {
        println!("OK");
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    logshared::init(&cli.log);
    debug!(command = ?cli.command, "tipsim_start");

    let result = match cli.command {
        Command::Place {
            widget,
            pointer,
            size,
            work_area,
            screen,
            config,
        } => place(widget, pointer, size, work_area, screen, config.as_deref()),
        Command::Run {
            config,
            text,
            widget,
            hover,
            realtime,
        } => run(config.as_deref(), text, widget, hover, realtime),
        Command::Check { path, dump } => check(&path, dump),
    };
    if let Err(e) = result {
        eprintln!("{e}");
        process::exit(1);
    }
}
