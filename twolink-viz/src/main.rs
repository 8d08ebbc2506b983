// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use clap::{Parser, Subcommand};
use twolink_core::Point2D;
use twolink_viz::config;
use twolink_viz::program::Program;
use twolink_viz::viewer::Viewer;

#[derive(Parser)]
#[command(author = "Copyright (C) 2024 Laixer Equipment B.V.")]
#[command(version, propagate_version = true)]
#[command(about = "Two-link inverse kinematics viewer", long_about = None)]
struct Args {
    /// Configuration file.
    #[arg(short = 'c', long = "config", alias = "conf", value_name = "FILE")]
    config: Option<std::path::PathBuf>,
    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
    /// Print the status text only.
    #[arg(long)]
    no_canvas: bool,
    /// Quiet output (no logging).
    #[arg(long)]
    quiet: bool,
    /// Level of verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Target source.
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a single target.
    Solve {
        /// Target X coordinate.
        #[arg(allow_negative_numbers = true)]
        x: f64,
        /// Target Y coordinate.
        #[arg(allow_negative_numbers = true)]
        y: f64,
    },
    /// Replay targets from a JSON file of [x, y] pairs.
    Replay {
        /// Program file.
        file: std::path::PathBuf,
    },
    /// Orbit the base while the radius moves in and out of reach.
    Sweep {
        /// Smallest orbit radius.
        #[arg(long, default_value_t = 20.0)]
        min_radius: f64,
        /// Largest orbit radius.
        #[arg(long, default_value_t = 400.0)]
        max_radius: f64,
        /// Number of frames in one revolution.
        #[arg(long, default_value_t = 240)]
        frames: usize,
    },
    /// Read "x y" targets from standard input.
    Follow,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    use log::LevelFilter;

    let args = Args::parse();

    let mut config: config::Config = match &args.config {
        Some(path) => twolink_core::from_file(path)?,
        None => config::Config::default(),
    };
    config.validate()?;

    if args.no_color {
        config.view.color = false;
    }

    let mut log_config = simplelog::ConfigBuilder::new();
    log_config.set_target_level(LevelFilter::Off);
    log_config.set_location_level(LevelFilter::Off);
    log_config.set_time_level(LevelFilter::Off);
    log_config.add_filter_ignore_str("mio");

    let log_level = if args.quiet {
        LevelFilter::Off
    } else {
        match args.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    let color_choice = if config.view.color {
        simplelog::ColorChoice::Auto
    } else {
        simplelog::ColorChoice::Never
    };

    simplelog::TermLogger::init(
        log_level,
        log_config.build(),
        simplelog::TerminalMode::Stderr,
        color_choice,
    )?;

    log::trace!("{:#?}", config);
    log::info!("{}", config.arm);

    let mut viewer = Viewer::new(&config, !args.no_canvas, std::io::stdout());

    match args.command {
        Command::Solve { x, y } => viewer.show(Point2D::new(x, y))?,
        Command::Replay { file } => {
            let program = Program::load(&file)?;
            log::info!("Loaded {} targets from {}", program.len(), file.display());

            viewer.play(program, config.frame_interval()).await?;
        }
        Command::Sweep {
            min_radius,
            max_radius,
            frames,
        } => {
            if !(min_radius >= 0.0 && max_radius >= min_radius) {
                anyhow::bail!("sweep radius range is invalid");
            }

            let program = Program::sweep(config.arm.base(), min_radius, max_radius, frames);
            viewer.play(program, config.frame_interval()).await?;
        }
        Command::Follow => {
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            viewer.follow(input).await?
        }
    }

    log::info!("{}", viewer.stats());

    Ok(())
}
