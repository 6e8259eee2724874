//! histeq command-line front end
//!
//! Loads the configured image, prints the key help and then applies
//! commands given with `--run` and/or typed on stdin. After every command
//! the current frame (image plus histogram bars) is written to the output
//! file.

use clap::Parser;
use histeq::command::help_text;
use histeq::io::{ImageFormat, write_image};
use histeq::{Command, Config, GrayscaleCheck, ImageSession, SessionResult, render_frame};
use std::io::BufRead;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "histeq")]
#[command(version, about = "Grayscale conversion and histogram equalization", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Image to load (overrides the config)
    #[arg(short, long, value_name = "FILE")]
    image: Option<PathBuf>,

    /// Where the rendered frame is written (overrides the config)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Accept pixels where only one channel pair matches as gray
    #[arg(long)]
    lenient: bool,

    /// Commands to run before reading stdin, e.g. "1,3,4" or "gray:luma,4"
    #[arg(short, long, value_name = "CMDS", value_delimiter = ',')]
    run: Vec<Command>,

    /// Keep reading commands from stdin after `--run`
    #[arg(long)]
    interactive: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> SessionResult<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(image) = cli.image {
        config.image_path = image;
    }
    if let Some(output) = cli.output {
        config.output_path = output;
    }
    let check = if cli.lenient {
        GrayscaleCheck::Lenient
    } else {
        config.grayscale_check()
    };

    let mut session = ImageSession::new(&config.image_path, check);
    if let Err(e) = session.reload() {
        log::warn!("{}", e);
    }

    print!("{}", help_text());
    write_frame(&session, &config)?;

    for command in cli.run.iter().copied() {
        apply(&mut session, command, &config)?;
    }
    if !cli.run.is_empty() && !cli.interactive {
        return Ok(());
    }

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(histeq::io::IoError::from)?;
        for token in line.split(|c: char| c.is_whitespace() || c == ',') {
            match token {
                "" => continue,
                "q" | "quit" => return Ok(()),
                _ => match token.parse::<Command>() {
                    Ok(command) => apply(&mut session, command, &config)?,
                    Err(e) => log::warn!("{}", e),
                },
            }
        }
    }
    Ok(())
}

/// Run one command, report a rejected one and refresh the frame.
fn apply(session: &mut ImageSession, command: Command, config: &Config) -> SessionResult<()> {
    if let Err(e) = session.apply(command) {
        log::warn!("{} failed: {}", command, e);
        return Ok(());
    }
    write_frame(session, config)
}

fn write_frame(session: &ImageSession, config: &Config) -> SessionResult<()> {
    let frame = render_frame(session, &config.display);
    let format = match ImageFormat::from_path(&config.output_path) {
        ImageFormat::Jpeg => ImageFormat::Jpeg,
        _ => ImageFormat::Png,
    };
    write_image(&frame, &config.output_path, format)?;
    log::debug!("frame written to {}", config.output_path.display());
    Ok(())
}
