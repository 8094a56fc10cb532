//! `bloch`: render Bloch sphere animations of single-qubit gate sequences.

use std::path::PathBuf;
use std::process::ExitCode;

use bloch::engine::BlochEngine;
use bloch::error::BlochError;
use bloch::gates::{catalog_names, parse_gate_list};
use bloch::options::{Options, OutputFormat, SphereStyle};
use clap::{Args, Parser, Subcommand};

/// Renders animations of the Bloch sphere for a sequence of single-qubit
/// gates.
#[derive(Parser, Debug)]
#[command(name = "bloch", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Animate one gate sequence.
    Animate {
        /// File name to save (excluding the extension)
        name: String,
        /// Gates to apply (e.g. h x wait inv_sqrt_y rx;0.5 ...)
        #[arg(required = true)]
        gates: Vec<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Animate two gate sequences side by side.
    Compare {
        /// File name to save (excluding the extension)
        name: String,
        /// Comma-separated gates for the left sphere (e.g. h,z,h)
        first: String,
        /// Comma-separated gates for the right sphere (e.g. x)
        second: String,
        /// Equation markup (e.g. '$HZH\ket{\psi}=X\ket{\psi}$')
        #[arg(long)]
        equation: Option<String>,
        /// Leave out the circuit diagram
        #[arg(long)]
        no_circuit: bool,
        /// Leave out the equation
        #[arg(long)]
        no_equation: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Write the default options as TOML, or their JSON schema.
    Options {
        /// Destination file
        path: PathBuf,
        /// Write the JSON schema instead
        #[arg(long)]
        schema: bool,
    },
    /// List every gate name.
    Gates,
}

/// Output flags shared by the rendering commands.
#[derive(Args, Debug)]
struct OutputArgs {
    /// Output container
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// Save an mp4 video instead of a GIF
    #[arg(long, conflicts_with = "format")]
    mp4: bool,
    /// Animation frame rate
    #[arg(long)]
    fps: Option<f64>,
    /// Pixel width of one sphere frame
    #[arg(long)]
    width: Option<u32>,
    /// Playback speed multiplier
    #[arg(long)]
    speed: Option<f64>,
    /// Inner sphere style
    #[arg(long, value_enum)]
    style: Option<SphereStyle>,
    /// Options file (TOML) applied before the flags above
    #[arg(long)]
    options: Option<PathBuf>,
}

impl OutputArgs {
    fn resolve(&self) -> Result<Options, BlochError> {
        let mut options = match &self.options {
            Some(path) => Options::load(path)?,
            None => Options::default(),
        };
        if self.mp4 {
            options.render.format = OutputFormat::Mp4;
        }
        if let Some(format) = self.format {
            options.render.format = format;
        }
        if let Some(fps) = self.fps {
            options.render.fps = fps;
        }
        if let Some(width) = self.width {
            options.render.width = width;
        }
        if let Some(speed) = self.speed {
            options.timing.speed = speed;
        }
        if let Some(style) = self.style {
            options.style.sphere = style;
        }
        Ok(options)
    }
}

fn run(cli: Cli) -> Result<(), BlochError> {
    match cli.command {
        Command::Animate {
            name,
            gates,
            output,
        } => {
            let instructions = parse_gate_list(&gates)?;
            let engine = BlochEngine::new(output.resolve()?);
            let _ = engine.animate(&name, &instructions)?;
        }
        Command::Compare {
            name,
            first,
            second,
            equation,
            no_circuit,
            no_equation,
            output,
        } => {
            let first = parse_gate_list(&[first])?;
            let second = parse_gate_list(&[second])?;
            let options = output.resolve()?;
            let mut panel = options.panel.clone();
            if equation.is_some() {
                panel.equation = equation;
            }
            panel.show_circuit &= !no_circuit;
            panel.show_equation &= !no_equation;
            let engine = BlochEngine::new(options);
            let _ = engine.compare(&name, &first, &second, &panel)?;
        }
        Command::Options { path, schema } => {
            if schema {
                Options::save_schema(&path)?;
            } else {
                Options::default().save(&path)?;
            }
            log::info!("wrote {}", path.display());
        }
        Command::Gates => {
            log::info!("gates: {}", catalog_names().join(" "));
            log::info!(
                "also: i wait no_wait rx;A[;LABEL] ry;A[;LABEL] rz;A[;LABEL] \
                 custom;X;Y;Z;A[;LABEL] (angles in multiples of pi)"
            );
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
