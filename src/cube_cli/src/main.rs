use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use env_logger::TimestampPrecision;
use log::{LevelFilter, debug, info};
use owo_colors::OwoColorize;
use rubiks_core::{Color, Cube, Facelets, MoveSequence};

use crate::config::CliConfig;

mod config;

/// Turn a virtual Rubik's cube from the terminal
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Settings file in TOML format. Flags override its values.
    #[arg(long, short = 'c', value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Print the net as plain letters
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a move sequence to a solved cube and print the result.
    Apply {
        /// The moves to apply, e.g. "R U R' U'". `X2` is two quarter turns.
        moves: String,
    },
    /// Generate a random scramble and print the scrambled cube.
    Scramble {
        /// Number of quarter turns
        #[arg(long, short = 'n')]
        length: Option<usize>,
        /// Seed for a reproducible scramble
        #[arg(long, short)]
        seed: Option<u64>,
    },
    /// Print the sequence that undoes the given one.
    Invert {
        /// The moves to invert
        moves: String,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    debug!("Using {config:?}");

    let color = config.color && !cli.no_color;

    match cli.command {
        Commands::Apply { moves } => {
            let mut cube = Cube::new();
            cube.apply_sequence(&moves)?;
            info!("Applied {moves:?}");

            print!("{}", render(&cube.snapshot(), color));
        }
        Commands::Scramble { length, seed } => {
            let length = length.unwrap_or(config.scramble_length);
            let mut rng = match seed.or(config.seed) {
                Some(seed) => fastrand::Rng::with_seed(seed),
                None => fastrand::Rng::new(),
            };

            let scramble = MoveSequence::scramble(length, &mut rng);
            let mut cube = Cube::new();
            cube.apply_all(&scramble);

            println!("{scramble}");
            print!("{}", render(&cube.snapshot(), color));
        }
        Commands::Invert { moves } => {
            let sequence = moves.parse::<MoveSequence>()?;
            println!("{}", sequence.inverse());
        }
    }

    Ok(())
}

fn render(facelets: &Facelets, color: bool) -> String {
    if !color {
        return facelets.to_string();
    }

    facelets
        .net()
        .iter()
        .map(|row| {
            let width = row.iter().rposition(Option::is_some).map_or(0, |last| last + 1);

            row[..width]
                .iter()
                .map(|cell| match cell {
                    Some(cell) => {
                        let [r, g, b] = terminal_rgb(*cell);
                        format!(" {cell} ").black().on_truecolor(r, g, b).to_string()
                    }
                    None => "   ".to_owned(),
                })
                .collect::<String>()
                + "\n"
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn terminal_rgb(color: Color) -> [u8; 3] {
    let [r, g, b, _] = color.rgba();
    [r, g, b].map(|channel| (channel * 255.0).round() as u8)
}

#[cfg(test)]
mod tests {
    use rubiks_core::{Color, Facelets};

    use super::{render, terminal_rgb};

    #[test]
    fn plain_render_is_the_letter_net() {
        let facelets = Facelets::solved();
        assert_eq!(render(&facelets, false), facelets.to_string());
    }

    #[test]
    fn colored_render_has_one_line_per_net_row() {
        assert_eq!(render(&Facelets::solved(), true).lines().count(), 9);
    }

    #[test]
    fn terminal_colors() {
        assert_eq!(terminal_rgb(Color::White), [255, 255, 255]);
        assert_eq!(terminal_rgb(Color::Orange), [255, 165, 0]);
        assert_eq!(terminal_rgb(Color::Green), [0, 128, 0]);
    }
}
