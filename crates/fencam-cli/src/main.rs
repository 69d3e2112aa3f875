//! Command-line front end for the `fencam` reconstruction pipeline.
//!
//! The camera and detector live outside this tool: each frame arrives as
//! a YOLO label file. `orient` calibrates and persists the board
//! orientation, `recognize` reconstructs one frame, `track` runs the
//! move-acceptance session over a frame sequence.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;

use fencam::core::{init_with_level, load_label_file, DEFAULT_CANVAS_SIZE};
use fencam::notation::{board_fen, full_fen, FenFields};
use fencam::{
    orient_board, recognize_frame, Color, DetectionMode, FrameSize, GameSession, MoveDecision,
    Orientation,
};

#[derive(Parser)]
#[command(
    name = "fencam",
    about = "Reconstruct chess positions from camera piece detections",
    version
)]
struct Cli {
    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Locate the board corners in an orientation frame and save them.
    ///
    /// The orientation frame must show exactly one rook on each corner
    /// square. Re-run whenever the camera or the board moves.
    Orient {
        /// YOLO label file of the orientation frame.
        #[arg(long)]
        labels: PathBuf,
        /// Frame width in pixels.
        #[arg(long)]
        width: u32,
        /// Frame height in pixels.
        #[arg(long)]
        height: u32,
        /// Side length of the rectified canvas, in pixels.
        #[arg(long, default_value_t = DEFAULT_CANVAS_SIZE)]
        canvas: u32,
        /// Where to write the orientation JSON.
        #[arg(long, default_value = "orientation.json")]
        out: PathBuf,
    },
    /// Reconstruct one frame and print its FEN.
    Recognize {
        /// Orientation JSON written by `orient`.
        #[arg(long)]
        orientation: PathBuf,
        /// YOLO label file of the frame.
        #[arg(long)]
        labels: PathBuf,
        /// Print a full 6-field FEN instead of the board field only.
        #[arg(long)]
        full: bool,
        /// Side to move for the full record (`w` or `b`).
        #[arg(long, default_value = "w", value_parser = parse_color)]
        turn: Color,
        /// Castling field for the full record.
        #[arg(long, default_value = "KQkq")]
        castling: String,
    },
    /// Track a game across frames, accepting or rejecting each position.
    Track {
        /// Orientation JSON written by `orient`.
        #[arg(long)]
        orientation: PathBuf,
        /// Label files, one per frame, in capture order.
        #[arg(required = true)]
        labels: Vec<PathBuf>,
        /// Treat the first frame as a forced single-shot detection.
        #[arg(long)]
        forced_first: bool,
    },
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Records(#[from] fencam::core::RecordError),
    #[error(transparent)]
    Calibration(#[from] fencam::CalibrationError),
    #[error(transparent)]
    Geometry(#[from] fencam::GeometryError),
    #[error(transparent)]
    OrientationIo(#[from] fencam::OrientationIoError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn parse_color(raw: &str) -> Result<Color, String> {
    match raw {
        "w" | "white" => Ok(Color::White),
        "b" | "black" => Ok(Color::Black),
        other => Err(format!("expected 'w' or 'b', got {other:?}")),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = init_with_level(level);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Orient {
            labels,
            width,
            height,
            canvas,
            out,
        } => {
            let detections = load_label_file(&labels)?;
            let frame = FrameSize { width, height };
            let corners = orient_board(&detections, frame)?;

            let mut orientation = Orientation::new(corners, frame);
            orientation.canvas_size = canvas;
            // Fail now, not on the first recognize, if the corners
            // cannot produce a homography.
            orientation.rectifier()?;
            orientation.write_json(&out)?;

            println!("{}", serde_json::to_string_pretty(&corners)?);
            log::info!("orientation written to {}", out.display());
            Ok(())
        }
        Command::Recognize {
            orientation,
            labels,
            full,
            turn,
            castling,
        } => {
            let orientation = Orientation::load_json(&orientation)?;
            let rectifier = orientation.rectifier()?;
            let detections = load_label_file(&labels)?;
            let board = recognize_frame(&detections, orientation.frame, &rectifier);
            if full {
                println!("{}", full_fen(&board, &FenFields::new(turn, castling)));
            } else {
                println!("{}", board_fen(&board));
            }
            Ok(())
        }
        Command::Track {
            orientation,
            labels,
            forced_first,
        } => {
            let orientation = Orientation::load_json(&orientation)?;
            let mut session = GameSession::new(orientation.rectifier()?);
            for (index, path) in labels.iter().enumerate() {
                let mode = if index == 0 && forced_first {
                    DetectionMode::Forced
                } else {
                    DetectionMode::Automatic
                };
                match session.poll_labels(path, orientation.frame, mode) {
                    Some(MoveDecision::Accepted { fen, .. }) => {
                        println!("{}: accepted {fen}", path.display());
                    }
                    Some(MoveDecision::Rejected(reason)) => {
                        println!("{}: rejected ({reason})", path.display());
                    }
                    None => {
                        println!("{}: skipped", path.display());
                    }
                }
            }
            Ok(())
        }
    }
}
