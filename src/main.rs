use clap::{Parser, ValueEnum};
use log::error;
use std::io::{self, Write};
use std::path::PathBuf;
use svg_paths::{load_paths, write, CaseFolding, NumberPolicy, Options};

/// Print the paths of SVG files as polylines.
#[derive(Parser)]
#[command(name = "svg-paths", version)]
struct Args {
    /// Numerator of the curve step count (larger means more points per curve)
    #[arg(short, long, default_value_t = 100.0)]
    resolution: f64,

    /// Upper bound on the number of segments for one curve
    #[arg(long, default_value_t = 2048)]
    max_steps: u32,

    /// Reject paths with numbers that do not parse instead of reading them as zero
    #[arg(long)]
    strict_numbers: bool,

    /// Lowercase path data too, making every command relative
    #[arg(long)]
    fold_case: bool,

    #[arg(short, long, value_enum, default_value_t = Format::Js)]
    format: Format,

    #[arg(required = true)]
    files: Vec<PathBuf>,
}

#[derive(Copy, Clone, ValueEnum)]
enum Format {
    Js,
    Text,
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let options = Options::new()
        .resolution(args.resolution)
        .max_steps(args.max_steps)
        .numbers(if args.strict_numbers { NumberPolicy::Strict } else { NumberPolicy::Lenient })
        .case_folding(if args.fold_case { CaseFolding::All } else { CaseFolding::PreservePathData });

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    let mut failed_files = 0;
    for filename in &args.files {
        writeln!(stdout, "=========")?;
        writeln!(stdout, "FILE: {}", filename.display())?;
        let extraction = match load_paths(filename, &options) {
            Ok(extraction) => extraction,
            Err(e) => {
                error!("{}", e);
                eprintln!("{}: {}", filename.display(), e);
                failed_files += 1;
                continue
            }
        };
        for failure in &extraction.failures {
            eprintln!("{}: {}", filename.display(), failure);
        }
        match args.format {
            Format::Js => write::write_js(&extraction.paths, &mut stdout)?,
            Format::Text => write::write_text(&extraction.paths, &mut stdout)?,
            Format::Json => write::write_json(&extraction.paths, &mut stdout)?,
        }
    }
    if failed_files > 0 {
        return Err(format!("{} of {} file(s) could not be loaded", failed_files, args.files.len()).into())
    }
    Ok(())
}
