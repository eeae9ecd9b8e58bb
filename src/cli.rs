use crate::marker::ExonMode;
use chrono::Datelike;
use clap::{ArgAction, Args, Parser};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use motifcanvas::FileType;
use once_cell::sync::Lazy;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    format!(
        "{}-{}",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    )
});

#[derive(Parser)]
#[command(name="motifmark",
          version=&**FULL_VERSION,
          about="Draws exons, introns, and motif hits of FASTA gene records",
          long_about = None,
          after_help = format!("Copyright (C) {}     motifmark developers", chrono::Utc::now().year()),
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(flatten)]
    pub render: RenderArgs,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    pub verbosity: u8,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[clap(required = true)]
    #[clap(short = 'f')]
    #[clap(long = "fasta")]
    #[clap(help = "FASTA file with gene records (exons uppercase, introns lowercase)")]
    #[clap(value_name = "FASTA")]
    #[arg(value_parser = check_file_exists)]
    pub fasta_path: PathBuf,

    #[clap(required = true)]
    #[clap(short = 'm')]
    #[clap(long = "motifs")]
    #[clap(help = "Motif list, one IUPAC motif per line")]
    #[clap(value_name = "MOTIFS")]
    #[arg(value_parser = check_file_exists)]
    pub motifs_path: PathBuf,

    #[clap(short = 'o')]
    #[clap(long = "output-dir")]
    #[clap(help = "Directory for the image, named after the FASTA file")]
    #[clap(value_name = "DIR")]
    #[clap(default_value = ".")]
    #[arg(value_parser = check_dir_exists)]
    pub output_dir: PathBuf,

    #[clap(help_heading("Plotting"))]
    #[clap(long = "format")]
    #[clap(value_name = "FORMAT")]
    #[clap(help = "Image format (svg, png, or pdf)")]
    #[clap(default_value = "svg")]
    #[arg(value_parser = file_type_from_string)]
    pub format: FileType,

    #[clap(help_heading("Plotting"))]
    #[clap(long = "exons")]
    #[clap(value_name = "EXONS")]
    #[clap(help = "Draw every exon of a record (all) or only its last one (last)")]
    #[clap(default_value = "all")]
    pub exon_mode: ExonMode,

    #[clap(help_heading("Plotting"))]
    #[clap(long = "seed")]
    #[clap(value_name = "SEED")]
    #[clap(help = "Seed for colors of motifs beyond the sixth")]
    #[clap(default_value = "42")]
    pub seed: u64,
}

pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn check_file_exists(s: &str) -> Result<PathBuf, String> {
    let path = Path::new(s);
    if !path.exists() {
        Err(format!("File does not exist: {}", path.display()))
    } else {
        Ok(path.to_path_buf())
    }
}

fn check_dir_exists(s: &str) -> Result<PathBuf, String> {
    let path = Path::new(s);
    if !path.is_dir() {
        Err(format!("Directory does not exist: {}", path.display()))
    } else {
        Ok(path.to_path_buf())
    }
}

fn file_type_from_string(s: &str) -> Result<FileType, String> {
    FileType::from_extension(s)
        .ok_or_else(|| format!("Image format must be svg, png, or pdf, got: {}", s))
}
