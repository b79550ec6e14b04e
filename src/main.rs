#![forbid(unsafe_code)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![forbid(clippy::enum_glob_use)]
#![forbid(clippy::unwrap_used)]

use std::path::PathBuf;

use anyhow::Context;
use colored::Colorize;
use equations::{DifficultyLevel, EquationError, PdfLatex, Renderer, Sheet};
use itertools::Itertools;
use strum::IntoEnumIterator;

fn report_error(string: &str) -> ! {
    eprintln!("{}: {string}", "ERROR".bold().red());
    std::process::exit(1);
}

fn report_warning(string: &str) {
    eprintln!("{}: {string}", "WARNING".bold().yellow());
}

/// Positive integers only; everything else is an `InvalidCount`.
fn count(what: &'static str, got: i64) -> Result<usize, EquationError> {
    usize::try_from(got).ok().filter(|n| *n > 0).ok_or(EquationError::InvalidCount { what, got })
}

fn cli() -> clap::Command {
    let levels = DifficultyLevel::iter().enumerate().map(|(i, level)| format!("{} or {level}", i + 1)).join(", ");
    clap::command!()
        .about("Generate practice systems of linear equations")
        .long_about("Generate randomized systems of linear equations with integer solutions and typeset them with pdflatex, or print them as plain text.")
        .arg(clap::arg!(<systems> "How many systems to generate").value_parser(clap::value_parser!(i64)).allow_negative_numbers(true))
        .arg(clap::arg!(<variables> "Variables (and equations) per system").value_parser(clap::value_parser!(i64)).allow_negative_numbers(true))
        .arg(clap::arg!(<level> "Difficulty level").long_help(format!("Difficulty level: {levels}")))
        .arg(clap::arg!(--text "Print the systems instead of compiling a PDF"))
        .arg(
            clap::arg!(--seed <SEED> "Seed the random source for repeatable output")
                .required(false)
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(clap::arg!(--compiler <PROGRAM> "LaTeX compiler to run").required(false).default_value("pdflatex"))
        .arg(clap::Arg::new("job-name").long("job-name").value_name("NAME").help("Base name of the produced PDF").default_value("out"))
        .arg(
            clap::Arg::new("output-dir")
                .long("output-dir")
                .value_name("DIR")
                .help("Directory the PDF is written to")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("."),
        )
        .arg(clap::arg!(--open "Open the PDF once it is compiled").conflicts_with("text"))
}

fn run(matches: &clap::ArgMatches) -> anyhow::Result<()> {
    let systems = count("system count", *matches.get_one::<i64>("systems").context("missing system count")?)?;
    let variables = count("variable count", *matches.get_one::<i64>("variables").context("missing variable count")?)?;
    let level = DifficultyLevel::parse(matches.get_one::<String>("level").context("missing level")?)?;

    if level.is_fractional() {
        report_warning(&format!("fractional answers aren't available yet, {level} generates like {}", DifficultyLevel::Smart));
    }

    let mut rng = matches.get_one::<u64>("seed").map_or_else(fastrand::Rng::new, |seed| fastrand::Rng::with_seed(*seed));
    let renderer = PdfLatex {
        compiler: matches.get_one::<String>("compiler").context("missing compiler")?.clone(),
        job_name: matches.get_one::<String>("job-name").context("missing job name")?.clone(),
        directory: matches.get_one::<PathBuf>("output-dir").context("missing output directory")?.clone(),
    };
    let renderer: Option<&dyn Renderer> = if matches.get_flag("text") { None } else { Some(&renderer) };

    let pdf = match equations::practice_sheet(&mut rng, systems, variables, level, renderer).context("couldn't produce the sheet")? {
        Sheet::Text(blocks) => {
            println!("{}", blocks.join("\n\n"));
            return Ok(());
        }
        Sheet::Document(pdf) => pdf,
    };
    println!("{}", pdf.display());

    if matches.get_flag("open") {
        log::debug!("opening {}", pdf.display());
        if let Err(err) = open::that(&pdf) {
            report_warning(&format!("Couldn't open {} because {err}", pdf.display()));
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let matches = cli().get_matches();
    if let Err(err) = run(&matches) {
        report_error(&format!("{err:#}"));
    }
}
