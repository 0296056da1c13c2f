use std::error::Error;

use clap::Parser;
use log::info;
use tddft::{filter_real, gaussian, Spectrum};

mod plot;
mod report;

use report::OutPaths;

/// simulate a UV-Vis spectrum from a Gaussian TD-DFT log file
#[derive(Parser, Debug)]
#[command(author, about, long_about = None)]
struct Args {
    /// TD-DFT log file
    #[arg(value_parser)]
    infile: String,

    /// Write the parsed excited states to stdout as JSON and exit. For use
    /// by other programs.
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Overwrite existing output from a previous run. Defaults to false.
    #[arg(short, long, default_value_t = false)]
    overwrite: bool,
}

macro_rules! die {
    ($($t:tt)*) => {{
        eprintln!($($t)*);
        std::process::exit(1)
    }};
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let states = match gaussian::read_output(&args.infile) {
        Ok(states) => states,
        Err(e) => die!("failed to read {} with {e}", args.infile),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&states)?);
        return Ok(());
    }

    let paths = OutPaths::new(&args.infile);
    if paths.states.exists() && !args.overwrite {
        die!(
            "existing output {}. overwrite with -o/--overwrite",
            paths.states.display()
        );
    }

    report::write_states(&paths.states, &states)?;
    println!("{}", paths.states.display());

    let real = filter_real(states);
    info!("retained {} excited states", real.len());
    let spectrum = Spectrum::synthesize(&real);

    plot::save(&paths.plot, &paths.title, &real, &spectrum)?;
    println!("{}", paths.plot.display());

    report::write_spectrum(&paths.spectrum, &spectrum, &real)?;
    println!("{}", paths.spectrum.display());

    Ok(())
}
