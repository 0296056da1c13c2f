use std::{fs::read_to_string, sync::OnceLock};

use log::trace;
use regex::Regex;

use crate::{ExcitedState, ParseError};

static CELL: OnceLock<Regex> = OnceLock::new();

/// Extract every excited-state record from the Gaussian log file `filename`.
///
/// Only lines matching `^ Excited State ` are considered; everything else in
/// the log is ignored. It is an error for the log to contain no such lines,
/// since that means the TD-DFT job either failed or was not a TD-DFT job at
/// all.
pub fn read_output(filename: &str) -> Result<Vec<ExcitedState>, ParseError> {
    let contents = match read_to_string(filename) {
        Ok(s) => s,
        Err(_) => return Err(ParseError::FileNotFound(filename.to_owned())),
    };

    let excited = CELL.get_or_init(|| {
        trace!("initializing excited state regex");
        Regex::new(r"^ Excited State ").unwrap()
    });

    let mut states = Vec::new();
    for line in contents.lines() {
        if excited.is_match(line) {
            states.push(line.parse()?);
        }
    }

    if states.is_empty() {
        return Err(ParseError::NoStatesFound(filename.to_owned()));
    }

    Ok(states)
}
