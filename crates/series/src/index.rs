//! Step index extraction from file names
//!
//! Simulations typically write one file per saved frame, with the step number
//! somewhere in the name. Only the file stem is inspected so that digits in
//! parent directories or the extension never contribute.

// crate modules
use crate::error::{Error, Result};

// external crates
use nom::branch::alt;
use nom::bytes::complete::take_till1;
use nom::character::complete::digit1;
use nom::combinator::{all_consuming, map, value};
use nom::multi::many0;
use nom::IResult;

/// Rule for choosing the step index among the digit runs of a file name
///
/// | File stem       | `Last` | `Unique`           |
/// | --------------- | ------ | ------------------ |
/// | `u10`           | 10     | 10                 |
/// | `run2_step0040` | 40     | ambiguous, error   |
/// | `density`       | error  | error              |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexPolicy {
    /// Take the last run of decimal digits
    #[default]
    Last,
    /// Require exactly one run of decimal digits
    Unique,
}

/// Extract the step index from a file stem
///
/// A digit run is a maximal sequence of ASCII digits. Leading zeros are
/// allowed, so `u0040` is step 40.
///
/// ```rust
/// # use xdmfgen_series::{extract_index, IndexPolicy};
/// assert_eq!(extract_index("u10", IndexPolicy::Last).unwrap(), 10);
/// assert_eq!(extract_index("run2_step0040", IndexPolicy::Last).unwrap(), 40);
///
/// // Strict extraction rejects names with more than one candidate
/// assert!(extract_index("run2_step0040", IndexPolicy::Unique).is_err());
///
/// // There has to be something to extract
/// assert!(extract_index("density", IndexPolicy::Last).is_err());
/// ```
pub fn extract_index(stem: &str, policy: IndexPolicy) -> Result<u64> {
    let runs = match digit_runs(stem) {
        Ok((_, runs)) => runs,
        Err(_) => return Err(Error::MalformedFilename(stem.to_string())),
    };

    let run = match (policy, runs.as_slice()) {
        (_, []) => return Err(Error::MalformedFilename(stem.to_string())),
        (IndexPolicy::Unique, [run]) => *run,
        (IndexPolicy::Unique, _) => {
            return Err(Error::AmbiguousIndex {
                name: stem.to_string(),
                runs: runs.len(),
            })
        }
        (IndexPolicy::Last, [.., last]) => *last,
    };

    run.parse::<u64>()
        .map_err(|_| Error::IndexOutOfRange(stem.to_string()))
}

/// Split a name into its runs of decimal digits, discarding everything else
fn digit_runs(i: &str) -> IResult<&str, Vec<&str>> {
    let (i, tokens) = all_consuming(many0(alt((
        map(digit1, Some),
        value(None, take_till1(|c: char| c.is_ascii_digit())),
    ))))(i)?;

    Ok((i, tokens.into_iter().flatten().collect()))
}
