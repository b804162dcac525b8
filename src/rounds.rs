//! Round-count configuration.  The reference design fixes 32 rounds;
//! anything lower is accepted for experiments but logged as unsafe.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use super::error::Error;

/// A validated, non-zero number of rounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rounds(u32);

impl Rounds {
    /// The round count of the reference design.
    pub const REFERENCE: Rounds = Rounds(32);

    /// Fewer rounds than this are considered cryptographically weak.
    pub const MINIMUM_RECOMMENDED: u32 = 32;

    /// Validates `rounds`.  Zero is rejected; counts below
    /// `MINIMUM_RECOMMENDED` are allowed but flagged.
    ///
    /// # Example:
    /// ```
    /// use tea_engine::{Error, Rounds};
    ///
    /// assert_eq!(Rounds::new(32).unwrap(), Rounds::REFERENCE);
    /// assert!(Rounds::new(8).unwrap().is_reduced());
    /// assert_eq!(Rounds::new(0), Err(Error::InvalidRoundCount { rounds: 0 }));
    /// ```
    pub fn new(rounds: u32) -> Result<Rounds, Error> {
        if rounds == 0 {
            return Err(Error::InvalidRoundCount { rounds: 0 });
        }
        if rounds < Self::MINIMUM_RECOMMENDED {
            warn!(
                rounds,
                minimum = Self::MINIMUM_RECOMMENDED,
                "round count is below the recommended minimum, output is not secure"
            );
        }
        Ok(Rounds(rounds))
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// True if this is fewer rounds than the reference design uses.
    pub fn is_reduced(self) -> bool {
        self.0 < Self::MINIMUM_RECOMMENDED
    }
}

impl Default for Rounds {
    fn default() -> Rounds {
        Rounds::REFERENCE
    }
}

impl TryFrom<i64> for Rounds {
    type Error = Error;

    fn try_from(rounds: i64) -> Result<Rounds, Error> {
        if rounds <= 0 {
            return Err(Error::InvalidRoundCount { rounds });
        }
        let rounds = u32::try_from(rounds).map_err(|_| Error::RoundCountOutOfRange { rounds })?;
        Rounds::new(rounds)
    }
}

impl FromStr for Rounds {
    type Err = Error;

    fn from_str(s: &str) -> Result<Rounds, Error> {
        let rounds: i64 = s.trim().parse()?;
        Rounds::try_from(rounds)
    }
}

impl fmt::Display for Rounds {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
