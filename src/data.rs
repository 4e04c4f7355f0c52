use std::fmt;
use std::str::FromStr;

use crate::*;

/// Outcome of a single spin of the coin.
#[derive( Debug, Clone, Copy, PartialEq, Eq, Hash )]
pub enum Observation {
    Heads,
    Tails,
}

/// Aggregate outcome of many spins.
#[derive( Debug, Clone, Copy, PartialEq, Eq, Default )]
pub struct Tally {
    pub heads: u64,
    pub tails: u64,
}

impl TryFrom<char> for Observation {
    type Error = Error;

    fn try_from( symbol: char ) -> Result<Observation, Error> {
	match symbol {
	    'H' | 'h' => Ok( Observation::Heads ),
	    'T' | 't' => Ok( Observation::Tails ),
	    other => Err( Error::invalid( format!( "'{other}' is neither H nor T" ))),
	}
    }
}

impl fmt::Display for Observation {
    fn fmt( &self, f: &mut fmt::Formatter ) -> fmt::Result {
	match self {
	    Observation::Heads => write!( f, "H" ),
	    Observation::Tails => write!( f, "T" ),
	}
    }
}

impl Tally {
    pub fn new( heads: u64, tails: u64 ) -> Tally {
	Tally { heads, tails }
    }

    pub fn from_observations<'a, I>( observations: I ) -> Tally where I: IntoIterator<Item = &'a Observation> {
	observations.into_iter().fold( Tally::default(), |mut tally, observation| {
	    match observation {
		Observation::Heads => tally.heads += 1,
		Observation::Tails => tally.tails += 1,
	    }
	    tally
	})
    }

    /// Number of spins, failing if it does not fit in a u64.
    pub fn total( &self ) -> Result<u64, Error> {
	self.heads.checked_add( self.tails )
	    .ok_or_else( || Error::invalid( format!( "{} heads and {} tails overflow the spin count", self.heads, self.tails )))
    }

    /// All heads first, then all tails. Fails instead of aborting when the sequence cannot be allocated.
    pub fn expand( &self ) -> Result<Vec<Observation>, Error> {
	let total = usize::try_from( self.total()? )
	    .map_err( |_| Error::invalid( "spin count exceeds the address space" ))?;
	let mut dataset = Vec::new();
	dataset.try_reserve_exact( total )
	    .map_err( |err| Error::invalid( format!( "cannot hold {total} observations: {err}" )))?;
	dataset.extend( std::iter::repeat( Observation::Heads ).take( self.heads as usize ));
	dataset.extend( std::iter::repeat( Observation::Tails ).take( self.tails as usize ));
	Ok( dataset )
    }
}

impl FromStr for Tally {
    type Err = Error;

    fn from_str( sequence: &str ) -> Result<Tally, Error> {
	let observations = parse_sequence( sequence )?;
	Ok( Tally::from_observations( &observations ))
    }
}

/// Parses a string such as "HHT" into observations. Whitespace is skipped.
pub fn parse_sequence( sequence: &str ) -> Result<Vec<Observation>, Error> {
    sequence.chars()
	.filter( |c| !c.is_whitespace() )
	.map( Observation::try_from )
	.collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_expand_heads_then_tails() {
	let dataset = Tally::new( 3, 2 ).expand().unwrap();
	let text: String = dataset.iter().map( |o| o.to_string() ).collect();
	assert_eq!( text, "HHHTT" );
    }

    #[test]
    fn test_parse_sequence() {
	let parsed = parse_sequence( "Ht h\nT" ).unwrap();
	assert_eq!( parsed, vec!( Observation::Heads, Observation::Tails, Observation::Heads, Observation::Tails ));
	assert!( matches!( parse_sequence( "HXT" ), Err( Error::InvalidArgument( _ ))));
	assert!( parse_sequence( "" ).unwrap().is_empty() );
    }

    #[test]
    fn test_tally_from_str() {
	let tally: Tally = "HHTHT".parse().unwrap();
	assert_eq!( tally, Tally::new( 3, 2 ));
	assert_eq!( tally.total().unwrap(), 5 );
    }

    #[test]
    fn test_tally_overflow() {
	let tally = Tally::new( u64::MAX, 1 );
	assert!( matches!( tally.total(), Err( Error::InvalidArgument( _ ))));
	assert!( matches!( tally.expand(), Err( Error::InvalidArgument( _ ))));
    }

    #[test]
    /// Counts that cannot be held in memory are an error, not an abort
    fn test_expand_too_large() {
	let tally = Tally::new( u64::MAX / 2, u64::MAX / 2 );
	assert!( matches!( tally.expand(), Err( Error::InvalidArgument( _ ))));
    }
}
