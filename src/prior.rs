use statrs::distribution::{Beta, Continuous};

use crate::*;
use crate::error::Result;

/// Integer percentages 0 to 100.
pub fn percentages() -> impl Iterator<Item = Hypothesis> {
    0 ..= 100
}

/// Flat prior over the given hypotheses.
pub fn uniform<I>( hypotheses: I ) -> Result<Pmf> where I: IntoIterator<Item = Hypothesis> {
    let mut pmf = Pmf::from_hypotheses( hypotheses );
    if pmf.is_empty() {
	return Err( Error::invalid( "hypothesis space is empty" ));
    }
    pmf.normalize()?;
    Ok( pmf )
}

/// Tent-shaped prior over the integers in `[low, high]` that peaks at `peak`.
///
/// The weight rises linearly from zero at `low` to one at `peak` and falls back to zero at
/// `high`. `triangular( 0, 50, 100 )` is the symmetric tent over percentages.
pub fn triangular( low: Hypothesis, peak: Hypothesis, high: Hypothesis ) -> Result<Pmf> {
    if low > high {
	return Err( Error::invalid( "hypothesis space is empty" ));
    }
    if peak < low || peak > high {
	return Err( Error::invalid( format!( "peak {peak} outside [{low}, {high}]" )));
    }
    let weights = (low ..= high).map( |h| {
	let weight = if h <= peak {
	    ramp( h - low, peak - low )
	} else {
	    ramp( high - h, high - peak )
	};
	(h, weight)
    });
    let mut pmf = Pmf::from_weights( weights )?;
    pmf.normalize()?;
    Ok( pmf )
}

fn ramp( distance: Hypothesis, width: Hypothesis ) -> f64 {
    if width == 0 { 1.0 } else { distance as f64 / width as f64 }
}

/// Discretized Beta(alpha, beta) density evaluated at `hypothesis / scale`.
pub fn beta<I>( hypotheses: I, scale: f64, alpha: f64, beta: f64 ) -> Result<Pmf> where I: IntoIterator<Item = Hypothesis> {
    let density = Beta::new( alpha, beta ).map_err( |err| Error::invalid( err.to_string() ))?;
    let mut pmf = Pmf::new();
    for h in hypotheses {
	let weight = density.pdf( h as f64 / scale );
	if !weight.is_finite() {
	    return Err( Error::invalid( format!( "Beta({alpha}, {beta}) density is unbounded at hypothesis {h}" )));
	}
	pmf.set( h, weight )?;
    }
    if pmf.is_empty() {
	return Err( Error::invalid( "hypothesis space is empty" ));
    }
    pmf.normalize()?;
    Ok( pmf )
}
