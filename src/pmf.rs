use std::collections::BTreeMap;

use crate::*;
use crate::error::Result;

/// A candidate value of the unknown parameter, e.g. a percentage 0-100.
pub type Hypothesis = i64;

#[derive( Debug, Clone, PartialEq, Default )]
/// Probability mass function over an ordered, finite hypothesis space.
///
/// Weights are non-negative. After `normalize` they sum to one.
pub struct Pmf {
    weights: BTreeMap<Hypothesis, f64>,
}

impl Pmf {

    pub fn new() -> Pmf {
	Pmf { weights: BTreeMap::new() }
    }

    /// Assigns weight 1 to every hypothesis. The result is not normalized.
    pub fn from_hypotheses<I>( hypotheses: I ) -> Pmf where I: IntoIterator<Item = Hypothesis> {
	Pmf { weights: hypotheses.into_iter().map( |h| (h, 1.0) ).collect() }
    }

    /// Collects (hypothesis, weight) pairs; later pairs overwrite earlier ones.
    pub fn from_weights<I>( pairs: I ) -> Result<Pmf> where I: IntoIterator<Item = (Hypothesis, f64)> {
	let mut pmf = Pmf::new();
	for (hypothesis, weight) in pairs {
	    pmf.set( hypothesis, weight )?;
	}
	Ok( pmf )
    }

    /// Normalized distribution from unnormalized natural-log weights, returned with the log of their total.
    ///
    /// Weights are shifted by their maximum before exponentiating, so totals far below the
    /// smallest f64 still normalize. If every log weight is negative infinity the distribution is
    /// degenerate.
    pub fn from_log_weights<I>( pairs: I ) -> Result<(Pmf, f64)> where I: IntoIterator<Item = (Hypothesis, f64)> {
	let pairs: Vec<(Hypothesis, f64)> = pairs.into_iter().collect();
	if let Some( (hypothesis, _) ) = pairs.iter().find( |(_, lw)| lw.is_nan() || *lw == f64::INFINITY ) {
	    return Err( Error::invalid( format!( "log weight of hypothesis {hypothesis} is not below infinity" )));
	}
	let max = pairs.iter().map( |(_, lw)| *lw ).fold( f64::NEG_INFINITY, f64::max );
	if max == f64::NEG_INFINITY {
	    return Err( Error::DegenerateDistribution { total: 0.0 } );
	}
	let mut pmf = Pmf {
	    weights: pairs.iter().map( |(h, lw)| (*h, (lw - max).exp()) ).collect(),
	};
	// the maximum contributes exactly one, so the shifted total is at least one
	let shifted_total = pmf.normalize()?;
	Ok( (pmf, max + shifted_total.ln()) )
    }

    /// Sets the weight of a hypothesis, inserting it if absent.
    pub fn set( &mut self, hypothesis: Hypothesis, weight: f64 ) -> Result<()> {
	if !(weight >= 0.0) || !weight.is_finite() {
	    return Err( Error::invalid( format!( "weight {weight} of hypothesis {hypothesis} is not a finite non-negative number" )));
	}
	self.weights.insert( hypothesis, weight );
	Ok( () )
    }

    /// Multiplies the weight of a present hypothesis by factor.
    pub fn mult( &mut self, hypothesis: Hypothesis, factor: f64 ) {
	if let Some( weight ) = self.weights.get_mut( &hypothesis ) {
	    *weight *= factor;
	}
    }

    /// Scales the weights to sum to one and returns the total before scaling.
    ///
    /// A zero or non-finite total leaves the weights untouched and reports a degenerate distribution.
    pub fn normalize( &mut self ) -> Result<f64> {
	let total = self.total();
	if !(total > 0.0) || !total.is_finite() {
	    return Err( Error::DegenerateDistribution { total } );
	}
	for weight in self.weights.values_mut() {
	    *weight /= total;
	}
	Ok( total )
    }

    pub fn total( &self ) -> f64 {
	self.weights.values().sum()
    }

    pub fn len( &self ) -> usize {
	self.weights.len()
    }

    pub fn is_empty( &self ) -> bool {
	self.weights.is_empty()
    }

    /// Iterates over (hypothesis, weight) in ascending hypothesis order.
    pub fn iter<'a>( &'a self ) -> impl Iterator<Item = (Hypothesis, f64)> + 'a {
	self.weights.iter().map( |(h, w)| (*h, *w) )
    }

    pub fn hypotheses<'a>( &'a self ) -> impl Iterator<Item = Hypothesis> + 'a {
	self.weights.keys().copied()
    }

    /// Current weight of the hypothesis, 0 if it is not part of the space.
    pub fn prob( &self, hypothesis: Hypothesis ) -> f64 {
	self.weights.get( &hypothesis ).copied().unwrap_or( 0.0 )
    }

    /// Hypothesis with the highest weight; ties go to the smallest hypothesis.
    pub fn maximum_likelihood( &self ) -> Option<Hypothesis> {
	let mut best: Option<(Hypothesis, f64)> = None;
	for (hypothesis, weight) in self.iter() {
	    let better = match best {
		Some( (_, best_weight) ) => weight > best_weight,
		None => true,
	    };
	    if better {
		best = Some( (hypothesis, weight) );
	    }
	}
	best.map( |(hypothesis, _)| hypothesis )
    }

    /// Weighted average of the hypotheses.
    pub fn mean( &self ) -> f64 {
	self.iter().map( |(h, w)| h as f64 * w ).sum()
    }

    /// Running sums of the weights in ascending hypothesis order.
    pub fn cumulative<'a>( &'a self ) -> impl Iterator<Item = (Hypothesis, f64)> + 'a {
	self.iter().scan( 0.0, |total, (h, w)| {
	    *total += w;
	    Some( (h, *total) )
	})
    }

    /// Smallest hypothesis whose cumulative weight reaches percentage / 100.
    ///
    /// If rounding keeps the cumulative weight short of the target, the largest hypothesis is returned.
    pub fn percentile( &self, percentage: f64 ) -> Result<Hypothesis> {
	check_percentage( percentage, "percentile" )?;
	let target = percentage / 100.0;
	let mut last = None;
	for (hypothesis, total) in self.cumulative() {
	    if total >= target {
		return Ok( hypothesis );
	    }
	    last = Some( hypothesis );
	}
	last.ok_or_else( || Error::invalid( "percentile of an empty distribution" ))
    }

    /// Central interval holding `confidence` percent of the mass.
    pub fn credible_interval( &self, confidence: f64 ) -> Result<(Hypothesis, Hypothesis)> {
	check_percentage( confidence, "confidence" )?;
	let tail = (100.0 - confidence) / 2.0;
	Ok( (self.percentile( tail )?, self.percentile( 100.0 - tail )?) )
    }
}

fn check_percentage( value: f64, what: &str ) -> Result<()> {
    if (0.0 ..= 100.0).contains( &value ) {
	Ok( () )
    } else {
	Err( Error::invalid( format!( "{what} {value} outside [0, 100]" )))
    }
}

impl Loggable for Pmf {
    fn log( &self, message: &str, level: tracing::Level ) {
	let entries: Vec<String> = self.iter()
	    .filter( |(_, w)| *w > 0.0 )
	    .map( |(h, w)| format!( "{h}:{w:.4}" ))
	    .collect();
	log_at( level, &format!( "{message} [{}]", entries.join( " " )));
    }
}
