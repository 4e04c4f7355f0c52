use std::collections::BTreeMap;

use crate::*;
use crate::error::Result;

/// Named posterior over hypotheses, updated with a likelihood fixed at construction.
#[derive( Debug, Clone )]
pub struct Estimator<L: Likelihood> {
    name: String,
    pmf: Pmf,
    /// normalized natural-log weights; `pmf` is derived from these
    log_weights: BTreeMap<Hypothesis, f64>,
    likelihood: L,
}

impl<L: Likelihood> Estimator<L> {

    /// Starts from `prior`, which is normalized here if it was not already.
    pub fn new<S: Into<String>>( name: S, mut prior: Pmf, likelihood: L ) -> Result<Estimator<L>> {
	if prior.is_empty() {
	    return Err( Error::invalid( "hypothesis space is empty" ));
	}
	prior.normalize()?;
	let log_weights = prior.iter().map( |(h, w)| (h, w.ln()) ).collect();
	Ok( Estimator {
	    name: name.into(),
	    pmf: prior,
	    log_weights,
	    likelihood,
	})
    }

    /// Multiplies every weight by the likelihood of `data` and renormalizes.
    ///
    /// The product is accumulated in the log domain, so long runs of one outcome cannot round
    /// the other hypotheses down to zero. Returns the natural log of the total weight before
    /// normalization (the log probability of the data under the previous distribution). On
    /// failure the distribution is left as it was.
    pub fn update( &mut self, data: &L::Data ) -> Result<f64> {
	let mut log_weights = self.log_weights.clone();
	for (hypothesis, log_weight) in log_weights.iter_mut() {
	    let log_like = self.likelihood.log_likelihood( *hypothesis, data );
	    if log_like.is_nan() || log_like == f64::INFINITY {
		return Err( Error::invalid( format!( "likelihood of hypothesis {hypothesis} is negative or undefined" )));
	    }
	    *log_weight += log_like;
	}
	let (posterior, log_total) = Pmf::from_log_weights( log_weights.iter().map( |(h, lw)| (*h, *lw) ))?;
	for log_weight in log_weights.values_mut() {
	    *log_weight -= log_total;
	}
	self.pmf = posterior;
	self.log_weights = log_weights;
	trace!( "{}: update normalized by exp({log_total:.6})", self.name );
	Ok( log_total )
    }

    /// Applies one update per datum, in order. Stops at the first failure; the updates before it
    /// remain applied.
    pub fn update_all<I>( &mut self, dataset: I ) -> Result<usize> where I: IntoIterator<Item = L::Data> {
	let update_span = info_span!( "update", estimator = %self.name );
	let _guard = update_span.enter();

	let mut count = 0;
	for data in dataset {
	    self.update( &data )?;
	    count += 1;
	}
	debug!( "{count} updates applied" );
	if enabled!( Level::TRACE ) {
	    self.pmf.log( "posterior", Level::TRACE );
	}
	Ok( count )
    }

    pub fn name( &self ) -> &str {
	&self.name
    }

    pub fn pmf( &self ) -> &Pmf {
	&self.pmf
    }

    pub fn probability_of( &self, hypothesis: Hypothesis ) -> f64 {
	self.pmf.prob( hypothesis )
    }

    pub fn maximum_likelihood( &self ) -> Hypothesis {
	self.pmf.maximum_likelihood().expect( "estimator distributions are never empty" )
    }

    pub fn mean( &self ) -> f64 {
	self.pmf.mean()
    }

    pub fn percentile( &self, percentage: f64 ) -> Result<Hypothesis> {
	self.pmf.percentile( percentage )
    }

    pub fn credible_interval( &self, confidence: f64 ) -> Result<(Hypothesis, Hypothesis)> {
	self.pmf.credible_interval( confidence )
    }

    /// Structured summary reporting the probability of `reference` and a `confidence` interval.
    pub fn summarize( &self, reference: Hypothesis, confidence: f64 ) -> Result<Summary> {
	Summary::new( &self.name, &self.pmf, reference, confidence )
    }
}
