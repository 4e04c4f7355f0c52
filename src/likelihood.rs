use crate::*;

/// Probability of a datum given a hypothesis.
///
/// The datum type is fixed by the implementation, so the variant is chosen when an estimator is
/// built rather than per update.
pub trait Likelihood {
    type Data;

    /// Non-negative likelihood of `data` under `hypothesis`
    fn likelihood( &self, hypothesis: Hypothesis, data: &Self::Data ) -> f64;

    /// Natural log of the likelihood; negative infinity where the likelihood is zero.
    ///
    /// Implementations whose likelihood underflows for large data override this.
    fn log_likelihood( &self, hypothesis: Hypothesis, data: &Self::Data ) -> f64 {
	self.likelihood( hypothesis, data ).ln()
    }
}

/// Per-spin likelihood: `x` for heads and `1 - x` for tails with `x = hypothesis / scale`.
#[derive( Debug, Clone, Copy, PartialEq )]
pub struct Bernoulli {
    scale: f64,
}

/// Aggregate likelihood of a tally: `x^heads * (1 - x)^tails` with `x = hypothesis / scale`.
///
/// The binomial coefficient is left out since it cancels on normalization. The plain likelihood
/// underflows to zero for a few thousand spins; estimators use `log_likelihood`, which does not.
#[derive( Debug, Clone, Copy, PartialEq )]
pub struct Binomial {
    scale: f64,
}

impl Bernoulli {
    pub fn new( scale: f64 ) -> Bernoulli {
	Bernoulli { scale }
    }

    /// Hypotheses are percentages of heads.
    pub fn percent() -> Bernoulli {
	Bernoulli::new( 100.0 )
    }
}

impl Binomial {
    pub fn new( scale: f64 ) -> Binomial {
	Binomial { scale }
    }

    pub fn percent() -> Binomial {
	Binomial::new( 100.0 )
    }
}

impl Likelihood for Bernoulli {
    type Data = Observation;

    fn likelihood( &self, hypothesis: Hypothesis, data: &Observation ) -> f64 {
	let x = hypothesis as f64 / self.scale;
	match data {
	    Observation::Heads => x,
	    Observation::Tails => 1.0 - x,
	}
    }
}

impl Likelihood for Binomial {
    type Data = Tally;

    fn likelihood( &self, hypothesis: Hypothesis, data: &Tally ) -> f64 {
	self.log_likelihood( hypothesis, data ).exp()
    }

    fn log_likelihood( &self, hypothesis: Hypothesis, data: &Tally ) -> f64 {
	let x = hypothesis as f64 / self.scale;
	// an unseen side contributes nothing, so an edge hypothesis survives 0^0
	weighted_ln( data.heads, x ) + weighted_ln( data.tails, 1.0 - x )
    }
}

fn weighted_ln( count: u64, probability: f64 ) -> f64 {
    if count == 0 { 0.0 } else { count as f64 * probability.ln() }
}
