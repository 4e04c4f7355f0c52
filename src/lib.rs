
#[cfg(test)]
#[macro_use]
mod testing;

pub mod data;
pub mod error;
pub mod estimator;
pub mod io;
pub mod likelihood;
pub mod pmf;
pub mod prior;
pub mod summary;

use tracing::*;

pub use data::{Observation, Tally};
pub use error::Error;
pub use estimator::Estimator;
pub use likelihood::{Likelihood, Bernoulli, Binomial};
pub use pmf::{Hypothesis, Pmf};
pub use summary::{Summary, SummaryFormatter};

/// Objects that can be recorded in the log
pub trait Loggable {
    fn log( &self, message: &str, level: tracing::Level );
}

/// Emits a message at a level only known at runtime.
pub(crate) fn log_at( level: Level, message: &str ) {
    match level {
	Level::ERROR => error!( "{message}" ),
	Level::WARN => warn!( "{message}" ),
	Level::INFO => info!( "{message}" ),
	Level::DEBUG => debug!( "{message}" ),
	_ => trace!( "{message}" ),
    }
}
