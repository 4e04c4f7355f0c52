use serde::Serialize;

use crate::*;
use crate::error::Result;
use crate::io::PrettyFormatter;

/// Summary statistics of a distribution over hypotheses.
#[derive( Debug, Clone, PartialEq, Serialize )]
pub struct Summary {
    pub name: String,
    /// hypothesis whose probability is reported, 50 for a fair coin
    pub reference: Hypothesis,
    pub reference_probability: f64,
    pub maximum_likelihood: Hypothesis,
    pub mean: f64,
    pub median: Hypothesis,
    /// (percentage, hypothesis) at the lower edge of the interval
    pub lower_percentile: (f64, Hypothesis),
    /// (percentage, hypothesis) at the upper edge of the interval
    pub upper_percentile: (f64, Hypothesis),
    pub confidence: f64,
    pub credible_interval: (Hypothesis, Hypothesis),
}

impl Summary {
    pub fn new( name: &str, pmf: &Pmf, reference: Hypothesis, confidence: f64 ) -> Result<Summary> {
	let maximum_likelihood = pmf.maximum_likelihood()
	    .ok_or_else( || Error::invalid( "summary of an empty distribution" ))?;
	let credible_interval = pmf.credible_interval( confidence )?;
	let tail = (100.0 - confidence) / 2.0;
	Ok( Summary {
	    name: name.to_string(),
	    reference,
	    reference_probability: pmf.prob( reference ),
	    maximum_likelihood,
	    mean: pmf.mean(),
	    median: pmf.percentile( 50.0 )?,
	    lower_percentile: (tail, pmf.percentile( tail )?),
	    upper_percentile: (100.0 - tail, pmf.percentile( 100.0 - tail )?),
	    confidence,
	    credible_interval,
	})
    }
}

impl Loggable for Summary {
    fn log( &self, message: &str, level: tracing::Level ) {
	log_at( level, &format!( "{message} {}: MLE {} mean {:.3} CI {:?}",
				 self.name, self.maximum_likelihood, self.mean, self.credible_interval ));
    }
}

/// Renders a summary as labeled lines.
pub struct SummaryFormatter {
    show_name: bool,
}

impl PrettyFormatter<Summary> for SummaryFormatter {

    fn format_pretty( &self, summary: &Summary ) -> String {
	let (lower, lower_hypothesis) = summary.lower_percentile;
	let (upper, upper_hypothesis) = summary.upper_percentile;
	let (low, high) = summary.credible_interval;

	let mut lines = Vec::new();
	if self.show_name {
	    lines.push( summary.name.clone() );
	}
	lines.push( format_line( &format!( "P({})", summary.reference ), format!( "{:.4}", summary.reference_probability )));
	lines.push( format_line( "MLE", summary.maximum_likelihood.to_string() ));
	lines.push( format_line( "Mean", format!( "{:.2}", summary.mean )));
	lines.push( format_line( "Median", summary.median.to_string() ));
	lines.push( format_line( &format!( "{} %ile", ordinal( lower )), lower_hypothesis.to_string() ));
	lines.push( format_line( &format!( "{} %ile", ordinal( upper )), upper_hypothesis.to_string() ));
	lines.push( format_line( &format!( "{}% CI", trim_number( summary.confidence )), format!( "({low}, {high})" )));
	lines.join( "\n" )
    }
}

impl SummaryFormatter {
    pub fn new() -> SummaryFormatter {
	SummaryFormatter {
	    show_name: false,
	}
    }

    pub fn show_name( &mut self ) { self.show_name = true; }
}

impl Default for SummaryFormatter {
    fn default() -> Self {
	SummaryFormatter::new()
    }
}

fn format_line( label: &str, value: String ) -> String {
    format!( "{label:<10} {value}" )
}

/// Prints whole numbers without a fractional part.
fn trim_number( value: f64 ) -> String {
    if value.fract() == 0.0 {
	format!( "{value:.0}" )
    } else {
	value.to_string()
    }
}

fn ordinal( percentage: f64 ) -> String {
    let number = trim_number( percentage );
    if percentage.fract() != 0.0 {
	return format!( "{number}th" );
    }
    let suffix = match (percentage as i64 % 100, percentage as i64 % 10) {
	(11 ..= 13, _) => "th",
	(_, 1) => "st",
	(_, 2) => "nd",
	(_, 3) => "rd",
	_ => "th",
    };
    format!( "{number}{suffix}" )
}
