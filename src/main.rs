use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::{info, info_span};
use tracing_subscriber::filter::LevelFilter;

use eurobias::*;
use eurobias::io::{self as export, Curve, PrettyFormatter};
use eurobias::data::parse_sequence;

/// Estimates the bias of a spun coin from counts of heads and tails.
#[derive( Debug, Parser )]
#[command( version )]
struct Args {
    /// Number of heads observed
    #[arg( long, default_value_t = 140 )]
    heads: u64,

    /// Number of tails observed
    #[arg( long, default_value_t = 110 )]
    tails: u64,

    /// Explicit sequence of spins such as HHTH; overrides the counts
    #[arg( long )]
    sequence: Option<String>,

    /// Per-spin or aggregate likelihood
    #[arg( long, value_enum, default_value_t = Variant::Bernoulli )]
    likelihood: Variant,

    /// Mass of the credible interval in percent
    #[arg( long, default_value_t = 90.0 )]
    confidence: f64,

    /// Hypothesis whose posterior probability is reported
    #[arg( long, default_value_t = 50 )]
    reference: Hypothesis,

    /// Directory for the prior and posterior curves (euro2.json, euro3.json)
    #[arg( long )]
    plot_dir: Option<PathBuf>,

    /// Print the summaries as JSON
    #[arg( long )]
    json: bool,

    /// Raise the log level; repeat for more detail
    #[arg( short, long, action = clap::ArgAction::Count )]
    verbose: u8,
}

#[derive( Debug, Clone, Copy, PartialEq, Eq, ValueEnum )]
enum Variant {
    Bernoulli,
    Binomial,
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    prepare_logging( args.verbose );

    let observations = match &args.sequence {
	Some( sequence ) => Some( parse_sequence( sequence ).map_err( |e| e.to_string() )? ),
	None => None,
    };
    let tally = match &observations {
	Some( observations ) => Tally::from_observations( observations ),
	None => Tally::new( args.heads, args.tails ),
    };
    let total = tally.total().map_err( |e| e.to_string() )?;
    info!( "{} heads, {} tails of {total} spins", tally.heads, tally.tails );

    let summaries = match args.likelihood {
	Variant::Bernoulli => {
	    let dataset = match observations {
		Some( observations ) => observations,
		None => tally.expand().map_err( |e| e.to_string() )?,
	    };
	    run( &args, Bernoulli::percent(), &dataset )
	},
	Variant::Binomial => run( &args, Binomial::percent(), &[tally] ),
    }.map_err( |e| e.to_string() )?;

    if args.json {
	let text = serde_json::to_string_pretty( &summaries ).map_err( |e| e.to_string() )?;
	println!( "{text}" );
    } else {
	let mut formatter = SummaryFormatter::new();
	formatter.show_name();
	let blocks: Vec<String> = summaries.iter().map( |s| formatter.format_pretty( s )).collect();
	println!( "{}", blocks.join( "\n\n" ));
    }

    Ok( () )
}

/// Updates a uniform and a triangular prior with the same data and summarizes both.
fn run<L>( args: &Args, likelihood: L, dataset: &[L::Data] ) -> Result<Vec<Summary>, Error> where
    L: Likelihood + Clone,
    L::Data: Clone,
{
    let mut uniform = Estimator::new( "uniform", prior::uniform( prior::percentages() )?, likelihood.clone() )?;
    let mut triangle = Estimator::new( "triangle", prior::triangular( 0, 50, 100 )?, likelihood )?;

    if let Some( dir ) = &args.plot_dir {
	export::write_curves( &[Curve::from( &uniform ), Curve::from( &triangle )], dir, "euro2" )?;
    }

    let mut summaries = Vec::new();
    for estimator in [&mut uniform, &mut triangle] {
	let run_span = info_span!( "estimator", name = estimator.name() );
	let _guard = run_span.enter();

	estimator.update_all( dataset.iter().cloned() )?;
	let summary = estimator.summarize( args.reference, args.confidence )?;
	summary.log( "summary", tracing::Level::INFO );
	summaries.push( summary );
    }

    if let Some( dir ) = &args.plot_dir {
	export::write_curves( &[Curve::from( &uniform ), Curve::from( &triangle )], dir, "euro3" )?;
    }

    Ok( summaries )
}

fn prepare_logging( verbosity: u8 ) {
    let level = match verbosity {
	0 => LevelFilter::WARN,
	1 => LevelFilter::INFO,
	2 => LevelFilter::DEBUG,
	_ => LevelFilter::TRACE,
    };
    let tracer = tracing_subscriber::fmt::fmt()
	.with_max_level( level )
	.with_writer( std::io::stderr )
	.finish();
    if tracing::subscriber::set_global_default( tracer ).is_err() {
	eprintln!( "logging was already initialized" );
    }
}
