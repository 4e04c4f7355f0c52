use std::path::Path;
use std::fs::File;
use std::io::{BufWriter, Write};

use serde::Serialize;

use crate::*;
use crate::error::Result;

/// Converts a structure into a string
pub trait PrettyFormatter<T> {
    fn format_pretty( &self, object: &T ) -> String;
}

/// A named distribution laid out as points for an external plotter.
#[derive( Debug, Clone, PartialEq, Serialize )]
pub struct Curve {
    pub name: String,
    pub points: Vec<(Hypothesis, f64)>,
}

impl Curve {
    pub fn new( name: &str, pmf: &Pmf ) -> Curve {
	Curve {
	    name: name.to_string(),
	    points: pmf.iter().collect(),
	}
    }
}

impl<L: Likelihood> From<&Estimator<L>> for Curve {
    fn from( estimator: &Estimator<L> ) -> Curve {
	Curve::new( estimator.name(), estimator.pmf() )
    }
}

/// Writes a serializable value to a file as JSON
pub fn write_json<T: Serialize + ?Sized, P: AsRef<Path>>( value: &T, path: P ) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new( File::create( path )? );
    serde_json::to_writer_pretty( &mut writer, value )?;
    writer.write_all( b"\n" )?;
    writer.flush()?;
    debug!( "wrote {}", path.display() );
    Ok( () )
}

/// Writes the curves to `<directory>/<root>.json`.
pub fn write_curves<P: AsRef<Path>>( curves: &[Curve], directory: P, root: &str ) -> Result<()> {
    let directory = directory.as_ref();
    std::fs::create_dir_all( directory )?;
    write_json( curves, directory.join( format!( "{root}.json" )))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::prior;

    fn scratch_dir( name: &str ) -> std::path::PathBuf {
	let dir = std::env::temp_dir().join( format!( "eurobias-{}-{name}", std::process::id() ));
	let _ = std::fs::remove_dir_all( &dir );
	dir
    }

    #[test]
    fn test_curve_points_ascending() {
	let pmf = prior::triangular( 0, 2, 4 ).unwrap();
	let curve = Curve::new( "tent", &pmf );
	let hypotheses: Vec<Hypothesis> = curve.points.iter().map( |(h, _)| *h ).collect();
	assert_eq!( hypotheses, vec!( 0, 1, 2, 3, 4 ));
	assert_approx!( curve.points[ 2 ].1, 0.5, 1e-12 );
    }

    #[test]
    fn test_write_curves() {
	let dir = scratch_dir( "curves" );
	let flat = Curve::new( "uniform", &prior::uniform( 0 ..= 2 ).unwrap() );
	write_curves( &[flat], &dir, "priors" ).unwrap();

	let text = std::fs::read_to_string( dir.join( "priors.json" )).unwrap();
	let value: serde_json::Value = serde_json::from_str( &text ).unwrap();
	assert_eq!( value[ 0 ][ "name" ], "uniform" );
	assert_eq!( value[ 0 ][ "points" ].as_array().unwrap().len(), 3 );
	assert_eq!( value[ 0 ][ "points" ][ 1 ][ 0 ], 1 );
	std::fs::remove_dir_all( &dir ).unwrap();
    }

    #[test]
    fn test_write_json_missing_directory() {
	let dir = scratch_dir( "missing" );
	let result = write_json( &vec!( 1, 2, 3 ), dir.join( "nested" ).join( "out.json" ));
	assert!( matches!( result, Err( Error::Io( _ ))));
    }
}
