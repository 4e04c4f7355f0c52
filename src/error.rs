use thiserror::Error;

/// Failures of the estimator and its export layer.
#[derive( Debug, Error )]
pub enum Error {
    /// An argument lies outside the domain of the operation.
    #[error( "invalid argument: {0}" )]
    InvalidArgument( String ),

    /// Normalization met a total weight of zero (or one that is not finite).
    #[error( "degenerate distribution: total weight {total} cannot be normalized" )]
    DegenerateDistribution { total: f64 },

    #[error( "io error: {0}" )]
    Io( #[from] std::io::Error ),

    #[error( "json error: {0}" )]
    Json( #[from] serde_json::Error ),
}

impl Error {
    pub fn invalid<S: Into<String>>( message: S ) -> Error {
	Error::InvalidArgument( message.into() )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
