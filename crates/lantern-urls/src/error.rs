//! URL generation error types.

use thiserror::Error;

/// Result type for URL generation.
pub type UrlResult<T> = Result<T, UrlError>;

/// URL generation errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UrlError {
	/// No route is registered under the requested name.
	#[error("error generating named route for route [{0}]: route is not defined")]
	RouteNotFound(String),

	/// A shorthand method name did not match any known form.
	#[error("method [{0}] is not defined on the URL builder")]
	UnknownMethod(String),
}
