//! Route lookup and URI wildcard patterns.
//!
//! A route pattern is a string of comma-separated alternate URI forms, each
//! optionally prefixed with an HTTP verb (`"GET /user/(:num), POST /user/(:num)"`).
//! URL generation only ever uses the first form. Wildcard segments are
//! parenthesized tokens such as `(:any)` and `(:num)`; a trailing `?` inside
//! the token marks the segment optional.

use std::collections::HashMap;
use std::ops::Range;

/// Lookup capability mapping a route name to its URI pattern.
pub trait RouteLookup {
	/// Find the URI pattern registered under `name`.
	fn find(&self, name: &str) -> Option<&str>;
}

impl RouteLookup for HashMap<String, String> {
	fn find(&self, name: &str) -> Option<&str> {
		self.get(name).map(String::as_str)
	}
}

impl<R: RouteLookup + ?Sized> RouteLookup for &R {
	fn find(&self, name: &str) -> Option<&str> {
		(**self).find(name)
	}
}

/// In-memory name-to-pattern route table.
///
/// # Examples
///
/// ```
/// use lantern_urls::routes::{RouteLookup, RouteTable};
///
/// let mut routes = RouteTable::new();
/// routes.register("profile", "GET /user/(:any)");
///
/// assert_eq!(routes.find("profile"), Some("GET /user/(:any)"));
/// assert_eq!(routes.find("missing"), None);
/// ```
#[derive(Debug, Default, Clone)]
pub struct RouteTable {
	routes: HashMap<String, String>,
}

impl RouteTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a URI pattern under a route name. A later registration under
	/// the same name replaces the earlier one.
	pub fn register(&mut self, name: impl Into<String>, pattern: impl Into<String>) {
		self.routes.insert(name.into(), pattern.into());
	}

	/// Check whether a route name is registered.
	pub fn contains(&self, name: &str) -> bool {
		self.routes.contains_key(name)
	}
}

impl RouteLookup for RouteTable {
	fn find(&self, name: &str) -> Option<&str> {
		self.routes.get(name).map(String::as_str)
	}
}

/// Extract the usable URI from a route pattern: the first comma-separated
/// form, sliced from its first `/` so any verb prefix is dropped.
///
/// # Examples
///
/// ```
/// use lantern_urls::routes::first_uri;
///
/// assert_eq!(first_uri("GET /user/(:num), POST /user/(:num)"), "/user/(:num)");
/// assert_eq!(first_uri("/plain"), "/plain");
/// ```
pub fn first_uri(pattern: &str) -> &str {
	let first = pattern.split(", ").next().unwrap_or(pattern);
	match first.find('/') {
		Some(position) => &first[position..],
		None => first,
	}
}

/// Substitute positional parameters into `(...)` wildcard groups, in order.
///
/// Each parameter replaces the first remaining parenthesized group; the
/// scan restarts from the beginning of the string after every substitution.
/// Parameters beyond the available wildcards are ignored, and wildcards
/// beyond the available parameters are left in place.
///
/// # Examples
///
/// ```
/// use lantern_urls::routes::fill_wildcards;
///
/// assert_eq!(fill_wildcards("/user/(:any)/(:num)", &["fred", "7"]), "/user/fred/7");
/// assert_eq!(fill_wildcards("/user/(:any)/(:num)", &["fred"]), "/user/fred/(:num)");
/// ```
pub fn fill_wildcards(uri: &str, parameters: &[&str]) -> String {
	let mut uri = uri.to_string();
	for parameter in parameters {
		let Some(range) = wildcard_range(&uri) else {
			break;
		};
		uri.replace_range(range, parameter);
	}
	uri
}

/// Byte range of the first parenthesized group, brackets included. The
/// group must enclose at least one character.
fn wildcard_range(uri: &str) -> Option<Range<usize>> {
	let open = uri.find('(')?;
	let close = uri[open + 1..].find(')')?;
	if close == 0 {
		return None;
	}
	Some(open..open + close + 2)
}

/// Remove unfilled optional wildcard segments from a URI.
pub fn strip_optional_wildcards(uri: &str) -> String {
	uri.replace("/(:any?)", "").replace("/(:num?)", "")
}
