//! Application URL generation.

use serde::Deserialize;

use crate::error::{UrlError, UrlResult};
use crate::routes::{RouteLookup, fill_wildcards, first_uri, strip_optional_wildcards};

/// URL generation settings, as read from application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct UrlConfig {
	/// Application base URL, scheme included (`"http://example.com"`).
	pub url: String,
	/// Front controller filename appended to application URLs
	/// (`"index.php"`); empty when the server rewrites it away.
	#[serde(default)]
	pub index: String,
	/// Whether asset URLs default to HTTPS.
	#[serde(default)]
	pub ssl: bool,
}

/// Writer for application URLs.
///
/// Bound to a base URL, a front controller index file, and a route lookup
/// table. The configuration is immutable once constructed; the route table
/// is only ever read.
///
/// # Examples
///
/// ```
/// use lantern_urls::{RouteTable, UrlBuilder};
///
/// let url = UrlBuilder::new(RouteTable::new(), "http://example.com", "index.php", false);
///
/// assert_eq!(url.to("user/profile"), "http://example.com/index.php/user/profile");
/// assert_eq!(url.to_asset("img/pic.jpg"), "http://example.com/img/pic.jpg");
/// ```
#[derive(Debug, Clone)]
pub struct UrlBuilder<R> {
	base: String,
	index: String,
	https: bool,
	routes: R,
}

impl<R: RouteLookup> UrlBuilder<R> {
	/// Create a new URL writer.
	pub fn new(routes: R, base: impl Into<String>, index: impl Into<String>, https: bool) -> Self {
		Self {
			base: base.into(),
			index: index.into(),
			https,
			routes,
		}
	}

	/// Create a URL writer from application configuration.
	pub fn from_config(config: UrlConfig, routes: R) -> Self {
		Self::new(routes, config.url, config.index, config.ssl)
	}

	/// Generate an application URL.
	///
	/// If the given path is already a well-formed absolute URL it is
	/// returned unchanged.
	pub fn to(&self, path: &str) -> String {
		self.to_with(path, false)
	}

	/// Generate an application URL, optionally forcing HTTPS.
	pub fn to_with(&self, path: &str, https: bool) -> String {
		if url::Url::parse(path).is_ok() {
			return path.to_string();
		}

		let mut base = format!("{}/{}", self.base, self.index);
		if https {
			base = base.replacen("http://", "https://", 1);
		}

		format!("{}/{}", base.trim_end_matches('/'), path.trim_matches('/'))
	}

	/// Generate an application URL with HTTPS.
	pub fn to_secure(&self, path: &str) -> String {
		self.to_with(path, true)
	}

	/// Generate a URL to an asset, using the instance HTTPS default.
	///
	/// The front controller index file is never part of asset URLs.
	pub fn to_asset(&self, path: &str) -> String {
		self.to_asset_with(path, self.https)
	}

	/// Generate a URL to an asset with an explicit HTTPS choice.
	pub fn to_asset_with(&self, path: &str, https: bool) -> String {
		let url = self.to_with(path, https);
		if self.index.is_empty() {
			return url;
		}
		url.replacen(&format!("{}/", self.index), "", 1)
	}

	/// Generate a URL from a named route.
	///
	/// Positional parameters fill the route's wildcard segments in order;
	/// optional wildcards left unfilled are dropped from the URI.
	///
	/// # Examples
	///
	/// ```
	/// use lantern_urls::{RouteTable, UrlBuilder};
	///
	/// let mut routes = RouteTable::new();
	/// routes.register("profile", "GET /user/(:any)");
	///
	/// let url = UrlBuilder::new(routes, "http://example.com", "index.php", false);
	///
	/// assert_eq!(
	/// 	url.to_route("profile", &["fred"]).unwrap(),
	/// 	"http://example.com/index.php/user/fred"
	/// );
	/// ```
	pub fn to_route(&self, name: &str, parameters: &[&str]) -> UrlResult<String> {
		self.to_route_with(name, parameters, false)
	}

	/// Generate a URL from a named route, optionally forcing HTTPS.
	pub fn to_route_with(
		&self,
		name: &str,
		parameters: &[&str],
		https: bool,
	) -> UrlResult<String> {
		let Some(pattern) = self.routes.find(name) else {
			tracing::warn!("no route registered under name '{}'", name);
			return Err(UrlError::RouteNotFound(name.to_string()));
		};

		let uri = fill_wildcards(first_uri(pattern), parameters);
		let uri = strip_optional_wildcards(&uri);

		Ok(self.to_with(&uri, https))
	}

	/// Generate an HTTPS URL from a named route.
	pub fn to_secure_route(&self, name: &str, parameters: &[&str]) -> UrlResult<String> {
		self.to_route_with(name, parameters, true)
	}

	/// Resolve a `to_<name>` / `to_secure_<name>` style method name to a
	/// named-route URL.
	///
	/// Replacement for dynamically created URL methods: the route name is
	/// parsed out of the method name and dispatched through
	/// [`to_route_with`](Self::to_route_with).
	pub fn dispatch(&self, method: &str, parameters: &[&str]) -> UrlResult<String> {
		if let Some(name) = method.strip_prefix("to_secure_") {
			return self.to_route_with(name, parameters, true);
		}
		if let Some(name) = method.strip_prefix("to_") {
			return self.to_route_with(name, parameters, false);
		}

		Err(UrlError::UnknownMethod(method.to_string()))
	}
}
