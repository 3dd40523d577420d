//! URL generation for the Lantern toolkit.
//!
//! This crate composes absolute application URLs from a configured base
//! path, rewrites schemes for secure links, and reverses named routes into
//! URLs by filling the wildcard segments of their URI patterns.
//!
//! The route table itself is an external collaborator: anything implementing
//! [`RouteLookup`] can back a [`UrlBuilder`].
//!
//! ## Examples
//!
//! ```
//! use lantern_urls::{RouteTable, UrlBuilder};
//!
//! let mut routes = RouteTable::new();
//! routes.register("profile", "GET /user/(:any)");
//!
//! let url = UrlBuilder::new(routes, "http://example.com", "index.php", false);
//!
//! assert_eq!(
//! 	url.to_route("profile", &["fred"]).unwrap(),
//! 	"http://example.com/index.php/user/fred"
//! );
//! ```

pub mod builder;
pub mod error;
pub mod routes;

pub use builder::{UrlBuilder, UrlConfig};
pub use error::{UrlError, UrlResult};
pub use routes::{RouteLookup, RouteTable};

// Slug generation lives with the text helpers but belongs to the URL
// surface of the toolkit.
pub use lantern_utils::text::{slugify, slugify_with};
