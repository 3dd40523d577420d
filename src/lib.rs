//! # Lantern
//!
//! A small web toolkit for Rust, inspired by Laravel.
//!
//! Lantern bundles the pieces an application needs to generate URLs and work
//! with configuration-style value trees:
//!
//! - `lantern-utils`: dotted-path access to nested value trees and text
//!   helpers such as slug generation
//! - `lantern-urls`: application URL generation, including reversal of named
//!   routes with wildcard parameters
//!
//! ## Quick Start
//!
//! ```
//! use lantern::prelude::*;
//!
//! let mut routes = RouteTable::new();
//! routes.register("profile", "GET /user/(:any)");
//!
//! let url = UrlBuilder::new(routes, "http://example.com", "index.php", false);
//!
//! assert_eq!(url.to("user/profile"), "http://example.com/index.php/user/profile");
//! assert_eq!(
//! 	url.to_route("profile", &["fred"]).unwrap(),
//! 	"http://example.com/index.php/user/fred"
//! );
//! assert_eq!(slugify("My First Post!!"), "my-first-post");
//! ```

#[cfg(feature = "utils")]
pub use lantern_utils as utils;

#[cfg(feature = "urls")]
pub use lantern_urls as urls;

// Re-export commonly used types from the member crates
#[cfg(feature = "urls")]
pub mod prelude {
	pub use lantern_urls::{
		RouteLookup, RouteTable, UrlBuilder, UrlConfig, UrlError, UrlResult, slugify, slugify_with,
	};
}
