//! Dotted-path access to nested value trees.
//!
//! Keys use JavaScript-style "dot" notation to address members of nested
//! objects, which is how configuration trees with variable depth are read
//! and written. All functions operate on a caller-supplied
//! [`serde_json::Value`]; `set` mutates it in place.

use std::borrow::Cow;

use serde_json::{Map, Value};

/// Get an item from a value tree.
///
/// If `key` is `None` the whole tree is returned. Returns `None` the moment
/// a path segment is missing or the current node is not an object; missing
/// paths are never an error.
///
/// # Examples
///
/// ```
/// use lantern_utils::path::get;
/// use serde_json::json;
///
/// let tree = json!({"name": {"is": "taylor"}});
///
/// assert_eq!(get(&tree, Some("name.is")), Some(&json!("taylor")));
/// assert_eq!(get(&tree, Some("name.was")), None);
/// assert_eq!(get(&tree, None), Some(&tree));
/// ```
pub fn get<'a>(root: &'a Value, key: Option<&str>) -> Option<&'a Value> {
	let Some(key) = key else {
		return Some(root);
	};

	let mut node = root;
	for segment in key.split('.') {
		node = node.as_object()?.get(segment)?;
	}

	Some(node)
}

/// Get an item from a value tree, falling back to `default` when the path
/// is absent.
///
/// # Examples
///
/// ```
/// use lantern_utils::path::get_or;
/// use serde_json::json;
///
/// let tree = json!({});
/// let default = json!("d");
///
/// assert_eq!(get_or(&tree, Some("x.y"), &default), &json!("d"));
/// ```
pub fn get_or<'a>(root: &'a Value, key: Option<&str>, default: &'a Value) -> &'a Value {
	get(root, key).unwrap_or(default)
}

/// Get an item from a value tree, producing the default lazily.
///
/// The closure is only invoked when the path is absent.
///
/// # Examples
///
/// ```
/// use lantern_utils::path::get_or_else;
/// use serde_json::json;
///
/// let tree = json!({"a": 1});
///
/// assert_eq!(*get_or_else(&tree, Some("a"), || json!(0)), json!(1));
/// assert_eq!(*get_or_else(&tree, Some("b"), || json!(0)), json!(0));
/// ```
pub fn get_or_else<'a, F>(root: &'a Value, key: Option<&str>, default: F) -> Cow<'a, Value>
where
	F: FnOnce() -> Value,
{
	match get(root, key) {
		Some(value) => Cow::Borrowed(value),
		None => Cow::Owned(default()),
	}
}

/// Set an item in a value tree to the given value.
///
/// Missing intermediate objects are created on the way down, and any
/// non-object value found at an intermediate segment (the root included) is
/// overwritten with an empty object. If `key` is `None` the whole tree is
/// replaced by `value`. The tree is mutated through the caller's reference.
///
/// # Examples
///
/// ```
/// use lantern_utils::path::set;
/// use serde_json::{Value, json};
///
/// let mut tree = Value::Null;
/// set(&mut tree, Some("name.is"), json!("taylor"));
///
/// assert_eq!(tree, json!({"name": {"is": "taylor"}}));
/// ```
pub fn set(root: &mut Value, key: Option<&str>, value: Value) {
	let Some(key) = key else {
		*root = value;
		return;
	};

	let mut node = root;
	let mut segments = key.split('.').peekable();

	while let Some(segment) = segments.next() {
		if !node.is_object() {
			*node = Value::Object(Map::new());
		}

		let Value::Object(map) = node else {
			unreachable!()
		};

		if segments.peek().is_none() {
			map.insert(segment.to_string(), value);
			return;
		}

		node = map
			.entry(segment)
			.or_insert_with(|| Value::Object(Map::new()));
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn test_get_nested() {
		let tree = json!({"a": {"b": {"c": 1}}});
		assert_eq!(get(&tree, Some("a.b.c")), Some(&json!(1)));
	}

	#[test]
	fn test_get_single_segment() {
		let tree = json!({"a": 1});
		assert_eq!(get(&tree, Some("a")), Some(&json!(1)));
	}

	#[test]
	fn test_get_missing_returns_none() {
		let tree = json!({"a": {"b": 1}});
		assert_eq!(get(&tree, Some("a.c")), None);
		assert_eq!(get(&tree, Some("x.y")), None);
	}

	#[test]
	fn test_get_through_non_object() {
		// "a" is a scalar, so descending past it misses.
		let tree = json!({"a": 1});
		assert_eq!(get(&tree, Some("a.b")), None);
	}

	#[test]
	fn test_get_none_key_returns_root() {
		let tree = json!({"a": 1});
		assert_eq!(get(&tree, None), Some(&tree));
	}

	#[test]
	fn test_get_array_is_not_a_mapping() {
		let tree = json!({"a": [1, 2, 3]});
		assert_eq!(get(&tree, Some("a.0")), None);
	}

	#[test]
	fn test_get_or_default() {
		let tree = json!({});
		let default = json!("d");
		assert_eq!(get_or(&tree, Some("x.y"), &default), &json!("d"));
	}

	#[test]
	fn test_get_or_else_only_invoked_on_miss() {
		let tree = json!({"a": 1});
		let hit = get_or_else(&tree, Some("a"), || panic!("default invoked on hit"));
		assert_eq!(*hit, json!(1));

		let miss = get_or_else(&tree, Some("b"), || json!("d"));
		assert_eq!(*miss, json!("d"));
	}

	#[test]
	fn test_set_creates_intermediates() {
		let mut tree = json!({});
		set(&mut tree, Some("a.b"), json!(5));
		assert_eq!(tree, json!({"a": {"b": 5}}));
	}

	#[test]
	fn test_set_deep_path_from_null_root() {
		let mut tree = Value::Null;
		set(&mut tree, Some("a.b.c"), json!(true));
		assert_eq!(tree, json!({"a": {"b": {"c": true}}}));
	}

	#[test]
	fn test_set_overwrites_scalar_intermediate() {
		let mut tree = json!({"a": "scalar"});
		set(&mut tree, Some("a.b"), json!(1));
		assert_eq!(tree, json!({"a": {"b": 1}}));
	}

	#[test]
	fn test_set_overwrites_existing_leaf() {
		let mut tree = json!({"name": {"is": "something"}});
		set(&mut tree, Some("name.is"), json!("taylor"));
		assert_eq!(tree, json!({"name": {"is": "taylor"}}));
	}

	#[test]
	fn test_set_preserves_siblings() {
		let mut tree = json!({"a": {"x": 1}});
		set(&mut tree, Some("a.y"), json!(2));
		assert_eq!(tree, json!({"a": {"x": 1, "y": 2}}));
	}

	#[test]
	fn test_set_none_key_replaces_root() {
		let mut tree = json!({"a": 1});
		set(&mut tree, None, json!([1, 2]));
		assert_eq!(tree, json!([1, 2]));
	}

	#[test]
	fn test_set_then_get_roundtrip() {
		let mut tree = json!({"a": 7});
		set(&mut tree, Some("a.b.c"), json!("deep"));
		assert_eq!(get(&tree, Some("a.b.c")), Some(&json!("deep")));
	}
}
