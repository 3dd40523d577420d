//! Text helpers.

/// Generate a URL friendly "slug" from the given text.
///
/// # Examples
///
/// ```
/// use lantern_utils::text::slugify;
///
/// assert_eq!(slugify("My First Post!!"), "my-first-post");
/// assert_eq!(slugify("Hello  World"), "hello-world");
/// ```
pub fn slugify(text: &str) -> String {
	slugify_with(text, '-')
}

/// Generate a slug using a custom separator character.
///
/// The text is lowercased; everything that is not the separator, a letter
/// or digit (Unicode-aware), or whitespace is stripped; runs of separators
/// and whitespace collapse into a single separator, trimmed at both ends.
///
/// # Examples
///
/// ```
/// use lantern_utils::text::slugify_with;
///
/// assert_eq!(slugify_with("My First Post!!", '_'), "my_first_post");
/// ```
pub fn slugify_with(text: &str, separator: char) -> String {
	let lowered = text.to_lowercase();

	let kept: String = lowered
		.chars()
		.filter(|&ch| ch == separator || ch.is_alphanumeric() || ch.is_whitespace())
		.collect();

	kept.split(|ch: char| ch == separator || ch.is_whitespace())
		.filter(|part| !part.is_empty())
		.collect::<Vec<_>>()
		.join(separator.to_string().as_str())
}
