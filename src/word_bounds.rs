//! Word-under-cursor boundaries, in byte offsets.
//!
//! A word is the maximal run of characters of the same class around the cursor:
//! keyword characters (alphanumeric or `_`), whitespace, or anything else.

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
	Keyword,
	Blank,
	Other,
}

/// Byte range `start..end` of the word containing byte column `col`.
///
/// Errors when `col` is not the start of a character of a non-empty `line`.
pub fn word_range_at(line: &str, col: usize) -> Result<(usize, usize)> {
	if col >= line.len() || !line.is_char_boundary(col) {
		return Err(Error::invalid_cursor(col, line.len()));
	}

	let class = line[col..].chars().next().map(char_class).ok_or_else(|| Error::invalid_cursor(col, line.len()))?;

	let start = line[..col]
		.char_indices()
		.rev()
		.take_while(|(_, c)| char_class(*c) == class)
		.last()
		.map(|(idx, _)| idx)
		.unwrap_or(col);

	let end = line[col..]
		.char_indices()
		.find(|(_, c)| char_class(*c) != class)
		.map(|(idx, _)| col + idx)
		.unwrap_or(line.len());

	Ok((start, end))
}

// region:    --- Support

fn char_class(c: char) -> CharClass {
	if c.is_alphanumeric() || c == '_' {
		CharClass::Keyword
	} else if c.is_whitespace() {
		CharClass::Blank
	} else {
		CharClass::Other
	}
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests
