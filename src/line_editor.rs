use crate::{
	Direction, Error, MatchKind, MatchResult, Result, ToggleOptions, WordTable, apply_case, classify_case,
	find_closest_match, word_bounds,
};
use tracing::debug;

/// Cursor as (row, column). The row is passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CursorPosition {
	pub row: usize,
	pub col: usize,
}

impl CursorPosition {
	pub const fn new(row: usize, col: usize) -> Self {
		Self { row, col }
	}
}

/// A toggled line and where the cursor goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleEdit {
	pub line: String,
	/// Row unchanged; `col` is the 1-based column of the replaced word's first byte.
	pub cursor: CursorPosition,
}

/// Replaces the configured word closest to the cursor with its successor (or
/// predecessor when `decrement`), mirroring the original word's casing.
///
/// `cursor.col` is a 0-based byte column into `line`. Returns `Ok(None)` when no
/// configured word is found (the line is left as is).
pub fn toggle_word(
	line: &str,
	cursor: CursorPosition,
	direction: Direction,
	decrement: bool,
	table: &WordTable,
	options: &ToggleOptions,
) -> Result<Option<ToggleEdit>> {
	if line.is_empty() {
		return Ok(None);
	}

	let (word_start, word_end) = word_bounds::word_range_at(line, cursor.col)?;

	// -- Search span and the offset that means "touching the cursor word"
	let (span_start, text, boundary) = match direction {
		Direction::Forward => (0, &line[..word_end], word_end),
		Direction::Backward => (word_start, &line[word_start..], 0),
	};

	let Some(found) = find_closest_match(text, table, direction, decrement, boundary, options) else {
		debug!("no configured word near column {} of '{line}'", cursor.col);
		return Ok(None);
	};

	let start = span_start + found.start;
	let end = span_start + found.end;
	let replacement = formatted_replacement(text, &found)?;

	debug!(
		"toggle '{}' at {start} -> '{replacement}' (source '{}')",
		found.matched, found.source
	);

	let new_line = format!("{}{}{}", &line[..start], replacement, &line[end..]);

	Ok(Some(ToggleEdit {
		line: new_line,
		cursor: CursorPosition::new(cursor.row, start + 1),
	}))
}

// region:    --- Support

/// Successor text with the matched word's casing applied.
///
/// - Literal match: the guide word (or the replacement) takes the sampled casing.
/// - Pattern match with a guide word: the guide word is case-adjusted inside the raw
///   template, then the template is expanded against the match's captures.
/// - Pattern match without a guide word: the expanded replacement, verbatim.
fn formatted_replacement(text: &str, found: &MatchResult<'_>) -> Result<String> {
	let style = classify_case(&found.sample);

	let res = match (found.kind, found.guide) {
		(MatchKind::Literal, guide) => apply_case(guide.unwrap_or(&found.expanded), style),
		(MatchKind::Pattern, Some(guide)) => {
			let template = found
				.next
				.guided_template(&apply_case(guide, style))
				.unwrap_or_else(|| found.next_word.to_string());
			let caps = found.entry.regex().captures_at(text, found.start).ok_or_else(|| {
				Error::Custom(format!("pattern '{}' no longer matches at {}", found.source, found.start))
			})?;
			let mut dst = String::new();
			caps.expand(&template, &mut dst);
			dst
		}
		(MatchKind::Pattern, None) => found.expanded.clone(),
	};

	Ok(res)
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests
