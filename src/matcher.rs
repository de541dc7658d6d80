use crate::{ToggleOptions, WordEntry, WordTable, sample_core_word};
use regex::Captures;
use tracing::trace;

/// Which side of the cursor the search span lies on.
///
/// `Forward` searches the span ending at the cursor word and keeps the match with
/// the largest start. `Backward` searches the span starting at the cursor word and
/// keeps the match with the smallest start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
	Forward,
	Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
	Literal,
	Pattern,
}

/// Closest configured word found in a search span. Offsets are relative to the span.
#[derive(Debug, Clone)]
pub struct MatchResult<'a> {
	pub start: usize,
	pub end: usize,
	/// Matched text, as it appears in the span.
	pub matched: String,
	/// Word whose casing is mirrored onto the replacement.
	pub sample: String,
	pub kind: MatchKind,
	/// The matched entry's configured word or expression.
	pub source: &'a str,
	pub entry: &'a WordEntry,
	/// Entry the match turns into.
	pub next: &'a WordEntry,
	/// Successor's raw replacement, before capture expansion and case adjustment.
	pub next_word: &'a str,
	/// Successor's replacement with capture references expanded against this match.
	pub expanded: String,
	pub guide: Option<&'a str>,
}

/// Finds the configured word closest to the cursor within `text`.
///
/// Only a strictly closer candidate replaces the running one, so among equally
/// close matches the first in table order wins. With
/// [`ToggleOptions::exact_boundary_early_exit`], the scan stops at the first new
/// candidate whose relevant edge (end for `Forward`, start for `Backward`) equals
/// `boundary`.
pub fn find_closest_match<'a>(
	text: &str,
	table: &'a WordTable,
	direction: Direction,
	decrement: bool,
	boundary: usize,
	options: &ToggleOptions,
) -> Option<MatchResult<'a>> {
	if text.is_empty() {
		return None;
	}

	let mut best: Option<MatchResult<'a>> = None;

	for group in table.groups() {
		for (word_idx, entry) in group.entries().iter().enumerate() {
			let Some(caps) = nearest_captures(entry, text, direction) else {
				continue;
			};
			let Some(full) = caps.get(0) else {
				continue;
			};

			let is_closer = match (&best, direction) {
				(None, _) => true,
				(Some(best), Direction::Forward) => full.start() > best.start,
				(Some(best), Direction::Backward) => full.start() < best.start,
			};
			if !is_closer {
				continue;
			}

			let next_idx = next_index_wrap(decrement, word_idx, group.len());
			let Some(next) = group.get(next_idx) else {
				continue;
			};

			let candidate = MatchResult {
				start: full.start(),
				end: full.end(),
				matched: full.as_str().to_string(),
				sample: case_sample(entry, &caps),
				kind: if entry.is_pattern() {
					MatchKind::Pattern
				} else {
					MatchKind::Literal
				},
				source: entry.source(),
				entry,
				next,
				next_word: next.replacement(),
				expanded: expand_replacement(next, &caps),
				guide: next.guide(),
			};
			trace!(
				"closest so far '{}' at {} -> '{}'",
				candidate.matched, candidate.start, candidate.next_word
			);

			let edge = match direction {
				Direction::Forward => candidate.end,
				Direction::Backward => candidate.start,
			};
			best = Some(candidate);

			if options.exact_boundary_early_exit && edge == boundary {
				return best;
			}
		}
	}

	best
}

/// Index of the successor (or predecessor when `decrement`) in a cyclic group of `len`.
pub fn next_index_wrap(decrement: bool, idx: usize, len: usize) -> usize {
	if len == 0 {
		return 0;
	}
	if decrement {
		if idx == 0 { len - 1 } else { idx - 1 }
	} else if idx + 1 >= len {
		0
	} else {
		idx + 1
	}
}

// region:    --- Support

/// Non-empty occurrence of `entry` nearest the cursor side of `text`.
///
/// Literal entries restart the search one character after each match start, so
/// overlapping occurrences are seen too (`aa` is found at 0 and at 1 in `aaa`).
/// Pattern entries keep the regex's own non-overlapping, leftmost-first matches.
fn nearest_captures<'t>(entry: &WordEntry, text: &'t str, direction: Direction) -> Option<Captures<'t>> {
	if entry.is_pattern() {
		let mut occurrences = entry
			.regex()
			.captures_iter(text)
			.filter(|caps| caps.get(0).is_some_and(|m| !m.is_empty()));

		return match direction {
			Direction::Forward => occurrences.last(),
			Direction::Backward => occurrences.next(),
		};
	}

	let mut nearest = None;
	let mut pos = 0;

	while pos <= text.len() {
		let Some(caps) = entry.regex().captures_at(text, pos) else {
			break;
		};
		let Some(full) = caps.get(0) else {
			break;
		};
		let start = full.start();
		let is_empty = full.is_empty();

		if !is_empty {
			match direction {
				Direction::Backward => return Some(caps),
				Direction::Forward => nearest = Some(caps),
			}
		}

		pos = start + text[start..].chars().next().map(char::len_utf8).unwrap_or(1);
	}

	nearest
}

fn case_sample(entry: &WordEntry, caps: &Captures<'_>) -> String {
	let full = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
	if !entry.is_pattern() || caps.len() < 2 {
		return full.to_string();
	}

	let groups: Vec<&str> = caps.iter().skip(1).flatten().map(|m| m.as_str()).collect();
	sample_core_word(full, &groups)
}

fn expand_replacement(next: &WordEntry, caps: &Captures<'_>) -> String {
	if !next.is_pattern() {
		return next.replacement().to_string();
	}
	let mut dst = String::new();
	caps.expand(next.replacement(), &mut dst);
	dst
}

// endregion: --- Support

// region:    --- Tests

#[cfg(test)]
mod tests {
	type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>; // For tests.

	use super::*;

	#[test]
	fn test_next_index_wrap() {
		assert_eq!(next_index_wrap(false, 0, 3), 1);
		assert_eq!(next_index_wrap(false, 2, 3), 0);
		assert_eq!(next_index_wrap(true, 0, 3), 2);
		assert_eq!(next_index_wrap(true, 2, 3), 1);
		assert_eq!(next_index_wrap(false, 0, 1), 0);
		assert_eq!(next_index_wrap(true, 0, 1), 0);
	}

	#[test]
	fn test_find_closest_match_forward_takes_largest_start() -> Result<()> {
		// -- Setup & Fixtures
		let table = WordTable::new(vec![vec!["true", "false"], vec!["yes", "no"]])?;
		let text = "yes or TRUE";

		// -- Exec
		let res = find_closest_match(text, &table, Direction::Forward, false, text.len(), &ToggleOptions::default())
			.ok_or("Should have a match")?;

		// -- Check
		assert_eq!(res.start, 7);
		assert_eq!(res.matched, "TRUE");
		assert_eq!(res.next_word, "false");
		assert_eq!(res.kind, MatchKind::Literal);

		Ok(())
	}

	#[test]
	fn test_find_closest_match_backward_takes_smallest_start() -> Result<()> {
		// -- Setup & Fixtures
		let table = WordTable::new(vec![vec!["true", "false"], vec!["yes", "no"]])?;

		// -- Exec
		let res = find_closest_match("yes or true", &table, Direction::Backward, false, 0, &ToggleOptions::default())
			.ok_or("Should have a match")?;

		// -- Check
		assert_eq!(res.start, 0);
		assert_eq!(res.matched, "yes");
		assert_eq!(res.next_word, "no");

		Ok(())
	}

	#[test]
	fn test_find_closest_match_same_word_twice() -> Result<()> {
		// -- Setup & Fixtures
		let table = WordTable::new(vec![vec!["true", "false"]])?;

		// -- Exec
		let res = find_closest_match("true or true", &table, Direction::Forward, false, 12, &ToggleOptions::default())
			.ok_or("Should have a match")?;

		// -- Check
		assert_eq!(res.start, 8);

		Ok(())
	}

	#[test]
	fn test_find_closest_match_tie_first_entry_wins() -> Result<()> {
		// -- Setup & Fixtures
		let table = WordTable::new(vec![vec!["on", "off"], vec!["one", "two"]])?;

		// -- Exec
		let res = find_closest_match("one", &table, Direction::Backward, false, 0, &ToggleOptions::default())
			.ok_or("Should have a match")?;

		// -- Check
		assert_eq!(res.matched, "on");
		assert_eq!(res.next_word, "off");

		Ok(())
	}

	#[test]
	fn test_find_closest_match_decrement_wraps() -> Result<()> {
		// -- Setup & Fixtures
		let table = WordTable::new(vec![vec!["low", "medium", "high"]])?;

		// -- Exec
		let res = find_closest_match("low", &table, Direction::Forward, true, 3, &ToggleOptions::default())
			.ok_or("Should have a match")?;

		// -- Check
		assert_eq!(res.next_word, "high");

		Ok(())
	}

	#[test]
	fn test_find_closest_match_early_exit_quirk() -> Result<()> {
		// -- Setup & Fixtures
		// "be on" ends at the cursor, but "on" starts closer to it
		let table = WordTable::new(vec![vec!["be on", "be off"], vec!["on", "off"]])?;
		let text = "be on";

		// -- Exec
		let full_scan = find_closest_match(text, &table, Direction::Forward, false, text.len(), &ToggleOptions::default())
			.ok_or("Should have a match")?;
		let early_exit = find_closest_match(
			text,
			&table,
			Direction::Forward,
			false,
			text.len(),
			&ToggleOptions::default().with_exact_boundary_early_exit(true),
		)
		.ok_or("Should have a match")?;

		// -- Check
		assert_eq!(full_scan.matched, "on");
		assert_eq!(full_scan.start, 3);
		assert_eq!(early_exit.matched, "be on");
		assert_eq!(early_exit.start, 0);

		Ok(())
	}

	#[test]
	fn test_find_closest_match_early_exit_backward_start_edge() -> Result<()> {
		// -- Setup & Fixtures
		// backward boundary is the span start, nothing can start closer than it
		let table = WordTable::new(vec![vec!["yes", "no"], vec!["be", "bee"], vec!["bet", "bat"]])?;
		let text = "bet yes";
		let early = ToggleOptions::default().with_exact_boundary_early_exit(true);

		// -- Exec
		let full_scan = find_closest_match(text, &table, Direction::Backward, false, 0, &ToggleOptions::default())
			.ok_or("Should have a match")?;
		let early_exit =
			find_closest_match(text, &table, Direction::Backward, false, 0, &early).ok_or("Should have a match")?;

		// -- Check
		assert_eq!(full_scan.matched, "be");
		assert_eq!(full_scan.start, 0);
		assert_eq!(early_exit.matched, "be");
		assert_eq!(early_exit.next_word, "bee");

		Ok(())
	}

	#[test]
	fn test_find_closest_match_overlapping_occurrences() -> Result<()> {
		// -- Setup & Fixtures
		let table = WordTable::new(vec![vec!["aa", "b"]])?;

		// -- Exec
		let fwd = find_closest_match("aaa", &table, Direction::Forward, false, 3, &ToggleOptions::default())
			.ok_or("Should have a match")?;
		let bwd = find_closest_match("aaa", &table, Direction::Backward, false, 0, &ToggleOptions::default())
			.ok_or("Should have a match")?;

		// -- Check
		assert_eq!(fwd.start, 1);
		assert_eq!(bwd.start, 0);

		Ok(())
	}

	#[test]
	fn test_find_closest_match_pattern_captures() -> Result<()> {
		// -- Setup & Fixtures
		let table = WordTable::new(vec![vec![
			[r"(self\.)enabled", "${1}enabled", "enabled"],
			[r"(self\.)disabled", "${1}disabled", "disabled"],
		]])?;
		let text = "if self.Enabled";

		// -- Exec
		let res = find_closest_match(text, &table, Direction::Forward, false, text.len(), &ToggleOptions::default())
			.ok_or("Should have a match")?;

		// -- Check
		assert_eq!(res.kind, MatchKind::Pattern);
		assert_eq!(res.start, 3);
		assert_eq!(res.sample, "Enabled");
		assert_eq!(res.next_word, "${1}disabled");
		assert_eq!(res.expanded, "self.disabled");
		assert_eq!(res.guide, Some("disabled"));
		assert!(res.next.is_pattern());

		Ok(())
	}

	#[test]
	fn test_find_closest_match_none() -> Result<()> {
		// -- Setup & Fixtures
		let table = WordTable::new(vec![vec!["true", "false"]])?;

		// -- Check
		assert!(
			find_closest_match("nothing here", &table, Direction::Forward, false, 12, &ToggleOptions::default()).is_none()
		);
		assert!(find_closest_match("", &table, Direction::Backward, false, 0, &ToggleOptions::default()).is_none());

		Ok(())
	}
}

// endregion: --- Tests
