use crate::{Error, Result, WordEntry, WordSpec};
use once_cell::sync::Lazy;
use tracing::error;

/// Built-in groups, used when the embedder has no table of its own.
const DEFAULT_GROUPS: &[&[&str]] = &[
	&["true", "false"],
	&["yes", "no"],
	&["on", "off"],
	&["enable", "disable"],
	&["left", "right"],
	&["up", "down"],
	&["top", "bottom"],
	&["min", "max"],
	&["first", "last"],
	&["before", "after"],
	&["public", "private"],
	&["low", "medium", "high"],
];

static DEFAULT_TABLE: Lazy<WordTable> = Lazy::new(|| {
	let groups = DEFAULT_GROUPS.iter().map(|words| words.iter().copied());
	match WordTable::new(groups) {
		Ok(table) => table,
		Err(err) => {
			error!("built-in word table failed to load, toggling disabled. Cause: {err}");
			WordTable { groups: Vec::new() }
		}
	}
});

/// Ordered, cyclic set of mutually substitutable entries. Never empty.
#[derive(Debug, Clone)]
pub struct WordGroup {
	entries: Vec<WordEntry>,
}

impl WordGroup {
	pub fn entries(&self) -> &[WordEntry] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn get(&self, idx: usize) -> Option<&WordEntry> {
		self.entries.get(idx)
	}
}

/// The full, validated word-group table. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct WordTable {
	groups: Vec<WordGroup>,
}

impl WordTable {
	/// Validates and compiles every entry. The first configuration error aborts the build.
	pub fn new<G, E>(groups: impl IntoIterator<Item = G>) -> Result<Self>
	where
		G: IntoIterator<Item = E>,
		E: Into<WordSpec>,
	{
		let mut compiled = Vec::new();

		for (group_idx, group) in groups.into_iter().enumerate() {
			let entries = group
				.into_iter()
				.enumerate()
				.map(|(entry_idx, spec)| WordEntry::compile(spec.into(), group_idx, entry_idx))
				.collect::<Result<Vec<_>>>()?;

			if entries.is_empty() {
				return Err(Error::empty_group(group_idx));
			}

			compiled.push(WordGroup { entries });
		}

		Ok(Self { groups: compiled })
	}

	/// Shared built-in table (booleans, common opposites, a low/medium/high scale).
	pub fn default_table() -> &'static WordTable {
		&DEFAULT_TABLE
	}

	pub fn groups(&self) -> &[WordGroup] {
		&self.groups
	}
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>; // For tests.

	use super::*;

	#[test]
	fn test_word_table_new_mixed() -> Result<()> {
		// -- Setup & Fixtures
		let groups: Vec<Vec<WordSpec>> = vec![
			vec!["true".into(), "false".into()],
			vec![[r"(\s)is(\s)", "${1}is not${2}"].into(), "maybe".into()],
		];

		// -- Exec
		let table = WordTable::new(groups)?;

		// -- Check
		assert_eq!(table.groups().len(), 2);
		assert_eq!(table.groups()[1].len(), 2);
		assert!(table.groups()[1].entries()[0].is_pattern());

		Ok(())
	}

	#[test]
	fn test_word_table_new_empty_group() -> Result<()> {
		// -- Exec
		let res = WordTable::new(vec![vec!["a", "b"], vec![]]);

		// -- Check
		assert!(matches!(res, Err(Error::EmptyGroup { group_idx: 1 })));

		Ok(())
	}

	#[test]
	fn test_word_table_new_empty_word() -> Result<()> {
		// -- Exec
		let res = WordTable::new(vec![vec!["a", ""]]);

		// -- Check
		assert!(matches!(
			res,
			Err(Error::EmptyWord {
				group_idx: 0,
				entry_idx: 1
			})
		));

		Ok(())
	}

	#[test]
	fn test_word_table_default_table_complete() -> Result<()> {
		// -- Exec
		let table = WordTable::default_table();

		// -- Check
		assert!(!table.groups().is_empty());
		assert_eq!(table.groups().len(), DEFAULT_GROUPS.len());
		for (group, words) in table.groups().iter().zip(DEFAULT_GROUPS) {
			assert_eq!(group.len(), words.len());
		}

		Ok(())
	}
}

// endregion: --- Tests
