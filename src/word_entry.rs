use crate::{Error, Result};
use regex::{NoExpand, Regex, RegexBuilder};

/// Raw entry as written in a word-group table, before compilation.
///
/// A plain word becomes a literal entry. A list of parts becomes a pattern entry:
/// `[match_expression, replacement]` or `[match_expression, replacement, guide_word]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSpec {
	Word(String),
	Parts(Vec<String>),
}

/// A compiled, immutable member of a word group.
#[derive(Debug, Clone)]
pub enum WordEntry {
	Literal(LiteralEntry),
	Pattern(PatternEntry),
}

#[derive(Debug, Clone)]
pub struct LiteralEntry {
	word: String,
	regex: Regex,
}

#[derive(Debug, Clone)]
pub struct PatternEntry {
	expr: String,
	replacement: String,
	guide: Option<String>,
	regex: Regex,
	guide_regex: Option<Regex>,
}

impl WordEntry {
	/// Compiles a raw spec. `group_idx` and `entry_idx` only serve error reporting.
	pub fn compile(spec: WordSpec, group_idx: usize, entry_idx: usize) -> Result<Self> {
		match spec {
			WordSpec::Word(word) => {
				if word.is_empty() {
					return Err(Error::empty_word(group_idx, entry_idx));
				}
				let regex = build_case_insensitive(&regex::escape(&word))
					.map_err(|err| Error::pattern_compile(group_idx, entry_idx, &word, err))?;
				Ok(Self::Literal(LiteralEntry { word, regex }))
			}

			WordSpec::Parts(parts) => {
				let arity = parts.len();
				let mut parts = parts.into_iter();
				let (Some(expr), Some(replacement), guide, None) = (parts.next(), parts.next(), parts.next(), parts.next())
				else {
					return Err(Error::pattern_arity(group_idx, entry_idx, arity));
				};

				if expr.is_empty() {
					return Err(Error::empty_word(group_idx, entry_idx));
				}
				let regex =
					build_case_insensitive(&expr).map_err(|err| Error::pattern_compile(group_idx, entry_idx, &expr, err))?;

				let guide = guide.filter(|g| !g.is_empty());
				let guide_regex = guide
					.as_deref()
					.map(|g| build_case_insensitive(&regex::escape(g)))
					.transpose()
					.map_err(|err| Error::pattern_compile(group_idx, entry_idx, guide.as_deref().unwrap_or_default(), err))?;

				Ok(Self::Pattern(PatternEntry {
					expr,
					replacement,
					guide,
					regex,
					guide_regex,
				}))
			}
		}
	}

	pub fn regex(&self) -> &Regex {
		match self {
			Self::Literal(lit) => &lit.regex,
			Self::Pattern(pat) => &pat.regex,
		}
	}

	pub fn is_pattern(&self) -> bool {
		matches!(self, Self::Pattern(_))
	}

	/// Raw text inserted when this entry is chosen as the successor.
	/// For a pattern entry this is a replacement template (`$1`, `${name}`).
	pub fn replacement(&self) -> &str {
		match self {
			Self::Literal(lit) => &lit.word,
			Self::Pattern(pat) => &pat.replacement,
		}
	}

	pub fn guide(&self) -> Option<&str> {
		match self {
			Self::Literal(_) => None,
			Self::Pattern(pat) => pat.guide.as_deref(),
		}
	}

	/// Replacement template with its first guide-word occurrence swapped for `adjusted`.
	///
	/// Works on the raw template, so text later brought in by capture references is
	/// never touched. `None` for literal entries and pattern entries without a guide word.
	pub fn guided_template(&self, adjusted: &str) -> Option<String> {
		let Self::Pattern(pat) = self else {
			return None;
		};
		let guide_re = pat.guide_regex.as_ref()?;
		let adjusted = adjusted.replace('$', "$$");

		Some(guide_re.replacen(&pat.replacement, 1, NoExpand(&adjusted)).into_owned())
	}

	/// The configured text used to find this entry (the word, or the match expression).
	pub fn source(&self) -> &str {
		match self {
			Self::Literal(lit) => &lit.word,
			Self::Pattern(pat) => &pat.expr,
		}
	}
}

// region:    --- Froms

impl From<&str> for WordSpec {
	fn from(word: &str) -> Self {
		Self::Word(word.to_string())
	}
}

impl From<String> for WordSpec {
	fn from(word: String) -> Self {
		Self::Word(word)
	}
}

impl From<Vec<String>> for WordSpec {
	fn from(parts: Vec<String>) -> Self {
		Self::Parts(parts)
	}
}

impl From<Vec<&str>> for WordSpec {
	fn from(parts: Vec<&str>) -> Self {
		Self::Parts(parts.into_iter().map(String::from).collect())
	}
}

impl<const N: usize> From<[&str; N]> for WordSpec {
	fn from(parts: [&str; N]) -> Self {
		Self::Parts(parts.iter().map(|p| p.to_string()).collect())
	}
}

// endregion: --- Froms

// region:    --- Support

fn build_case_insensitive(expr: &str) -> core::result::Result<Regex, regex::Error> {
	RegexBuilder::new(expr).case_insensitive(true).build()
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests
