use derive_more::{Display, From};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Display, From)]
pub enum Error {
	#[from(String, &String, &str)]
	Custom(String),

	// -- Config
	#[display("word group #{group_idx} has no entries")]
	EmptyGroup { group_idx: usize },

	#[display("word group #{group_idx}, entry #{entry_idx} is empty")]
	EmptyWord { group_idx: usize, entry_idx: usize },

	#[display("word group #{group_idx}, entry #{entry_idx}: pattern entry needs 2 or 3 parts, got {arity}")]
	PatternArity {
		group_idx: usize,
		entry_idx: usize,
		arity: usize,
	},

	#[display("word group #{group_idx}, entry #{entry_idx}: cannot compile pattern '{pattern}'. Cause: {cause}")]
	PatternCompile {
		group_idx: usize,
		entry_idx: usize,
		pattern: String,
		cause: String,
	},

	// -- Host
	#[display("invalid cursor column {col} for line of {line_len} bytes")]
	InvalidCursor { col: usize, line_len: usize },

	// -- Externals
	#[from]
	Regex(regex::Error),
}

// region:    --- Constructors

impl Error {
	pub fn empty_group(group_idx: usize) -> Self {
		Self::EmptyGroup { group_idx }
	}

	pub fn empty_word(group_idx: usize, entry_idx: usize) -> Self {
		Self::EmptyWord { group_idx, entry_idx }
	}

	pub fn pattern_arity(group_idx: usize, entry_idx: usize, arity: usize) -> Self {
		Self::PatternArity {
			group_idx,
			entry_idx,
			arity,
		}
	}

	pub fn pattern_compile(group_idx: usize, entry_idx: usize, pattern: impl Into<String>, cause: regex::Error) -> Self {
		Self::PatternCompile {
			group_idx,
			entry_idx,
			pattern: pattern.into(),
			cause: cause.to_string(),
		}
	}

	pub fn invalid_cursor(col: usize, line_len: usize) -> Self {
		Self::InvalidCursor { col, line_len }
	}
}

// endregion: --- Constructors

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
