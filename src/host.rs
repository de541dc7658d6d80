use crate::{CursorPosition, Direction, Result, ToggleOptions, WordTable, toggle_word};

/// The narrow surface a host editor exposes to the toggle.
///
/// Column conventions follow Vim: `cursor()` reports a 0-based byte column, while
/// `set_cursor()` takes the 1-based column produced by [`toggle_word`].
pub trait EditorHost {
	fn current_line(&self) -> Result<String>;

	fn cursor(&self) -> Result<CursorPosition>;

	fn set_line(&mut self, line: String) -> Result<()>;

	fn set_cursor(&mut self, pos: CursorPosition) -> Result<()>;
}

/// Runs one toggle against `host`. Returns `true` when the line was changed.
pub fn toggle_in_host(
	host: &mut impl EditorHost,
	table: &WordTable,
	direction: Direction,
	decrement: bool,
	options: &ToggleOptions,
) -> Result<bool> {
	let line = host.current_line()?;
	let cursor = host.cursor()?;

	let Some(edit) = toggle_word(&line, cursor, direction, decrement, table, options)? else {
		return Ok(false);
	};

	host.set_line(edit.line)?;
	host.set_cursor(edit.cursor)?;

	Ok(true)
}

/// Single-line, in-memory host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
	line: String,
	row: usize,
	col: usize,
}

impl LineBuffer {
	pub fn new(line: impl Into<String>, col: usize) -> Self {
		Self {
			line: line.into(),
			row: 1,
			col,
		}
	}

	pub fn line(&self) -> &str {
		&self.line
	}

	/// 0-based byte column.
	pub fn col(&self) -> usize {
		self.col
	}
}

impl EditorHost for LineBuffer {
	fn current_line(&self) -> Result<String> {
		Ok(self.line.clone())
	}

	fn cursor(&self) -> Result<CursorPosition> {
		Ok(CursorPosition::new(self.row, self.col))
	}

	fn set_line(&mut self, line: String) -> Result<()> {
		self.line = line;
		Ok(())
	}

	fn set_cursor(&mut self, pos: CursorPosition) -> Result<()> {
		// clamp onto the last character, like a normal-mode cursor
		let mut col = pos.col.saturating_sub(1).min(self.line.len().saturating_sub(1));
		while col > 0 && !self.line.is_char_boundary(col) {
			col -= 1;
		}
		self.row = pos.row;
		self.col = col;
		Ok(())
	}
}

// region:    --- Tests


// endregion: --- Tests
