use super::TestResult;
use togglex::{Direction, LineBuffer, ToggleOptions, WordTable, toggle_in_host};

/// Table shared by the integration tests.
pub fn new_test_table() -> TestResult<WordTable> {
	let table = WordTable::new(vec![
		vec!["true", "false"],
		vec!["quick", "slow"],
		vec!["enabled", "disabled"],
		vec!["north", "east", "south", "west"],
	])?;

	Ok(table)
}

/// Toggles `buf` `times` times in a row, failing if any toggle finds nothing.
pub fn toggle_times(
	buf: &mut LineBuffer,
	table: &WordTable,
	direction: Direction,
	decrement: bool,
	times: usize,
) -> TestResult<Vec<String>> {
	let mut lines = Vec::with_capacity(times);
	for i in 0..times {
		let changed = toggle_in_host(buf, table, direction, decrement, &ToggleOptions::default())?;
		if !changed {
			return Err(format!("Toggle #{i} found nothing in '{}'", buf.line()).into());
		}
		lines.push(buf.line().to_string());
	}

	Ok(lines)
}
