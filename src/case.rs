/// Letter-casing pattern of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
	Lower,
	Capitalized,
	AllCaps,
}

/// Classifies `word`. `AllCaps` is tested first, so a single upper-case letter is `AllCaps`.
pub fn classify_case(word: &str) -> CaseStyle {
	if word.to_uppercase() == word {
		CaseStyle::AllCaps
	} else if upper_first(word) == word {
		CaseStyle::Capitalized
	} else {
		CaseStyle::Lower
	}
}

/// Reapplies `style` to `word`. `Lower` leaves the word as configured.
pub fn apply_case(word: &str, style: CaseStyle) -> String {
	match style {
		CaseStyle::AllCaps => word.to_uppercase(),
		CaseStyle::Capitalized => upper_first(word),
		CaseStyle::Lower => word.to_string(),
	}
}

/// Isolates the core word of a pattern match for case sampling.
///
/// Keeps the characters of `full_match` that are not part of the longest common
/// subsequence with the concatenated capture `groups`, so context captured around
/// the word (e.g. `self.` in `self.Enabled`) is dropped.
pub fn sample_core_word(full_match: &str, groups: &[&str]) -> String {
	let full: Vec<char> = full_match.chars().collect();
	let parts: Vec<char> = groups.concat().chars().collect();

	if parts.is_empty() {
		return full_match.to_string();
	}

	// lcs[i][j] = LCS length of full[i..] and parts[j..]
	let mut lcs = vec![vec![0usize; parts.len() + 1]; full.len() + 1];
	for i in (0..full.len()).rev() {
		for j in (0..parts.len()).rev() {
			lcs[i][j] = if full[i] == parts[j] {
				lcs[i + 1][j + 1] + 1
			} else {
				lcs[i + 1][j].max(lcs[i][j + 1])
			};
		}
	}

	let mut out = String::new();
	let (mut i, mut j) = (0, 0);
	while i < full.len() {
		if j < parts.len() && full[i] == parts[j] {
			i += 1;
			j += 1;
		} else if j < parts.len() && lcs[i][j + 1] > lcs[i + 1][j] {
			j += 1;
		} else {
			out.push(full[i]);
			i += 1;
		}
	}

	out
}

// region:    --- Support

fn upper_first(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

// endregion: --- Support

// region:    --- Tests


// endregion: --- Tests
