/// Per-session switches for the toggle behavior.
#[derive(Debug, Clone, Default)]
pub struct ToggleOptions {
	/// Stop scanning the table at the first match touching the cursor edge,
	/// even when a later entry would be closer.
	pub exact_boundary_early_exit: bool,
}

impl ToggleOptions {
	pub fn with_exact_boundary_early_exit(mut self, value: bool) -> Self {
		self.exact_boundary_early_exit = value;
		self
	}
}
