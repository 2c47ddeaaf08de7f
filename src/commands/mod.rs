/// A single monitor run: capture, diff, persist, emit.
pub mod check;
