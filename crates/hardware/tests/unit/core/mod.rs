/// Architectural register storage.
pub mod arch;
