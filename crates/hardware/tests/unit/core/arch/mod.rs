/// General-purpose register invariants.
pub mod gpr;
