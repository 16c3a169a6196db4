pub mod applications;
pub mod context;
pub mod proofs;
