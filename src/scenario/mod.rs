pub mod basic;
pub mod file;
pub mod random;
pub mod scenario;
