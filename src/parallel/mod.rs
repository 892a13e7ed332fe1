pub mod accumulator;
pub mod policy;
