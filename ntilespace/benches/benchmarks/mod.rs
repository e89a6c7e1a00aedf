pub mod accumulate;
pub mod finalize;
