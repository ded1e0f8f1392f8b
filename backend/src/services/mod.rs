pub mod metadata;
pub mod samples;
