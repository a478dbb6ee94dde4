pub mod fs;
pub mod host;
