pub mod analysis;
pub mod common;
pub mod embedding;
pub mod food;
pub mod nutrition;
pub mod prompt;
#[cfg(test)]
pub mod test_support;
pub mod user;
