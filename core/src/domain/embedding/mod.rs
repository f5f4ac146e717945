pub mod codec;
pub mod similarity;
