pub mod postgres;
pub mod vector;
