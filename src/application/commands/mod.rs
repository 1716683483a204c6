pub mod articles;
pub mod imports;
