pub mod crypto;
pub mod patch;
pub mod token;
