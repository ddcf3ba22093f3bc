pub mod cors;
pub mod jwt;
pub mod validate;
