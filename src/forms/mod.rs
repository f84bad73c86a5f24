pub mod encode;
pub mod validate;
