pub mod check;
pub mod init;
pub mod questions;
pub mod score;
pub mod validate;
