pub mod cli;
pub mod formatters;
pub mod types;
pub mod validator;
