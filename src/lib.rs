pub mod codewars;
pub mod settings;
