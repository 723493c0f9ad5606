pub mod generate;
pub mod generated_names;
pub mod health;
pub mod validate;
