pub mod persistence;
pub mod webhook;
