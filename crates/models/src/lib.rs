pub mod errors;
pub mod db;
pub mod types;
pub mod validate;
pub mod product;
pub mod technique;
pub mod case_study;
pub mod job;
pub mod news;
pub mod contact;

pub use types::StringList;

#[cfg(test)]
mod tests;
