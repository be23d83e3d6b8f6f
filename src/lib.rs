pub mod dataset;
pub mod domain;
pub mod errors;
pub mod frontend;
pub mod responses;
pub mod router;
pub mod search;
pub mod settings;
pub mod templates;

#[cfg(test)]
mod tests;
