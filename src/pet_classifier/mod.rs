pub mod error;
pub mod main;
pub mod prediction;

#[cfg(test)]
mod tests;
