pub mod json_equality;
pub mod serde_and_verify;

#[cfg(test)]
pub mod test_fixtures;
