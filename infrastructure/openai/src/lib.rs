pub mod chat_model;
pub mod client;

#[cfg(any(test, feature = "test-util"))]
pub mod test_support;
