//! Inference endpoint implementations

pub mod bedrock;

pub use bedrock::BedrockClient;
