//! Wire types sent to the generation endpoint.

mod request;

pub use request::{
    Content, GenerateRequest, GenerationConfig, GoogleSearch, Part, ThinkingConfig, Tool,
};
