use serde::Serialize;

/// A single text part of a content entry
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Part {
    pub text: String,
}

/// One conversation turn
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// Empty marker object enabling server-side web search
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct GoogleSearch {}

/// Tool declaration
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Tool {
    pub google_search: GoogleSearch,
}

/// Thinking options
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ThinkingConfig {
    pub include_thoughts: bool,
}

/// Generation options
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub thinking_config: ThinkingConfig,
}

/// Request body for `streamGenerateContent`
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateRequest {
    /// Create a single-turn request for a prompt
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.into(),
                }],
            }],
            tools: Vec::new(),
            generation_config: None,
        }
    }

    /// Enable or disable the google_search tool
    pub fn with_google_search(mut self, enabled: bool) -> Self {
        self.tools = if enabled {
            vec![Tool {
                google_search: GoogleSearch::default(),
            }]
        } else {
            Vec::new()
        };
        self
    }

    /// Ask the model to stream its thinking trace
    pub fn with_thoughts(mut self, include_thoughts: bool) -> Self {
        self.generation_config = Some(GenerationConfig {
            thinking_config: ThinkingConfig { include_thoughts },
        });
        self
    }
}
