//! Request and response envelopes exchanged with the inference endpoint

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: String
  , pub content: String
}

/// Request body sent to the endpoint.
/// Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvokeRequest
{   pub anthropic_version: String
  , pub messages: Vec<ChatMessage>
  , pub max_tokens: u32
  , pub temperature: f64
}

impl InvokeRequest
{   /// Build the envelope for one prompt. The prompt is used verbatim.
    pub fn for_prompt(prompt: &str) -> Self
    {   InvokeRequest
        {   anthropic_version: crate::config::ANTHROPIC_VERSION
              .to_string()
          , messages: vec![
              ChatMessage
              {   role: "user".to_string()
                , content: prompt.to_string()
              }
            ]
          , max_tokens: crate::config::MAX_TOKENS
          , temperature: crate::config::TEMPERATURE
        }
    }

    /// Serialized body bytes
    pub fn to_body(&self) -> Result<Vec<u8>, crate::error::Error>
    {   Ok(serde_json::to_vec(self)?)
    }
}

/// The one value printed per invocation.
///
/// `Raw` carries the decoded response unchanged when it does not have the
/// `content[0].text` shape; callers must accept a non-string reply.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reply
{   Text(String)
  , Failed { error: String }
  , Raw(Value)
}

impl Reply
{   /// Pull the generated text out of a decoded response envelope
    pub fn from_envelope(envelope: Value) -> Self
    {   match first_text(&envelope)
        {   Some(text) => Reply::Text(text.to_string())
          , None => Reply::Raw(envelope)
        }
    }

    /// Compact JSON, without trailing newline
    pub fn to_line(&self) -> String
    {   serde_json::to_string(self)
          .unwrap_or_else(|_| {
            r#"{"error":"reply could not be serialized"}"#.to_string()
          })
    }
}

impl From<crate::error::Error> for Reply
{   fn from(e: crate::error::Error) -> Self
    {   Reply::Failed { error: e.to_string() }
    }
}

fn first_text(envelope: &Value) -> Option<&str>
{   envelope.get("content")?
      .as_array()?
      .first()?
      .get("text")?
      .as_str()
}
