//! Amazon Bedrock runtime client.
//!
//! Credentials come from the standard AWS chain (environment, shared
//! profile, instance metadata). Only the region and model id are ours.

use async_trait::async_trait;
use aws_sdk_bedrockruntime::config::Region;
use aws_sdk_bedrockruntime::error::{DisplayErrorContext, SdkError};
use aws_sdk_bedrockruntime::primitives::Blob;
use log::{debug, error};

/// Bedrock client bound to one model
pub struct BedrockClient
{   model_id: String
  , sdk_client: aws_sdk_bedrockruntime::Client
}

impl BedrockClient
{   /// Build a client for the configured region and model
    pub async fn new(config: &crate::config::BridgeConfig) -> Self
    {   debug!("Creating BedrockClient in {}", config.region);
        let sdk_config = aws_config::defaults(
            aws_config::BehaviorVersion::latest()
          )
          .region(Region::new(config.region.clone()))
          .load()
          .await;

        BedrockClient
        {   model_id: config.model_id.clone()
          , sdk_client: aws_sdk_bedrockruntime::Client::new(&sdk_config)
        }
    }
}

#[async_trait]
impl crate::client::InferenceClient for BedrockClient
{   async fn invoke_model(&self, body: Vec<u8>)
      -> Result<Vec<u8>, crate::error::Error>
    {   debug!("InvokeModel {} ({} bytes)", self.model_id, body.len());

        let output = self.sdk_client
          .invoke_model()
          .model_id(&self.model_id)
          .content_type(crate::config::JSON_MEDIA_TYPE)
          .accept(crate::config::JSON_MEDIA_TYPE)
          .body(Blob::new(body))
          .send()
          .await
          .map_err(|e| {
            error!("Bedrock error: {}", DisplayErrorContext(&e));
            classify(e)
          })?;

        Ok(output.body.into_inner())
    }
}

/// Split SDK failures into "no answer" and "answered with a fault"
fn classify<E, R>(e: SdkError<E, R>) -> crate::error::Error
where E: std::error::Error + 'static
    , R: std::fmt::Debug + 'static
{   let message = error_chain(&e);
    match e
    {   SdkError::DispatchFailure(_)
      | SdkError::TimeoutError(_) => {
          crate::error::Error::HttpError(message)
        }
      , _ => crate::error::Error::ApiError(message)
    }
}

/// `Display` of an error and each of its sources, joined with ": ".
/// Adjacent duplicates are collapsed.
fn error_chain(e: &(dyn std::error::Error + 'static)) -> String
{   let mut parts: Vec<String> = vec![e.to_string()];
    let mut source = e.source();
    while let Some(inner) = source
    {   let text = inner.to_string();
        if parts.last() != Some(&text)
        {   parts.push(text);
        }
        source = inner.source();
    }
    parts.join(": ")
}

#[cfg(test)]
mod tests
{   use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Layer
    {   text: &'static str
      , inner: Option<Box<Layer>>
    }

    impl fmt::Display for Layer
    {   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
        {   write!(f, "{}", self.text)
        }
    }

    impl std::error::Error for Layer
    {   fn source(&self) -> Option<&(dyn std::error::Error + 'static)>
        {   self.inner
              .as_deref()
              .map(|l| l as &(dyn std::error::Error + 'static))
        }
    }

    fn layers(texts: &[&'static str]) -> Layer
    {   texts.iter().rev().fold(None, |inner, text| {
          Some(Layer { text: *text, inner: inner.map(Box::new) })
        }).unwrap()
    }

    #[test]
    fn chain_uses_display_only()
    {   let e = layers(&[
          "dispatch failure"
        , "other"
        , "could not communicate with IMDS"
        ]);
        let message = error_chain(&e);
        assert_eq!(
          message,
          "dispatch failure: other: could not communicate with IMDS"
        );
        assert!(!message.contains("Layer"));
    }

    #[test]
    fn chain_collapses_repeated_messages()
    {   let e = layers(&["service error", "service error", "denied"]);
        assert_eq!(error_chain(&e), "service error: denied");
    }

    #[test]
    fn single_error_is_its_own_message()
    {   let e = layers(&["timeout"]);
        assert_eq!(error_chain(&e), "timeout");
    }
}
