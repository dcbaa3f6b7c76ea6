use async_trait::async_trait;
use log::{debug, trace, error};

/// A remote text-generation endpoint.
/// Takes a serialized request body, hands back the raw response body.
#[async_trait]
pub trait InferenceClient: Send + Sync
{   async fn invoke_model(&self, body: Vec<u8>)
      -> Result<Vec<u8>, crate::error::Error>;
}

/// Ask the model once and shape the answer.
///
/// Remote failures (`HttpError`, `ApiError`) are turned into
/// `Reply::Failed`. Anything else, such as a body that is not JSON,
/// is returned as `Err` for the caller to report.
pub async fn invoke<C>(
  config: &crate::config::BridgeConfig
, client: &C
, prompt: &str
) -> Result<crate::request::Reply, crate::error::Error>
where C: InferenceClient + ?Sized
{   debug!("Invoking model: {}", config.model_id);

    let request = crate::request::InvokeRequest::for_prompt(prompt);
    trace!("Request envelope: {:?}", request);
    let body = request.to_body()?;

    let raw = match client.invoke_model(body).await
    {   Ok(raw) => raw
      , Err(e) if e.is_remote() => {
          error!("Model invocation failed: {}", e);
          return Ok(e.into());
        }
      , Err(e) => return Err(e)
    };

    debug!("Raw response: {}", String::from_utf8_lossy(&raw));
    let envelope: serde_json::Value = serde_json::from_slice(&raw)?;
    Ok(crate::request::Reply::from_envelope(envelope))
}
