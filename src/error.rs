use std::fmt;

/// Error type for bridge operations
/// Clone so a failure can be turned into a reply and still be logged
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Required environment value missing or empty
    InvalidConfiguration(String)
  , /// Request never got a response (connect, dispatch, timeout)
    HttpError(String)
  , /// Service answered with a fault (auth, throttling, validation)
    ApiError(String)
  , /// Response body was not JSON
    ParseError(String)
  , /// Prompt could not be read from stdin
    InputError(String)
}

impl Error
{   /// Failures raised by the remote call itself.
    /// These are reported as a reply, never propagated.
    pub fn is_remote(&self) -> bool
    {   matches!(self, Error::HttpError(_) | Error::ApiError(_))
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::InvalidConfiguration(msg) => {
              write!(f, "{}", msg)
            }
          , Error::HttpError(msg) => {
              write!(f, "HTTP error: {}", msg)
            }
          , Error::ApiError(msg) => {
              write!(f, "API error: {}", msg)
            }
          , Error::ParseError(msg) => {
              write!(f, "Parse error: {}", msg)
            }
          , Error::InputError(msg) => {
              write!(f, "Input error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error
{   fn from(e: serde_json::Error) -> Self
    {   Error::ParseError(e.to_string())
    }
}

impl From<std::io::Error> for Error
{   fn from(e: std::io::Error) -> Self
    {   Error::InputError(e.to_string())
    }
}
