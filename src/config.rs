//! Configuration for the bridge, resolved once at start-up

use log::debug;

/// Environment variable selecting the service region
pub const REGION_VAR: &str = "AWS_REGION";
/// Environment variable naming the model to invoke
pub const MODEL_VAR: &str = "MODEL_ID";

/// Protocol version tag sent with every request
pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";
/// Upper bound on generated tokens
pub const MAX_TOKENS: u32 = 1024;
/// Sampling temperature
pub const TEMPERATURE: f64 = 0.2;
/// Media type for both the request body and the accepted response
pub const JSON_MEDIA_TYPE: &str = "application/json";
/// When set to a non-empty value, no `.env` file is read
pub const SKIP_DOTENV_VAR: &str = "LLM_BRIDGE_SKIP_DOTENV";

const MISSING_CONFIG: &str
  = "AWS_REGION and MODEL_ID must be set in environment variables";

/// Bridge configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig
{   /// Region the inference endpoint lives in
    pub region: String
  , /// Model identifier passed to the endpoint
    pub model_id: String
}

impl BridgeConfig
{   /// Resolve configuration from the process environment.
    /// The nearest `.env` file (working directory or any parent) is loaded
    /// first unless `LLM_BRIDGE_SKIP_DOTENV` is set; variables already set
    /// in the process take precedence over it.
    pub fn from_env() -> Result<Self, crate::error::Error>
    {   let lookup = |name: &str| std::env::var(name).ok();
        if skip_dotenv(lookup)
        {   debug!("Skipping .env ({} is set)", SKIP_DOTENV_VAR);
        } else
        {   match dotenv::dotenv()
            {   Ok(path) => debug!("Loaded {}", path.display())
              , Err(e) => debug!("No .env loaded: {}", e)
            }
        }
        Self::from_lookup(lookup)
    }

    /// Resolve configuration through an arbitrary lookup
    pub fn from_lookup<F>(lookup: F)
      -> Result<Self, crate::error::Error>
    where F: Fn(&str) -> Option<String>
    {   let non_empty = |name: &str| {
          lookup(name).filter(|v| !v.is_empty())
        };

        match (non_empty(REGION_VAR), non_empty(MODEL_VAR))
        {   (Some(region), Some(model_id)) => {
              debug!(
                "Config resolved: region={} model={}",
                region, model_id
              );
              Ok(BridgeConfig { region, model_id })
            }
          , _ => Err(crate::error::Error::InvalidConfiguration(
              MISSING_CONFIG.to_string()
            ))
        }
    }
}

fn skip_dotenv<F>(lookup: F) -> bool
where F: Fn(&str) -> Option<String>
{   lookup(SKIP_DOTENV_VAR).is_some_and(|v| !v.is_empty())
}
