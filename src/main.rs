use std::io::Read;
use log::{debug, error};

use llm_bridge::{BridgeConfig, Error, Reply};
use llm_bridge::providers::BedrockClient;

fn read_prompt() -> Result<String, Error>
{   let mut prompt = String::new();
    std::io::stdin().read_to_string(&mut prompt)?;
    Ok(prompt)
}

async fn answer() -> Reply
{   // Config first: a bad environment must not reach the network
    let config = BridgeConfig::from_env();
    let prompt = match read_prompt()
    {   Ok(prompt) => prompt
      , Err(e) => return e.into()
    };
    debug!("Read prompt ({} bytes)", prompt.len());

    llm_bridge::run(
      config
    , |config| async move { BedrockClient::new(&config).await }
    , &prompt
    ).await
}

fn main()
{   env_logger::Builder::from_env(
      env_logger::Env::default().default_filter_or("warn")
    ).init();

    let reply = match tokio::runtime::Builder::new_current_thread()
      .enable_all()
      .build()
    {   Ok(runtime) => runtime.block_on(answer())
      , Err(e) => Reply::Failed { error: e.to_string() }
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = llm_bridge::write_reply(&mut stdout, &reply)
    {   error!("Could not write reply to stdout: {}", e);
        std::process::exit(1);
    }
}
