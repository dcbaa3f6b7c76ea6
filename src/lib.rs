//! llm-bridge: one prompt in, one JSON line out.
//!
//! The binary reads stdin, asks a Bedrock-hosted model through
//! [`client::invoke`], and prints the [`request::Reply`]:
//!
//! - `"generated text"` when the response has `content[0].text`,
//! - the decoded response itself when it has some other shape,
//! - `{"error": "..."}` for any failure.

pub mod error;
pub mod config;
pub mod providers;
pub mod request;
pub mod client;

pub use client::{invoke, InferenceClient};
pub use config::BridgeConfig;
pub use error::Error;
pub use request::Reply;

/// Full pipeline for one prompt, from unresolved config to printable reply.
/// `connect` is only called once the config is known to be valid.
pub async fn run<C, F, Fut>(
  config: Result<BridgeConfig, Error>
, connect: F
, prompt: &str
) -> Reply
where C: InferenceClient
    , F: FnOnce(BridgeConfig) -> Fut
    , Fut: std::future::Future<Output = C>
{   let config = match config
    {   Ok(config) => config
      , Err(e) => {
          log::error!("{}", e);
          return e.into();
        }
    };
    let client = connect(config.clone()).await;
    match invoke(&config, &client, prompt).await
    {   Ok(reply) => reply
      , Err(e) => {
          log::error!("{}", e);
          e.into()
        }
    }
}

/// Write the reply as one newline-terminated JSON line and flush
pub fn write_reply<W>(out: &mut W, reply: &Reply) -> std::io::Result<()>
where W: std::io::Write
{   writeln!(out, "{}", reply.to_line())?;
    out.flush()
}

#[cfg(test)]
mod tests
{   use super::*;
    use std::io;

    struct ClosedPipe;

    impl io::Write for ClosedPipe
    {   fn write(&mut self, _buf: &[u8]) -> io::Result<usize>
        {   Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()>
        {   Ok(())
        }
    }

    #[test]
    fn reply_is_written_as_one_line()
    {   let mut out: Vec<u8> = vec![];
        write_reply(&mut out, &Reply::Text("Hi there!".into())).unwrap();
        assert_eq!(out, b"\"Hi there!\"\n");
    }

    #[test]
    fn write_failures_are_reported()
    {   let err = write_reply(
          &mut ClosedPipe
        , &Reply::Failed { error: "x".into() }
        ).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
