use std::io::Read;
use std::time::Duration;

use clap::Args;

use crate::error::Result;
use crate::store::{unix_now, Record};

use super::format::parse_ttl;
use super::Session;

#[derive(Args, Debug, Clone)]
pub struct SetArgs {
    /// KEY[@DB]
    pub key: String,

    /// Value to store; read from stdin when omitted
    pub value: Option<String>,

    /// Mark the stored value as a secret
    #[arg(long)]
    pub secret: bool,

    /// Expire the value after this long (e.g. 90s, 15m, 2h, 1d, 1h30m)
    #[arg(long, value_parser = parse_ttl_arg)]
    pub ttl: Option<Duration>,
}

fn parse_ttl_arg(raw: &str) -> std::result::Result<Duration, String> {
    parse_ttl(raw).map_err(|e| e.to_string())
}

pub(super) fn run(session: &mut Session<'_>, args: &SetArgs) -> Result<()> {
    let value = match &args.value {
        Some(value) => value.as_bytes().to_vec(),
        None => {
            let mut buf = Vec::new();
            session.input.read_to_end(&mut buf)?;
            buf
        }
    };

    let mut record = Record::new(value).secret(args.secret);
    if let Some(ttl) = args.ttl {
        record = record.with_ttl(ttl, unix_now());
    }

    session.store.write(&args.key, |db, key| db.put(key, record))?;
    tracing::debug!(target_key = %args.key, secret = args.secret, "stored value");
    Ok(())
}
