//! Redacts secrets from `slog` records before they are printed.
//!
//! Run with `cargo run --example simple --features slog`.

use std::fmt;

use logredact::{slog::RedactDrain, Redact, Redactor};
use slog::{o, Drain, Logger, OwnedKVList, Record, KV};

/// Prints each record as `LEVEL message key=value ...`.
struct PrintDrain;

struct LineSerializer(String);

impl slog::Serializer for LineSerializer {
    fn emit_arguments(&mut self, key: slog::Key, val: &fmt::Arguments<'_>) -> slog::Result {
        self.0.push_str(&format!(" {key}={val}"));
        Ok(())
    }

    fn emit_serde(&mut self, key: slog::Key, value: &dyn slog::SerdeValue) -> slog::Result {
        let json = serde_json::to_string(value.as_serde()).map_err(|_| slog::Error::Other)?;
        self.0.push_str(&format!(" {key}={json}"));
        Ok(())
    }
}

impl Drain for PrintDrain {
    type Ok = ();
    type Err = slog::Error;

    fn log(&self, record: &Record<'_>, values: &OwnedKVList) -> slog::Result {
        let mut line = LineSerializer(format!("{} {}", record.level().as_short_str(), record.msg()));
        record.kv().serialize(record, &mut line)?;
        values.serialize(record, &mut line)?;
        println!("{}", line.0);
        Ok(())
    }
}

#[derive(Clone, Debug, Redact, serde::Serialize)]
struct Credentials {
    user: String,
    token: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let redactor = Redactor::new(["supersecret", "anothersecret"], "***")?;

    let credentials = Credentials {
        user: "alice".into(),
        token: "anothersecret".into(),
    };
    println!("{:?}", redactor.redact(&credentials));

    let drain = RedactDrain::new(PrintDrain, redactor).fuse();
    let logger = Logger::root(drain, o!("app" => "simple"));

    slog::info!(logger, "This log entry contains a supersecret token.");
    slog::info!(logger, "login"; "user" => "alice", "password" => "supersecret");
    slog::info!(logger, "credentials"; "credentials" => slog::Serde(credentials));

    Ok(())
}
