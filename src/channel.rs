//! Notification channels: the Factory pattern with trait objects.
//!
//! A discriminant string picks one of a closed set of channel behaviors.
//! The factory owns the whole mapping; callers only ever see `dyn Channel`.

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ChannelError {
    /// The caller supplied no discriminant at all.
    #[error("channel kind is required")]
    MissingKind,
    /// The discriminant matched none of the known channels.
    #[error("unknown channel kind: '{kind}'")]
    Unknown { kind: String },
}

/// One way of delivering a message. Implementations are stateless; every
/// `send` is independent. `Debug` is a supertrait so boxed channels can
/// sit inside `Result`s that tests unwrap.
pub trait Channel: fmt::Debug {
    fn kind(&self) -> &'static str;

    /// Emits the message tagged with the channel kind and returns the
    /// emitted line.
    fn send(&self, message: &str) -> String;
}

#[derive(Debug)]
pub struct EmailChannel;

impl Channel for EmailChannel {
    fn kind(&self) -> &'static str {
        "email"
    }

    fn send(&self, message: &str) -> String {
        format!("sending email: {message}")
    }
}

#[derive(Debug)]
pub struct SmsChannel;

impl Channel for SmsChannel {
    fn kind(&self) -> &'static str {
        "sms"
    }

    fn send(&self, message: &str) -> String {
        format!("sending SMS: {message}")
    }
}

#[derive(Debug)]
pub struct PushChannel;

impl Channel for PushChannel {
    fn kind(&self) -> &'static str {
        "push"
    }

    fn send(&self, message: &str) -> String {
        format!("sending push notification: {message}")
    }
}

/// Builds the channel named by `kind`. The match is ASCII-case-insensitive
/// and ignores surrounding whitespace; the set of channels is closed.
pub fn create_channel(kind: Option<&str>) -> Result<Box<dyn Channel>, ChannelError> {
    let kind = kind.ok_or(ChannelError::MissingKind)?;
    match kind.trim().to_ascii_lowercase().as_str() {
        "email" => Ok(Box::new(EmailChannel)),
        "sms" => Ok(Box::new(SmsChannel)),
        "push" => Ok(Box::new(PushChannel)),
        _ => Err(ChannelError::Unknown {
            kind: kind.to_string(),
        }),
    }
}
