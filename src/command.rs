//! The `!lounas [location]` chat command.
use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

use crate::{chat::Chat, error::Error, fetch::Fetch, lounas::Lounas};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command<'a> {
    /// `None` when the user gave no location.
    pub location: Option<&'a str>,
}

/// Recognizes the command, ignoring anything else said on the channel.
pub fn parse(text: &str) -> Option<Command<'_>> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        RegexBuilder::new(r"^!lounas(?:\s+(\S+))?\s*$")
            .case_insensitive(true)
            .build()
            .expect("regex should be valid")
    });
    let captures = re.captures(text.trim())?;
    Some(Command {
        location: captures.get(1).map(|m| m.as_str()),
    })
}

/// Runs the command and reports the outcome on `chat`. Failures are answered
/// to `from` only; menus go to the whole channel, one line per restaurant.
pub async fn handle<F: Fetch, C: Chat>(
    lounas: &Lounas<F>,
    chat: &C,
    from: Option<&str>,
    command: Command<'_>,
    default_location: &str,
) {
    let location = command.location.unwrap_or(default_location);
    match lounas.run(location).await {
        Ok(menus) => {
            for line in menus.lines() {
                chat.say(&line, None);
            }
        }
        Err(Error::UnknownLocation(location)) => {
            log::info!("Rejected unknown location {location:?}");
            chat.say(&format!("En tunne paikkaa \"{location}\"."), from);
        }
        Err(e) => {
            log::error!("Lunch command failed: {e}");
            chat.say(&format!("Oh noes, error - {e}"), from);
        }
    }
}
