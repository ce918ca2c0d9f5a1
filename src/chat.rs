use std::io::{self, Write};

/// Where the bot's replies go.
pub trait Chat {
    /// Says `text` to the whole channel, or to `recipient` when one is given.
    fn say(&self, text: &str, recipient: Option<&str>);
}

/// Writes every message to stdout, one per line.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutChat;

impl Chat for StdoutChat {
    fn say(&self, text: &str, recipient: Option<&str>) {
        let mut out = io::stdout().lock();
        let written = match recipient {
            Some(to) => writeln!(out, "{to}: {text}"),
            None => writeln!(out, "{text}"),
        };
        if let Err(e) = written {
            log::error!("Could not write to stdout: {e}");
        }
    }
}

/// One line of chat input, `nick: text` or just `text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message<'a> {
    pub from: Option<&'a str>,
    pub text: &'a str,
}

impl<'a> Message<'a> {
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        match line.split_once(": ") {
            Some((nick, text)) if !nick.is_empty() && !nick.contains(char::is_whitespace) => Self {
                from: Some(nick),
                text: text.trim(),
            },
            _ => Self {
                from: None,
                text: line,
            },
        }
    }
}
