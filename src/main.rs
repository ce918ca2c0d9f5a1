#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod chat;
mod command;
mod config;
mod error;
mod fetch;
mod format;
mod lounas;
mod parse;
mod registry;

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    chat::{Message, StdoutChat},
    config::Config,
    fetch::HttpFetcher,
    lounas::Lounas,
    registry::Registry,
};

pub use error::{Error, Result};

#[cfg(all(target_env = "musl", target_pointer_width = "64"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    pretty_env_logger::init();
    let config = Config::from_env()?;
    log::debug!("{config:?}");
    let registry = Arc::new(Registry::builtin()?);
    let lounas = Lounas::new(registry, Arc::new(HttpFetcher::new(&config)?));
    if lounas.registry().find(&config.default_location).is_none() {
        log::warn!(
            "default location {:?} is not one of {:?}",
            config.default_location,
            lounas.registry().keys().collect::<Vec<_>>()
        );
    }
    let chat = StdoutChat;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    log::info!("listening for !lounas on stdin");
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                log::info!("interrupted, shutting down");
                break;
            }
        };
        let Some(line) = line else {
            break;
        };
        let message = Message::parse(&line);
        if let Some(cmd) = command::parse(message.text) {
            command::handle(&lounas, &chat, message.from, cmd, &config.default_location).await;
        }
    }
    Ok(())
}
