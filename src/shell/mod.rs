//! Interactive shell
//!
//! Line-oriented front end over the session, catalogue and ticket APIs.

pub mod commands;
pub mod handlers;
pub mod parser;

use log::{debug, info};
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::session::SessionManager;
use crate::storage::KeyValueStore;

pub use commands::{Command, CommandResult, CommandStatus, ThemeAction};
pub use handlers::handle_command;
pub use parser::parse_command;

const MAX_COMMAND_LENGTH: usize = 512;
const PROMPT: &[u8] = b"laritmo> ";

/// State the shell commands operate on
pub struct Shell<S: KeyValueStore> {
    session: SessionManager<S>,
    downloads_dir: PathBuf,
    prefer_dark: bool,
}

impl<S: KeyValueStore> Shell<S> {
    pub fn new(session: SessionManager<S>, downloads_dir: impl Into<PathBuf>, prefer_dark: bool) -> Self {
        Self {
            session,
            downloads_dir: downloads_dir.into(),
            prefer_dark,
        }
    }

    pub fn session(&self) -> &SessionManager<S> {
        &self.session
    }

    /// Parse and run one input line
    pub async fn execute(&mut self, line: &str) -> CommandResult {
        let command = parse_command(line);
        debug!("Running command: {:?}", command);
        handle_command(self, command).await
    }
}

/// Read commands from `reader` until `quit` or end of input, writing each
/// response to `writer`.
pub async fn run<S, R, W>(shell: &mut Shell<S>, reader: R, mut writer: W) -> std::io::Result<()>
where
    S: KeyValueStore,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    loop {
        writer.write_all(PROMPT).await?;
        writer.flush().await?;

        let Some(line) = lines.next_line().await? else {
            info!("End of input");
            break;
        };

        if line.len() > MAX_COMMAND_LENGTH {
            writer.write_all(b"error: command too long\n").await?;
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        let result = shell.execute(&line).await;
        if let Some(msg) = &result.message {
            writer.write_all(msg.as_bytes()).await?;
            writer.write_all(b"\n").await?;
        }
        if result.status == CommandStatus::Quit {
            info!("Shell closed by user");
            break;
        }
    }

    writer.flush().await
}
