//! Voice Commands
//!
//! Feed transcripts to the assistant, one at a time or as a stream of lines.

use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use voice_command::parse;

use crate::assistant::ShoppingAssistant;

/// Apply one transcript and describe the result
pub async fn say(assistant: &mut ShoppingAssistant, transcript: &str) -> Result<String, String> {
    let outcome = assistant
        .handle_transcript(transcript)
        .await
        .map_err(|e| e.to_string())?;

    Ok(match outcome.notification {
        Some(message) => message,
        None => format!("({})", outcome.command.action()),
    })
}

/// Apply every non-empty line of `reader` as a transcript.
///
/// Returns the number of transcripts handled.
pub async fn listen<R, W>(assistant: &mut ShoppingAssistant, reader: R, out: &mut W) -> Result<usize, String>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = reader.lines();
    let mut handled = 0;

    while let Some(line) = lines.next_line().await.map_err(|e| e.to_string())? {
        let transcript = line.trim();
        if transcript.is_empty() {
            continue;
        }
        let message = say(assistant, transcript).await?;
        writeln!(out, "> {}\n{}", transcript, message).map_err(|e| e.to_string())?;
        handled += 1;
    }

    Ok(handled)
}

/// Parsed command as pretty JSON, without touching storage
pub fn parse_only(transcript: &str) -> Result<String, String> {
    serde_json::to_string_pretty(&parse(transcript)).map_err(|e| e.to_string())
}
