//! The Await-Input loop
//!
//! Reads one line per cycle, hands it to the session, prints the reply.
//! Loop-local errors are printed and the prompt reappears; only EOF or an
//! exit command ends the loop.

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use mcpchat_core::ChatSession;

const PROMPT: &str = ">>> ";

/// Read one line of user input, returning `None` on EOF
async fn read_user_input() -> Result<Option<String>> {
    let mut output = tokio::io::stdout();
    let input = tokio::io::stdin();
    let mut reader = BufReader::new(input);
    let mut buffer = String::new();

    output.write_all(PROMPT.as_bytes()).await?;
    output.flush().await?;

    let read = reader.read_line(&mut buffer).await?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(buffer.trim_end().to_string()))
}

/// Run the chat loop until EOF or an exit command
pub async fn run(session: &mut ChatSession) -> Result<()> {
    loop {
        let Some(line) = read_user_input().await? else {
            println!();
            return Ok(());
        };

        if line.is_empty() {
            continue;
        }
        if matches!(line.as_str(), "exit" | "quit") {
            return Ok(());
        }

        match session.send(&line).await {
            Ok(Some(reply)) => println!("{}", reply),
            Ok(None) => {} // empty model turn, nothing to show
            Err(e) => {
                // The session survives loop-local errors; the user can re-ask.
                eprintln!("error: {}", e);
            }
        }
    }
}
