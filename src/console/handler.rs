use log::{error, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use super::{Trigger, parse_command};
use crate::controller::CallSessionController;

const MAX_LINE_LENGTH: usize = 256;

/// Binds console lines to the controller's triggers.
///
/// - Reads one command per line and writes one reply line per command.
/// - A failed start is reported and the loop keeps going.
/// - Stops on `quit` or end of input.
pub async fn run_console<R, W>(
    controller: &CallSessionController,
    mut reader: R,
    mut writer: W,
) -> Result<(), std::io::Error>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            info!("Console input closed");
            break;
        }

        if buf.len() > MAX_LINE_LENGTH {
            warn!("Ignoring console line of {} bytes", buf.len());
            writer.write_all(b"line too long\n").await?;
            continue;
        }

        // Invalid UTF-8 degrades to an unknown command instead of ending the loop
        let line = String::from_utf8_lossy(&buf);
        let trigger = parse_command(&line);
        let reply = match trigger {
            Trigger::Start => match controller.start().await {
                Ok(()) => "calling".to_string(),
                Err(e) => {
                    error!("Call could not be started: {}", e);
                    format!("call failed: {}", e)
                }
            },
            Trigger::End => {
                controller.end().await;
                "hung up".to_string()
            }
            Trigger::Reset => {
                if controller.reset().await {
                    "session handle dropped".to_string()
                } else {
                    "nothing to reset".to_string()
                }
            }
            Trigger::Status => format!("state: {}", controller.state().await),
            Trigger::Quit => {
                writer.write_all(b"bye\n").await?;
                writer.flush().await?;
                info!("Console requested to quit");
                break;
            }
            Trigger::Empty => continue,
            Trigger::Unknown(text) => {
                format!("unknown command: {} (try call, hangup, reset, status, quit)", text)
            }
        };

        writer.write_all(reply.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    Ok(())
}
