use anyhow::{Context, Result};
use mdtty_markdown_stream::StreamAdapter;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::decode::Utf8Decoder;
use crate::resize::ResizeWatcher;

const READ_BUFFER_SIZE: usize = 8 * 1024;

/// Moves output from a reader to a writer through the stream adapter.
pub struct Pipeline {
    adapter: StreamAdapter,
    decoder: Utf8Decoder,
}

impl Pipeline {
    pub fn new(adapter: StreamAdapter) -> Self {
        Self { adapter, decoder: Utf8Decoder::default() }
    }

    /// Copies `reader` to `writer` until end of stream, rendering markdown
    /// blocks on the way and tracking terminal resizes.
    pub async fn pump<R, W>(&mut self, mut reader: R, mut writer: W, resize: &mut ResizeWatcher) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buffer = vec![0u8; READ_BUFFER_SIZE];
        let mut total = 0usize;

        loop {
            tokio::select! {
                read = reader.read(&mut buffer) => {
                    let read = read.context("Failed to read program output")?;
                    if read == 0 {
                        break;
                    }
                    total += read;
                    let text = self.decoder.decode(&buffer[..read]);
                    let output = self.adapter.process_data(&text);
                    write(&mut writer, &output).await?;
                }
                Some(cols) = resize.changed() => {
                    self.adapter.update_width(cols);
                }
            }
        }

        let tail = self.decoder.finish();
        if !tail.is_empty() {
            let output = self.adapter.process_data(&tail);
            write(&mut writer, &output).await?;
        }
        let rest = self.adapter.finish();
        write(&mut writer, &rest).await?;

        info!(bytes = total, "Stream ended");
        Ok(())
    }
}

async fn write<W: AsyncWrite + Unpin>(writer: &mut W, text: &str) -> Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    debug!(bytes = text.len(), "Writing output");
    writer
        .write_all(text.as_bytes())
        .await
        .context("Failed to write to the terminal")?;
    writer.flush().await.context("Failed to flush the terminal")?;
    Ok(())
}
