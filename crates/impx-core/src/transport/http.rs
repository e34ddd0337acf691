//! libcurl transport: GET on a worker thread, body streamed through a bounded channel.

use std::cell::{Cell, RefCell};
use std::str;
use std::sync::mpsc::{self, SyncSender};
use std::thread;
use std::time::Duration;

use url::Url;

use crate::config::TransportConfig;
use crate::opener::Opened;

use super::channel::{ChannelReader, Message};
use super::head::ResponseHead;
use super::{Transport, TransportError};

/// Streams `http`/`https` URLs with libcurl.
///
/// `download` returns once the final response's headers are in, so the
/// declared length (if any) is known up front. The body is read lazily.
#[derive(Debug, Clone, Default)]
pub struct CurlTransport {
    config: TransportConfig,
}

impl CurlTransport {
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }
}

impl Transport for CurlTransport {
    fn download(&self, url: &Url) -> Result<Opened, TransportError> {
        let (tx, rx) = mpsc::sync_channel(self.config.buffer_chunks.max(1));
        let link = url.as_str().to_string();
        let config = self.config.clone();
        thread::Builder::new()
            .name("impx-transfer".to_string())
            .spawn(move || run_transfer(&link, &config, tx))
            .map_err(TransportError::Worker)?;

        match rx.recv() {
            Ok(Message::Start(head)) => {
                if !head.is_success() {
                    return Err(TransportError::Http {
                        url: url.to_string(),
                        status: head.status,
                    });
                }
                Ok(Opened::new(
                    Box::new(ChannelReader::new(rx)),
                    head.content_length,
                ))
            }
            Ok(Message::Failed(err)) => Err(err),
            Ok(Message::Data(_)) | Ok(Message::Done) | Err(_) => Err(TransportError::Interrupted),
        }
    }
}

/// Worker entry point: performs the transfer and reports how it ended.
fn run_transfer(url: &str, config: &TransportConfig, tx: SyncSender<Message>) {
    let last = match perform(url, config, &tx) {
        Ok(()) => Message::Done,
        Err(err) => {
            tracing::debug!(url, error = %err, "transfer ended with error");
            Message::Failed(err)
        }
    };
    // The reader may already be gone; nothing left to tell it.
    let _ = tx.send(last);
}

fn perform(url: &str, config: &TransportConfig, tx: &SyncSender<Message>) -> Result<(), TransportError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(config.max_redirections)?;
    easy.connect_timeout(Duration::from_secs(config.connect_timeout_secs))?;
    if let Some(secs) = config.timeout_secs {
        easy.timeout(Duration::from_secs(secs))?;
    }
    easy.low_speed_limit(1024)?;
    easy.low_speed_time(Duration::from_secs(60))?;

    let head = RefCell::new(ResponseHead::default());
    let started = Cell::new(false);
    let start = |head: &ResponseHead| {
        started.set(true);
        tx.send(Message::Start(*head)).is_ok()
    };

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(line) = str::from_utf8(data) {
                head.borrow_mut().push_line(line);
            }
            true
        })?;
        transfer.write_function(|data| {
            if !started.get() && !start(&*head.borrow()) {
                return Ok(0); // reader gone: abort
            }
            match tx.send(Message::Data(data.to_vec())) {
                Ok(()) => Ok(data.len()),
                Err(_) => Ok(0),
            }
        })?;
        transfer.perform()?;
    }

    if !started.get() {
        let mut head = *head.borrow();
        if head.status == 0 {
            head.status = easy.response_code()?;
        }
        start(&head);
    }
    Ok(())
}
