//! Bounded hand-off between a transfer thread and the reader that consumes it.

use std::io::{self, Read};
use std::sync::mpsc::Receiver;

use super::head::ResponseHead;
use super::TransportError;

/// Messages sent by the transfer thread, in order: one `Start`, any number of
/// `Data`, then `Done` or `Failed`.
#[derive(Debug)]
pub(crate) enum Message {
    Start(ResponseHead),
    Data(Vec<u8>),
    Done,
    Failed(TransportError),
}

/// Read side of a transfer. Dropping it drops the receiver, which makes the
/// transfer thread's next send fail and abort the connection.
pub(crate) struct ChannelReader {
    rx: Receiver<Message>,
    chunk: Vec<u8>,
    pos: usize,
    finished: bool,
}

impl ChannelReader {
    pub(crate) fn new(rx: Receiver<Message>) -> Self {
        Self {
            rx,
            chunk: Vec::new(),
            pos: 0,
            finished: false,
        }
    }

    fn aborted(err: TransportError) -> io::Error {
        io::Error::new(io::ErrorKind::ConnectionAborted, err)
    }
}

impl Read for ChannelReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        loop {
            if self.pos < self.chunk.len() {
                let n = buf.len().min(self.chunk.len() - self.pos);
                buf[..n].copy_from_slice(&self.chunk[self.pos..self.pos + n]);
                self.pos += n;
                return Ok(n);
            }
            if self.finished {
                return Ok(0);
            }
            match self.rx.recv() {
                Ok(Message::Data(data)) => {
                    self.chunk = data;
                    self.pos = 0;
                }
                Ok(Message::Start(_)) => {}
                Ok(Message::Done) => self.finished = true,
                Ok(Message::Failed(err)) => {
                    self.finished = true;
                    return Err(Self::aborted(err));
                }
                Err(_) => {
                    self.finished = true;
                    return Err(Self::aborted(TransportError::Interrupted));
                }
            }
        }
    }
}
