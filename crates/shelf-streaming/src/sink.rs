//! Byte-sink wrapper enforcing shell-first page delivery.

use std::fmt::Display;
use std::time::{Duration, Instant};

use futures::{Sink, SinkExt};
use shelf_core::WorkloadError;
use tracing::debug;

/// Delivery state of a streamed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delivery {
    AwaitingShell,
    Streaming,
    Done,
}

/// A section replacement that went out, with its offset from the start of
/// the response.
#[derive(Debug, Clone)]
pub struct SectionFlush {
    pub name: String,
    pub at: Duration,
}

/// Wraps a byte sink and enforces the delivery order of a streamed page:
/// exactly one shell, then any number of sections, then completion.
///
/// Generic over `Sink<Vec<u8>>` so a handler streams the same way into a
/// response body or a test channel. Flush offsets are recorded as content
/// goes out and summarized when the page completes.
pub struct StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    delivery: Delivery,
    started: Instant,
    shell_at: Option<Duration>,
    flushed: Vec<SectionFlush>,
}

impl<S, E> StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    /// Wrap a byte sink.
    pub fn new(sink: S) -> Self {
        Self {
            inner: sink,
            delivery: Delivery::AwaitingShell,
            started: Instant::now(),
            shell_at: None,
            flushed: Vec::new(),
        }
    }

    /// Send the page shell. Must happen exactly once, before any section.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), WorkloadError> {
        if self.delivery != Delivery::AwaitingShell {
            return Err(WorkloadError::StreamError(
                "shell already sent or page completed".to_string(),
            ));
        }

        self.send_bytes(html.as_bytes().to_vec()).await?;
        let at = self.started.elapsed();
        debug!(at_ms = at.as_millis() as u64, "shell flushed");
        self.shell_at = Some(at);
        self.delivery = Delivery::Streaming;

        Ok(())
    }

    /// Send a named section replacement. The shell must be out already;
    /// sections may go out in any order after it.
    pub async fn send_section(&mut self, name: &str, html: &str) -> Result<(), WorkloadError> {
        self.check_streaming()?;

        self.send_bytes(html.as_bytes().to_vec()).await?;
        let at = self.started.elapsed();
        debug!(section = name, at_ms = at.as_millis() as u64, "section flushed");
        self.flushed.push(SectionFlush {
            name: name.to_string(),
            at,
        });

        Ok(())
    }

    /// Send raw bytes. The shell must be out already.
    pub async fn send_raw(&mut self, bytes: Vec<u8>) -> Result<(), WorkloadError> {
        self.check_streaming()?;
        self.send_bytes(bytes).await
    }

    /// Mark the page complete and log the delivery summary.
    pub fn complete(&mut self) -> Result<(), WorkloadError> {
        self.delivery = Delivery::Done;
        debug!(
            total_ms = self.started.elapsed().as_millis() as u64,
            shell_ms = self.shell_at.map(|d| d.as_millis() as u64),
            sections = self.flushed.len(),
            "page complete"
        );
        Ok(())
    }

    /// Names of the sections flushed so far, in flush order.
    pub fn sections_sent(&self) -> Vec<&str> {
        self.flushed.iter().map(|f| f.name.as_str()).collect()
    }

    /// Flush record of every section sent so far.
    pub fn timeline(&self) -> &[SectionFlush] {
        &self.flushed
    }

    /// Offset of the shell flush, once it has happened.
    pub fn time_to_shell(&self) -> Option<Duration> {
        self.shell_at
    }

    /// Consume the sink and return the inner value.
    pub fn into_inner(self) -> S {
        self.inner
    }

    fn check_streaming(&self) -> Result<(), WorkloadError> {
        match self.delivery {
            Delivery::AwaitingShell => Err(WorkloadError::ShellNotSent),
            Delivery::Done => Err(WorkloadError::StreamError(
                "page already completed".to_string(),
            )),
            Delivery::Streaming => Ok(()),
        }
    }

    async fn send_bytes(&mut self, bytes: Vec<u8>) -> Result<(), WorkloadError> {
        self.inner
            .send(bytes)
            .await
            .map_err(|e| WorkloadError::StreamError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use futures::channel::mpsc;
    use futures::StreamExt;

    use super::*;

    fn test_sink() -> (
        StreamingSink<mpsc::UnboundedSender<Vec<u8>>, mpsc::SendError>,
        mpsc::UnboundedReceiver<Vec<u8>>,
    ) {
        let (tx, rx) = mpsc::unbounded();
        (StreamingSink::new(tx), rx)
    }

    #[tokio::test]
    async fn test_section_before_shell_rejected() {
        let (mut sink, _rx) = test_sink();
        let err = sink.send_section("reviews", "<div/>").await.unwrap_err();
        assert!(matches!(err, WorkloadError::ShellNotSent));
    }

    #[tokio::test]
    async fn test_shell_sent_once() {
        let (mut sink, _rx) = test_sink();
        sink.send_shell("<html>").await.unwrap();
        assert!(sink.send_shell("<html>").await.is_err());
    }

    #[tokio::test]
    async fn test_sections_stream_in_send_order() {
        let (mut sink, mut rx) = test_sink();
        sink.send_shell("<html>").await.unwrap();
        sink.send_section("all-books", "<div>a</div>").await.unwrap();
        sink.send_section("reco-books", "<div>b</div>").await.unwrap();

        assert_eq!(sink.sections_sent(), ["all-books", "reco-books"]);

        drop(sink);
        let chunks: Vec<Vec<u8>> = rx.by_ref().collect().await;
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0], b"<html>".to_vec());
    }

    #[tokio::test]
    async fn test_timeline_offsets_follow_shell() {
        let (mut sink, _rx) = test_sink();
        assert!(sink.time_to_shell().is_none());

        sink.send_shell("<html>").await.unwrap();
        sink.send_section("books", "<div/>").await.unwrap();

        let shell_at = sink.time_to_shell().unwrap();
        let timeline = sink.timeline();
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline[0].name, "books");
        assert!(timeline[0].at >= shell_at);
    }

    #[tokio::test]
    async fn test_completed_sink_rejects_sections() {
        let (mut sink, _rx) = test_sink();
        sink.send_shell("<html>").await.unwrap();
        sink.complete().unwrap();
        assert!(sink.send_section("late", "<div/>").await.is_err());
    }
}
