//! Stream URL resolution bookkeeping.
//!
//! Resolutions run on a background task with no cancellation; instead every
//! request carries a sequence number and completions for anything but the
//! newest sequence are dropped on arrival, so a slow response for a track
//! the user already skipped past can never clobber the newer source.

use std::future::Future;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

/// Request sent to the resolver task.
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    pub seq: u64,
    pub song_id: u64,
}

/// Completion coming back from the resolver task. `result` carries the
/// playable URL or a display-ready error.
#[derive(Debug, Clone)]
pub struct ResolveReply {
    pub seq: u64,
    pub song_id: u64,
    pub result: Result<String, String>,
}

/// Monotonic sequence gate for in-flight resolutions.
#[derive(Debug, Default)]
pub struct ResolveTicket {
    seq: u64,
}

impl ResolveTicket {
    /// Start a new resolution, superseding all earlier ones.
    pub fn issue(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    /// Whether a completion with this sequence is still the newest one.
    /// Before the first issue no sequence exists, so nothing is current.
    pub fn is_current(&self, seq: u64) -> bool {
        self.seq != 0 && seq == self.seq
    }
}

/// Resolver worker loop. Each request resolves on its own task, so a hung
/// fetch never holds up a later one; the consumer's sequence filter handles
/// whatever order the completions land in.
pub async fn run_resolver<F, Fut>(
    mut req_rx: UnboundedReceiver<ResolveRequest>,
    res_tx: UnboundedSender<ResolveReply>,
    fetch: F,
) where
    F: Fn(u64) -> Fut + Clone + Send + 'static,
    Fut: Future<Output = Result<String, String>> + Send + 'static,
{
    while let Some(req) = req_rx.recv().await {
        let tx = res_tx.clone();
        let fetch = fetch.clone();
        tokio::spawn(async move {
            let result = fetch(req.song_id).await;
            let _ = tx.send(ResolveReply {
                seq: req.seq,
                song_id: req.song_id,
                result,
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::mpsc;

    #[test]
    fn only_the_newest_sequence_is_current() {
        let mut ticket = ResolveTicket::default();
        let a = ticket.issue();
        let b = ticket.issue();
        assert!(!ticket.is_current(a));
        assert!(ticket.is_current(b));
    }

    #[test]
    fn out_of_order_completion_is_rejected() {
        // resolution(A) finishing after resolution(B) must not win.
        let mut ticket = ResolveTicket::default();
        let a = ticket.issue();
        let b = ticket.issue();

        let mut stream_url: Option<&str> = None;
        for (seq, url) in [(b, "https://cdn/b.mp3"), (a, "https://cdn/a.mp3")] {
            if ticket.is_current(seq) {
                stream_url = Some(url);
            }
        }
        assert_eq!(stream_url, Some("https://cdn/b.mp3"));
    }

    #[test]
    fn nothing_is_current_before_the_first_issue() {
        let ticket = ResolveTicket::default();
        assert!(!ticket.is_current(0));
        assert!(!ticket.is_current(1));
    }

    #[tokio::test]
    async fn slow_resolution_does_not_block_a_later_one() {
        let (req_tx, req_rx) = mpsc::unbounded_channel();
        let (res_tx, mut res_rx) = mpsc::unbounded_channel();

        tokio::spawn(run_resolver(req_rx, res_tx, |song_id: u64| async move {
            // Song 1 hangs long enough that a serialized worker would
            // deliver it first.
            if song_id == 1 {
                tokio::time::sleep(Duration::from_millis(150)).await;
            }
            Ok(format!("https://cdn/{song_id}.mp3"))
        }));

        let mut ticket = ResolveTicket::default();
        let slow = ResolveRequest {
            seq: ticket.issue(),
            song_id: 1,
        };
        let fast = ResolveRequest {
            seq: ticket.issue(),
            song_id: 2,
        };
        req_tx.send(slow).unwrap();
        req_tx.send(fast).unwrap();

        let first = res_rx.recv().await.unwrap();
        assert_eq!(first.song_id, 2);
        assert!(ticket.is_current(first.seq));

        let second = res_rx.recv().await.unwrap();
        assert_eq!(second.song_id, 1);
        assert!(!ticket.is_current(second.seq));
    }
}
