use crate::config::DispatchConfig;
use crate::Result;
use rand::Rng;
use tracing::{debug, info};

/// A keyed message bound for a topic. Created per send, not retained
/// after dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedMessage {
    pub topic: String,
    pub key: i32,
    pub value: String,
}

impl KeyedMessage {
    pub fn new(topic: &str, key: i32) -> Self {
        Self {
            topic: topic.to_string(),
            key,
            value: format!("This message is for key - {}", key),
        }
    }
}

/// Destination for keyed messages.
///
/// [`crate::kafka::KafkaProducer`] is the real implementation; tests use
/// an in-memory sink that collects (topic, key, value) tuples.
#[allow(async_fn_in_trait)]
pub trait MessageSink {
    async fn send(&mut self, message: &KeyedMessage) -> Result<()>;

    /// Flushes and releases the sink. Called exactly once, after the
    /// last send.
    async fn close(&mut self) -> Result<()>;
}

/// The producer driver: generates keyed messages and sends them
/// sequentially through a [`MessageSink`].
pub struct Dispatcher<S: MessageSink> {
    sink: S,
    config: DispatchConfig,
}

impl<S: MessageSink> Dispatcher<S> {
    pub fn new(sink: S, config: DispatchConfig) -> Self {
        Self { sink, config }
    }

    /// Sends `message_count` messages to `topic`, each keyed with a
    /// uniformly random integer in `[0, key_space)`, then closes the
    /// sink.
    ///
    /// Sends happen one at a time; the first error ends the run and
    /// propagates to the caller. No retry. A failed send skips the
    /// explicit close; the underlying producer resources are still
    /// released when the sink is dropped.
    pub async fn run(&mut self, topic: &str) -> Result<usize> {
        info!(
            topic = %topic,
            count = self.config.message_count,
            "Starting keyed dispatch"
        );

        for _ in 0..self.config.message_count {
            let key = rand::thread_rng().gen_range(0..self.config.key_space);
            let message = KeyedMessage::new(topic, key);
            debug!(key = message.key, "Sending message");
            self.sink.send(&message).await?;
        }

        self.sink.close().await?;
        info!(sent = self.config.message_count, "Dispatch complete");

        Ok(self.config.message_count)
    }

    /// Consumes the dispatcher and returns the sink.
    pub fn into_inner(self) -> S {
        self.sink
    }
}
