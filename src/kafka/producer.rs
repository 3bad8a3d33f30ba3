use crate::config::KafkaConfig;
use crate::dispatcher::{KeyedMessage, MessageSink};
use crate::kafka::partitioner::Partitioner;
use crate::{Error, Result};
use rdkafka::producer::{FutureProducer, FutureRecord, Producer};
use rdkafka::ClientConfig;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info};

/// Kafka-backed [`MessageSink`] wrapping an rdkafka `FutureProducer`.
///
/// Partition selection is done client-side: the topic's partition count
/// is fetched from broker metadata once per topic and the configured
/// [`Partitioner`] maps the key's decimal byte representation to an
/// explicit partition index, so equal keys always land on the same
/// partition.
pub struct KafkaProducer<P: Partitioner> {
    producer: FutureProducer,
    partitioner: P,
    metadata_timeout: Duration,
    partition_counts: HashMap<String, i32>,
}

impl<P: Partitioner> KafkaProducer<P> {
    /// Builds the producer from the fixed configuration.
    ///
    /// Succeeds even when no broker is reachable; connection failures
    /// surface from [`MessageSink::send`] instead.
    pub fn new(config: &KafkaConfig, partitioner: P) -> Result<Self> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", config.bootstrap_servers())
            .set("acks", &config.acks)
            .set("compression.type", &config.compression)
            .set("linger.ms", config.linger_ms.to_string())
            .create()
            .map_err(Error::Kafka)?;

        Ok(Self {
            producer,
            partitioner,
            metadata_timeout: Duration::from_secs(config.metadata_timeout_secs),
            partition_counts: HashMap::new(),
        })
    }

    fn partition_count(&mut self, topic: &str) -> Result<i32> {
        if let Some(&count) = self.partition_counts.get(topic) {
            return Ok(count);
        }

        let metadata = self
            .producer
            .client()
            .fetch_metadata(Some(topic), self.metadata_timeout)?;

        let count = metadata
            .topics()
            .iter()
            .find(|t| t.name() == topic)
            .map(|t| t.partitions().len() as i32)
            .unwrap_or(0);

        if count <= 0 {
            return Err(Error::Metadata {
                topic: topic.to_string(),
                message: "broker reported no partitions".to_string(),
            });
        }

        info!(topic = %topic, partitions = count, "Fetched topic metadata");
        self.partition_counts.insert(topic.to_string(), count);
        Ok(count)
    }
}

impl<P: Partitioner> MessageSink for KafkaProducer<P> {
    async fn send(&mut self, message: &KeyedMessage) -> Result<()> {
        let partitions = self.partition_count(&message.topic)?;
        let key = message.key.to_string();
        let partition = self.partitioner.choose_partition(key.as_bytes(), partitions);

        debug!(
            topic = %message.topic,
            key = %key,
            partition,
            "Producing record"
        );

        let record = FutureRecord::to(&message.topic)
            .key(&key)
            .payload(&message.value)
            .partition(partition);

        self.producer
            .send(record, rdkafka::util::Timeout::Never)
            .await
            .map_err(|(e, _)| Error::Kafka(e))?;

        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        self.producer.flush(self.metadata_timeout)?;
        debug!("Producer flushed and released");
        Ok(())
    }
}
