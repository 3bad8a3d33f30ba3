//! Key-based partition selection.
//!
//! The driver routes every message through a [`Partitioner`] so messages
//! with the same key land on the same partition. The default
//! [`KeyHashPartitioner`] uses murmur2 with the Kafka seed, matching
//! Apache Kafka's `DefaultPartitioner` for the same key bytes.

use murmur2::{murmur2, KAFKA_SEED};

/// Chooses the target partition for a keyed message.
pub trait Partitioner: Send + Sync {
    /// Returns a partition index in `[0, partition_count)`.
    ///
    /// `partition_count` must be positive; callers verify this against
    /// broker metadata before asking for a partition.
    fn choose_partition(&self, key: &[u8], partition_count: i32) -> i32;
}

/// Murmur2 key-hash partitioner (Kafka-compatible).
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyHashPartitioner;

impl KeyHashPartitioner {
    pub fn new() -> Self {
        Self
    }
}

impl Partitioner for KeyHashPartitioner {
    fn choose_partition(&self, key: &[u8], partition_count: i32) -> i32 {
        debug_assert!(partition_count > 0, "partition_count must be positive");
        let hash = murmur2(key, KAFKA_SEED);
        // Mask the sign bit then take the modulo, matching Kafka's
        // Utils.toPositive(Utils.murmur2(key)) % numPartitions
        ((hash & 0x7fffffff) as i32) % partition_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_is_deterministic() {
        let partitioner = KeyHashPartitioner::new();
        let p1 = partitioner.choose_partition(b"42", 10);
        let p2 = partitioner.choose_partition(b"42", 10);
        let p3 = partitioner.choose_partition(b"42", 10);

        assert_eq!(p1, p2);
        assert_eq!(p2, p3);
    }

    #[test]
    fn test_choice_is_in_range() {
        let partitioner = KeyHashPartitioner::new();
        for key in 0..255 {
            let formatted = key.to_string();
            let partition = partitioner.choose_partition(formatted.as_bytes(), 6);
            assert!(
                (0..6).contains(&partition),
                "partition {} out of range for key {}",
                partition,
                key
            );
        }
    }

    #[test]
    fn test_distinct_keys_spread_across_partitions() {
        let partitioner = KeyHashPartitioner::new();
        let mut seen = std::collections::HashSet::new();
        for i in 0..1000 {
            let key = format!("key-{}", i);
            seen.insert(partitioner.choose_partition(key.as_bytes(), 100));
        }
        assert!(
            seen.len() > 1,
            "expected keys to distribute across partitions"
        );
    }

    #[test]
    fn test_single_partition_topic_always_zero() {
        let partitioner = KeyHashPartitioner::new();
        for i in 0..50 {
            let key = format!("{}", i);
            assert_eq!(partitioner.choose_partition(key.as_bytes(), 1), 0);
        }
    }
}
