use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    pub kafka: KafkaConfig,
    pub dispatch: DispatchConfig,
}

/// Producer settings handed to librdkafka at construction time.
///
/// The broker list is joined with commas and passed through verbatim.
/// Entries containing whitespace are NOT rejected; librdkafka treats the
/// whitespace as part of the host name and fails to connect. Accepted
/// behavior, not validated here.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KafkaConfig {
    #[serde(default = "default_brokers")]
    pub brokers: Vec<String>,
    #[serde(default = "default_acks")]
    pub acks: String,
    #[serde(default = "default_compression")]
    pub compression: String,
    #[serde(default = "default_linger_ms")]
    pub linger_ms: u32,
    #[serde(default = "default_metadata_timeout_secs")]
    pub metadata_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DispatchConfig {
    #[serde(default = "default_message_count")]
    pub message_count: usize,
    /// Keys are drawn uniformly from [0, key_space).
    #[serde(default = "default_key_space")]
    pub key_space: i32,
}

impl KafkaConfig {
    pub fn bootstrap_servers(&self) -> String {
        self.brokers.join(",")
    }
}

impl Default for KafkaConfig {
    fn default() -> Self {
        Self {
            brokers: default_brokers(),
            acks: default_acks(),
            compression: default_compression(),
            linger_ms: default_linger_ms(),
            metadata_timeout_secs: default_metadata_timeout_secs(),
        }
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            message_count: default_message_count(),
            key_space: default_key_space(),
        }
    }
}

fn default_brokers() -> Vec<String> {
    vec!["localhost:9092".to_string(), "localhost:9093".to_string()]
}

fn default_acks() -> String {
    // leader acknowledgment only
    "1".to_string()
}

fn default_compression() -> String {
    "none".to_string()
}

fn default_linger_ms() -> u32 {
    0
}

fn default_metadata_timeout_secs() -> u64 {
    5
}

fn default_message_count() -> usize {
    10
}

fn default_key_space() -> i32 {
    255
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_fixed_values() {
        let config = Config::default();
        assert_eq!(
            config.kafka.brokers,
            vec!["localhost:9092".to_string(), "localhost:9093".to_string()]
        );
        assert_eq!(config.kafka.acks, "1");
        assert_eq!(config.dispatch.message_count, 10);
        assert_eq!(config.dispatch.key_space, 255);
    }

    #[test]
    fn test_bootstrap_servers_joins_with_commas() {
        let config = KafkaConfig::default();
        assert_eq!(config.bootstrap_servers(), "localhost:9092,localhost:9093");
    }

    #[test]
    fn test_whitespace_in_brokers_passes_through() {
        // Not validated: the malformed entry reaches librdkafka as-is.
        let config = KafkaConfig {
            brokers: vec!["localhost: 9092".to_string(), "localhost:9093".to_string()],
            ..KafkaConfig::default()
        };
        assert_eq!(config.bootstrap_servers(), "localhost: 9092,localhost:9093");
    }
}
