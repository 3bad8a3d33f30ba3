pub mod partitioner;
pub mod producer;


pub use partitioner::{KeyHashPartitioner, Partitioner};
pub use producer::KafkaProducer;
