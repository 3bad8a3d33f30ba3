use clap::Parser;
use keyed_dispatch::kafka::{KafkaProducer, KeyHashPartitioner};
use keyed_dispatch::{Config, Dispatcher, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[derive(Parser, Debug)]
#[command(name = "keyed-dispatch")]
#[command(about = "Sends keyed messages to a Kafka topic", long_about = None)]
struct Args {
    #[arg(value_name = "TOPIC", help = "Topic to send messages to")]
    topic: String,

    #[arg(short, long, help = "Enable JSON output for logs")]
    json_logs: bool,

    #[arg(short, long, help = "Verbose logging")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.json_logs, args.verbose);

    info!("Starting keyed-dispatch");

    let config = Config::default();
    info!(
        kafka_brokers = ?config.kafka.brokers,
        kafka_acks = %config.kafka.acks,
        message_count = config.dispatch.message_count,
        topic = %args.topic,
        "Configuration summary"
    );

    let producer = match KafkaProducer::new(&config.kafka, KeyHashPartitioner::new()) {
        Ok(producer) => producer,
        Err(e) => {
            error!("Failed to create Kafka producer: {}", e);
            return Err(e);
        }
    };

    let mut dispatcher = Dispatcher::new(producer, config.dispatch);
    if let Err(e) = dispatcher.run(&args.topic).await {
        error!("Dispatch failed: {}", e);
        return Err(e);
    }

    Ok(())
}

fn init_logging(json: bool, verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("keyed_dispatch=debug,info")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("keyed_dispatch=info,warn"))
    };

    let fmt_layer = if json {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(false)
            .with_span_list(false)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
