use std::io;
use tracing_appender::rolling;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub fn configure_logging(verbosity: u8) {
    let stdout_filter = match verbosity {
        0 => "info,web_request=warn,db_query=warn,sqlx=off",
        1 => "debug,sqlx=warn",
        _ => "trace",
    };

    // Stdout log configuration
    let stdout_log = fmt::layer()
        .with_writer(io::stdout)
        .with_filter(EnvFilter::new(stdout_filter));

    // File log configuration
    let file_appender = rolling::daily("logs", "lexica.log");
    let file_log = fmt::layer()
        .with_writer(file_appender)
        .with_filter(EnvFilter::new("debug,sqlx=info"));

    tracing_subscriber::Registry::default()
        .with(stdout_log)
        .with(file_log)
        .init();
}
