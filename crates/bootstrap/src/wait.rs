//! Retry loop that waits for the database server to accept connections.

use std::future::Future;
use std::time::Duration;

use sqlx::postgres::PgConnectOptions;
use sqlx::{Connection, PgConnection};
use tokio::time::{sleep, timeout, Instant};
use tracing::{debug, info, warn};

use crate::cancel::CancelToken;
use crate::error::BootstrapError;

/// Tuning for the wait loop.
#[derive(Debug, Clone)]
pub struct WaitConfig {
    /// Total window before giving up.
    pub timeout: Duration,
    /// Delay between attempts. Also bounds each individual attempt, so a
    /// hung endpoint cannot eat the whole window.
    pub poll_interval: Duration,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            poll_interval: Duration::from_secs(1),
        }
    }
}

/// Repeatedly try to open a connection until one succeeds, the window
/// elapses, or the token is cancelled.
///
/// This is a liveness probe only: the successful connection is closed
/// immediately and nothing about it is reused.
pub async fn wait_for_server(
    server: &PgConnectOptions,
    config: &WaitConfig,
    cancel: &CancelToken,
) -> Result<(), BootstrapError> {
    tokio::select! {
        _ = cancel.cancelled() => {
            info!("wait for the database server cancelled");
            Err(BootstrapError::Cancelled)
        }
        result = retry_until_deadline(config, || probe(server, config.poll_interval)) => result,
    }
}

/// The loop proper, generic over the attempt so tests can drive it
/// without a live server.
async fn retry_until_deadline<F, Fut>(
    config: &WaitConfig,
    mut attempt: F,
) -> Result<(), BootstrapError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<(), sqlx::Error>>,
{
    let started = Instant::now();
    let mut attempts: u32 = 0;

    loop {
        attempts += 1;
        match attempt().await {
            Ok(()) => {
                info!(attempts, "database server is reachable");
                return Ok(());
            }
            Err(err) => {
                let elapsed = started.elapsed();
                if elapsed >= config.timeout {
                    warn!(
                        attempts,
                        ?elapsed,
                        "giving up waiting for the database server"
                    );
                    return Err(BootstrapError::ConnectTimeout {
                        attempts,
                        elapsed,
                        source: err,
                    });
                }
                debug!(attempt = attempts, error = %err, "connection attempt failed, retrying");
                sleep(config.poll_interval).await;
            }
        }
    }
}

/// One connection attempt, bounded by `attempt_timeout`.
///
/// Connects directly rather than through a pool: a refusing endpoint
/// fails immediately with the driver's own error (a pool would retry
/// internally until the deadline and report its own timeout instead),
/// and only a hung endpoint runs into the bound. The successful
/// connection is closed right away.
async fn probe(server: &PgConnectOptions, attempt_timeout: Duration) -> Result<(), sqlx::Error> {
    match timeout(attempt_timeout, PgConnection::connect_with(server)).await {
        Ok(Ok(conn)) => {
            let _ = conn.close().await;
            Ok(())
        }
        Ok(Err(err)) => Err(err),
        Err(_) => Err(sqlx::Error::Io(std::io::Error::new(
            std::io::ErrorKind::TimedOut,
            "connection attempt timed out",
        ))),
    }
}
