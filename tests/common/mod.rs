#![allow(dead_code)]

use std::io;
use std::sync::{
    Arc, Once,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;

use async_trait::async_trait;
use saas_health::services::connection::{ConnectionLease, ConnectionProvider, ProviderError};
use tokio::net::TcpListener;

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("saas_health=debug")
            .with_test_writer()
            .try_init();
    });
}

/// Canned result a [`MockProvider`] produces on every acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Connect,
    TimeOut,
    Refuse,
    BadPassword,
}

/// A connection provider that counts acquisitions and releases.
///
/// Every successful acquisition hands out a [`MockLease`] that bumps the
/// release counter when dropped.
#[derive(Debug)]
pub struct MockProvider {
    outcome: Outcome,
    delay: Option<Duration>,
    attempts: AtomicUsize,
    acquired: AtomicUsize,
    released: Arc<AtomicUsize>,
}

pub struct MockLease {
    released: Arc<AtomicUsize>,
}

impl ConnectionLease for MockLease {}

impl Drop for MockLease {
    fn drop(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

impl MockProvider {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            delay: None,
            attempts: AtomicUsize::new(0),
            acquired: AtomicUsize::new(0),
            released: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Waits this long inside every acquisition before producing the outcome
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of times `acquire` was called
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    /// Number of leases handed out
    pub fn acquired(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }

    /// Number of leases dropped
    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    /// Leases handed out but not yet dropped
    pub fn outstanding(&self) -> usize {
        self.acquired() - self.released()
    }
}

#[async_trait]
impl ConnectionProvider for MockProvider {
    async fn acquire(&self) -> Result<Box<dyn ConnectionLease>, ProviderError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match self.outcome {
            Outcome::Connect => {
                self.acquired.fetch_add(1, Ordering::SeqCst);
                Ok(Box::new(MockLease {
                    released: Arc::clone(&self.released),
                }))
            }
            Outcome::TimeOut => Err(ProviderError::Db(sqlx::Error::PoolTimedOut)),
            Outcome::Refuse => Err(ProviderError::Db(sqlx::Error::Io(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "connection refused by 10.0.0.7:5432",
            )))),
            Outcome::BadPassword => Err(ProviderError::Unavailable(
                "password authentication failed for user \"app\"".to_string(),
            )),
        }
    }
}

/// Spawns the application over the given provider and returns its address.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app(provider: Arc<dyn ConnectionProvider>) -> String {
    init_tracing_once();

    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        let app = saas_health::app_with_provider(provider);
        axum::serve(listener, app).await.unwrap();
    });

    let address = format!("http://127.0.0.1:{port}");

    // Wait for server to be ready
    let client = reqwest::Client::new();
    for _ in 0..10 {
        if client.get(format!("{address}/hello")).send().await.is_ok() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    address
}
