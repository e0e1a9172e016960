use super::*;
use crate::Error;
use crate::game::Outcome;
use crate::game::Round;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

/// Memory store whose backend can be switched off from outside.
#[derive(Default)]
pub struct Flaky {
    down: Arc<AtomicBool>,
    inner: Memory,
}

/// Remote control for a [`Flaky`] store that has been moved elsewhere.
#[derive(Clone)]
pub struct Outage(Arc<AtomicBool>);

impl Outage {
    pub fn start(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
    pub fn end(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl Flaky {
    pub fn outage(&self) -> Outage {
        Outage(self.down.clone())
    }
    fn check(&self) -> Result<(), Error> {
        match self.down.load(Ordering::SeqCst) {
            true => Err(Error::StoreUnavailable("connection refused".into())),
            false => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl Store for Flaky {
    async fn save(&self, round: &Round) -> Result<(), Error> {
        self.check()?;
        self.inner.save(round).await
    }
    async fn load(&self) -> Result<Stats, Error> {
        self.check()?;
        self.inner.load().await
    }
    async fn update(&self, outcome: Outcome) -> Result<Stats, Error> {
        self.check()?;
        self.inner.update(outcome).await
    }
    async fn recent(&self, limit: usize) -> Result<Vec<Round>, Error> {
        self.check()?;
        self.inner.recent(limit).await
    }
    fn durable(&self) -> bool {
        true
    }
}
