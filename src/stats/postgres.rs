use super::*;
use crate::Error;
use crate::game::Choice;
use crate::game::Outcome;
use crate::game::Round;
use std::sync::Arc;
use tokio_postgres::Client;
use tokio_postgres::Row;

/// Durable store backed by a `rounds` log and a single-row `stats` table.
///
/// Every write is one SQL statement, so the tally row is never observed
/// half-updated and a failed commit leaves neither table changed.
pub struct Postgres(Arc<Client>);

impl From<Arc<Client>> for Postgres {
    fn from(client: Arc<Client>) -> Self {
        Self(client)
    }
}

impl Postgres {
    /// Connects to `url`, creates missing tables, and seeds the tally row.
    pub async fn connect(url: &str) -> Result<Self, Error> {
        log::info!("connecting to database");
        let (client, connection) = tokio_postgres::connect(url, tokio_postgres::NoTls).await?;
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                log::error!("database connection closed: {}", e);
            }
        });
        client
            .execute("SET client_min_messages TO WARNING", &[])
            .await?;
        let store = Self(Arc::new(client));
        store.migrate().await?;
        Ok(store)
    }
    pub async fn migrate(&self) -> Result<(), Error> {
        self.0.batch_execute(CREATES).await.map_err(Error::from)
    }
    fn flags(outcome: Outcome) -> [i64; 3] {
        Outcome::all().map(|o| (o == outcome) as i64)
    }
    /// Rejects negative counters and a stored total that disagrees with
    /// the per-outcome counters.
    fn tally(total: i64, player: i64, computer: i64, ties: i64) -> Result<Stats, Error> {
        let count = |n: i64| {
            u64::try_from(n).map_err(|_| Error::StoreUnavailable(format!("negative counter {}", n)))
        };
        let stats = Stats::new(count(player)?, count(computer)?, count(ties)?);
        match stats.total() == count(total)? {
            true => Ok(stats),
            false => Err(Error::StoreUnavailable(format!(
                "stored total {} does not match counters {}",
                total, stats
            ))),
        }
    }
    fn choice(n: i16) -> Result<Choice, Error> {
        match n {
            0 => Ok(Choice::Rock),
            1 => Ok(Choice::Paper),
            2 => Ok(Choice::Scissors),
            _ => Err(Error::StoreUnavailable(format!("corrupt choice {}", n))),
        }
    }
    fn stats(row: &Row) -> Result<Stats, Error> {
        Self::tally(row.get(0), row.get(1), row.get(2), row.get(3))
    }
    fn round(row: &Row) -> Result<Round, Error> {
        Ok(Round::hydrate(
            row.get::<_, uuid::Uuid>(0),
            Self::choice(row.get(1))?,
            Self::choice(row.get(2))?,
            row.get::<_, i64>(3) as u64,
        ))
    }
}

#[async_trait::async_trait]
impl Store for Postgres {
    async fn save(&self, round: &Round) -> Result<(), Error> {
        self.0
            .execute(
                SAVES,
                &[
                    &round.id(),
                    &(u8::from(round.player()) as i16),
                    &(u8::from(round.computer()) as i16),
                    &(round.outcome() as i16),
                    &(round.timestamp() as i64),
                ],
            )
            .await
            .map(|_| ())
            .map_err(Error::from)
    }
    async fn load(&self) -> Result<Stats, Error> {
        self.0
            .query_one(LOADS, &[])
            .await
            .map_err(Error::from)
            .and_then(|row| Self::stats(&row))
    }
    async fn update(&self, outcome: Outcome) -> Result<Stats, Error> {
        let [p, c, t] = Self::flags(outcome);
        self.0
            .query_one(UPDATES, &[&p, &c, &t])
            .await
            .map_err(Error::from)
            .and_then(|row| Self::stats(&row))
    }
    async fn commit(&self, round: &Round) -> Result<Stats, Error> {
        let [p, c, t] = Self::flags(round.outcome());
        self.0
            .query_one(
                COMMITS,
                &[
                    &round.id(),
                    &(u8::from(round.player()) as i16),
                    &(u8::from(round.computer()) as i16),
                    &(round.outcome() as i16),
                    &(round.timestamp() as i64),
                    &p,
                    &c,
                    &t,
                ],
            )
            .await
            .map_err(Error::from)
            .and_then(|row| Self::stats(&row))
    }
    async fn recent(&self, limit: usize) -> Result<Vec<Round>, Error> {
        self.0
            .query(RECENTS, &[&(limit as i64)])
            .await
            .map_err(Error::from)
            .and_then(|rows| rows.iter().map(Self::round).collect())
    }
    fn durable(&self) -> bool {
        true
    }
}
