use crate::game::Choice;
use crate::game::Outcome;
use crate::game::Round;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::RwLock;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::time::Duration;

/// Content type of the Prometheus text exposition format.
pub const EXPOSITION: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Upper bounds (seconds) of the request duration histogram buckets.
#[rustfmt::skip]
pub const BUCKETS: [f64; 11] = [
    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

/// (method, route, status) labels of one request series.
pub type Endpoint = (String, String, u16);

/// Cumulative duration histogram for one endpoint.
#[derive(Debug, Default)]
pub struct Histogram {
    buckets: [AtomicU64; BUCKETS.len()],
    count: AtomicU64,
    nanos: AtomicU64,
}

impl Histogram {
    pub fn observe(&self, elapsed: Duration) {
        let seconds = elapsed.as_secs_f64();
        BUCKETS
            .iter()
            .zip(self.buckets.iter())
            .filter(|(bound, _)| seconds <= **bound)
            .for_each(|(_, bucket)| {
                bucket.fetch_add(1, Ordering::Relaxed);
            });
        self.count.fetch_add(1, Ordering::Relaxed);
        self.nanos
            .fetch_add(elapsed.as_nanos() as u64, Ordering::Relaxed);
    }
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }
    /// Observations no slower than `BUCKETS[i]`.
    pub fn bucket(&self, i: usize) -> u64 {
        self.buckets[i].load(Ordering::Relaxed)
    }
    pub fn sum(&self) -> f64 {
        self.nanos.load(Ordering::Relaxed) as f64 / 1e9
    }
}

/// Operational counters, rendered in Prometheus text format.
///
/// These are observability only; the authoritative tally lives in the
/// [`Aggregator`](crate::stats::Aggregator).
#[derive(Debug, Default)]
pub struct Metrics {
    games: [AtomicU64; 3],
    choices: [AtomicU64; 3],
    requests: AtomicU64,
    durations: RwLock<BTreeMap<Endpoint, Arc<Histogram>>>,
}

impl Metrics {
    /// Counts the outcome and both choices of a recorded round.
    pub fn observe(&self, round: &Round) {
        self.games[round.outcome() as usize].fetch_add(1, Ordering::Relaxed);
        self.choices[round.player() as usize].fetch_add(1, Ordering::Relaxed);
        self.choices[round.computer() as usize].fetch_add(1, Ordering::Relaxed);
    }
    /// Counts one served request and its latency.
    pub fn request(&self, method: &str, route: &str, status: u16, elapsed: Duration) {
        self.requests.fetch_add(1, Ordering::Relaxed);
        self.histogram((method.to_string(), route.to_string(), status))
            .observe(elapsed);
    }
    fn histogram(&self, endpoint: Endpoint) -> Arc<Histogram> {
        if let Some(h) = self
            .durations
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&endpoint)
        {
            return h.clone();
        }
        self.durations
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .entry(endpoint)
            .or_default()
            .clone()
    }
    pub fn games(&self, outcome: Outcome) -> u64 {
        self.games[outcome as usize].load(Ordering::Relaxed)
    }
    pub fn choices(&self, choice: Choice) -> u64 {
        self.choices[choice as usize].load(Ordering::Relaxed)
    }
    pub fn requests(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }
    /// Requests observed for one endpoint, zero if never seen.
    pub fn served(&self, method: &str, route: &str, status: u16) -> u64 {
        self.durations
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&(method.to_string(), route.to_string(), status))
            .map_or(0, |h| h.count())
    }
    pub fn render(&self) -> String {
        let mut lines = vec![
            "# HELP rps_games_played_total Total number of games played".to_string(),
            "# TYPE rps_games_played_total counter".to_string(),
        ];
        lines.extend(Outcome::all().map(|o| {
            format!("rps_games_played_total{{result=\"{}\"}} {}", o, self.games(o))
        }));
        lines.push("# HELP rps_choices_total Total choices made".to_string());
        lines.push("# TYPE rps_choices_total counter".to_string());
        lines.extend(Choice::all().map(|c| {
            format!("rps_choices_total{{choice=\"{}\"}} {}", c, self.choices(c))
        }));
        lines.push("# HELP http_requests_total Total HTTP requests served".to_string());
        lines.push("# TYPE http_requests_total counter".to_string());
        lines.push(format!("http_requests_total {}", self.requests()));
        lines.push(
            "# HELP http_request_duration_seconds Duration of HTTP requests in seconds"
                .to_string(),
        );
        lines.push("# TYPE http_request_duration_seconds histogram".to_string());
        for ((method, route, status), h) in self
            .durations
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
        {
            let labels = format!(
                "method=\"{}\",route=\"{}\",status_code=\"{}\"",
                method,
                route.replace('\\', "\\\\").replace('"', "\\\""),
                status
            );
            lines.extend(BUCKETS.iter().enumerate().map(|(i, bound)| {
                format!(
                    "http_request_duration_seconds_bucket{{{},le=\"{}\"}} {}",
                    labels,
                    bound,
                    h.bucket(i)
                )
            }));
            lines.push(format!(
                "http_request_duration_seconds_bucket{{{},le=\"+Inf\"}} {}",
                labels,
                h.count()
            ));
            lines.push(format!(
                "http_request_duration_seconds_sum{{{}}} {}",
                labels,
                h.sum()
            ));
            lines.push(format!(
                "http_request_duration_seconds_count{{{}}} {}",
                labels,
                h.count()
            ));
        }
        lines.join("\n") + "\n"
    }
}
