/// Table for individual resolved rounds.
#[rustfmt::skip]
pub const ROUNDS: &str = "rounds";
/// Single-row table holding the running tally.
#[rustfmt::skip]
pub const STATS:  &str = "stats";

/// Creates both tables and seeds the tally row. Safe to run on every boot.
#[rustfmt::skip]
pub const CREATES: &str = const_format::concatcp!(
    "CREATE TABLE IF NOT EXISTS ", ROUNDS, " (
        id          UUID PRIMARY KEY,
        player      SMALLINT NOT NULL,
        computer    SMALLINT NOT NULL,
        outcome     SMALLINT NOT NULL,
        created     BIGINT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_rounds_created ON ", ROUNDS, " (created DESC);
    CREATE TABLE IF NOT EXISTS ", STATS, " (
        id          SMALLINT PRIMARY KEY CHECK (id = 1),
        total       BIGINT NOT NULL DEFAULT 0,
        player      BIGINT NOT NULL DEFAULT 0,
        computer    BIGINT NOT NULL DEFAULT 0,
        ties        BIGINT NOT NULL DEFAULT 0
    );
    INSERT INTO ", STATS, " (id) VALUES (1) ON CONFLICT (id) DO NOTHING;"
);

/// Reads the tally row.
#[rustfmt::skip]
pub const LOADS: &str = const_format::concatcp!(
    "SELECT total, player, computer, ties ",
    "FROM   ", STATS, " ",
    "WHERE  id = 1"
);

/// Increments the tally by one game; $1..$3 are 0/1 flags per outcome.
#[rustfmt::skip]
pub const UPDATES: &str = const_format::concatcp!(
    "UPDATE ", STATS, " ",
    "SET    total    = total    + 1, ",
           "player   = player   + $1, ",
           "computer = computer + $2, ",
           "ties     = ties     + $3 ",
    "WHERE  id = 1 ",
    "RETURNING total, player, computer, ties"
);

/// Appends one round.
#[rustfmt::skip]
pub const SAVES: &str = const_format::concatcp!(
    "INSERT INTO ", ROUNDS, " (id, player, computer, outcome, created) ",
    "VALUES                   ($1, $2,     $3,       $4,      $5)"
);

/// Appends one round and increments the tally in a single statement.
/// $1..$5 are the round columns, $6..$8 the outcome flags.
#[rustfmt::skip]
pub const COMMITS: &str = const_format::concatcp!(
    "WITH saved AS (",
        "INSERT INTO ", ROUNDS, " (id, player, computer, outcome, created) ",
        "VALUES                   ($1, $2,     $3,       $4,      $5)",
    ") ",
    "UPDATE ", STATS, " ",
    "SET    total    = total    + 1, ",
           "player   = player   + $6, ",
           "computer = computer + $7, ",
           "ties     = ties     + $8 ",
    "WHERE  id = 1 ",
    "RETURNING total, player, computer, ties"
);

/// Newest rounds first; $1 is the row limit.
#[rustfmt::skip]
pub const RECENTS: &str = const_format::concatcp!(
    "SELECT   id, player, computer, created ",
    "FROM     ", ROUNDS, " ",
    "ORDER BY created DESC, id DESC ",
    "LIMIT    $1"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_touches_both_tables() {
        assert!(COMMITS.contains(ROUNDS));
        assert!(COMMITS.contains(STATS));
        assert!(COMMITS.contains("RETURNING total, player, computer, ties"));
    }

    #[test]
    fn reads_return_the_stored_total() {
        assert!(LOADS.starts_with("SELECT total, player, computer, ties"));
        assert!(UPDATES.ends_with("RETURNING total, player, computer, ties"));
    }

    #[test]
    fn creates_seed_the_tally_row() {
        assert!(CREATES.contains("ON CONFLICT (id) DO NOTHING"));
    }
}
