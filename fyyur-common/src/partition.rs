//! Past/upcoming show partitioning
//!
//! A show is upcoming when it starts strictly after the evaluation instant and
//! past otherwise, so a show starting exactly at `now` is past. Every input
//! show lands in exactly one bucket and input order is preserved within each.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Anything with a scheduled start instant
pub trait Scheduled {
    fn start_time(&self) -> DateTime<Utc>;

    /// True when the start is strictly after `now`
    fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.start_time() > now
    }
}

/// Shows split around an evaluation instant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowPartition<T> {
    pub past_shows: Vec<T>,
    pub upcoming_shows: Vec<T>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl<T> Default for ShowPartition<T> {
    fn default() -> Self {
        Self {
            past_shows: Vec::new(),
            upcoming_shows: Vec::new(),
            past_shows_count: 0,
            upcoming_shows_count: 0,
        }
    }
}

impl<T> ShowPartition<T> {
    pub fn total(&self) -> usize {
        self.past_shows_count + self.upcoming_shows_count
    }
}

/// Split `shows` into past and upcoming relative to `now`
pub fn partition<T, I>(shows: I, now: DateTime<Utc>) -> ShowPartition<T>
where
    T: Scheduled,
    I: IntoIterator<Item = T>,
{
    let (upcoming_shows, past_shows): (Vec<T>, Vec<T>) =
        shows.into_iter().partition(|show| show.is_upcoming(now));

    ShowPartition {
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    }
}
