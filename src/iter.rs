use std::iter::FusedIterator;
use std::sync::Arc;

use log::trace;

use crate::engine::{self, Engine};
use crate::match_result::MatchResult;
use crate::types::{CodeUnitRange, Subject};

/// Lazily enumerates the non-overlapping matches of a pattern in a string.
///
/// Each call to `next` runs exactly one search, starting just past the
/// previous match; an empty match moves the next search forward by one
/// character so enumeration always terminates. Once exhausted the iterator
/// keeps returning `None` without searching again. To enumerate a second time,
/// ask the `Regex` for a new iterator.
///
/// Created by [`Regex::matches_in`](crate::Regex::matches_in).
pub struct Matches {
    engine: Arc<Engine>,
    subject: Arc<Subject>,
    search_range: Option<CodeUnitRange>,
}

impl Matches {
    pub(crate) fn new(engine: Arc<Engine>, subject: &str) -> Self {
        let subject = Arc::new(Subject::new(subject));
        let search_range = Some(subject.units().entire_range());
        Matches {
            engine,
            subject,
            search_range,
        }
    }

    /// The string being searched.
    pub fn subject(&self) -> &str {
        self.subject.as_str()
    }
}

impl Iterator for Matches {
    type Item = MatchResult;

    fn next(&mut self) -> Option<MatchResult> {
        let search_range = self.search_range?;
        let mut found = None;
        self.engine
            .enumerate_matches(&self.subject, search_range, |raw, stop| {
                if let Some(raw) = raw {
                    found = Some(raw.clone());
                    *stop = true;
                }
            });

        let Some(raw) = found else {
            trace!("no match in {search_range}, sequence exhausted");
            self.search_range = None;
            return None;
        };
        self.search_range = engine::advance_past(&self.subject, raw.range())
            .map(|next| self.subject.units().suffix_from(next));
        Some(MatchResult::new(Arc::clone(&self.subject), raw))
    }
}

impl FusedIterator for Matches {}

impl std::fmt::Debug for Matches {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matches")
            .field("subject", &self.subject.as_str())
            .field("search_range", &self.search_range)
            .finish()
    }
}
