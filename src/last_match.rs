//! Per-thread record of the most recent match made through the eager entry
//! points of [`Regex`](crate::Regex).

use std::cell::RefCell;

use crate::match_result::MatchResult;

thread_local! {
    static LAST_MATCH: RefCell<Option<MatchResult>> = const { RefCell::new(None) };
}

/// The result of the last `is_match`, `first_match` or `all_matches` call made
/// on the current thread, or `None` if that call found nothing.
///
/// Lazy enumeration through [`Regex::matches_in`](crate::Regex::matches_in)
/// leaves this untouched.
///
/// ```
/// use regexkit::{Regex, last_match};
///
/// let regex = Regex::new("l+").unwrap();
/// if regex.is_match("hello") {
///     assert_eq!(last_match().unwrap().as_str(), "ll");
/// }
/// ```
pub fn last_match() -> Option<MatchResult> {
    LAST_MATCH.with(|last| last.borrow().clone())
}

pub(crate) fn set_last_match(result: Option<MatchResult>) {
    LAST_MATCH.with(|last| *last.borrow_mut() = result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Regex;
    use std::thread;

    #[test]
    fn set_after_success_and_cleared_after_failure() {
        let foo = Regex::new("foo").unwrap();
        let bar = Regex::new("bar").unwrap();
        assert!(foo.is_match("foo"));
        assert_eq!(last_match().map(|m| m.as_str().to_string()), Some("foo".into()));
        assert!(!bar.is_match("foo"));
        assert_eq!(last_match(), None);
    }

    #[test]
    fn equals_returned_result() {
        let regex = Regex::new("l+").unwrap();
        let m = regex.first_match("hello").unwrap();
        assert_eq!(last_match(), Some(m));
    }

    #[test]
    fn all_matches_records_first_or_clears() {
        let regex = Regex::new("o").unwrap();
        let matches = regex.all_matches("foo");
        assert_eq!(matches.len(), 2);
        assert_eq!(last_match(), matches.first().cloned());
        assert!(regex.all_matches("bar").is_empty());
        assert_eq!(last_match(), None);
    }

    #[test]
    fn lazy_iteration_does_not_record() {
        let regex = Regex::new("o").unwrap();
        set_last_match(None);
        assert_eq!(regex.matches_in("foo").count(), 2);
        assert_eq!(last_match(), None);

        let sentinel = regex.first_match("xo").unwrap();
        let _ = regex.matches_in("foo").collect::<Vec<_>>();
        assert_eq!(last_match(), Some(sentinel));
    }

    #[test]
    fn isolated_between_threads() {
        let regex = Regex::new(r"\d+").unwrap();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let regex = regex.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        let subject = format!("thread {i}");
                        assert!(regex.is_match(&subject));
                        let last = last_match().unwrap();
                        assert_eq!(last.as_str(), i.to_string());
                        assert_eq!(last.subject(), subject);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn new_thread_starts_empty() {
        let regex = Regex::new("x").unwrap();
        assert!(regex.is_match("x"));
        let seen = thread::spawn(last_match).join().unwrap();
        assert_eq!(seen, None);
        assert!(last_match().is_some());
    }
}
