//! Greeting and proverb service.
//!
//! ```
//! use hello_gopher::greeting::{Greeter, ProverbProvider, Service};
//!
//! let mut service = Service::new();
//! assert_eq!(service.greet("World"), "Hello, World!");
//! assert!(!service.proverb_or_notice().is_empty());
//! ```

mod proverbs;

pub use proverbs::{DataError, ProverbSet, EMBEDDED_PROVERBS};

/// Name used when a greeting is requested for an empty name.
pub const DEFAULT_NAME: &str = "Gopher";

/// Builds greetings.
pub trait Greeter {
    fn greet(&self, name: &str) -> String;
}

/// Access to a set of proverbs that is loaded on demand.
pub trait ProverbProvider {
    /// Parses the proverb resource, replacing whatever was loaded before.
    /// Returns the number of proverbs now available.
    fn load_proverbs(&mut self) -> Result<usize, DataError>;

    /// Picks a proverb uniformly at random, loading the set first if needed.
    fn random_proverb(&mut self) -> Result<Pick, DataError>;

    fn is_loaded(&self) -> bool;

    /// Like [`ProverbProvider::random_proverb`], but renders a load failure
    /// as text instead of returning it. Never returns an empty string.
    fn proverb_or_notice(&mut self) -> String {
        match self.random_proverb() {
            Ok(pick) => pick.proverb,
            Err(err) => format!("Error loading proverbs: {err}"),
        }
    }
}

/// A randomly selected proverb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    pub proverb: String,
    /// True when this selection had to load the proverb set first.
    pub loaded: bool,
}

/// Production implementation of [`Greeter`] and [`ProverbProvider`].
#[derive(Debug, Clone)]
pub struct Service {
    source: &'static str,
    proverbs: Option<ProverbSet>,
}

impl Service {
    /// Creates a service backed by the proverbs compiled into the binary.
    pub fn new() -> Self {
        Self::with_source(EMBEDDED_PROVERBS)
    }

    /// Creates a service backed by an alternative proverb resource.
    pub fn with_source(source: &'static str) -> Self {
        Self {
            source,
            proverbs: None,
        }
    }

    pub fn proverbs(&self) -> Option<&ProverbSet> {
        self.proverbs.as_ref()
    }
}

impl Default for Service {
    fn default() -> Self {
        Self::new()
    }
}

impl Greeter for Service {
    fn greet(&self, name: &str) -> String {
        let name = if name.is_empty() { DEFAULT_NAME } else { name };
        format!("Hello, {name}!")
    }
}

impl ProverbProvider for Service {
    fn load_proverbs(&mut self) -> Result<usize, DataError> {
        self.proverbs = None;
        let set = ProverbSet::parse(self.source)?;
        let count = set.len();
        tracing::debug!(count, "loaded proverbs");
        self.proverbs = Some(set);
        Ok(count)
    }

    fn random_proverb(&mut self) -> Result<Pick, DataError> {
        let loaded = self.proverbs.is_none();
        if loaded {
            tracing::debug!("proverbs not loaded yet, loading on first use");
            self.load_proverbs()?;
        }

        let set = self.proverbs.as_ref().ok_or(DataError::NoValidLines)?;
        let proverb = set.choose(&mut rand::thread_rng()).to_owned();
        Ok(Pick { proverb, loaded })
    }

    fn is_loaded(&self) -> bool {
        self.proverbs.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn greets_default_gopher_for_empty_name() {
        assert_eq!(Service::new().greet(""), "Hello, Gopher!");
    }

    #[test]
    fn greets_given_names_verbatim() {
        let service = Service::new();
        for (name, expected) in [
            ("Alice", "Hello, Alice!"),
            ("Mary Jane", "Hello, Mary Jane!"),
            ("José", "Hello, José!"),
            ("Agent 007", "Hello, Agent 007!"),
            ("  ", "Hello,   !"),
        ] {
            assert_eq!(service.greet(name), expected);
        }
    }

    #[test]
    fn new_service_is_not_loaded() {
        let service = Service::new();
        assert!(!service.is_loaded());
        assert!(service.proverbs().is_none());
    }

    #[test]
    fn load_proverbs_is_idempotent() {
        let mut service = Service::new();
        let first = service.load_proverbs().unwrap();
        let second = service.load_proverbs().unwrap();

        assert_eq!(first, second);
        assert!(first >= 50);
        assert!(service.is_loaded());
    }

    #[test]
    fn random_proverb_reports_auto_load() {
        let mut service = Service::new();

        let first = service.random_proverb().unwrap();
        assert!(first.loaded);
        let second = service.random_proverb().unwrap();
        assert!(!second.loaded);
    }

    #[test]
    fn random_proverb_after_explicit_load_does_not_reload() {
        let mut service = Service::new();
        service.load_proverbs().unwrap();
        assert!(!service.random_proverb().unwrap().loaded);
    }

    #[test]
    fn random_proverb_comes_from_loaded_set() {
        let mut service = Service::new();
        service.load_proverbs().unwrap();
        let known: HashSet<String> = service.proverbs().unwrap().iter().map(str::to_owned).collect();

        for _ in 0..50 {
            let pick = service.random_proverb().unwrap();
            assert!(known.contains(&pick.proverb), "unexpected proverb {}", pick.proverb);
        }
    }

    #[test]
    fn random_proverb_varies_across_calls() {
        let mut service = Service::new();
        let seen: HashSet<String> = (0..50)
            .map(|_| service.random_proverb().unwrap().proverb)
            .collect();
        assert!(seen.len() >= 2);
    }

    #[test]
    fn failed_load_surfaces_data_error() {
        let mut service = Service::with_source("# only a comment\n\n");
        assert!(matches!(service.load_proverbs(), Err(DataError::NoValidLines)));
        assert!(matches!(service.random_proverb(), Err(DataError::NoValidLines)));
        assert!(!service.is_loaded());
    }

    #[test]
    fn failed_reload_clears_previous_set() {
        let mut service = Service::with_source("one\ntwo");
        service.load_proverbs().unwrap();
        service.source = "";

        assert!(matches!(service.load_proverbs(), Err(DataError::EmptySource)));
        assert!(!service.is_loaded());
    }

    #[test]
    fn proverb_or_notice_renders_load_failure() {
        let mut service = Service::with_source("");
        assert_eq!(
            service.proverb_or_notice(),
            "Error loading proverbs: embedded proverb data is empty"
        );
    }

    #[test]
    fn proverb_or_notice_returns_proverb_when_available() {
        let mut service = Service::with_source("# header\nOnly one\n");
        assert_eq!(service.proverb_or_notice(), "Only one");
    }

    proptest! {
        #[test]
        fn greet_wraps_any_non_empty_name(name in "\\PC{1,40}") {
            prop_assert_eq!(Service::new().greet(&name), format!("Hello, {name}!"));
        }
    }
}
