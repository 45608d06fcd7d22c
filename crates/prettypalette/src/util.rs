//! Access to the environment.

/// The environment variable holding the seed for color set generation.
pub const SEED_VARIABLE: &str = "PRETTYPALETTE_SEED";

/// A trait to abstract over environment variable access.
///
/// The standard library is a bit spartan when it comes to environment variable
/// access. So this trait makes up for it yet still keeps things simple by only
/// requiring the implementation of one method.
pub trait Environment {
    /// Try reading the environment variable as an OS string.
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString>;

    /// Try reading the environment variable as a string.
    fn read(&self, key: &str) -> Result<String, std::env::VarError> {
        self.read_os(key).map_or_else(
            || Err(std::env::VarError::NotPresent),
            |s| s.into_string().map_err(std::env::VarError::NotUnicode),
        )
    }

    /// Determine whether the environment variable is defined with a non-empty value.
    fn is_non_empty(&self, key: &str) -> bool {
        self.read_os(key).is_some_and(|v| !v.is_empty())
    }

    /// Determine the seed for generating color sets.
    ///
    /// If [`SEED_VARIABLE`] is defined with a non-empty value, this method
    /// returns the result of parsing that value as a decimal `u64`. A value
    /// that does not parse is an error, so that a typo does not silently
    /// result in random colors. If the variable is undefined or empty, this
    /// method returns `Ok(None)`.
    fn seed(&self) -> Result<Option<u64>, std::io::Error> {
        if !self.is_non_empty(SEED_VARIABLE) {
            return Ok(None);
        }

        let value = self
            .read(SEED_VARIABLE)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
        value.trim().parse::<u64>().map(Some).map_err(|_| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!(
                    "{} should be a decimal unsigned integer but is `{}`",
                    SEED_VARIABLE, value
                ),
            )
        })
    }
}

/// The process environment.
#[derive(Debug, Default)]
pub struct Env();

impl Environment for Env {
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString> {
        std::env::var_os(key)
    }
}

#[cfg(test)]
mod test {
    use super::{Environment, SEED_VARIABLE};
    use std::collections::HashMap;

    pub(crate) struct FakeEnv {
        bindings: HashMap<String, String>,
    }

    impl FakeEnv {
        /// Create a new fake environment.
        pub(crate) fn new() -> FakeEnv {
            FakeEnv {
                bindings: HashMap::new(),
            }
        }

        /// Set the fake environment variable.
        pub(crate) fn set<K: AsRef<str>, V: AsRef<str>>(&mut self, key: K, value: V) -> &mut Self {
            self.bindings
                .insert(key.as_ref().to_string(), value.as_ref().to_string());
            self
        }
    }

    impl Environment for FakeEnv {
        fn read_os(&self, key: &str) -> Option<std::ffi::OsString> {
            self.bindings.get(key).map(|v| v.into())
        }
    }

    #[test]
    fn test_seed() {
        let mut env = FakeEnv::new();
        assert!(matches!(env.seed(), Ok(None)));

        env.set(SEED_VARIABLE, "");
        assert!(matches!(env.seed(), Ok(None)));

        env.set(SEED_VARIABLE, " 665 ");
        assert!(matches!(env.seed(), Ok(Some(665))));

        env.set(SEED_VARIABLE, "-1");
        let error = env.seed().unwrap_err();
        assert_eq!(error.kind(), std::io::ErrorKind::InvalidInput);
        assert!(error.to_string().contains("`-1`"));
    }

    #[test]
    fn test_read() {
        let mut env = FakeEnv::new();
        env.set("PALETTE", "pastel");
        assert_eq!(env.read("PALETTE"), Ok("pastel".to_string()));
        assert_eq!(env.read("MISSING"), Err(std::env::VarError::NotPresent));
        assert!(!env.is_non_empty("MISSING"));
    }
}
