//! Opaque value symbols for states, observations, and outputs.
//!
//! All three alphabets of a filter are sets of named symbols compared
//! by value. Separate newtypes keep a state name from being passed
//! where an observation is expected, even though all three wrap plain
//! strings.

use std::fmt;

/// A state identifier drawn from a filter's state set `V`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State(String);

impl State {
    /// Create a state symbol from a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The symbol's name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for State {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for State {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// An observation symbol drawn from a filter's alphabet `Y`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Obs(String);

impl Obs {
    /// Create an observation symbol from a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The symbol's name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Obs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Obs {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for Obs {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// An output symbol drawn from a filter's output alphabet `O`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Out(String);

impl Out {
    /// Create an output symbol from a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The symbol's name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Out {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Out {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for Out {
    fn from(name: String) -> Self {
        Self(name)
    }
}
