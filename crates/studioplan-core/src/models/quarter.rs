//! Quarter tags and the fixed four-entry quarterly action list.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of the planning year's quarters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    /// All quarters in calendar order.
    pub const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

    /// Returns the tag used in serialized plans.
    pub fn as_str(&self) -> &'static str {
        match self {
            Quarter::Q1 => "Q1",
            Quarter::Q2 => "Q2",
            Quarter::Q3 => "Q3",
            Quarter::Q4 => "Q4",
        }
    }

    fn index(self) -> usize {
        match self {
            Quarter::Q1 => 0,
            Quarter::Q2 => 1,
            Quarter::Q3 => 2,
            Quarter::Q4 => 3,
        }
    }
}

impl FromStr for Quarter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "Q1" => Ok(Quarter::Q1),
            "Q2" => Ok(Quarter::Q2),
            "Q3" => Ok(Quarter::Q3),
            "Q4" => Ok(Quarter::Q4),
            _ => Err(format!("Invalid quarter: {s}")),
        }
    }
}

/// The actions planned for one quarter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuarterlyAction {
    pub quarter: Quarter,
    #[serde(default)]
    pub actions: Vec<String>,
}

/// Exactly four quarterly entries tagged Q1, Q2, Q3, Q4 in order.
///
/// Serialized as a plain list. Deserializing a list with a different length
/// or out-of-order tags fails, so a value of this type always upholds the
/// invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<QuarterlyAction>", into = "Vec<QuarterlyAction>")]
pub struct QuarterlyActions([QuarterlyAction; 4]);

impl QuarterlyActions {
    /// Builds the four entries, asking `actions` for each quarter's list.
    pub fn with_actions<F>(mut actions: F) -> Self
    where
        F: FnMut(Quarter) -> Vec<String>,
    {
        Self(Quarter::ALL.map(|quarter| QuarterlyAction {
            quarter,
            actions: actions(quarter),
        }))
    }

    /// Returns the entry for a quarter.
    pub fn get(&self, quarter: Quarter) -> &QuarterlyAction {
        &self.0[quarter.index()]
    }

    /// Returns the entry for a quarter, mutably.
    pub fn get_mut(&mut self, quarter: Quarter) -> &mut QuarterlyAction {
        &mut self.0[quarter.index()]
    }

    /// Iterates the entries in quarter order.
    pub fn iter(&self) -> std::slice::Iter<'_, QuarterlyAction> {
        self.0.iter()
    }
}

impl Default for QuarterlyActions {
    fn default() -> Self {
        Self::with_actions(|_| Vec::new())
    }
}

impl<'a> IntoIterator for &'a QuarterlyActions {
    type Item = &'a QuarterlyAction;
    type IntoIter = std::slice::Iter<'a, QuarterlyAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl TryFrom<Vec<QuarterlyAction>> for QuarterlyActions {
    type Error = String;

    fn try_from(entries: Vec<QuarterlyAction>) -> Result<Self, Self::Error> {
        let count = entries.len();
        let entries: [QuarterlyAction; 4] = entries
            .try_into()
            .map_err(|_| format!("expected 4 quarterly entries, found {count}"))?;

        for (entry, expected) in entries.iter().zip(Quarter::ALL) {
            if entry.quarter != expected {
                return Err(format!(
                    "expected quarter {} but found {}",
                    expected.as_str(),
                    entry.quarter.as_str()
                ));
            }
        }

        Ok(Self(entries))
    }
}

impl From<QuarterlyActions> for Vec<QuarterlyAction> {
    fn from(actions: QuarterlyActions) -> Self {
        actions.0.into()
    }
}
