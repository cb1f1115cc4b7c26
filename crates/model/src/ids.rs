use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Numeric identity of a user record. `0` means the record was never stored.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    pub const UNASSIGNED: UserId = UserId(0);

    pub fn new(id: u64) -> Self {
        UserId(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }

    pub fn is_assigned(&self) -> bool {
        self.0 != 0
    }

    pub fn next(&self) -> Self {
        UserId(self.0 + 1)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        UserId(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
