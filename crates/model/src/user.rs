use core::fmt;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// Identity part shared by every kind of user record.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct UserInfo {
    #[serde(default)]
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub is_active: bool,
}

impl UserInfo {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> UserInfo {
        UserInfo {
            id: UserId::UNASSIGNED,
            first_name: first_name.into(),
            last_name: last_name.into(),
            username: String::new(),
            password: String::new(),
            is_active: false,
        }
    }

    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = id;
        self
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

impl Display for UserInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)?;
        if !self.username.is_empty() {
            write!(f, " (@{})", self.username)?;
        }
        Ok(())
    }
}

/// A user record that can be kept in a repository.
pub trait Record {
    /// Human readable kind name, used in logs and errors.
    const KIND: &'static str;

    fn user(&self) -> &UserInfo;

    fn user_mut(&mut self) -> &mut UserInfo;

    fn id(&self) -> UserId {
        self.user().id
    }

    fn set_id(&mut self, id: UserId) {
        self.user_mut().id = id;
    }
}
