use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::user::{Record, UserInfo};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Trainee {
    #[serde(flatten)]
    pub user: UserInfo,
    pub date_of_birth: NaiveDate,
    pub address: String,
}

impl Trainee {
    pub fn new(user: UserInfo, date_of_birth: NaiveDate, address: impl Into<String>) -> Trainee {
        Trainee {
            user,
            date_of_birth,
            address: address.into(),
        }
    }
}

impl Record for Trainee {
    const KIND: &'static str = "trainee";

    fn user(&self) -> &UserInfo {
        &self.user
    }

    fn user_mut(&mut self) -> &mut UserInfo {
        &mut self.user
    }
}
