use serde::{Deserialize, Serialize};

use crate::{
    training::TrainingType,
    user::{Record, UserInfo},
};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Trainer {
    #[serde(flatten)]
    pub user: UserInfo,
    pub specialization: String,
    pub training_type: TrainingType,
}

impl Trainer {
    pub fn new(
        user: UserInfo,
        specialization: impl Into<String>,
        training_type: TrainingType,
    ) -> Trainer {
        Trainer {
            user,
            specialization: specialization.into(),
            training_type,
        }
    }
}

impl Record for Trainer {
    const KIND: &'static str = "trainer";

    fn user(&self) -> &UserInfo {
        &self.user
    }

    fn user_mut(&mut self) -> &mut UserInfo {
        &mut self.user
    }
}
