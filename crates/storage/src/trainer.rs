use log::warn;
use model::{errors::StoreError, ids::UserId, trainer::Trainer, user::Record};

use crate::store::{MemStore, Shared, UserDao};

/// Trainers can be added and edited, but never removed through the store.
#[derive(Default)]
pub struct TrainerStore {
    store: MemStore<Trainer>,
}

impl TrainerStore {
    pub fn new() -> Self {
        TrainerStore {
            store: MemStore::new(),
        }
    }
}

impl UserDao<Trainer> for TrainerStore {
    fn add(&mut self, record: Shared<Trainer>) -> Shared<Trainer> {
        self.store.add(record)
    }

    fn update(&mut self, record: Shared<Trainer>) -> Shared<Trainer> {
        self.store.update(record)
    }

    fn delete(&mut self, _: &Shared<Trainer>) -> Result<bool, StoreError> {
        warn!("Rejected attempt to delete a {}", Trainer::KIND);
        Err(StoreError::unsupported("delete", Trainer::KIND))
    }

    fn find_by_id(&self, id: UserId) -> Option<Shared<Trainer>> {
        self.store.get(id)
    }

    fn find_all(&self) -> Vec<Shared<Trainer>> {
        self.store.all()
    }
}
