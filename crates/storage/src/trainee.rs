use model::{errors::StoreError, ids::UserId, trainee::Trainee};

use crate::store::{MemStore, Shared, UserDao};

/// Trainees follow the plain contract: delete removes the record if it is there.
#[derive(Default)]
pub struct TraineeStore {
    store: MemStore<Trainee>,
}

impl TraineeStore {
    pub fn new() -> Self {
        TraineeStore {
            store: MemStore::new(),
        }
    }
}

impl UserDao<Trainee> for TraineeStore {
    fn add(&mut self, record: Shared<Trainee>) -> Shared<Trainee> {
        self.store.add(record)
    }

    fn update(&mut self, record: Shared<Trainee>) -> Shared<Trainee> {
        self.store.update(record)
    }

    fn delete(&mut self, record: &Shared<Trainee>) -> Result<bool, StoreError> {
        Ok(self.store.remove(record))
    }

    fn find_by_id(&self, id: UserId) -> Option<Shared<Trainee>> {
        self.store.get(id)
    }

    fn find_all(&self) -> Vec<Shared<Trainee>> {
        self.store.all()
    }
}
