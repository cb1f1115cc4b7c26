pub mod store;
pub mod trainee;
pub mod trainer;

pub use store::{shared, Shared, UserDao};
use trainee::TraineeStore;
use trainer::TrainerStore;

#[derive(Default)]
pub struct Storage {
    pub trainees: TraineeStore,
    pub trainers: TrainerStore,
}

impl Storage {
    pub fn new() -> Self {
        Storage {
            trainees: TraineeStore::new(),
            trainers: TrainerStore::new(),
        }
    }
}
