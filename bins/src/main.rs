use std::rc::Rc;

use chrono::NaiveDate;
use eyre::{eyre, Context as _};
use log::{info, warn};
use model::{
    trainee::Trainee,
    trainer::Trainer,
    training::TrainingType,
    user::{Record as _, UserInfo},
};
use storage::{shared, Storage, UserDao as _};

fn main() -> eyre::Result<()> {
    let env = env::Env::load();
    pretty_env_logger::formatted_builder()
        .parse_filters(env.rust_log())
        .init();
    color_eyre::install()?;

    info!("Opening roster for {}", env.gym_name());
    let mut storage = Storage::new();

    let birth =
        NaiveDate::from_ymd_opt(1995, 4, 21).ok_or_else(|| eyre!("Invalid birth date"))?;
    let trainee = storage.trainees.add(shared(Trainee::new(
        UserInfo::new("Anna", "Petrova").with_credentials("Anna.Petrova", "changeme"),
        birth,
        "12 Gym Street",
    )));
    let trainer = storage.trainers.add(shared(Trainer::new(
        UserInfo::new("Ivan", "Sidorov")
            .with_credentials("Ivan.Sidorov", "changeme")
            .active(true),
        "Fitness Coach",
        TrainingType::Strength,
    )));

    trainee.borrow_mut().user.is_active = true;
    storage.trainees.update(Rc::clone(&trainee));

    if let Err(err) = storage.trainers.delete(&trainer) {
        warn!("{}", err);
    }

    let trainee_id = trainee.borrow().id();
    let stored = storage
        .trainees
        .find_by_id(trainee_id)
        .ok_or_else(|| eyre!("Trainee {} is missing", trainee_id))
        .context("Roster lost a trainee")?;
    let stored = stored.borrow();
    info!("Trainee {} active: {}", stored.user, stored.user.is_active);

    for trainer in storage.trainers.find_all() {
        let trainer = trainer.borrow();
        info!(
            "Trainer {} [{}]: {}",
            trainer.user, trainer.training_type, trainer.specialization
        );
    }

    Ok(())
}
