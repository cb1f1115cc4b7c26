use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "title_case", ascii_case_insensitive)]
pub enum TrainingType {
    #[default]
    Fitness,
    Strength,
    Flexibility,
    Cardio,
    Yoga,
    Zumba,
    Stretching,
    Resistance,
}
