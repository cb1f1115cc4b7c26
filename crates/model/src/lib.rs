pub mod errors;
pub mod ids;
pub mod trainee;
pub mod trainer;
pub mod training;
pub mod user;
