pub mod categories;
pub mod doctor;
pub mod serve;
