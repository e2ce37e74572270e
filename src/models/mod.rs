pub mod patient;

pub use patient::PatientRecord;
