//! Application Use Cases

mod manage_records;

pub use manage_records::ManageRecordsUseCase;
