mod bootstrap;
mod create_record;
mod get_records;

pub use bootstrap::BootstrapRecordsUseCase;
pub use create_record::CreateRecordUseCase;
pub use get_records::GetRecordsUseCase;
