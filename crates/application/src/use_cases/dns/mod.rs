mod resolve_record;

pub use resolve_record::{RecordSource, Resolution, ResolveRecordUseCase};
