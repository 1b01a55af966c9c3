use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct StatsResponse {
    pub record_count: u64,
    pub query_count: u64,
    pub server_status: &'static str,
}
