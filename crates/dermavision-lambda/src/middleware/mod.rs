pub mod preflight;
pub mod request_log;
