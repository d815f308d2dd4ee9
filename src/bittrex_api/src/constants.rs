pub const BASE_URL: &str = "https://bittrex.com/api/v1.1";
pub const SIGNATURE_HEADER: &str = "apisign";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
/// `Opened`/`Closed` timestamps are UTC without an offset, e.g. `2014-07-09T03:55:48.77`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
