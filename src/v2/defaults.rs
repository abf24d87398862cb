/// Default server URL for the v2 API.
pub const SERVER_URL: &str = "https://api.companycam.com/v2";
