#![allow(dead_code)]

use std::path::Path;

use fear_greed_archive::{App, Config};
use httpmock::{Method::GET, Mock, MockServer};

pub const SCENARIO_BODY: &str = r#"{
  "name": "Fear and Greed Index",
  "data": [
    {"value": "50", "value_classification": "Neutral", "timestamp": "20", "time_until_update": "3600"},
    {"value": "25.5", "value_classification": "Fear", "timestamp": "10"}
  ],
  "metadata": {"error": null}
}"#;

pub fn mock_fng<'a>(server: &'a MockServer, status: u16, body: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path("/fng/").query_param("limit", "0");
        then.status(status)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn app_for(server: &MockServer, output_path: &Path) -> App {
    App::new(Config {
        api_url: format!("{}?limit=0", server.url("/fng/")),
        output_path: output_path.to_path_buf(),
        log_file: None,
    })
}
