//! Blocking HTTP source backed by the dog.ceo API

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use tracing::debug;

use crate::error::{Error, Result};
use crate::fetcher::BreedFetcher;
use crate::response::parse_sub_breeds;

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://dog.ceo/api";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Remote source configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DogApiConfig {
    /// API root, e.g. `https://dog.ceo/api`
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for DogApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// [`BreedFetcher`] that queries `{base_url}/breed/{breed}/list`
#[derive(Debug, Clone)]
pub struct DogApiFetcher {
    client: Client,
    base_url: Url,
}

impl DogApiFetcher {
    /// Build a fetcher from the given configuration
    ///
    /// # Returns
    /// * `Result<DogApiFetcher>` - fails if the base URL is invalid or the
    ///   HTTP client cannot be built
    pub fn new(config: DogApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| Error::Request(format!("invalid base url {}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Request(format!(
                "invalid base url {}: cannot be a base",
                config.base_url
            )));
        }

        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self::with_client(client, base_url))
    }

    fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// URL queried for `breed`
    pub fn breed_url(&self, breed: &str) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in new()
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("breed").push(breed).push("list");
        }
        url
    }
}

impl BreedFetcher for DogApiFetcher {
    fn get_sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        let url = self.breed_url(breed);
        debug!(breed, %url, "requesting sub-breeds");

        let response = self.client.get(url).send()?;
        let status = response.status();
        let body = response.text()?;

        classify_response(breed, status, &body)
    }
}

/// Map an HTTP status and body to a lookup result
///
/// Only a 404, or a success status whose body reports an error, means the
/// breed is unknown. Any other non-success status is a request failure
/// whatever the body says.
fn classify_response(breed: &str, status: StatusCode, body: &str) -> Result<Vec<String>> {
    if status.is_success() {
        parse_sub_breeds(breed, body)
    } else if status == StatusCode::NOT_FOUND {
        Err(Error::BreedNotFound(breed.to_string()))
    } else {
        Err(Error::Request(format!("HTTP {} for breed {}", status, breed)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve one canned HTTP response on a local port, returning the base URL
    fn serve_once(status_line: &str, body: &str) -> (String, thread::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request: Vec<u8> = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).unwrap();
        });

        (format!("http://{}/api", addr), handle)
    }

    fn fetch(status_line: &str, body: &str, breed: &str) -> Result<Vec<String>> {
        let (base_url, handle) = serve_once(status_line, body);
        let client = Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        let fetcher = DogApiFetcher::with_client(client, Url::parse(&base_url).unwrap());

        let result = fetcher.get_sub_breeds(breed);
        handle.join().unwrap();
        result
    }

    #[test]
    fn test_fetch_ok_list() {
        let body = r#"{"message":["afghan","basset"],"status":"success"}"#;
        let subs = fetch("200 OK", body, "hound").unwrap();

        assert_eq!(subs, vec!["afghan", "basset"]);
    }

    #[test]
    fn test_fetch_ok_empty_list() {
        let body = r#"{"message":[],"status":"success"}"#;
        assert!(fetch("200 OK", body, "labrador").unwrap().is_empty());
    }

    #[test]
    fn test_fetch_ok_with_error_body() {
        let body = r#"{"status":"error","message":"Breed not found (main breed does not exist)","code":404}"#;
        let err = fetch("200 OK", body, "cat").unwrap_err();

        assert_eq!(err, Error::BreedNotFound("cat".to_string()));
    }

    #[test]
    fn test_fetch_not_found_json() {
        let body = r#"{"status":"error","message":"Breed not found (main breed does not exist)","code":404}"#;
        let err = fetch("404 Not Found", body, "cat").unwrap_err();

        assert_eq!(err, Error::BreedNotFound("cat".to_string()));
    }

    #[test]
    fn test_fetch_not_found_html() {
        let err = fetch("404 Not Found", "<html>nope</html>", "cat").unwrap_err();
        assert_eq!(err, Error::BreedNotFound("cat".to_string()));
    }

    #[test]
    fn test_fetch_server_error_html() {
        let err = fetch("500 Internal Server Error", "<html>boom</html>", "hound").unwrap_err();

        assert!(matches!(err, Error::Request(_)));
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_fetch_unavailable_with_error_body() {
        let body = r#"{"status":"error","message":"Service temporarily unavailable","code":503}"#;
        let err = fetch("503 Service Unavailable", body, "hound").unwrap_err();

        assert!(!err.is_not_found());
        assert!(matches!(err, Error::Request(_)));
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_classify_success_with_garbage() {
        let err = classify_response("hound", StatusCode::OK, "<html>").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_default_config() {
        let config = DogApiConfig::default();
        assert_eq!(config.base_url, "https://dog.ceo/api");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_breed_url() {
        let fetcher = DogApiFetcher::new(DogApiConfig::default()).unwrap();

        assert_eq!(
            fetcher.breed_url("hound").as_str(),
            "https://dog.ceo/api/breed/hound/list"
        );
    }

    #[test]
    fn test_breed_url_trailing_slash_and_escaping() {
        let config = DogApiConfig {
            base_url: "http://localhost:8080/api/".to_string(),
            ..DogApiConfig::default()
        };
        let fetcher = DogApiFetcher::new(config).unwrap();

        assert_eq!(
            fetcher.breed_url("a/b").as_str(),
            "http://localhost:8080/api/breed/a%2Fb/list"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let config = DogApiConfig {
            base_url: "not a url".to_string(),
            ..DogApiConfig::default()
        };
        assert!(matches!(DogApiFetcher::new(config), Err(Error::Request(_))));

        let config = DogApiConfig {
            base_url: "mailto:dogs@example.com".to_string(),
            ..DogApiConfig::default()
        };
        assert!(matches!(DogApiFetcher::new(config), Err(Error::Request(_))));
    }
}
