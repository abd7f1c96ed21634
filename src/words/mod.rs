// src/words/mod.rs
//
// Word Source: fetches candidate English words from an external random-word
// API. All failures are logged and collapsed into an empty word list so the
// caller only ever has to handle "no words".

use serde_json::Value;
use thiserror::Error;

use crate::core::config::Config;

// Provider words this short make poor passphrase material
const MIN_WORD_LEN: usize = 3;

#[derive(Debug, Error)]
pub enum WordSourceError {
    #[error("word API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("word API returned status {0}")]
    Provider(u16),

    #[error("unexpected word API payload: {0}")]
    Parse(String),

    #[error("gave up after {0} word fetch attempts")]
    AttemptsExhausted(usize),
}

/// HTTP client for the random-word provider.
pub struct WordClient {
    http: reqwest::Client,
    api_url: String,
    max_attempts: usize,
}

impl WordClient {
    pub fn new(config: &Config) -> Result<Self, WordSourceError> {
        let http = reqwest::Client::builder()
            .timeout(config.fetch_timeout)
            // The upstream provider is reached with verification off by
            // default; VERIFY_TLS=true turns verification back on.
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()?;

        Ok(Self {
            http,
            api_url: config.word_api_url.clone(),
            max_attempts: config.max_fetch_attempts,
        })
    }

    /// Accumulate words until their combined character count reaches
    /// `min_length` and at least two words are collected.
    ///
    /// Returns an empty list on any provider failure or once the attempt
    /// budget runs out.
    pub async fn fetch_words(&self, min_length: usize) -> Vec<String> {
        let mut words: Vec<String> = Vec::new();

        for attempt in 1..=self.max_attempts {
            match self.fetch_batch().await {
                Ok(batch) => words.extend(batch),
                Err(e) => {
                    log::error!("Error fetching words: {}", e);
                    return Vec::new();
                }
            }

            let combined: usize = words.iter().map(|w| w.len()).sum();
            if words.len() >= 2 && combined >= min_length {
                log::debug!(
                    "Collected {} words ({} chars) after {} attempts",
                    words.len(),
                    combined,
                    attempt
                );
                return words;
            }
        }

        log::warn!("{}", WordSourceError::AttemptsExhausted(self.max_attempts));
        Vec::new()
    }

    // One provider round trip
    async fn fetch_batch(&self) -> Result<Vec<String>, WordSourceError> {
        let response = self.http.get(&self.api_url).send().await?;

        if !response.status().is_success() {
            return Err(WordSourceError::Provider(response.status().as_u16()));
        }

        let payload: Value = response.json().await?;
        extract_words(&payload)
    }
}

/// Pull usable words out of a provider payload.
///
/// Providers disagree on shape: some return `["word", ...]`, others
/// `[{"word": "..."}, ...]`. Entries shorter than three characters are
/// dropped.
fn extract_words(payload: &Value) -> Result<Vec<String>, WordSourceError> {
    let entries = payload
        .as_array()
        .ok_or_else(|| WordSourceError::Parse("expected a JSON array".to_string()))?;

    let mut words = Vec::with_capacity(entries.len());
    for entry in entries {
        let word = match entry {
            Value::String(s) => s.as_str(),
            Value::Object(map) => map
                .get("word")
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    WordSourceError::Parse("object entry missing \"word\" field".to_string())
                })?,
            other => {
                return Err(WordSourceError::Parse(format!(
                    "unexpected entry type: {}",
                    other
                )));
            }
        };

        if word.len() >= MIN_WORD_LEN {
            words.push(word.to_string());
        }
    }

    Ok(words)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;

    use super::*;

    #[test]
    fn extracts_flat_string_array() {
        let payload = json!(["grub", "craftsman", "lantern"]);
        let words = extract_words(&payload).unwrap();
        assert_eq!(words, vec!["grub", "craftsman", "lantern"]);
    }

    #[test]
    fn extracts_object_array() {
        let payload = json!([{"word": "grub"}, {"word": "craftsman"}]);
        let words = extract_words(&payload).unwrap();
        assert_eq!(words, vec!["grub", "craftsman"]);
    }

    #[test]
    fn filters_short_words() {
        let payload = json!(["ox", "at", "craftsman", ""]);
        let words = extract_words(&payload).unwrap();
        assert_eq!(words, vec!["craftsman"]);
    }

    #[test]
    fn rejects_non_array_payload() {
        let payload = json!({"word": "grub"});
        assert!(matches!(
            extract_words(&payload),
            Err(WordSourceError::Parse(_))
        ));
    }

    #[test]
    fn rejects_object_without_word_field() {
        let payload = json!([{"term": "grub"}]);
        assert!(matches!(
            extract_words(&payload),
            Err(WordSourceError::Parse(_))
        ));
    }

    #[test]
    fn rejects_numeric_entries() {
        let payload = json!([42]);
        assert!(matches!(
            extract_words(&payload),
            Err(WordSourceError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn attempt_exhaustion_yields_empty_list() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        // A provider that only ever serves a too-short word, so the
        // accumulation loop can never meet its budget.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            loop {
                let (mut socket, _) = match listener.accept().await {
                    Ok(conn) => conn,
                    Err(_) => return,
                };
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
                let body = r#"["ox"]"#;
                let response = format!(
                    "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
            }
        });

        let config = Config {
            word_api_url: format!("http://{}/api?words=1", addr),
            fetch_timeout: Duration::from_secs(2),
            max_fetch_attempts: 3,
            ..Config::default()
        };

        let client = WordClient::new(&config).unwrap();
        let words = client.fetch_words(16).await;
        assert!(words.is_empty());
    }

    #[tokio::test]
    async fn transport_error_yields_empty_list() {
        // Port 9 (discard) is not listening; the connection is refused
        // before the timeout fires.
        let config = Config {
            word_api_url: "http://127.0.0.1:9/api?words=1".to_string(),
            fetch_timeout: Duration::from_millis(500),
            max_fetch_attempts: 3,
            ..Config::default()
        };

        let client = WordClient::new(&config).unwrap();
        let words = client.fetch_words(16).await;
        assert!(words.is_empty());
    }
}
