use super::StrokeLookup;
use crate::config::LookupSettings;
use crate::error::{SeimeiError, SeimeiResult};
use serde::Deserialize;
use tracing::debug;

/// Response shape of the MJ character information API. Only the total
/// stroke count of the first match is used.
#[derive(Debug, Deserialize)]
struct MjResponse {
    #[serde(default)]
    results: Vec<MjCharacter>,
}

#[derive(Debug, Deserialize)]
struct MjCharacter {
    #[serde(rename = "総画数")]
    total_strokes: Option<i64>,
}

/// Blocking client for the IPA MJ character information API, queried by
/// code point (`?UCS=0x7530`).
pub struct MojikibanLookup {
    agent: ureq::Agent,
    endpoint: String,
}

impl MojikibanLookup {
    pub fn new(settings: &LookupSettings) -> Self {
        let timeout = settings.timeout();
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout_read(timeout)
            .build();
        Self {
            agent,
            endpoint: settings.lookup_url.clone(),
        }
    }
}

impl StrokeLookup for MojikibanLookup {
    fn lookup(&self, ch: char) -> SeimeiResult<u32> {
        let ucs = code_point_hex(ch);
        debug!("🌐 Querying {} for UCS={}", self.endpoint, ucs);

        let response = self
            .agent
            .get(&self.endpoint)
            .query("UCS", &ucs)
            .call()
            .map_err(|e| unavailable(ch, e))?;

        let body = response.into_string().map_err(|e| SeimeiError::LookupUnavailable {
            ch,
            reason: format!("could not read response body: {}", e),
        })?;

        parse_response(ch, &body)
    }
}

/// Lookup used with `--offline`: every miss is unsupported.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLookup;

impl StrokeLookup for NoLookup {
    fn lookup(&self, ch: char) -> SeimeiResult<u32> {
        Err(SeimeiError::UnsupportedCharacter(ch))
    }
}

/// `0x`-prefixed lower-case hex of the code point.
pub fn code_point_hex(ch: char) -> String {
    format!("{:#x}", ch as u32)
}

fn parse_response(ch: char, body: &str) -> SeimeiResult<u32> {
    let parsed: MjResponse =
        serde_json::from_str(body).map_err(|e| SeimeiError::LookupUnavailable {
            ch,
            reason: format!("unreadable response: {}", e),
        })?;

    parsed
        .results
        .first()
        .and_then(|c| c.total_strokes)
        .and_then(|n| u32::try_from(n).ok())
        .filter(|&n| n > 0)
        .ok_or(SeimeiError::UnsupportedCharacter(ch))
}

fn unavailable(ch: char, err: ureq::Error) -> SeimeiError {
    let reason = match err {
        ureq::Error::Status(status, _) => format!("server answered HTTP {}", status),
        ureq::Error::Transport(transport) => format!("network error: {}", transport),
    };
    SeimeiError::LookupUnavailable { ch, reason }
}
