//! Device construction options
//!
//! Fixed configuration handed to the voice SDK alongside the credential.

use serde::Deserialize;
use std::fmt;

/// Audio codecs the SDK can negotiate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Codec {
    Opus,
    Pcmu,
}

impl Codec {
    pub fn as_str(&self) -> &'static str {
        match self {
            Codec::Opus => "opus",
            Codec::Pcmu => "pcmu",
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options passed to [`DeviceFactory::create`](super::DeviceFactory::create).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeviceOptions {
    /// Preferred codec order, primary first
    pub codec_preferences: Vec<Codec>,

    /// Surface the remote ringing state before the call is answered
    pub enable_ringing_state: bool,

    /// Play DTMF tones locally as feedback when digits are sent
    pub fake_local_dtmf: bool,
}

impl Default for DeviceOptions {
    fn default() -> Self {
        Self {
            codec_preferences: vec![Codec::Opus, Codec::Pcmu],
            enable_ringing_state: true,
            fake_local_dtmf: true,
        }
    }
}

impl DeviceOptions {
    /// Codec order as SDK-facing names, e.g. `["opus", "pcmu"]`.
    pub fn codec_names(&self) -> Vec<&'static str> {
        self.codec_preferences.iter().map(Codec::as_str).collect()
    }
}
