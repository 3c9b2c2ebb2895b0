use thiserror::Error;

/// Why a hex color string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("color value is empty")]
    Empty,
    #[error("\"{input}\" contains characters other than 0-9, a-f, A-F")]
    InvalidCharacters { input: String },
    #[error("{}", short_reason(.len))]
    TooShort { len: usize },
    #[error("too long: {len} hex digits, expected 3 or 6")]
    TooLong { len: usize },
}

fn short_reason(len: &usize) -> String {
    if *len < 3 {
        format!("too short: {len} hex digits, expected 3 or 6")
    } else {
        format!("incomplete: {len} hex digits, expected 6 (or 3 shorthand)")
    }
}

/// Failures of the contrast pipeline and its configuration.
#[derive(Debug, Error)]
pub enum ContrastError {
    /// A color reached the luminance/ratio math without parsing cleanly.
    #[error("invalid color \"{input}\": {source}")]
    InvalidColor {
        input: String,
        #[source]
        source: ParseError,
    },
    #[error("{channel} channel is not a finite number")]
    NonFiniteChannel { channel: &'static str },
    #[error("invalid contrast policy: {0}")]
    InvalidPolicy(String),
    #[error("invalid contrast policy JSON: {0}")]
    PolicyJson(#[from] serde_json::Error),
}

impl ContrastError {
    pub fn invalid_color(input: &str, source: ParseError) -> Self {
        Self::InvalidColor {
            input: input.to_string(),
            source,
        }
    }
}

impl From<ContrastError> for napi::Error {
    fn from(err: ContrastError) -> Self {
        napi::Error::new(napi::Status::InvalidArg, err.to_string())
    }
}

impl From<ParseError> for napi::Error {
    fn from(err: ParseError) -> Self {
        napi::Error::new(napi::Status::InvalidArg, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_messages_distinguish_lengths() {
        let two = ParseError::TooShort { len: 2 }.to_string();
        let five = ParseError::TooShort { len: 5 }.to_string();
        assert!(two.starts_with("too short"), "{two}");
        assert!(five.starts_with("incomplete"), "{five}");
        assert_ne!(two, five);
    }

    #[test]
    fn invalid_color_names_input_and_reason() {
        let err = ContrastError::invalid_color("#12", ParseError::TooShort { len: 2 });
        let msg = err.to_string();
        assert!(msg.contains("#12"));
        assert!(msg.contains("too short"));
    }

    #[test]
    fn converts_to_napi_invalid_arg() {
        let err: napi::Error = ParseError::Empty.into();
        assert_eq!(err.status, napi::Status::InvalidArg);
        assert_eq!(err.reason, "color value is empty");
    }
}
