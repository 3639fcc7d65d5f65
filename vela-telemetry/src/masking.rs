//! Sensitive data masking for logs.
//!
//! Masks API keys and other credential material before it reaches log
//! output or the terminal.

/// Masks sensitive values for display.
#[derive(Debug, Clone)]
pub struct SensitiveDataMasker {
    /// Minimum length of string to consider for partial masking
    min_length: usize,
    /// Characters to show at start of masked value
    show_start: usize,
    /// Characters to show at end of masked value
    show_end: usize,
    /// Mask character
    mask_char: char,
}

impl Default for SensitiveDataMasker {
    fn default() -> Self {
        Self::new()
    }
}

impl SensitiveDataMasker {
    /// Create a new masker with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_length: 8,
            show_start: 3,
            show_end: 3,
            mask_char: '*',
        }
    }

    /// Create a masker with custom settings.
    #[must_use]
    pub fn with_settings(min_length: usize, show_start: usize, show_end: usize) -> Self {
        Self {
            min_length,
            show_start,
            show_end,
            mask_char: '*',
        }
    }

    /// Mask a known sensitive value.
    ///
    /// Values shorter than the minimum length are fully masked so their
    /// length is not recoverable from the output. Lengths are counted in
    /// characters, so multi-byte input masks cleanly.
    ///
    /// # Example
    ///
    /// ```
    /// use vela_telemetry::masking::SensitiveDataMasker;
    ///
    /// let masker = SensitiveDataMasker::new();
    /// let masked = masker.mask_value("my_secret_api_key_12345");
    /// assert!(masked.contains("***"));
    /// assert!(masked.starts_with("my_"));
    /// ```
    #[must_use]
    pub fn mask_value(&self, value: &str) -> String {
        let char_count = value.chars().count();
        if char_count < self.min_length {
            return self.mask_char.to_string().repeat(char_count.max(3));
        }

        let start: String = value.chars().take(self.show_start).collect();
        let end: String = if char_count > self.show_end {
            value.chars().skip(char_count - self.show_end).collect()
        } else {
            String::new()
        };

        format!("{}{}{}", start, self.mask_char.to_string().repeat(3), end)
    }
}

/// A wrapper type for sensitive values that masks them in Display/Debug.
#[derive(Clone)]
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    /// Wrap a value as sensitive.
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Get the inner value (use with caution).
    pub fn expose(&self) -> &T {
        &self.0
    }

    /// Consume and return the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl<T> std::fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl<T: serde::Serialize> serde::Serialize for Sensitive<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str("[REDACTED]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_value() {
        let masker = SensitiveDataMasker::new();

        // Long value
        let result = masker.mask_value("abcdefghijklmnop");
        assert_eq!(result, "abc***nop");

        // Short value
        let result = masker.mask_value("short");
        assert_eq!(result, "*****");
    }

    #[test]
    fn test_mask_value_empty() {
        let masker = SensitiveDataMasker::new();
        assert_eq!(masker.mask_value(""), "***");
    }

    #[test]
    fn test_mask_value_multibyte() {
        let masker = SensitiveDataMasker::new();

        // Cyrillic characters are two bytes each; masking must count
        // characters, not bytes.
        assert_eq!(masker.mask_value("ключ-key"), "клю***key");
        assert_eq!(masker.mask_value("ключи"), "*****");
        assert_eq!(masker.mask_value("秘密の鍵あいうえお"), "秘密の***うえお");
    }

    #[test]
    fn test_mask_value_custom_settings() {
        let masker = SensitiveDataMasker::with_settings(4, 2, 2);
        assert_eq!(masker.mask_value("abcdefgh"), "ab***gh");
    }

    #[test]
    fn test_sensitive_wrapper() {
        let secret = Sensitive::new("my_api_key");
        assert_eq!(format!("{secret}"), "[REDACTED]");
        assert_eq!(format!("{secret:?}"), "[REDACTED]");
        assert_eq!(*secret.expose(), "my_api_key");
    }

    #[test]
    fn test_sensitive_serialize() {
        let secret = Sensitive::new("my_api_key".to_string());
        let json = serde_json::to_string(&secret).unwrap();
        assert_eq!(json, r#""[REDACTED]""#);
    }

    #[test]
    fn test_sensitive_into_inner() {
        let secret = Sensitive::new(42u32);
        assert_eq!(secret.into_inner(), 42);
    }
}
