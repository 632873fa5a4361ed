//! Codes attached to generator log messages.
//!
//! Every warning and notable event the generators log carries one of these codes as a
//! structured `code` field, so build output can be grepped or filtered by code. Each code
//! has a message template with positional `{}` placeholders.

use std::fmt;

/// A coded, templated log message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageCode {
    /// No catalog files were configured or discovered.
    NoMessageFiles,
    /// A catalog is missing its class-name key.
    MissingClassName,
    /// A configured catalog file does not exist.
    MessageFileNotFound,
    /// A catalog could not be read or parsed.
    MessageFileUnreadable,
    /// A source file was generated.
    SourceGenerated,
    /// A transcoded properties file was written.
    PropertiesWritten,
    /// An optional media-type override file is absent.
    MediaTypesNotFound,
    /// Media types were merged from a file.
    MediaTypesRead,
    /// The media-type enumeration was generated.
    MediaTypeGenerated,
}

impl MessageCode {
    /// The stable code, e.g. `GEN-001`.
    pub fn code(&self) -> &'static str {
        match self {
            MessageCode::NoMessageFiles => "GEN-001",
            MessageCode::MissingClassName => "GEN-002",
            MessageCode::MessageFileNotFound => "GEN-003",
            MessageCode::MessageFileUnreadable => "GEN-004",
            MessageCode::SourceGenerated => "GEN-005",
            MessageCode::PropertiesWritten => "GEN-006",
            MessageCode::MediaTypesNotFound => "GEN-007",
            MessageCode::MediaTypesRead => "GEN-008",
            MessageCode::MediaTypeGenerated => "GEN-009",
        }
    }

    /// The message template.
    pub fn template(&self) -> &'static str {
        match self {
            MessageCode::NoMessageFiles => {
                "No message files were supplied so no code classes were created"
            }
            MessageCode::MissingClassName => "{}: required key '{}' not found, skipping",
            MessageCode::MessageFileNotFound => "Message file not found: {}",
            MessageCode::MessageFileUnreadable => "Message file {} could not be processed: {}",
            MessageCode::SourceGenerated => "Generated {} from {}",
            MessageCode::PropertiesWritten => "Wrote properties file {}",
            MessageCode::MediaTypesNotFound => "No media types file at {}",
            MessageCode::MediaTypesRead => "Read {} new media types from {}",
            MessageCode::MediaTypeGenerated => "Generated {} with {} media types",
        }
    }

    /// Fill the template's `{}` placeholders in order.
    ///
    /// Surplus placeholders are left as `{}`; surplus arguments are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use javagen_core::MessageCode;
    ///
    /// let msg = MessageCode::MessageFileNotFound.format(&[&"a_messages.xml"]);
    /// assert_eq!(msg, "Message file not found: a_messages.xml");
    /// ```
    pub fn format(&self, args: &[&dyn fmt::Display]) -> String {
        let mut out = String::new();
        let mut args = args.iter();
        let mut parts = self.template().split("{}").peekable();

        while let Some(part) = parts.next() {
            out.push_str(part);
            if parts.peek().is_some() {
                match args.next() {
                    Some(arg) => out.push_str(&arg.to_string()),
                    None => out.push_str("{}"),
                }
            }
        }

        out
    }
}

impl fmt::Display for MessageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
