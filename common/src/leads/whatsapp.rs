//! WhatsApp deep-link construction.
//!
//! A prepared lead message becomes a `https://wa.me/<number>?text=<encoded>`
//! URL. Opening that URL is the terminal action of every submission path;
//! there is no delivery confirmation and no retry.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Destination number (E.164 without the leading `+`), shared by every form.
pub const WHATSAPP_NUMBER: &str = "601114371926";

/// Bytes escaped in the `text` query component. Matches JavaScript's
/// `encodeURIComponent`: alphanumerics and `- _ . ~ ! ' ( ) *` pass through,
/// everything else is percent-encoded as UTF-8.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'!')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*');

pub fn encode_text(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Builds the deep link carrying `text` to the shared consultancy number.
pub fn deep_link(text: &str) -> String {
    format!("https://wa.me/{}?text={}", WHATSAPP_NUMBER, encode_text(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    #[test]
    fn encoding_round_trips_byte_for_byte() {
        let message = "Hello! I would like to book a consultation.\n\n\
                       📝 *Consultation Details:*\n• Name: Jane Doe";
        let encoded = encode_text(message);
        let decoded = percent_decode_str(&encoded)
            .decode_utf8()
            .unwrap();
        assert_eq!(decoded, message);
    }

    #[test]
    fn deep_link_targets_the_shared_number() {
        let link = deep_link("hi");
        assert!(link.starts_with("https://wa.me/601114371926?text="));
    }

    #[test]
    fn newlines_spaces_and_emoji_are_escaped() {
        let encoded = encode_text("a b\n•");
        assert_eq!(encoded, "a%20b%0A%E2%80%A2");
    }

    #[test]
    fn unreserved_marks_pass_through() {
        assert_eq!(encode_text("Thank-you!_(*)~.'"), "Thank-you!_(*)~.'");
    }
}
