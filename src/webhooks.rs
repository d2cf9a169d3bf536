use base64::Engine;
use hmac::{Hmac, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Validates the `X-Square-Signature` header of an inbound webhook
/// notification.
///
/// The signature is the base64-encoded HMAC-SHA1 of the webhook URL
/// concatenated with the raw request body, keyed with the webhook signature
/// key from the application dashboard. The comparison does not short-circuit
/// on the first differing byte.
///
/// A mismatch is the normal outcome for a forged or corrupted notification,
/// so this returns `false` rather than an error.
#[must_use]
pub fn validate_webhook(
    webhook_url: &str,
    webhook_signature_key: &str,
    body: &str,
    square_signature: &str,
) -> bool {
    let Ok(provided) = base64::engine::general_purpose::STANDARD.decode(square_signature) else {
        return false;
    };
    let mut mac = HmacSha1::new_from_slice(webhook_signature_key.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(webhook_url.as_bytes());
    mac.update(body.as_bytes());
    mac.verify_slice(&provided).is_ok()
}

#[cfg(test)]
mod tests {
    use base64::Engine;
    use hmac::{Hmac, Mac};
    use sha1::Sha1;

    use super::validate_webhook;

    const URL: &str = "https://example.com/square/events";
    const KEY: &str = "signature-key-0001";
    const BODY: &str = r#"{"merchant_id":"m1","event_type":"PAYMENT_UPDATED"}"#;

    fn sign(url: &str, key: &str, body: &str) -> String {
        let mut mac = Hmac::<Sha1>::new_from_slice(key.as_bytes()).unwrap();
        mac.update(url.as_bytes());
        mac.update(body.as_bytes());
        base64::engine::general_purpose::STANDARD.encode(mac.finalize().into_bytes())
    }

    #[test]
    fn accepts_its_own_signature() {
        let signature = sign(URL, KEY, BODY);
        assert!(validate_webhook(URL, KEY, BODY, &signature));
    }

    #[test]
    fn rejects_perturbed_url_body_or_signature() {
        let signature = sign(URL, KEY, BODY);

        let mut other_url = URL.to_string();
        other_url.pop();
        other_url.push('t');
        assert!(!validate_webhook(&other_url, KEY, BODY, &signature));

        let other_body = BODY.replace("m1", "m2");
        assert!(!validate_webhook(URL, KEY, &other_body, &signature));

        // Flip one bit of the decoded signature.
        let mut raw = base64::engine::general_purpose::STANDARD
            .decode(&signature)
            .unwrap();
        raw[0] ^= 0x01;
        let flipped = base64::engine::general_purpose::STANDARD.encode(raw);
        assert!(!validate_webhook(URL, KEY, BODY, &flipped));
    }

    #[test]
    fn rejects_undecodable_signature() {
        assert!(!validate_webhook(URL, KEY, BODY, "not base64 !!!"));
    }

    #[test]
    fn rejects_wrong_key() {
        let signature = sign(URL, "some-other-key", BODY);
        assert!(!validate_webhook(URL, KEY, BODY, &signature));
    }
}
