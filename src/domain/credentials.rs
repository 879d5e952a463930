/// Checks a presented secret against whatever this verifier guards.
///
/// PINs and the admin passphrase both go through this seam, so a hashed
/// or external secret store can replace [`PlainText`] without touching the
/// handlers.
pub trait CredentialVerifier {
    fn verify(&self, secret: &str) -> bool;
}

/// Verbatim comparison against a stored secret. Not a security boundary.
#[derive(Debug, Clone, Copy)]
pub struct PlainText<'a>(pub &'a str);

impl CredentialVerifier for PlainText<'_> {
    fn verify(&self, secret: &str) -> bool {
        self.0 == secret
    }
}

/// The shared passphrase guarding dashboard and delete.
#[derive(Debug, Clone)]
pub struct AdminPassphrase(String);

impl AdminPassphrase {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }
}

impl CredentialVerifier for AdminPassphrase {
    fn verify(&self, secret: &str) -> bool {
        PlainText(&self.0).verify(secret)
    }
}
