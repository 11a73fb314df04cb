// Credential gate for the single demo account

use serde::{Deserialize, Serialize};

/// The only accepted username.
pub const DEMO_USERNAME: &str = "admin";
/// The only accepted password.
pub const DEMO_PASSWORD: &str = "admin123";

/// A username/password pair as entered at the login prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Compare against the hardcoded demo pair. The session flag this gates
    /// carries no identity and no expiry.
    pub fn verify(&self) -> bool {
        self.username == DEMO_USERNAME && self.password == DEMO_PASSWORD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_pair_verifies() {
        let credentials = Credentials {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        };
        assert!(credentials.verify());
    }

    #[test]
    fn test_wrong_pairs_rejected() {
        let wrong_password = Credentials {
            username: "admin".to_string(),
            password: "admin".to_string(),
        };
        assert!(!wrong_password.verify());

        let wrong_username = Credentials {
            username: "root".to_string(),
            password: "admin123".to_string(),
        };
        assert!(!wrong_username.verify());

        let case_differs = Credentials {
            username: "Admin".to_string(),
            password: "admin123".to_string(),
        };
        assert!(!case_differs.verify());

        let empty = Credentials {
            username: String::new(),
            password: String::new(),
        };
        assert!(!empty.verify());
    }
}
