//! Pure validation rules for registration input.
//!
//! Both predicates are stateless and side-effect-free. The account store is
//! their only caller within this crate, but they are usable on their own.

/// Check that `candidate` has the shape `local-part@domain`.
///
/// The domain must consist of at least two non-empty labels separated by
/// dots, e.g. `example@domain.com`. This is a shape check only; no DNS or
/// deliverability lookup is performed.
pub fn validate_email(candidate: &str) -> bool {
    match candidate.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.split('.').count() >= 2
                && domain.split('.').all(|label| !label.is_empty())
        }
        None => false,
    }
}

/// Check that `candidate` is an acceptable password.
///
/// A password must have at least 6 characters and contain at least one ASCII
/// digit. There is no uppercase, lowercase, or symbol requirement.
pub fn validate_password(candidate: &str) -> bool {
    candidate.chars().count() >= 6 && candidate.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod email_tests {
    use super::validate_email;

    #[test]
    fn accepts_well_formed_address() {
        assert!(validate_email("teste@teste.com"));
    }

    #[test]
    fn accepts_multi_label_domain() {
        assert!(validate_email("someone@mail.example.org"));
    }

    #[test]
    fn rejects_missing_at_symbol() {
        assert!(!validate_email("email_invalido"));
    }

    #[test]
    fn rejects_empty_string() {
        assert!(!validate_email(""));
    }

    #[test]
    fn rejects_domain_without_separator() {
        assert!(!validate_email("user@domain"));
    }

    #[test]
    fn rejects_empty_local_part() {
        assert!(!validate_email("@domain.com"));
    }

    #[test]
    fn rejects_empty_domain() {
        assert!(!validate_email("user@"));
    }

    #[test]
    fn rejects_empty_domain_labels() {
        assert!(!validate_email("user@.com"));
        assert!(!validate_email("user@domain."));
    }
}
