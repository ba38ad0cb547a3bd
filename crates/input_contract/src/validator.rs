use std::fmt;
use std::rc::Rc;

/// Injected validity predicate for a field value.
///
/// A plain shared closure; fields run it against the normalized value on every change and
/// on blur. Two handles compare equal only when they wrap the same closure.
#[derive(Clone)]
pub struct Validator(Rc<dyn Fn(&str) -> bool>);

impl Validator {
    /// Wraps a predicate.
    pub fn new(predicate: impl Fn(&str) -> bool + 'static) -> Self {
        Self(Rc::new(predicate))
    }

    /// Runs the predicate.
    pub fn check(&self, value: &str) -> bool {
        (self.0)(value)
    }
}

impl<F> From<F> for Validator
where
    F: Fn(&str) -> bool + 'static,
{
    fn from(predicate: F) -> Self {
        Self::new(predicate)
    }
}

impl PartialEq for Validator {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validator(..)")
    }
}

/// Validity of `value`; a field without a validator is always valid.
pub fn validate(value: &str, validator: Option<&Validator>) -> bool {
    validator.map_or(true, |validator| validator.check(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_validator_accepts_everything() {
        assert!(validate("", None));
        assert!(validate("anything at all", None));
    }

    #[test]
    fn validator_result_is_returned_verbatim() {
        let min_len = Validator::new(|value| value.chars().count() >= 3);
        assert!(!validate("ab", Some(&min_len)));
        assert!(validate("abc", Some(&min_len)));
    }

    #[test]
    fn clones_share_identity_but_new_wrappers_do_not() {
        let predicate = |value: &str| !value.is_empty();
        let first = Validator::new(predicate);
        let clone = first.clone();
        let second = Validator::new(predicate);

        assert_eq!(first, clone);
        assert_ne!(first, second);
    }
}
