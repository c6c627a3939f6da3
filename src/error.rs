// src/error.rs
use thiserror::Error;

/// Boxed so transport, parse and structural errors share one path up to the
/// frontend. `Send + Sync` because the GUI hands results across threads.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
pub type Result<T> = std::result::Result<T, BoxError>;

/// The page didn't look the way the scraper expects.
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("{what} not found (selector `{selector}`)")]
    Missing {
        what: &'static str,
        selector: &'static str,
    },

    #[error("{what}: expected at least {expected}, found {found} (selector `{selector}`)")]
    TooFew {
        what: &'static str,
        selector: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    #[error("cannot resolve link `{href}` against `{base}`")]
    Link { base: String, href: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_selector() {
        let e = SheetError::Missing { what: "inventory section", selector: ".inv-section" };
        assert_eq!(e.to_string(), "inventory section not found (selector `.inv-section`)");

        let e = SheetError::TooFew {
            what: "character links",
            selector: ".cpnavin a",
            expected: 2,
            found: 1,
        };
        assert!(e.to_string().contains("expected at least 2, found 1"));
    }

    #[test]
    fn boxes_into_shared_result() {
        fn fails() -> Result<()> {
            Err(SheetError::Missing { what: "x", selector: "y" })?
        }
        let err = fails().unwrap_err();
        assert!(err.downcast_ref::<SheetError>().is_some());
    }
}
