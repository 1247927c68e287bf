//! Detail data model.
//!
//! A detail is an email address with an optional display name. Both stores
//! share one table shape, so the same types describe primary and replica
//! rows; only the store-assigned [`DetailId`] differs between copies.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum length of an email, matching the `details.email` column.
pub const EMAIL_MAX: usize = 255;
/// Maximum length of a name, matching the `details.name` column.
pub const DETAIL_NAME_MAX: usize = 100;

/// Validation errors returned by the detail value constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailValidationError {
    EmptyEmail,
    EmailTooLong { max: usize },
    NameTooLong { max: usize },
}

impl fmt::Display for DetailValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmailTooLong { max } => write!(f, "email must be at most {max} characters"),
            Self::NameTooLong { max } => write!(f, "name must be at most {max} characters"),
        }
    }
}

impl std::error::Error for DetailValidationError {}

/// Store-assigned identifier of a detail row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetailId(i32);

impl DetailId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for DetailId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for DetailId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Required email address of a detail.
///
/// Only presence and the column bound are checked; the address format is not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate and construct an [`Email`].
    ///
    /// # Examples
    /// ```
    /// use detail_relay::domain::Email;
    ///
    /// let email = Email::new("a@x.com").expect("valid email");
    /// assert_eq!(email.as_ref(), "a@x.com");
    /// assert!(Email::new("   ").is_err());
    /// ```
    pub fn new(email: impl Into<String>) -> Result<Self, DetailValidationError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(DetailValidationError::EmptyEmail);
        }
        if email.chars().count() > EMAIL_MAX {
            return Err(DetailValidationError::EmailTooLong { max: EMAIL_MAX });
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl TryFrom<String> for Email {
    type Error = DetailValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Optional display name of a detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DetailName(String);

impl DetailName {
    /// Validate and construct a [`DetailName`]. Empty names are allowed.
    pub fn new(name: impl Into<String>) -> Result<Self, DetailValidationError> {
        let name = name.into();
        if name.chars().count() > DETAIL_NAME_MAX {
            return Err(DetailValidationError::NameTooLong {
                max: DETAIL_NAME_MAX,
            });
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for DetailName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<DetailName> for String {
    fn from(value: DetailName) -> Self {
        value.0
    }
}

impl TryFrom<String> for DetailName {
    type Error = DetailValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Unsaved detail submitted to a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailDraft {
    email: Email,
    name: Option<DetailName>,
}

impl DetailDraft {
    /// Build a draft from validated parts.
    #[must_use]
    pub fn new(email: Email, name: Option<DetailName>) -> Self {
        Self { email, name }
    }

    /// Validate raw request fields into a draft.
    ///
    /// # Examples
    /// ```
    /// use detail_relay::domain::DetailDraft;
    ///
    /// let draft = DetailDraft::try_from_parts("a@x.com", Some("Ann")).expect("valid draft");
    /// assert_eq!(draft.name().map(AsRef::as_ref), Some("Ann"));
    /// ```
    pub fn try_from_parts(
        email: impl Into<String>,
        name: Option<impl Into<String>>,
    ) -> Result<Self, DetailValidationError> {
        let email = Email::new(email)?;
        let name = name.map(DetailName::new).transpose()?;
        Ok(Self { email, name })
    }

    /// Email to persist.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Optional name to persist.
    pub fn name(&self) -> Option<&DetailName> {
        self.name.as_ref()
    }

    /// Attach a store-assigned identifier.
    #[must_use]
    pub fn into_detail(self, id: DetailId) -> Detail {
        Detail {
            id,
            email: self.email,
            name: self.name,
        }
    }
}

/// Persisted detail row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail {
    id: DetailId,
    email: Email,
    name: Option<DetailName>,
}

impl Detail {
    /// Store-assigned identifier.
    pub fn id(&self) -> DetailId {
        self.id
    }

    /// Stored email.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Stored name, if any.
    pub fn name(&self) -> Option<&DetailName> {
        self.name.as_ref()
    }

    /// Drop the identifier, keeping the payload for re-insertion elsewhere.
    #[must_use]
    pub fn to_draft(&self) -> DetailDraft {
        DetailDraft::new(self.email.clone(), self.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", DetailValidationError::EmptyEmail)]
    #[case("  \t", DetailValidationError::EmptyEmail)]
    fn email_rejects_blank_values(#[case] raw: &str, #[case] expected: DetailValidationError) {
        assert_eq!(Email::new(raw), Err(expected));
    }

    #[rstest]
    fn email_enforces_column_bound() {
        let at_limit = "e".repeat(EMAIL_MAX);
        assert!(Email::new(at_limit).is_ok());

        let over_limit = "e".repeat(EMAIL_MAX + 1);
        assert_eq!(
            Email::new(over_limit),
            Err(DetailValidationError::EmailTooLong { max: EMAIL_MAX })
        );
    }

    #[rstest]
    fn name_enforces_column_bound() {
        assert!(DetailName::new("").is_ok());
        assert_eq!(
            DetailName::new("n".repeat(DETAIL_NAME_MAX + 1)),
            Err(DetailValidationError::NameTooLong {
                max: DETAIL_NAME_MAX
            })
        );
    }

    #[rstest]
    fn draft_without_name_keeps_none() {
        let draft = DetailDraft::try_from_parts("a@x.com", None::<String>).expect("valid draft");
        assert!(draft.name().is_none());
    }

    #[rstest]
    fn into_detail_and_back_preserves_payload() {
        let draft = DetailDraft::try_from_parts("a@x.com", Some("Ann")).expect("valid draft");
        let detail = draft.clone().into_detail(DetailId::new(7));

        assert_eq!(detail.id(), DetailId::new(7));
        assert_eq!(detail.to_draft(), draft);
    }

    #[rstest]
    fn email_deserialisation_validates() {
        let result: Result<Email, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
