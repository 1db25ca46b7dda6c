//! Holdings items attached to a bibliographic record.
//!
//! An item is one physical or online copy. Classification only looks at a
//! handful of item attributes: whether the copy is suppressed, whether it is
//! online-only, its call number, and its item type marker.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Call-number scheme of a holdings item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CallNumberScheme {
    /// Library of Congress
    Lc,
    /// Library of Congress, periodical shelving
    LcPeriodical,
    /// Dewey Decimal
    Dewey,
    /// Dewey Decimal, periodical shelving
    DeweyPeriodical,
    /// Superintendent of Documents
    Sudoc,
    /// Alphanumeric or any other local scheme
    #[default]
    Alphanum,
}

impl CallNumberScheme {
    /// Map a holdings scheme code to its scheme; unknown codes are alphanumeric.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "LC" => Self::Lc,
            "LCPER" => Self::LcPeriodical,
            "DEWEY" => Self::Dewey,
            "DEWEYPER" => Self::DeweyPeriodical,
            "SUDOC" => Self::Sudoc,
            _ => Self::Alphanum,
        }
    }
}

impl fmt::Display for CallNumberScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lc => write!(f, "LC"),
            Self::LcPeriodical => write!(f, "LCPER"),
            Self::Dewey => write!(f, "DEWEY"),
            Self::DeweyPeriodical => write!(f, "DEWEYPER"),
            Self::Sudoc => write!(f, "SUDOC"),
            Self::Alphanum => write!(f, "ALPHANUM"),
        }
    }
}

/// How a holdings item is accessed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AccessType {
    /// A copy held at a library location
    #[default]
    AtLibrary,
    /// An online-only copy
    Online,
    /// A value the holdings source sent that is not understood
    Unrecognized(String),
}

impl AccessType {
    /// Map a holdings access code to its access type.
    ///
    /// ```
    /// use marcfacet::AccessType;
    ///
    /// assert_eq!(AccessType::from_code("Online"), AccessType::Online);
    /// assert_eq!(AccessType::from_code("at the library"), AccessType::AtLibrary);
    /// assert!(!AccessType::from_code("on order").is_online());
    /// ```
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "online" | "internet" => Self::Online,
            "at the library" | "at library" | "physical" | "" => Self::AtLibrary,
            _ => Self::Unrecognized(code.to_string()),
        }
    }

    /// Only an explicit online access counts; unrecognized values do not.
    #[must_use]
    pub fn is_online(&self) -> bool {
        matches!(self, Self::Online)
    }
}

/// A single holdings item (copy) of a record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HoldingsItem {
    /// Library code
    pub library: String,
    /// Home location code
    pub home_location: String,
    /// Current location code
    pub current_location: String,
    /// Call-number scheme
    pub scheme: CallNumberScheme,
    /// Raw call number
    pub call_number: String,
    /// Access type
    pub access: AccessType,
    /// Item type marker (`DATABASE` flags a database)
    pub item_type: Option<String>,
    /// Suppressed items are ignored by classification
    pub suppressed: bool,
}

impl HoldingsItem {
    /// Create a builder for an item at the given library.
    ///
    /// # Examples
    ///
    /// ```
    /// use marcfacet::{AccessType, HoldingsItem};
    ///
    /// let item = HoldingsItem::builder("SUL")
    ///     .call_number("ZDVD 12345")
    ///     .home_location("STACKS")
    ///     .build();
    /// assert_eq!(item.access, AccessType::AtLibrary);
    /// assert!(item.is_physical());
    /// ```
    #[must_use]
    pub fn builder(library: &str) -> HoldingsItemBuilder {
        HoldingsItemBuilder {
            item: HoldingsItem {
                library: library.to_string(),
                ..HoldingsItem::default()
            },
        }
    }

    /// Online-only copy.
    #[must_use]
    pub fn is_online(&self) -> bool {
        self.access.is_online()
    }

    /// A copy that can be physically held: not suppressed and not online-only.
    #[must_use]
    pub fn is_physical(&self) -> bool {
        !self.suppressed && !self.is_online()
    }

    /// Case-insensitive item type comparison.
    #[must_use]
    pub fn has_item_type(&self, item_type: &str) -> bool {
        self.item_type
            .as_deref()
            .is_some_and(|t| t.trim().eq_ignore_ascii_case(item_type))
    }
}

/// Builder for fluently constructing holdings items
#[derive(Debug)]
pub struct HoldingsItemBuilder {
    item: HoldingsItem,
}

impl HoldingsItemBuilder {
    /// Set the home location (also used as current location until overridden)
    #[must_use]
    pub fn home_location(mut self, location: &str) -> Self {
        self.item.home_location = location.to_string();
        if self.item.current_location.is_empty() {
            self.item.current_location = location.to_string();
        }
        self
    }

    /// Set the current location
    #[must_use]
    pub fn current_location(mut self, location: &str) -> Self {
        self.item.current_location = location.to_string();
        self
    }

    /// Set the call-number scheme
    #[must_use]
    pub fn scheme(mut self, scheme: CallNumberScheme) -> Self {
        self.item.scheme = scheme;
        self
    }

    /// Set the raw call number
    #[must_use]
    pub fn call_number(mut self, call_number: &str) -> Self {
        self.item.call_number = call_number.to_string();
        self
    }

    /// Set the access type
    #[must_use]
    pub fn access(mut self, access: AccessType) -> Self {
        self.item.access = access;
        self
    }

    /// Mark the item as an online-only copy
    #[must_use]
    pub fn online(self) -> Self {
        self.access(AccessType::Online)
    }

    /// Set the item type marker
    #[must_use]
    pub fn item_type(mut self, item_type: &str) -> Self {
        self.item.item_type = Some(item_type.to_string());
        self
    }

    /// Set the suppressed flag
    #[must_use]
    pub fn suppressed(mut self, suppressed: bool) -> Self {
        self.item.suppressed = suppressed;
        self
    }

    /// Build the item
    #[must_use]
    pub fn build(self) -> HoldingsItem {
        self.item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_from_code() {
        assert_eq!(CallNumberScheme::from_code("LC"), CallNumberScheme::Lc);
        assert_eq!(
            CallNumberScheme::from_code("lcper"),
            CallNumberScheme::LcPeriodical
        );
        assert_eq!(
            CallNumberScheme::from_code("DEWEYPER"),
            CallNumberScheme::DeweyPeriodical
        );
        assert_eq!(CallNumberScheme::from_code("SUDOC"), CallNumberScheme::Sudoc);
        assert_eq!(CallNumberScheme::from_code("ASIS"), CallNumberScheme::Alphanum);
        assert_eq!(CallNumberScheme::Dewey.to_string(), "DEWEY");
    }

    #[test]
    fn test_access_type() {
        assert!(AccessType::from_code("INTERNET").is_online());
        assert!(AccessType::Online.is_online());
        assert!(!AccessType::AtLibrary.is_online());
        let odd = AccessType::from_code("in transit somewhere");
        assert_eq!(odd, AccessType::Unrecognized("in transit somewhere".to_string()));
        assert!(!odd.is_online());
    }

    #[test]
    fn test_physical_copy() {
        let held = HoldingsItem::builder("GREEN").call_number("F152 .A28").build();
        assert!(held.is_physical());

        let online = HoldingsItem::builder("SUL").online().build();
        assert!(!online.is_physical());

        let suppressed = HoldingsItem::builder("GREEN").suppressed(true).build();
        assert!(!suppressed.is_physical());

        let unrecognized = HoldingsItem::builder("GREEN")
            .access(AccessType::Unrecognized("??".to_string()))
            .build();
        assert!(unrecognized.is_physical());
    }

    #[test]
    fn test_item_type_and_locations() {
        let item = HoldingsItem::builder("SUL")
            .home_location("INTERNET")
            .current_location("CHECKEDOUT")
            .item_type("database")
            .build();
        assert!(item.has_item_type("DATABASE"));
        assert!(!item.has_item_type("STKS"));
        assert_eq!(item.home_location, "INTERNET");
        assert_eq!(item.current_location, "CHECKEDOUT");
    }
}
