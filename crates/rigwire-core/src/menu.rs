//! Extended menu items addressed by (group, section, item).
//!
//! Many text-family rigs expose hundreds of configuration settings through a
//! single "extended menu" command whose address is three two-digit fields.
//! A [`MenuTable`] maps each [`MenuToken`] to a [`MenuItem`] describing its
//! value width, range and whether it needs optional hardware.
//!
//! # Wire form
//!
//! ```text
//! <mnemonic><group:02><section:02><item:02><value>;
//! ```
//!
//! The value field width comes from the item descriptor, never from the
//! device response.

use std::collections::HashMap;
use std::fmt;

use tracing::warn;

use crate::error::{Error, Result};
use crate::hardware::{DetectedHardware, OptionalHardware};

/// Composite key of one extended menu setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MenuToken {
    /// Menu group (01-99).
    pub group: u8,
    /// Section within the group (01-99).
    pub section: u8,
    /// Item within the section (01-99).
    pub item: u8,
}

impl MenuToken {
    /// Create a token from its three address components.
    pub const fn new(group: u8, section: u8, item: u8) -> Self {
        MenuToken {
            group,
            section,
            item,
        }
    }

    /// The six-digit wire address (`GGSSII`).
    pub fn address(&self) -> String {
        format!("{:02}{:02}{:02}", self.group, self.section, self.item)
    }

    /// Parse a six-digit `GGSSII` address.
    pub fn parse_address(s: &str) -> Option<MenuToken> {
        if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let group = s[0..2].parse().ok()?;
        let section = s[2..4].parse().ok()?;
        let item = s[4..6].parse().ok()?;
        Some(MenuToken::new(group, section, item))
    }
}

impl fmt::Display for MenuToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}-{:02}", self.group, self.section, self.item)
    }
}

/// What kind of value an item holds. Numbers and strings never mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    /// Decimal value in `min..=max`.
    Numeric {
        /// Inclusive lower bound.
        min: i32,
        /// Inclusive upper bound.
        max: i32,
        /// Whether the wire form carries an explicit `+`/`-` sign.
        signed: bool,
    },
    /// Free text of at most `digits` characters.
    Text,
}

/// One extended menu setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    /// Address of this item.
    pub token: MenuToken,
    /// Symbolic name (e.g. `SSB_AF_TREBLE`).
    pub name: &'static str,
    /// Width of the value field in characters, excluding any sign.
    pub digits: u8,
    /// Numeric range or text flag.
    pub kind: MenuKind,
    /// Optional hardware that must be confirmed before the item is touched.
    pub requires: Option<OptionalHardware>,
}

impl MenuItem {
    /// An unsigned numeric item.
    pub const fn number(token: MenuToken, name: &'static str, digits: u8, min: i32, max: i32) -> Self {
        MenuItem {
            token,
            name,
            digits,
            kind: MenuKind::Numeric {
                min,
                max,
                signed: false,
            },
            requires: None,
        }
    }

    /// A signed numeric item.
    pub const fn signed(token: MenuToken, name: &'static str, digits: u8, min: i32, max: i32) -> Self {
        MenuItem {
            token,
            name,
            digits,
            kind: MenuKind::Numeric {
                min,
                max,
                signed: true,
            },
            requires: None,
        }
    }

    /// A text item of at most `digits` characters.
    pub const fn text(token: MenuToken, name: &'static str, digits: u8) -> Self {
        MenuItem {
            token,
            name,
            digits,
            kind: MenuKind::Text,
            requires: None,
        }
    }

    /// Mark this item as needing optional hardware.
    pub const fn requiring(mut self, hw: OptionalHardware) -> Self {
        self.requires = Some(hw);
        self
    }

    /// Validate `value` and render it in wire form.
    ///
    /// Numeric values are zero-padded to `digits`; signed items get a
    /// leading `+` or `-`. Text values are sent as-is.
    pub fn format_value(&self, value: &MenuValue) -> Result<String> {
        match (self.kind, value) {
            (MenuKind::Numeric { min, max, signed }, MenuValue::Number(n)) => {
                let n = *n;
                if n < min || n > max {
                    return Err(Error::out_of_range(
                        self.name,
                        i64::from(n),
                        i64::from(min),
                        i64::from(max),
                    ));
                }
                let width = usize::from(self.digits);
                if signed {
                    let sign = if n < 0 { '-' } else { '+' };
                    Ok(format!("{sign}{:0width$}", n.unsigned_abs()))
                } else {
                    Ok(format!("{n:0width$}"))
                }
            }
            (MenuKind::Text, MenuValue::Text(s)) => {
                let len = s.chars().count();
                if len > usize::from(self.digits) {
                    return Err(Error::out_of_range(
                        format!("{} length", self.name),
                        len as i64,
                        0,
                        i64::from(self.digits),
                    ));
                }
                if s.contains(';') || !s.is_ascii() {
                    return Err(Error::Config(format!(
                        "{} value contains characters the wire form cannot carry",
                        self.name
                    )));
                }
                Ok(s.clone())
            }
            (MenuKind::Text, MenuValue::Number(_)) => Err(Error::Config(format!(
                "{} takes a string value",
                self.name
            ))),
            (MenuKind::Numeric { .. }, MenuValue::Text(_)) => Err(Error::Config(format!(
                "{} takes a numeric value",
                self.name
            ))),
        }
    }

    /// Parse a wire value field for this item.
    ///
    /// The field is length-checked against the descriptor before it is
    /// interpreted.
    pub fn parse_value(&self, field: &str) -> Result<MenuValue> {
        match self.kind {
            MenuKind::Text => {
                if field.len() > usize::from(self.digits) {
                    return Err(Error::Garbled(format!(
                        "{}: {} characters exceeds width {}",
                        self.name,
                        field.len(),
                        self.digits
                    )));
                }
                Ok(MenuValue::Text(field.trim_end().to_string()))
            }
            MenuKind::Numeric { signed, .. } => {
                let (sign, body) = if signed {
                    match field.as_bytes().first() {
                        Some(b'+') => (1, &field[1..]),
                        Some(b'-') => (-1, &field[1..]),
                        _ => {
                            return Err(Error::Garbled(format!(
                                "{}: expected signed field, got {field:?}",
                                self.name
                            )));
                        }
                    }
                } else {
                    (1, field)
                };
                if body.is_empty()
                    || body.len() > usize::from(self.digits)
                    || !body.bytes().all(|b| b.is_ascii_digit())
                {
                    return Err(Error::Garbled(format!(
                        "{}: malformed numeric field {field:?}",
                        self.name
                    )));
                }
                let n: i32 = body
                    .parse()
                    .map_err(|_| Error::Garbled(format!("{}: bad number {body:?}", self.name)))?;
                Ok(MenuValue::Number(sign * n))
            }
        }
    }
}

/// A menu value as seen by callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuValue {
    /// A numeric setting.
    Number(i32),
    /// A text setting.
    Text(String),
}

impl fmt::Display for MenuValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuValue::Number(n) => write!(f, "{n}"),
            MenuValue::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Token-keyed registry of a model's extended menu.
#[derive(Debug, Clone, Default)]
pub struct MenuTable {
    items: HashMap<MenuToken, MenuItem>,
    by_name: HashMap<String, MenuToken>,
}

impl MenuTable {
    /// Build a table from a list of items. The first occurrence of a token
    /// wins; later duplicates are dropped with a warning.
    pub fn new(items: &[MenuItem]) -> Self {
        let mut table = MenuTable::default();
        for item in items {
            if table.items.contains_key(&item.token) {
                warn!(token = %item.token, name = item.name, "duplicate menu token ignored");
                continue;
            }
            table.by_name.insert(item.name.to_ascii_uppercase(), item.token);
            table.items.insert(item.token, *item);
        }
        table
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the table has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by token.
    pub fn get(&self, token: MenuToken) -> Option<&MenuItem> {
        self.items.get(&token)
    }

    /// Resolve a symbolic name (case-insensitive) to its token.
    pub fn token_for(&self, name: &str) -> Option<MenuToken> {
        self.by_name.get(&name.to_ascii_uppercase()).copied()
    }

    /// Resolve a token to its item, failing with [`Error::Config`] for an
    /// unknown token and [`Error::Unavailable`] when the item needs hardware
    /// that `detected` does not confirm.
    pub fn check_access(&self, token: MenuToken, detected: &DetectedHardware) -> Result<&MenuItem> {
        let item = self
            .get(token)
            .ok_or_else(|| Error::Config(format!("unknown menu token {token}")))?;
        if let Some(hw) = item.requires {
            if !detected.confirms(hw) {
                warn!(name = item.name, hardware = %hw, "menu item requires undetected hardware");
                return Err(Error::Unavailable(format!("{} requires {hw}", item.name)));
            }
        }
        Ok(item)
    }

    /// Iterate over all items in token order.
    pub fn iter(&self) -> impl Iterator<Item = &MenuItem> {
        let mut items: Vec<&MenuItem> = self.items.values().collect();
        items.sort_by_key(|item| item.token);
        items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TREBLE: MenuItem = MenuItem::signed(MenuToken::new(1, 1, 1), "SSB_AF_TREBLE", 3, -20, 10);
    const AGC_MID: MenuItem = MenuItem::number(MenuToken::new(1, 1, 5), "SSB_AGC_MID", 4, 20, 4000);
    const MY_CALL: MenuItem = MenuItem::text(MenuToken::new(7, 1, 4), "DISP_MY_CALL", 10);
    const AMP_POWER: MenuItem = MenuItem::number(MenuToken::new(3, 7, 5), "OPT_HF_MAX_PWR", 3, 5, 100)
        .requiring(OptionalHardware::Amplifier);

    fn table() -> MenuTable {
        MenuTable::new(&[TREBLE, AGC_MID, MY_CALL, AMP_POWER])
    }

    // ---------------------------------------------------------------
    // Tokens
    // ---------------------------------------------------------------

    #[test]
    fn token_address_is_six_digits() {
        assert_eq!(MenuToken::new(1, 2, 3).address(), "010203");
        assert_eq!(MenuToken::new(11, 1, 37).address(), "110137");
    }

    #[test]
    fn token_parse_address() {
        assert_eq!(
            MenuToken::parse_address("030705"),
            Some(MenuToken::new(3, 7, 5))
        );
        assert_eq!(MenuToken::parse_address("0307"), None);
        assert_eq!(MenuToken::parse_address("03a705"), None);
    }

    #[test]
    fn token_display() {
        assert_eq!(MenuToken::new(3, 7, 5).to_string(), "03-07-05");
    }

    // ---------------------------------------------------------------
    // Formatting
    // ---------------------------------------------------------------

    #[test]
    fn format_unsigned_zero_padded() {
        assert_eq!(AGC_MID.format_value(&MenuValue::Number(300)).unwrap(), "0300");
    }

    #[test]
    fn format_signed_carries_sign() {
        assert_eq!(TREBLE.format_value(&MenuValue::Number(-5)).unwrap(), "-005");
        assert_eq!(TREBLE.format_value(&MenuValue::Number(7)).unwrap(), "+007");
        assert_eq!(TREBLE.format_value(&MenuValue::Number(0)).unwrap(), "+000");
    }

    #[test]
    fn format_out_of_range_rejected() {
        let err = TREBLE.format_value(&MenuValue::Number(11)).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { value: 11, min: -20, max: 10, .. }));
        let err = AGC_MID.format_value(&MenuValue::Number(19)).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { .. }));
    }

    #[test]
    fn format_text_raw() {
        let v = MenuValue::Text("N0CALL".into());
        assert_eq!(MY_CALL.format_value(&v).unwrap(), "N0CALL");
    }

    #[test]
    fn format_text_too_long() {
        let v = MenuValue::Text("ABCDEFGHIJK".into());
        assert!(matches!(
            MY_CALL.format_value(&v),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn format_text_with_terminator_refused() {
        let v = MenuValue::Text("AB;C".into());
        assert!(matches!(MY_CALL.format_value(&v), Err(Error::Config(_))));
    }

    #[test]
    fn format_kind_mismatch() {
        assert!(matches!(
            MY_CALL.format_value(&MenuValue::Number(3)),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            AGC_MID.format_value(&MenuValue::Text("3".into())),
            Err(Error::Config(_))
        ));
    }

    // ---------------------------------------------------------------
    // Parsing
    // ---------------------------------------------------------------

    #[test]
    fn parse_unsigned() {
        assert_eq!(AGC_MID.parse_value("0300").unwrap(), MenuValue::Number(300));
    }

    #[test]
    fn parse_signed() {
        assert_eq!(TREBLE.parse_value("-005").unwrap(), MenuValue::Number(-5));
        assert_eq!(TREBLE.parse_value("+010").unwrap(), MenuValue::Number(10));
    }

    #[test]
    fn parse_signed_without_sign_is_garbled() {
        assert!(matches!(TREBLE.parse_value("005"), Err(Error::Garbled(_))));
    }

    #[test]
    fn parse_empty_is_garbled() {
        assert!(matches!(AGC_MID.parse_value(""), Err(Error::Garbled(_))));
        assert!(matches!(TREBLE.parse_value("+"), Err(Error::Garbled(_))));
        assert!(matches!(TREBLE.parse_value(""), Err(Error::Garbled(_))));
    }

    #[test]
    fn parse_too_wide_is_garbled() {
        assert!(matches!(AGC_MID.parse_value("03000"), Err(Error::Garbled(_))));
    }

    #[test]
    fn parse_text_trims_padding() {
        assert_eq!(
            MY_CALL.parse_value("N0CALL    ").unwrap(),
            MenuValue::Text("N0CALL".into())
        );
    }

    // ---------------------------------------------------------------
    // Table
    // ---------------------------------------------------------------

    #[test]
    fn lookup_by_token_and_name() {
        let t = table();
        assert_eq!(t.len(), 4);
        assert_eq!(t.get(MenuToken::new(1, 1, 5)).unwrap().name, "SSB_AGC_MID");
        assert_eq!(t.token_for("ssb_af_treble"), Some(MenuToken::new(1, 1, 1)));
        assert_eq!(t.token_for("NOPE"), None);
    }

    #[test]
    fn duplicate_tokens_keep_first() {
        let dup = MenuItem::number(MenuToken::new(1, 1, 1), "OTHER", 1, 0, 1);
        let t = MenuTable::new(&[TREBLE, dup]);
        assert_eq!(t.len(), 1);
        assert_eq!(t.get(TREBLE.token).unwrap().name, "SSB_AF_TREBLE");
    }

    #[test]
    fn unknown_token_is_config_error() {
        let err = table()
            .check_access(MenuToken::new(9, 9, 9), &DetectedHardware::default())
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn hardware_gated_item_unavailable_until_confirmed() {
        let t = table();
        let unknown = DetectedHardware::default();
        assert!(matches!(
            t.check_access(AMP_POWER.token, &unknown),
            Err(Error::Unavailable(_))
        ));

        let mut detected = DetectedHardware::default();
        detected.amplifier = crate::hardware::Presence::Present;
        assert!(t.check_access(AMP_POWER.token, &detected).is_ok());
    }

    #[test]
    fn ungated_item_always_accessible() {
        let t = table();
        assert!(t.check_access(TREBLE.token, &DetectedHardware::default()).is_ok());
    }

    #[test]
    fn iter_in_token_order() {
        let names: Vec<_> = table().iter().map(|i| i.name).collect();
        assert_eq!(
            names,
            vec!["SSB_AF_TREBLE", "SSB_AGC_MID", "OPT_HF_MAX_PWR", "DISP_MY_CALL"]
        );
    }
}
