use {
    super::variant::Variant,
    crate::FloydError,
    serde::{de, de::Deserializer, ser::Serializer, Deserialize, Serialize},
    std::{
        borrow::Borrow,
        fmt::{Debug, Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

// The order of each table is important. For a given comparison, the if-exists variant must follow, then the negated
// variant, then the negated if-exists variant.

/// ARN operation names.
const ARN_DISPLAY_NAMES: [&str; 8] = [
    "ArnEquals",
    "ArnEqualsIfExists",
    "ArnNotEquals",
    "ArnNotEqualsIfExists",
    "ArnLike",
    "ArnLikeIfExists",
    "ArnNotLike",
    "ArnNotLikeIfExists",
];

/// Binary operation names. There is no negated form.
const BINARY_DISPLAY_NAMES: [&str; 2] = ["BinaryEquals", "BinaryEqualsIfExists"];

/// Boolean operation names. There is no negated form.
const BOOL_DISPLAY_NAMES: [&str; 2] = ["Bool", "BoolIfExists"];

/// Date operation names.
const DATE_DISPLAY_NAMES: [&str; 12] = [
    "DateEquals",
    "DateEqualsIfExists",
    "DateNotEquals",
    "DateNotEqualsIfExists",
    "DateLessThan",
    "DateLessThanIfExists",
    "DateGreaterThanEquals",
    "DateGreaterThanEqualsIfExists",
    "DateLessThanEquals",
    "DateLessThanEqualsIfExists",
    "DateGreaterThan",
    "DateGreaterThanIfExists",
];

/// IP address operation names.
const IP_ADDRESS_DISPLAY_NAMES: [&str; 4] = ["IpAddress", "IpAddressIfExists", "NotIpAddress", "NotIpAddressIfExists"];

const NULL_DISPLAY_NAME: &str = "Null";

/// Numeric operation names.
const NUMERIC_DISPLAY_NAMES: [&str; 12] = [
    "NumericEquals",
    "NumericEqualsIfExists",
    "NumericNotEquals",
    "NumericNotEqualsIfExists",
    "NumericLessThan",
    "NumericLessThanIfExists",
    "NumericGreaterThanEquals",
    "NumericGreaterThanEqualsIfExists",
    "NumericLessThanEquals",
    "NumericLessThanEqualsIfExists",
    "NumericGreaterThan",
    "NumericGreaterThanIfExists",
];

/// String operation names.
const STRING_DISPLAY_NAMES: [&str; 12] = [
    "StringEquals",
    "StringEqualsIfExists",
    "StringNotEquals",
    "StringNotEqualsIfExists",
    "StringEqualsIgnoreCase",
    "StringEqualsIgnoreCaseIfExists",
    "StringNotEqualsIgnoreCase",
    "StringNotEqualsIgnoreCaseIfExists",
    "StringLike",
    "StringLikeIfExists",
    "StringNotLike",
    "StringNotLikeIfExists",
];

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum ArnCmp {
    Equals = 0,
    Like = 4,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum DateCmp {
    Equals = 0,
    LessThan = 4,
    LessThanEquals = 8,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum NumericCmp {
    Equals = 0,
    LessThan = 4,
    LessThanEquals = 8,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum StringCmp {
    Equals = 0,
    EqualsIgnoreCase = 4,
    Like = 8,
}

/// An operator for a condition clause.
///
/// Negated forms of the ordered comparisons are their complements: `DateGreaterThanEquals` is the negation of
/// `DateLessThan`, and so on.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ConditionOp {
    /// Operators for ARNs.
    Arn(ArnCmp, Variant),

    /// Operators for binary values. Variant here is only allowed to be [Variant::None] or [Variant::IfExists].
    Binary(Variant),

    /// Operators on boolean values. Variant here is only allowed to be [Variant::None] or [Variant::IfExists].
    Bool(Variant),

    /// Operators for date/time values.
    Date(DateCmp, Variant),

    /// Operators on IP addresses and networks.
    IpAddress(Variant),

    /// Operator on the presence/absence of a value.
    Null,

    /// Operators on numeric values.
    Numeric(NumericCmp, Variant),

    /// Operators on string vaules.
    String(StringCmp, Variant),
}

/// The `ArnEquals` operator.
pub const ArnEquals: ConditionOp = ConditionOp::Arn(ArnCmp::Equals, Variant::None);

/// The `ArnEqualsIfExists` operator.
pub const ArnEqualsIfExists: ConditionOp = ConditionOp::Arn(ArnCmp::Equals, Variant::IfExists);

/// The `ArnNotEquals` operator.
pub const ArnNotEquals: ConditionOp = ConditionOp::Arn(ArnCmp::Equals, Variant::Negated);

/// The `ArnNotEqualsIfExists` operator.
pub const ArnNotEqualsIfExists: ConditionOp = ConditionOp::Arn(ArnCmp::Equals, Variant::IfExistsNegated);

/// The `ArnLike` operator.
pub const ArnLike: ConditionOp = ConditionOp::Arn(ArnCmp::Like, Variant::None);

/// The `ArnLikeIfExists` operator.
pub const ArnLikeIfExists: ConditionOp = ConditionOp::Arn(ArnCmp::Like, Variant::IfExists);

/// The `ArnNotLike` operator.
pub const ArnNotLike: ConditionOp = ConditionOp::Arn(ArnCmp::Like, Variant::Negated);

/// The `ArnNotLikeIfExists` operator.
pub const ArnNotLikeIfExists: ConditionOp = ConditionOp::Arn(ArnCmp::Like, Variant::IfExistsNegated);

/// The `BinaryEquals` operator.
pub const BinaryEquals: ConditionOp = ConditionOp::Binary(Variant::None);

/// The `BinaryEqualsIfExists` operator.
pub const BinaryEqualsIfExists: ConditionOp = ConditionOp::Binary(Variant::IfExists);

/// The `Bool` operator.
pub const Bool: ConditionOp = ConditionOp::Bool(Variant::None);

/// The `BoolIfExists` operator.
pub const BoolIfExists: ConditionOp = ConditionOp::Bool(Variant::IfExists);

/// The `DateEquals` operator.
pub const DateEquals: ConditionOp = ConditionOp::Date(DateCmp::Equals, Variant::None);

/// The `DateEqualsIfExists` operator.
pub const DateEqualsIfExists: ConditionOp = ConditionOp::Date(DateCmp::Equals, Variant::IfExists);

/// The `DateNotEquals` operator.
pub const DateNotEquals: ConditionOp = ConditionOp::Date(DateCmp::Equals, Variant::Negated);

/// The `DateNotEqualsIfExists` operator.
pub const DateNotEqualsIfExists: ConditionOp = ConditionOp::Date(DateCmp::Equals, Variant::IfExistsNegated);

/// The `DateLessThan` operator.
pub const DateLessThan: ConditionOp = ConditionOp::Date(DateCmp::LessThan, Variant::None);

/// The `DateLessThanIfExists` operator.
pub const DateLessThanIfExists: ConditionOp = ConditionOp::Date(DateCmp::LessThan, Variant::IfExists);

/// The `DateGreaterThanEquals` operator.
pub const DateGreaterThanEquals: ConditionOp = ConditionOp::Date(DateCmp::LessThan, Variant::Negated);

/// The `DateGreaterThanEqualsIfExists` operator.
pub const DateGreaterThanEqualsIfExists: ConditionOp = ConditionOp::Date(DateCmp::LessThan, Variant::IfExistsNegated);

/// The `DateLessThanEquals` operator.
pub const DateLessThanEquals: ConditionOp = ConditionOp::Date(DateCmp::LessThanEquals, Variant::None);

/// The `DateLessThanEqualsIfExists` operator.
pub const DateLessThanEqualsIfExists: ConditionOp = ConditionOp::Date(DateCmp::LessThanEquals, Variant::IfExists);

/// The `DateGreaterThan` operator.
pub const DateGreaterThan: ConditionOp = ConditionOp::Date(DateCmp::LessThanEquals, Variant::Negated);

/// The `DateGreaterThanIfExists` operator.
pub const DateGreaterThanIfExists: ConditionOp = ConditionOp::Date(DateCmp::LessThanEquals, Variant::IfExistsNegated);

/// The `IpAddress` operator.
pub const IpAddress: ConditionOp = ConditionOp::IpAddress(Variant::None);

/// The `IpAddressIfExists` operator.
pub const IpAddressIfExists: ConditionOp = ConditionOp::IpAddress(Variant::IfExists);

/// The `NotIpAddress` operator.
pub const NotIpAddress: ConditionOp = ConditionOp::IpAddress(Variant::Negated);

/// The `NotIpAddressIfExists` operator.
pub const NotIpAddressIfExists: ConditionOp = ConditionOp::IpAddress(Variant::IfExistsNegated);

/// The `Null` operator.
pub const Null: ConditionOp = ConditionOp::Null;

/// The `NumericEquals` operator.
pub const NumericEquals: ConditionOp = ConditionOp::Numeric(NumericCmp::Equals, Variant::None);

/// The `NumericEqualsIfExists` operator.
pub const NumericEqualsIfExists: ConditionOp = ConditionOp::Numeric(NumericCmp::Equals, Variant::IfExists);

/// The `NumericNotEquals` operator.
pub const NumericNotEquals: ConditionOp = ConditionOp::Numeric(NumericCmp::Equals, Variant::Negated);

/// The `NumericNotEqualsIfExists` operator.
pub const NumericNotEqualsIfExists: ConditionOp = ConditionOp::Numeric(NumericCmp::Equals, Variant::IfExistsNegated);

/// The `NumericLessThan` operator.
pub const NumericLessThan: ConditionOp = ConditionOp::Numeric(NumericCmp::LessThan, Variant::None);

/// The `NumericLessThanIfExists` operator.
pub const NumericLessThanIfExists: ConditionOp = ConditionOp::Numeric(NumericCmp::LessThan, Variant::IfExists);

/// The `NumericGreaterThanEquals` operator.
pub const NumericGreaterThanEquals: ConditionOp = ConditionOp::Numeric(NumericCmp::LessThan, Variant::Negated);

/// The `NumericGreaterThanEqualsIfExists` operator.
pub const NumericGreaterThanEqualsIfExists: ConditionOp =
    ConditionOp::Numeric(NumericCmp::LessThan, Variant::IfExistsNegated);

/// The `NumericLessThanEquals` operator.
pub const NumericLessThanEquals: ConditionOp = ConditionOp::Numeric(NumericCmp::LessThanEquals, Variant::None);

/// The `NumericLessThanEqualsIfExists` operator.
pub const NumericLessThanEqualsIfExists: ConditionOp =
    ConditionOp::Numeric(NumericCmp::LessThanEquals, Variant::IfExists);

/// The `NumericGreaterThan` operator.
pub const NumericGreaterThan: ConditionOp = ConditionOp::Numeric(NumericCmp::LessThanEquals, Variant::Negated);

/// The `NumericGreaterThanIfExists` operator.
pub const NumericGreaterThanIfExists: ConditionOp =
    ConditionOp::Numeric(NumericCmp::LessThanEquals, Variant::IfExistsNegated);

/// The `StringEquals` operator.
pub const StringEquals: ConditionOp = ConditionOp::String(StringCmp::Equals, Variant::None);

/// The `StringEqualsIfExists` operator.
pub const StringEqualsIfExists: ConditionOp = ConditionOp::String(StringCmp::Equals, Variant::IfExists);

/// The `StringNotEquals` operator.
pub const StringNotEquals: ConditionOp = ConditionOp::String(StringCmp::Equals, Variant::Negated);

/// The `StringNotEqualsIfExists` operator.
pub const StringNotEqualsIfExists: ConditionOp = ConditionOp::String(StringCmp::Equals, Variant::IfExistsNegated);

/// The `StringEqualsIgnoreCase` operator.
pub const StringEqualsIgnoreCase: ConditionOp = ConditionOp::String(StringCmp::EqualsIgnoreCase, Variant::None);

/// The `StringEqualsIgnoreCaseIfExists` operator.
pub const StringEqualsIgnoreCaseIfExists: ConditionOp =
    ConditionOp::String(StringCmp::EqualsIgnoreCase, Variant::IfExists);

/// The `StringNotEqualsIgnoreCase` operator.
pub const StringNotEqualsIgnoreCase: ConditionOp = ConditionOp::String(StringCmp::EqualsIgnoreCase, Variant::Negated);

/// The `StringNotEqualsIgnoreCaseIfExists` operator.
pub const StringNotEqualsIgnoreCaseIfExists: ConditionOp =
    ConditionOp::String(StringCmp::EqualsIgnoreCase, Variant::IfExistsNegated);

/// The `StringLike` operator.
pub const StringLike: ConditionOp = ConditionOp::String(StringCmp::Like, Variant::None);

/// The `StringLikeIfExists` operator.
pub const StringLikeIfExists: ConditionOp = ConditionOp::String(StringCmp::Like, Variant::IfExists);

/// The `StringNotLike` operator.
pub const StringNotLike: ConditionOp = ConditionOp::String(StringCmp::Like, Variant::Negated);

/// The `StringNotLikeIfExists` operator.
pub const StringNotLikeIfExists: ConditionOp = ConditionOp::String(StringCmp::Like, Variant::IfExistsNegated);

/// Every operator IAM accepts, in [Ord] order.
pub const ALL: [ConditionOp; 53] = [
    ArnEquals,
    ArnEqualsIfExists,
    ArnNotEquals,
    ArnNotEqualsIfExists,
    ArnLike,
    ArnLikeIfExists,
    ArnNotLike,
    ArnNotLikeIfExists,
    BinaryEquals,
    BinaryEqualsIfExists,
    Bool,
    BoolIfExists,
    DateEquals,
    DateEqualsIfExists,
    DateNotEquals,
    DateNotEqualsIfExists,
    DateLessThan,
    DateLessThanIfExists,
    DateGreaterThanEquals,
    DateGreaterThanEqualsIfExists,
    DateLessThanEquals,
    DateLessThanEqualsIfExists,
    DateGreaterThan,
    DateGreaterThanIfExists,
    IpAddress,
    IpAddressIfExists,
    NotIpAddress,
    NotIpAddressIfExists,
    Null,
    NumericEquals,
    NumericEqualsIfExists,
    NumericNotEquals,
    NumericNotEqualsIfExists,
    NumericLessThan,
    NumericLessThanIfExists,
    NumericGreaterThanEquals,
    NumericGreaterThanEqualsIfExists,
    NumericLessThanEquals,
    NumericLessThanEqualsIfExists,
    NumericGreaterThan,
    NumericGreaterThanIfExists,
    StringEquals,
    StringEqualsIfExists,
    StringNotEquals,
    StringNotEqualsIfExists,
    StringEqualsIgnoreCase,
    StringEqualsIgnoreCaseIfExists,
    StringNotEqualsIgnoreCase,
    StringNotEqualsIgnoreCaseIfExists,
    StringLike,
    StringLikeIfExists,
    StringNotLike,
    StringNotLikeIfExists,
];

impl ConditionOp {
    /// The same operator with the `IfExists` suffix applied. [ConditionOp::Null] has no such form and is returned
    /// unchanged.
    pub fn if_exists(self) -> Self {
        match self {
            Self::Arn(cmp, variant) => Self::Arn(cmp, variant.with_if_exists()),
            Self::Binary(variant) => Self::Binary(variant.with_if_exists()),
            Self::Bool(variant) => Self::Bool(variant.with_if_exists()),
            Self::Date(cmp, variant) => Self::Date(cmp, variant.with_if_exists()),
            Self::IpAddress(variant) => Self::IpAddress(variant.with_if_exists()),
            Self::Null => Self::Null,
            Self::Numeric(cmp, variant) => Self::Numeric(cmp, variant.with_if_exists()),
            Self::String(cmp, variant) => Self::String(cmp, variant.with_if_exists()),
        }
    }

    /// Indicates whether this operator carries the `IfExists` suffix.
    pub fn is_if_exists(&self) -> bool {
        match self {
            Self::Arn(_, variant)
            | Self::Binary(variant)
            | Self::Bool(variant)
            | Self::Date(_, variant)
            | Self::IpAddress(variant)
            | Self::Numeric(_, variant)
            | Self::String(_, variant) => variant.if_exists(),
            Self::Null => false,
        }
    }

    /// Indicates whether this operator is the negated form of its comparison.
    pub fn is_negated(&self) -> bool {
        match self {
            Self::Arn(_, variant)
            | Self::Date(_, variant)
            | Self::IpAddress(variant)
            | Self::Numeric(_, variant)
            | Self::String(_, variant) => variant.negated(),
            Self::Binary(_) | Self::Bool(_) | Self::Null => false,
        }
    }
}

impl Borrow<str> for ConditionOp {
    fn borrow(&self) -> &str {
        match self {
            Self::Arn(cmp, variant) => ARN_DISPLAY_NAMES[*cmp as usize | variant.as_usize()],
            Self::Binary(variant) => BINARY_DISPLAY_NAMES[variant.as_usize()],
            Self::Bool(variant) => BOOL_DISPLAY_NAMES[variant.as_usize()],
            Self::Date(cmp, variant) => DATE_DISPLAY_NAMES[*cmp as usize | variant.as_usize()],
            Self::IpAddress(variant) => IP_ADDRESS_DISPLAY_NAMES[variant.as_usize()],
            Self::Null => NULL_DISPLAY_NAME,
            Self::Numeric(cmp, variant) => NUMERIC_DISPLAY_NAMES[*cmp as usize | variant.as_usize()],
            Self::String(cmp, variant) => STRING_DISPLAY_NAMES[*cmp as usize | variant.as_usize()],
        }
    }
}

impl PartialEq<str> for ConditionOp {
    fn eq(&self, other: &str) -> bool {
        Borrow::<str>::borrow(self) == other
    }
}

impl Display for ConditionOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.borrow())
    }
}

impl FromStr for ConditionOp {
    type Err = FloydError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL.iter().find(|op| *op == s).copied().ok_or_else(|| FloydError::InvalidConditionOperator(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for ConditionOp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ConditionOp::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for ConditionOp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.borrow())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{ConditionOp, ALL},
        crate::condop,
        pretty_assertions::assert_eq,
        std::{collections::HashSet, str::FromStr},
    };

    #[test_log::test]
    fn test_ordering() {
        for window in ALL.windows(2) {
            assert!(window[0] < window[1], "{:?} should sort before {:?}", window[0], window[1]);
        }
    }

    #[test_log::test]
    fn test_round_trip_names() {
        let mut seen = HashSet::new();
        for op in ALL.iter() {
            let name = op.to_string();
            assert!(seen.insert(name.clone()), "duplicate display name {}", name);
            assert_eq!(ConditionOp::from_str(&name).unwrap(), *op);
        }
        assert_eq!(seen.len(), 53);
    }

    #[test_log::test]
    fn test_display() {
        assert_eq!(condop::ArnLike.to_string(), "ArnLike");
        assert_eq!(condop::BoolIfExists.to_string(), "BoolIfExists");
        assert_eq!(condop::DateGreaterThan.to_string(), "DateGreaterThan");
        assert_eq!(condop::DateGreaterThanEquals.to_string(), "DateGreaterThanEquals");
        assert_eq!(condop::NotIpAddressIfExists.to_string(), "NotIpAddressIfExists");
        assert_eq!(condop::NumericGreaterThanEqualsIfExists.to_string(), "NumericGreaterThanEqualsIfExists");
        assert_eq!(condop::StringNotEqualsIgnoreCase.to_string(), "StringNotEqualsIgnoreCase");
        assert_eq!(condop::Null.to_string(), "Null");
    }

    #[test_log::test]
    fn test_if_exists() {
        assert_eq!(condop::StringLike.if_exists(), condop::StringLikeIfExists);
        assert_eq!(condop::StringNotLike.if_exists(), condop::StringNotLikeIfExists);
        assert_eq!(condop::DateGreaterThan.if_exists(), condop::DateGreaterThanIfExists);
        assert_eq!(condop::Bool.if_exists(), condop::BoolIfExists);
        assert_eq!(condop::BinaryEquals.if_exists(), condop::BinaryEqualsIfExists);
        assert_eq!(condop::NotIpAddress.if_exists(), condop::NotIpAddressIfExists);
        assert_eq!(condop::Null.if_exists(), condop::Null);
        assert_eq!(condop::ArnLikeIfExists.if_exists(), condop::ArnLikeIfExists);

        assert!(condop::ArnLikeIfExists.is_if_exists());
        assert!(!condop::ArnLike.is_if_exists());
        assert!(!condop::Null.is_if_exists());
        assert!(condop::NumericGreaterThan.is_negated());
        assert!(!condop::NumericLessThanEquals.is_negated());
        assert!(!condop::BoolIfExists.is_negated());
    }

    #[test_log::test]
    fn test_parse_errors() {
        assert_eq!(
            ConditionOp::from_str("StringSorta").unwrap_err().to_string(),
            "Invalid condition operator: StringSorta"
        );
        assert!(ConditionOp::from_str("stringequals").is_err());
        assert!(ConditionOp::from_str("ForAnyValue:StringEquals").is_err());
    }

    #[test_log::test]
    fn test_serde() {
        let e = serde_json::from_str::<ConditionOp>("3").unwrap_err();
        assert_eq!(e.to_string(), "invalid type: integer `3`, expected a string at line 1 column 1");
        let c = serde_json::from_str::<ConditionOp>("\"ArnEquals\"").unwrap();
        assert_eq!(c, condop::ArnEquals);
        assert_eq!(serde_json::to_string(&condop::IpAddress).unwrap(), "\"IpAddress\"");
        let e = serde_json::from_str::<ConditionOp>("\"Foo\"").unwrap_err();
        assert_eq!(e.to_string(), "Invalid condition operator: Foo at line 1 column 5");
    }
}
