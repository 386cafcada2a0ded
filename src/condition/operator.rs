use {
    super::op::{self, ConditionOp},
    crate::FloydError,
    std::{
        borrow::Borrow,
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

/// Set quantifiers for multivalued condition keys.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum SetQualifier {
    ForAllValues,
    ForAnyValue,
}

impl Display for SetQualifier {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::ForAllValues => f.write_str("ForAllValues"),
            Self::ForAnyValue => f.write_str("ForAnyValue"),
        }
    }
}

impl FromStr for SetQualifier {
    type Err = FloydError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ForAllValues" => Ok(Self::ForAllValues),
            "ForAnyValue" => Ok(Self::ForAnyValue),
            _ => Err(FloydError::InvalidConditionOperator(s.to_string())),
        }
    }
}

/// Fluent construction of a condition operator token.
///
/// A comparator is chosen with one of the comparator methods (`StringLike` when none is chosen); the set
/// quantifier and the `IfExists` suffix are independent of the comparator and may be applied in any order:
///
/// ```
/// # use scratchstack_floyd::Operator;
/// let a = Operator::new().if_exists().for_any_value().string_equals();
/// let b = Operator::new().string_equals().for_any_value().if_exists();
/// assert_eq!(a.to_string(), "ForAnyValue:StringEqualsIfExists");
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Operator {
    qualifier: Option<SetQualifier>,
    op: ConditionOp,
    if_exists: bool,
}

macro_rules! comparators {
    ($($name:ident => $op:ident),* $(,)?) => {
        $(
            #[doc = concat!("Compare with `", stringify!($op), "`.")]
            #[inline]
            pub fn $name(self) -> Self {
                Self {
                    op: op::$op,
                    ..self
                }
            }
        )*
    };
}

impl Operator {
    /// A `StringLike` operator with no modifiers.
    pub fn new() -> Self {
        Self {
            qualifier: None,
            op: op::StringLike,
            if_exists: false,
        }
    }

    comparators! {
        string_equals => StringEquals,
        string_not_equals => StringNotEquals,
        string_equals_ignore_case => StringEqualsIgnoreCase,
        string_not_equals_ignore_case => StringNotEqualsIgnoreCase,
        string_like => StringLike,
        string_not_like => StringNotLike,
        numeric_equals => NumericEquals,
        numeric_not_equals => NumericNotEquals,
        numeric_less_than => NumericLessThan,
        numeric_less_than_equals => NumericLessThanEquals,
        numeric_greater_than => NumericGreaterThan,
        numeric_greater_than_equals => NumericGreaterThanEquals,
        date_equals => DateEquals,
        date_not_equals => DateNotEquals,
        date_less_than => DateLessThan,
        date_less_than_equals => DateLessThanEquals,
        date_greater_than => DateGreaterThan,
        date_greater_than_equals => DateGreaterThanEquals,
        bool => Bool,
        binary_equals => BinaryEquals,
        ip_address => IpAddress,
        not_ip_address => NotIpAddress,
        arn_equals => ArnEquals,
        arn_not_equals => ArnNotEquals,
        arn_like => ArnLike,
        arn_not_like => ArnNotLike,
        null => Null,
    }

    /// Prefix the operator with `ForAnyValue:`.
    #[inline]
    pub fn for_any_value(self) -> Self {
        Self {
            qualifier: Some(SetQualifier::ForAnyValue),
            ..self
        }
    }

    /// Prefix the operator with `ForAllValues:`.
    #[inline]
    pub fn for_all_values(self) -> Self {
        Self {
            qualifier: Some(SetQualifier::ForAllValues),
            ..self
        }
    }

    /// Suffix the operator with `IfExists`. `Null` has no such form and is unaffected.
    #[inline]
    pub fn if_exists(self) -> Self {
        Self {
            if_exists: true,
            ..self
        }
    }

    #[inline]
    pub fn qualifier(&self) -> Option<SetQualifier> {
        self.qualifier
    }

    /// The comparator with the `IfExists` suffix applied, if requested.
    pub fn condition_op(&self) -> ConditionOp {
        if self.if_exists {
            self.op.if_exists()
        } else {
            self.op
        }
    }
}

impl Default for Operator {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        if let Some(qualifier) = self.qualifier {
            write!(f, "{}:", qualifier)?;
        }
        Display::fmt(&self.condition_op(), f)
    }
}

impl From<ConditionOp> for Operator {
    fn from(op: ConditionOp) -> Self {
        Self {
            qualifier: None,
            op,
            if_exists: op.is_if_exists(),
        }
    }
}

impl FromStr for Operator {
    type Err = FloydError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FloydError::InvalidConditionOperator(s.to_string());
        let (qualifier, op) = match s.split_once(':') {
            Some((qualifier, op)) => (Some(SetQualifier::from_str(qualifier).map_err(|_| invalid())?), op),
            None => (None, s),
        };

        let op = ConditionOp::from_str(op).map_err(|_| invalid())?;
        Ok(Self {
            qualifier,
            ..Self::from(op)
        })
    }
}

/// A rendered operator token, as stored in a statement's `Condition` block.
///
/// Tokens built from text are not checked; use [Operator] when the token should be well-formed.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct OperatorToken(String);

impl OperatorToken {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for OperatorToken {
    fn default() -> Self {
        Self::from(op::StringLike)
    }
}

impl Borrow<str> for OperatorToken {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for OperatorToken {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for OperatorToken {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for OperatorToken {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<Operator> for OperatorToken {
    fn from(op: Operator) -> Self {
        Self(op.to_string())
    }
}

impl From<ConditionOp> for OperatorToken {
    fn from(op: ConditionOp) -> Self {
        Self(op.to_string())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{Operator, OperatorToken, SetQualifier},
        crate::condop,
        pretty_assertions::assert_eq,
        std::str::FromStr,
    };

    #[test_log::test]
    fn test_default() {
        assert_eq!(Operator::new().to_string(), "StringLike");
        assert_eq!(Operator::default(), Operator::new());
        assert_eq!(OperatorToken::default().as_str(), "StringLike");
    }

    #[test_log::test]
    fn test_comparators() {
        assert_eq!(Operator::new().string_equals().to_string(), "StringEquals");
        assert_eq!(Operator::new().string_not_equals_ignore_case().to_string(), "StringNotEqualsIgnoreCase");
        assert_eq!(Operator::new().numeric_greater_than_equals().to_string(), "NumericGreaterThanEquals");
        assert_eq!(Operator::new().date_less_than_equals().to_string(), "DateLessThanEquals");
        assert_eq!(Operator::new().bool().to_string(), "Bool");
        assert_eq!(Operator::new().binary_equals().to_string(), "BinaryEquals");
        assert_eq!(Operator::new().not_ip_address().to_string(), "NotIpAddress");
        assert_eq!(Operator::new().arn_like().to_string(), "ArnLike");
        assert_eq!(Operator::new().null().to_string(), "Null");
        assert_eq!(Operator::new().arn_like().string_not_like().to_string(), "StringNotLike");
    }

    #[test_log::test]
    fn test_modifiers() {
        assert_eq!(Operator::new().for_any_value().string_equals().to_string(), "ForAnyValue:StringEquals");
        assert_eq!(Operator::new().for_all_values().arn_like().to_string(), "ForAllValues:ArnLike");
        assert_eq!(Operator::new().if_exists().date_greater_than().to_string(), "DateGreaterThanIfExists");
        assert_eq!(Operator::new().not_ip_address().if_exists().to_string(), "NotIpAddressIfExists");
        assert_eq!(Operator::new().null().if_exists().to_string(), "Null");
        assert_eq!(
            Operator::new().for_any_value().for_all_values().string_like().if_exists().to_string(),
            "ForAllValues:StringLikeIfExists"
        );
        assert_eq!(Operator::new().for_any_value().qualifier(), Some(SetQualifier::ForAnyValue));
        assert_eq!(Operator::new().bool().if_exists().condition_op(), condop::BoolIfExists);
    }

    #[test_log::test]
    fn test_parse() {
        let op = Operator::from_str("ForAnyValue:StringEqualsIfExists").unwrap();
        assert_eq!(op, Operator::new().string_equals().if_exists().for_any_value());
        assert_eq!(op.to_string(), "ForAnyValue:StringEqualsIfExists");

        let op = Operator::from_str("NumericLessThan").unwrap();
        assert_eq!(op.qualifier(), None);
        assert_eq!(op.condition_op(), condop::NumericLessThan);

        assert_eq!(
            Operator::from_str("ForSomeValues:StringLike").unwrap_err().to_string(),
            "Invalid condition operator: ForSomeValues:StringLike"
        );
        assert_eq!(
            Operator::from_str("ForAnyValue:StringSorta").unwrap_err().to_string(),
            "Invalid condition operator: ForAnyValue:StringSorta"
        );
        assert!(Operator::from_str("").is_err());
    }

    #[test_log::test]
    fn test_tokens() {
        assert_eq!(OperatorToken::from("Whatever").as_str(), "Whatever");
        assert_eq!(OperatorToken::from("x".to_string()).to_string(), "x");
        assert_eq!(OperatorToken::from(condop::ArnLike).as_str(), "ArnLike");
        assert_eq!(OperatorToken::from(Operator::new().for_any_value()).as_str(), "ForAnyValue:StringLike");
        assert_eq!(Operator::from(condop::StringLikeIfExists).to_string(), "StringLikeIfExists");
    }
}
