mod accumulator;
mod global;

#[allow(non_upper_case_globals)]
pub mod op;
mod operator;
mod value;
mod variant;

pub use {
    accumulator::ConditionAccumulator,
    global::GlobalConditions,
    op::ConditionOp,
    operator::{Operator, OperatorToken, SetQualifier},
    value::ConditionValue,
    variant::Variant,
};
use {
    crate::from_str_json,
    serde::{de::Deserializer, ser::Serializer, Deserialize, Serialize},
    std::{
        collections::{
            btree_map::{Entry, IntoIter, Iter, Keys, Values},
            BTreeMap,
        },
        iter::{Extend, FromIterator, IntoIterator},
        ops::Index,
    },
};

/// Condition keys mapped to their values under a single operator.
pub type ConditionMap = BTreeMap<String, ConditionValue>;

/// The `Condition` block of a statement: operator tokens mapped to their condition keys.
///
/// Operator tokens are kept as text so that qualified forms (`ForAnyValue:StringLike`) and unchecked tokens are
/// carried through to the rendered document untouched. Iteration is ordered by operator token, then condition key.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Condition {
    map: BTreeMap<String, ConditionMap>,
}

from_str_json!(Condition);

impl<'de> Deserialize<'de> for Condition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::deserialize(deserializer)?;

        Ok(Self {
            map,
        })
    }
}

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Operator blocks without keys are never rendered.
        serializer.collect_map(self.map.iter().filter(|(_, keys)| !keys.is_empty()))
    }
}

impl Condition {
    #[inline]
    pub fn new() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    /// Set `key` to `value` under `operator`, returning the previous value for that pair if any.
    pub fn set(&mut self, operator: &str, key: &str, value: ConditionValue) -> Option<ConditionValue> {
        self.map.entry(operator.to_string()).or_default().insert(key.to_string(), value)
    }

    /// Look up the value stored for an operator/key pair.
    pub fn value(&self, operator: &str, key: &str) -> Option<&ConditionValue> {
        self.map.get(operator).and_then(|keys| keys.get(key))
    }

    /// Iterate over every `(operator, key, value)` triple in operator-then-key order.
    pub fn triples(&self) -> impl Iterator<Item = (&str, &str, &ConditionValue)> {
        self.map.iter().flat_map(|(operator, keys)| {
            keys.iter().map(move |(key, value)| (operator.as_str(), key.as_str(), value))
        })
    }

    /// The number of `(operator, key)` pairs held.
    pub fn entry_count(&self) -> usize {
        self.map.values().map(BTreeMap::len).sum()
    }

    /// Indicates whether any operator holds at least one condition key.
    pub fn has_entries(&self) -> bool {
        self.map.values().any(|keys| !keys.is_empty())
    }

    #[inline]
    pub fn clear(&mut self) {
        self.map.clear();
    }

    #[inline]
    pub fn contains_key(&self, operator: &str) -> bool {
        self.map.contains_key(operator)
    }

    #[inline]
    pub fn entry(&mut self, operator: String) -> Entry<'_, String, ConditionMap> {
        self.map.entry(operator)
    }

    #[inline]
    pub fn get(&self, operator: &str) -> Option<&ConditionMap> {
        self.map.get(operator)
    }

    #[inline]
    pub fn insert(&mut self, operator: String, value: ConditionMap) -> Option<ConditionMap> {
        self.map.insert(operator, value)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, String, ConditionMap> {
        self.map.iter()
    }

    #[inline]
    pub fn keys(&self) -> Keys<'_, String, ConditionMap> {
        self.map.keys()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn remove(&mut self, operator: &str) -> Option<ConditionMap> {
        self.map.remove(operator)
    }

    #[inline]
    pub fn values(&self) -> Values<'_, String, ConditionMap> {
        self.map.values()
    }
}

impl Extend<(String, ConditionMap)> for Condition {
    fn extend<I: IntoIterator<Item = (String, ConditionMap)>>(&mut self, iter: I) {
        self.map.extend(iter)
    }
}

impl<const N: usize> From<[(String, ConditionMap); N]> for Condition {
    fn from(arr: [(String, ConditionMap); N]) -> Self {
        Self {
            map: BTreeMap::from(arr),
        }
    }
}

impl FromIterator<(String, ConditionMap)> for Condition {
    fn from_iter<I: IntoIterator<Item = (String, ConditionMap)>>(iter: I) -> Self {
        Self {
            map: BTreeMap::from_iter(iter),
        }
    }
}

impl Index<&str> for Condition {
    type Output = ConditionMap;

    fn index(&self, operator: &str) -> &ConditionMap {
        &self.map[operator]
    }
}

impl IntoIterator for Condition {
    type Item = (String, ConditionMap);
    type IntoIter = IntoIter<String, ConditionMap>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl<'a> IntoIterator for &'a Condition {
    type Item = (&'a String, &'a ConditionMap);
    type IntoIter = Iter<'a, String, ConditionMap>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{Condition, ConditionMap, ConditionValue},
        indoc::indoc,
        pretty_assertions::assert_eq,
        std::str::FromStr,
    };

    #[test_log::test]
    fn test_set_and_lookup() {
        let mut c = Condition::new();
        assert!(c.is_empty());
        assert!(!c.has_entries());

        assert_eq!(c.set("StringLike", "ecr:ResourceTag/env", "prod".into()), None);
        assert_eq!(c.set("StringLike", "ecr:ResourceTag/env", "dev".into()), Some(ConditionValue::from("prod")));
        c.set("StringEquals", "ecr:ResourceTag/env", "qa".into());

        assert!(c.has_entries());
        assert_eq!(c.len(), 2);
        assert_eq!(c.entry_count(), 2);
        assert_eq!(c.value("StringLike", "ecr:ResourceTag/env"), Some(&ConditionValue::from("dev")));
        assert_eq!(c.value("StringLike", "ecr:ResourceTag/team"), None);
        assert_eq!(c["StringEquals"].len(), 1);
        assert!(c.contains_key("StringEquals"));
        assert!(!c.contains_key("Bool"));

        let triples: Vec<_> = c.triples().collect();
        assert_eq!(
            triples,
            vec![
                ("StringEquals", "ecr:ResourceTag/env", &ConditionValue::from("qa")),
                ("StringLike", "ecr:ResourceTag/env", &ConditionValue::from("dev")),
            ]
        );

        c.remove("StringEquals");
        assert_eq!(c.keys().collect::<Vec<_>>(), vec!["StringLike"]);
        c.clear();
        assert!(c.is_empty());
    }

    #[test_log::test]
    fn test_empty_bucket() {
        let c = Condition::from([("StringLike".to_string(), ConditionMap::new())]);
        assert!(!c.is_empty());
        assert!(!c.has_entries());
        assert_eq!(c.entry_count(), 0);
        assert_eq!(serde_json::to_string(&c).unwrap(), "{}");

        let mut c = Condition::from_str(r#"{"StringLike": {}, "Bool": {"aws:SecureTransport": "true"}}"#).unwrap();
        assert_eq!(serde_json::to_string(&c).unwrap(), r#"{"Bool":{"aws:SecureTransport":"true"}}"#);
        c.set("StringLike", "aws:PrincipalOrgID", "o-1".into());
        assert_eq!(
            serde_json::to_string(&c).unwrap(),
            r#"{"Bool":{"aws:SecureTransport":"true"},"StringLike":{"aws:PrincipalOrgID":"o-1"}}"#
        );
    }

    #[test_log::test]
    fn test_serde() {
        let c = Condition::from_str(indoc! { r#"
            {
                "Bool": {"aws:SecureTransport": true},
                "ForAnyValue:StringEquals": {"aws:TagKeys": ["team", "env"]},
                "NumericLessThan": {"aws:MultiFactorAuthAge": 3600}
            }"# })
        .unwrap();

        assert_eq!(c.value("Bool", "aws:SecureTransport"), Some(&ConditionValue::from("true")));
        assert_eq!(c.value("ForAnyValue:StringEquals", "aws:TagKeys"), Some(&ConditionValue::from(vec!["team", "env"])));
        assert_eq!(c.value("NumericLessThan", "aws:MultiFactorAuthAge"), Some(&ConditionValue::from("3600")));

        assert_eq!(
            serde_json::to_string(&c).unwrap(),
            r#"{"Bool":{"aws:SecureTransport":"true"},"ForAnyValue:StringEquals":{"aws:TagKeys":["team","env"]},"NumericLessThan":{"aws:MultiFactorAuthAge":"3600"}}"#
        );

        let collected: Condition = c.iter().map(|(op, keys)| (op.clone(), keys.clone())).collect();
        assert_eq!(collected, c);
        let mut extended = Condition::new();
        extended.extend(c.clone());
        assert_eq!(extended, c);
    }
}
