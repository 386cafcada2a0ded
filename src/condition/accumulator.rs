use {
    super::{Condition, ConditionMap, ConditionValue, OperatorToken},
    crate::StatementHost,
    log::{debug, trace, warn},
};

/// Collects `(operator, key, value)` triples for a single statement.
///
/// Keys without a namespace separator are qualified with the owning service's prefix. Setting the same operator/key
/// pair twice overwrites the earlier value; the same key under two operators yields two entries.
///
/// When the statement is embedded in a host, [ConditionAccumulator::replay_into] pushes every triple to the host
/// once. Conditions added after that point stay in the accumulator but are never sent to the host.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConditionAccumulator {
    service_prefix: String,
    conditions: Condition,
    replayed: bool,
}

impl ConditionAccumulator {
    pub fn new<S: Into<String>>(service_prefix: S) -> Self {
        Self {
            service_prefix: service_prefix.into(),
            conditions: Condition::new(),
            replayed: false,
        }
    }

    #[inline]
    pub fn service_prefix(&self) -> &str {
        &self.service_prefix
    }

    /// The fully qualified form of a condition key.
    pub fn qualify_key(&self, key: &str) -> String {
        if key.contains(':') || self.service_prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}:{}", self.service_prefix, key)
        }
    }

    /// Store `value` for `key` under `operator` (`StringLike` when omitted).
    pub fn add(&mut self, key: &str, value: ConditionValue, operator: Option<OperatorToken>) {
        let operator = operator.unwrap_or_default();
        let key = self.qualify_key(key);
        trace!("Adding condition {}: {} = {}", operator, key, value);

        if self.replayed {
            warn!(
                "Condition {}: {} added after the statement was flushed to its host; it will not be replayed",
                operator, key
            );
        }

        self.conditions.set(operator.as_str(), &key, value);
    }

    /// Indicates whether at least one operator holds a condition key.
    #[inline]
    pub fn has_conditions(&self) -> bool {
        self.conditions.has_entries()
    }

    #[inline]
    pub fn conditions(&self) -> &Condition {
        &self.conditions
    }

    /// Indicates whether the conditions have been pushed to a host.
    #[inline]
    pub fn is_replayed(&self) -> bool {
        self.replayed
    }

    /// Push every stored triple to `host` as one `add_condition` call each, in operator-then-key order.
    ///
    /// Only the first call that finds conditions has any effect; the return value says whether anything was
    /// replayed. A call on an empty accumulator leaves the guard unset.
    pub fn replay_into(&mut self, host: &mut dyn StatementHost) -> bool {
        if self.replayed || !self.has_conditions() {
            return false;
        }

        debug!("Replaying {} condition(s) into host", self.conditions.entry_count());
        for (operator, key, value) in self.conditions.triples() {
            let mut condition = ConditionMap::new();
            condition.insert(key.to_string(), value.clone());
            host.add_condition(operator, condition);
        }

        self.replayed = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use {
        super::ConditionAccumulator,
        crate::{condop, ConditionMap, ConditionValue, Effect, Operator, StatementHost},
        pretty_assertions::assert_eq,
        serde_json::{json, Value},
    };

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(String, ConditionMap)>,
    }

    impl StatementHost for Recorder {
        fn add_actions(&mut self, _actions: &[String]) {}
        fn add_not_actions(&mut self, _actions: &[String]) {}
        fn add_resources(&mut self, _resources: &[String]) {}
        fn add_not_resources(&mut self, _resources: &[String]) {}
        fn set_effect(&mut self, _effect: Effect) {}
        fn set_sid(&mut self, _sid: &str) {}

        fn add_condition(&mut self, operator: &str, condition: ConditionMap) {
            self.calls.push((operator.to_string(), condition));
        }

        fn to_statement_json(&self) -> Value {
            json!({})
        }

        fn freeze(&mut self) {}

        fn frozen(&self) -> bool {
            false
        }
    }

    #[test_log::test]
    fn test_key_prefixing() {
        let mut acc = ConditionAccumulator::new("ecr");
        assert_eq!(acc.service_prefix(), "ecr");
        acc.add("ResourceTag/env", "prod".into(), None);
        acc.add("aws:SourceIp", "10.0.0.0/8".into(), Some(condop::IpAddress.into()));

        let c = acc.conditions();
        assert_eq!(c.value("StringLike", "ecr:ResourceTag/env"), Some(&ConditionValue::from("prod")));
        assert_eq!(c.value("IpAddress", "aws:SourceIp"), Some(&ConditionValue::from("10.0.0.0/8")));

        let bare = ConditionAccumulator::new("");
        assert_eq!(bare.qualify_key("Flag"), "Flag");
    }

    #[test_log::test]
    fn test_has_conditions() {
        let mut acc = ConditionAccumulator::new("a");
        assert!(!acc.has_conditions());
        acc.add("a:Foo", 1_u32.into(), None);
        assert!(acc.has_conditions());
    }

    #[test_log::test]
    fn test_overwrite_and_coexist() {
        let mut acc = ConditionAccumulator::new("a");
        acc.add("a:Foo", 1_u32.into(), None);
        acc.add("a:Foo", 2_u32.into(), None);
        assert_eq!(acc.conditions().entry_count(), 1);
        assert_eq!(acc.conditions().value("StringLike", "a:Foo"), Some(&ConditionValue::from("2")));

        acc.add("a:Bar", "x".into(), Some("StringEquals".into()));
        acc.add("a:Bar", "y".into(), Some(Operator::new().string_like().into()));
        assert_eq!(acc.conditions().value("StringEquals", "a:Bar"), Some(&ConditionValue::from("x")));
        assert_eq!(acc.conditions().value("StringLike", "a:Bar"), Some(&ConditionValue::from("y")));
        assert_eq!(acc.conditions().entry_count(), 3);
    }

    #[test_log::test]
    fn test_unchecked_tokens_pass_through() {
        let mut acc = ConditionAccumulator::new("a");
        acc.add("a:Foo", "x".into(), Some("NotARealOperator".into()));
        assert_eq!(acc.conditions().value("NotARealOperator", "a:Foo"), Some(&ConditionValue::from("x")));
    }

    #[test_log::test]
    fn test_replay_once() {
        let mut acc = ConditionAccumulator::new("a");
        acc.add("Foo", "x".into(), Some("StringEquals".into()));
        acc.add("Bar", vec!["y", "z"].into(), None);
        acc.add("Baz", true.into(), Some(condop::Bool.into()));

        let mut host = Recorder::default();
        assert!(!acc.is_replayed());
        assert!(acc.replay_into(&mut host));
        assert!(acc.is_replayed());
        assert!(!acc.replay_into(&mut host));

        let calls: Vec<(String, Vec<(String, ConditionValue)>)> =
            host.calls.into_iter().map(|(op, map)| (op, map.into_iter().collect())).collect();
        assert_eq!(
            calls,
            vec![
                ("Bool".to_string(), vec![("a:Baz".to_string(), ConditionValue::from("true"))]),
                ("StringEquals".to_string(), vec![("a:Foo".to_string(), ConditionValue::from("x"))]),
                ("StringLike".to_string(), vec![("a:Bar".to_string(), ConditionValue::from(vec!["y", "z"]))]),
            ]
        );
    }

    #[test_log::test]
    fn test_empty_replay_leaves_guard_unset() {
        let mut acc = ConditionAccumulator::new("a");
        let mut host = Recorder::default();
        assert!(!acc.replay_into(&mut host));
        assert!(!acc.is_replayed());

        acc.add("Foo", "x".into(), None);
        assert!(acc.replay_into(&mut host));
        assert_eq!(host.calls.len(), 1);
    }

    #[test_log::test]
    fn test_late_additions_not_replayed() {
        let mut acc = ConditionAccumulator::new("a");
        acc.add("Foo", "x".into(), None);
        let mut host = Recorder::default();
        acc.replay_into(&mut host);

        acc.add("Late", "y".into(), None);
        assert!(!acc.replay_into(&mut host));
        assert_eq!(host.calls.len(), 1);
        assert_eq!(acc.conditions().value("StringLike", "a:Late"), Some(&ConditionValue::from("y")));
    }
}
