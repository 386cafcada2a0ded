use {
    crate::{ConditionMap, Effect},
    log::warn,
    serde_json::{Map, Value},
};

/// A policy-synthesis framework that owns the rendered statement.
///
/// A [PolicyStatement](crate::PolicyStatement) bound to a host pushes its base data and its conditions through
/// these calls on first serialization, then lets the host render the final document.
pub trait StatementHost {
    fn add_actions(&mut self, actions: &[String]);
    fn add_not_actions(&mut self, actions: &[String]);
    fn add_resources(&mut self, resources: &[String]);
    fn add_not_resources(&mut self, resources: &[String]);
    fn set_effect(&mut self, effect: Effect);
    fn set_sid(&mut self, sid: &str);

    /// Merge a single-key condition into the operator's block.
    fn add_condition(&mut self, operator: &str, condition: ConditionMap);

    fn to_statement_json(&self) -> Value;

    fn to_json(&self) -> Value {
        self.to_statement_json()
    }

    fn freeze(&mut self);
    fn frozen(&self) -> bool;
}

/// An in-memory host that assembles a statement document.
///
/// Conditions are merged per operator, later keys overwriting earlier ones. One-element lists are rendered as
/// scalars. Mutations after [StatementHost::freeze] are ignored with a warning.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryHost {
    sid: Option<String>,
    effect: Effect,
    actions: Vec<String>,
    not_actions: Vec<String>,
    resources: Vec<String>,
    not_resources: Vec<String>,
    condition: Map<String, Value>,
    frozen: bool,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    fn check_mutable(&self, what: &str) -> bool {
        if self.frozen {
            warn!("Ignoring {} on a frozen statement", what);
        }
        !self.frozen
    }
}

fn extend_unique(target: &mut Vec<String>, items: &[String]) {
    for item in items {
        if !target.contains(item) {
            target.push(item.clone());
        }
    }
}

fn render_list(items: &[String]) -> Value {
    match items {
        [single] => Value::String(single.clone()),
        _ => Value::Array(items.iter().cloned().map(Value::String).collect()),
    }
}

impl StatementHost for MemoryHost {
    fn add_actions(&mut self, actions: &[String]) {
        if self.check_mutable("add_actions") {
            extend_unique(&mut self.actions, actions);
        }
    }

    fn add_not_actions(&mut self, actions: &[String]) {
        if self.check_mutable("add_not_actions") {
            extend_unique(&mut self.not_actions, actions);
        }
    }

    fn add_resources(&mut self, resources: &[String]) {
        if self.check_mutable("add_resources") {
            extend_unique(&mut self.resources, resources);
        }
    }

    fn add_not_resources(&mut self, resources: &[String]) {
        if self.check_mutable("add_not_resources") {
            extend_unique(&mut self.not_resources, resources);
        }
    }

    fn set_effect(&mut self, effect: Effect) {
        if self.check_mutable("set_effect") {
            self.effect = effect;
        }
    }

    fn set_sid(&mut self, sid: &str) {
        if self.check_mutable("set_sid") {
            self.sid = Some(sid.to_string());
        }
    }

    fn add_condition(&mut self, operator: &str, condition: ConditionMap) {
        if !self.check_mutable("add_condition") {
            return;
        }

        let block = self.condition.entry(operator.to_string()).or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(block) = block {
            for (key, value) in condition {
                let value = match value.to_vec().as_slice() {
                    [single] => Value::String(single.to_string()),
                    values => Value::Array(values.iter().map(|v| Value::String(v.to_string())).collect()),
                };
                block.insert(key, value);
            }
        }
    }

    fn to_statement_json(&self) -> Value {
        let mut doc = Map::new();
        if let Some(sid) = &self.sid {
            doc.insert("Sid".to_string(), Value::String(sid.clone()));
        }
        doc.insert("Effect".to_string(), Value::String(self.effect.to_string()));

        for (name, items) in [
            ("Action", &self.actions),
            ("NotAction", &self.not_actions),
            ("Resource", &self.resources),
            ("NotResource", &self.not_resources),
        ] {
            if !items.is_empty() {
                doc.insert(name.to_string(), render_list(items));
            }
        }

        if !self.condition.is_empty() {
            doc.insert("Condition".to_string(), Value::Object(self.condition.clone()));
        }

        Value::Object(doc)
    }

    fn freeze(&mut self) {
        self.frozen = true;
    }

    fn frozen(&self) -> bool {
        self.frozen
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{MemoryHost, StatementHost},
        crate::{ConditionMap, ConditionValue, Effect},
        pretty_assertions::assert_eq,
        serde_json::json,
    };

    fn single(key: &str, value: ConditionValue) -> ConditionMap {
        let mut map = ConditionMap::new();
        map.insert(key.to_string(), value);
        map
    }

    #[test_log::test]
    fn test_render() {
        let mut host = MemoryHost::new();
        host.set_sid("s1");
        host.set_effect(Effect::Deny);
        host.add_actions(&["ecr:PutImage".to_string()]);
        host.add_actions(&["ecr:PutImage".to_string(), "ecr:BatchGetImage".to_string()]);
        host.add_resources(&["*".to_string()]);
        host.add_condition("StringLike", single("ecr:ResourceTag/env", "prod".into()));
        host.add_condition("StringLike", single("ecr:ResourceTag/team", vec!["a", "b"].into()));

        assert_eq!(
            host.to_json(),
            json!({
                "Sid": "s1",
                "Effect": "Deny",
                "Action": ["ecr:PutImage", "ecr:BatchGetImage"],
                "Resource": "*",
                "Condition": {
                    "StringLike": {
                        "ecr:ResourceTag/env": "prod",
                        "ecr:ResourceTag/team": ["a", "b"]
                    }
                }
            })
        );
    }

    #[test_log::test]
    fn test_frozen_ignores_mutation() {
        let mut host = MemoryHost::new();
        host.add_not_actions(&["iam:*".to_string()]);
        host.add_not_resources(&["arn:aws:iam::*:role/admin".to_string()]);
        assert!(!host.frozen());
        host.freeze();
        assert!(host.frozen());

        host.add_condition("Bool", single("aws:SecureTransport", true.into()));
        host.set_effect(Effect::Deny);
        assert_eq!(
            host.to_statement_json(),
            json!({
                "Effect": "Allow",
                "NotAction": "iam:*",
                "NotResource": "arn:aws:iam::*:role/admin"
            })
        );
    }
}
