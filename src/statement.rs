use {
    crate::{display_json, serutil::StringList, Condition, Effect},
    log::error,
    serde::Serialize,
    serde_json::Value,
};

/// A rendered IAM policy statement.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    #[serde(skip_serializing_if = "Option::is_none")]
    sid: Option<String>,

    effect: Effect,

    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<StringList>,

    #[serde(skip_serializing_if = "Option::is_none")]
    not_action: Option<StringList>,

    #[serde(skip_serializing_if = "Option::is_none")]
    resource: Option<StringList>,

    #[serde(skip_serializing_if = "Option::is_none")]
    not_resource: Option<StringList>,

    #[serde(skip_serializing_if = "condition_is_empty")]
    condition: Option<Condition>,
}

fn condition_is_empty(condition: &Option<Condition>) -> bool {
    condition.as_ref().map_or(true, |c| !c.has_entries())
}

impl Statement {
    /// Assemble a statement from its parts. A condition block without entries is dropped.
    pub(crate) fn from_parts(
        sid: Option<String>,
        effect: Effect,
        actions: (Option<StringList>, Option<StringList>),
        resources: (Option<StringList>, Option<StringList>),
        condition: Option<Condition>,
    ) -> Self {
        Self {
            sid,
            effect,
            action: actions.0,
            not_action: actions.1,
            resource: resources.0,
            not_resource: resources.1,
            condition: condition.filter(Condition::has_entries),
        }
    }

    #[inline]
    pub fn sid(&self) -> Option<&str> {
        self.sid.as_deref()
    }

    #[inline]
    pub fn effect(&self) -> &Effect {
        &self.effect
    }

    #[inline]
    pub fn action(&self) -> Option<&StringList> {
        self.action.as_ref()
    }

    #[inline]
    pub fn not_action(&self) -> Option<&StringList> {
        self.not_action.as_ref()
    }

    #[inline]
    pub fn resource(&self) -> Option<&StringList> {
        self.resource.as_ref()
    }

    #[inline]
    pub fn not_resource(&self) -> Option<&StringList> {
        self.not_resource.as_ref()
    }

    #[inline]
    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    /// The statement as a JSON object.
    pub fn to_value(&self) -> Value {
        match serde_json::to_value(self) {
            Ok(value) => value,
            Err(e) => {
                error!("Failed to serialize statement: {}", e);
                Value::Null
            }
        }
    }
}

display_json!(Statement);

#[cfg(test)]
mod tests {
    use {
        crate::{serutil::StringList, Condition, ConditionValue, Effect, Statement},
        indoc::indoc,
        pretty_assertions::assert_eq,
        serde_json::json,
    };

    fn tagged(condition: Option<Condition>) -> Statement {
        Statement::from_parts(
            Some("Tagged".to_string()),
            Effect::Allow,
            (Some(StringList::from("ecr:PutImage")), None),
            (Some(StringList::from(vec!["arn:aws:ecr:us-east-1:111122223333:repository/app"])), None),
            condition,
        )
    }

    #[test_log::test]
    fn test_accessors() {
        let mut condition = Condition::new();
        condition.set("StringLike", "ecr:ResourceTag/env", "prod".into());
        let s = tagged(Some(condition));

        assert_eq!(s.sid(), Some("Tagged"));
        assert_eq!(s.effect(), &Effect::Allow);
        assert_eq!(s.action(), Some(&StringList::from("ecr:PutImage")));
        assert!(s.not_action().is_none());
        assert_eq!(s.resource().unwrap().len(), 1);
        assert!(s.not_resource().is_none());
        assert_eq!(
            s.condition().unwrap().value("StringLike", "ecr:ResourceTag/env"),
            Some(&ConditionValue::from("prod"))
        );

        let s2 = s.clone();
        assert_eq!(s, s2);
    }

    #[test_log::test]
    fn test_display() {
        let mut condition = Condition::new();
        condition.set("StringLike", "ecr:ResourceTag/env", "prod".into());

        assert_eq!(
            tagged(Some(condition)).to_string(),
            indoc! { r#"
            {
                "Sid": "Tagged",
                "Effect": "Allow",
                "Action": "ecr:PutImage",
                "Resource": [
                    "arn:aws:ecr:us-east-1:111122223333:repository/app"
                ],
                "Condition": {
                    "StringLike": {
                        "ecr:ResourceTag/env": "prod"
                    }
                }
            }"# }
        );
    }

    #[test_log::test]
    fn test_to_value() {
        let mut condition = Condition::new();
        condition.set("ForAnyValue:StringEquals", "aws:TagKeys", vec!["team"].into());
        let s = Statement::from_parts(
            None,
            Effect::Allow,
            (None, Some(StringList::List(vec!["iam:*".to_string()]))),
            (Some(StringList::List(vec!["*".to_string()])), None),
            Some(condition),
        );

        assert_eq!(s.to_value(), serde_json::to_value(&s).unwrap());
        assert_eq!(
            s.to_value(),
            json!({
                "Effect": "Allow",
                "NotAction": ["iam:*"],
                "Resource": ["*"],
                "Condition": {"ForAnyValue:StringEquals": {"aws:TagKeys": ["team"]}}
            })
        );
    }

    #[test_log::test]
    fn test_empty_condition_omitted() {
        let s = tagged(Some(Condition::new()));
        assert!(s.condition().is_none());
        assert_eq!(s, tagged(None));

        let value = s.to_value();
        assert!(value.get("Condition").is_none());
        assert!(!s.to_string().contains("Condition"));
        assert_eq!(
            value,
            json!({
                "Sid": "Tagged",
                "Effect": "Allow",
                "Action": "ecr:PutImage",
                "Resource": ["arn:aws:ecr:us-east-1:111122223333:repository/app"]
            })
        );
    }
}
