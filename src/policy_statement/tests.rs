use {
    crate::{
        condop, services::Ecr, ConditionMap, ConditionValue, Effect, GlobalConditions, MemoryHost, Operator,
        PolicyStatement, StatementHost, StatementProvider,
    },
    pretty_assertions::assert_eq,
    serde_json::{json, Value},
    std::{cell::RefCell, rc::Rc},
};

#[derive(Debug, Default)]
struct CallLog {
    conditions: Vec<(String, String, ConditionValue)>,
    effects: usize,
    actions: usize,
    resources: usize,
    renders: usize,
    freezes: usize,
}

/// A [MemoryHost] that records every call made to it.
struct RecordingHost {
    inner: MemoryHost,
    log: Rc<RefCell<CallLog>>,
}

impl RecordingHost {
    fn boxed(frozen: bool) -> (Box<dyn StatementHost>, Rc<RefCell<CallLog>>) {
        let log = Rc::new(RefCell::new(CallLog::default()));
        let mut inner = MemoryHost::new();
        if frozen {
            inner.freeze();
        }
        let host = Self {
            inner,
            log: log.clone(),
        };
        (Box::new(host), log)
    }
}

impl StatementHost for RecordingHost {
    fn add_actions(&mut self, actions: &[String]) {
        self.log.borrow_mut().actions += 1;
        self.inner.add_actions(actions);
    }

    fn add_not_actions(&mut self, actions: &[String]) {
        self.log.borrow_mut().actions += 1;
        self.inner.add_not_actions(actions);
    }

    fn add_resources(&mut self, resources: &[String]) {
        self.log.borrow_mut().resources += 1;
        self.inner.add_resources(resources);
    }

    fn add_not_resources(&mut self, resources: &[String]) {
        self.log.borrow_mut().resources += 1;
        self.inner.add_not_resources(resources);
    }

    fn set_effect(&mut self, effect: Effect) {
        self.log.borrow_mut().effects += 1;
        self.inner.set_effect(effect);
    }

    fn set_sid(&mut self, sid: &str) {
        self.inner.set_sid(sid);
    }

    fn add_condition(&mut self, operator: &str, condition: ConditionMap) {
        for (key, value) in condition.iter() {
            self.log.borrow_mut().conditions.push((operator.to_string(), key.clone(), value.clone()));
        }
        self.inner.add_condition(operator, condition);
    }

    fn to_statement_json(&self) -> Value {
        self.log.borrow_mut().renders += 1;
        self.inner.to_statement_json()
    }

    fn freeze(&mut self) {
        self.log.borrow_mut().freezes += 1;
        self.inner.freeze();
    }

    fn frozen(&self) -> bool {
        self.inner.frozen()
    }
}

#[test_log::test]
fn test_has_conditions_iff_any_added() {
    let mut statement = PolicyStatement::new("ecr");
    assert!(!statement.has_conditions());
    assert!(statement.conditions().is_empty());

    statement.add_condition("ResourceTag/env", "prod", None);
    assert!(statement.has_conditions());

    let mut other = PolicyStatement::new("ecr");
    other.add_condition("aws:SourceIp", Vec::<String>::new(), Some(condop::IpAddress.into()));
    assert!(other.has_conditions());
}

#[test_log::test]
fn test_key_prefixing() {
    let mut statement = PolicyStatement::new("glacier");
    statement
        .add_condition("ArchiveAgeInDays", 30, None)
        .add_condition("aws:SourceVpc", "vpc-1234", None)
        .add_condition("s3:prefix", "home/", None);

    let keys: Vec<&str> = statement.conditions()["StringLike"].keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, vec!["aws:SourceVpc", "glacier:ArchiveAgeInDays", "s3:prefix"]);

    let mut unprefixed = PolicyStatement::new("");
    unprefixed.add_condition("Bare", "x", None);
    assert!(unprefixed.conditions()["StringLike"].contains_key("Bare"));
}

#[test_log::test]
fn test_overwrite_law() {
    let mut statement = PolicyStatement::new("a");
    statement.add_condition("a:Foo", 1, None).add_condition("a:Foo", 2, None);

    assert_eq!(statement.conditions().entry_count(), 1);
    assert_eq!(statement.conditions().value("StringLike", "a:Foo"), Some(&ConditionValue::Single("2".to_string())));
    assert_eq!(statement.to_json()["Condition"], json!({"StringLike": {"a:Foo": "2"}}));
}

#[test_log::test]
fn test_coexistence_law() {
    let mut statement = PolicyStatement::new("a");
    statement.add_condition("a:Foo", "x", Some("StringEquals".into())).add_condition(
        "a:Foo",
        "y",
        Some("StringLike".into()),
    );

    assert_eq!(statement.conditions().entry_count(), 2);
    assert_eq!(
        statement.to_json()["Condition"],
        json!({
            "StringEquals": {"a:Foo": "x"},
            "StringLike": {"a:Foo": "y"}
        })
    );
}

#[test_log::test]
fn test_value_normalization() {
    let mut statement = PolicyStatement::new("a");
    statement
        .add_condition("a:Flag", true, Some(Operator::new().bool().into()))
        .add_condition("a:Count", 2.5, Some(condop::NumericLessThan.into()))
        .add_condition("a:Ids", vec![1.to_string(), 2.to_string()], Some(condop::StringEquals.into()));

    let condition = &statement.to_json()["Condition"];
    assert_eq!(condition["Bool"]["a:Flag"], json!("true"));
    assert_eq!(condition["NumericLessThan"]["a:Count"], json!("2.5"));
    assert_eq!(condition["StringEquals"]["a:Ids"], json!(["1", "2"]));
}

#[test_log::test]
fn test_omission_law() {
    let mut standalone = PolicyStatement::new("ecr");
    standalone.to("DescribeRepositories");
    let doc = standalone.to_json();
    assert!(doc.get("Condition").is_none());
    assert_eq!(doc, json!({"Effect": "Allow", "Action": ["ecr:DescribeRepositories"], "Resource": ["*"]}));

    let mut integrated = PolicyStatement::integrated("ecr", Box::new(MemoryHost::new()));
    integrated.to("DescribeRepositories");
    let doc = integrated.to_statement_json();
    assert!(doc.get("Condition").is_none());
    assert_eq!(doc, json!({"Effect": "Allow", "Action": "ecr:DescribeRepositories", "Resource": "*"}));
}

#[test_log::test]
fn test_ecr_put_image() {
    let mut ecr = Ecr::new();
    ecr.to("ecr:PutImage")
        .on("arn:aws:ecr:us-east-1:111122223333:repository/app")
        .if_resource_tag("env", "prod", None);

    assert_eq!(
        ecr.to_json(),
        json!({
            "Effect": "Allow",
            "Action": ["ecr:PutImage"],
            "Resource": ["arn:aws:ecr:us-east-1:111122223333:repository/app"],
            "Condition": {"StringLike": {"ecr:ResourceTag/env": "prod"}}
        })
    );

    let (host, log) = RecordingHost::boxed(false);
    let mut integrated = Ecr::integrated(host);
    integrated.to_put_image().on_repository("app", Some("111122223333"), Some("us-east-1"), None).if_resource_tag(
        "env",
        "prod",
        None,
    );

    assert_eq!(
        integrated.to_statement_json(),
        json!({
            "Effect": "Allow",
            "Action": "ecr:PutImage",
            "Resource": "arn:aws:ecr:us-east-1:111122223333:repository/app",
            "Condition": {"StringLike": {"ecr:ResourceTag/env": "prod"}}
        })
    );
    assert_eq!(
        log.borrow().conditions,
        vec![("StringLike".to_string(), "ecr:ResourceTag/env".to_string(), ConditionValue::from("prod"))]
    );
}

#[test_log::test]
fn test_request_tag_and_tag_keys() {
    let mut statement = PolicyStatement::new("ecr");
    statement
        .to("CreateRepository")
        .if_aws_request_tag("team", "a", None)
        .if_aws_tag_keys(vec!["team"], Some("ForAnyValue:StringEquals".into()));

    assert_eq!(
        statement.to_json()["Condition"],
        json!({
            "ForAnyValue:StringEquals": {"aws:TagKeys": ["team"]},
            "StringLike": {"aws:RequestTag/team": "a"}
        })
    );
    assert_eq!(statement.conditions().len(), 2);
}

#[test_log::test]
fn test_flush_happens_once() {
    let (host, log) = RecordingHost::boxed(false);
    let mut statement = PolicyStatement::integrated("ecr", host);
    statement
        .to("PutImage")
        .on("arn:aws:ecr:*:*:repository/app")
        .add_condition("ResourceTag/env", vec!["prod", "stage"], None)
        .add_condition("aws:SourceVpc", "vpc-1", Some(condop::StringEquals.into()))
        .add_condition("aws:SecureTransport", true, Some(condop::Bool.into()));

    let first = statement.to_json();
    let second = statement.to_statement_json();
    statement.freeze();
    let third = statement.to_json();

    assert_eq!(first, second);
    assert_eq!(second, third);
    assert_eq!(first["Condition"]["StringLike"]["ecr:ResourceTag/env"], json!(["prod", "stage"]));

    let log = log.borrow();
    assert_eq!(
        log.conditions,
        vec![
            ("Bool".to_string(), "aws:SecureTransport".to_string(), ConditionValue::from("true")),
            ("StringEquals".to_string(), "aws:SourceVpc".to_string(), ConditionValue::from("vpc-1")),
            ("StringLike".to_string(), "ecr:ResourceTag/env".to_string(), ConditionValue::from(vec!["prod", "stage"])),
        ]
    );
    assert_eq!(log.effects, 1);
    assert_eq!(log.actions, 1);
    assert_eq!(log.resources, 1);
    assert_eq!(log.renders, 3);
    assert_eq!(log.freezes, 1);
    assert!(statement.is_frozen());
    assert!(statement.accumulator().is_replayed());
}

#[test_log::test]
fn test_freeze_on_frozen_host() {
    let (host, log) = RecordingHost::boxed(true);
    let mut statement = PolicyStatement::integrated("ecr", host);
    statement.to("PutImage").add_condition("ResourceTag/env", "prod", None);
    statement.freeze();

    let log = log.borrow();
    assert!(log.conditions.is_empty());
    assert_eq!(log.effects, 0);
    assert_eq!(log.freezes, 1);
    assert!(!statement.accumulator().is_replayed());
}

#[test_log::test]
fn test_late_conditions_not_replayed() {
    let (host, log) = RecordingHost::boxed(false);
    let mut statement = PolicyStatement::integrated("ecr", host);
    statement.to("PutImage").add_condition("ResourceTag/env", "prod", None);
    statement.to_json();

    statement.add_condition("ResourceTag/team", "web", None);
    let doc = statement.to_json();

    assert_eq!(doc["Condition"], json!({"StringLike": {"ecr:ResourceTag/env": "prod"}}));
    assert_eq!(log.borrow().conditions.len(), 1);
    assert_eq!(statement.conditions().entry_count(), 2);
}

#[test_log::test]
fn test_empty_flush_leaves_replay_open() {
    let (host, log) = RecordingHost::boxed(false);
    let mut statement = PolicyStatement::integrated("ecr", host);
    statement.to("PutImage");
    assert!(statement.to_json().get("Condition").is_none());
    assert!(!statement.accumulator().is_replayed());

    statement.add_condition("ResourceTag/env", "prod", None);
    assert_eq!(statement.to_json()["Condition"], json!({"StringLike": {"ecr:ResourceTag/env": "prod"}}));
    assert_eq!(log.borrow().conditions.len(), 1);
    assert_eq!(log.borrow().effects, 1);
}

#[test_log::test]
fn test_integrated_not_action_not_resource() {
    let mut statement = PolicyStatement::with_sid("iam", "DenyOutsideAdmin");
    statement.attach_host(Box::new(MemoryHost::new()));
    statement
        .deny()
        .to("CreateUser")
        .to("iam:DeleteUser")
        .not_action()
        .on("arn:aws:iam::111122223333:user/admin")
        .not_resource()
        .if_aws_multi_factor_auth_present(Some(false));

    assert!(statement.is_integrated());
    assert_eq!(
        statement.to_statement_json(),
        json!({
            "Sid": "DenyOutsideAdmin",
            "Effect": "Deny",
            "NotAction": ["iam:CreateUser", "iam:DeleteUser"],
            "NotResource": "arn:aws:iam::111122223333:user/admin",
            "Condition": {"Bool": {"aws:MultiFactorAuthPresent": "false"}}
        })
    );
}

#[test_log::test]
fn test_standalone_document() {
    let mut statement = PolicyStatement::with_sid("ecr", "Everything");
    statement.all_actions().to("PutImage").to("ecr:PutImage").not_resource().on("arn:aws:ecr:*:*:repository/secret");

    assert_eq!(statement.actions(), &["ecr:*", "ecr:PutImage"]);
    assert_eq!(
        statement.document().to_string(),
        indoc::indoc! { r#"
        {
            "Sid": "Everything",
            "Effect": "Allow",
            "Action": [
                "ecr:*",
                "ecr:PutImage"
            ],
            "NotResource": [
                "arn:aws:ecr:*:*:repository/secret"
            ]
        }"# }
    );

    assert!(!statement.is_frozen());
    statement.freeze();
    assert!(statement.is_frozen());
    assert!(statement.host().is_none());

    statement.add_condition("ResourceTag/env", "prod", None);
    assert_eq!(statement.to_json()["Condition"], json!({"StringLike": {"ecr:ResourceTag/env": "prod"}}));
}
