use {
    crate::{
        catalog::{self, AccessLevel, ServiceDefinition},
        ArnScope, ConditionValue, FloydError, OperatorToken, PolicyStatement, StatementHost, StatementProvider,
    },
    log::debug,
    regex::Regex,
};

/// A statement checked against a service's catalog table.
///
/// Unlike the unchecked [StatementProvider::to] and [StatementProvider::with_condition], every action, resource type,
/// and service condition key passed here must exist in the service's table.
#[derive(Debug)]
pub struct ServiceStatement {
    definition: &'static ServiceDefinition,
    scope: ArnScope,
    statement: PolicyStatement,
}

impl ServiceStatement {
    pub fn new(definition: &'static ServiceDefinition) -> Self {
        Self {
            definition,
            scope: ArnScope::default(),
            statement: PolicyStatement::new(definition.prefix()),
        }
    }

    /// A standalone statement for the service with the given action prefix.
    pub fn for_prefix(prefix: &str) -> Result<Self, FloydError> {
        match catalog::service(prefix) {
            Some(definition) => Ok(Self::new(definition)),
            None => Err(FloydError::UnknownService(prefix.to_string())),
        }
    }

    /// A statement for the service with the given action prefix, embedded in `host`.
    pub fn integrated(prefix: &str, host: Box<dyn StatementHost>) -> Result<Self, FloydError> {
        let mut result = Self::for_prefix(prefix)?;
        result.statement.attach_host(host);
        Ok(result)
    }

    #[inline]
    pub fn definition(&self) -> &'static ServiceDefinition {
        self.definition
    }

    /// The partition, account, and region used by [ServiceStatement::on_resource_type].
    #[inline]
    pub fn scope(&self) -> &ArnScope {
        &self.scope
    }

    pub fn set_scope(&mut self, scope: ArnScope) -> &mut Self {
        self.scope = scope;
        self
    }

    /// Add a single action from the table. The name may be bare or carry this service's prefix.
    pub fn grant(&mut self, action: &str) -> Result<&mut Self, FloydError> {
        let name = match action.split_once(':') {
            Some((prefix, name)) if prefix == self.definition.prefix() => name,
            Some(_) => return Err(FloydError::UnknownAction(action.to_string())),
            None => action,
        };

        match self.definition.action(name) {
            Some(definition) => {
                self.statement.add_action(definition.name());
                Ok(self)
            }
            None => Err(FloydError::UnknownAction(format!("{}:{}", self.definition.prefix(), name))),
        }
    }

    /// Add the ARN of a resource of the named type, in this statement's scope.
    pub fn on_resource_type(&mut self, resource_type: &str, ids: &[&str]) -> Result<&mut Self, FloydError> {
        let scope = self.scope.clone();
        self.on_resource_type_in(resource_type, ids, &scope)
    }

    /// Add the ARN of a resource of the named type, in an explicit scope.
    pub fn on_resource_type_in(
        &mut self,
        resource_type: &str,
        ids: &[&str],
        scope: &ArnScope,
    ) -> Result<&mut Self, FloydError> {
        let definition = self
            .definition
            .resource_type(resource_type)
            .ok_or_else(|| FloydError::UnknownResourceType(resource_type.to_string()))?;
        let arn = definition.arn().render(scope, ids)?;
        self.statement.add_resource(&arn);
        Ok(self)
    }

    /// Add a condition on one of the service's own keys, using the table's default operator when `operator` is
    /// `None`.
    pub fn if_service_key<V: Into<ConditionValue>>(
        &mut self,
        key: &str,
        value: V,
        operator: Option<OperatorToken>,
    ) -> Result<&mut Self, FloydError> {
        let definition = self
            .definition
            .condition_key(key)
            .ok_or_else(|| FloydError::UnknownConditionKey(self.statement.accumulator().qualify_key(key)))?;
        let operator = operator.unwrap_or_else(|| definition.default_operator().into());
        self.statement.add_condition(key, value, Some(operator));
        Ok(self)
    }

    /// Add every action of the given access level.
    pub fn all_actions_with_level(&mut self, level: AccessLevel) -> &mut Self {
        let before = self.statement.actions().len();
        for action in self.definition.actions_with_level(level) {
            self.statement.add_action(action.name());
        }
        debug!("Granted {} {} actions", self.statement.actions().len() - before, level);
        self
    }

    #[inline]
    pub fn all_list_actions(&mut self) -> &mut Self {
        self.all_actions_with_level(AccessLevel::List)
    }

    #[inline]
    pub fn all_read_actions(&mut self) -> &mut Self {
        self.all_actions_with_level(AccessLevel::Read)
    }

    #[inline]
    pub fn all_write_actions(&mut self) -> &mut Self {
        self.all_actions_with_level(AccessLevel::Write)
    }

    #[inline]
    pub fn all_permissions_management_actions(&mut self) -> &mut Self {
        self.all_actions_with_level(AccessLevel::PermissionsManagement)
    }

    #[inline]
    pub fn all_tagging_actions(&mut self) -> &mut Self {
        self.all_actions_with_level(AccessLevel::Tagging)
    }

    /// Add every action whose bare name matches `pattern`. The pattern is not anchored.
    pub fn all_matching_actions(&mut self, pattern: &str) -> Result<&mut Self, FloydError> {
        let regex = Regex::new(pattern).map_err(|_| FloydError::InvalidPattern(pattern.to_string()))?;
        for action in self.definition.actions().iter().filter(|a| regex.is_match(a.name())) {
            self.statement.add_action(action.name());
        }
        Ok(self)
    }
}

impl StatementProvider for ServiceStatement {
    #[inline]
    fn statement(&self) -> &PolicyStatement {
        &self.statement
    }

    #[inline]
    fn statement_mut(&mut self) -> &mut PolicyStatement {
        &mut self.statement
    }
}

#[cfg(test)]
mod tests {
    use {
        super::ServiceStatement,
        crate::{ArnScope, FloydError, GlobalConditions, MemoryHost, StatementProvider},
        indoc::indoc,
        pretty_assertions::assert_eq,
        serde_json::json,
    };

    #[test_log::test]
    fn test_unknown_service() {
        assert_eq!(ServiceStatement::for_prefix("s3").unwrap_err(), FloydError::UnknownService("s3".to_string()));
        assert!(ServiceStatement::integrated("nope", Box::new(MemoryHost::default())).is_err());
    }

    #[test_log::test]
    fn test_grant() {
        let mut ecr = ServiceStatement::for_prefix("ecr").unwrap();
        ecr.grant("PutImage").unwrap().grant("ecr:BatchGetImage").unwrap().grant("initiatelayerupload").unwrap();
        assert_eq!(ecr.statement().actions(), &["ecr:PutImage", "ecr:BatchGetImage", "ecr:InitiateLayerUpload"]);

        assert_eq!(ecr.grant("PutObject").unwrap_err(), FloydError::UnknownAction("ecr:PutObject".to_string()));
        assert_eq!(ecr.grant("s3:PutImage").unwrap_err(), FloydError::UnknownAction("s3:PutImage".to_string()));
        assert_eq!(ecr.statement().actions().len(), 3);
    }

    #[test_log::test]
    fn test_bulk_grants() {
        let mut ecr = ServiceStatement::for_prefix("ecr").unwrap();
        ecr.all_list_actions();
        assert_eq!(ecr.statement().actions(), &["ecr:DescribeRepositories", "ecr:ListImages", "ecr:ListTagsForResource"]);

        ecr.all_tagging_actions().all_permissions_management_actions();
        assert_eq!(ecr.statement().actions().len(), 6);
        ecr.all_read_actions().all_write_actions();
        assert_eq!(ecr.statement().actions().len(), 29);

        let mut glacier = ServiceStatement::for_prefix("glacier").unwrap();
        glacier.all_matching_actions("^(Get|List).*Vault").unwrap();
        assert!(!glacier.statement().actions().is_empty());
        assert!(glacier
            .statement()
            .actions()
            .iter()
            .all(|a| a.starts_with("glacier:Get") || a.starts_with("glacier:List")));

        assert_eq!(glacier.all_matching_actions("(").unwrap_err(), FloydError::InvalidPattern("(".to_string()));
    }

    #[test_log::test]
    fn test_resources() {
        let mut emr = ServiceStatement::for_prefix("emr-containers").unwrap();
        emr.grant("DescribeJobRun").unwrap().on_resource_type("jobRun", &["vc1", "jr1"]).unwrap();
        emr.set_scope(ArnScope::builder().account("111122223333").region("eu-west-1").build().unwrap());
        emr.on_resource_type("virtualCluster", &["vc2"]).unwrap();
        emr.on_resource_type_in("jobTemplate", &["jt"], &ArnScope::from_parts(None, None, Some("aws-cn"))).unwrap();

        assert_eq!(
            emr.statement().resources(),
            &[
                "arn:aws:emr-containers:*:*:/virtualclusters/vc1/jobruns/jr1",
                "arn:aws:emr-containers:eu-west-1:111122223333:/virtualclusters/vc2",
                "arn:aws-cn:emr-containers:*:*:/jobtemplates/jt",
            ]
        );

        assert_eq!(
            emr.on_resource_type("bucket", &["b"]).unwrap_err(),
            FloydError::UnknownResourceType("bucket".to_string())
        );
        assert!(matches!(
            emr.on_resource_type("jobRun", &["vc1"]).unwrap_err(),
            FloydError::InvalidArnParameters(_)
        ));
    }

    #[test_log::test]
    fn test_service_keys() {
        let mut iam = ServiceStatement::for_prefix("iam").unwrap();
        iam.grant("AttachRolePolicy")
            .unwrap()
            .if_service_key("PolicyARN", "arn:aws:iam::aws:policy/ReadOnlyAccess", None)
            .unwrap()
            .if_service_key("iam:ResourceTag/team", "platform", None)
            .unwrap()
            .if_service_key(
                "PassedToService",
                vec!["ec2.amazonaws.com", "ecs.amazonaws.com"],
                Some("StringEquals".into()),
            )
            .unwrap();

        assert_eq!(
            iam.if_service_key("Nope", "x", None).unwrap_err(),
            FloydError::UnknownConditionKey("iam:Nope".to_string())
        );

        assert_eq!(
            iam.to_json(),
            json!({
                "Effect": "Allow",
                "Action": ["iam:AttachRolePolicy"],
                "Resource": ["*"],
                "Condition": {
                    "ArnLike": {"iam:PolicyARN": "arn:aws:iam::aws:policy/ReadOnlyAccess"},
                    "StringEquals": {"iam:PassedToService": ["ec2.amazonaws.com", "ecs.amazonaws.com"]},
                    "StringLike": {"iam:ResourceTag/team": "platform"},
                }
            })
        );
    }

    #[test_log::test]
    fn test_integrated() {
        let mut account = ServiceStatement::integrated("account", Box::new(MemoryHost::default())).unwrap();
        account
            .grant("EnableRegion")
            .unwrap()
            .if_service_key("TargetRegion", "ap-east-1", None)
            .unwrap()
            .if_aws_principal_org_id("o-1234567", None);

        let rendered = serde_json::to_string_pretty(&account.to_statement_json()).unwrap();
        assert_eq!(
            rendered,
            indoc! { r#"
            {
              "Action": "account:EnableRegion",
              "Condition": {
                "StringEquals": {
                  "account:TargetRegion": "ap-east-1"
                },
                "StringLike": {
                  "aws:PrincipalOrgID": "o-1234567"
                }
              },
              "Effect": "Allow",
              "Resource": "*"
            }"# }
        );

        account.freeze();
        assert!(account.statement().host().unwrap().frozen());
    }
}
