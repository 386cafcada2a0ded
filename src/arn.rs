use {
    crate::FloydError,
    derive_builder::Builder,
    lazy_static::lazy_static,
    log::trace,
    regex::{Captures, Regex},
    std::fmt::{Display, Formatter, Result as FmtResult},
};

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\$\{([A-Za-z0-9]+)\}").unwrap();
}

/// The partition, account, and region substituted into ARN templates.
///
/// Unset parts default to `aws` for the partition and `*` for the account and region.
#[derive(Builder, Clone, Debug, Eq, Hash, PartialEq)]
pub struct ArnScope {
    #[builder(setter(into), default = "\"aws\".to_string()")]
    partition: String,

    #[builder(setter(into), default = "\"*\".to_string()")]
    account: String,

    #[builder(setter(into), default = "\"*\".to_string()")]
    region: String,
}

impl ArnScope {
    #[inline]
    pub fn builder() -> ArnScopeBuilder {
        ArnScopeBuilder::default()
    }

    /// A scope built from optional overrides, falling back to the defaults.
    pub fn from_parts(account: Option<&str>, region: Option<&str>, partition: Option<&str>) -> Self {
        Self {
            partition: partition.unwrap_or("aws").to_string(),
            account: account.unwrap_or("*").to_string(),
            region: region.unwrap_or("*").to_string(),
        }
    }

    #[inline]
    pub fn partition(&self) -> &str {
        &self.partition
    }

    #[inline]
    pub fn account(&self) -> &str {
        &self.account
    }

    #[inline]
    pub fn region(&self) -> &str {
        &self.region
    }
}

impl Default for ArnScope {
    fn default() -> Self {
        Self::from_parts(None, None, None)
    }
}

/// An ARN pattern such as `arn:${Partition}:ecr:${Region}:${Account}:repository/${RepositoryName}`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ArnTemplate(&'static str);

impl ArnTemplate {
    pub const fn new(template: &'static str) -> Self {
        Self(template)
    }

    #[inline]
    pub fn template(&self) -> &'static str {
        self.0
    }

    /// The resource-specific placeholder names, in order of appearance.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let template: &'static str = self.0;
        PLACEHOLDER
            .captures_iter(template)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str())
            .filter(|name| !matches!(*name, "Partition" | "Region" | "Account"))
            .collect()
    }

    /// Fill in the scope placeholders from `scope` and the remaining placeholders from `ids`, in order.
    pub fn render(&self, scope: &ArnScope, ids: &[&str]) -> Result<String, FloydError> {
        if self.placeholders().len() != ids.len() {
            return Err(FloydError::InvalidArnParameters(self.0.to_string()));
        }

        let mut remaining = ids.iter();
        let arn = PLACEHOLDER.replace_all(self.0, |c: &Captures| match &c[1] {
            "Partition" => scope.partition().to_string(),
            "Region" => scope.region().to_string(),
            "Account" => scope.account().to_string(),
            _ => remaining.next().map(|id| id.to_string()).unwrap_or_default(),
        });

        trace!("Rendered {} as {}", self.0, arn);
        Ok(arn.into_owned())
    }
}

impl Display for ArnTemplate {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{ArnScope, ArnTemplate},
        crate::FloydError,
        pretty_assertions::assert_eq,
    };

    const REPOSITORY: ArnTemplate =
        ArnTemplate::new("arn:${Partition}:ecr:${Region}:${Account}:repository/${RepositoryName}");
    const JOB_RUN: ArnTemplate = ArnTemplate::new(
        "arn:${Partition}:emr-containers:${Region}:${Account}:/virtualclusters/${VirtualClusterId}/jobruns/${JobRunId}",
    );

    #[test_log::test]
    fn test_scope_defaults() {
        let scope = ArnScope::default();
        assert_eq!(scope.partition(), "aws");
        assert_eq!(scope.account(), "*");
        assert_eq!(scope.region(), "*");
        assert_eq!(ArnScope::builder().build().unwrap(), scope);

        let scope = ArnScope::builder().partition("aws-cn").region("cn-north-1").build().unwrap();
        assert_eq!(scope.partition(), "aws-cn");
        assert_eq!(scope.account(), "*");
        assert_eq!(scope.region(), "cn-north-1");

        let scope = ArnScope::from_parts(Some("111122223333"), None, Some("aws-us-gov"));
        assert_eq!(scope.account(), "111122223333");
        assert_eq!(scope.region(), "*");
        assert_eq!(scope.partition(), "aws-us-gov");
    }

    #[test_log::test]
    fn test_render() {
        assert_eq!(REPOSITORY.placeholders(), vec!["RepositoryName"]);
        assert_eq!(REPOSITORY.render(&ArnScope::default(), &["app"]).unwrap(), "arn:aws:ecr:*:*:repository/app");

        let scope = ArnScope::from_parts(Some("111122223333"), Some("us-east-1"), None);
        assert_eq!(
            REPOSITORY.render(&scope, &["app"]).unwrap(),
            "arn:aws:ecr:us-east-1:111122223333:repository/app"
        );

        assert_eq!(JOB_RUN.placeholders(), vec!["VirtualClusterId", "JobRunId"]);
        assert_eq!(
            JOB_RUN.render(&scope, &["vc1", "jr2"]).unwrap(),
            "arn:aws:emr-containers:us-east-1:111122223333:/virtualclusters/vc1/jobruns/jr2"
        );
        assert_eq!(REPOSITORY.to_string(), REPOSITORY.template());
    }

    #[test_log::test]
    fn test_parameter_mismatch() {
        assert_eq!(
            JOB_RUN.render(&ArnScope::default(), &["vc1"]).unwrap_err(),
            FloydError::InvalidArnParameters(JOB_RUN.template().to_string())
        );
        assert!(REPOSITORY.render(&ArnScope::default(), &[]).is_err());
        assert!(REPOSITORY.render(&ArnScope::default(), &["a", "b"]).is_err());
    }
}
