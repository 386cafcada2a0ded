//! Static authorization tables for a representative set of AWS services.
//!
//! Each table lists a service's actions with their access levels, the ARN templates of its resource types, and the
//! service-specific condition keys with the operator used when the caller does not name one.

mod account;
mod ecr;
mod emr_containers;
mod glacier;
mod iam;
mod inspector;
mod iq;
mod launchwizard;
mod mobiletargeting;
mod networkmanager;
mod sqlworkbench;
mod synthetics;

use {
    crate::{ArnTemplate, ConditionOp},
    std::fmt::{Display, Formatter, Result as FmtResult},
};

/// The access level AWS assigns to an action.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum AccessLevel {
    List,
    Read,
    Write,
    PermissionsManagement,
    Tagging,
}

impl Display for AccessLevel {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::List => f.write_str("List"),
            Self::Read => f.write_str("Read"),
            Self::Write => f.write_str("Write"),
            Self::PermissionsManagement => f.write_str("Permissions management"),
            Self::Tagging => f.write_str("Tagging"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ActionDefinition {
    name: &'static str,
    access_level: AccessLevel,
    url: &'static str,
}

impl ActionDefinition {
    pub const fn new(name: &'static str, access_level: AccessLevel, url: &'static str) -> Self {
        Self {
            name,
            access_level,
            url,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn access_level(&self) -> AccessLevel {
        self.access_level
    }

    /// The API reference for the action. Empty when AWS publishes none.
    #[inline]
    pub fn url(&self) -> &'static str {
        self.url
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ResourceTypeDefinition {
    name: &'static str,
    arn: ArnTemplate,
}

impl ResourceTypeDefinition {
    pub const fn new(name: &'static str, arn: ArnTemplate) -> Self {
        Self {
            name,
            arn,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn arn(&self) -> &ArnTemplate {
        &self.arn
    }
}

/// A service condition key. Keys ending in a `${...}` placeholder (such as `ecr:ResourceTag/${TagKey}`) match any
/// non-empty suffix.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ConditionKeyDefinition {
    key: &'static str,
    default_operator: ConditionOp,
}

impl ConditionKeyDefinition {
    pub const fn new(key: &'static str, default_operator: ConditionOp) -> Self {
        Self {
            key,
            default_operator,
        }
    }

    #[inline]
    pub fn key(&self) -> &'static str {
        self.key
    }

    #[inline]
    pub fn default_operator(&self) -> ConditionOp {
        self.default_operator
    }

    /// Whether the fully qualified `key` is this key or an instance of its template. Key names are
    /// case-insensitive.
    pub fn matches(&self, key: &str) -> bool {
        match self.key.find("${") {
            None => self.key.eq_ignore_ascii_case(key),
            Some(pos) => {
                let fixed = &self.key[..pos];
                key.len() > fixed.len()
                    && key.is_char_boundary(fixed.len())
                    && key[..fixed.len()].eq_ignore_ascii_case(fixed)
            }
        }
    }
}

/// The authorization table of one service.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ServiceDefinition {
    prefix: &'static str,
    name: &'static str,
    reference: &'static str,
    actions: &'static [ActionDefinition],
    resource_types: &'static [ResourceTypeDefinition],
    condition_keys: &'static [ConditionKeyDefinition],
}

impl ServiceDefinition {
    pub const fn new(
        prefix: &'static str,
        name: &'static str,
        reference: &'static str,
        actions: &'static [ActionDefinition],
        resource_types: &'static [ResourceTypeDefinition],
        condition_keys: &'static [ConditionKeyDefinition],
    ) -> Self {
        Self {
            prefix,
            name,
            reference,
            actions,
            resource_types,
            condition_keys,
        }
    }

    #[inline]
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The service authorization reference page this table mirrors.
    #[inline]
    pub fn reference(&self) -> &'static str {
        self.reference
    }

    #[inline]
    pub fn actions(&self) -> &'static [ActionDefinition] {
        self.actions
    }

    #[inline]
    pub fn resource_types(&self) -> &'static [ResourceTypeDefinition] {
        self.resource_types
    }

    #[inline]
    pub fn condition_keys(&self) -> &'static [ConditionKeyDefinition] {
        self.condition_keys
    }

    /// Look up an action by name. Action names are case-insensitive.
    pub fn action(&self, name: &str) -> Option<&'static ActionDefinition> {
        self.actions.iter().find(|a| a.name.eq_ignore_ascii_case(name))
    }

    pub fn actions_with_level(&self, level: AccessLevel) -> impl Iterator<Item = &'static ActionDefinition> {
        self.actions.iter().filter(move |a| a.access_level == level)
    }

    pub fn resource_type(&self, name: &str) -> Option<&'static ResourceTypeDefinition> {
        self.resource_types.iter().find(|r| r.name == name)
    }

    /// Look up a condition key. A key without a `:` is taken to belong to this service.
    pub fn condition_key(&self, key: &str) -> Option<&'static ConditionKeyDefinition> {
        let qualified;
        let key = if key.contains(':') {
            key
        } else {
            qualified = format!("{}:{}", self.prefix, key);
            qualified.as_str()
        };

        self.condition_keys.iter().find(|c| c.matches(key))
    }
}

static SERVICES: &[ServiceDefinition] = &[
    account::SERVICE,
    ecr::SERVICE,
    emr_containers::SERVICE,
    glacier::SERVICE,
    iam::SERVICE,
    inspector::SERVICE,
    iq::SERVICE,
    launchwizard::SERVICE,
    mobiletargeting::SERVICE,
    networkmanager::SERVICE,
    sqlworkbench::SERVICE,
    synthetics::SERVICE,
];

/// Every service in the catalog, ordered by prefix.
pub fn services() -> &'static [ServiceDefinition] {
    SERVICES
}

/// Look up a service by its action prefix, e.g. `ecr` or `mobiletargeting`.
pub fn service(prefix: &str) -> Option<&'static ServiceDefinition> {
    SERVICES.iter().find(|s| s.prefix == prefix)
}

#[cfg(test)]
mod tests {
    use {
        super::{service, services, AccessLevel},
        crate::{condop, ArnScope},
        pretty_assertions::assert_eq,
    };

    #[test_log::test]
    fn test_lookup() {
        let prefixes: Vec<&str> = services().iter().map(|s| s.prefix()).collect();
        assert_eq!(
            prefixes,
            vec![
                "account",
                "ecr",
                "emr-containers",
                "glacier",
                "iam",
                "inspector",
                "iq",
                "launchwizard",
                "mobiletargeting",
                "networkmanager",
                "sqlworkbench",
                "synthetics",
            ]
        );

        let ecr = service("ecr").unwrap();
        assert_eq!(ecr.name(), "Amazon Elastic Container Registry");
        assert_eq!(ecr.actions().len(), 29);
        assert!(ecr.reference().ends_with("list_amazonelasticcontainerregistry.html"));
        assert!(service("s3").is_none());
        assert!(service("ECR").is_none());
    }

    #[test_log::test]
    fn test_actions() {
        let ecr = service("ecr").unwrap();
        let put_image = ecr.action("PutImage").unwrap();
        assert_eq!(put_image.access_level(), AccessLevel::Write);
        assert_eq!(put_image.url(), "https://docs.aws.amazon.com/AmazonECR/latest/APIReference/API_PutImage.html");
        assert_eq!(ecr.action("putimage").unwrap().name(), "PutImage");
        assert!(ecr.action("PutObject").is_none());

        let listing: Vec<&str> = ecr.actions_with_level(AccessLevel::List).map(|a| a.name()).collect();
        assert_eq!(listing, vec!["DescribeRepositories", "ListImages", "ListTagsForResource"]);
        assert_eq!(ecr.actions_with_level(AccessLevel::Read).count(), 9);
        assert_eq!(ecr.actions_with_level(AccessLevel::Write).count(), 14);
        assert_eq!(ecr.actions_with_level(AccessLevel::PermissionsManagement).count(), 1);
        assert_eq!(ecr.actions_with_level(AccessLevel::Tagging).count(), 2);

        let account = service("account").unwrap();
        assert_eq!(account.action("ListRegions").unwrap().url(), "");
        assert_eq!(AccessLevel::PermissionsManagement.to_string(), "Permissions management");
    }

    #[test_log::test]
    fn test_resource_types() {
        let networkmanager = service("networkmanager").unwrap();
        let site = networkmanager.resource_type("site").unwrap();
        assert_eq!(site.arn().placeholders(), vec!["GlobalNetworkId", "ResourceId"]);
        let scope = ArnScope::from_parts(Some("111122223333"), Some("us-west-2"), None);
        assert_eq!(site.arn().render(&scope, &["gn", "s1"]).unwrap(), "arn:aws:networkmanager::111122223333:site/gn/s1");

        let pinpoint = service("mobiletargeting").unwrap();
        let names: Vec<&str> = pinpoint.resource_types().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["apps", "campaigns", "journeys", "segments", "templates", "recommenders"]);
        assert!(service("iq").unwrap().resource_types().is_empty());
        assert!(pinpoint.resource_type("bucket").is_none());
    }

    #[test_log::test]
    fn test_condition_keys() {
        let iam = service("iam").unwrap();
        assert_eq!(iam.condition_key("iam:PolicyARN").unwrap().default_operator(), condop::ArnLike);
        assert_eq!(iam.condition_key("PassedToService").unwrap().default_operator(), condop::StringLike);
        assert_eq!(iam.condition_key("iam:ResourceTag/team").unwrap().key(), "iam:ResourceTag/${TagKey}");
        assert!(iam.condition_key("iam:ResourceTag/").is_none());
        assert!(iam.condition_key("ecr:ResourceTag/team").is_none());

        let glacier = service("glacier").unwrap();
        assert_eq!(glacier.condition_key("ArchiveAgeInDays").unwrap().key(), "glacier:ArchiveAgeInDays");
        assert!(glacier.condition_key("ResourceTag/vault").is_some());

        let account = service("account").unwrap();
        assert_eq!(account.condition_key("TargetRegion").unwrap().default_operator(), condop::StringEquals);
    }
}
