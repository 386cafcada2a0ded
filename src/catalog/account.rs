use {
    super::{AccessLevel::{List, Write}, ActionDefinition, ConditionKeyDefinition, ServiceDefinition},
    crate::condop,
};

pub(super) const SERVICE: ServiceDefinition = ServiceDefinition::new(
    "account",
    "AWS Accounts",
    "https://docs.aws.amazon.com/IAM/latest/UserGuide/list_awsaccounts.html",
    ACTIONS,
    &[],
    CONDITION_KEYS,
);

const ACTIONS: &[ActionDefinition] = &[
    ActionDefinition::new("DisableRegion", Write, ""),
    ActionDefinition::new("EnableRegion", Write, ""),
    ActionDefinition::new("ListRegions", List, ""),
];

const CONDITION_KEYS: &[ConditionKeyDefinition] = &[
    ConditionKeyDefinition::new("account:TargetRegion", condop::StringEquals),
];
