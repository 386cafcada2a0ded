use super::{AccessLevel::{List, Read, Write}, ActionDefinition, ServiceDefinition};

pub(super) const SERVICE: ServiceDefinition = ServiceDefinition::new(
    "launchwizard",
    "AWS Launch Wizard",
    "https://docs.aws.amazon.com/service-authorization/latest/reference/list_launchwizard.html",
    ACTIONS,
    &[],
    &[],
);

const ACTIONS: &[ActionDefinition] = &[
    ActionDefinition::new("DeleteApp", Write, "https://docs.aws.amazon.com/launchwizard/"),
    ActionDefinition::new("DescribeProvisionedApp", Read, "https://docs.aws.amazon.com/launchwizard/"),
    ActionDefinition::new("DescribeProvisioningEvents", Read, "https://docs.aws.amazon.com/launchwizard/"),
    ActionDefinition::new("GetInfrastructureSuggestion", Read, "https://docs.aws.amazon.com/launchwizard/"),
    ActionDefinition::new("GetIpAddress", Read, "https://docs.aws.amazon.com/launchwizard/"),
    ActionDefinition::new("GetResourceCostEstimate", Read, "https://docs.aws.amazon.com/launchwizard/"),
    ActionDefinition::new("ListProvisionedApps", List, "https://docs.aws.amazon.com/launchwizard/"),
    ActionDefinition::new("StartProvisioning", Write, "https://docs.aws.amazon.com/launchwizard/"),
];
