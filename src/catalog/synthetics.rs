use super::{AccessLevel::{Read, Write}, ActionDefinition, ServiceDefinition};

pub(super) const SERVICE: ServiceDefinition = ServiceDefinition::new(
    "synthetics",
    "Amazon CloudWatch Synthetics",
    "https://docs.aws.amazon.com/IAM/latest/UserGuide/list_amazoncloudwatchsynthetics.html",
    ACTIONS,
    &[],
    &[],
);

const ACTIONS: &[ActionDefinition] = &[
    ActionDefinition::new(
        "CreateCanary",
        Write,
        "https://docs.aws.amazon.com/AmazonSynthetics/latest/APIReference/API_CreateCanary.html",
    ),
    ActionDefinition::new(
        "DeleteCanary",
        Write,
        "https://docs.aws.amazon.com/AmazonSynthetics/latest/APIReference/API_DeleteCanary.html",
    ),
    ActionDefinition::new(
        "DescribeCanaries",
        Read,
        "https://docs.aws.amazon.com/AmazonSynthetics/latest/APIReference/API_DescribeCanaries.html",
    ),
    ActionDefinition::new(
        "DescribeCanariesLastRun",
        Read,
        "https://docs.aws.amazon.com/AmazonSynthetics/latest/APIReference/API_DescribeCanariesLastRun.html",
    ),
    ActionDefinition::new(
        "GetCanaryRuns",
        Read,
        "https://docs.aws.amazon.com/AmazonSynthetics/latest/APIReference/API_GetCanaryRuns.html",
    ),
    ActionDefinition::new(
        "ListTagsForResource",
        Read,
        "https://docs.aws.amazon.com/AmazonSynthetics/latest/APIReference/API_ListTagsForResource.html",
    ),
    ActionDefinition::new(
        "StartCanary",
        Write,
        "https://docs.aws.amazon.com/AmazonSynthetics/latest/APIReference/API_StartCanary.html",
    ),
    ActionDefinition::new(
        "StopCanary",
        Write,
        "https://docs.aws.amazon.com/AmazonSynthetics/latest/APIReference/API_StopCanary.html",
    ),
    ActionDefinition::new(
        "TagResource",
        Write,
        "https://docs.aws.amazon.com/AmazonSynthetics/latest/APIReference/API_TagResource.html",
    ),
    ActionDefinition::new(
        "UntagResource",
        Write,
        "https://docs.aws.amazon.com/AmazonSynthetics/latest/APIReference/API_UntagResource.html",
    ),
    ActionDefinition::new(
        "UpdateCanary",
        Write,
        "https://docs.aws.amazon.com/AmazonSynthetics/latest/APIReference/API_UpdateCanary.html",
    ),
];
