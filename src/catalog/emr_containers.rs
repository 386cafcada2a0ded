use {
    super::{
        AccessLevel::{List, Read, Tagging, Write},
        ActionDefinition, ConditionKeyDefinition, ResourceTypeDefinition, ServiceDefinition,
    },
    crate::{ArnTemplate, condop},
};

pub(super) const SERVICE: ServiceDefinition = ServiceDefinition::new(
    "emr-containers",
    "Amazon EMR on EKS (EMR Containers)",
    "https://docs.aws.amazon.com/service-authorization/latest/reference/list_amazonemroneksemrcontainers.html",
    ACTIONS,
    RESOURCE_TYPES,
    CONDITION_KEYS,
);

const ACTIONS: &[ActionDefinition] = &[
    ActionDefinition::new(
        "CancelJobRun",
        Write,
        "https://docs.aws.amazon.com/emr-on-eks/latest/APIReference/API_CancelJobRun.html",
    ),
    ActionDefinition::new(
        "CreateJobTemplate",
        Write,
        "https://docs.aws.amazon.com/emr-on-eks/latest/APIReference/API_CreateJobTemplate.html",
    ),
    ActionDefinition::new(
        "CreateManagedEndpoint",
        Write,
        "https://docs.aws.amazon.com/emr-on-eks/latest/APIReference/API_CreateManagedEndpoint.html",
    ),
    ActionDefinition::new(
        "CreateVirtualCluster",
        Write,
        "https://docs.aws.amazon.com/emr-on-eks/latest/APIReference/API_CreateVirtualCluster.html",
    ),
    ActionDefinition::new(
        "DeleteJobTemplate",
        Write,
        "https://docs.aws.amazon.com/emr-on-eks/latest/APIReference/API_DeleteJobTemplate.html",
    ),
    ActionDefinition::new(
        "DeleteManagedEndpoint",
        Write,
        "https://docs.aws.amazon.com/emr-on-eks/latest/APIReference/API_DeleteManagedEndpoint.html",
    ),
    ActionDefinition::new(
        "DeleteVirtualCluster",
        Write,
        "https://docs.aws.amazon.com/emr-on-eks/latest/APIReference/API_DeleteVirtualCluster.html",
    ),
    ActionDefinition::new(
        "DescribeJobRun",
        Read,
        "https://docs.aws.amazon.com/emr-on-eks/latest/APIReference/API_DescribeJobRun.html",
    ),
    ActionDefinition::new(
        "DescribeJobTemplate",
        Read,
        "https://docs.aws.amazon.com/emr-on-eks/latest/APIReference/API_DescribeJobTemplate.html",
    ),
    ActionDefinition::new(
        "DescribeManagedEndpoint",
        Read,
        "https://docs.aws.amazon.com/emr-on-eks/latest/APIReference/API_DescribeManagedEndpoint.html",
    ),
    ActionDefinition::new(
        "DescribeVirtualCluster",
        Read,
        "https://docs.aws.amazon.com/emr-on-eks/latest/APIReference/API_DescribeVirtualCluster.html",
    ),
    ActionDefinition::new(
        "ListJobRuns",
        List,
        "https://docs.aws.amazon.com/emr-on-eks/latest/APIReference/API_ListJobRuns.html",
    ),
    ActionDefinition::new(
        "ListJobTemplates",
        List,
        "https://docs.aws.amazon.com/emr-on-eks/latest/APIReference/API_ListJobTemplates.html",
    ),
    ActionDefinition::new(
        "ListManagedEndpoints",
        List,
        "https://docs.aws.amazon.com/emr-on-eks/latest/APIReference/API_ListManagedEndpoints.html",
    ),
    ActionDefinition::new(
        "ListTagsForResource",
        List,
        "https://docs.aws.amazon.com/emr-on-eks/latest/APIReference/API_ListTagsForResource.html",
    ),
    ActionDefinition::new(
        "ListVirtualClusters",
        List,
        "https://docs.aws.amazon.com/emr-on-eks/latest/APIReference/API_ListVirtualClusters.html",
    ),
    ActionDefinition::new(
        "StartJobRun",
        Write,
        "https://docs.aws.amazon.com/emr-on-eks/latest/APIReference/API_StartJobRun.html",
    ),
    ActionDefinition::new(
        "TagResource",
        Tagging,
        "https://docs.aws.amazon.com/emr-on-eks/latest/APIReference/API_TagResource.html",
    ),
    ActionDefinition::new(
        "UntagResource",
        Tagging,
        "https://docs.aws.amazon.com/emr-on-eks/latest/APIReference/API_UntagResource.html",
    ),
];

const RESOURCE_TYPES: &[ResourceTypeDefinition] = &[
    ResourceTypeDefinition::new(
        "virtualCluster",
        ArnTemplate::new("arn:${Partition}:emr-containers:${Region}:${Account}:/virtualclusters/${VirtualClusterId}"),
    ),
    ResourceTypeDefinition::new(
        "jobRun",
        ArnTemplate::new("arn:${Partition}:emr-containers:${Region}:${Account}:/virtualclusters/${VirtualClusterId}/jobruns/${JobRunId}"),
    ),
    ResourceTypeDefinition::new(
        "jobTemplate",
        ArnTemplate::new("arn:${Partition}:emr-containers:${Region}:${Account}:/jobtemplates/${JobTemplateId}"),
    ),
    ResourceTypeDefinition::new(
        "managedEndpoint",
        ArnTemplate::new("arn:${Partition}:emr-containers:${Region}:${Account}:/virtualclusters/${VirtualClusterId}/endpoints/${EndpointId}"),
    ),
];

const CONDITION_KEYS: &[ConditionKeyDefinition] = &[
    ConditionKeyDefinition::new("emr-containers:ExecutionRoleArn", condop::StringLike),
    ConditionKeyDefinition::new("emr-containers:JobTemplateArn", condop::StringLike),
];
