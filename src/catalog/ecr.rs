use {
    super::{
        AccessLevel::{List, PermissionsManagement, Read, Tagging, Write},
        ActionDefinition, ConditionKeyDefinition, ResourceTypeDefinition, ServiceDefinition,
    },
    crate::{ArnTemplate, condop},
};

pub(super) const SERVICE: ServiceDefinition = ServiceDefinition::new(
    "ecr",
    "Amazon Elastic Container Registry",
    "https://docs.aws.amazon.com/service-authorization/latest/reference/list_amazonelasticcontainerregistry.html",
    ACTIONS,
    RESOURCE_TYPES,
    CONDITION_KEYS,
);

const ACTIONS: &[ActionDefinition] = &[
    ActionDefinition::new(
        "BatchCheckLayerAvailability",
        Read,
        "https://docs.aws.amazon.com/AmazonECR/latest/APIReference/API_BatchCheckLayerAvailability.html",
    ),
    ActionDefinition::new(
        "BatchDeleteImage",
        Write,
        "https://docs.aws.amazon.com/AmazonECR/latest/APIReference/API_BatchDeleteImage.html",
    ),
    ActionDefinition::new(
        "BatchGetImage",
        Read,
        "https://docs.aws.amazon.com/AmazonECR/latest/APIReference/API_BatchGetImage.html",
    ),
    ActionDefinition::new(
        "CompleteLayerUpload",
        Write,
        "https://docs.aws.amazon.com/AmazonECR/latest/APIReference/API_CompleteLayerUpload.html",
    ),
    ActionDefinition::new(
        "CreateRepository",
        Write,
        "https://docs.aws.amazon.com/AmazonECR/latest/APIReference/API_CreateRepository.html",
    ),
    ActionDefinition::new(
        "DeleteLifecyclePolicy",
        Write,
        "https://docs.aws.amazon.com/AmazonECR/latest/APIReference/API_DeleteLifecyclePolicy.html",
    ),
    ActionDefinition::new(
        "DeleteRepository",
        Write,
        "https://docs.aws.amazon.com/AmazonECR/latest/APIReference/API_DeleteRepository.html",
    ),
    ActionDefinition::new(
        "DeleteRepositoryPolicy",
        Write,
        "https://docs.aws.amazon.com/AmazonECR/latest/APIReference/API_DeleteRepositoryPolicy.html",
    ),
    ActionDefinition::new(
        "DescribeImageScanFindings",
        Read,
        "https://docs.aws.amazon.com/AmazonECR/latest/APIReference/API_DescribeImageScanFindings.html",
    ),
    ActionDefinition::new(
        "DescribeImages",
        Read,
        "https://docs.aws.amazon.com/AmazonECR/latest/APIReference/API_DescribeImages.html",
    ),
    ActionDefinition::new(
        "DescribeRepositories",
        List,
        "https://docs.aws.amazon.com/AmazonECR/latest/APIReference/API_DescribeRepositories.html",
    ),
    ActionDefinition::new(
        "GetAuthorizationToken",
        Read,
        "https://docs.aws.amazon.com/AmazonECR/latest/APIReference/API_GetAuthorizationToken.html",
    ),
    ActionDefinition::new(
        "GetDownloadUrlForLayer",
        Read,
        "https://docs.aws.amazon.com/AmazonECR/latest/APIReference/API_GetDownloadUrlForLayer.html",
    ),
    ActionDefinition::new(
        "GetLifecyclePolicy",
        Read,
        "https://docs.aws.amazon.com/AmazonECR/latest/APIReference/API_GetLifecyclePolicy.html",
    ),
    ActionDefinition::new(
        "GetLifecyclePolicyPreview",
        Read,
        "https://docs.aws.amazon.com/AmazonECR/latest/APIReference/API_GetLifecyclePolicyPreview.html",
    ),
    ActionDefinition::new(
        "GetRepositoryPolicy",
        Read,
        "https://docs.aws.amazon.com/AmazonECR/latest/APIReference/API_GetRepositoryPolicy.html",
    ),
    ActionDefinition::new(
        "InitiateLayerUpload",
        Write,
        "https://docs.aws.amazon.com/AmazonECR/latest/APIReference/API_InitiateLayerUpload.html",
    ),
    ActionDefinition::new(
        "ListImages",
        List,
        "https://docs.aws.amazon.com/AmazonECR/latest/APIReference/API_ListImages.html",
    ),
    ActionDefinition::new(
        "ListTagsForResource",
        List,
        "https://docs.aws.amazon.com/AmazonECR/latest/APIReference/API_ListTagsForResource.html",
    ),
    ActionDefinition::new(
        "PutImage",
        Write,
        "https://docs.aws.amazon.com/AmazonECR/latest/APIReference/API_PutImage.html",
    ),
    ActionDefinition::new(
        "PutImageScanningConfiguration",
        Write,
        "https://docs.aws.amazon.com/AmazonECR/latest/APIReference/API_PutImageScanningConfiguration.html",
    ),
    ActionDefinition::new(
        "PutImageTagMutability",
        Write,
        "https://docs.aws.amazon.com/AmazonECR/latest/APIReference/API_PutImageTagMutability.html",
    ),
    ActionDefinition::new(
        "PutLifecyclePolicy",
        Write,
        "https://docs.aws.amazon.com/AmazonECR/latest/APIReference/API_PutLifecyclePolicy.html",
    ),
    ActionDefinition::new(
        "SetRepositoryPolicy",
        PermissionsManagement,
        "https://docs.aws.amazon.com/AmazonECR/latest/APIReference/API_SetRepositoryPolicy.html",
    ),
    ActionDefinition::new(
        "StartImageScan",
        Write,
        "https://docs.aws.amazon.com/AmazonECR/latest/APIReference/API_StartImageScan.html",
    ),
    ActionDefinition::new(
        "StartLifecyclePolicyPreview",
        Write,
        "https://docs.aws.amazon.com/AmazonECR/latest/APIReference/API_StartLifecyclePolicyPreview.html",
    ),
    ActionDefinition::new(
        "TagResource",
        Tagging,
        "https://docs.aws.amazon.com/AmazonECR/latest/APIReference/API_TagResource.html",
    ),
    ActionDefinition::new(
        "UntagResource",
        Tagging,
        "https://docs.aws.amazon.com/AmazonECR/latest/APIReference/API_UntagResource.html",
    ),
    ActionDefinition::new(
        "UploadLayerPart",
        Write,
        "https://docs.aws.amazon.com/AmazonECR/latest/APIReference/API_UploadLayerPart.html",
    ),
];

const RESOURCE_TYPES: &[ResourceTypeDefinition] = &[
    ResourceTypeDefinition::new(
        "repository",
        ArnTemplate::new("arn:${Partition}:ecr:${Region}:${Account}:repository/${RepositoryName}"),
    ),
];

const CONDITION_KEYS: &[ConditionKeyDefinition] = &[
    ConditionKeyDefinition::new("ecr:ResourceTag/${TagKey}", condop::StringLike),
];
