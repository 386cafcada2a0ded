use {
    super::{
        AccessLevel::{List, PermissionsManagement, Read, Tagging, Write},
        ActionDefinition, ConditionKeyDefinition, ResourceTypeDefinition, ServiceDefinition,
    },
    crate::{ArnTemplate, condop},
};

pub(super) const SERVICE: ServiceDefinition = ServiceDefinition::new(
    "glacier",
    "Amazon S3 Glacier",
    "https://docs.aws.amazon.com/service-authorization/latest/reference/list_amazons3glacier.html",
    ACTIONS,
    RESOURCE_TYPES,
    CONDITION_KEYS,
);

const ACTIONS: &[ActionDefinition] = &[
    ActionDefinition::new(
        "AbortMultipartUpload",
        Write,
        "https://docs.aws.amazon.com/amazonglacier/latest/dev/api-multipart-abort-upload.html",
    ),
    ActionDefinition::new(
        "AbortVaultLock",
        PermissionsManagement,
        "https://docs.aws.amazon.com/amazonglacier/latest/dev/api-AbortVaultLock.html",
    ),
    ActionDefinition::new(
        "AddTagsToVault",
        Tagging,
        "https://docs.aws.amazon.com/amazonglacier/latest/dev/api-AddTagsToVault.html",
    ),
    ActionDefinition::new(
        "CompleteMultipartUpload",
        Write,
        "https://docs.aws.amazon.com/amazonglacier/latest/dev/api-multipart-complete-upload.html",
    ),
    ActionDefinition::new(
        "CompleteVaultLock",
        PermissionsManagement,
        "https://docs.aws.amazon.com/amazonglacier/latest/dev/api-CompleteVaultLock.html",
    ),
    ActionDefinition::new(
        "CreateVault",
        Write,
        "https://docs.aws.amazon.com/amazonglacier/latest/dev/api-vault-put.html",
    ),
    ActionDefinition::new(
        "DeleteArchive",
        Write,
        "https://docs.aws.amazon.com/amazonglacier/latest/dev/api-archive-delete.html",
    ),
    ActionDefinition::new(
        "DeleteVault",
        Write,
        "https://docs.aws.amazon.com/amazonglacier/latest/dev/api-vault-delete.html",
    ),
    ActionDefinition::new(
        "DeleteVaultAccessPolicy",
        PermissionsManagement,
        "https://docs.aws.amazon.com/amazonglacier/latest/dev/api-DeleteVaultAccessPolicy.html",
    ),
    ActionDefinition::new(
        "DeleteVaultNotifications",
        Write,
        "https://docs.aws.amazon.com/amazonglacier/latest/dev/api-vault-notifications-delete.html",
    ),
    ActionDefinition::new(
        "DescribeJob",
        Read,
        "https://docs.aws.amazon.com/amazonglacier/latest/dev/api-describe-job-get.html",
    ),
    ActionDefinition::new(
        "DescribeVault",
        Read,
        "https://docs.aws.amazon.com/amazonglacier/latest/dev/api-vault-get.html",
    ),
    ActionDefinition::new(
        "GetDataRetrievalPolicy",
        Read,
        "https://docs.aws.amazon.com/amazonglacier/latest/dev/api-GetDataRetrievalPolicy.html",
    ),
    ActionDefinition::new(
        "GetJobOutput",
        Read,
        "https://docs.aws.amazon.com/amazonglacier/latest/dev/api-job-output-get.html",
    ),
    ActionDefinition::new(
        "GetVaultAccessPolicy",
        Read,
        "https://docs.aws.amazon.com/amazonglacier/latest/dev/api-GetVaultAccessPolicy.html",
    ),
    ActionDefinition::new(
        "GetVaultLock",
        Read,
        "https://docs.aws.amazon.com/amazonglacier/latest/dev/api-GetVaultLock.html",
    ),
    ActionDefinition::new(
        "GetVaultNotifications",
        Read,
        "https://docs.aws.amazon.com/amazonglacier/latest/dev/api-vault-notifications-get.html",
    ),
    ActionDefinition::new(
        "InitiateJob",
        Write,
        "https://docs.aws.amazon.com/amazonglacier/latest/dev/api-initiate-job-post.html",
    ),
    ActionDefinition::new(
        "InitiateMultipartUpload",
        Write,
        "https://docs.aws.amazon.com/amazonglacier/latest/dev/api-multipart-initiate-upload.html",
    ),
    ActionDefinition::new(
        "InitiateVaultLock",
        PermissionsManagement,
        "https://docs.aws.amazon.com/amazonglacier/latest/dev/api-InitiateVaultLock.html",
    ),
    ActionDefinition::new("ListJobs", List, "https://docs.aws.amazon.com/amazonglacier/latest/dev/api-jobs-get.html"),
    ActionDefinition::new(
        "ListMultipartUploads",
        List,
        "https://docs.aws.amazon.com/amazonglacier/latest/dev/api-multipart-list-uploads.html",
    ),
    ActionDefinition::new(
        "ListParts",
        List,
        "https://docs.aws.amazon.com/amazonglacier/latest/dev/api-multipart-list-parts.html",
    ),
    ActionDefinition::new(
        "ListProvisionedCapacity",
        List,
        "https://docs.aws.amazon.com/amazonglacier/latest/dev/api-ListProvisionedCapacity.html",
    ),
    ActionDefinition::new(
        "ListTagsForVault",
        List,
        "https://docs.aws.amazon.com/amazonglacier/latest/dev/api-ListTagsForVault.html",
    ),
    ActionDefinition::new(
        "ListVaults",
        List,
        "https://docs.aws.amazon.com/amazonglacier/latest/dev/api-vaults-get.html",
    ),
    ActionDefinition::new(
        "PurchaseProvisionedCapacity",
        Write,
        "https://docs.aws.amazon.com/amazonglacier/latest/dev/api-PurchaseProvisionedCapacity.html",
    ),
    ActionDefinition::new(
        "RemoveTagsFromVault",
        Tagging,
        "https://docs.aws.amazon.com/amazonglacier/latest/dev/api-RemoveTagsFromVault.html",
    ),
    ActionDefinition::new(
        "SetDataRetrievalPolicy",
        PermissionsManagement,
        "https://docs.aws.amazon.com/amazonglacier/latest/dev/api-SetDataRetrievalPolicy.html",
    ),
    ActionDefinition::new(
        "SetVaultAccessPolicy",
        PermissionsManagement,
        "https://docs.aws.amazon.com/amazonglacier/latest/dev/api-SetVaultAccessPolicy.html",
    ),
    ActionDefinition::new(
        "SetVaultNotifications",
        Write,
        "https://docs.aws.amazon.com/amazonglacier/latest/dev/api-vault-notifications-put.html",
    ),
    ActionDefinition::new(
        "UploadArchive",
        Write,
        "https://docs.aws.amazon.com/amazonglacier/latest/dev/api-archive-post.html",
    ),
    ActionDefinition::new(
        "UploadMultipartPart",
        Write,
        "https://docs.aws.amazon.com/amazonglacier/latest/dev/api-upload-part.html",
    ),
];

const RESOURCE_TYPES: &[ResourceTypeDefinition] = &[
    ResourceTypeDefinition::new(
        "vault",
        ArnTemplate::new("arn:${Partition}:glacier:${Region}:${Account}:vaults/${VaultName}"),
    ),
];

const CONDITION_KEYS: &[ConditionKeyDefinition] = &[
    ConditionKeyDefinition::new("glacier:ArchiveAgeInDays", condop::StringLike),
    ConditionKeyDefinition::new("glacier:ResourceTag/${TagKey}", condop::StringLike),
];
