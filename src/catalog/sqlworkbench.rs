use {
    super::{
        AccessLevel::{List, Read, Tagging, Write},
        ActionDefinition, ResourceTypeDefinition, ServiceDefinition,
    },
    crate::ArnTemplate,
};

pub(super) const SERVICE: ServiceDefinition = ServiceDefinition::new(
    "sqlworkbench",
    "AWS SQL Workbench",
    "https://docs.aws.amazon.com/service-authorization/latest/reference/list_awssqlworkbench.html",
    ACTIONS,
    RESOURCE_TYPES,
    &[],
);

const ACTIONS: &[ActionDefinition] = &[
    ActionDefinition::new(
        "AssociateConnectionWithChart",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "AssociateConnectionWithTab",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "AssociateNotebookWithTab",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "AssociateQueryWithTab",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "BatchDeleteFolder",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "BatchGetNotebookCell",
        Read,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "CreateAccount",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "CreateChart",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "CreateConnection",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "CreateFolder",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "CreateNotebook",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "CreateNotebookCell",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "CreateNotebookFromVersion",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "CreateNotebookVersion",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "CreateSavedQuery",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "DeleteChart",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "DeleteConnection",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "DeleteNotebook",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "DeleteNotebookCell",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "DeleteNotebookVersion",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "DeleteSavedQuery",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "DeleteTab",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "DriverExecute",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "DuplicateNotebook",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "ExportNotebook",
        Read,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "GenerateSession",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "GetAccountInfo",
        Read,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "GetAccountSettings",
        Read,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "GetChart",
        Read,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "GetConnection",
        Read,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "GetNotebook",
        Read,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "GetNotebookVersion",
        Read,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "GetQueryExecutionHistory",
        Read,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "GetSavedQuery",
        Read,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "GetSchemaInference",
        Read,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "GetUserInfo",
        Read,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "GetUserWorkspaceSettings",
        Read,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "ImportNotebook",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "ListConnections",
        List,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "ListDatabases",
        List,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "ListFiles",
        List,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "ListNotebookVersions",
        List,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "ListNotebooks",
        List,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "ListQueryExecutionHistory",
        List,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "ListRedshiftClusters",
        List,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "ListSampleDatabases",
        Read,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "ListSavedQueryVersions",
        List,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "ListTabs",
        List,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "ListTaggedResources",
        Read,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "ListTagsForResource",
        Read,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "PutTab",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "PutUserWorkspaceSettings",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "RestoreNotebookVersion",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "TagResource",
        Tagging,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "UntagResource",
        Tagging,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "UpdateAccountConnectionSettings",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "UpdateAccountExportSettings",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "UpdateAccountGeneralSettings",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "UpdateChart",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "UpdateConnection",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "UpdateFileFolder",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "UpdateFolder",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "UpdateNotebook",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "UpdateNotebookCellContent",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "UpdateNotebookCellLayout",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
    ActionDefinition::new(
        "UpdateSavedQuery",
        Write,
        "https://docs.aws.amazon.com/redshift/latest/mgmt/redshift-policy-resources.resource-permissions.html",
    ),
];

const RESOURCE_TYPES: &[ResourceTypeDefinition] = &[
    ResourceTypeDefinition::new(
        "connection",
        ArnTemplate::new("arn:${Partition}:sqlworkbench:${Region}:${Account}:connection/${ResourceId}"),
    ),
    ResourceTypeDefinition::new(
        "query",
        ArnTemplate::new("arn:${Partition}:sqlworkbench:${Region}:${Account}:query/${ResourceId}"),
    ),
    ResourceTypeDefinition::new(
        "chart",
        ArnTemplate::new("arn:${Partition}:sqlworkbench:${Region}:${Account}:chart/${ResourceId}"),
    ),
    ResourceTypeDefinition::new(
        "notebook",
        ArnTemplate::new("arn:${Partition}:sqlworkbench:${Region}:${Account}:notebook/${ResourceId}"),
    ),
];
