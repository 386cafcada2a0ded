use super::{AccessLevel::{List, Read, Tagging, Write}, ActionDefinition, ServiceDefinition};

pub(super) const SERVICE: ServiceDefinition = ServiceDefinition::new(
    "inspector",
    "Amazon Inspector",
    "https://docs.aws.amazon.com/service-authorization/latest/reference/list_amazoninspector.html",
    ACTIONS,
    &[],
    &[],
);

const ACTIONS: &[ActionDefinition] = &[
    ActionDefinition::new(
        "AddAttributesToFindings",
        Write,
        "https://docs.aws.amazon.com/inspector/latest/APIReference/API_AddAttributesToFindings.html",
    ),
    ActionDefinition::new(
        "CreateAssessmentTarget",
        Write,
        "https://docs.aws.amazon.com/inspector/latest/APIReference/API_CreateAssessmentTarget.html",
    ),
    ActionDefinition::new(
        "CreateAssessmentTemplate",
        Write,
        "https://docs.aws.amazon.com/inspector/latest/APIReference/API_CreateAssessmentTemplate.html",
    ),
    ActionDefinition::new(
        "CreateResourceGroup",
        Write,
        "https://docs.aws.amazon.com/inspector/latest/APIReference/API_CreateResourceGroup.html",
    ),
    ActionDefinition::new(
        "DeleteAssessmentRun",
        Write,
        "https://docs.aws.amazon.com/inspector/latest/APIReference/API_DeleteAssessmentRun.html",
    ),
    ActionDefinition::new(
        "DeleteAssessmentTarget",
        Write,
        "https://docs.aws.amazon.com/inspector/latest/APIReference/API_DeleteAssessmentTarget.html",
    ),
    ActionDefinition::new(
        "DeleteAssessmentTemplate",
        Write,
        "https://docs.aws.amazon.com/inspector/latest/APIReference/API_DeleteAssessmentTemplate.html",
    ),
    ActionDefinition::new(
        "DescribeAssessmentRuns",
        Read,
        "https://docs.aws.amazon.com/inspector/latest/APIReference/API_DescribeAssessmentRuns.html",
    ),
    ActionDefinition::new(
        "DescribeAssessmentTargets",
        Read,
        "https://docs.aws.amazon.com/inspector/latest/APIReference/API_DescribeAssessmentTargets.html",
    ),
    ActionDefinition::new(
        "DescribeAssessmentTemplates",
        Read,
        "https://docs.aws.amazon.com/inspector/latest/APIReference/API_DescribeAssessmentTemplates.html",
    ),
    ActionDefinition::new(
        "DescribeCrossAccountAccessRole",
        Read,
        "https://docs.aws.amazon.com/inspector/latest/APIReference/API_DescribeCrossAccountAccessRole.html",
    ),
    ActionDefinition::new(
        "DescribeFindings",
        Read,
        "https://docs.aws.amazon.com/inspector/latest/APIReference/API_DescribeFindings.html",
    ),
    ActionDefinition::new(
        "DescribeResourceGroups",
        Read,
        "https://docs.aws.amazon.com/inspector/latest/APIReference/API_DescribeResourceGroups.html",
    ),
    ActionDefinition::new(
        "DescribeRulesPackages",
        Read,
        "https://docs.aws.amazon.com/inspector/latest/APIReference/API_DescribeRulesPackages.html",
    ),
    ActionDefinition::new(
        "GetTelemetryMetadata",
        Read,
        "https://docs.aws.amazon.com/inspector/latest/APIReference/API_GetTelemetryMetadata.html",
    ),
    ActionDefinition::new(
        "ListAssessmentRunAgents",
        List,
        "https://docs.aws.amazon.com/inspector/latest/APIReference/API_ListAssessmentRunAgents.html",
    ),
    ActionDefinition::new(
        "ListAssessmentRuns",
        List,
        "https://docs.aws.amazon.com/inspector/latest/APIReference/API_ListAssessmentRuns.html",
    ),
    ActionDefinition::new(
        "ListAssessmentTargets",
        List,
        "https://docs.aws.amazon.com/inspector/latest/APIReference/API_ListAssessmentTargets.html",
    ),
    ActionDefinition::new(
        "ListAssessmentTemplates",
        List,
        "https://docs.aws.amazon.com/inspector/latest/APIReference/API_ListAssessmentTemplates.html",
    ),
    ActionDefinition::new(
        "ListEventSubscriptions",
        List,
        "https://docs.aws.amazon.com/inspector/latest/APIReference/API_ListEventSubscriptions.html",
    ),
    ActionDefinition::new(
        "ListFindings",
        List,
        "https://docs.aws.amazon.com/inspector/latest/APIReference/API_ListFindings.html",
    ),
    ActionDefinition::new(
        "ListRulesPackages",
        List,
        "https://docs.aws.amazon.com/inspector/latest/APIReference/API_ListRulesPackages.html",
    ),
    ActionDefinition::new(
        "ListTagsForResource",
        List,
        "https://docs.aws.amazon.com/inspector/latest/APIReference/API_ListTagsForResource.html",
    ),
    ActionDefinition::new(
        "PreviewAgents",
        Read,
        "https://docs.aws.amazon.com/inspector/latest/APIReference/API_PreviewAgents.html",
    ),
    ActionDefinition::new(
        "RegisterCrossAccountAccessRole",
        Write,
        "https://docs.aws.amazon.com/inspector/latest/APIReference/API_RegisterCrossAccountAccessRole.html",
    ),
    ActionDefinition::new(
        "RemoveAttributesFromFindings",
        Write,
        "https://docs.aws.amazon.com/inspector/latest/APIReference/API_RemoveAttributesFromFindings.html",
    ),
    ActionDefinition::new(
        "SetTagsForResource",
        Tagging,
        "https://docs.aws.amazon.com/inspector/latest/APIReference/API_SetTagsForResource.html",
    ),
    ActionDefinition::new(
        "StartAssessmentRun",
        Write,
        "https://docs.aws.amazon.com/inspector/latest/APIReference/API_StartAssessmentRun.html",
    ),
    ActionDefinition::new(
        "StopAssessmentRun",
        Write,
        "https://docs.aws.amazon.com/inspector/latest/APIReference/API_StopAssessmentRun.html",
    ),
    ActionDefinition::new(
        "SubscribeToEvent",
        Write,
        "https://docs.aws.amazon.com/inspector/latest/APIReference/API_SubscribeToEvent.html",
    ),
    ActionDefinition::new(
        "UnsubscribeFromEvent",
        Write,
        "https://docs.aws.amazon.com/inspector/latest/APIReference/API_UnsubscribeFromEvent.html",
    ),
    ActionDefinition::new(
        "UpdateAssessmentTarget",
        Write,
        "https://docs.aws.amazon.com/inspector/latest/APIReference/API_UpdateAssessmentTarget.html",
    ),
];
