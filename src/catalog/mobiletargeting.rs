use {
    super::{
        AccessLevel::{List, Read, Tagging, Write},
        ActionDefinition, ResourceTypeDefinition, ServiceDefinition,
    },
    crate::ArnTemplate,
};

pub(super) const SERVICE: ServiceDefinition = ServiceDefinition::new(
    "mobiletargeting",
    "Amazon Pinpoint",
    "https://docs.aws.amazon.com/service-authorization/latest/reference/list_amazonpinpoint.html",
    ACTIONS,
    RESOURCE_TYPES,
    &[],
);

const ACTIONS: &[ActionDefinition] = &[
    ActionDefinition::new(
        "CreateApp",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-app.html#rest-api-app-methods",
    ),
    ActionDefinition::new(
        "CreateCampaign",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-campaigns.html#rest-api-campaigns-methods",
    ),
    ActionDefinition::new(
        "CreateEmailTemplate",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/templates-template-name-email.html#templates-template-name-email-http-methods",
    ),
    ActionDefinition::new(
        "CreateExportJob",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-export-jobs.html#rest-api-export-jobs-methods",
    ),
    ActionDefinition::new(
        "CreateImportJob",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-import-jobs.html#rest-api-import-jobs-methods",
    ),
    ActionDefinition::new(
        "CreateJourney",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/apps-application-id-journeys-journey-id.html#apps-application-id-journeys-journey-id-http-methods",
    ),
    ActionDefinition::new(
        "CreatePushTemplate",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/templates-template-name-push.html#templates-template-name-push-http-methods",
    ),
    ActionDefinition::new(
        "CreateRecommenderConfiguration",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/recommenders.html#CreateRecommenderConfiguration",
    ),
    ActionDefinition::new(
        "CreateSegment",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-segments.html#rest-api-segments-methods",
    ),
    ActionDefinition::new(
        "CreateSmsTemplate",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/templates-template-name-sms.html#templates-template-name-sms-http-methods",
    ),
    ActionDefinition::new(
        "CreateVoiceTemplate",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/templates-template-name-voice.html#templates-template-name-voice-http-methods",
    ),
    ActionDefinition::new(
        "DeleteAdmChannel",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-adm-channel.html#rest-api-adm-channel-methods",
    ),
    ActionDefinition::new(
        "DeleteApnsChannel",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-apns-channel.html#rest-api-apns-channel-methods",
    ),
    ActionDefinition::new(
        "DeleteApnsSandboxChannel",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-apns-sandbox-channel.html#rest-api-apns-sandbox-channel-methods",
    ),
    ActionDefinition::new(
        "DeleteApnsVoipChannel",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-apns-voip-channel.html#rest-api-apns-voip-channel-methods",
    ),
    ActionDefinition::new(
        "DeleteApnsVoipSandboxChannel",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-apns-voip-sandbox-channel.html#rest-api-apns-voip-sandbox-channel-methods",
    ),
    ActionDefinition::new(
        "DeleteApp",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-app.html#rest-api-app-methods",
    ),
    ActionDefinition::new(
        "DeleteBaiduChannel",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-baidu-channel.html#rest-api-baidu-channel-methods",
    ),
    ActionDefinition::new(
        "DeleteCampaign",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-campaign.html#rest-api-campaign-methods",
    ),
    ActionDefinition::new(
        "DeleteEmailChannel",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-email-channel.html#rest-api-email-channel-methods",
    ),
    ActionDefinition::new(
        "DeleteEmailTemplate",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/templates-template-name-email.html#templates-template-name-email-http-methods",
    ),
    ActionDefinition::new(
        "DeleteEndpoint",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-endpoint.html#rest-api-endpoint-methods",
    ),
    ActionDefinition::new(
        "DeleteEventStream",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-event-stream.html#rest-api-event-stream-methods",
    ),
    ActionDefinition::new(
        "DeleteGcmChannel",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-gcm-channel.html#rest-api-gcm-channel-methods",
    ),
    ActionDefinition::new(
        "DeleteJourney",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/apps-application-id-journeys-journey-id.html#apps-application-id-journeys-journey-id-http-methods",
    ),
    ActionDefinition::new(
        "DeletePushTemplate",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/templates-template-name-push.html#templates-template-name-push-http-methods",
    ),
    ActionDefinition::new(
        "DeleteRecommenderConfiguration",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/recommenders-recommender-id.html#DeleteRecommenderConfiguration",
    ),
    ActionDefinition::new(
        "DeleteSegment",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-segment.html#rest-api-segment-methods",
    ),
    ActionDefinition::new(
        "DeleteSmsChannel",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-sms-channel.html#rest-api-sms-channel-methods",
    ),
    ActionDefinition::new(
        "DeleteSmsTemplate",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/templates-template-name-sms.html#templates-template-name-sms-http-methods",
    ),
    ActionDefinition::new(
        "DeleteUserEndpoints",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-user.html#rest-api-user-methods",
    ),
    ActionDefinition::new(
        "DeleteVoiceChannel",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-voice-channel.html#rest-api-voice-channel-methods",
    ),
    ActionDefinition::new(
        "DeleteVoiceTemplate",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/templates-template-name-voice.html#templates-template-name-voice-http-methods",
    ),
    ActionDefinition::new(
        "GetAdmChannel",
        Read,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-adm-channel.html#rest-api-adm-channel-methods",
    ),
    ActionDefinition::new(
        "GetApnsChannel",
        Read,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-apns-channel.html#rest-api-apns-channel-methods",
    ),
    ActionDefinition::new(
        "GetApnsSandboxChannel",
        Read,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-apns-sandbox-channel.html#rest-api-apns-sandbox-channel-methods",
    ),
    ActionDefinition::new(
        "GetApnsVoipChannel",
        Read,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-apns-voip-channel.html#rest-api-apns-voip-channel-methods",
    ),
    ActionDefinition::new(
        "GetApnsVoipSandboxChannel",
        Read,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-apns-voip-sandbox-channel.html#rest-api-apns-voip-sandbox-channel-methods",
    ),
    ActionDefinition::new(
        "GetApp",
        Read,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-app.html#rest-api-app-methods",
    ),
    ActionDefinition::new(
        "GetApplicationSettings",
        List,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-settings.html#rest-api-settings-methods",
    ),
    ActionDefinition::new(
        "GetApps",
        List,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-apps.html#rest-api-apps-methods",
    ),
    ActionDefinition::new(
        "GetBaiduChannel",
        Read,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-baidu-channel.html#rest-api-baidu-channel-methods",
    ),
    ActionDefinition::new(
        "GetCampaign",
        Read,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-campaign.html#rest-api-campaign-methods",
    ),
    ActionDefinition::new(
        "GetCampaignActivities",
        List,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-campaign-activities.html#rest-api-campaign-activities-methods",
    ),
    ActionDefinition::new(
        "GetCampaignVersion",
        Read,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-campaign-version.html#rest-api-campaign-version-methods",
    ),
    ActionDefinition::new(
        "GetCampaignVersions",
        List,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-campaign-versions.html#rest-api-campaign-versions-methods",
    ),
    ActionDefinition::new(
        "GetCampaigns",
        List,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-campaigns.html#rest-api-campaigns-methods",
    ),
    ActionDefinition::new(
        "GetChannels",
        List,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-channels.html#rest-api-channels-methods",
    ),
    ActionDefinition::new(
        "GetEmailChannel",
        Read,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-email-channel.html#rest-api-email-channel-methods",
    ),
    ActionDefinition::new(
        "GetEmailTemplate",
        Read,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/templates-template-name-email.html#templates-template-name-email-http-methods",
    ),
    ActionDefinition::new(
        "GetEndpoint",
        Read,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-endpoint.html#rest-api-endpoint-methods",
    ),
    ActionDefinition::new(
        "GetEventStream",
        Read,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-event-stream.html#rest-api-event-stream-methods",
    ),
    ActionDefinition::new(
        "GetExportJob",
        Read,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-export-jobs.html#rest-api-export-jobs-methods",
    ),
    ActionDefinition::new(
        "GetExportJobs",
        List,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-export-jobs.html#rest-api-export-jobs-methods",
    ),
    ActionDefinition::new(
        "GetGcmChannel",
        Read,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-gcm-channel.html#rest-api-gcm-channel-methods",
    ),
    ActionDefinition::new(
        "GetImportJob",
        Read,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-import-job.html#rest-api-import-job-methods",
    ),
    ActionDefinition::new(
        "GetImportJobs",
        List,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-import-jobs.html#rest-api-import-jobs-methods",
    ),
    ActionDefinition::new(
        "GetJourney",
        Read,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/apps-application-id-journeys-journey-id.html#apps-application-id-journeys-journey-id-http-methods",
    ),
    ActionDefinition::new(
        "GetPushTemplate",
        Read,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/templates-template-name-push.html#templates-template-name-push-http-methods",
    ),
    ActionDefinition::new(
        "GetRecommenderConfiguration",
        Read,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/recommenders-recommender-id.html#GetRecommenderConfiguration",
    ),
    ActionDefinition::new(
        "GetRecommenderConfigurations",
        List,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/recommenders.html#GetRecommenderConfigurations",
    ),
    ActionDefinition::new(
        "GetSegment",
        Read,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-segment.html#rest-api-segment-methods",
    ),
    ActionDefinition::new(
        "GetSegmentExportJobs",
        List,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-export-jobs.html#rest-api-export-jobs-methods",
    ),
    ActionDefinition::new(
        "GetSegmentImportJobs",
        List,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-import-jobs.html#rest-api-import-jobs-methods",
    ),
    ActionDefinition::new(
        "GetSegmentVersion",
        Read,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-segment-version.html#rest-api-segment-version-methods",
    ),
    ActionDefinition::new(
        "GetSegmentVersions",
        List,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-segment-versions.html#rest-api-segment-versions-methods",
    ),
    ActionDefinition::new(
        "GetSegments",
        List,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-segments.html#rest-api-segments-methods",
    ),
    ActionDefinition::new(
        "GetSmsChannel",
        Read,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-sms-channel.html#rest-api-sms-channel-methods",
    ),
    ActionDefinition::new(
        "GetSmsTemplate",
        Read,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/templates-template-name-sms.html#templates-template-name-sms-http-methods",
    ),
    ActionDefinition::new(
        "GetUserEndpoints",
        Read,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-user.html#rest-api-user-methods",
    ),
    ActionDefinition::new(
        "GetVoiceChannel",
        Read,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-voice-channel.html#rest-api-voice-channel-methods",
    ),
    ActionDefinition::new(
        "GetVoiceTemplate",
        Read,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/templates-template-name-voice.html#templates-template-name-voice-http-methods",
    ),
    ActionDefinition::new(
        "ListJourneys",
        List,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/apps-application-id-journeys.html#apps-application-id-journeys-http-methods",
    ),
    ActionDefinition::new(
        "ListTagsForResource",
        List,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-tags.html#rest-api-tags-methods-get",
    ),
    ActionDefinition::new(
        "ListTemplateVersions",
        List,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/templates-template-name-template-type-versions.html#templates-template-name-template-type-versions-http-methods",
    ),
    ActionDefinition::new(
        "ListTemplates",
        List,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/templates.html#templates-http-methods",
    ),
    ActionDefinition::new(
        "PhoneNumberValidate",
        Read,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-phone-number-validate.html#rest-api-phone-number-validate-methods",
    ),
    ActionDefinition::new(
        "PutEventStream",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-event-stream.html#rest-api-event-stream-methods",
    ),
    ActionDefinition::new(
        "PutEvents",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-events.html#rest-api-events-methods",
    ),
    ActionDefinition::new(
        "RemoveAttributes",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-app.html#rest-api-app-methods",
    ),
    ActionDefinition::new(
        "SendMessages",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-messages.html#rest-api-messages-methods",
    ),
    ActionDefinition::new(
        "SendUsersMessages",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-users-messages.html#rest-api-users-messages-methods",
    ),
    ActionDefinition::new(
        "TagResource",
        Tagging,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-tags.html#rest-api-tags-methods-post",
    ),
    ActionDefinition::new(
        "UntagResource",
        Tagging,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-tags.html#rest-api-tags-methods-delete",
    ),
    ActionDefinition::new(
        "UpdateAdmChannel",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-adm-channel.html#rest-api-adm-channel-methods",
    ),
    ActionDefinition::new(
        "UpdateApnsChannel",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-apns-channel.html#rest-api-apns-channel-methods",
    ),
    ActionDefinition::new(
        "UpdateApnsSandboxChannel",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-apns-sandbox-channel.html#rest-api-apns-sandbox-channel-methods",
    ),
    ActionDefinition::new(
        "UpdateApnsVoipChannel",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-apns-voip-channel.html#rest-api-apns-voip-channel-methods",
    ),
    ActionDefinition::new(
        "UpdateApnsVoipSandboxChannel",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-apns-voip-sandbox-channel.html#rest-api-apns-voip-sandbox-channel-methods",
    ),
    ActionDefinition::new(
        "UpdateApplicationSettings",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-settings.html#rest-api-settings-methods",
    ),
    ActionDefinition::new(
        "UpdateBaiduChannel",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-baidu-channel.html#rest-api-baidu-channel-methods",
    ),
    ActionDefinition::new(
        "UpdateCampaign",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-campaign.html#rest-api-campaign-methods",
    ),
    ActionDefinition::new(
        "UpdateEmailChannel",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-email-channel.html#rest-api-email-channel-methods",
    ),
    ActionDefinition::new(
        "UpdateEmailTemplate",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/templates-template-name-email.html#templates-template-name-email-http-methods",
    ),
    ActionDefinition::new(
        "UpdateEndpoint",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-endpoint.html#rest-api-endpoint-methods",
    ),
    ActionDefinition::new(
        "UpdateEndpointsBatch",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-endpoints.html#rest-api-endpoints-methods",
    ),
    ActionDefinition::new(
        "UpdateGcmChannel",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-gcm-channel.html#rest-api-gcm-channel-methods",
    ),
    ActionDefinition::new(
        "UpdateJourney",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/apps-application-id-journeys-journey-id.html#apps-application-id-journeys-journey-id-http-methods",
    ),
    ActionDefinition::new(
        "UpdateJourneyState",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/apps-application-id-journeys-journey-id-state.html#apps-application-id-journeys-journey-id-state-http-methods",
    ),
    ActionDefinition::new(
        "UpdatePushTemplate",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/templates-template-name-push.html#templates-template-name-push-http-methods",
    ),
    ActionDefinition::new(
        "UpdateRecommenderConfiguration",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/recommenders-recommender-id.html#UpdateRecommenderConfiguration",
    ),
    ActionDefinition::new(
        "UpdateSegment",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-segment.html#rest-api-segment-methods",
    ),
    ActionDefinition::new(
        "UpdateSmsChannel",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-sms-channel.html#rest-api-sms-channel-methods",
    ),
    ActionDefinition::new(
        "UpdateSmsTemplate",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/templates-template-name-sms.html#templates-template-name-sms-http-methods",
    ),
    ActionDefinition::new(
        "UpdateTemplateActiveVersion",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/templates-template-name-template-type-versions.html#templates-template-name-template-type-versions-http-methods",
    ),
    ActionDefinition::new(
        "UpdateVoiceChannel",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/rest-api-voice-channel.html#rest-api-voice-channel-methods",
    ),
    ActionDefinition::new(
        "UpdateVoiceTemplate",
        Write,
        "https://docs.aws.amazon.com/pinpoint/latest/apireference/templates-template-name-voice.html#templates-template-name-voice-http-methods",
    ),
];

const RESOURCE_TYPES: &[ResourceTypeDefinition] = &[
    ResourceTypeDefinition::new(
        "apps",
        ArnTemplate::new("arn:${Partition}:mobiletargeting:${Region}:${Account}:apps/${AppId}"),
    ),
    ResourceTypeDefinition::new(
        "campaigns",
        ArnTemplate::new("arn:${Partition}:mobiletargeting:${Region}:${Account}:apps/${AppId}/campaigns/${CampaignId}"),
    ),
    ResourceTypeDefinition::new(
        "journeys",
        ArnTemplate::new("arn:${Partition}:mobiletargeting:${Region}:${Account}:apps/${AppId}/journeys/${JourneyId}"),
    ),
    ResourceTypeDefinition::new(
        "segments",
        ArnTemplate::new("arn:${Partition}:mobiletargeting:${Region}:${Account}:apps/${AppId}/segments/${SegmentId}"),
    ),
    ResourceTypeDefinition::new(
        "templates",
        ArnTemplate::new("arn:${Partition}:mobiletargeting:${Region}:${Account}:templates/${TemplateName}/${ChannelType}"),
    ),
    ResourceTypeDefinition::new(
        "recommenders",
        ArnTemplate::new("arn:${Partition}:mobiletargeting:${Region}:${Account}:recommenders/${RecommenderId}"),
    ),
];
