use {
    super::{
        AccessLevel::{List, Read, Tagging, Write},
        ActionDefinition, ConditionKeyDefinition, ResourceTypeDefinition, ServiceDefinition,
    },
    crate::{ArnTemplate, condop},
};

pub(super) const SERVICE: ServiceDefinition = ServiceDefinition::new(
    "networkmanager",
    "Network Manager",
    "https://docs.aws.amazon.com/service-authorization/latest/reference/list_awsnetworkmanager.html",
    ACTIONS,
    RESOURCE_TYPES,
    CONDITION_KEYS,
);

const ACTIONS: &[ActionDefinition] = &[
    ActionDefinition::new(
        "AssociateCustomerGateway",
        Write,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_AssociateCustomerGateway.html",
    ),
    ActionDefinition::new(
        "AssociateLink",
        Write,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_AssociateLink.html",
    ),
    ActionDefinition::new(
        "AssociateTransitGatewayConnectPeer",
        Write,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_AssociateTransitGatewayConnectPeer.html",
    ),
    ActionDefinition::new(
        "CreateConnection",
        Write,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_CreateConnection.html",
    ),
    ActionDefinition::new(
        "CreateDevice",
        Write,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_CreateDevice.html",
    ),
    ActionDefinition::new(
        "CreateGlobalNetwork",
        Write,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_CreateGlobalNetwork.html",
    ),
    ActionDefinition::new(
        "CreateLink",
        Write,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_CreateLink.html",
    ),
    ActionDefinition::new(
        "CreateSite",
        Write,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_CreateSite.html",
    ),
    ActionDefinition::new(
        "DeleteConnection",
        Write,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_DeleteConnection.html",
    ),
    ActionDefinition::new(
        "DeleteDevice",
        Write,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_DeleteDevice.html",
    ),
    ActionDefinition::new(
        "DeleteGlobalNetwork",
        Write,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_DeleteGlobalNetwork.html",
    ),
    ActionDefinition::new(
        "DeleteLink",
        Write,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_DeleteLink.html",
    ),
    ActionDefinition::new(
        "DeleteSite",
        Write,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_DeleteSite.html",
    ),
    ActionDefinition::new(
        "DeregisterTransitGateway",
        Write,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_DeregisterTransitGateway.html",
    ),
    ActionDefinition::new(
        "DescribeGlobalNetworks",
        List,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_DescribeGlobalNetworks.html",
    ),
    ActionDefinition::new(
        "DisassociateCustomerGateway",
        Write,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_DisassociateCustomerGateway.html",
    ),
    ActionDefinition::new(
        "DisassociateLink",
        Write,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_DisassociateLink.html",
    ),
    ActionDefinition::new(
        "DisassociateTransitGatewayConnectPeer",
        Write,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_DisassociateTransitGatewayConnectPeer.html",
    ),
    ActionDefinition::new(
        "GetConnections",
        List,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_GetConnections.html",
    ),
    ActionDefinition::new(
        "GetCustomerGatewayAssociations",
        List,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_GetCustomerGatewayAssociations.html",
    ),
    ActionDefinition::new(
        "GetDevices",
        List,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_GetDevices.html",
    ),
    ActionDefinition::new(
        "GetLinkAssociations",
        List,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_GetLinkAssociations.html",
    ),
    ActionDefinition::new(
        "GetLinks",
        List,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_GetLinks.html",
    ),
    ActionDefinition::new(
        "GetNetworkResourceCounts",
        Read,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_GetNetworkResourceCounts.html",
    ),
    ActionDefinition::new(
        "GetNetworkResourceRelationships",
        Read,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_GetNetworkResourceRelationships.html",
    ),
    ActionDefinition::new(
        "GetNetworkResources",
        Read,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_GetNetworkResources.html",
    ),
    ActionDefinition::new(
        "GetNetworkRoutes",
        Read,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_GetNetworkRoutes.html",
    ),
    ActionDefinition::new(
        "GetNetworkTelemetry",
        Read,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_GetNetworkTelemetry.html",
    ),
    ActionDefinition::new(
        "GetRouteAnalysis",
        Read,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_GetRouteAnalysis.html",
    ),
    ActionDefinition::new(
        "GetSites",
        List,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_GetSites.html",
    ),
    ActionDefinition::new(
        "GetTransitGatewayConnectPeerAssociations",
        List,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_GetTransitGatewayConnectPeerAssociations.html",
    ),
    ActionDefinition::new(
        "GetTransitGatewayRegistrations",
        List,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_GetTransitGatewayRegistrations.html",
    ),
    ActionDefinition::new(
        "ListTagsForResource",
        Read,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_ListTagsForResource.html",
    ),
    ActionDefinition::new(
        "RegisterTransitGateway",
        Write,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_RegisterTransitGateway.html",
    ),
    ActionDefinition::new(
        "StartRouteAnalysis",
        Write,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_StartRouteAnalysis.html",
    ),
    ActionDefinition::new(
        "TagResource",
        Tagging,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_TagResource.html",
    ),
    ActionDefinition::new(
        "UntagResource",
        Tagging,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_UntagResource.html",
    ),
    ActionDefinition::new(
        "UpdateConnection",
        Write,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_UpdateConnection.html",
    ),
    ActionDefinition::new(
        "UpdateDevice",
        Write,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_UpdateDevice.html",
    ),
    ActionDefinition::new(
        "UpdateGlobalNetwork",
        Write,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_UpdateGlobalNetwork.html",
    ),
    ActionDefinition::new(
        "UpdateLink",
        Write,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_UpdateLink.html",
    ),
    ActionDefinition::new(
        "UpdateNetworkResourceMetadata",
        Write,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_UpdateNetworkResourceMetadata.html",
    ),
    ActionDefinition::new(
        "UpdateSite",
        Write,
        "https://docs.aws.amazon.com/networkmanager/latest/APIReference/API_UpdateSite.html",
    ),
];

const RESOURCE_TYPES: &[ResourceTypeDefinition] = &[
    ResourceTypeDefinition::new(
        "global-network",
        ArnTemplate::new("arn:${Partition}:networkmanager::${Account}:global-network/${ResourceId}"),
    ),
    ResourceTypeDefinition::new(
        "site",
        ArnTemplate::new("arn:${Partition}:networkmanager::${Account}:site/${GlobalNetworkId}/${ResourceId}"),
    ),
    ResourceTypeDefinition::new(
        "link",
        ArnTemplate::new("arn:${Partition}:networkmanager::${Account}:link/${GlobalNetworkId}/${ResourceId}"),
    ),
    ResourceTypeDefinition::new(
        "device",
        ArnTemplate::new("arn:${Partition}:networkmanager::${Account}:device/${GlobalNetworkId}/${ResourceId}"),
    ),
    ResourceTypeDefinition::new(
        "connection",
        ArnTemplate::new("arn:${Partition}:networkmanager::${Account}:connection/${GlobalNetworkId}/${ResourceId}"),
    ),
];

const CONDITION_KEYS: &[ConditionKeyDefinition] = &[
    ConditionKeyDefinition::new("networkmanager:cgwArn", condop::StringLike),
    ConditionKeyDefinition::new("networkmanager:tgwArn", condop::StringLike),
    ConditionKeyDefinition::new("networkmanager:tgwConnectPeerArn", condop::StringLike),
];
