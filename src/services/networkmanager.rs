use crate::{ArnScope, ConditionValue, OperatorToken, StatementProvider};

service_actions! {
    /// Statement builder for AWS Network Manager (`networkmanager`).
    ///
    /// Network Manager resources are global: their ARNs have no region.
    NetworkManager, "networkmanager", {
        to_associate_customer_gateway => "AssociateCustomerGateway",
        to_associate_link => "AssociateLink",
        to_associate_transit_gateway_connect_peer => "AssociateTransitGatewayConnectPeer",
        to_create_connection => "CreateConnection",
        to_create_device => "CreateDevice",
        to_create_global_network => "CreateGlobalNetwork",
        to_create_link => "CreateLink",
        to_create_site => "CreateSite",
        to_delete_connection => "DeleteConnection",
        to_delete_device => "DeleteDevice",
        to_delete_global_network => "DeleteGlobalNetwork",
        to_delete_link => "DeleteLink",
        to_delete_site => "DeleteSite",
        to_deregister_transit_gateway => "DeregisterTransitGateway",
        to_describe_global_networks => "DescribeGlobalNetworks",
        to_disassociate_customer_gateway => "DisassociateCustomerGateway",
        to_disassociate_link => "DisassociateLink",
        to_disassociate_transit_gateway_connect_peer => "DisassociateTransitGatewayConnectPeer",
        to_get_connections => "GetConnections",
        to_get_customer_gateway_associations => "GetCustomerGatewayAssociations",
        to_get_devices => "GetDevices",
        to_get_link_associations => "GetLinkAssociations",
        to_get_links => "GetLinks",
        to_get_network_resource_counts => "GetNetworkResourceCounts",
        to_get_network_resource_relationships => "GetNetworkResourceRelationships",
        to_get_network_resources => "GetNetworkResources",
        to_get_network_routes => "GetNetworkRoutes",
        to_get_network_telemetry => "GetNetworkTelemetry",
        to_get_route_analysis => "GetRouteAnalysis",
        to_get_sites => "GetSites",
        to_get_transit_gateway_connect_peer_associations => "GetTransitGatewayConnectPeerAssociations",
        to_get_transit_gateway_registrations => "GetTransitGatewayRegistrations",
        to_list_tags_for_resource => "ListTagsForResource",
        to_register_transit_gateway => "RegisterTransitGateway",
        to_start_route_analysis => "StartRouteAnalysis",
        to_tag_resource => "TagResource",
        to_untag_resource => "UntagResource",
        to_update_connection => "UpdateConnection",
        to_update_device => "UpdateDevice",
        to_update_global_network => "UpdateGlobalNetwork",
        to_update_link => "UpdateLink",
        to_update_network_resource_metadata => "UpdateNetworkResourceMetadata",
        to_update_site => "UpdateSite",
    }
}

impl NetworkManager {
    fn global_arn(
        &mut self,
        resource_type: &str,
        ids: &[&str],
        account: Option<&str>,
        partition: Option<&str>,
    ) -> &mut Self {
        let scope = ArnScope::from_parts(account, None, partition);
        super::add_catalog_resource(&mut self.statement, Self::PREFIX, resource_type, &scope, ids);
        self
    }

    pub fn on_global_network(
        &mut self,
        resource_id: &str,
        account: Option<&str>,
        partition: Option<&str>,
    ) -> &mut Self {
        self.global_arn("global-network", &[resource_id], account, partition)
    }

    pub fn on_site(
        &mut self,
        global_network_id: &str,
        resource_id: &str,
        account: Option<&str>,
        partition: Option<&str>,
    ) -> &mut Self {
        self.global_arn("site", &[global_network_id, resource_id], account, partition)
    }

    pub fn on_link(
        &mut self,
        global_network_id: &str,
        resource_id: &str,
        account: Option<&str>,
        partition: Option<&str>,
    ) -> &mut Self {
        self.global_arn("link", &[global_network_id, resource_id], account, partition)
    }

    pub fn on_device(
        &mut self,
        global_network_id: &str,
        resource_id: &str,
        account: Option<&str>,
        partition: Option<&str>,
    ) -> &mut Self {
        self.global_arn("device", &[global_network_id, resource_id], account, partition)
    }

    pub fn on_connection(
        &mut self,
        global_network_id: &str,
        resource_id: &str,
        account: Option<&str>,
        partition: Option<&str>,
    ) -> &mut Self {
        self.global_arn("connection", &[global_network_id, resource_id], account, partition)
    }

    /// Filter by the ARN of a customer gateway (`networkmanager:cgwArn`).
    pub fn if_cgw_arn<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<OperatorToken>) -> &mut Self {
        self.with_condition("cgwArn", value, operator)
    }

    /// Filter by the ARN of a transit gateway (`networkmanager:tgwArn`).
    pub fn if_tgw_arn<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<OperatorToken>) -> &mut Self {
        self.with_condition("tgwArn", value, operator)
    }

    pub fn if_tgw_connect_peer_arn<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<OperatorToken>,
    ) -> &mut Self {
        self.with_condition("tgwConnectPeerArn", value, operator)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::NetworkManager,
        crate::{condop, Operator, StatementProvider},
        pretty_assertions::assert_eq,
        serde_json::json,
    };

    #[test_log::test]
    fn test_global_resources() {
        let mut nm = NetworkManager::new();
        nm.to_register_transit_gateway()
            .to_deregister_transit_gateway()
            .on_global_network("global-network-01231231231231231", None, None)
            .on_site("global-network-01231231231231231", "site-444555aaabbb11223", Some("111122223333"), None)
            .on_device("gn", "device-1", None, Some("aws-cn"))
            .if_tgw_arn("arn:aws:ec2:us-west-2:111122223333:transit-gateway/*", Some(condop::ArnLike.into()))
            .if_cgw_arn(
                vec!["arn:aws:ec2:*:111122223333:customer-gateway/a", "arn:aws:ec2:*:111122223333:customer-gateway/b"],
                Some(Operator::new().for_any_value().arn_equals().into()),
            );

        assert_eq!(
            nm.to_json(),
            json!({
                "Effect": "Allow",
                "Action": ["networkmanager:RegisterTransitGateway", "networkmanager:DeregisterTransitGateway"],
                "Resource": [
                    "arn:aws:networkmanager::*:global-network/global-network-01231231231231231",
                    "arn:aws:networkmanager::111122223333:site/global-network-01231231231231231/site-444555aaabbb11223",
                    "arn:aws-cn:networkmanager::*:device/gn/device-1"
                ],
                "Condition": {
                    "ArnLike": {"networkmanager:tgwArn": "arn:aws:ec2:us-west-2:111122223333:transit-gateway/*"},
                    "ForAnyValue:ArnEquals": {
                        "networkmanager:cgwArn": [
                            "arn:aws:ec2:*:111122223333:customer-gateway/a",
                            "arn:aws:ec2:*:111122223333:customer-gateway/b"
                        ]
                    }
                }
            })
        );
    }
}
