use {
    super::{op, ConditionValue, Operator, OperatorToken},
    crate::StatementProvider,
};

/// Helpers for the global `aws:` condition keys.
///
/// Each helper passes its value through unchanged and applies the key's customary operator when `operator` is
/// `None`; keys without a customary operator use `StringLike`. Dates are written as ISO-8601 UTC with milliseconds.
pub trait GlobalConditions: StatementProvider {
    /// `aws:CalledVia`, default `ForAnyValue:StringEquals`.
    fn if_aws_called_via<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<OperatorToken>) -> &mut Self {
        let operator = operator.unwrap_or_else(|| Operator::new().for_any_value().string_equals().into());
        self.with_condition("aws:CalledVia", value, Some(operator))
    }

    fn if_aws_called_via_first<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<OperatorToken>,
    ) -> &mut Self {
        self.with_condition("aws:CalledViaFirst", value, operator)
    }

    fn if_aws_called_via_last<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<OperatorToken>,
    ) -> &mut Self {
        self.with_condition("aws:CalledViaLast", value, operator)
    }

    /// `aws:CurrentTime`, default `DateLessThanEquals`.
    fn if_aws_current_time<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<OperatorToken>) -> &mut Self {
        let operator = operator.unwrap_or_else(|| op::DateLessThanEquals.into());
        self.with_condition("aws:CurrentTime", value, Some(operator))
    }

    fn if_aws_ec2_instance_source_vpc<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<OperatorToken>,
    ) -> &mut Self {
        self.with_condition("aws:Ec2InstanceSourceVpc", value, operator)
    }

    /// `aws:Ec2InstanceSourcePrivateIPv4`, default `IpAddress`.
    fn if_aws_ec2_instance_source_private_ipv4<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<OperatorToken>,
    ) -> &mut Self {
        let operator = operator.unwrap_or_else(|| op::IpAddress.into());
        self.with_condition("aws:Ec2InstanceSourcePrivateIPv4", value, Some(operator))
    }

    /// `aws:EpochTime`, default `DateLessThanEquals`.
    fn if_aws_epoch_time<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<OperatorToken>) -> &mut Self {
        let operator = operator.unwrap_or_else(|| op::DateLessThanEquals.into());
        self.with_condition("aws:EpochTime", value, Some(operator))
    }

    fn if_aws_federated_provider<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<OperatorToken>,
    ) -> &mut Self {
        self.with_condition("aws:FederatedProvider", value, operator)
    }

    /// `aws:MultiFactorAuthAge` in seconds, default `NumericLessThan`.
    fn if_aws_multi_factor_auth_age<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<OperatorToken>,
    ) -> &mut Self {
        let operator = operator.unwrap_or_else(|| op::NumericLessThan.into());
        self.with_condition("aws:MultiFactorAuthAge", value, Some(operator))
    }

    /// `aws:MultiFactorAuthPresent` with `Bool`; `None` means `true`.
    fn if_aws_multi_factor_auth_present(&mut self, value: Option<bool>) -> &mut Self {
        self.with_condition("aws:MultiFactorAuthPresent", value.unwrap_or(true), Some(op::Bool.into()))
    }

    fn if_aws_principal_account<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<OperatorToken>,
    ) -> &mut Self {
        self.with_condition("aws:PrincipalAccount", value, operator)
    }

    /// `aws:PrincipalArn`, default `ArnLike`.
    fn if_aws_principal_arn<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<OperatorToken>) -> &mut Self {
        let operator = operator.unwrap_or_else(|| op::ArnLike.into());
        self.with_condition("aws:PrincipalArn", value, Some(operator))
    }

    /// `aws:PrincipalIsAWSService` with `Bool`; `None` means `true`.
    fn if_aws_principal_is_aws_service(&mut self, value: Option<bool>) -> &mut Self {
        self.with_condition("aws:PrincipalIsAWSService", value.unwrap_or(true), Some(op::Bool.into()))
    }

    fn if_aws_principal_org_id<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<OperatorToken>,
    ) -> &mut Self {
        self.with_condition("aws:PrincipalOrgID", value, operator)
    }

    fn if_aws_principal_org_paths<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<OperatorToken>,
    ) -> &mut Self {
        self.with_condition("aws:PrincipalOrgPaths", value, operator)
    }

    fn if_aws_principal_service_name<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<OperatorToken>,
    ) -> &mut Self {
        self.with_condition("aws:PrincipalServiceName", value, operator)
    }

    /// `aws:PrincipalServiceNamesList`, default `ForAnyValue:StringLike`.
    fn if_aws_principal_service_names_list<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<OperatorToken>,
    ) -> &mut Self {
        let operator = operator.unwrap_or_else(|| Operator::new().string_like().for_any_value().into());
        self.with_condition("aws:PrincipalServiceNamesList", value, Some(operator))
    }

    /// `aws:PrincipalTag/<key>`.
    fn if_aws_principal_tag<V: Into<ConditionValue>>(
        &mut self,
        key: &str,
        value: V,
        operator: Option<OperatorToken>,
    ) -> &mut Self {
        self.with_condition(&format!("aws:PrincipalTag/{}", key), value, operator)
    }

    fn if_aws_principal_type<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<OperatorToken>,
    ) -> &mut Self {
        self.with_condition("aws:PrincipalType", value, operator)
    }

    fn if_aws_referer<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<OperatorToken>) -> &mut Self {
        self.with_condition("aws:Referer", value, operator)
    }

    fn if_aws_requested_region<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<OperatorToken>,
    ) -> &mut Self {
        self.with_condition("aws:RequestedRegion", value, operator)
    }

    /// `aws:RequestTag/<key>`.
    fn if_aws_request_tag<V: Into<ConditionValue>>(
        &mut self,
        key: &str,
        value: V,
        operator: Option<OperatorToken>,
    ) -> &mut Self {
        self.with_condition(&format!("aws:RequestTag/{}", key), value, operator)
    }

    fn if_aws_resource_account<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<OperatorToken>,
    ) -> &mut Self {
        self.with_condition("aws:ResourceAccount", value, operator)
    }

    fn if_aws_resource_org_id<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<OperatorToken>,
    ) -> &mut Self {
        self.with_condition("aws:ResourceOrgID", value, operator)
    }

    fn if_aws_resource_org_paths<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<OperatorToken>,
    ) -> &mut Self {
        self.with_condition("aws:ResourceOrgPaths", value, operator)
    }

    /// `aws:ResourceTag/<key>`.
    fn if_aws_resource_tag<V: Into<ConditionValue>>(
        &mut self,
        key: &str,
        value: V,
        operator: Option<OperatorToken>,
    ) -> &mut Self {
        self.with_condition(&format!("aws:ResourceTag/{}", key), value, operator)
    }

    /// `aws:SecureTransport` with `Bool`; `None` means `true`.
    fn if_aws_secure_transport(&mut self, value: Option<bool>) -> &mut Self {
        self.with_condition("aws:SecureTransport", value.unwrap_or(true), Some(op::Bool.into()))
    }

    fn if_aws_source_account<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<OperatorToken>,
    ) -> &mut Self {
        self.with_condition("aws:SourceAccount", value, operator)
    }

    /// `aws:SourceArn`, default `ArnLike`.
    fn if_aws_source_arn<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<OperatorToken>) -> &mut Self {
        let operator = operator.unwrap_or_else(|| op::ArnLike.into());
        self.with_condition("aws:SourceArn", value, Some(operator))
    }

    fn if_aws_source_identity<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<OperatorToken>,
    ) -> &mut Self {
        self.with_condition("aws:SourceIdentity", value, operator)
    }

    /// `aws:SourceIp`, default `IpAddress`.
    fn if_aws_source_ip<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<OperatorToken>) -> &mut Self {
        let operator = operator.unwrap_or_else(|| op::IpAddress.into());
        self.with_condition("aws:SourceIp", value, Some(operator))
    }

    fn if_aws_source_vpc<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<OperatorToken>) -> &mut Self {
        self.with_condition("aws:SourceVpc", value, operator)
    }

    fn if_aws_source_vpce<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<OperatorToken>) -> &mut Self {
        self.with_condition("aws:SourceVpce", value, operator)
    }

    fn if_aws_tag_keys<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<OperatorToken>) -> &mut Self {
        self.with_condition("aws:TagKeys", value, operator)
    }

    /// `aws:TokenIssueTime`, default `DateGreaterThanEquals`.
    fn if_aws_token_issue_time<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<OperatorToken>,
    ) -> &mut Self {
        let operator = operator.unwrap_or_else(|| op::DateGreaterThanEquals.into());
        self.with_condition("aws:TokenIssueTime", value, Some(operator))
    }

    fn if_aws_user_agent<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<OperatorToken>) -> &mut Self {
        self.with_condition("aws:UserAgent", value, operator)
    }

    fn if_aws_userid<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<OperatorToken>) -> &mut Self {
        self.with_condition("aws:userid", value, operator)
    }

    fn if_aws_username<V: Into<ConditionValue>>(&mut self, value: V, operator: Option<OperatorToken>) -> &mut Self {
        self.with_condition("aws:username", value, operator)
    }

    /// `aws:ViaAWSService` with `Bool`; `None` means `true`.
    fn if_aws_via_aws_service(&mut self, value: Option<bool>) -> &mut Self {
        self.with_condition("aws:ViaAWSService", value.unwrap_or(true), Some(op::Bool.into()))
    }

    /// `aws:VpcSourceIp`, default `IpAddress`.
    fn if_aws_vpc_source_ip<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<OperatorToken>,
    ) -> &mut Self {
        let operator = operator.unwrap_or_else(|| op::IpAddress.into());
        self.with_condition("aws:VpcSourceIp", value, Some(operator))
    }
}

impl<T: StatementProvider> GlobalConditions for T {}
