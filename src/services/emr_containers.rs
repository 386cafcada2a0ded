use crate::{ArnScope, ConditionValue, OperatorToken, StatementProvider};

service_actions! {
    /// Statement builder for Amazon EMR on EKS (`emr-containers`).
    EmrContainers, "emr-containers", {
        to_cancel_job_run => "CancelJobRun",
        to_create_job_template => "CreateJobTemplate",
        to_create_managed_endpoint => "CreateManagedEndpoint",
        to_create_virtual_cluster => "CreateVirtualCluster",
        to_delete_job_template => "DeleteJobTemplate",
        to_delete_managed_endpoint => "DeleteManagedEndpoint",
        to_delete_virtual_cluster => "DeleteVirtualCluster",
        to_describe_job_run => "DescribeJobRun",
        to_describe_job_template => "DescribeJobTemplate",
        to_describe_managed_endpoint => "DescribeManagedEndpoint",
        to_describe_virtual_cluster => "DescribeVirtualCluster",
        to_list_job_runs => "ListJobRuns",
        to_list_job_templates => "ListJobTemplates",
        to_list_managed_endpoints => "ListManagedEndpoints",
        to_list_tags_for_resource => "ListTagsForResource",
        to_list_virtual_clusters => "ListVirtualClusters",
        to_start_job_run => "StartJobRun",
        to_tag_resource => "TagResource",
        to_untag_resource => "UntagResource",
    }
}

impl EmrContainers {
    fn regional_arn(
        &mut self,
        resource_type: &str,
        ids: &[&str],
        account: Option<&str>,
        region: Option<&str>,
        partition: Option<&str>,
    ) -> &mut Self {
        let scope = ArnScope::from_parts(account, region, partition);
        super::add_catalog_resource(&mut self.statement, Self::PREFIX, resource_type, &scope, ids);
        self
    }

    pub fn on_virtual_cluster(
        &mut self,
        virtual_cluster_id: &str,
        account: Option<&str>,
        region: Option<&str>,
        partition: Option<&str>,
    ) -> &mut Self {
        self.regional_arn("virtualCluster", &[virtual_cluster_id], account, region, partition)
    }

    pub fn on_job_run(
        &mut self,
        virtual_cluster_id: &str,
        job_run_id: &str,
        account: Option<&str>,
        region: Option<&str>,
        partition: Option<&str>,
    ) -> &mut Self {
        self.regional_arn("jobRun", &[virtual_cluster_id, job_run_id], account, region, partition)
    }

    pub fn on_job_template(
        &mut self,
        job_template_id: &str,
        account: Option<&str>,
        region: Option<&str>,
        partition: Option<&str>,
    ) -> &mut Self {
        self.regional_arn("jobTemplate", &[job_template_id], account, region, partition)
    }

    pub fn on_managed_endpoint(
        &mut self,
        virtual_cluster_id: &str,
        endpoint_id: &str,
        account: Option<&str>,
        region: Option<&str>,
        partition: Option<&str>,
    ) -> &mut Self {
        self.regional_arn("managedEndpoint", &[virtual_cluster_id, endpoint_id], account, region, partition)
    }

    /// Filter by the execution role ARN passed to `StartJobRun` or `CreateManagedEndpoint`.
    pub fn if_execution_role_arn<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<OperatorToken>,
    ) -> &mut Self {
        self.with_condition("ExecutionRoleArn", value, operator)
    }

    pub fn if_job_template_arn<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<OperatorToken>,
    ) -> &mut Self {
        self.with_condition("JobTemplateArn", value, operator)
    }
}
