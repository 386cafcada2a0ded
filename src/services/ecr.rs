use crate::{ArnScope, ConditionValue, OperatorToken, StatementProvider};

service_actions! {
    /// Statement builder for Amazon Elastic Container Registry (`ecr`).
    Ecr, "ecr", {
        to_batch_check_layer_availability => "BatchCheckLayerAvailability",
        to_batch_delete_image => "BatchDeleteImage",
        to_batch_get_image => "BatchGetImage",
        to_complete_layer_upload => "CompleteLayerUpload",
        to_create_repository => "CreateRepository",
        to_delete_lifecycle_policy => "DeleteLifecyclePolicy",
        to_delete_repository => "DeleteRepository",
        to_delete_repository_policy => "DeleteRepositoryPolicy",
        to_describe_image_scan_findings => "DescribeImageScanFindings",
        to_describe_images => "DescribeImages",
        to_describe_repositories => "DescribeRepositories",
        to_get_authorization_token => "GetAuthorizationToken",
        to_get_download_url_for_layer => "GetDownloadUrlForLayer",
        to_get_lifecycle_policy => "GetLifecyclePolicy",
        to_get_lifecycle_policy_preview => "GetLifecyclePolicyPreview",
        to_get_repository_policy => "GetRepositoryPolicy",
        to_initiate_layer_upload => "InitiateLayerUpload",
        to_list_images => "ListImages",
        to_list_tags_for_resource => "ListTagsForResource",
        to_put_image => "PutImage",
        to_put_image_scanning_configuration => "PutImageScanningConfiguration",
        to_put_image_tag_mutability => "PutImageTagMutability",
        to_put_lifecycle_policy => "PutLifecyclePolicy",
        to_set_repository_policy => "SetRepositoryPolicy",
        to_start_image_scan => "StartImageScan",
        to_start_lifecycle_policy_preview => "StartLifecyclePolicyPreview",
        to_tag_resource => "TagResource",
        to_untag_resource => "UntagResource",
        to_upload_layer_part => "UploadLayerPart",
    }
}

impl Ecr {
    /// Add a repository ARN. Unset parts default to any account, any region, and the `aws` partition.
    pub fn on_repository(
        &mut self,
        repository_name: &str,
        account: Option<&str>,
        region: Option<&str>,
        partition: Option<&str>,
    ) -> &mut Self {
        let scope = ArnScope::from_parts(account, region, partition);
        super::add_catalog_resource(&mut self.statement, Self::PREFIX, "repository", &scope, &[repository_name]);
        self
    }

    /// Filter by a tag on the repository (`ecr:ResourceTag/<tag_key>`, default `StringLike`).
    pub fn if_resource_tag<V: Into<ConditionValue>>(
        &mut self,
        tag_key: &str,
        value: V,
        operator: Option<OperatorToken>,
    ) -> &mut Self {
        self.with_condition(&format!("ecr:ResourceTag/{}", tag_key), value, operator)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::Ecr,
        crate::{catalog, StatementProvider},
        pretty_assertions::assert_eq,
        serde_json::json,
    };

    #[test_log::test]
    fn test_actions_match_catalog() {
        let mut ecr = Ecr::new();
        ecr.to_batch_check_layer_availability()
            .to_batch_delete_image()
            .to_batch_get_image()
            .to_complete_layer_upload()
            .to_create_repository()
            .to_delete_lifecycle_policy()
            .to_delete_repository()
            .to_delete_repository_policy()
            .to_describe_image_scan_findings()
            .to_describe_images()
            .to_describe_repositories()
            .to_get_authorization_token()
            .to_get_download_url_for_layer()
            .to_get_lifecycle_policy()
            .to_get_lifecycle_policy_preview()
            .to_get_repository_policy()
            .to_initiate_layer_upload()
            .to_list_images()
            .to_list_tags_for_resource()
            .to_put_image()
            .to_put_image_scanning_configuration()
            .to_put_image_tag_mutability()
            .to_put_lifecycle_policy()
            .to_set_repository_policy()
            .to_start_image_scan()
            .to_start_lifecycle_policy_preview()
            .to_tag_resource()
            .to_untag_resource()
            .to_upload_layer_part();

        let expected: Vec<String> = catalog::service(Ecr::PREFIX)
            .unwrap()
            .actions()
            .iter()
            .map(|a| format!("ecr:{}", a.name()))
            .collect();
        assert_eq!(ecr.statement().actions(), expected.as_slice());
    }

    #[test_log::test]
    fn test_repository_and_tag() {
        let mut ecr = Ecr::with_sid("PushApp");
        ecr.to_put_image()
            .on_repository("app", None, None, None)
            .on_repository("app", Some("111122223333"), Some("us-east-1"), Some("aws-us-gov"))
            .if_resource_tag("env", vec!["prod", "stage"], Some("StringEquals".into()));

        assert_eq!(
            ecr.to_json(),
            json!({
                "Sid": "PushApp",
                "Effect": "Allow",
                "Action": ["ecr:PutImage"],
                "Resource": [
                    "arn:aws:ecr:*:*:repository/app",
                    "arn:aws-us-gov:ecr:us-east-1:111122223333:repository/app"
                ],
                "Condition": {"StringEquals": {"ecr:ResourceTag/env": ["prod", "stage"]}}
            })
        );
    }
}
