use crate::{ArnScope, ConditionValue, OperatorToken, StatementProvider};

service_actions! {
    /// Statement builder for Amazon S3 Glacier (`glacier`).
    Glacier, "glacier", {
        to_abort_multipart_upload => "AbortMultipartUpload",
        to_abort_vault_lock => "AbortVaultLock",
        to_add_tags_to_vault => "AddTagsToVault",
        to_complete_multipart_upload => "CompleteMultipartUpload",
        to_complete_vault_lock => "CompleteVaultLock",
        to_create_vault => "CreateVault",
        to_delete_archive => "DeleteArchive",
        to_delete_vault => "DeleteVault",
        to_delete_vault_access_policy => "DeleteVaultAccessPolicy",
        to_delete_vault_notifications => "DeleteVaultNotifications",
        to_describe_job => "DescribeJob",
        to_describe_vault => "DescribeVault",
        to_get_data_retrieval_policy => "GetDataRetrievalPolicy",
        to_get_job_output => "GetJobOutput",
        to_get_vault_access_policy => "GetVaultAccessPolicy",
        to_get_vault_lock => "GetVaultLock",
        to_get_vault_notifications => "GetVaultNotifications",
        to_initiate_job => "InitiateJob",
        to_initiate_multipart_upload => "InitiateMultipartUpload",
        to_initiate_vault_lock => "InitiateVaultLock",
        to_list_jobs => "ListJobs",
        to_list_multipart_uploads => "ListMultipartUploads",
        to_list_parts => "ListParts",
        to_list_provisioned_capacity => "ListProvisionedCapacity",
        to_list_tags_for_vault => "ListTagsForVault",
        to_list_vaults => "ListVaults",
        to_purchase_provisioned_capacity => "PurchaseProvisionedCapacity",
        to_remove_tags_from_vault => "RemoveTagsFromVault",
        to_set_data_retrieval_policy => "SetDataRetrievalPolicy",
        to_set_vault_access_policy => "SetVaultAccessPolicy",
        to_set_vault_notifications => "SetVaultNotifications",
        to_upload_archive => "UploadArchive",
        to_upload_multipart_part => "UploadMultipartPart",
    }
}

impl Glacier {
    pub fn on_vault(
        &mut self,
        vault_name: &str,
        account: Option<&str>,
        region: Option<&str>,
        partition: Option<&str>,
    ) -> &mut Self {
        let scope = ArnScope::from_parts(account, region, partition);
        super::add_catalog_resource(&mut self.statement, Self::PREFIX, "vault", &scope, &[vault_name]);
        self
    }

    /// Filter by how long an archive has been stored in the vault, in days (`glacier:ArchiveAgeInDays`).
    pub fn if_archive_age_in_days<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<OperatorToken>,
    ) -> &mut Self {
        self.with_condition("ArchiveAgeInDays", value, operator)
    }

    /// Filter by a tag on the vault (`glacier:ResourceTag/<tag_key>`).
    pub fn if_resource_tag<V: Into<ConditionValue>>(
        &mut self,
        tag_key: &str,
        value: V,
        operator: Option<OperatorToken>,
    ) -> &mut Self {
        self.with_condition(&format!("ResourceTag/{}", tag_key), value, operator)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::Glacier,
        crate::{condop, StatementProvider},
        pretty_assertions::assert_eq,
        serde_json::json,
    };

    #[test_log::test]
    fn test_vault_lock() {
        let mut glacier = Glacier::new();
        glacier
            .deny()
            .to_delete_archive()
            .on_vault("records", Some("111122223333"), Some("us-west-2"), None)
            .if_archive_age_in_days(365, Some(condop::NumericLessThan.into()))
            .if_resource_tag("LegalHold", true, None);

        assert_eq!(
            glacier.to_json(),
            json!({
                "Effect": "Deny",
                "Action": ["glacier:DeleteArchive"],
                "Resource": ["arn:aws:glacier:us-west-2:111122223333:vaults/records"],
                "Condition": {
                    "NumericLessThan": {"glacier:ArchiveAgeInDays": "365"},
                    "StringLike": {"glacier:ResourceTag/LegalHold": "true"}
                }
            })
        );
    }
}
