use crate::{ConditionValue, Operator, OperatorToken, StatementProvider};

service_actions! {
    /// Statement builder for AWS Accounts (`account`).
    Account, "account", {
        to_disable_region => "DisableRegion",
        to_enable_region => "EnableRegion",
        to_list_regions => "ListRegions",
    }
}

impl Account {
    /// Filter by the regions named in the request (`account:TargetRegion`, default `StringEquals`).
    pub fn if_target_region<V: Into<ConditionValue>>(
        &mut self,
        value: V,
        operator: Option<OperatorToken>,
    ) -> &mut Self {
        let operator = operator.unwrap_or_else(|| Operator::new().string_equals().into());
        self.with_condition("TargetRegion", value, Some(operator))
    }
}

#[cfg(test)]
mod tests {
    use {super::Account, crate::StatementProvider, pretty_assertions::assert_eq, serde_json::json};

    #[test_log::test]
    fn test_target_region() {
        let mut account = Account::default();
        account.to_enable_region().to_disable_region().if_target_region(["af-south-1", "ap-east-1"], None);
        account.to_list_regions();

        assert_eq!(
            account.to_json(),
            json!({
                "Effect": "Allow",
                "Action": ["account:EnableRegion", "account:DisableRegion", "account:ListRegions"],
                "Resource": ["*"],
                "Condition": {"StringEquals": {"account:TargetRegion": ["af-south-1", "ap-east-1"]}}
            })
        );

        let mut like = Account::new();
        like.if_target_region("eu-*", Some("StringLike".into()));
        assert_eq!(like.to_json()["Condition"], json!({"StringLike": {"account:TargetRegion": "eu-*"}}));
        assert!(like.to_json().get("Action").is_none());
    }
}
