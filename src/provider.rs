use {
    crate::{ConditionValue, OperatorToken, PolicyStatement},
    serde_json::Value,
};

/// Anything that wraps a [PolicyStatement].
///
/// The provided methods are the chaining surface shared by the generic statement, the catalog-driven
/// [ServiceStatement](crate::ServiceStatement), and the typed service builders.
pub trait StatementProvider {
    fn statement(&self) -> &PolicyStatement;
    fn statement_mut(&mut self) -> &mut PolicyStatement;

    /// Add an action; a bare name is qualified with the service prefix.
    fn to(&mut self, action: &str) -> &mut Self {
        self.statement_mut().add_action(action);
        self
    }

    /// Add a resource ARN.
    fn on(&mut self, arn: &str) -> &mut Self {
        self.statement_mut().add_resource(arn);
        self
    }

    fn on_all_resources(&mut self) -> &mut Self {
        self.statement_mut().add_resource("*");
        self
    }

    fn allow(&mut self) -> &mut Self {
        self.statement_mut().allow();
        self
    }

    fn deny(&mut self) -> &mut Self {
        self.statement_mut().deny();
        self
    }

    fn not_action(&mut self) -> &mut Self {
        self.statement_mut().use_not_action(true);
        self
    }

    fn not_resource(&mut self) -> &mut Self {
        self.statement_mut().use_not_resource(true);
        self
    }

    fn all_actions(&mut self) -> &mut Self {
        self.statement_mut().all_actions();
        self
    }

    fn with_condition<V: Into<ConditionValue>>(
        &mut self,
        key: &str,
        value: V,
        operator: Option<OperatorToken>,
    ) -> &mut Self {
        self.statement_mut().add_condition(key, value, operator);
        self
    }

    fn has_conditions(&self) -> bool {
        self.statement().has_conditions()
    }

    fn to_json(&mut self) -> Value {
        self.statement_mut().to_json()
    }

    fn to_statement_json(&mut self) -> Value {
        self.statement_mut().to_statement_json()
    }

    fn freeze(&mut self) -> &mut Self {
        self.statement_mut().freeze();
        self
    }
}

impl StatementProvider for PolicyStatement {
    #[inline]
    fn statement(&self) -> &PolicyStatement {
        self
    }

    #[inline]
    fn statement_mut(&mut self) -> &mut PolicyStatement {
        self
    }
}
