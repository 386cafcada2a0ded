#[cfg(test)]
mod tests;

use {
    crate::{
        serutil::StringList, Condition, ConditionAccumulator, ConditionValue, Effect, OperatorToken, Statement,
        StatementHost,
    },
    log::{debug, warn},
    serde_json::Value,
    std::fmt::{Debug, Formatter, Result as FmtResult},
};

/// A host a statement is embedded in, plus whether the base data has been pushed to it.
pub struct HostBinding {
    host: Box<dyn StatementHost>,
    base_applied: bool,
}

impl HostBinding {
    fn new(host: Box<dyn StatementHost>) -> Self {
        Self {
            host,
            base_applied: false,
        }
    }
}

impl Debug for HostBinding {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.debug_struct("HostBinding").field("base_applied", &self.base_applied).finish_non_exhaustive()
    }
}

/// A policy statement under construction.
///
/// A statement either renders itself (standalone) or is bound to a [StatementHost] that owns the final document
/// (integrated). In integrated mode the first serialization call pushes the effect, sid, actions, resources, and
/// every accumulated condition to the host exactly once; later calls only ask the host to render.
#[derive(Debug)]
pub struct PolicyStatement {
    sid: Option<String>,
    effect: Effect,
    actions: Vec<String>,
    not_action: bool,
    resources: Vec<String>,
    not_resource: bool,
    conditions: ConditionAccumulator,
    host: Option<HostBinding>,
    frozen: bool,
}

impl PolicyStatement {
    /// A standalone statement whose bare action names and condition keys are qualified with `service_prefix`.
    pub fn new<S: Into<String>>(service_prefix: S) -> Self {
        Self {
            sid: None,
            effect: Effect::Allow,
            actions: Vec::new(),
            not_action: false,
            resources: Vec::new(),
            not_resource: false,
            conditions: ConditionAccumulator::new(service_prefix),
            host: None,
            frozen: false,
        }
    }

    pub fn with_sid<S: Into<String>, T: Into<String>>(service_prefix: S, sid: T) -> Self {
        let mut statement = Self::new(service_prefix);
        statement.sid = Some(sid.into());
        statement
    }

    /// A statement embedded in `host`.
    pub fn integrated<S: Into<String>>(service_prefix: S, host: Box<dyn StatementHost>) -> Self {
        let mut statement = Self::new(service_prefix);
        statement.host = Some(HostBinding::new(host));
        statement
    }

    /// Bind this statement to `host`, replacing any previous host.
    ///
    /// Conditions already replayed into a previous host are not replayed again.
    pub fn attach_host(&mut self, host: Box<dyn StatementHost>) -> &mut Self {
        if self.conditions.is_replayed() {
            warn!("Attaching a host after conditions were replayed; they will not be sent to the new host");
        }
        self.host = Some(HostBinding::new(host));
        self
    }

    #[inline]
    pub fn is_integrated(&self) -> bool {
        self.host.is_some()
    }

    pub fn host(&self) -> Option<&dyn StatementHost> {
        self.host.as_ref().map(|binding| binding.host.as_ref())
    }

    #[inline]
    pub fn service_prefix(&self) -> &str {
        self.conditions.service_prefix()
    }

    #[inline]
    pub fn sid(&self) -> Option<&str> {
        self.sid.as_deref()
    }

    pub fn set_sid<S: Into<String>>(&mut self, sid: S) -> &mut Self {
        self.note_late("sid");
        self.sid = Some(sid.into());
        self
    }

    #[inline]
    pub fn effect(&self) -> Effect {
        self.effect
    }

    pub fn set_effect(&mut self, effect: Effect) -> &mut Self {
        self.note_late("effect");
        self.effect = effect;
        self
    }

    #[inline]
    pub fn allow(&mut self) -> &mut Self {
        self.set_effect(Effect::Allow)
    }

    #[inline]
    pub fn deny(&mut self) -> &mut Self {
        self.set_effect(Effect::Deny)
    }

    /// The fully qualified form of an action name.
    pub fn qualify_action(&self, name: &str) -> String {
        let prefix = self.service_prefix();
        if name.contains(':') || prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}:{}", prefix, name)
        }
    }

    /// Add an action, qualifying a bare name with the service prefix. Duplicates are ignored.
    pub fn add_action(&mut self, name: &str) -> &mut Self {
        self.note_late("action");
        let action = self.qualify_action(name);
        if !self.actions.contains(&action) {
            self.actions.push(action);
        }
        self
    }

    pub fn add_actions<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.add_action(name.as_ref());
        }
        self
    }

    /// Grant every action of the service (`prefix:*`).
    #[inline]
    pub fn all_actions(&mut self) -> &mut Self {
        self.add_action("*")
    }

    #[inline]
    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    /// Render the action list under `NotAction` instead of `Action`.
    pub fn use_not_action(&mut self, not_action: bool) -> &mut Self {
        self.note_late("NotAction flag");
        self.not_action = not_action;
        self
    }

    #[inline]
    pub fn is_not_action(&self) -> bool {
        self.not_action
    }

    /// Add a resource ARN. Duplicates are ignored.
    pub fn add_resource(&mut self, arn: &str) -> &mut Self {
        self.note_late("resource");
        if !self.resources.iter().any(|r| r == arn) {
            self.resources.push(arn.to_string());
        }
        self
    }

    pub fn add_resources<I, S>(&mut self, arns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arn in arns {
            self.add_resource(arn.as_ref());
        }
        self
    }

    #[inline]
    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    /// Render the resource list under `NotResource` instead of `Resource`.
    pub fn use_not_resource(&mut self, not_resource: bool) -> &mut Self {
        self.note_late("NotResource flag");
        self.not_resource = not_resource;
        self
    }

    #[inline]
    pub fn is_not_resource(&self) -> bool {
        self.not_resource
    }

    /// Add a condition. A key without a `:` is qualified with the service prefix; the operator defaults to
    /// `StringLike`. Setting the same operator and key again replaces the value.
    pub fn add_condition<V: Into<ConditionValue>>(
        &mut self,
        key: &str,
        value: V,
        operator: Option<OperatorToken>,
    ) -> &mut Self {
        self.conditions.add(key, value.into(), operator);
        self
    }

    #[inline]
    pub fn has_conditions(&self) -> bool {
        self.conditions.has_conditions()
    }

    #[inline]
    pub fn conditions(&self) -> &Condition {
        self.conditions.conditions()
    }

    #[inline]
    pub fn accumulator(&self) -> &ConditionAccumulator {
        &self.conditions
    }

    /// Whether the statement (or its host) is frozen.
    pub fn is_frozen(&self) -> bool {
        match &self.host {
            Some(binding) => binding.host.frozen(),
            None => self.frozen,
        }
    }

    /// The standalone rendering of this statement.
    ///
    /// `Action` and `Resource` are always lists. An empty action list is omitted, an empty resource list renders as
    /// `["*"]`, and `Condition` is present only when at least one condition was added. This never pushes anything
    /// to a host.
    pub fn document(&self) -> Statement {
        let actions = if self.actions.is_empty() {
            (None, None)
        } else {
            let list = Some(StringList::List(self.actions.clone()));
            if self.not_action {
                (None, list)
            } else {
                (list, None)
            }
        };

        let resources = if self.resources.is_empty() {
            (Some(StringList::List(vec!["*".to_string()])), None)
        } else {
            let list = Some(StringList::List(self.resources.clone()));
            if self.not_resource {
                (None, list)
            } else {
                (list, None)
            }
        };

        let condition = if self.has_conditions() {
            Some(self.conditions.conditions().clone())
        } else {
            None
        };

        Statement::from_parts(self.sid.clone(), self.effect, actions, resources, condition)
    }

    /// Serialize the statement. Standalone statements render [PolicyStatement::document]; integrated statements
    /// flush to the host once and return the host's rendering.
    pub fn to_json(&mut self) -> Value {
        self.flush();
        match &self.host {
            Some(binding) => binding.host.to_json(),
            None => self.document().to_value(),
        }
    }

    /// Like [PolicyStatement::to_json], but asks the host for its statement rendering.
    pub fn to_statement_json(&mut self) -> Value {
        self.flush();
        match &self.host {
            Some(binding) => binding.host.to_statement_json(),
            None => self.document().to_value(),
        }
    }

    /// Freeze the statement. An integrated statement flushes first unless its host is already frozen.
    pub fn freeze(&mut self) -> &mut Self {
        match self.host.as_ref().map(|binding| binding.host.frozen()) {
            Some(host_frozen) => {
                if !host_frozen {
                    self.flush();
                }
                if let Some(binding) = self.host.as_mut() {
                    binding.host.freeze();
                }
            }
            None => self.frozen = true,
        }
        self
    }

    fn flush(&mut self) {
        let binding = match self.host.as_mut() {
            Some(binding) => binding,
            None => return,
        };

        if !binding.base_applied {
            debug!("Applying base statement data to host");
            let host = binding.host.as_mut();
            host.set_effect(self.effect);
            if let Some(sid) = &self.sid {
                host.set_sid(sid);
            }

            if !self.actions.is_empty() {
                if self.not_action {
                    host.add_not_actions(&self.actions);
                } else {
                    host.add_actions(&self.actions);
                }
            }

            if self.resources.is_empty() {
                host.add_resources(&["*".to_string()]);
            } else if self.not_resource {
                host.add_not_resources(&self.resources);
            } else {
                host.add_resources(&self.resources);
            }

            binding.base_applied = true;
        }

        self.conditions.replay_into(binding.host.as_mut());
    }

    fn note_late(&self, what: &str) {
        if let Some(binding) = &self.host {
            if binding.base_applied {
                warn!("Statement {} changed after it was flushed to its host; the host will not see it", what);
            }
        }
    }
}
