use super::{AccessLevel::Write, ActionDefinition, ServiceDefinition};

pub(super) const SERVICE: ServiceDefinition = ServiceDefinition::new(
    "iq",
    "AWS IQ",
    "https://docs.aws.amazon.com/IAM/latest/UserGuide/list_awsiq.html",
    ACTIONS,
    &[],
    &[],
);

const ACTIONS: &[ActionDefinition] = &[
    ActionDefinition::new("CreateProject", Write, "https://aws.amazon.com/iq/"),
];
