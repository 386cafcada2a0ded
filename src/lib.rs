#![warn(clippy::all)]
pub(crate) mod arn;
pub mod catalog;
pub(crate) mod condition;
pub(crate) mod effect;
pub(crate) mod error;
pub(crate) mod host;
pub(crate) mod policy_statement;
pub(crate) mod provider;
pub(crate) mod service;
pub mod services;
pub(crate) mod statement;

#[macro_use]
pub(crate) mod serutil;

pub use {
    arn::{ArnScope, ArnScopeBuilder, ArnScopeBuilderError, ArnTemplate},
    condition::{
        op as condop, Condition, ConditionAccumulator, ConditionMap, ConditionOp, ConditionValue, GlobalConditions,
        Operator, OperatorToken, SetQualifier, Variant,
    },
    effect::Effect,
    error::FloydError,
    host::{MemoryHost, StatementHost},
    policy_statement::{HostBinding, PolicyStatement},
    provider::StatementProvider,
    service::ServiceStatement,
    statement::Statement,
    serutil::StringList,
};
