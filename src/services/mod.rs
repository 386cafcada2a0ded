//! Typed statement builders for individual services.
//!
//! Each builder wraps a [PolicyStatement](crate::PolicyStatement) bound to the service's prefix and adds one `to_*`
//! method per action, plus `on_*` methods for the service's resource types and `if_*` methods for its condition
//! keys.

/// Declare a typed builder with one `to_*` method per action.
macro_rules! service_actions {
    (
        $(#[$meta:meta])*
        $name:ident, $prefix:literal, {
            $($method:ident => $action:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name {
            statement: $crate::PolicyStatement,
        }

        impl $name {
            /// The action prefix of this service.
            pub const PREFIX: &'static str = $prefix;

            pub fn new() -> Self {
                Self {
                    statement: $crate::PolicyStatement::new($prefix),
                }
            }

            pub fn with_sid<S: Into<String>>(sid: S) -> Self {
                Self {
                    statement: $crate::PolicyStatement::with_sid($prefix, sid),
                }
            }

            /// A builder whose statement is embedded in `host`.
            pub fn integrated(host: Box<dyn $crate::StatementHost>) -> Self {
                Self {
                    statement: $crate::PolicyStatement::integrated($prefix, host),
                }
            }

            $(
                #[doc = concat!("Grant `", $prefix, ":", $action, "`.")]
                pub fn $method(&mut self) -> &mut Self {
                    self.statement.add_action($action);
                    self
                }
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::StatementProvider for $name {
            #[inline]
            fn statement(&self) -> &$crate::PolicyStatement {
                &self.statement
            }

            #[inline]
            fn statement_mut(&mut self) -> &mut $crate::PolicyStatement {
                &mut self.statement
            }
        }
    };
}

/// Render a resource ARN from the service's catalog template and add it to `statement`.
fn add_catalog_resource(
    statement: &mut crate::PolicyStatement,
    prefix: &str,
    resource_type: &str,
    scope: &crate::ArnScope,
    ids: &[&str],
) {
    let arn = crate::catalog::service(prefix)
        .and_then(|service| service.resource_type(resource_type))
        .ok_or_else(|| crate::FloydError::UnknownResourceType(format!("{}:{}", prefix, resource_type)))
        .and_then(|definition| definition.arn().render(scope, ids));

    match arn {
        Ok(arn) => {
            statement.add_resource(&arn);
        }
        Err(e) => log::error!("Failed to add {} resource: {}", prefix, e),
    }
}

mod account;
mod ecr;
mod emr_containers;
mod glacier;
mod networkmanager;

pub use {account::Account, ecr::Ecr, emr_containers::EmrContainers, glacier::Glacier, networkmanager::NetworkManager};
