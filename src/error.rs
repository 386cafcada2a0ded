use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// Errors raised by the catalog-checked builders.
///
/// The condition accumulator itself never fails: keys, values, and operator tokens are passed through as given.
#[derive(Debug, Eq, PartialEq)]
pub enum FloydError {
    InvalidArnParameters(String),
    InvalidConditionOperator(String),
    InvalidPattern(String),
    UnknownAction(String),
    UnknownConditionKey(String),
    UnknownResourceType(String),
    UnknownService(String),
}

impl Display for FloydError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::InvalidArnParameters(template) => write!(f, "Invalid ARN parameters for template: {}", template),
            Self::InvalidConditionOperator(operator) => write!(f, "Invalid condition operator: {}", operator),
            Self::InvalidPattern(pattern) => write!(f, "Invalid action pattern: {}", pattern),
            Self::UnknownAction(action) => write!(f, "Unknown action: {}", action),
            Self::UnknownConditionKey(key) => write!(f, "Unknown condition key: {}", key),
            Self::UnknownResourceType(resource_type) => write!(f, "Unknown resource type: {}", resource_type),
            Self::UnknownService(prefix) => write!(f, "Unknown service: {}", prefix),
        }
    }
}

impl Error for FloydError {}

#[cfg(test)]
mod tests {
    use {
        crate::FloydError,
        pretty_assertions::{assert_eq, assert_ne},
    };

    #[test_log::test]
    fn test_display() {
        let _ = format!("{:?}", FloydError::UnknownAction("ecr:Foo".to_string()));
        assert_eq!(FloydError::UnknownAction("ecr:Foo".to_string()).to_string(), "Unknown action: ecr:Foo");
        assert_eq!(
            FloydError::InvalidConditionOperator("StringSorta".to_string()).to_string(),
            "Invalid condition operator: StringSorta"
        );
        assert_eq!(
            FloydError::InvalidArnParameters("arn:${Partition}:ecr:${Region}:${Account}:repository/${RepositoryName}".to_string())
                .to_string(),
            "Invalid ARN parameters for template: arn:${Partition}:ecr:${Region}:${Account}:repository/${RepositoryName}"
        );
        assert_eq!(FloydError::InvalidPattern("(".to_string()).to_string(), "Invalid action pattern: (");
        assert_eq!(FloydError::UnknownConditionKey("ecr:Nope".to_string()).to_string(), "Unknown condition key: ecr:Nope");
        assert_eq!(FloydError::UnknownResourceType("ecr:bucket".to_string()).to_string(), "Unknown resource type: ecr:bucket");
        assert_eq!(FloydError::UnknownService("nope".to_string()).to_string(), "Unknown service: nope");
    }

    #[test_log::test]
    fn test_eq() {
        let e1a = FloydError::UnknownAction("foo".to_string());
        let e1b = FloydError::UnknownAction("foo".to_string());
        let e2 = FloydError::UnknownService("foo".to_string());
        let e3 = FloydError::UnknownAction("bar".to_string());

        assert_eq!(e1a, e1b);
        assert_ne!(e1a, e2);
        assert_ne!(e1a, e3);
        assert_ne!(e2, e3);
    }
}
