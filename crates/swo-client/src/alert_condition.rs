//! Operator vocabulary of alert condition trees.
//!
//! Condition nodes carry their operator as a plain string. These helpers map
//! an operator to the node type it belongs to and to the matching
//! [`FilterOperation`].

use std::fmt;

use crate::operations::alerts::FilterOperation;

/// Operator does not belong to any condition node type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("alert operation not supported")]
pub struct UnsupportedOperator(pub String);

/// The `type` of a condition node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertOperatorType {
    AggregationOperator,
    BinaryOperator,
    ConstantValue,
    LogicalOperator,
    AttributeField,
    MetricField,
    QueryField,
    RelationshipOperator,
    RelationshipAggregationOperator,
    ScopeField,
}

impl AlertOperatorType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AggregationOperator => "aggregationOperator",
            Self::BinaryOperator => "binaryOperator",
            Self::ConstantValue => "constantValue",
            Self::LogicalOperator => "logicalOperator",
            Self::AttributeField => "attributeField",
            Self::MetricField => "metricField",
            Self::QueryField => "queryField",
            Self::RelationshipOperator => "relationshipOperator",
            Self::RelationshipAggregationOperator => "relationshipAggregationOperator",
            Self::ScopeField => "scopeField",
        }
    }
}

impl fmt::Display for AlertOperatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! operator_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            pub fn parse(operator: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|op| op.as_str() == operator)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

operator_enum!(
    /// Operators of `aggregationOperator` nodes.
    AlertAggregationOperator {
        Count => "COUNT",
        Min => "MIN",
        Max => "MAX",
        Avg => "AVG",
        Sum => "SUM",
        Last => "LAST",
    }
);

operator_enum!(
    /// Operators of `binaryOperator` nodes.
    AlertBinaryOperator {
        Eq => "=",
        Ne => "!=",
        Gt => ">",
        Lt => "<",
        Ge => ">=",
        Le => "<=",
        In => "IN",
    }
);

operator_enum!(
    /// Operators of `logicalOperator` nodes.
    AlertLogicalOperator {
        And => "AND",
        Or => "OR",
    }
);

/// The node type that `operator` belongs to.
pub fn alert_condition_type(operator: &str) -> Result<AlertOperatorType, UnsupportedOperator> {
    if AlertAggregationOperator::parse(operator).is_some() {
        Ok(AlertOperatorType::AggregationOperator)
    } else if AlertBinaryOperator::parse(operator).is_some() {
        Ok(AlertOperatorType::BinaryOperator)
    } else if AlertLogicalOperator::parse(operator).is_some() {
        Ok(AlertOperatorType::LogicalOperator)
    } else {
        Err(UnsupportedOperator(operator.to_owned()))
    }
}

/// Filter operation for a comparison operator. `IN` has none.
pub fn filter_operation(operator: &str) -> Option<FilterOperation> {
    match AlertBinaryOperator::parse(operator)? {
        AlertBinaryOperator::Eq => Some(FilterOperation::Eq),
        AlertBinaryOperator::Ne => Some(FilterOperation::Ne),
        AlertBinaryOperator::Gt => Some(FilterOperation::Gt),
        AlertBinaryOperator::Ge => Some(FilterOperation::Ge),
        AlertBinaryOperator::Lt => Some(FilterOperation::Lt),
        AlertBinaryOperator::Le => Some(FilterOperation::Le),
        AlertBinaryOperator::In => None,
    }
}
