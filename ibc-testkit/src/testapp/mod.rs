//! Implementations of the application contexts for [`MockContext`](crate::context::MockContext).
pub mod applications;
