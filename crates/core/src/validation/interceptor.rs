//! Method validation interceptor.
//!
//! Wraps a business method so that its argument is validated (collect-all)
//! under the caller's rule group before the call, and its return value is
//! validated under the same group after it.

use super::constrained::{collect, Constrained};
use super::group::{CallContext, RuleGroup};
use super::rules::{ConstraintViolations, RuleOptions, ViolationTarget};

#[derive(Debug, Clone, Copy, Default)]
pub struct MethodValidator {
    options: RuleOptions,
}

impl MethodValidator {
    pub fn new(options: RuleOptions) -> Self {
        Self { options }
    }

    /// Invoke `target` between parameter and return-value validation.
    ///
    /// Without a call context the lowest-privilege group is used. `target`
    /// receives the resolved group so the business logic runs under the same
    /// group the parameters were checked against.
    pub fn invoke<A, R, E, F>(
        &self,
        method: &'static str,
        ctx: Option<&CallContext>,
        arg: A,
        target: F,
    ) -> Result<R, E>
    where
        A: Constrained,
        R: Constrained,
        E: From<ConstraintViolations>,
        F: FnOnce(RuleGroup, A) -> Result<R, E>,
    {
        let group = ctx.map_or(RuleGroup::Default, CallContext::rule_group);

        self.validate(method, ViolationTarget::Parameters, group, &arg)?;
        let value = target(group, arg)?;
        self.validate(method, ViolationTarget::ReturnValue, group, &value)?;
        Ok(value)
    }

    fn validate<T: Constrained>(
        &self,
        method: &'static str,
        target: ViolationTarget,
        group: RuleGroup,
        value: &T,
    ) -> Result<(), ConstraintViolations> {
        collect(method, target, group, &self.options, value).inspect_err(|err| {
            tracing::error!(
                method,
                %target,
                ?group,
                count = err.len(),
                detail = %err.detail(),
                "critical violation"
            );
        })
    }
}
