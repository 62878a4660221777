//! Entry points for `list` and `create`, with optional interception.
//!
//! When a [`MethodValidator`] is installed every call goes through it;
//! otherwise the caller is expected to have validated the input already
//! (for example while extracting the request body).

use super::constraints::KeyFilter;
use super::request::AssetCreateRequest;
use super::response::AssetResponse;
use super::service::AssetService;
use crate::error::CoreError;
use crate::validation::group::{CallContext, RuleGroup};
use crate::validation::interceptor::MethodValidator;

pub struct AssetResource {
    service: AssetService,
    interceptor: Option<MethodValidator>,
}

impl AssetResource {
    pub fn new(service: AssetService, interceptor: Option<MethodValidator>) -> Self {
        Self {
            service,
            interceptor,
        }
    }

    pub fn is_intercepted(&self) -> bool {
        self.interceptor.is_some()
    }

    pub fn service(&self) -> &AssetService {
        &self.service
    }

    pub fn list(
        &self,
        ctx: Option<&CallContext>,
        filter: KeyFilter,
    ) -> Result<Vec<AssetResponse>, CoreError> {
        match &self.interceptor {
            Some(validator) => {
                validator.invoke("list", ctx, filter, |_, filter| self.service.list(&filter))
            }
            None => self.service.list(&filter),
        }
    }

    pub fn create(
        &self,
        ctx: Option<&CallContext>,
        request: AssetCreateRequest,
    ) -> Result<AssetResponse, CoreError> {
        match &self.interceptor {
            Some(validator) => validator.invoke("create", ctx, request, |group, request| {
                self.service.create(group, &request)
            }),
            None => {
                let group = ctx.map_or(RuleGroup::Default, CallContext::rule_group);
                self.service.create(group, &request)
            }
        }
    }
}
