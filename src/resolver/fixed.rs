use std::collections::BTreeMap;

use crate::error::ResolveError;

use super::{Resolver, Target};

/// In-memory resolver backed by a fixed name → target map.
#[derive(Debug, Clone, Default)]
pub struct FixedResolver {
    targets: BTreeMap<String, Target>,
}

impl FixedResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_target(mut self, name: impl Into<String>, target: Target) -> Self {
        self.targets.insert(name.into(), target);
        self
    }
}

impl Resolver for FixedResolver {
    fn resolve(&self, name: &str) -> Result<Target, ResolveError> {
        self.targets
            .get(name)
            .cloned()
            .ok_or_else(|| ResolveError::NotFound {
                name: name.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_resolver_returns_registered_targets_only() -> Result<(), String> {
        let resolver = FixedResolver::new().with_target("echo", Target::executable("/bin/echo"));
        let target = resolver.resolve("echo").map_err(|err| err.to_string())?;
        if target.program().to_str() != Some("/bin/echo") {
            return Err("Unexpected program".to_owned());
        }
        match resolver.resolve("missing") {
            Err(ResolveError::NotFound { name }) if name == "missing" => Ok(()),
            other => Err(format!("Unexpected result: {:?}", other)),
        }
    }
}
