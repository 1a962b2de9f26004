use std::collections::HashSet;

use crate::domain::user::value_objects::Capability;

pub trait CapabilitySpecification {
    fn is_satisfied_by(&self, capabilities: &HashSet<Capability>) -> bool;
}

pub struct HasCapability<'a> {
    pub resource: &'a str,
    pub action: &'a str,
}

impl CapabilitySpecification for HasCapability<'_> {
    fn is_satisfied_by(&self, capabilities: &HashSet<Capability>) -> bool {
        capabilities
            .iter()
            .any(|cap| cap.matches(self.resource, self.action))
    }
}
