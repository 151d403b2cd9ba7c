//! Registry of record repositories keyed by resource type.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use mockable::Clock;

use crate::domain::resource::{Resource, ResourceVisitor, visit_resources};

use super::record_repository::{InMemoryRecordRepository, RecordRepository};

/// One [`RecordRepository`] per resource, looked up by record type.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use marketplace::domain::ports::{InMemoryRecordRepository, RecordPorts, RecordRepository};
/// use marketplace::domain::records::User;
/// use mockable::DefaultClock;
///
/// let repo: Arc<dyn RecordRepository<User>> =
///     Arc::new(InMemoryRecordRepository::<User>::new(Arc::new(DefaultClock)));
/// let ports = RecordPorts::default().with::<User>(repo);
/// assert!(ports.get::<User>().is_some());
/// ```
#[derive(Clone, Default)]
pub struct RecordPorts {
    ports: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl RecordPorts {
    /// Register the repository for `E`, replacing any previous one.
    pub fn insert<E: Resource>(&mut self, repository: Arc<dyn RecordRepository<E>>) {
        self.ports.insert(TypeId::of::<E>(), Arc::new(repository));
    }

    /// Builder form of [`RecordPorts::insert`].
    #[must_use]
    pub fn with<E: Resource>(mut self, repository: Arc<dyn RecordRepository<E>>) -> Self {
        self.insert(repository);
        self
    }

    /// Repository registered for `E`, if any.
    pub fn get<E: Resource>(&self) -> Option<Arc<dyn RecordRepository<E>>> {
        self.ports
            .get(&TypeId::of::<E>())
            .and_then(|port| port.downcast_ref::<Arc<dyn RecordRepository<E>>>())
            .cloned()
    }

    /// Number of registered repositories.
    pub fn len(&self) -> usize {
        self.ports.len()
    }

    /// Whether no repository is registered.
    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }
}

impl std::fmt::Debug for RecordPorts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordPorts")
            .field("registered", &self.ports.len())
            .finish()
    }
}

struct InMemoryWiring {
    clock: Arc<dyn Clock>,
    ports: RecordPorts,
}

impl ResourceVisitor for InMemoryWiring {
    fn visit<E: Resource>(&mut self) {
        self.ports
            .insert::<E>(Arc::new(InMemoryRecordRepository::<E>::new(self.clock.clone())));
    }
}

/// In-memory repositories for every resource, sharing one clock.
pub fn in_memory_record_ports(clock: Arc<dyn Clock>) -> RecordPorts {
    let mut wiring = InMemoryWiring {
        clock,
        ports: RecordPorts::default(),
    };
    visit_resources(&mut wiring);
    wiring.ports
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::{NewLanguage, ServiceCategory, User};
    use crate::domain::resource::ResourceKind;
    use crate::test_support::fixed_record_ports;

    #[test]
    fn in_memory_ports_cover_every_resource() {
        let ports = fixed_record_ports();

        assert_eq!(ports.len(), ResourceKind::ALL.len());
        assert!(ports.get::<User>().is_some());
        assert!(ports.get::<ServiceCategory>().is_some());
    }

    #[test]
    fn empty_ports_return_none() {
        let ports = RecordPorts::default();

        assert!(ports.is_empty());
        assert!(ports.get::<User>().is_none());
    }

    #[tokio::test]
    async fn registered_repositories_are_shared_between_clones() {
        let ports = fixed_record_ports();
        let copy = ports.clone();
        let languages = ports
            .get::<crate::domain::records::Language>()
            .expect("languages registered");

        languages
            .insert(NewLanguage {
                code: "en".to_owned(),
                name: "English".to_owned(),
            })
            .await
            .expect("insert");

        let listed = copy
            .get::<crate::domain::records::Language>()
            .expect("languages registered")
            .list()
            .await
            .expect("list");
        assert_eq!(listed.len(), 1);
    }
}
