//! # Resource Registry
//!
//! The catalogue of resources the service manages. Each entry is a
//! [`ResourceDescriptor`]: the resource's storage name, its URL slug, and a
//! set of type-erased hooks (construct, merge-decode, validate)
//! monomorphized from the concrete entity type at registration.
//!
//! The registry is keyed by string, not by a closed enum: adding a resource
//! is one `register` call, and tests inject fakes the same way. It is built
//! once at startup and read-only afterwards.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use ams_core::model::{
    Company, ComplianceDocument, Equipment, EquipmentCategory, EquipmentDoc, Inventory,
    MaintenanceHistory, MaintenancePartsUsage, MaintenanceSchedule, MaintenanceType,
    Notification, PurchaseOrder, Role, ServiceProvider, Supplier, User,
};
use ams_core::{codec, validate, validate_except, CodecError, Validatable, ValidationError};

/// Store-assigned fields, excluded from partial-update validation.
const SERVER_FIELDS: &[&str] = &["ID", "CreatedAt", "UpdatedAt"];

/// Lookup failure: the name or slug matches no registered resource.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown resource {0:?}")]
pub struct UnknownResource(pub String);

/// A registered resource: identity plus the hooks the generic pipeline
/// needs to operate on its entities without knowing the concrete type.
pub struct ResourceDescriptor {
    name: &'static str,
    route: &'static str,
    new_instance: fn() -> Value,
    new_collection: fn() -> Vec<Value>,
    merge: fn(&Value, &[u8]) -> Result<Value, CodecError>,
    validate: fn(&Value) -> Result<(), ValidationError>,
    validate_partial: fn(&Value) -> Result<(), ValidationError>,
}

impl ResourceDescriptor {
    /// Build a descriptor for entity type `T`.
    ///
    /// `name` is the storage table identifier; `route` is the URL path
    /// segment. Both must be unique across the registry.
    pub fn of<T>(name: &'static str, route: &'static str) -> Self
    where
        T: Validatable + Serialize + DeserializeOwned + Default + 'static,
    {
        Self {
            name,
            route,
            new_instance: new_instance_erased::<T>,
            new_collection: Vec::new,
            merge: merge_erased::<T>,
            validate: validate_erased::<T>,
            validate_partial: validate_partial_erased::<T>,
        }
    }

    /// Storage table identifier, e.g. `"equipment_categories"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// URL path segment, e.g. `"equipment-categories"`.
    pub fn route(&self) -> &'static str {
        self.route
    }

    /// A fresh, zero-valued entity. Every call returns an independent value.
    pub fn new_instance(&self) -> Value {
        (self.new_instance)()
    }

    /// A fresh, empty entity collection. Every call returns an independent
    /// value.
    pub fn new_collection(&self) -> Vec<Value> {
        (self.new_collection)()
    }

    /// Decode a payload overlaid onto `base` (shallow field merge), then
    /// canonicalize through the concrete entity type. Decode failures are
    /// client errors.
    pub fn merge(&self, base: &Value, payload: &[u8]) -> Result<Value, CodecError> {
        (self.merge)(base, payload)
    }

    /// Check every declared field rule, reporting the first violation.
    pub fn validate(&self, entity: &Value) -> Result<(), ValidationError> {
        (self.validate)(entity)
    }

    /// Like [`validate`](Self::validate), skipping store-assigned fields.
    /// Used by partial-update flows.
    pub fn validate_partial(&self, entity: &Value) -> Result<(), ValidationError> {
        (self.validate_partial)(entity)
    }
}

impl std::fmt::Debug for ResourceDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceDescriptor")
            .field("name", &self.name)
            .field("route", &self.route)
            .finish_non_exhaustive()
    }
}

fn new_instance_erased<T: Serialize + Default>() -> Value {
    // Entities are plain data records; serialization cannot fail.
    codec::encode(&T::default()).unwrap_or(Value::Null)
}

fn merge_erased<T>(base: &Value, payload: &[u8]) -> Result<Value, CodecError>
where
    T: Serialize + DeserializeOwned,
{
    let entity: T = codec::decode_merged(base, payload)?;
    codec::encode(&entity)
}

fn validate_erased<T>(entity: &Value) -> Result<(), ValidationError>
where
    T: Validatable + DeserializeOwned + 'static,
{
    // A value that does not fit the concrete type here is a descriptor
    // configuration fault, not a data problem: treated as no violation
    // found, matching the legacy validator's handling of internal faults.
    match serde_json::from_value::<T>(entity.clone()) {
        Ok(typed) => validate(&typed),
        Err(_) => Ok(()),
    }
}

fn validate_partial_erased<T>(entity: &Value) -> Result<(), ValidationError>
where
    T: Validatable + DeserializeOwned + 'static,
{
    match serde_json::from_value::<T>(entity.clone()) {
        Ok(typed) => validate_except(&typed, SERVER_FIELDS),
        Err(_) => Ok(()),
    }
}

/// Ordered, read-only catalogue of resource descriptors.
pub struct Registry {
    descriptors: Vec<ResourceDescriptor>,
    by_name: BTreeMap<&'static str, usize>,
    by_route: BTreeMap<&'static str, usize>,
}

impl Registry {
    /// An empty registry. Production code wants [`Registry::builtin`].
    pub fn empty() -> Self {
        Self {
            descriptors: Vec::new(),
            by_name: BTreeMap::new(),
            by_route: BTreeMap::new(),
        }
    }

    /// The full resource catalogue of the service.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(ResourceDescriptor::of::<Company>("companies", "companies"));
        registry.register(ResourceDescriptor::of::<ComplianceDocument>(
            "compliance_documents",
            "compliance-documents",
        ));
        registry.register(ResourceDescriptor::of::<EquipmentCategory>(
            "equipment_categories",
            "equipment-categories",
        ));
        registry.register(ResourceDescriptor::of::<EquipmentDoc>(
            "equipment_docs",
            "equipment-docs",
        ));
        registry.register(ResourceDescriptor::of::<Equipment>("equipment", "equipment"));
        registry.register(ResourceDescriptor::of::<Inventory>("inventory", "inventory"));
        registry.register(ResourceDescriptor::of::<MaintenanceHistory>(
            "maintenance_history",
            "maintenance-history",
        ));
        registry.register(ResourceDescriptor::of::<MaintenancePartsUsage>(
            "maintenance_parts_usage",
            "maintenance-parts-usage",
        ));
        registry.register(ResourceDescriptor::of::<MaintenanceSchedule>(
            "maintenance_schedule",
            "maintenance-schedule",
        ));
        registry.register(ResourceDescriptor::of::<MaintenanceType>(
            "maintenance_types",
            "maintenance-types",
        ));
        registry.register(ResourceDescriptor::of::<Notification>(
            "notifications",
            "notifications",
        ));
        registry.register(ResourceDescriptor::of::<PurchaseOrder>(
            "purchase_orders",
            "purchase-orders",
        ));
        registry.register(ResourceDescriptor::of::<Role>("roles", "roles"));
        registry.register(ResourceDescriptor::of::<ServiceProvider>(
            "service_providers",
            "service-providers",
        ));
        registry.register(ResourceDescriptor::of::<Supplier>("suppliers", "suppliers"));
        registry.register(ResourceDescriptor::of::<User>("users", "users"));
        registry
    }

    /// Add a descriptor.
    ///
    /// # Panics
    ///
    /// Panics if the name or route is already registered — registration
    /// happens once at startup, and a duplicate is a programming error.
    pub fn register(&mut self, descriptor: ResourceDescriptor) {
        assert!(
            !self.by_name.contains_key(descriptor.name),
            "duplicate resource name {:?}",
            descriptor.name
        );
        assert!(
            !self.by_route.contains_key(descriptor.route),
            "duplicate resource route {:?}",
            descriptor.route
        );
        let index = self.descriptors.len();
        self.by_name.insert(descriptor.name, index);
        self.by_route.insert(descriptor.route, index);
        self.descriptors.push(descriptor);
    }

    /// Look up a descriptor by storage name.
    pub fn resolve(&self, name: &str) -> Result<&ResourceDescriptor, UnknownResource> {
        self.by_name
            .get(name)
            .map(|&i| &self.descriptors[i])
            .ok_or_else(|| UnknownResource(name.to_string()))
    }

    /// Look up a descriptor by URL path segment.
    pub fn resolve_route(&self, slug: &str) -> Result<&ResourceDescriptor, UnknownResource> {
        self.by_route
            .get(slug)
            .map(|&i| &self.descriptors[i])
            .ok_or_else(|| UnknownResource(slug.to_string()))
    }

    /// All descriptors, in registration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &ResourceDescriptor> {
        self.descriptors.iter()
    }

    /// Number of registered resources.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
