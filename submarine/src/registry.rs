use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::vehicle::{Vehicle, VehicleClass};

/// Notifications fanned out to registry subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryEvent {
    VehicleSwitched,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("no vehicle registered for class {0:?}")]
    UnknownVehicle(String),
}

/// Handle returned by [`VehicleRegistry::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(RegistryEvent)>;

/// All vehicles of a session, keyed by class, with exactly one of them active.
///
/// Passed explicitly to whatever drives or displays the active vehicle.
/// Inactive vehicles keep their state, so switching back resumes where they
/// left off.
pub struct VehicleRegistry {
    vehicles: BTreeMap<VehicleClass, Vehicle>,
    current: VehicleClass,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl VehicleRegistry {
    /// Registry holding `initial` as its current vehicle.
    pub fn new(initial: Vehicle) -> Self {
        let current = initial.class().clone();
        let mut vehicles = BTreeMap::new();
        vehicles.insert(current.clone(), initial);
        Self {
            vehicles,
            current,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Add a vehicle, replacing (and returning) any vehicle of the same class.
    /// If the replaced vehicle was current, the new one is current now.
    pub fn insert(&mut self, vehicle: Vehicle) -> Option<Vehicle> {
        debug!(class = %vehicle.class(), "registering vehicle");
        self.vehicles.insert(vehicle.class().clone(), vehicle)
    }

    pub fn contains(&self, class: &str) -> bool {
        self.vehicles.contains_key(class)
    }

    pub fn classes(&self) -> impl Iterator<Item = &VehicleClass> {
        self.vehicles.keys()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn current_class(&self) -> &VehicleClass {
        &self.current
    }

    pub fn current(&self) -> &Vehicle {
        // `current` always names a stored vehicle: it is only assigned from
        // the initial vehicle or after a successful lookup, and entries are
        // never removed.
        &self.vehicles[&self.current]
    }

    pub fn current_mut(&mut self) -> &mut Vehicle {
        let current = &self.current;
        self.vehicles
            .get_mut(current)
            .unwrap_or_else(|| unreachable!("current vehicle {current} missing from registry"))
    }

    pub fn get(&self, class: &str) -> Result<&Vehicle, RegistryError> {
        self.vehicles
            .get(class)
            .ok_or_else(|| RegistryError::UnknownVehicle(class.to_string()))
    }

    pub fn get_mut(&mut self, class: &str) -> Result<&mut Vehicle, RegistryError> {
        self.vehicles
            .get_mut(class)
            .ok_or_else(|| RegistryError::UnknownVehicle(class.to_string()))
    }

    /// Make `class` the active vehicle and notify every subscriber, in
    /// subscription order, before returning. Unknown classes leave the
    /// registry untouched and notify nobody.
    pub fn switch_vehicle(&mut self, class: &str) -> Result<(), RegistryError> {
        let Some((next, _)) = self.vehicles.get_key_value(class) else {
            return Err(RegistryError::UnknownVehicle(class.to_string()));
        };
        debug!(from = %self.current, to = %next, "switching vehicle");
        self.current = next.clone();
        for (_, observer) in self.observers.iter_mut() {
            observer(RegistryEvent::VehicleSwitched);
        }
        Ok(())
    }

    pub fn subscribe(&mut self, observer: impl FnMut(RegistryEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns `false` if `id` was not subscribed (or already removed).
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }
}

impl fmt::Debug for VehicleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VehicleRegistry")
            .field("vehicles", &self.vehicles.keys().collect::<Vec<_>>())
            .field("current", &self.current)
            .field("observers", &self.observers.len())
            .finish()
    }
}
