//! Store Context
//!
//! Entity stores are composed once at the application root and handed to the
//! views through Leptos context.

use leptos::prelude::*;

use crate::models::{Car, Dealer};
use crate::store::EntityStore;

/// Get the Car store from context
pub fn use_car_store() -> EntityStore<Car> {
    expect_context::<EntityStore<Car>>()
}

/// Get the Dealer store from context
pub fn use_dealer_store() -> EntityStore<Dealer> {
    expect_context::<EntityStore<Dealer>>()
}
