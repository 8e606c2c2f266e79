mod plan_listeners;

pub use plan_listeners::{plan_listeners, ListenerPlan};
