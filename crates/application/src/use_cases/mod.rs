pub mod dns;
pub mod listeners;

pub use dns::{resolve, AnswerQueryUseCase, ZoneResolver};
pub use listeners::{plan_listeners, ListenerPlan};
