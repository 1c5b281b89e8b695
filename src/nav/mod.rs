mod affordance;
mod bus;
mod controller;
mod location;
mod state;
mod surface;

pub use affordance::{AffordanceKind, Affordances, NavItem};
pub use bus::{PageEvents, Subscription, SubscriptionId};
pub use controller::{IgnoreReason, NavigationController, SwitchOutcome};
pub use location::{Location, SessionLocation, normalize_fragment};
pub use state::{NavigationState, TransitionTicket};
pub use surface::{PageSurface, ScrollBehavior};
