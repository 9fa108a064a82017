#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

pub mod deep_link;
pub mod error;
pub mod history;
pub mod routable;
pub mod route_definition;

/// Components presenting the router to the user.
pub mod components {
    mod tab_row;
    pub use tab_row::*;
}

mod router_cfg;
mod service;
mod state;

/// A collection of useful items most applications might need.
pub mod prelude {
    pub use crate::components::*;
    pub use crate::deep_link::DeepLinkPattern;
    pub use crate::error::*;
    pub use crate::history::*;
    pub use crate::routable::*;
    pub use crate::route_definition::{ArgumentBinding, RouteTemplate};
    pub use crate::router_cfg::{DeepLinkPolicy, NavigatorConfig};
    pub use crate::service::Navigator;
    pub use crate::state::current_screen;
}
