//! Hardware and data-source abstraction traits
//!
//! These traits define the interface between the rotation logic and the
//! concrete display driver and data providers.

pub mod display;
pub mod provider;

pub use display::{CharDisplay, CharDisplayExt};
pub use provider::{
    provider_text, PlayerState, ProviderError, ProviderText, Providers, TrackMetadata,
    MAX_PROVIDER_TEXT,
};
