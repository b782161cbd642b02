#![deny(clippy::all)]
#![forbid(unsafe_code)]

//! Typed access to the Minecraft server and player metadata API.
//!
//! This crate bundles the [endpoint client](mcutils_client) and the [data types](mcutils_types)
//! and adds the layered [configuration](config) to build a client for a deployment.

pub mod config;

pub use mcutils_client as client;
pub use mcutils_types as types;

// reexport the most used items
pub use mcutils_client::{
    DEFAULT_ENDPOINT, Error, HttpTransport, McUtilsClient, Outcome, SkinPartOptions, Transport,
};
pub use mcutils_types::{ErrorResponse, ImageFormat, Platform};
