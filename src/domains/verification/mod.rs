//! Verification email domain
//!
//! A single remote-callable operation: take a recipient, a display name and a
//! previously generated verification code, render the fixed GateGuard HTML
//! notification and dispatch it through the email transport.

pub mod model;
pub mod rest;
pub mod service;
pub mod template;
