//! Core value types for the convexity kernel.
//!
//! Includes the vector alias (`Vec3`) and its helper functions.

pub mod vec3;
