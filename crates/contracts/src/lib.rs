//! Wire contracts shared between the resume matching service and the frontend.

pub mod usecases;
