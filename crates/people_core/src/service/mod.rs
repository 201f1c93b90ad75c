//! Use-case services over the repository layer.

pub mod people_service;
