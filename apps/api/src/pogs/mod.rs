// Pog resource: validation, storage seam, and the five CRUD handlers.

pub mod extract;
pub mod handlers;
#[cfg(test)]
pub mod mock;
pub mod repository;
pub mod validation;
