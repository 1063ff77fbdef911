//! Domain services used by the page and API routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the listing and submission logic so route handlers
//! stay focused on extracting input and choosing a response.

pub mod contact;
pub mod flights;
