//! Cookie session storage.
//!
//! This module provides:
//! - `SessionStore`: save, load, list and remove named sessions in one JSON file
//! - `SessionRecord`: a stored `sp_dc` / `sp_key` cookie pair and its identifier
//!
//! Every call re-reads the file; writes replace the whole file.

pub mod record;
pub mod session;

pub use record::{Cookies, SessionRecord};
pub use session::{SessionStore, DEFAULT_IDENTIFIER};
