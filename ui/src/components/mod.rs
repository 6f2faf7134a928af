//! The components module contains the shared building blocks of the object view:
//! the action bar entries, icons, and thin wrappers around Pico.css elements.
pub mod favorite_action;
pub mod icon;
pub mod object_action;
pub mod pico;
