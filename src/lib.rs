//! MicroSIP bridge
//!
//! A library for merging MicroSIP configuration fragments and exporting
//! Nextcloud address books into the MicroSIP contact list.

pub mod addressbook;
pub mod config;
pub mod contacts;
pub mod dialplan;
pub mod merge;
